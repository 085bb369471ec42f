use super::*;

/// Event tags, one byte each, prefixed to the serialized event body.
pub const ITEM_LISTED_TAG: u8 = 0;
pub const ITEM_SOLD_TAG: u8 = 1;
pub const ITEM_CANCELLED_TAG: u8 = 2;
pub const AUCTION_CREATED_TAG: u8 = 3;
pub const BID_PLACED_TAG: u8 = 4;
pub const AUCTION_FINALIZED_TAG: u8 = 5;
pub const AUCTION_CANCELLED_TAG: u8 = 6;

#[derive(Debug, Serial)]
pub struct ItemListedEvent<'a> {
    pub listing: ListingId,
    pub token: TokenRef,
    pub seller: &'a AccountAddress,
    pub price: Amount,
}

#[derive(Debug, Serial)]
pub struct ItemSoldEvent<'a> {
    pub listing: ListingId,
    pub token: TokenRef,
    pub seller: &'a AccountAddress,
    pub buyer: &'a AccountAddress,
    pub price: Amount,
    /// How the price was distributed between platform, royalty beneficiary
    /// and seller.
    pub split: FeeSplit,
}

#[derive(Debug, Serial)]
pub struct ItemCancelledEvent<'a> {
    pub listing: ListingId,
    pub token: TokenRef,
    pub seller: &'a AccountAddress,
}

#[derive(Debug, Serial)]
pub struct AuctionCreatedEvent<'a> {
    pub auction: AuctionId,
    pub token: TokenRef,
    pub seller: &'a AccountAddress,
    pub starting_price: Amount,
    pub end: Timestamp,
}

#[derive(Debug, Serial)]
pub struct BidPlacedEvent<'a> {
    pub auction: AuctionId,
    pub bidder: &'a AccountAddress,
    pub amount: Amount,
}

#[derive(Debug, Serial)]
pub struct AuctionFinalizedEvent<'a> {
    pub auction: AuctionId,
    pub token: TokenRef,
    pub seller: &'a AccountAddress,
    /// Winning bid, if any bid was placed.
    pub winning_bid: &'a Option<Bid>,
    /// How the winning bid was distributed. All zero without a winner.
    pub split: FeeSplit,
}

#[derive(Debug, Serial)]
pub struct AuctionCancelledEvent<'a> {
    pub auction: AuctionId,
    pub token: TokenRef,
    pub seller: &'a AccountAddress,
}

/// Tagged event to be serialized for the event log.
#[derive(Debug)]
pub enum MarketEvent<'a> {
    ItemListed(ItemListedEvent<'a>),
    ItemSold(ItemSoldEvent<'a>),
    ItemCancelled(ItemCancelledEvent<'a>),
    AuctionCreated(AuctionCreatedEvent<'a>),
    BidPlaced(BidPlacedEvent<'a>),
    AuctionFinalized(AuctionFinalizedEvent<'a>),
    AuctionCancelled(AuctionCancelledEvent<'a>),
}

impl<'a> MarketEvent<'a> {
    pub fn listed(
        listing: ListingId,
        token: TokenRef,
        seller: &'a AccountAddress,
        price: Amount,
    ) -> Self {
        Self::ItemListed(ItemListedEvent {
            listing,
            token,
            seller,
            price,
        })
    }

    pub fn sold(
        listing: ListingId,
        token: TokenRef,
        seller: &'a AccountAddress,
        buyer: &'a AccountAddress,
        price: Amount,
        split: FeeSplit,
    ) -> Self {
        Self::ItemSold(ItemSoldEvent {
            listing,
            token,
            seller,
            buyer,
            price,
            split,
        })
    }

    pub fn cancelled(listing: ListingId, token: TokenRef, seller: &'a AccountAddress) -> Self {
        Self::ItemCancelled(ItemCancelledEvent {
            listing,
            token,
            seller,
        })
    }

    pub fn auction_created(
        auction: AuctionId,
        token: TokenRef,
        seller: &'a AccountAddress,
        starting_price: Amount,
        end: Timestamp,
    ) -> Self {
        Self::AuctionCreated(AuctionCreatedEvent {
            auction,
            token,
            seller,
            starting_price,
            end,
        })
    }

    pub fn bid(auction: AuctionId, bidder: &'a AccountAddress, amount: Amount) -> Self {
        Self::BidPlaced(BidPlacedEvent {
            auction,
            bidder,
            amount,
        })
    }

    pub fn finalized(
        auction: AuctionId,
        token: TokenRef,
        seller: &'a AccountAddress,
        winning_bid: &'a Option<Bid>,
        split: FeeSplit,
    ) -> Self {
        Self::AuctionFinalized(AuctionFinalizedEvent {
            auction,
            token,
            seller,
            winning_bid,
            split,
        })
    }

    pub fn auction_cancelled(
        auction: AuctionId,
        token: TokenRef,
        seller: &'a AccountAddress,
    ) -> Self {
        Self::AuctionCancelled(AuctionCancelledEvent {
            auction,
            token,
            seller,
        })
    }
}

impl<'a> Serial for MarketEvent<'a> {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            MarketEvent::ItemListed(event) => {
                out.write_u8(ITEM_LISTED_TAG)?;
                event.serial(out)
            }
            MarketEvent::ItemSold(event) => {
                out.write_u8(ITEM_SOLD_TAG)?;
                event.serial(out)
            }
            MarketEvent::ItemCancelled(event) => {
                out.write_u8(ITEM_CANCELLED_TAG)?;
                event.serial(out)
            }
            MarketEvent::AuctionCreated(event) => {
                out.write_u8(AUCTION_CREATED_TAG)?;
                event.serial(out)
            }
            MarketEvent::BidPlaced(event) => {
                out.write_u8(BID_PLACED_TAG)?;
                event.serial(out)
            }
            MarketEvent::AuctionFinalized(event) => {
                out.write_u8(AUCTION_FINALIZED_TAG)?;
                event.serial(out)
            }
            MarketEvent::AuctionCancelled(event) => {
                out.write_u8(AUCTION_CANCELLED_TAG)?;
                event.serial(out)
            }
        }
    }
}
