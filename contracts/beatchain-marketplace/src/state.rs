use super::*;

/// Lifecycle of a fixed price listing. Terminal records are kept so that
/// listing ids stay resolvable forever.
#[derive(Debug, Clone, Copy, Serialize, SchemaType, PartialEq, Eq)]
pub enum ListingStatus {
    Active,
    Sold,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, SchemaType, PartialEq, Eq)]
pub struct Listing {
    pub token: TokenRef,
    pub seller: AccountAddress,
    pub price: Amount,
    /// Platform fee snapshotted when the listing was created.
    pub platform_fee: BasisPoints,
    /// Royalty read from the factory when the listing was created.
    pub royalty: Royalty,
    pub status: ListingStatus,
}

#[derive(Debug, Clone, Copy, Serialize, SchemaType, PartialEq, Eq)]
pub enum AuctionStatus {
    Open,
    Finalized,
}

/// Escrowed highest bid.
#[derive(Debug, Clone, Copy, Serialize, SchemaType, PartialEq, Eq)]
pub struct Bid {
    pub bidder: AccountAddress,
    pub amount: Amount,
}

#[derive(Debug, Clone, Serialize, SchemaType, PartialEq, Eq)]
pub struct Auction {
    pub token: TokenRef,
    pub seller: AccountAddress,
    pub starting_price: Amount,
    /// Bids at or after this time are rejected. Expiry is detected when
    /// someone calls in, never driven by a timer.
    pub end: Timestamp,
    /// Platform fee snapshotted when the auction was created.
    pub platform_fee: BasisPoints,
    /// Royalty read from the factory when the auction was created.
    pub royalty: Royalty,
    pub highest_bid: Option<Bid>,
    pub status: AuctionStatus,
}

/// Which trade currently holds a token. At most one entry per token exists
/// at any time.
#[derive(Debug, Clone, Copy, Serialize, SchemaType, PartialEq, Eq)]
pub enum ActiveTrade {
    Listing(ListingId),
    Auction(AuctionId),
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Authority module for administrative rights management.
    pub authority: Authority<S>,
    /// Platform fee applied to trades created from now on.
    pub platform_fee: BasisPoints,
    /// Platform fee receiver account.
    pub beneficiary: AccountAddress,
    /// Factory contract holding the token registry.
    pub factory: ContractAddress,
    /// Listing id handed out next. Starts at 1, never reused.
    pub next_listing_id: ListingId,
    /// Auction id handed out next. Starts at 1, never reused.
    pub next_auction_id: AuctionId,
    pub listings: StateMap<ListingId, Listing, S>,
    pub auctions: StateMap<AuctionId, Auction, S>,
    /// Exclusivity index from token to its single active trade.
    pub trading: StateMap<TokenRef, ActiveTrade, S>,
}

impl<S: HasStateApi> State<S> {
    /// Create a new state with no trades.
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        factory: ContractAddress,
        beneficiary: AccountAddress,
        platform_fee: BasisPoints,
        origin: AccountAddress,
    ) -> Self {
        State {
            authority: Authority::new(state_builder, Address::Account(origin)),
            platform_fee,
            beneficiary,
            factory,
            next_listing_id: 1,
            next_auction_id: 1,
            listings: state_builder.new_map(),
            auctions: state_builder.new_map(),
            trading: state_builder.new_map(),
        }
    }

    /// Record a new listing, snapshotting the current platform fee.
    pub fn list(
        &mut self,
        token: TokenRef,
        seller: AccountAddress,
        price: Amount,
        royalty: Royalty,
    ) -> Result<ListingId, CustomContractError> {
        ensure!(
            self.trading.get(&token).is_none(),
            CustomContractError::AlreadyListedOrAuctioned
        );

        let id = self.next_listing_id;
        self.next_listing_id += 1;

        self.listings.insert(
            id,
            Listing {
                token,
                seller,
                price,
                platform_fee: self.platform_fee,
                royalty,
                status: ListingStatus::Active,
            },
        );
        self.trading.insert(token, ActiveTrade::Listing(id));

        Ok(id)
    }

    /// Mark a listing sold and release the token for future trades.
    /// Returns the listing as it was when created, for settlement.
    pub fn buy(&mut self, id: ListingId, paid: Amount) -> Result<Listing, CustomContractError> {
        let mut listing = self
            .listings
            .get_mut(&id)
            .ok_or(CustomContractError::UnknownListing)?;

        ensure!(
            listing.status == ListingStatus::Active,
            CustomContractError::NotActive
        );
        ensure!(paid >= listing.price, CustomContractError::InsufficientPayment);

        listing.status = ListingStatus::Sold;
        let snapshot = listing.clone();
        drop(listing);

        self.trading.remove(&snapshot.token);

        Ok(snapshot)
    }

    /// Mark a listing cancelled and release the token for future trades.
    pub fn cancel_listing(
        &mut self,
        id: ListingId,
        sender: AccountAddress,
    ) -> Result<Listing, CustomContractError> {
        let mut listing = self
            .listings
            .get_mut(&id)
            .ok_or(CustomContractError::UnknownListing)?;

        ensure!(
            listing.status == ListingStatus::Active,
            CustomContractError::NotActive
        );
        ensure!(listing.seller == sender, CustomContractError::NotSeller);

        listing.status = ListingStatus::Cancelled;
        let snapshot = listing.clone();
        drop(listing);

        self.trading.remove(&snapshot.token);

        Ok(snapshot)
    }

    /// Record a new auction, snapshotting the current platform fee.
    pub fn create_auction(
        &mut self,
        token: TokenRef,
        seller: AccountAddress,
        starting_price: Amount,
        end: Timestamp,
        royalty: Royalty,
    ) -> Result<AuctionId, CustomContractError> {
        ensure!(
            self.trading.get(&token).is_none(),
            CustomContractError::AlreadyListedOrAuctioned
        );

        let id = self.next_auction_id;
        self.next_auction_id += 1;

        self.auctions.insert(
            id,
            Auction {
                token,
                seller,
                starting_price,
                end,
                platform_fee: self.platform_fee,
                royalty,
                highest_bid: None,
                status: AuctionStatus::Open,
            },
        );
        self.trading.insert(token, ActiveTrade::Auction(id));

        Ok(id)
    }

    /// Accept a bid and return the escrowed bid it displaces, which the
    /// caller must refund within the same transaction.
    pub fn bid(
        &mut self,
        id: AuctionId,
        bidder: AccountAddress,
        amount: Amount,
        now: Timestamp,
    ) -> Result<Option<Bid>, CustomContractError> {
        let mut auction = self
            .auctions
            .get_mut(&id)
            .ok_or(CustomContractError::UnknownAuction)?;

        // A terminal auction rejects bids as ended even when its end time
        // lies in the future, which happens after a no-bid cancel.
        ensure!(
            auction.status == AuctionStatus::Open,
            CustomContractError::AuctionEnded
        );
        ensure!(now < auction.end, CustomContractError::AuctionEnded);
        ensure!(auction.seller != bidder, CustomContractError::OwnerForbidden);

        // The first bid must reach the starting price, every later bid must
        // strictly beat the highest one.
        match auction.highest_bid {
            None => ensure!(
                amount >= auction.starting_price,
                CustomContractError::BidTooLow
            ),
            Some(highest) => ensure!(amount > highest.amount, CustomContractError::BidTooLow),
        }

        Ok(auction.highest_bid.replace(Bid { bidder, amount }))
    }

    /// Close an ended auction and release the token for future trades.
    /// Returns the auction as it closed, for settlement.
    pub fn finalize(
        &mut self,
        id: AuctionId,
        now: Timestamp,
    ) -> Result<Auction, CustomContractError> {
        let mut auction = self
            .auctions
            .get_mut(&id)
            .ok_or(CustomContractError::UnknownAuction)?;

        ensure!(
            auction.status == AuctionStatus::Open,
            CustomContractError::AlreadyFinalized
        );
        ensure!(now >= auction.end, CustomContractError::NotYetEnded);

        auction.status = AuctionStatus::Finalized;
        let snapshot = auction.clone();
        drop(auction);

        self.trading.remove(&snapshot.token);

        Ok(snapshot)
    }

    /// Cancel an auction that received no bids. With a bid escrowed the
    /// auction is committed and must run to its end.
    pub fn cancel_auction(
        &mut self,
        id: AuctionId,
        sender: AccountAddress,
    ) -> Result<Auction, CustomContractError> {
        let mut auction = self
            .auctions
            .get_mut(&id)
            .ok_or(CustomContractError::UnknownAuction)?;

        ensure!(
            auction.status == AuctionStatus::Open,
            CustomContractError::AlreadyFinalized
        );
        ensure!(auction.seller == sender, CustomContractError::NotSeller);
        ensure!(
            auction.highest_bid.is_none(),
            CustomContractError::OperationNotPermitted
        );

        auction.status = AuctionStatus::Finalized;
        let snapshot = auction.clone();
        drop(auction);

        self.trading.remove(&snapshot.token);

        Ok(snapshot)
    }

    pub fn listing(&self, id: ListingId) -> Result<Listing, CustomContractError> {
        self.listings
            .get(&id)
            .map(|listing| (*listing).clone())
            .ok_or(CustomContractError::UnknownListing)
    }

    pub fn auction(&self, id: AuctionId) -> Result<Auction, CustomContractError> {
        self.auctions
            .get(&id)
            .map(|auction| (*auction).clone())
            .ok_or(CustomContractError::UnknownAuction)
    }

    /// The active trade holding a token, if any.
    pub fn trade_for(&self, token: &TokenRef) -> Option<ActiveTrade> {
        self.trading.get(token).map(|trade| *trade)
    }
}
