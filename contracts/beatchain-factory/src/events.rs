use super::*;

/// Event tags, one byte each, prefixed to the serialized event body.
pub const COLLECTION_CREATED_TAG: u8 = 0;
pub const MINT_TAG: u8 = 1;
pub const TRANSFER_TAG: u8 = 2;

/// Collection creation event data.
#[derive(Debug, Serial)]
pub struct CollectionCreatedEvent<'a> {
    /// Identifier of the new collection.
    pub collection: CollectionId,
    /// Account that created the collection.
    pub creator: &'a AccountAddress,
    /// Collection name.
    pub name: &'a String,
    /// Collection symbol.
    pub symbol: &'a String,
}

/// Token mint event data.
#[derive(Debug, Serial)]
pub struct MintEvent<'a> {
    /// Minted token.
    pub token: TokenRef,
    /// Initial token holder.
    pub owner: &'a Address,
    /// Royalty bound to the token.
    pub royalty: &'a Royalty,
    /// Minting fee routed to the fee recipient.
    pub fee: Amount,
}

/// Ownership transfer event data.
#[derive(Debug, Serial)]
pub struct TransferEvent<'a> {
    /// Transferred token.
    pub token: TokenRef,
    /// Previous holder.
    pub from: &'a Address,
    /// New holder.
    pub to: &'a Address,
}

/// Tagged event to be serialized for the event log.
#[derive(Debug)]
pub enum FactoryEvent<'a> {
    CollectionCreated(CollectionCreatedEvent<'a>),
    Mint(MintEvent<'a>),
    Transfer(TransferEvent<'a>),
}

impl<'a> FactoryEvent<'a> {
    pub fn collection_created(
        collection: CollectionId,
        creator: &'a AccountAddress,
        name: &'a String,
        symbol: &'a String,
    ) -> Self {
        Self::CollectionCreated(CollectionCreatedEvent {
            collection,
            creator,
            name,
            symbol,
        })
    }

    pub fn mint(token: TokenRef, owner: &'a Address, royalty: &'a Royalty, fee: Amount) -> Self {
        Self::Mint(MintEvent {
            token,
            owner,
            royalty,
            fee,
        })
    }

    pub fn transfer(token: TokenRef, from: &'a Address, to: &'a Address) -> Self {
        Self::Transfer(TransferEvent { token, from, to })
    }
}

impl<'a> Serial for FactoryEvent<'a> {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            FactoryEvent::CollectionCreated(event) => {
                out.write_u8(COLLECTION_CREATED_TAG)?;
                event.serial(out)
            }
            FactoryEvent::Mint(event) => {
                out.write_u8(MINT_TAG)?;
                event.serial(out)
            }
            FactoryEvent::Transfer(event) => {
                out.write_u8(TRANSFER_TAG)?;
                event.serial(out)
            }
        }
    }
}
