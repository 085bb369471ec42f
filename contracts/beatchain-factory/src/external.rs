use super::*;

#[derive(Debug, Clone, SchemaType, Serialize)]
pub struct CreateCollectionParams {
    pub name: String,
    pub symbol: String,
}

#[derive(Debug, Clone, SchemaType, Serialize)]
pub struct MintParams {
    /// Collection to mint into.
    pub collection: CollectionId,
    /// Initial token holder.
    pub to: Address,
    /// Token metadata locator.
    pub uri: String,
    /// Track record, fixed shape, immutable once minted.
    pub metadata: TrackMetadata,
    /// Royalty rate permanently bound to the token.
    pub royalty_rate: BasisPoints,
}

#[derive(Debug, Clone, SchemaType, Serialize)]
pub struct TransferParams {
    pub token: TokenRef,
    pub from: Address,
    pub to: Address,
}

/// Maintainer-settable configuration values.
#[derive(Debug, Clone, SchemaType, Serialize)]
pub enum ConfigValue {
    MinimumMintPrice(Amount),
    MintingFee(BasisPoints),
    FeeRecipient(AccountAddress),
}

#[derive(Debug, Clone, SchemaType, Serialize)]
pub enum ConfigKey {
    MinimumMintPrice,
    MintingFee,
    FeeRecipient,
}

/// Collection summary returned by the `viewCollection` entrypoint.
#[derive(Debug, Clone, SchemaType, Serialize, PartialEq, Eq)]
pub struct CollectionInfo {
    pub creator: AccountAddress,
    pub name: String,
    pub symbol: String,
    /// Number of tokens minted so far.
    pub tokens: u32,
}
