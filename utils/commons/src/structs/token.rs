use super::*;

/// Global reference to a token inside the factory registry.
#[derive(Debug, Serialize, SchemaType, Hash, PartialEq, Eq, Clone, Copy)]
pub struct TokenRef {
    pub collection: CollectionId,
    pub id: ContractTokenId,
}

/// Royalty bound to a token at mint. The rate and beneficiary never change
/// for the lifetime of the token.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq, Clone, Copy)]
pub struct Royalty {
    /// Account receiving the royalty cut on every resale.
    pub beneficiary: AccountAddress,
    /// Royalty rate in basis points.
    pub rate: BasisPoints,
}

/// Token data returned by the factory `getTokenInfo` view. Read by the
/// marketplace when a listing or auction is created.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq, Clone)]
pub struct TokenInfo {
    pub owner: Address,
    pub royalty: Royalty,
}
