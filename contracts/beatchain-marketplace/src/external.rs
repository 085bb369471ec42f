use super::*;

#[derive(Debug, Clone, SchemaType, Serialize)]
pub struct InitParams {
    /// Factory contract holding the token registry.
    pub factory: ContractAddress,
    /// Platform fee receiver account.
    pub beneficiary: AccountAddress,
    /// Platform fee applied to newly created trades.
    pub platform_fee: BasisPoints,
}

#[derive(Debug, Clone, SchemaType, Serialize)]
pub struct ListParams {
    pub token: TokenRef,
    pub price: Amount,
}

#[derive(Debug, Clone, SchemaType, Serialize)]
pub struct CreateAuctionParams {
    pub token: TokenRef,
    /// Lowest accepted first bid.
    pub starting_price: Amount,
    /// Auction runtime, counted from the creation slot time.
    pub duration_seconds: u64,
}

/// Maintainer-settable configuration values.
#[derive(Debug, Clone, SchemaType, Serialize)]
pub enum ConfigValue {
    PlatformFee(BasisPoints),
    Beneficiary(AccountAddress),
    Factory(ContractAddress),
}

#[derive(Debug, Clone, SchemaType, Serialize)]
pub enum ConfigKey {
    PlatformFee,
    Beneficiary,
    Factory,
}
