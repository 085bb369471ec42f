use super::*;

pub type ContractResult<T> = Result<T, ContractError>;

/// Token ID type used by the factory registry. Token ids are assigned
/// sequentially per collection starting at 1 and are never reused.
pub type ContractTokenId = TokenIdU32;

/// Identifier of a collection inside the factory registry. Sequential,
/// starting at 1.
pub type CollectionId = u64;

/// Identifier of a fixed price listing. Terminal listings keep their id
/// forever, ids are never reused.
pub type ListingId = u64;

/// Identifier of an auction. Same reuse rules as listing ids.
pub type AuctionId = u64;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;
