use super::*;

/// The custom errors the contracts can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Collection name or symbol is empty (Error code: -4).
    InvalidName,
    /// Listing price must be above zero (Error code: -5).
    InvalidPrice,
    /// Auction duration must be above zero (Error code: -6).
    InvalidDuration,
    /// Royalty rate above 100% or fee rates that cannot settle
    /// (Error code: -7).
    InvalidRoyalty,
    /// Caller does not hold the token (Error code: -8).
    NotOwner,
    /// Caller is not the seller of the listing (Error code: -9).
    NotSeller,
    /// Seller is not allowed to bid on their own auction (Error code: -10).
    OwnerForbidden,
    /// Only account addresses can trade tokens (Error code: -11).
    OnlyAccountAddress,
    /// Token already has an active listing or auction (Error code: -12).
    AlreadyListedOrAuctioned,
    /// Listing is no longer active (Error code: -13).
    NotActive,
    /// Auction has ended, bids are no longer accepted (Error code: -14).
    AuctionEnded,
    /// Auction settlement was already performed (Error code: -15).
    AlreadyFinalized,
    /// Auction end time has not been reached yet (Error code: -16).
    NotYetEnded,
    /// Operation not permitted in the current state (Error code: -17).
    OperationNotPermitted,
    /// Attached amount is below the required payment (Error code: -18).
    InsufficientPayment,
    /// Bid does not beat the current highest bid or starting price
    /// (Error code: -19).
    BidTooLow,
    /// Unknown collection (Error code: -20).
    UnknownCollection,
    /// Unknown token (Error code: -21).
    UnknownToken,
    /// Unknown listing (Error code: -22).
    UnknownListing,
    /// Unknown auction (Error code: -23).
    UnknownAuction,
    /// Unauthorized (Error code: -24).
    Unauthorized,
    /// Failed to invoke a contract (Error code: -25).
    InvokeContractError,
    /// Failed to invoke a transfer (Error code: -26).
    InvokeTransferError,
    /// Incompatible contract (Error code: -27).
    Incompatible,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping CustomContractError to ContractError.
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}

/// Mapping errors related to CCD transfers to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}
