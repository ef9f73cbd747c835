use soroban_sdk::contracterror;

/// Errors returned by the escrow ledger.
///
/// Codes are part of the contract ABI and must stay stable.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    Unauthorized = 1,
    AlreadyInitialized = 2,
    NotInitialized = 3,
    NotFound = 4,
    InsufficientDeposit = 5,
    SaleNotReady = 6,
    TitleTransferFailed = 7,
    InvalidAmount = 8,
    ListingExists = 9,
    ListingClosed = 10,
}
