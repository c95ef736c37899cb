use anchor_lang::prelude::*;

#[error_code]
pub enum VestingDistributorError {
    // Configuration errors
    #[msg("Merkle root must not be empty")]
    InvalidMerkleRoot,
    #[msg("Vesting period must be positive")]
    InvalidVestingPeriod,
    #[msg("Initial deposit requires the creator's token account")]
    MissingFundingAccount,

    // Registration errors
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Allocation already registered with a different amount")]
    AllocationMismatch,

    // Claim errors
    #[msg("Claimant has no registered allocation")]
    NotRegistered,
    #[msg("Token transfer failed")]
    TransferFailed,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match distributor's token mint")]
    TokenMintMismatch,
}
