use anchor_lang::prelude::*;

/**
 * Individual claim status account
 *
 * Tracks how much of a claimant's vested allocation has already been paid.
 *
 * Derivation: ["claim", distributor_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created alongside the claimant's Allocation
 * 2. Increased by every paying claim
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct ClaimStatus {
    /// Total amount paid to this claimant (cumulative)
    pub total_claimed: u64,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();

    /// Vested amount not paid out yet
    pub fn pending(&self, vested: u64) -> u64 {
        vested.saturating_sub(self.total_claimed)
    }
}
