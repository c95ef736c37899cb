use anchor_lang::prelude::*;

/**
 * Registered allocation of one claimant
 *
 * Records the locked amount proven against the distributor's merkle root
 * and the moment vesting started for it.
 *
 * Derivation: ["allocation", distributor_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created by the first successful claim_shares for the claimant
 * 2. Never modified afterwards; later claim_shares calls only confirm it
 * 3. Never closed
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Allocation {
    /// Address the allocation belongs to
    pub claimant: Pubkey,

    /// Index of the claimant's leaf in the merkle tree
    pub leaf_index: u64,

    /// Amount locked at registration, immutable afterwards
    pub initial_locked: u64,

    /// Set once the proof has been accepted
    pub registered: bool,

    /// Unix timestamp at which vesting started
    pub registered_at: i64,
}

impl Allocation {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Allocation>();
}
