use anchor_lang::prelude::*;

declare_id!("HaSWwgw7JwZ9QxmTzSjBuNVDkmUkQnmVPRidyQaw1LTz");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::Allocation;

/**
 * Vesting Distributor Program
 *
 * Distributes a fixed, pre-committed set of token allocations. The full set of
 * (leaf_index, claimant, amount) records is compressed into one merkle root at
 * creation; each claimant later proves membership once and then withdraws
 * tokens that unlock linearly over the vesting period.
 *
 * Key Features:
 * - Merkle tree-based registration (sorted-pair sha256, leaf = index || claimant || amount)
 * - Immutable configuration: token, root and vesting period are fixed at creation
 * - Linear vesting per claimant, starting at the claimant's registration
 * - Incremental claims paying only what vested since the previous claim
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Distributor PDA: Stores configuration and global counters
 * - Token Vault PDA: Holds tokens to be distributed
 * - Allocation PDAs: Record each claimant's locked amount and vesting start
 * - Claim Status PDAs: Track how much each claimant has been paid
 *
 * Workflow:
 * 1. Creator creates the distributor and funds the vault
 * 2. Anyone registers a claimant's allocation with a merkle proof
 * 3. Anyone triggers claims; vested tokens go to the claimant
 */
#[program]
pub mod vesting_distributor {
    use super::*;

    /**
     * Creates a new vesting distributor
     *
     * @param ctx - Account context containing distributor, vault and creator accounts
     * @param merkle_root - 32-byte root of the allocation tree, must not be zero
     * @param vesting_period - Vesting duration in seconds, must be positive
     * @param initial_deposit - Tokens moved from the creator into the vault
     *
     * Access Control: Anyone
     */
    pub fn create_distributor(
        ctx: Context<CreateDistributor>,
        merkle_root: [u8; 32],
        vesting_period: i64,
        initial_deposit: u64,
    ) -> Result<()> {
        handle_create_distributor(ctx, merkle_root, vesting_period, initial_deposit)
    }

    /**
     * Registers (or confirms) a claimant's allocation with a merkle proof
     *
     * @param ctx - Account context containing distributor, allocation and claim status accounts
     * @param leaf_index - Index of the claimant's leaf
     * @param amount - Amount locked for the claimant
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Anyone; effectful only once per claimant
     */
    pub fn claim_shares(
        ctx: Context<ClaimShares>,
        leaf_index: u64,
        amount: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<Allocation> {
        handle_claim_shares(ctx, leaf_index, amount, proof)
    }

    /**
     * Pays the claimant's vested but unclaimed tokens
     *
     * @param ctx - Account context containing distributor, claim state and token accounts
     * @return amount paid, 0 when nothing new has vested
     *
     * Access Control: Anyone
     */
    pub fn claim(ctx: Context<Claim>) -> Result<u64> {
        handle_claim(ctx)
    }

    /// Amount locked for the claimant, 0 if unregistered
    pub fn get_initial_locked(ctx: Context<QueryAllocation>) -> Result<u64> {
        handle_get_initial_locked(ctx)
    }

    /// Amount already paid to the claimant, 0 if unregistered
    pub fn get_total_claimed(ctx: Context<QueryAllocation>) -> Result<u64> {
        handle_get_total_claimed(ctx)
    }

    /// Amount vested for the claimant at the current time, 0 if unregistered
    pub fn get_total_vested_of(ctx: Context<QueryAllocation>) -> Result<u64> {
        handle_get_total_vested_of(ctx)
    }

    /// Vesting period of the distributor in seconds
    pub fn vesting_period(ctx: Context<QueryDistributor>) -> Result<i64> {
        handle_vesting_period(ctx)
    }

    /// Sum of all registered allocations
    pub fn total_allocated_supply(ctx: Context<QueryDistributor>) -> Result<u64> {
        handle_total_allocated_supply(ctx)
    }
}
