use anchor_lang::prelude::*;

use crate::error::VestingDistributorError;
use crate::state::{Allocation, ClaimStatus};
use crate::utils::{vested_amount, verify_allocation};

/**
 * Main distributor state account
 *
 * Holds the immutable configuration of one vesting distribution (token,
 * merkle root, vesting period) and the global counters updated by
 * registrations and claims.
 *
 * Derivation: ["distributor", token_mint, creator, merkle_root]
 *
 * Lifecycle:
 * 1. Created during create_distributor, configuration fixed from then on
 * 2. Counters updated by claim_shares (allocated supply) and claim (claimed)
 * 3. Never closed
 */
#[account]
#[derive(Default, Debug)]
pub struct VestingDistributor {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when signing vault transfers
    pub bump: u8,

    /// Account that deployed the distributor
    pub creator: Pubkey,

    /// Token mint address
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA that holds the tokens to be distributed
    /// - Derived from: ["vault", distributor_key]
    pub token_vault: Pubkey,

    /// Merkle root committing to every (leaf_index, claimant, amount) allocation
    pub merkle_root: [u8; 32],

    /// Seconds over which each allocation unlocks linearly
    pub vesting_period: i64,

    /// Unix timestamp of creation
    pub created_at: i64,

    /// Sum of initial_locked over all registered allocations
    pub total_allocated_supply: u64,

    /// Total amount of tokens paid out to all claimants
    pub total_claimed: u64,

    /// Number of registered allocations
    pub num_registered: u64,
}

impl VestingDistributor {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<VestingDistributor>();

    /// Registers `claimant`'s allocation on first valid proof, confirms it afterwards.
    ///
    /// Returns `true` when this call created the registration. Nothing is
    /// mutated unless every check has passed.
    pub fn register_allocation(
        &mut self,
        allocation: &mut Allocation,
        claimant: &Pubkey,
        leaf_index: u64,
        amount: u64,
        proof: &[[u8; 32]],
        now: i64,
    ) -> Result<bool> {
        require!(
            verify_allocation(leaf_index, claimant, amount, proof, self.merkle_root),
            VestingDistributorError::InvalidProof
        );

        if allocation.registered {
            require!(
                allocation.initial_locked == amount,
                VestingDistributorError::AllocationMismatch
            );
            return Ok(false);
        }

        let total_allocated_supply = self
            .total_allocated_supply
            .checked_add(amount)
            .ok_or(VestingDistributorError::ArithmeticOverflow)?;
        let num_registered = self
            .num_registered
            .checked_add(1)
            .ok_or(VestingDistributorError::ArithmeticOverflow)?;

        allocation.claimant = *claimant;
        allocation.leaf_index = leaf_index;
        allocation.initial_locked = amount;
        allocation.registered = true;
        allocation.registered_at = now;

        self.total_allocated_supply = total_allocated_supply;
        self.num_registered = num_registered;

        Ok(true)
    }

    /// Amount of `allocation` unlocked at `now`; zero for unregistered claimants.
    pub fn vested_of(&self, allocation: &Allocation, now: i64) -> u64 {
        if !allocation.registered {
            return 0;
        }
        vested_amount(
            allocation.initial_locked,
            allocation.registered_at,
            self.vesting_period,
            now,
        )
    }

    /// Pays out whatever has vested since the last claim.
    ///
    /// Claim counters are raised before `transfer` runs, so anything
    /// `transfer` triggers (including a nested claim handed the same state)
    /// sees the payment as already made. If `transfer` fails the counters are
    /// restored and the error is returned. Returns the amount paid, 0 when
    /// nothing new has vested.
    pub fn settle_claim<F>(
        &mut self,
        allocation: &Allocation,
        claim_status: &mut ClaimStatus,
        now: i64,
        transfer: F,
    ) -> Result<u64>
    where
        F: FnOnce(&mut Self, &mut ClaimStatus, u64) -> Result<()>,
    {
        require!(allocation.registered, VestingDistributorError::NotRegistered);

        let vested = self.vested_of(allocation, now);
        let payable = claim_status.pending(vested);
        if payable == 0 {
            return Ok(0);
        }

        let user_total_claimed = claim_status
            .total_claimed
            .checked_add(payable)
            .ok_or(VestingDistributorError::ArithmeticOverflow)?;
        let total_claimed = self
            .total_claimed
            .checked_add(payable)
            .ok_or(VestingDistributorError::ArithmeticOverflow)?;

        // Effects before interactions
        claim_status.total_claimed = user_total_claimed;
        self.total_claimed = total_claimed;

        if let Err(err) = transfer(self, claim_status, payable) {
            claim_status.total_claimed -= payable;
            self.total_claimed -= payable;
            return Err(err);
        }

        Ok(payable)
    }
}
