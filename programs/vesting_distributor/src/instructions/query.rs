use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::utils::load_program_account;

/**
 * Account context for per-claimant read-only queries
 *
 * The allocation and claim status may not exist yet; queries for such
 * claimants return zero instead of failing.
 */
#[derive(Accounts)]
pub struct QueryAllocation<'info> {
    pub distributor: Account<'info, VestingDistributor>,

    /// CHECK: Any address; only used for PDA derivation
    pub claimant: UncheckedAccount<'info>,

    /// CHECK: May be uninitialized for claimants that never registered
    #[account(
        seeds = [ALLOCATION_SEED.as_bytes(), distributor.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub allocation: UncheckedAccount<'info>,

    /// CHECK: May be uninitialized for claimants that never registered
    #[account(
        seeds = [CLAIM_SEED.as_bytes(), distributor.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_status: UncheckedAccount<'info>,
}

/// Account context for distributor-wide read-only queries
#[derive(Accounts)]
pub struct QueryDistributor<'info> {
    pub distributor: Account<'info, VestingDistributor>,
}

impl<'info> QueryAllocation<'info> {
    fn load_allocation(&self) -> Result<Allocation> {
        Ok(load_program_account::<Allocation>(&self.allocation)?.unwrap_or_default())
    }

    fn load_claim_status(&self) -> Result<ClaimStatus> {
        Ok(load_program_account::<ClaimStatus>(&self.claim_status)?.unwrap_or_default())
    }
}

pub fn handle_get_initial_locked(ctx: Context<QueryAllocation>) -> Result<u64> {
    Ok(ctx.accounts.load_allocation()?.initial_locked)
}

pub fn handle_get_total_claimed(ctx: Context<QueryAllocation>) -> Result<u64> {
    Ok(ctx.accounts.load_claim_status()?.total_claimed)
}

pub fn handle_get_total_vested_of(ctx: Context<QueryAllocation>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let allocation = ctx.accounts.load_allocation()?;
    Ok(ctx.accounts.distributor.vested_of(&allocation, now))
}

pub fn handle_vesting_period(ctx: Context<QueryDistributor>) -> Result<i64> {
    Ok(ctx.accounts.distributor.vesting_period)
}

pub fn handle_total_allocated_supply(ctx: Context<QueryDistributor>) -> Result<u64> {
    Ok(ctx.accounts.distributor.total_allocated_supply)
}
