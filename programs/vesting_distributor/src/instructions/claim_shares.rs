use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for registering an allocation
 *
 * Proves that (leaf_index, claimant, amount) belongs to the distributor's
 * merkle root and records the claimant's locked amount. Vesting for the
 * claimant starts at the first successful registration.
 *
 * Access Control: Anyone may register on behalf of any claimant; the proof
 * binds the amount to the claimant's address.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimShares<'info> {
    /// The distributor holding the merkle root
    /// - Modified to update total_allocated_supply on first registration
    #[account(mut)]
    pub distributor: Account<'info, VestingDistributor>,

    /// Allocation record for the claimant
    /// - Derived from: ["allocation", distributor_key, claimant_key]
    #[account(
        init_if_needed,
        payer = payer,
        space = Allocation::LEN,
        seeds = [ALLOCATION_SEED.as_bytes(), distributor.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub allocation: Account<'info, Allocation>,

    /// Claim status for the claimant, created together with the allocation
    /// - Derived from: ["claim", distributor_key, claimant_key]
    #[account(
        init_if_needed,
        payer = payer,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), distributor.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// CHECK: Any address can be a claimant; it is bound to the amount by the merkle proof
    pub claimant: UncheckedAccount<'info>,

    /// Pays rent for the allocation and claim status accounts
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Registers or confirms the claimant's allocation
 *
 * @param ctx - The account context containing all required accounts
 * @param leaf_index - Index of the claimant's leaf in the merkle tree
 * @param amount - Amount locked for the claimant (from merkle tree)
 * @param proof - Array of 32-byte hashes forming the merkle proof path
 *
 * Re-submitting the same leaf is a no-op returning the stored allocation;
 * re-submitting a different amount fails with AllocationMismatch.
 */
pub fn handle_claim_shares(
    ctx: Context<ClaimShares>,
    leaf_index: u64,
    amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<Allocation> {
    let now = Clock::get()?.unix_timestamp;
    let claimant = ctx.accounts.claimant.key();
    let distributor = &mut ctx.accounts.distributor;
    let allocation = &mut ctx.accounts.allocation;

    let newly_registered =
        distributor.register_allocation(allocation, &claimant, leaf_index, amount, &proof, now)?;

    if !newly_registered {
        msg!("Allocation for {} already registered", claimant);
        return Ok((**allocation).clone());
    }

    let registered = (**allocation).clone();
    let distributor_key = distributor.key();
    let total_allocated_supply = distributor.total_allocated_supply;

    emit_cpi!(AllocationRegistered {
        distributor: distributor_key,
        claimant,
        leaf_index,
        initial_locked: registered.initial_locked,
        registered_at: registered.registered_at,
        total_allocated_supply,
    });

    Ok(registered)
}
