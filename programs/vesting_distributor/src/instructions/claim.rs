use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenInterface, TokenAccount};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::{load_program_account, pay_from_vault, store_program_account};
use crate::event::*;

/**
 * Account context for claiming vested tokens
 *
 * Pays the claimant everything that has vested since their last claim.
 * The allocation and claim status are taken unchecked so that a claimant
 * who never registered gets NotRegistered rather than an account error.
 *
 * Access Control: Anyone can trigger a claim; tokens always go to a token
 * account owned by the claimant.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The distributor account containing distribution parameters
    /// - Will be modified to update total_claimed amount
    #[account(mut)]
    pub distributor: Account<'info, VestingDistributor>,

    /// CHECK: Claimant's allocation, deserialized in the handler
    /// - Derived from: ["allocation", distributor_key, claimant_key]
    #[account(
        seeds = [ALLOCATION_SEED.as_bytes(), distributor.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub allocation: UncheckedAccount<'info>,

    /// CHECK: Claimant's claim status, deserialized and written back in the handler
    /// - Derived from: ["claim", distributor_key, claimant_key]
    #[account(
        mut,
        seeds = [CLAIM_SEED.as_bytes(), distributor.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_status: UncheckedAccount<'info>,

    /// Token vault holding the tokens to be distributed
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    /// - Must be owned by the claimant
    /// - Must be for the correct token mint
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the distributor's token mint
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ VestingDistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// CHECK: Owner of the allocation; only used for PDA derivation and the token account check
    pub claimant: UncheckedAccount<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Pays out the claimant's vested but unclaimed tokens
 *
 * @param ctx - The account context containing all required accounts
 *
 * Process:
 * 1. Load the claimant's allocation and claim status (NotRegistered if absent)
 * 2. Compute vested amount at the current time
 * 3. Raise claim counters and persist the claim status
 * 4. Transfer the difference from the vault
 *
 * Returns the amount paid; 0 when nothing new has vested.
 */
pub fn handle_claim(ctx: Context<Claim>) -> Result<u64> {
    let allocation = load_program_account::<Allocation>(&ctx.accounts.allocation)?
        .filter(|allocation| allocation.registered)
        .ok_or(VestingDistributorError::NotRegistered)?;
    let mut claim_status = load_program_account::<ClaimStatus>(&ctx.accounts.claim_status)?
        .ok_or(VestingDistributorError::NotRegistered)?;

    let now = Clock::get()?.unix_timestamp;

    // AccountInfos for the transfer are taken before the distributor is borrowed mutably
    let distributor_info = ctx.accounts.distributor.to_account_info();
    let claim_status_info = ctx.accounts.claim_status.to_account_info();
    let destination_info = ctx.accounts.claimant_token_account.to_account_info();
    let mint_info = ctx.accounts.token_mint.to_account_info();
    let token_program_info = ctx.accounts.token_program.to_account_info();
    let decimals = ctx.accounts.token_mint.decimals;
    let token_vault = &ctx.accounts.token_vault;

    let distributor = &mut ctx.accounts.distributor;
    let distributor_key = distributor.key();
    let token_mint_key = distributor.token_mint;
    let creator_key = distributor.creator;
    let merkle_root = distributor.merkle_root;
    let distributor_bump = distributor.bump;

    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        token_mint_key.as_ref(),
        creator_key.as_ref(),
        merkle_root.as_ref(),
        &[distributor_bump],
    ];
    let signer = &[&seeds[..]];

    let amount_claimed = distributor.settle_claim(
        &allocation,
        &mut claim_status,
        now,
        // The distributor handle is for nested claims; the token program cannot
        // re-enter this program, and Anchor writes the distributor back on exit.
        |_distributor, claim_status, amount| {
            // Claim status hits account data before the token program runs
            store_program_account(&claim_status_info, claim_status)?;

            pay_from_vault(
                distributor_info,
                token_vault,
                destination_info,
                mint_info,
                token_program_info,
                amount,
                decimals,
                signer,
            )
        },
    )?;

    if amount_claimed == 0 {
        msg!("Nothing vested to claim for {}", allocation.claimant);
        return Ok(0);
    }

    let total_claimed = distributor.total_claimed;

    emit_cpi!(TokensClaimed {
        distributor: distributor_key,
        claimant: allocation.claimant,
        amount_claimed,
        user_total_claimed: claim_status.total_claimed,
        user_initial_locked: allocation.initial_locked,
        total_claimed,
    });

    Ok(amount_claimed)
}
