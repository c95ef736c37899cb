use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new vesting distributor
 *
 * This instruction fixes the whole configuration of a distribution:
 * - Creates a distributor PDA storing the merkle root and vesting period
 * - Creates a token vault PDA to hold the tokens to be distributed
 * - Optionally transfers an initial deposit from the creator to the vault
 *
 * No instruction can change the token, root or vesting period afterwards.
 *
 * Access Control: Anyone can create a distributor
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(merkle_root: [u8; 32])]
pub struct CreateDistributor<'info> {
    /// The main distributor account (PDA)
    /// - Stores the immutable configuration and global counters
    /// - Derived from: ["distributor", token_mint, creator, merkle_root]
    #[account(
        init,
        payer = creator,
        space = VestingDistributor::LEN,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            token_mint.key().as_ref(),
            creator.key().as_ref(),
            merkle_root.as_ref()
        ],
        bump
    )]
    pub distributor: Account<'info, VestingDistributor>,

    /// Token vault account (PDA) that holds the tokens to be distributed
    /// - Controlled by the distributor PDA as token authority
    /// - Derived from: ["vault", distributor_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = distributor,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump,
        payer = creator,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for the tokens being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Creator's token account funding the initial deposit
    /// - Only required when initial_deposit > 0
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = creator,
        token::token_program = token_program,
    )]
    pub creator_token_account: Option<InterfaceAccount<'info, TokenAccount>>,

    /// The creator of the distributor, pays for account creation
    #[account(mut)]
    pub creator: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/// Token account to fund the vault from; `None` when there is nothing to deposit
pub(crate) fn initial_deposit_source<T>(
    creator_token_account: Option<&T>,
    initial_deposit: u64,
) -> Result<Option<&T>> {
    if initial_deposit == 0 {
        return Ok(None);
    }
    creator_token_account
        .map(Some)
        .ok_or_else(|| error!(VestingDistributorError::MissingFundingAccount))
}

/**
 * Creates a new vesting distributor
 *
 * @param ctx - The account context containing all required accounts
 * @param merkle_root - Root of the (leaf_index, claimant, amount) tree
 * @param vesting_period - Seconds over which every allocation unlocks
 * @param initial_deposit - Tokens to move into the vault now (may be 0)
 */
pub fn handle_create_distributor(
    ctx: Context<CreateDistributor>,
    merkle_root: [u8; 32],
    vesting_period: i64,
    initial_deposit: u64,
) -> Result<()> {
    require!(
        merkle_root != [0; 32],
        VestingDistributorError::InvalidMerkleRoot
    );
    require!(
        vesting_period > 0,
        VestingDistributorError::InvalidVestingPeriod
    );

    let now = Clock::get()?.unix_timestamp;
    let distributor = &mut ctx.accounts.distributor;

    distributor.bump = ctx.bumps.distributor;
    distributor.creator = ctx.accounts.creator.key();
    distributor.token_mint = ctx.accounts.token_mint.key();
    distributor.token_vault = ctx.accounts.token_vault.key();
    distributor.merkle_root = merkle_root;
    distributor.vesting_period = vesting_period;
    distributor.created_at = now;
    // Note: counters start at their default values (0)

    let distributor_key = distributor.key();

    // Funding can also happen later through plain token transfers to the vault
    let deposit_source =
        initial_deposit_source(ctx.accounts.creator_token_account.as_ref(), initial_deposit)?;
    if let Some(creator_token_account) = deposit_source {
        transfer_token(
            ctx.accounts.creator.to_account_info(),
            creator_token_account.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            initial_deposit,
            ctx.accounts.token_mint.decimals,
            None, // No signer seeds needed for creator-signed transfer
        )?;
    }

    emit_cpi!(DistributorCreated {
        distributor: distributor_key,
        creator: ctx.accounts.creator.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        merkle_root,
        vesting_period,
        initial_deposit,
    });

    Ok(())
}
