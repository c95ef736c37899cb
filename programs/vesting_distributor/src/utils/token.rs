use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TokenAccount, TransferChecked};

use crate::error::VestingDistributorError;

/// Token transfer through the token interface (SPL Token and Token 2022)
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_program = token_program;

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(cpi_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(cpi_program, cpi_accounts)
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Pays `amount` out of the distributor vault, signed by the distributor PDA.
///
/// Any failure, including a vault too small to cover `amount`, surfaces as
/// `TransferFailed`.
pub fn pay_from_vault<'a>(
    distributor: AccountInfo<'a>,
    vault: &InterfaceAccount<'a, TokenAccount>,
    destination: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    if vault.amount < amount {
        msg!("Vault balance {} cannot cover {}", vault.amount, amount);
        return err!(VestingDistributorError::TransferFailed);
    }

    transfer_token(
        distributor,
        vault.to_account_info(),
        destination,
        mint,
        token_program,
        amount,
        decimals,
        Some(signer_seeds),
    )
    .map_err(|err| {
        msg!("Token transfer failed: {}", err);
        error!(VestingDistributorError::TransferFailed)
    })
}
