use anchor_lang::prelude::*;

/// Reads a program-owned account that may not have been created yet.
///
/// Returns `None` for addresses with no data or owned by another program,
/// so lookups of unknown claimants resolve to defaults instead of failing.
pub fn load_program_account<T>(info: &AccountInfo) -> Result<Option<T>>
where
    T: AccountDeserialize + Owner,
{
    if info.owner != &T::owner() || info.data_is_empty() {
        return Ok(None);
    }

    let data = info.try_borrow_data()?;
    let account = T::try_deserialize(&mut &data[..])?;
    Ok(Some(account))
}

/// Writes `account` back into its data buffer, discriminator included.
pub fn store_program_account<T>(info: &AccountInfo, account: &T) -> Result<()>
where
    T: AccountSerialize,
{
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    account.try_serialize(&mut writer)
}
