use crate::error::VestingDistributorError;
use crate::instructions::create_distributor::initial_deposit_source;

#[test]
fn test_no_deposit_needs_no_token_account() {
    assert_eq!(initial_deposit_source::<u64>(None, 0).unwrap(), None);

    // A supplied account is ignored when nothing is deposited
    let account = 5u64;
    assert_eq!(initial_deposit_source(Some(&account), 0).unwrap(), None);
}

#[test]
fn test_deposit_uses_creator_token_account() {
    let account = 5u64;
    assert_eq!(initial_deposit_source(Some(&account), 1_000).unwrap(), Some(&account));
}

#[test]
fn test_deposit_without_token_account_fails() {
    let err = initial_deposit_source::<u64>(None, 1_000).unwrap_err();
    assert_eq!(
        err,
        anchor_lang::error::Error::from(VestingDistributorError::MissingFundingAccount)
    );
}
