use anchor_lang::prelude::*;
use anchor_lang::Discriminator;

use crate::state::{Allocation, ClaimStatus};
use crate::utils::{load_program_account, store_program_account};

fn allocation() -> Allocation {
    Allocation {
        claimant: Pubkey::new_from_array([7; 32]),
        leaf_index: 3,
        initial_locked: 1000,
        registered: true,
        registered_at: 1_700_000_000,
    }
}

#[test]
fn test_uncreated_account_loads_as_none() {
    let key = Pubkey::new_from_array([1; 32]);
    let system_program = Pubkey::default();
    let mut lamports = 0;
    let mut data: Vec<u8> = Vec::new();

    // Program-owned but empty
    let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &crate::ID, false, 0);
    assert!(load_program_account::<Allocation>(&info).unwrap().is_none());
    assert!(load_program_account::<ClaimStatus>(&info).unwrap().is_none());

    // PDA address never allocated: still owned by the system program
    let mut lamports = 0;
    let mut data: Vec<u8> = Vec::new();
    let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &system_program, false, 0);
    assert!(load_program_account::<Allocation>(&info).unwrap().is_none());
}

#[test]
fn test_foreign_owned_account_loads_as_none() {
    let key = Pubkey::new_from_array([2; 32]);
    let foreign_owner = Pubkey::new_from_array([9; 32]);
    let mut lamports = 1;
    let mut data = vec![0u8; Allocation::LEN];

    {
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &crate::ID, false, 0);
        store_program_account(&info, &allocation()).unwrap();
    }

    let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &foreign_owner, false, 0);
    assert!(load_program_account::<Allocation>(&info).unwrap().is_none());
}

#[test]
fn test_allocation_store_then_load() {
    let key = Pubkey::new_from_array([3; 32]);
    let mut lamports = 1;
    let mut data = vec![0u8; Allocation::LEN];
    let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &crate::ID, false, 0);

    store_program_account(&info, &allocation()).unwrap();

    assert_eq!(&info.try_borrow_data().unwrap()[..8], &Allocation::DISCRIMINATOR[..]);
    assert_eq!(load_program_account::<Allocation>(&info).unwrap(), Some(allocation()));
}

#[test]
fn test_claim_status_store_then_load() {
    let key = Pubkey::new_from_array([4; 32]);
    let mut lamports = 1;
    let mut data = vec![0u8; ClaimStatus::LEN];
    let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &crate::ID, false, 0);

    // Freshly created account: discriminator and zeroed counter
    store_program_account(&info, &ClaimStatus::default()).unwrap();
    assert_eq!(&info.try_borrow_data().unwrap()[..8], &ClaimStatus::DISCRIMINATOR[..]);
    assert_eq!(
        load_program_account::<ClaimStatus>(&info).unwrap(),
        Some(ClaimStatus::default())
    );

    store_program_account(&info, &ClaimStatus { total_claimed: 500 }).unwrap();
    assert_eq!(
        load_program_account::<ClaimStatus>(&info).unwrap(),
        Some(ClaimStatus { total_claimed: 500 })
    );
}

#[test]
fn test_load_with_wrong_account_type_fails() {
    let key = Pubkey::new_from_array([5; 32]);
    let mut lamports = 1;
    let mut data = vec![0u8; Allocation::LEN];
    let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &crate::ID, false, 0);

    store_program_account(&info, &ClaimStatus { total_claimed: 42 }).unwrap();

    assert!(load_program_account::<Allocation>(&info).is_err());
}
