pub mod merkle_tree;

mod test_account;
mod test_create;
mod test_vesting;
