use anchor_lang::prelude::*;

/// Event emitted when a new distributor is created
#[event]
pub struct DistributorCreated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Creator who deployed and funded the distributor
    pub creator: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Root of the committed allocation set
    pub merkle_root: [u8; 32],
    /// Seconds over which every allocation unlocks
    pub vesting_period: i64,
    /// Tokens moved into the vault at creation
    pub initial_deposit: u64,
}

/// Event emitted the first time an address proves its allocation
#[event]
pub struct AllocationRegistered {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Address the allocation belongs to
    pub claimant: Pubkey,
    /// Leaf index in the merkle tree
    pub leaf_index: u64,
    /// Amount locked for the claimant
    pub initial_locked: u64,
    /// Vesting start for this allocation
    pub registered_at: i64,
    /// Sum of all registered allocations after this one
    pub total_allocated_supply: u64,
}

/// Event emitted when vested tokens are paid out
#[event]
pub struct TokensClaimed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Amount paid in this transaction
    pub amount_claimed: u64,
    /// Cumulative amount paid to the claimant
    pub user_total_claimed: u64,
    /// Amount originally locked for the claimant
    pub user_initial_locked: u64,
    /// Total amount paid out by the distributor to all claimants
    pub total_claimed: u64,
}
