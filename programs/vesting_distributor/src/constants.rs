use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds and verification limits shared by every instruction.
 * Runtime parameters (merkle root, vesting period) are not constants:
 * they are fixed once in create_distributor and stored on the distributor.
 */

/// ===== PDA SEED CONSTANTS =====

/// Seed for distributor PDA derivation
/// - Used in: ["distributor", token_mint, creator, merkle_root]
/// - One distributor per committed allocation set
#[constant]
pub const DISTRIBUTOR_SEED: &str = "distributor";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", distributor_key]
/// - The vault authority is the distributor PDA itself
pub const VAULT_SEED: &str = "vault";

/// Seed for allocation PDA derivation
/// - Used in: ["allocation", distributor_key, claimant_key]
/// - Created on first successful proof, never closed
pub const ALLOCATION_SEED: &str = "allocation";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", distributor_key, claimant_key]
/// - Tracks cumulative amount paid out to the claimant
pub const CLAIM_SEED: &str = "claim";

/// ===== VERIFICATION LIMITS =====

/// Longest accepted merkle proof (a tree of 2^32 leaves)
pub const MAX_PROOF_LEN: usize = 32;
