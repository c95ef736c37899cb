use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::constants::MAX_PROOF_LEN;

/// Hash of one allocation record: sha256(leaf_index LE || claimant || amount LE)
pub fn hash_leaf(leaf_index: u64, claimant: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[
        &leaf_index.to_le_bytes(),
        &claimant.to_bytes(),
        &amount.to_le_bytes(),
    ])
    .to_bytes()
}

/// Hash of two sibling nodes, smaller node first.
///
/// Tree builders must use the same ordering, so a proof carries no
/// left/right flags.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Folds `proof` into `leaf` and compares the result with `root`.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    if root == [0; 32] || proof.len() > MAX_PROOF_LEN {
        return false;
    }

    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling));

    computed == root
}

/// Checks that (leaf_index, claimant, amount) is a member of the set committed by `root`.
pub fn verify_allocation(
    leaf_index: u64,
    claimant: &Pubkey,
    amount: u64,
    proof: &[[u8; 32]],
    root: [u8; 32],
) -> bool {
    verify(proof, root, hash_leaf(leaf_index, claimant, amount))
}
