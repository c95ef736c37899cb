use anchor_lang::prelude::Pubkey;

use crate::utils::{hash_leaf, hash_pair};

/// One allocation record; its leaf index is its position in the tree
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub claimant: Pubkey,
    pub amount: u64,
}

/// Off-chain tree builder matching the on-chain verifier.
///
/// Levels are stored back to back in `nodes`, leaves first. An odd node at
/// the end of a level is paired with itself.
pub struct MerkleTree {
    nodes: Vec<[u8; 32]>,
    leaf_count: usize,
}

impl MerkleTree {
    pub fn new(entries: &[TreeNode]) -> Self {
        let nodes = entries
            .iter()
            .enumerate()
            .map(|(index, node)| hash_leaf(index as u64, &node.claimant, node.amount))
            .collect();

        let mut tree = MerkleTree {
            nodes,
            leaf_count: entries.len(),
        };
        tree.build_tree();
        tree
    }

    fn build_tree(&mut self) {
        let mut level_len = Self::next_level_len(self.leaf_count);
        let mut level_start = self.leaf_count;
        let mut prev_level_len = self.leaf_count;
        let mut prev_level_start = 0;

        while level_len > 0 {
            for i in 0..level_len {
                let prev_level_idx = 2 * i;
                let left = self.nodes[prev_level_start + prev_level_idx];
                let right = if prev_level_idx + 1 < prev_level_len {
                    self.nodes[prev_level_start + prev_level_idx + 1]
                } else {
                    left
                };
                self.nodes.push(hash_pair(&left, &right));
            }

            prev_level_start = level_start;
            prev_level_len = level_len;
            level_start += level_len;
            level_len = Self::next_level_len(level_len);
        }
    }

    fn next_level_len(level_len: usize) -> usize {
        if level_len <= 1 {
            0
        } else {
            (level_len + 1) / 2
        }
    }

    pub fn root(&self) -> Option<[u8; 32]> {
        self.nodes.last().copied()
    }

    /// Sibling hashes from leaf `index` up to the root
    pub fn proof(&self, index: usize) -> Result<Vec<[u8; 32]>, &'static str> {
        if index >= self.leaf_count {
            return Err("Index out of bounds");
        }

        let mut proof = Vec::new();
        let mut current_index = index;
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let sibling_index = if current_index % 2 == 0 {
                if current_index + 1 < level_len {
                    current_index + 1
                } else {
                    current_index
                }
            } else {
                current_index - 1
            };
            proof.push(self.nodes[level_start + sibling_index]);

            current_index /= 2;
            level_start += level_len;
            level_len = Self::next_level_len(level_len);
        }

        Ok(proof)
    }
}
