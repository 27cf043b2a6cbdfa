//! # Child Index
//!
//! Reverse `parent -> children` index over the block DAG.
//!
//! Append-only: an entry is added when a block naming the parent is
//! inserted and is never removed. Children are kept in insertion order.
//! The parent itself does not need to be stored yet.

use shared_types::{Block, BlockHash};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ChildIndex {
    children: HashMap<BlockHash, Vec<BlockHash>>,
}

impl ChildIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Child lists as they will look once `child` is recorded.
    ///
    /// One entry per distinct parent of `block`, in header order. Used to
    /// stage the persisted lists before committing them with the block.
    pub fn staged_lists(&self, child: BlockHash, block: &Block) -> Vec<(BlockHash, Vec<BlockHash>)> {
        let mut staged: Vec<(BlockHash, Vec<BlockHash>)> = Vec::new();
        for parent in block.parent_hashes() {
            if staged.iter().any(|(p, _)| p == parent) {
                continue;
            }
            let mut list = self.children(parent);
            if !list.contains(&child) {
                list.push(child);
            }
            staged.push((*parent, list));
        }
        staged
    }

    /// Record `child` under every parent listed in `block`'s header.
    pub fn on_insert(&mut self, child: BlockHash, block: &Block) {
        for parent in block.parent_hashes() {
            let list = self.children.entry(*parent).or_default();
            if !list.contains(&child) {
                list.push(child);
            }
        }
    }

    /// Replace the list for `parent`, used when reloading from storage.
    pub fn restore(&mut self, parent: BlockHash, children: Vec<BlockHash>) {
        self.children.insert(parent, children);
    }

    /// Recorded children of `parent`, empty if none.
    pub fn children(&self, parent: &BlockHash) -> Vec<BlockHash> {
        self.children.get(parent).cloned().unwrap_or_default()
    }

    /// Number of parents with at least one child.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
