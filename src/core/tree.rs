//! Purpose: Arena-backed binary tree of integers with level-order array codecs.
//! Exports: `Tree`, `TreeNode`, `NodeId`.
//! Role: Native argument/result shape for tree problems; compact level-order on the wire.
//! Invariants: Children are owned exclusively through arena indices; no cycles.
//! Invariants: Build and serialize use explicit queues, never call-stack recursion.
//! Invariants: Reconstruction assigns slots breadth-first (queue of pending
//! parents), not by fixed `2i+1`/`2i+2` arithmetic, which disagrees with the
//! compact encoding once absent nodes are skipped asymmetrically.
use std::collections::VecDeque;

use crate::core::value::ABSENT_INT;

pub type NodeId = usize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeNode {
    pub val: i64,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    root: Option<NodeId>,
}

impl Tree {
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Reconstructs a tree from its compact level-order encoding, where
    /// `ABSENT_INT` marks an absent node. An empty slice or a leading
    /// sentinel yields no tree.
    pub fn from_level_order(slots: &[i64]) -> Self {
        if slots.is_empty() || slots[0] == ABSENT_INT {
            return Self::empty();
        }
        let mut nodes = vec![TreeNode {
            val: slots[0],
            left: None,
            right: None,
        }];
        let mut pending = VecDeque::new();
        pending.push_back(0);
        let mut next_slot = 1;

        // Pop the next pending parent and consume up to two slots as its
        // left/right children; absent slots consume their position but
        // produce no node.
        while let Some(parent) = pending.pop_front() {
            if next_slot >= slots.len() {
                break;
            }
            let left = slots[next_slot];
            next_slot += 1;
            if left != ABSENT_INT {
                let id = nodes.len();
                nodes.push(TreeNode {
                    val: left,
                    left: None,
                    right: None,
                });
                nodes[parent].left = Some(id);
                pending.push_back(id);
            }
            if next_slot >= slots.len() {
                break;
            }
            let right = slots[next_slot];
            next_slot += 1;
            if right != ABSENT_INT {
                let id = nodes.len();
                nodes.push(TreeNode {
                    val: right,
                    left: None,
                    right: None,
                });
                nodes[parent].right = Some(id);
                pending.push_back(id);
            }
        }
        Self {
            nodes,
            root: Some(0),
        }
    }

    /// Emits the compact level-order encoding: breadth-first, a sentinel for
    /// each absent child while the frontier still holds pending nodes, then
    /// trailing sentinels trimmed.
    pub fn to_level_order(&self) -> Vec<i64> {
        let mut out = Vec::new();
        let mut frontier = VecDeque::new();
        frontier.push_back(self.root);
        while let Some(slot) = frontier.pop_front() {
            match slot {
                Some(id) => {
                    let node = self.nodes[id];
                    out.push(node.val);
                    frontier.push_back(node.left);
                    frontier.push_back(node.right);
                }
                None => out.push(ABSENT_INT),
            }
        }
        while out.last() == Some(&ABSENT_INT) {
            out.pop();
        }
        out
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Swaps left and right children of every node. Index-order iteration is
    /// equivalent to any traversal here since the swap is per-node.
    pub fn invert(&mut self) {
        for node in &mut self.nodes {
            std::mem::swap(&mut node.left, &mut node.right);
        }
    }

    /// Longest root-to-leaf node count, computed with an explicit frontier.
    pub fn depth(&self) -> usize {
        let Some(root) = self.root else { return 0 };
        let mut depth = 0;
        let mut frontier = vec![root];
        while !frontier.is_empty() {
            depth += 1;
            let mut next = Vec::new();
            for id in frontier {
                let node = self.nodes[id];
                if let Some(left) = node.left {
                    next.push(left);
                }
                if let Some(right) = node.right {
                    next.push(right);
                }
            }
            frontier = next;
        }
        depth
    }
}
