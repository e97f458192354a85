//! Account index module
//!
//! This module provides the `AccountIndex`, an unbalanced binary search tree
//! keyed by account number. Nodes live in an arena (`Vec`) and refer to their
//! children by index, so the tree needs no boxing or unsafe pointer juggling.
//!
//! The AccountIndex is responsible for:
//! - Inserting accounts, rejecting duplicate account numbers
//! - Exact lookup, with mutable access for in-place balance updates
//! - Lazy in-order enumeration (ascending account number)
//!
//! # Shape
//!
//! The tree is never rebalanced. Lookup costs O(depth): O(log n) on random
//! insertion order, O(n) when accounts arrive already sorted. Accounts are
//! never removed, so the arena only grows.

use crate::types::{Account, AccountNumber, LedgerError};
use std::cmp::Ordering;

/// Index of a node in the arena
type NodeId = usize;

#[derive(Debug, Clone)]
struct Node {
    account: Account,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl Node {
    fn leaf(account: Account) -> Self {
        Node {
            account,
            left: None,
            right: None,
        }
    }
}

/// Ordered store of accounts keyed by account number
///
/// Invariant: for every node, all keys in its left subtree are smaller and all
/// keys in its right subtree are larger than its own key.
#[derive(Debug, Clone, Default)]
pub struct AccountIndex {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl AccountIndex {
    /// Create an empty index
    pub fn new() -> Self {
        AccountIndex {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no account has been stored yet
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a new account
    ///
    /// Walks from the root to the empty child slot where the account number
    /// belongs and attaches a new leaf there.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` if the account number is already present.
    /// Nothing is mutated in that case.
    pub fn insert(&mut self, account: Account) -> Result<(), LedgerError> {
        let number = account.number;
        let mut parent: Option<(NodeId, Ordering)> = None;
        let mut cursor = self.root;

        while let Some(id) = cursor {
            let node = &self.nodes[id];
            match number.cmp(&node.account.number) {
                Ordering::Less => {
                    parent = Some((id, Ordering::Less));
                    cursor = node.left;
                }
                Ordering::Greater => {
                    parent = Some((id, Ordering::Greater));
                    cursor = node.right;
                }
                Ordering::Equal => return Err(LedgerError::duplicate_account(number)),
            }
        }

        let id = self.nodes.len();
        self.nodes.push(Node::leaf(account));

        match parent {
            None => self.root = Some(id),
            Some((parent, Ordering::Less)) => self.nodes[parent].left = Some(id),
            Some((parent, _)) => self.nodes[parent].right = Some(id),
        }

        Ok(())
    }

    /// Look up an account by exact account number
    ///
    /// Absence is not an error at this layer.
    pub fn find(&self, number: AccountNumber) -> Option<&Account> {
        self.locate(number).map(|id| &self.nodes[id].account)
    }

    /// Look up an account for in-place modification
    ///
    /// The account number must not be changed through the returned reference;
    /// doing so would break the ordering invariant.
    pub fn find_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.locate(number).map(|id| &mut self.nodes[id].account)
    }

    /// Whether an account with this number is stored
    pub fn contains(&self, number: AccountNumber) -> bool {
        self.locate(number).is_some()
    }

    /// Enumerate accounts in ascending account number order
    ///
    /// Each call starts a fresh traversal; the iterator is lazy and visits
    /// every stored account exactly once.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            nodes: &self.nodes,
            stack: Vec::new(),
        };
        iter.descend_left(self.root);
        iter
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();

        while let Some((id, level)) = pending.pop() {
            deepest = deepest.max(level);
            let node = &self.nodes[id];
            pending.extend(node.left.map(|child| (child, level + 1)));
            pending.extend(node.right.map(|child| (child, level + 1)));
        }

        deepest
    }

    fn locate(&self, number: AccountNumber) -> Option<NodeId> {
        let mut cursor = self.root;

        while let Some(id) = cursor {
            let node = &self.nodes[id];
            cursor = match number.cmp(&node.account.number) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }

        None
    }
}

impl<'a> IntoIterator for &'a AccountIndex {
    type Item = &'a Account;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over an [`AccountIndex`]
///
/// Holds the chain of ancestors whose own account has not been yielded yet.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    nodes: &'a [Node],
    stack: Vec<NodeId>,
}

impl<'a> Iter<'a> {
    fn descend_left(&mut self, mut cursor: Option<NodeId>) {
        while let Some(id) = cursor {
            self.stack.push(id);
            cursor = self.nodes[id].left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Account;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let nodes = self.nodes;
        let node = &nodes[id];
        self.descend_left(node.right);
        Some(&node.account)
    }
}
