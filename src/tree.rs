use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::outcome::AddOutcome;

type Link<K> = Option<Box<Node<K>>>;

struct Node<K> {
    key: K,
    left_ptr: Link<K>,
    right_ptr: Link<K>,
}

impl<K> Node<K> {
    fn leaf(key: K) -> Self {
        Node {
            key,
            left_ptr: None,
            right_ptr: None,
        }
    }
}

impl<K: Ord> Node<K> {
    // Child link a search for `key` continues into, `None` when this node holds `key`.
    fn next(&self, key: &K) -> Option<&Link<K>> {
        match self.key.cmp(key) {
            Ordering::Equal => None,
            Ordering::Less => Some(&self.right_ptr),
            Ordering::Greater => Some(&self.left_ptr),
        }
    }

    fn next_mut(&mut self, key: &K) -> Option<&mut Link<K>> {
        match self.key.cmp(key) {
            Ordering::Equal => None,
            Ordering::Less => Some(&mut self.right_ptr),
            Ordering::Greater => Some(&mut self.left_ptr),
        }
    }
}

/// Unbalanced binary search tree holding unique keys.
///
/// `mass` is the number of distinct keys stored. It only grows: the tree supports adding keys,
/// never removing them.
pub struct Bst<K> {
    root: Link<K>,
    mass: usize,
}

impl<K: Ord> Bst<K> {
    pub fn new() -> Self {
        Bst {
            root: None,
            mass: 0,
        }
    }

    pub fn mass(&self) -> usize {
        self.mass
    }

    pub fn is_empty(&self) -> bool {
        self.mass == 0
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut option = &self.root;
        while let Some(node) = option {
            match node.next(key) {
                Some(next) => option = next,
                None => return true,
            }
        }
        false
    }

    /// Empty link where `key` would be attached, with its depth. `None` if `key` is stored.
    fn vacant_link_mut(&mut self, key: &K) -> Option<(&mut Link<K>, usize)> {
        let mut node_ptr = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = node_ptr {
            node_ptr = node.next_mut(key)?;
            depth += 1;
        }
        Some((node_ptr, depth))
    }

    /// Adds `key` as a new leaf unless an equal key is already stored.
    ///
    /// A duplicate leaves the tree untouched and is reported as [`AddOutcome::AlreadyPresent`].
    pub fn add(&mut self, key: K) -> AddOutcome {
        let depth = match self.vacant_link_mut(&key) {
            Some((link, depth)) => {
                *link = Some(Box::new(Node::leaf(key)));
                depth
            }
            None => {
                trace!("add: {}, mass stays {}", AddOutcome::AlreadyPresent, self.mass);
                return AddOutcome::AlreadyPresent;
            }
        };
        self.mass += 1;
        trace!(
            "add at depth {}: {}, mass is now {}",
            depth,
            AddOutcome::Inserted,
            self.mass
        );
        AddOutcome::Inserted
    }
}

impl<K: Ord> Default for Bst<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Extend<K> for Bst<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for Bst<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Bst::new();
        tree.extend(iter);
        tree
    }
}

// Formats as a set in key order, walking with an explicit stack like `drop` below.
impl<K: fmt::Debug> fmt::Debug for Bst<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut set = f.debug_set();
        let mut stack: Vec<&Node<K>> = Vec::new();
        let mut cur = self.root.as_deref();
        loop {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left_ptr.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    set.entry(&node.key);
                    cur = node.right_ptr.as_deref();
                }
                None => break,
            }
        }
        set.finish()
    }
}

// The default drop would recurse once per level, and a tree fed sorted keys is as deep as it
// is large.
impl<K> Drop for Bst<K> {
    fn drop(&mut self) {
        if self.mass > 0 {
            debug!("dropping tree of mass {}", self.mass);
        }
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left_ptr.take());
            stack.extend(node.right_ptr.take());
        }
    }
}
