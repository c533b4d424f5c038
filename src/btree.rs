use std::{cmp::Ordering, mem};

use itertools::Itertools;

/// An ordered set of keys stored in a B-tree.
///
/// Every node except the root holds between `min_degree - 1` and
/// `2 * min_degree - 1` keys, and all leaves sit at the same depth. Both
/// `insert` and `remove` restore those bounds on the way down, so neither
/// ever has to walk back up the tree.
pub struct BTree<K: Ord> {
    root: Node<K>,
    min_degree: usize,
}

impl<K: Ord> BTree<K> {
    /// Creates an empty tree. `min_degree` must be at least 2.
    pub fn new(min_degree: usize) -> Self {
        assert!(min_degree >= 2, "B-tree minimum degree must be at least 2");
        BTree {
            root: Node::new(min_degree),
            min_degree,
        }
    }

    /// The root node, for read-only structural access.
    pub fn root(&self) -> &Node<K> {
        &self.root
    }

    /// Finds the node and key index holding `key`, if it is present.
    pub fn search(&self, key: &K) -> Option<(&Node<K>, usize)> {
        self.root.search(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Inserts a key. Returns false, leaving the key set unchanged, if the
    /// key was already present.
    pub fn insert(&mut self, key: K) -> bool {
        if self.root.is_full() {
            // the old root becomes the single child of a fresh one and is
            // split immediately; this is the only place the tree grows taller
            let min_degree = self.min_degree;
            let old_root = mem::replace(&mut self.root, Node::new(min_degree));
            self.root.children.push(old_root);
            self.root.split_child(0);
        }
        self.root.insert_nonfull(key)
    }

    /// Removes a key. Returns false, leaving the key set unchanged, if the
    /// key was not present.
    pub fn remove(&mut self, key: &K) -> bool {
        let removed = self.root.remove(key);
        if self.root.keys.is_empty() && !self.root.is_leaf() {
            // a merge emptied the root; its lone child takes its place
            self.root = self.root.children.pop().unwrap();
        }
        removed
    }

    /// The largest key, or None when the tree is empty.
    pub fn greatest(&self) -> Option<&K> {
        if self.root.keys.is_empty() {
            None
        } else {
            Some(self.root.greatest())
        }
    }

    /// The smallest key, or None when the tree is empty.
    pub fn smallest(&self) -> Option<&K> {
        if self.root.keys.is_empty() {
            None
        } else {
            Some(self.root.smallest())
        }
    }

    /// Verifies the structural invariants of the whole tree: occupancy
    /// bounds, strictly increasing keys, and that every subtree stays
    /// strictly inside the open interval its neighboring keys imply.
    /// `None` stands for an unbounded end. Diagnostic only; no mutation
    /// path consults it.
    pub fn check(&self, lower: Option<&K>, upper: Option<&K>) -> bool {
        self.root.check(true, lower, upper)
    }
}

pub struct Node<K: Ord> {
    keys: Vec<K>,
    children: Vec<Node<K>>,
    min_degree: usize,
}

impl<K: Ord> Node<K> {
    fn new(min_degree: usize) -> Self {
        Node {
            keys: Vec::with_capacity(2 * min_degree - 1),
            children: Vec::new(),
            min_degree,
        }
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn children(&self) -> &[Node<K>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn is_full(&self) -> bool {
        self.keys.len() == 2 * self.min_degree - 1
    }

    fn is_minimal(&self) -> bool {
        self.keys.len() == self.min_degree - 1
    }

    fn search(&self, key: &K) -> Option<(&Node<K>, usize)> {
        match self.keys.binary_search(key) {
            Ok(idx) => Some((self, idx)),
            Err(idx) => {
                if self.is_leaf() {
                    None
                } else {
                    self.children[idx].search(key)
                }
            }
        }
    }

    /// Splits the full child at `idx` into two minimal halves, promoting
    /// its median key into this node at position `idx`.
    fn split_child(&mut self, idx: usize) {
        assert!(!self.is_full());
        let min_degree = self.min_degree;
        let child = &mut self.children[idx];
        assert!(child.is_full());

        let right_keys = child.keys.split_off(min_degree);
        let median = child.keys.pop().unwrap();
        let right_children = if child.is_leaf() {
            Vec::new()
        } else {
            child.children.split_off(min_degree)
        };

        let right = Node {
            keys: right_keys,
            children: right_children,
            min_degree,
        };
        self.keys.insert(idx, median);
        self.children.insert(idx + 1, right);
    }

    fn insert_nonfull(&mut self, key: K) -> bool {
        assert!(!self.is_full());
        match self.keys.binary_search(&key) {
            Ok(_) => false,
            Err(mut idx) => {
                if self.is_leaf() {
                    self.keys.insert(idx, key);
                    true
                } else {
                    if self.children[idx].is_full() {
                        self.split_child(idx);
                        // the promoted median now sits at idx and may be the
                        // key itself, or may change which half to descend into
                        match key.cmp(&self.keys[idx]) {
                            Ordering::Less => (),
                            Ordering::Equal => return false,
                            Ordering::Greater => idx += 1,
                        }
                    }
                    self.children[idx].insert_nonfull(key)
                }
            }
        }
    }

    /// Moves one key from the left sibling up into this node and one key
    /// down into the minimal child at `idx`, along with the hand-off child
    /// between them.
    fn rotate_from_left(&mut self, idx: usize) {
        let (left, right) = self.children.split_at_mut(idx);
        let sibling = left.last_mut().unwrap();
        let child = &mut right[0];
        assert!(child.is_minimal());
        assert!(sibling.keys.len() >= sibling.min_degree);

        let raised = sibling.keys.pop().unwrap();
        let lowered = mem::replace(&mut self.keys[idx - 1], raised);
        child.keys.insert(0, lowered);
        if let Some(hand_off) = sibling.children.pop() {
            child.children.insert(0, hand_off);
        }
    }

    fn rotate_from_right(&mut self, idx: usize) {
        let (left, right) = self.children.split_at_mut(idx + 1);
        let child = &mut left[idx];
        let sibling = &mut right[0];
        assert!(child.is_minimal());
        assert!(sibling.keys.len() >= sibling.min_degree);

        let raised = sibling.keys.remove(0);
        let lowered = mem::replace(&mut self.keys[idx], raised);
        child.keys.push(lowered);
        if !sibling.children.is_empty() {
            child.children.push(sibling.children.remove(0));
        }
    }

    /// Folds the key at `idx` and the right sibling into the child at
    /// `idx`, producing a single full node. The only operation that can
    /// leave a node keyless, which `BTree::remove` repairs at the root.
    fn merge_children(&mut self, idx: usize) {
        assert!(self.children[idx].is_minimal());
        assert!(self.children[idx + 1].is_minimal());

        let mut right = self.children.remove(idx + 1);
        let median = self.keys.remove(idx);
        let left = &mut self.children[idx];
        left.keys.push(median);
        left.keys.append(&mut right.keys);
        left.children.append(&mut right.children);
    }

    /// Brings the minimal child at `idx` up to `min_degree` keys, or folds
    /// it into a sibling, so a removal descent can step into it. Returns
    /// the index the target subtree lives at afterwards.
    fn fill_child(&mut self, idx: usize) -> usize {
        assert!(self.children[idx].is_minimal());
        if idx < self.keys.len() && self.children[idx + 1].keys.len() >= self.min_degree {
            self.rotate_from_right(idx);
            idx
        } else if idx > 0 && self.children[idx - 1].keys.len() >= self.min_degree {
            self.rotate_from_left(idx);
            idx
        } else if idx == self.keys.len() {
            // last child with no rich sibling; merge into the one on its left
            self.merge_children(idx - 1);
            idx - 1
        } else {
            self.merge_children(idx);
            idx
        }
    }

    fn remove(&mut self, key: &K) -> bool {
        match self.keys.binary_search(key) {
            Ok(idx) => {
                if self.is_leaf() {
                    self.keys.remove(idx);
                    true
                } else if self.children[idx].keys.len() >= self.min_degree {
                    // swap in the predecessor from the rich left subtree
                    self.keys[idx] = self.children[idx].remove_greatest();
                    true
                } else if self.children[idx + 1].keys.len() >= self.min_degree {
                    self.keys[idx] = self.children[idx + 1].remove_smallest();
                    true
                } else {
                    // both subtrees minimal; the key becomes the median of
                    // their merge and is removed from there
                    self.merge_children(idx);
                    self.children[idx].remove(key)
                }
            }
            Err(idx) => {
                if self.is_leaf() {
                    return false;
                }
                let idx = if self.children[idx].is_minimal() {
                    self.fill_child(idx)
                } else {
                    idx
                };
                self.children[idx].remove(key)
            }
        }
    }

    /// Removes and returns the largest key of this subtree. The subtree
    /// root must have at least `min_degree` keys.
    fn remove_greatest(&mut self) -> K {
        if self.is_leaf() {
            return self.keys.pop().unwrap();
        }
        let last = self.children.len() - 1;
        if self.children[last].keys.len() >= self.min_degree {
            return self.children[last].remove_greatest();
        }
        if self.children[last - 1].keys.len() >= self.min_degree {
            self.rotate_from_left(last);
            return self.children[last].remove_greatest();
        }
        self.merge_children(last - 1);
        let last = self.children.len() - 1;
        self.children[last].remove_greatest()
    }

    fn remove_smallest(&mut self) -> K {
        if self.is_leaf() {
            return self.keys.remove(0);
        }
        if self.children[0].keys.len() >= self.min_degree {
            return self.children[0].remove_smallest();
        }
        if self.children[1].keys.len() >= self.min_degree {
            self.rotate_from_right(0);
            return self.children[0].remove_smallest();
        }
        self.merge_children(0);
        self.children[0].remove_smallest()
    }

    fn greatest(&self) -> &K {
        if self.is_leaf() {
            self.keys.last().unwrap()
        } else {
            self.children.last().unwrap().greatest()
        }
    }

    fn smallest(&self) -> &K {
        if self.is_leaf() {
            self.keys.first().unwrap()
        } else {
            self.children.first().unwrap().smallest()
        }
    }

    fn check(&self, is_root: bool, lower: Option<&K>, upper: Option<&K>) -> bool {
        if self.keys.len() > 2 * self.min_degree - 1 {
            return false;
        }
        if !is_root && self.keys.len() < self.min_degree - 1 {
            return false;
        }
        if is_root && !self.is_leaf() && self.keys.is_empty() {
            return false;
        }
        if !self.keys.iter().tuple_windows().all(|(a, b)| a < b) {
            return false;
        }
        let in_bounds =
            |k: &K| lower.map_or(true, |lo| k > lo) && upper.map_or(true, |hi| k < hi);
        if !self.keys.iter().all(in_bounds) {
            return false;
        }
        if self.is_leaf() {
            return true;
        }
        if self.children.len() != self.keys.len() + 1 {
            return false;
        }
        self.children.iter().enumerate().all(|(idx, child)| {
            let child_lower = if idx == 0 { lower } else { Some(&self.keys[idx - 1]) };
            let child_upper = if idx == self.keys.len() {
                upper
            } else {
                Some(&self.keys[idx])
            };
            child.check(false, child_lower, child_upper)
        })
    }
}
