//! Tree builder: turns a flat, ordered item list into a nested forest.
//!
//! The builder never fails. Items whose declared parent is absent from the
//! input (orphans) are left out, together with everything below them.
//! Children keep the relative order in which they appeared in the input.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use menu_shared::EntityId;
use serde::Serialize;

use crate::domain::{MenuItem, MenuItemWithMenu};

/// Anything that can be placed in a forest by id and parent id.
pub trait TreeItem {
    fn id(&self) -> EntityId;
    fn parent_id(&self) -> Option<EntityId>;
}

impl TreeItem for MenuItem {
    fn id(&self) -> EntityId {
        self.id
    }

    fn parent_id(&self) -> Option<EntityId> {
        self.parent_id
    }
}

impl TreeItem for MenuItemWithMenu {
    fn id(&self) -> EntityId {
        self.item.id
    }

    fn parent_id(&self) -> Option<EntityId> {
        self.item.parent_id
    }
}

/// One node of a rebuilt forest. Serializes as the item's own fields plus
/// `children`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode<T> {
    #[serde(flatten)]
    pub item: T,
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, itself included.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

/// Builds the forest of `items`. O(n) time and space.
///
/// When an id occurs more than once, the first occurrence wins and later
/// duplicates are dropped. Items that cannot reach a root through their
/// parent links (orphans, self-parented items, cycles) are excluded.
pub fn build_hierarchy<T, I>(items: I) -> Vec<TreeNode<T>>
where
    T: TreeItem,
    I: IntoIterator<Item = T>,
{
    let mut slots: Vec<Option<T>> = Vec::new();
    let mut index: HashMap<EntityId, usize> = HashMap::new();
    for item in items {
        if let Entry::Vacant(entry) = index.entry(item.id()) {
            entry.insert(slots.len());
            slots.push(Some(item));
        }
    }

    let mut roots = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); slots.len()];
    for (pos, item) in slots.iter().enumerate() {
        let Some(item) = item else { continue };
        match item.parent_id() {
            None => roots.push(pos),
            Some(parent) => {
                if let Some(&parent_pos) = index.get(&parent) {
                    children[parent_pos].push(pos);
                }
            }
        }
    }

    // Pre-order walk from the roots; only reachable nodes are visited.
    let mut order = Vec::with_capacity(slots.len());
    let mut stack: Vec<usize> = roots.iter().rev().copied().collect();
    while let Some(pos) = stack.pop() {
        order.push(pos);
        stack.extend(children[pos].iter().rev().copied());
    }

    // Children precede their parent in reverse pre-order, so every subtree
    // is complete by the time its parent is assembled.
    let mut built: Vec<Option<TreeNode<T>>> = (0..slots.len()).map(|_| None).collect();
    for &pos in order.iter().rev() {
        let kids = children[pos].iter().filter_map(|&c| built[c].take()).collect();
        if let Some(item) = slots[pos].take() {
            built[pos] = Some(TreeNode {
                item,
                children: kids,
            });
        }
    }

    roots.iter().filter_map(|&pos| built[pos].take()).collect()
}

/// Pre-order flattening of a forest; the inverse of [`build_hierarchy`]
/// on everything the builder kept.
pub fn flatten<T>(forest: Vec<TreeNode<T>>) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack: Vec<TreeNode<T>> = forest.into_iter().rev().collect();
    while let Some(TreeNode { item, children }) = stack.pop() {
        stack.extend(children.into_iter().rev());
        out.push(item);
    }
    out
}
