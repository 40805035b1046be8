use std::fmt;

use crate::Int;

/// A doubly-linked circular list stored in an arena.
///
/// Nodes never leave the arena, so a node's slot is also its insertion order.
/// Unlinking a node only detaches it from its neighbors; the node keeps its
/// own `prev`/`next` so it can be walked from and relinked.
pub struct CircularList {
    head_idx: Option<ListIndex>,
    nodes: Vec<Node>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListIndex(pub usize);

pub struct Node {
    pub val: Int,
    prev: ListIndex,
    next: ListIndex,
}

impl Node {
    fn new(val: Int, prev: ListIndex, next: ListIndex) -> Self {
        Self { val, prev, next }
    }

    pub fn prev(&self) -> ListIndex {
        self.prev
    }

    pub fn next(&self) -> ListIndex {
        self.next
    }
}

impl CircularList {
    pub fn with_capacity(capacity: usize) -> Self {
        CircularList {
            head_idx: None,
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, idx: ListIndex) -> &Node {
        &self.nodes[idx.0]
    }

    fn get_mut(&mut self, idx: ListIndex) -> &mut Node {
        &mut self.nodes[idx.0]
    }

    /// Appends `val` just before the head, i.e. at the end of the circle.
    pub fn push(&mut self, val: Int) {
        let new_idx = ListIndex(self.len());
        match self.head_idx {
            Some(head_idx) => {
                let tail_idx = self.get(head_idx).prev;
                self.nodes.push(Node::new(val, tail_idx, head_idx));
                self.get_mut(head_idx).prev = new_idx;
                self.get_mut(tail_idx).next = new_idx;
            },
            None => {
                self.nodes.push(Node::new(val, new_idx, new_idx));
                self.head_idx = Some(new_idx);
            },
        }
    }

    /// Connects the neighbors of `idx` to each other.
    ///
    /// Before: `a -> idx -> b`
    /// After: `a -> b`
    pub fn unlink(&mut self, idx: ListIndex) {
        let node = self.get(idx);
        let (prev_idx, next_idx) = (node.prev, node.next);
        self.get_mut(next_idx).prev = prev_idx;
        self.get_mut(prev_idx).next = next_idx;
    }

    /// Splices `idx` in directly after `dest`.
    ///
    /// Before: `dest -> b`
    /// After: `dest -> idx -> b`
    pub fn link_after(&mut self, dest: ListIndex, idx: ListIndex) {
        let next_idx = self.get(dest).next;
        let node = self.get_mut(idx);
        node.prev = dest;
        node.next = next_idx;
        self.get_mut(next_idx).prev = idx;
        self.get_mut(dest).next = idx;
    }

    /// Follows `next` links `steps` times, or `prev` links when `steps` is
    /// negative.
    pub fn walk(&self, from: ListIndex, steps: Int) -> ListIndex {
        let mut cur = from;
        if steps >= 0 {
            for _ in 0..steps {
                cur = self.get(cur).next;
            }
        } else {
            for _ in 0..steps.unsigned_abs() {
                cur = self.get(cur).prev;
            }
        }
        cur
    }

    /// First node, in insertion order, holding `val`.
    pub fn find(&self, val: Int) -> Option<ListIndex> {
        self.nodes.iter().position(|n| n.val == val).map(ListIndex)
    }

    pub fn next_nodes(&self, idx: ListIndex) -> NextNodes {
        NextNodes { list: self, cur: self.get(idx) }
    }

    /// One full lap of values in circle order, starting at `idx`.
    pub fn values_from(&self, idx: ListIndex) -> Vec<Int> {
        self.next_nodes(idx).take(self.len()).map(|n| n.val).collect()
    }
}

impl From<&[Int]> for CircularList {
    fn from(vals: &[Int]) -> Self {
        let mut cl = CircularList::with_capacity(vals.len());
        for &v in vals {
            cl.push(v);
        }
        cl
    }
}

impl fmt::Debug for CircularList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}<({}:{})>{}", node.prev.0, i, node.val, node.next.0)?;
        }
        Ok(())
    }
}

pub struct NextNodes<'a> {
    list: &'a CircularList,
    cur: &'a Node,
}

impl<'a> Iterator for NextNodes<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let to_yield = self.cur;
        self.cur = self.list.get(self.cur.next);
        Some(to_yield)
    }
}
