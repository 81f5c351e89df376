//! The position cache: a single remembered `(index, node)` pair.
//!
//! The cache is a performance memo, never part of the list's logical value.
//! Every mutator that changes chain topology or relative ordering reports the
//! change here, so the adjustment rules live in one place instead of being
//! re-derived per call site.
//!
//! # Invariants
//!
//! - If `node` is `Some`, it refers to a node currently in the chain and
//!   `index` is exactly that node's distance from the head.
//! - If `node` is `None`, `index` is 0. The state `(index > 0, None)` is
//!   unrepresentable: the only operation that bumps the index without
//!   supplying a node ([`Cache::on_push_front`]) seeds `(0, head)` when the
//!   slot is empty instead.
//!
//! Interior mutability (`Cell`) lets lookups through `&self` refresh the
//! memo. This is why the list is `Send` but not `Sync`: two threads reading
//! through shared references would race on these cells.

use core::cell::Cell;
use core::ptr::NonNull;

use crate::list::{Link, Node};

pub(crate) struct Cache<T> {
    index: Cell<usize>,
    node: Cell<Link<T>>,
}

impl<T> Cache<T> {
    pub(crate) const fn new() -> Self {
        Self {
            index: Cell::new(0),
            node: Cell::new(None),
        }
    }

    /// The remembered position, if the slot holds a node.
    #[inline]
    pub(crate) fn get(&self) -> Option<(usize, NonNull<Node<T>>)> {
        self.node.get().map(|node| (self.index.get(), node))
    }

    #[cfg(test)]
    pub(crate) fn index(&self) -> usize {
        self.index.get()
    }

    #[cfg(test)]
    pub(crate) fn node(&self) -> Link<T> {
        self.node.get()
    }

    /// Remembers a freshly resolved position.
    #[inline]
    pub(crate) fn record(&self, index: usize, node: NonNull<Node<T>>) {
        self.index.set(index);
        self.node.set(Some(node));
    }

    /// Forgets the current position and points at the head (which may be
    /// `None` for an empty chain).
    #[inline]
    pub(crate) fn reset(&self, head: Link<T>) {
        self.index.set(0);
        self.node.set(head);
    }

    /// A new node became the head; every existing node moved one slot up.
    ///
    /// The cached node's reference stays valid, only its distance from the
    /// head grew. An empty slot instead seeds the new head directly, keeping
    /// the index/node pair in lock step across empty-to-nonempty transitions.
    #[inline]
    pub(crate) fn on_push_front(&self, head: NonNull<Node<T>>) {
        match self.node.get() {
            Some(_) => self.index.set(self.index.get() + 1),
            None => self.reset(Some(head)),
        }
    }

    /// A node was spliced in at `pos`; nodes at `pos` and beyond moved up.
    #[inline]
    pub(crate) fn on_insert(&self, pos: usize) {
        if self.node.get().is_some() && pos <= self.index.get() {
            self.index.set(self.index.get() + 1);
        }
    }

    /// The node at `idx` was unlinked; nodes beyond it moved down.
    ///
    /// When the removed node is the cached one, the cache advances to its
    /// former successor, which now occupies the same index. With no
    /// successor it falls back to `(0, head)`.
    pub(crate) fn on_remove(&self, idx: usize, successor: Link<T>, head: Link<T>) {
        if self.node.get().is_none() {
            return;
        }
        let at = self.index.get();
        if idx == at {
            match successor {
                Some(node) => self.node.set(Some(node)),
                None => self.reset(head),
            }
        } else if idx < at {
            self.index.set(at - 1);
        }
    }
}
