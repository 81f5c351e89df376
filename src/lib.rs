//! An ordered-sequence container on a singly-linked chain of heap nodes,
//! with a single-slot position cache for amortized indexed access.
//!
//! [`SeqList`] keeps sequence semantics (ordered values, duplicates allowed)
//! without contiguous storage. The cost model of a plain linked list makes
//! indexed access O(n) from the head every time; this crate keeps the most
//! recently resolved `(index, node)` pair and resumes from it whenever the
//! requested index lies at or past it:
//!
//! ```text
//! head -> [0] -> [1] -> [2] -> [3] -> [4] -> (end)
//!                        ^
//!                      cache (index 2)
//!
//! get(4): resume from the cache, walk 2 links   (not 4 from the head)
//! get(1): behind the cache, restart at the head
//! ```
//!
//! Ascending sweeps (`list[0]`, `list[1]`, …, `list[n-1]`) therefore cost
//! amortized O(1) per access. Every mutator keeps the cache in lock step
//! with the chain, so the memo is never stale.
//!
//! # Quick Start
//!
//! ```
//! use seqlist::SeqList;
//!
//! let mut list: SeqList<u64> = SeqList::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_back(3);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.front(), Some(&1));
//! assert_eq!(list.back(), Some(&3));
//! assert_eq!(list[1], 2);
//!
//! // The new value takes the given index; everything after shifts up.
//! list.insert(1, 9);
//! assert_eq!(list, SeqList::from([1, 9, 2, 3]));
//!
//! assert_eq!(list.remove(0), 1);
//! for (i, value) in list.iter().enumerate() {
//!     assert_eq!(list[i], *value);
//! }
//! ```
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `push_back`, `push_front`, `remove(0)` | O(1) |
//! | `get`, `insert`, `remove` | O(distance from cache), amortized; O(len) worst case |
//! | ascending indexed sweep | amortized O(1) per access |
//! | `clone`, `==` | O(len) |
//! | move, `swap` | O(1), no element is touched |
//!
//! # Validation mode
//!
//! Index checks are always performed; there is no unchecked build. The
//! recoverable forms ([`SeqList::get`], [`SeqList::front`], …) return
//! `Option`; the operator forms (`list[i]`, [`SeqList::insert`],
//! [`SeqList::remove`]) panic on an out-of-range index with the standard
//! message. No operation fails for normal logical conditions, and
//! allocation failure aborts through the global allocator's error path.
//!
//! # Ownership and threads
//!
//! The list exclusively owns its nodes; the tail reference, the position
//! cache, and iterators are non-owning views. `SeqList` is `Send` (moving
//! the whole list to another thread is fine) but intentionally **not**
//! `Sync`: lookups through `&self` still refresh the position cache, so
//! shared cross-thread reads would race on it. Borrowed iterators make
//! mutation-during-iteration unrepresentable rather than merely undefined.

#![warn(missing_docs)]

mod cache;
mod iter;
mod list;

pub use iter::{IntoIter, Iter, IterMut};
pub use list::SeqList;
