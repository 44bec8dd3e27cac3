//! This crate provides a doubly-linked list with owned nodes, implemented as a
//! cyclic list anchored by a sentinel (ghost) node. The list doubles as a
//! double-ended queue, and can be walked and edited through cursors.
//!
//! The [`List`] allows inserting and removing elements at either end in
//! constant time. In compromise, accessing or mutating elements by index
//! takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use sentinel_list::List;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! list.insert(0, 0).unwrap(); // insert 0 at the beginning of the list
//! assert_eq!(list.get(1), Ok(&1));
//! assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
//!
//! assert_eq!(list.remove(3), Ok(3));
//! assert_eq!(list.to_vec(), vec![0, 1, 2, 4]);
//!
//! list.push(5); // the deque surface works on the same list
//! assert_eq!(list.to_string(), "[5, 0, 1, 2, 4]");
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a pointer `ghost` that points to the ghost node;
//! - a length field `len` counting the element nodes.
//!
//! Each element node of the list `List<T>` is allocated on heap, and holds
//! the `next` and `prev` pointers followed by the payload `T`. The ghost node
//! has *NO* payload.
//!
//! In an empty list, the `next` and `prev` pointers of the ghost node point to
//! itself. Otherwise `ghost.next` is the first element and `ghost.prev` is the
//! last one, so both ends are reached without any null check.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1, ...,
//! *n* - 1, and the ghost node is always indexed by *n*.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and iterate the list like an array (fused and non-cyclic).
//!
//! ```
//! use sentinel_list::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(list.into_vec(), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! The cursors [`ForwardIter`], [`ListIter`] and [`DescendingIter`] borrow the
//! list exclusively and may edit it while walking. In a list with length *n*,
//! a cursor sits at one of the *n* + 1 gaps between elements; `next` returns
//! the element after the gap and `previous` the one before it.
//!
//! ```
//! use sentinel_list::List;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//! let mut iter = list.list_iter();
//!
//! assert_eq!(iter.next(), Some(&1));
//! iter.add(5); // becomes [1, 5, 2, 3, 4]
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.remove(), Ok(2)); // becomes [1, 5, 3, 4]
//! assert_eq!(iter.previous(), Some(&5));
//! assert_eq!(iter.set(6), Ok(5)); // becomes [1, 6, 3, 4]
//!
//! assert_eq!(list.to_vec(), vec![1, 6, 3, 4]);
//! ```
//!
//! While a cursor is alive, the list cannot be touched through any other path:
//!
//! ```compile_fail
//! use sentinel_list::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! let mut iter = list.forward_iter();
//! iter.next();
//! list.push_back(4);
//! iter.remove();
//! ```
//!
//! # Logging
//!
//! Whole-list operations such as `clear`, `split_off` and the bulk methods
//! emit `trace` records through the [`log`](https://docs.rs/log) facade under
//! the `sentinel_list` target. Disable the default `logging` feature to drop
//! the dependency.

#[macro_use]
mod macros;

pub mod error;
pub mod list;

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::cursor::{DescendingIter, ForwardIter, ListIter};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;
