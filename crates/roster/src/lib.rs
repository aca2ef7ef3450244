//! Growable contiguous array storage with pluggable slot allocation.
//!
//! [`Roster`] is an owning, indexable sequence with amortized-O(1) append,
//! positional insert/remove, linear search, element conversion, and an
//! in-place comparator-driven heap sort. It manages its buffer by hand
//! through a [`StorageAlloc`] capability instead of deferring to a built-in
//! collection, so growth, shifting, and destruction order are all explicit.
//!
//! # Architecture
//!
//! ```text
//! Roster<T, A> (container: live count + mutating algorithms)
//! ├── RawStorage<T, A> (owned buffer: pointer + slot capacity)
//! │   └── A: StorageAlloc (acquire/release raw slot runs; HeapAlloc default)
//! ├── heapsort (in-place, three-way comparator, not stable)
//! └── IntoIter<T, A> (draining iterator that owns the buffer)
//! Window<'a, T> (non-owning view adapting contiguous sources to bulk ops)
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use roster::Roster;
//!
//! let mut primes = Roster::new();
//! primes.push(5);
//! primes.push(2);
//! primes.push(3);
//! primes.insert(0, 7).unwrap();
//! primes.sort();
//! assert_eq!(primes.as_slice(), &[2, 3, 5, 7]);
//! assert_eq!(primes.index_of(&3), Some(1));
//! assert_eq!(primes.find(|&p| p > 4), Some(&5));
//! ```
//!
//! # Safety
//!
//! This crate contains bounded `unsafe` code: raw-buffer bookkeeping lives
//! in `raw.rs`, and the container/iterator modules use it for element moves
//! and reads. Every `unsafe` operation carries a `// SAFETY:` comment
//! discharging its contract; all other modules deny `unsafe` entirely.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod alloc;
pub mod array;
pub mod error;
pub mod iter;
mod raw;
mod sort;
pub mod view;

// Public re-exports for the primary API surface.
pub use alloc::{HeapAlloc, StorageAlloc};
pub use array::Roster;
pub use error::RosterError;
pub use iter::IntoIter;
pub use view::Window;
