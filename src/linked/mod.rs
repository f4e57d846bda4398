//! Owned singly-linked list.
//!
//! This module provides [`SinglyLinkedList`], a mutable ordered sequence
//! built from a chain of exclusively owned nodes, together with its
//! iterators and the [`InsertError`] returned by positional insertion.
//!
//! # Failure Semantics
//!
//! Looking up or deleting a value that is not present is not an error:
//! [`SinglyLinkedList::find`] returns `false` and
//! [`SinglyLinkedList::delete`] returns `None`. Only
//! [`SinglyLinkedList::insert_at_position`] reports a failure, when the
//! requested position lies past the end of the list.
//!
//! # Examples
//!
//! ```rust
//! use singly::linked::{InsertError, SinglyLinkedList};
//!
//! let mut list = SinglyLinkedList::new();
//! for value in [1, 2, 3] {
//!     list.append(value);
//! }
//! list.prepend(0);
//! list.delete(&2);
//! list.reverse();
//!
//! assert_eq!(list.display(), vec![&3, &1, &0]);
//! assert_eq!(list.size(), 3);
//! assert!(list.find(&1));
//! assert!(!list.find(&99));
//!
//! list.insert_at_position(1, 9).unwrap();
//! assert_eq!(list.to_string(), "[3, 9, 1, 0]");
//!
//! assert_eq!(
//!     list.insert_at_position(99, 9),
//!     Err(InsertError::OutOfBounds { position: 99, length: 4 })
//! );
//! assert_eq!(list.to_string(), "[3, 9, 1, 0]");
//! ```

mod error;
mod iter;
mod list;

pub use error::InsertError;
pub use iter::{IntoIter, Iter, IterMut};
pub use list::{Arrows, SinglyLinkedList};
