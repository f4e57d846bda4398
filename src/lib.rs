//! # singly
//!
//! A generic, mutable singly-linked list whose nodes are owned exclusively
//! by their predecessor.
//!
//! ## Overview
//!
//! [`SinglyLinkedList`](linked::SinglyLinkedList) supports:
//!
//! - **Insertion**: `append`, `prepend`, `insert_at_position`
//! - **Removal**: `delete` of the first matching value
//! - **Queries**: `find`, `size`, `first`, `lowest`, `display`
//! - **Restructuring**: in-place, iterative `reverse`
//!
//! Positional insertion past the end is reported through
//! [`InsertError`](linked::InsertError); every other operation is total.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` as a sequence
//!
//! ## Example
//!
//! ```rust
//! use singly::prelude::*;
//!
//! let mut list: SinglyLinkedList<i32> = (1..=3).collect();
//! list.prepend(0);
//! assert_eq!(list.arrows().to_string(), "0 -> 1 -> 2 -> 3 -> None");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use singly::prelude::*;
/// ```
pub mod prelude {
    pub use crate::linked::*;
}

pub mod linked;
