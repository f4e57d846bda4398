//! Error types for positional operations on [`SinglyLinkedList`].
//!
//! Only positional insertion can fail. Searching for or deleting a value
//! that is not present is an ordinary outcome and is reported through
//! `bool`/`Option` return values instead.
//!
//! [`SinglyLinkedList`]: super::SinglyLinkedList

use thiserror::Error;

/// Represents a rejected positional insertion.
///
/// # Examples
///
/// ```rust
/// use singly::linked::{InsertError, SinglyLinkedList};
///
/// let mut list: SinglyLinkedList<i32> = (1..=3).collect();
/// let error = list.insert_at_position(7, 42).unwrap_err();
///
/// assert_eq!(error, InsertError::OutOfBounds { position: 7, length: 3 });
/// assert_eq!(
///     error.to_string(),
///     "position 7 is out of bounds for list of length 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InsertError {
    /// The requested position lies past the end of the list.
    #[error("position {position} is out of bounds for list of length {length}")]
    OutOfBounds {
        /// The position that was requested.
        position: usize,
        /// The length of the list at the time of the request.
        length: usize,
    },
}

impl InsertError {
    /// Returns the position that caused the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use singly::linked::InsertError;
    ///
    /// let error = InsertError::OutOfBounds { position: 5, length: 2 };
    /// assert_eq!(error.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::OutOfBounds { position, .. } => *position,
        }
    }
}
