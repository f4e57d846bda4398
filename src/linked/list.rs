//! Mutable singly-linked list with exclusively owned nodes.
//!
//! This module provides [`SinglyLinkedList`], an ordered sequence whose
//! nodes are chained through `Box` links. Each node is owned by exactly one
//! predecessor (or by the list itself for the head), so splicing, removal
//! and reversal never alias a node.
//!
//! # Overview
//!
//! - O(1) prepend
//! - O(n) append, delete, find, size and positional insert
//! - O(n) in-place reverse with O(1) extra space
//!
//! The length is not cached: [`SinglyLinkedList::size`] walks the chain on
//! every call.
//!
//! # Examples
//!
//! ```rust
//! use singly::linked::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new();
//! list.append(1);
//! list.append(2);
//! list.append(3);
//! list.prepend(0);
//! assert_eq!(list.display(), vec![&0, &1, &2, &3]);
//!
//! list.delete(&2);
//! list.reverse();
//! assert_eq!(list.display(), vec![&3, &1, &0]);
//! assert_eq!(list.arrows().to_string(), "3 -> 1 -> 0 -> None");
//! ```
//!
//! # Ownership
//!
//! ```text
//! list.head -> [0 | next] -> [1 | next] -> [3 | None]
//! ```
//!
//! Dropping the list releases the chain one node at a time, so very long
//! lists never recurse through their `Drop` glue.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::InsertError;
use super::iter::{IntoIter, Iter, IterMut};

/// Owning link to the next node of the chain.
pub(super) type Link<T> = Option<Box<Node<T>>>;

/// Internal node structure for the singly-linked list.
pub(super) struct Node<T> {
    /// The element stored in this node.
    pub(super) value: T,
    /// Link to the following node, `None` for the tail.
    pub(super) next: Link<T>,
}

impl<T> Node<T> {
    const fn new(value: T, next: Link<T>) -> Self {
        Self { value, next }
    }
}

/// A mutable singly-linked list.
///
/// # Time Complexity
///
/// | Operation            | Complexity |
/// |----------------------|------------|
/// | `new`                | O(1)       |
/// | `prepend`            | O(1)       |
/// | `first`              | O(1)       |
/// | `is_empty`           | O(1)       |
/// | `append`             | O(n)       |
/// | `delete`             | O(n)       |
/// | `find`               | O(n)       |
/// | `size`               | O(n)       |
/// | `insert_at_position` | O(n)       |
/// | `reverse`            | O(n)       |
///
/// # Thread Safety
///
/// Every mutating operation takes `&mut self`. Sharing a list between
/// threads for mutation requires an external lock such as
/// [`std::sync::Mutex`].
///
/// # Examples
///
/// ```rust
/// use singly::linked::SinglyLinkedList;
///
/// let mut list: SinglyLinkedList<&str> = SinglyLinkedList::new();
/// list.append("Starbucks");
/// list.append("Dunkin Donuts");
/// assert!(list.find(&"Starbucks"));
/// assert_eq!(list.size(), 2);
/// ```
pub struct SinglyLinkedList<T> {
    /// Link to the head node (if any).
    head: Link<T>,
}

static_assertions::assert_impl_all!(SinglyLinkedList<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(SinglyLinkedList<std::rc::Rc<i32>>: Send, Sync);

impl<T> SinglyLinkedList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use singly::linked::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.size(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Inserts `value` as the new last element.
    ///
    /// On an empty list the new node becomes the head.
    ///
    /// # Complexity
    ///
    /// O(n): the chain is walked to its tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use singly::linked::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.display(), vec![&1, &2]);
    /// ```
    pub fn append(&mut self, value: T) {
        *self.tail_link() = Some(Box::new(Node::new(value, None)));
    }

    /// Inserts `value` as the new head.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use singly::linked::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i32> = (1..=3).collect();
    /// list.prepend(0);
    /// assert_eq!(list.display(), vec![&0, &1, &2, &3]);
    /// ```
    #[inline]
    pub fn prepend(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node::new(value, next)));
    }

    /// Returns the number of elements, counted by walking the chain.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use singly::linked::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<i32> = (1..=4).collect();
    /// assert_eq!(list.size(), 4);
    /// ```
    #[must_use]
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the first element, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use singly::linked::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<i32> = (7..=9).collect();
    /// assert_eq!(list.first(), Some(&7));
    /// ```
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns the elements in head-to-tail order.
    ///
    /// The returned vector borrows from the list; an empty list yields an
    /// empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use singly::linked::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<char> = "abc".chars().collect();
    /// assert_eq!(list.display(), vec![&'a', &'b', &'c']);
    ///
    /// let empty: SinglyLinkedList<char> = SinglyLinkedList::new();
    /// assert!(empty.display().is_empty());
    /// ```
    #[must_use]
    pub fn display(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Inserts `value` so that it ends up at index `position`.
    ///
    /// Position `0` is equivalent to [`prepend`](Self::prepend) and position
    /// `size()` is equivalent to [`append`](Self::append). The walk towards
    /// the predecessor stops as soon as it runs off the chain.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::OutOfBounds`] when `position` is greater than
    /// the current length. The list is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use singly::linked::{InsertError, SinglyLinkedList};
    ///
    /// let mut list: SinglyLinkedList<i32> = vec![3, 1, 0].into_iter().collect();
    /// list.insert_at_position(1, 9).unwrap();
    /// assert_eq!(list.display(), vec![&3, &9, &1, &0]);
    ///
    /// let result = list.insert_at_position(99, 9);
    /// assert_eq!(result, Err(InsertError::OutOfBounds { position: 99, length: 4 }));
    /// assert_eq!(list.display(), vec![&3, &9, &1, &0]);
    /// ```
    pub fn insert_at_position(&mut self, position: usize, value: T) -> Result<(), InsertError> {
        let mut link = &mut self.head;
        for walked in 0..position {
            match link {
                Some(node) => link = &mut node.next,
                None => {
                    return Err(InsertError::OutOfBounds {
                        position,
                        length: walked,
                    });
                }
            }
        }
        let next = link.take();
        *link = Some(Box::new(Node::new(value, next)));
        Ok(())
    }

    /// Reverses the list in place.
    ///
    /// The links are flipped iteratively, so the operation needs no extra
    /// allocation and no recursion regardless of the list length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use singly::linked::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i32> = (1..=3).collect();
    /// list.reverse();
    /// assert_eq!(list.display(), vec![&3, &2, &1]);
    /// ```
    pub fn reverse(&mut self) {
        let mut previous: Link<T> = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = previous;
            previous = Some(node);
        }
        self.head = previous;
    }

    /// Returns an iterator over references to the elements, head first.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref())
    }

    /// Returns an iterator over mutable references to the elements, head first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use singly::linked::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i32> = (1..=3).collect();
    /// for value in list.iter_mut() {
    ///     *value *= 10;
    /// }
    /// assert_eq!(list.display(), vec![&10, &20, &30]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.as_deref_mut())
    }

    /// Returns a [`Display`](fmt::Display) adapter rendering the chain as
    /// `a -> b -> None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use singly::linked::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<i32> = vec![10, 20, 30].into_iter().collect();
    /// assert_eq!(list.arrows().to_string(), "10 -> 20 -> 30 -> None");
    ///
    /// let empty: SinglyLinkedList<i32> = SinglyLinkedList::new();
    /// assert_eq!(empty.arrows().to_string(), "None");
    /// ```
    #[inline]
    #[must_use]
    pub const fn arrows(&self) -> Arrows<'_, T> {
        Arrows { list: self }
    }

    /// Detaches the head node and returns its value.
    pub(super) fn pop_first(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            value
        })
    }

    /// Returns the empty link that terminates the chain.
    fn tail_link(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }
}

impl<T> SinglyLinkedList<T> {
    /// Removes the first element equal to `value` and returns it.
    ///
    /// Elements are compared head to tail. `value` may be of any type that
    /// compares against `T`, so a list of `String` can be searched with a
    /// `&str`. When the list is empty or no element matches, the list is left
    /// unchanged and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use singly::linked::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i32> = vec![0, 2, 1, 2].into_iter().collect();
    /// assert_eq!(list.delete(&2), Some(2));
    /// assert_eq!(list.display(), vec![&0, &1, &2]);
    ///
    /// assert_eq!(list.delete(&42), None);
    /// assert_eq!(list.display(), vec![&0, &1, &2]);
    ///
    /// let mut names: SinglyLinkedList<String> = vec!["a".to_string()].into_iter().collect();
    /// assert_eq!(names.delete("a"), Some("a".to_string()));
    /// ```
    pub fn delete<Q>(&mut self, value: &Q) -> Option<T>
    where
        Q: PartialEq<T> + ?Sized,
    {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| *value != node.value) {
            link = &mut link.as_mut()?.next;
        }
        let Node {
            value: removed,
            next,
        } = *link.take()?;
        *link = next;
        Some(removed)
    }

    /// Returns `true` if any element equals `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use singly::linked::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<i32> = (1..=3).collect();
    /// assert!(list.find(&2));
    /// assert!(!list.find(&99));
    /// ```
    #[must_use]
    pub fn find<Q>(&self, value: &Q) -> bool
    where
        Q: PartialEq<T> + ?Sized,
    {
        self.iter().any(|element| *value == *element)
    }
}

impl<T: PartialOrd> SinglyLinkedList<T> {
    /// Returns the smallest element, or `None` if the list is empty.
    ///
    /// When several elements compare equal to the minimum, the one closest
    /// to the head is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use singly::linked::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<i32> = vec![37, 13, 49, 58, 25].into_iter().collect();
    /// assert_eq!(list.lowest(), Some(&13));
    /// ```
    #[must_use]
    pub fn lowest(&self) -> Option<&T> {
        let mut iter = self.iter();
        let first = iter.next()?;
        Some(iter.fold(first, |lowest, value| {
            if value < lowest { value } else { lowest }
        }))
    }
}

/// Arrow-joined rendering of a [`SinglyLinkedList`].
///
/// Created by [`SinglyLinkedList::arrows`].
pub struct Arrows<'a, T> {
    list: &'a SinglyLinkedList<T>,
}

impl<T: fmt::Display> fmt::Display for Arrows<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.list {
            write!(formatter, "{value} -> ")?;
        }
        formatter.write_str("None")
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Appends every element of the iterator, keeping its order.
///
/// The chain is walked to its tail once, after which each element is
/// spliced in O(1).
impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut link = self.tail_link();
        for value in iter {
            link = &mut link.insert(Box::new(Node::new(value, None))).next;
        }
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

/// Hashes the length first, then each element in order, so that equal
/// lists hash equally and element order affects the hash.
impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        let mut values = self.iter();
        if let Some(head) = values.next() {
            write!(formatter, "{head}")?;
            for value in values {
                write!(formatter, ", {value}")?;
            }
        }
        formatter.write_str("]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SinglyLinkedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.size()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SinglyLinkedListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SinglyLinkedListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SinglyLinkedListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = SinglyLinkedList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut list = SinglyLinkedList::new();
        let mut link = &mut list.head;
        while let Some(element) = seq.next_element()? {
            link = &mut link.insert(Box::new(Node::new(element, None))).next;
        }
        Ok(list)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SinglyLinkedList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SinglyLinkedListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn list_of(values: &[i32]) -> SinglyLinkedList<i32> {
        values.iter().copied().collect()
    }

    fn collected(list: &SinglyLinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_list() {
        let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert_eq!(format!("{list}"), "[]");
    }

    #[rstest]
    fn test_display_multiple_elements_list() {
        let list = list_of(&[1, 2, 3]);
        assert_eq!(format!("{list}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_arrows_rendering() {
        assert_eq!(list_of(&[3, 5, 13, 2]).arrows().to_string(), "3 -> 5 -> 13 -> 2 -> None");
        assert_eq!(list_of(&[]).arrows().to_string(), "None");
    }

    #[rstest]
    fn test_debug() {
        assert_eq!(format!("{:?}", list_of(&[1, 2])), "[1, 2]");
    }

    // =========================================================================
    // Structural Tests
    // =========================================================================

    #[rstest]
    fn test_tail_link_of_empty_list_is_head() {
        let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert!(list.tail_link().is_none());
        *list.tail_link() = Some(Box::new(Node::new(5, None)));
        assert_eq!(list.first(), Some(&5));
    }

    #[rstest]
    fn test_pop_first() {
        let mut list = list_of(&[1, 2]);
        assert_eq!(list.pop_first(), Some(1));
        assert_eq!(list.pop_first(), Some(2));
        assert_eq!(list.pop_first(), None);
        assert!(list.is_empty());
    }

    #[rstest]
    fn test_extend_appends_after_existing_tail() {
        let mut list = list_of(&[1, 2]);
        list.extend(vec![3, 4]);
        assert_eq!(collected(&list), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_insert_at_tail_position() {
        let mut list = list_of(&[1, 2]);
        assert_eq!(list.insert_at_position(2, 3), Ok(()));
        assert_eq!(collected(&list), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_insert_on_empty_list_rejects_position_one() {
        let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert_eq!(
            list.insert_at_position(1, 7),
            Err(InsertError::OutOfBounds {
                position: 1,
                length: 0
            })
        );
        assert!(list.is_empty());
    }

    #[rstest]
    fn test_delete_head_advances_head() {
        let mut list = list_of(&[4, 5, 6]);
        assert_eq!(list.delete(&4), Some(4));
        assert_eq!(list.first(), Some(&5));
    }

    #[rstest]
    fn test_delete_tail() {
        let mut list = list_of(&[4, 5, 6]);
        assert_eq!(list.delete(&6), Some(6));
        assert_eq!(collected(&list), vec![4, 5]);
    }

    #[rstest]
    fn test_reverse_single_element() {
        let mut list = list_of(&[1]);
        list.reverse();
        assert_eq!(collected(&list), vec![1]);
    }

    #[derive(Debug)]
    struct Keyed(i32, char);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }

    #[rstest]
    fn test_lowest_prefers_first_on_ties() {
        let list: SinglyLinkedList<Keyed> = vec![Keyed(2, 'a'), Keyed(1, 'b'), Keyed(1, 'c')]
            .into_iter()
            .collect();
        assert_eq!(list.lowest().map(|keyed| keyed.1), Some('b'));
    }

    #[rstest]
    fn test_lowest_of_empty_list() {
        assert_eq!(list_of(&[]).lowest(), None);
    }

    #[rstest]
    fn test_drop_long_list_does_not_overflow() {
        let list: SinglyLinkedList<u32> = (0..1_000_000).collect();
        drop(list);
    }

    #[rstest]
    fn test_clone_long_list_does_not_overflow() {
        let list: SinglyLinkedList<u32> = (0..1_000_000).collect();
        let copy = list.clone();
        assert_eq!(copy.first(), Some(&0));
        assert_eq!(copy.size(), 1_000_000);
    }

    #[rstest]
    fn test_find_and_delete_with_borrowed_form() {
        let mut list: SinglyLinkedList<String> =
            ["north", "south"].iter().map(|name| (*name).to_string()).collect();
        assert!(list.find("south"));
        assert!(!list.find("east"));
        assert_eq!(list.delete("north"), Some("north".to_string()));
        assert_eq!(list.display(), vec!["south"]);
    }

    #[rstest]
    fn test_clone_is_independent() {
        let original = list_of(&[1, 2, 3]);
        let mut copy = original.clone();
        copy.reverse();
        assert_eq!(collected(&original), vec![1, 2, 3]);
        assert_eq!(collected(&copy), vec![3, 2, 1]);
    }
}
