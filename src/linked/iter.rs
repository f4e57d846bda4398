//! Iterators over [`SinglyLinkedList`].
//!
//! All three iterators walk the chain from head to tail.
//!
//! [`SinglyLinkedList`]: super::SinglyLinkedList

use std::iter::FusedIterator;

use super::list::{Node, SinglyLinkedList};

/// An iterator over references to the elements of a [`SinglyLinkedList`].
///
/// Created by [`SinglyLinkedList::iter`].
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) const fn new(current: Option<&'a Node<T>>) -> Self {
        Self { current }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            &node.value
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
        }
    }
}

/// An iterator over mutable references to the elements of a [`SinglyLinkedList`].
///
/// Created by [`SinglyLinkedList::iter_mut`].
pub struct IterMut<'a, T> {
    current: Option<&'a mut Node<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) const fn new(current: Option<&'a mut Node<T>>) -> Self {
        Self { current }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|node| {
            self.current = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a [`SinglyLinkedList`].
///
/// Each call to `next` detaches the current head node.
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(super) const fn new(list: SinglyLinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_first()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

static_assertions::assert_impl_all!(Iter<'static, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(IntoIter<String>: Send, Sync);
