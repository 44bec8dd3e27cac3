use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::Range;

use crate::error::{Error, Result};
use crate::list::cursor::{DescendingIter, ForwardIter, ListIter};
use crate::list::node::{connect, Node, NodePtr};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod bulk;
mod deque;
mod impls;
pub(crate) mod node;
#[cfg(test)]
mod properties;

/// The `List` is a doubly-linked list with owned nodes, implemented as a cyclic
/// list anchored by a ghost (sentinel) node. It provides both an indexed list
/// surface and a double-ended queue surface.
///
/// Inserting or removing at either end takes constant time. Accessing or
/// mutating an element by index walks the chain from the front, and takes
/// *O*(*n*) time.
///
/// The `List` contains:
/// - a pointer `ghost` that points to the ghost node, which holds no element
///   and is never counted in `len`;
/// - a length field `len` counting the element nodes.
///
/// # Naming Conventions
///
/// Index based methods (`get`, `set`, `insert`, `remove`, ...) report
/// [`Error::OutOfRange`], while endpoint methods of the deque surface
/// (`get_first`, `remove_last`, `pop`, ...) report [`Error::EmptyCollection`]
/// on an empty list. The `Option` returning `front`, `back`, `pop_front` and
/// `pop_back` never fail.
pub struct List<T> {
    ghost: NodePtr<T>,
    /// the length of the list
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> NodePtr<T> {
        self.ghost
    }
    pub(crate) fn front_node(&self) -> NodePtr<T> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or the first element
        // in the list).
        unsafe { node::next(self.ghost) }
    }
    pub(crate) fn back_node(&self) -> NodePtr<T> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or the last element
        // in the list).
        unsafe { node::prev(self.ghost) }
    }

    /// Attach a single detached node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NodePtr<T>,
        next: NodePtr<T>,
        node: NodePtr<T>,
    ) {
        #[cfg(debug_assertions)]
        node::assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            node::assert_adjacent(prev, node);
            node::assert_adjacent(node, next);
        }
    }

    /// Detach a single element node `node` from the list, and return its element.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list,
    /// or whether it is the ghost node.
    pub(crate) unsafe fn detach_node(&mut self, node: NodePtr<T>) -> T {
        self.len -= 1;
        connect(node::prev(node), node::next(node));
        node::into_element(node)
    }

    /// Link a new node holding `element` right before `next`.
    ///
    /// It is unsafe because it does not check whether `next` belongs to the list.
    pub(crate) unsafe fn insert_before(&mut self, next: NodePtr<T>, element: T) -> NodePtr<T> {
        let node = node::new_detached(element);
        self.attach_node(node::prev(next), next, node);
        node
    }

    /// Walk `steps` nodes forward from the front node. Walking `len` steps
    /// reaches the ghost node, which is returned directly.
    pub(crate) fn walk(&self, steps: usize) -> NodePtr<T> {
        debug_assert!(steps <= self.len);
        if steps == self.len {
            return self.ghost;
        }
        let mut current = self.front_node();
        for _ in 0..steps {
            // SAFETY: `steps < len`, so the walk never passes the ghost node.
            current = unsafe { node::next(current) };
        }
        current
    }

    /// Return the element node at `index`, or [`Error::OutOfRange`] unless
    /// `index < len`.
    pub(crate) fn node_at(&self, index: usize) -> Result<NodePtr<T>> {
        self.check_index(index)?;
        Ok(self.walk(index))
    }

    /// Check a position of an element, valid in `0..len`.
    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            return Ok(());
        }
        Err(Error::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Check a position between elements, valid in `0..=len`.
    pub(crate) fn check_position(&self, index: usize) -> Result<()> {
        if index <= self.len {
            return Ok(());
        }
        Err(Error::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Find the first node from the front whose element equals `value`, or
    /// `stop` if it is reached first. Returns the node with its index.
    ///
    /// It is unsafe because `stop` must be an element node of the list.
    pub(crate) unsafe fn find_node(&self, value: &T, stop: NodePtr<T>) -> (usize, NodePtr<T>)
    where
        T: PartialEq,
    {
        let mut index = 0;
        let mut current = self.front_node();
        while current != stop && node::element(current) != value {
            current = node::next(current);
            index += 1;
        }
        (index, current)
    }

    /// Relink the ghost node to itself and release every element node.
    /// Returns the number of released elements.
    fn unlink_all(&mut self) -> usize {
        let len = std::mem::replace(&mut self.len, 0);
        let mut current = self.front_node();
        // SAFETY: the ghost node is always valid.
        unsafe { connect(self.ghost, self.ghost) };
        for _ in 0..len {
            // SAFETY: the detached chain `current..` still holds `len` valid
            // element nodes, each visited and released exactly once.
            unsafe {
                let next = node::next(current);
                drop(node::into_element(current));
                current = next;
            }
        }
        len
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use sentinel_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        let ghost = node::new_ghost();
        let _marker = PhantomData;
        Self {
            ghost,
            len: 0,
            _marker,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// The ghost node is relinked to itself and the length is reset in
    /// constant time; the detached elements are dropped afterwards. Calling
    /// `clear` on an empty list does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    pub fn clear(&mut self) {
        let released = self.unlink_all();
        trace!("cleared list, released {} elements", released);
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the front node of a non-empty list is an element node.
        Some(unsafe { node::element(self.front_node()) })
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1]);
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the front node of a non-empty list is an element node, and
        // the list is borrowed mutably.
        Some(unsafe { node::element_mut(self.front_node()) })
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the back node of a non-empty list is an element node.
        Some(unsafe { node::element(self.back_node()) })
    }

    /// Provides a mutable reference to the back element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the back node of a non-empty list is an element node, and
        // the list is borrowed mutably.
        Some(unsafe { node::element_mut(self.back_node()) })
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        // SAFETY: the front node is always valid.
        unsafe { self.insert_before(self.front_node(), elt) };
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        // SAFETY: the ghost node is always valid.
        unsafe { self.insert_before(self.ghost_node(), elt) };
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([3, 1]);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the front node of a non-empty list is an element node.
        Some(unsafe { self.detach_node(self.front_node()) })
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 3]);
    /// assert_eq!(list.pop_back(), Some(3));
    /// assert_eq!(list.pop_back(), Some(1));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the back node of a non-empty list is an element node.
        Some(unsafe { self.detach_node(self.back_node()) })
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `index < len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{Error, List};
    ///
    /// let list = List::from(['a', 'b', 'c']);
    /// assert_eq!(list.get(1), Ok(&'b'));
    /// assert_eq!(list.get(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        let node = self.node_at(index)?;
        // SAFETY: `node_at` only returns element nodes.
        Ok(unsafe { node::element(node) })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `index < len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let node = self.node_at(index)?;
        // SAFETY: `node_at` only returns element nodes, and the list is
        // borrowed mutably.
        Ok(unsafe { node::element_mut(node) })
    }

    /// Replaces the element at `index`, returning the prior one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `index < len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// assert_eq!(list.set(1, 5), Ok(2));
    /// assert_eq!(list.to_vec(), vec![1, 5, 3]);
    /// assert!(list.set(3, 0).is_err());
    /// ```
    pub fn set(&mut self, index: usize, element: T) -> Result<T> {
        Ok(std::mem::replace(self.get_mut(index)?, element))
    }

    /// Adds an element at the given index in the list, so that it ends up at
    /// `index` and every following element shifts by one. Inserting at
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index > len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// list.insert(2, 4).unwrap();
    /// list.insert(4, 5).unwrap();
    /// assert!(list.insert(6, 6).is_err());
    ///
    /// assert_eq!(list.to_vec(), vec![1, 2, 4, 3, 5]);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> Result<()> {
        self.check_position(index)?;
        let next = self.walk(index);
        // SAFETY: `walk` returns a valid node of the list.
        unsafe { self.insert_before(next, element) };
        Ok(())
    }

    /// Removes the element at the given index and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `index < len`, including on an
    /// empty list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([3, 2, 1]);
    ///
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.remove(0), Ok(3));
    /// assert_eq!(list.remove(0), Ok(1));
    /// assert!(list.remove(0).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let node = self.node_at(index)?;
        // SAFETY: `node_at` only returns element nodes of the list.
        Ok(unsafe { self.detach_node(node) })
    }

    /// Returns the index of the first element equal to `value`, or `None` if
    /// it is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from(['a', 'b', 'a']);
    /// assert_eq!(list.index_of(&'a'), Some(0));
    /// assert_eq!(list.index_of(&'z'), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|e| e == value)
    }

    /// Returns the index of the last element equal to `value`, scanning from
    /// the back, or `None` if it is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from(['a', 'b', 'a']);
    /// assert_eq!(list.last_index_of(&'a'), Some(2));
    /// assert_eq!(list.last_index_of(&'z'), None);
    /// ```
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|e| e == value)
    }

    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value`. Returns whether an element
    /// was found.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2, 1]);
    /// assert!(list.remove_item(&1));
    /// assert_eq!(list.to_vec(), vec![2, 1]);
    /// assert!(!list.remove_item(&3));
    /// ```
    pub fn remove_item(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }

    /// Same as [`List::remove_item`].
    pub fn remove_first_occurrence(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_item(value)
    }

    /// Removes the last element equal to `value`. Returns whether an element
    /// was found.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2, 1]);
    /// assert!(list.remove_last_occurrence(&1));
    /// assert_eq!(list.to_vec(), vec![1, 2]);
    /// ```
    pub fn remove_last_occurrence(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.last_index_of(value) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }

    /// Returns an independent copy of the elements in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `range.end > len`, or if
    /// `range.start > range.end` (reported against `range.end`).
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from([0, 1, 2, 3, 4]);
    /// let sub = list.sub_list(1..4).unwrap();
    /// assert_eq!(sub.to_vec(), vec![1, 2, 3]);
    /// assert_eq!(list.len(), 5);
    ///
    /// assert!(list.sub_list(2..6).is_err());
    /// ```
    pub fn sub_list(&self, range: Range<usize>) -> Result<List<T>>
    where
        T: Clone,
    {
        self.check_position(range.end)?;
        if range.start > range.end {
            return Err(Error::OutOfRange {
                index: range.start,
                len: range.end,
            });
        }
        let count = range.end - range.start;
        let sub: List<T> = self.iter().skip(range.start).take(count).cloned().collect();
        trace!(
            "copied sub-list {}..{} of {} elements",
            range.start,
            range.end,
            self.len
        );
        Ok(sub)
    }

    /// Splits the list into two at the given index. Returns everything after
    /// the given index (inclusive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `at > len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let split = list.split_off(1).unwrap();
    ///
    /// assert_eq!(list.to_vec(), vec![1]);
    /// assert_eq!(split.to_vec(), vec![2, 3]);
    /// ```
    pub fn split_off(&mut self, at: usize) -> Result<List<T>> {
        self.check_position(at)?;
        let mut other = List::new();
        if at == self.len {
            return Ok(other);
        }
        let front = self.walk(at);
        let back = self.back_node();
        // SAFETY: `front..=back` is a valid non-empty range of the list, and
        // its nodes are moved to `other` as a whole.
        unsafe {
            connect(node::prev(front), self.ghost);
            connect(other.ghost, front);
            connect(back, other.ghost);
        }
        other.len = self.len - at;
        self.len = at;
        trace!("split off {} elements at {}", other.len, at);
        Ok(other)
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list1 = List::from(['a']);
    /// let mut list2 = List::from(['b', 'c']);
    ///
    /// list1.append(&mut list2);
    ///
    /// assert_eq!(list1.to_vec(), vec!['a', 'b', 'c']);
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }
        // SAFETY: `other.front_node()..=other.back_node()` is a valid non-empty
        // range, and it is moved between the back node and the ghost node of
        // `self`, which are adjacent.
        unsafe {
            connect(self.back_node(), other.front_node());
            connect(other.back_node(), self.ghost);
            connect(other.ghost, other.ghost);
        }
        self.len += std::mem::replace(&mut other.len, 0);
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    /// assert_eq!(list.to_vec(), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Provides a forward cursor that can remove the element it returned
    /// last. See [`ForwardIter`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut iter = list.forward_iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.remove(), Ok(2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert!(!iter.has_next());
    ///
    /// assert_eq!(list.to_vec(), vec![1, 3]);
    /// ```
    pub fn forward_iter(&mut self) -> ForwardIter<'_, T> {
        let front = self.front_node();
        ForwardIter::new(self, front)
    }

    /// Provides a bidirectional cursor before the first element. See
    /// [`ListIter`].
    pub fn list_iter(&mut self) -> ListIter<'_, T> {
        let front = self.front_node();
        ListIter::new(self, front, 0)
    }

    /// Provides a bidirectional cursor before the element at `index`. The
    /// cursor is after the last element if `index == len`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from(['a', 'b', 'c']);
    /// let mut iter = list.list_iter_at(1).unwrap();
    /// iter.add('x');
    /// assert_eq!(iter.next(), Some(&'b'));
    ///
    /// assert_eq!(list.to_vec(), vec!['a', 'x', 'b', 'c']);
    /// assert!(list.list_iter_at(5).is_err());
    /// ```
    pub fn list_iter_at(&mut self, index: usize) -> Result<ListIter<'_, T>> {
        self.check_position(index)?;
        let pointer = self.walk(index);
        Ok(ListIter::new(self, pointer, index))
    }

    /// Provides a cursor walking from the back to the front. See
    /// [`DescendingIter`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut iter = list.descending_iter();
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn descending_iter(&mut self) -> DescendingIter<'_, T> {
        let (ghost, len) = (self.ghost_node(), self.len);
        DescendingIter::new(ListIter::new(self, ghost, len))
    }

    /// Copy the elements into a `Vec`, from front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Move the elements into a `Vec`, from front to back.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Formats the list as `[a, b, c]`.
///
/// # Examples
///
/// ```
/// use sentinel_list::List;
///
/// assert_eq!(List::from([1, 2, 3]).to_string(), "[1, 2, 3]");
/// assert_eq!(List::<i32>::new().to_string(), "[]");
/// ```
impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(element, f)?;
        }
        f.write_str("]")
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.unlink_all();
        // SAFETY: the ghost node is allocated by `new_ghost` and is never used
        // after the list is dropped.
        unsafe { node::free_ghost(self.ghost) };
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}
