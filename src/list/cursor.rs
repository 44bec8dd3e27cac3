use crate::error::{Error, Result};
use crate::list::node::{self, NodePtr};
use crate::list::List;
use std::fmt;
use std::fmt::Formatter;

/// A forward cursor over a `List` that can remove the element it returned
/// last.
///
/// The cursor sits *between* elements. In a list with length *n*, it has a
/// logical index in 0, 1, ..., *n*, and `pointer` is the node at that index
/// (the ghost node at *n*). It walks from the front to the back once and is
/// not restartable.
///
/// Element references returned by [`next`](ForwardIter::next) borrow the
/// cursor, so they cannot outlive a following [`remove`](ForwardIter::remove).
///
/// The cursor holds the list by mutable borrow, so the list cannot be
/// modified through any other path while the cursor is alive:
///
/// ```compile_fail
/// use sentinel_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.forward_iter();
/// iter.next();
/// // Won't compile, because list is already borrowed mutably.
/// list.push_back(4);
/// iter.remove().unwrap();
/// ```
pub struct ForwardIter<'a, T: 'a> {
    list: &'a mut List<T>,
    pointer: NodePtr<T>,
    last: Option<NodePtr<T>>,
    index: usize,
}

/// A bidirectional cursor over a `List` with editing operations.
///
/// Like [`ForwardIter`], the cursor sits between elements and tracks its
/// logical index in 0, 1, ..., *n*. [`next`](ListIter::next) returns the
/// element after the cursor and [`previous`](ListIter::previous) the element
/// before it, and both record it as the last-returned element, which is the
/// target of a following [`set`](ListIter::set) or
/// [`remove`](ListIter::remove).
///
/// # Examples
///
/// Here is a simple example showing how the cursor moves. (The cursor is
/// denoted by `|`.)
/// ```
/// use sentinel_list::{Error, List};
///
/// let mut list = List::from(['A', 'B', 'C']);
///
/// // [|A B C]
/// let mut iter = list.list_iter();
/// assert_eq!(iter.set('Z'), Err(Error::InvalidCursorState));
///
/// // [A B|C]
/// assert_eq!(iter.next(), Some(&'A'));
/// assert_eq!(iter.next(), Some(&'B'));
/// assert_eq!(iter.next_index(), 2);
///
/// // [A|b C]
/// assert_eq!(iter.previous(), Some(&'B'));
/// assert_eq!(iter.set('b'), Ok('B'));
/// assert_eq!(iter.previous_index(), Some(0));
///
/// // [A X|b C]
/// iter.add('X');
/// assert_eq!(iter.remove(), Err(Error::InvalidCursorState));
/// assert_eq!(iter.next(), Some(&'b'));
///
/// assert_eq!(list.to_vec(), vec!['A', 'X', 'b', 'C']);
/// ```
pub struct ListIter<'a, T: 'a> {
    list: &'a mut List<T>,
    pointer: NodePtr<T>,
    last: Option<NodePtr<T>>,
    index: usize,
}

/// A cursor over a `List` walking from the back to the front.
///
/// It is an adapter of a [`ListIter`] positioned after the last element:
/// `has_next` is `has_previous`, and `next` is `previous`.
pub struct DescendingIter<'a, T: 'a> {
    iter: ListIter<'a, T>,
}

/// Remove the first element, searching from the front, equal to the element
/// of `last`, and repair the cursor position `pointer` and `index` so that
/// the cursor stays between the same neighbours.
///
/// The search stops at `last` itself, so an element type whose equality is
/// not reflexive still removes the last-returned node.
///
/// It is unsafe because `last` must be an element node of `list`, and
/// `pointer` must be the node of `list` at `index`.
unsafe fn remove_returned<T: PartialEq>(
    list: &mut List<T>,
    last: NodePtr<T>,
    pointer: &mut NodePtr<T>,
    index: &mut usize,
) -> T {
    let (at, found) = list.find_node(node::element(last), last);
    if found == *pointer {
        *pointer = node::next(found);
    }
    if at < *index {
        *index -= 1;
    }
    list.detach_node(found)
}

macro_rules! impl_forward {
    ($ITER:ident) => {
        impl<'a, T: 'a> $ITER<'a, T> {
            pub(crate) fn new_at(list: &'a mut List<T>, pointer: NodePtr<T>, index: usize) -> Self {
                Self {
                    list,
                    pointer,
                    last: None,
                    index,
                }
            }

            /// Returns `true` if there is an element after the cursor.
            pub fn has_next(&self) -> bool {
                self.index < self.list.len()
            }

            /// Return the element after the cursor and move the cursor past it,
            /// or return `None` if the cursor is after the last element.
            ///
            /// This operation should compute in *O*(*1*) time.
            #[allow(clippy::should_implement_trait)]
            pub fn next(&mut self) -> Option<&T> {
                if !self.has_next() {
                    return None;
                }
                let current = self.pointer;
                // SAFETY: `index < len`, so `pointer` is an element node.
                unsafe {
                    self.pointer = node::next(current);
                    self.index += 1;
                    self.last = Some(current);
                    Some(node::element(current))
                }
            }

            /// Temporarily view the list via an immutable reference.
            pub fn view(&self) -> &List<T> {
                self.list
            }
        }

        impl<'a, T: PartialEq + 'a> $ITER<'a, T> {
            /// Remove the last-returned element from the list, and return it.
            ///
            /// The element is removed by value: the first element of the list
            /// equal to it is the one unlinked. Afterwards there is no
            /// last-returned element until the cursor moves again.
            ///
            /// # Errors
            ///
            /// Returns [`Error::InvalidCursorState`] if no element has been
            /// returned since the cursor was created or last changed the list.
            pub fn remove(&mut self) -> Result<T> {
                let last = self.last.take().ok_or(Error::InvalidCursorState)?;
                // SAFETY: `last` was returned from this list and has not been
                // removed since, and `pointer` is the node at `index`.
                Ok(unsafe { remove_returned(self.list, last, &mut self.pointer, &mut self.index) })
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $ITER<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($ITER))
                    .field("list", &self.list)
                    .field("index", &self.index)
                    .finish()
            }
        }
    };
}

impl_forward!(ForwardIter);
impl_forward!(ListIter);

impl<'a, T: 'a> ForwardIter<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, front: NodePtr<T>) -> Self {
        Self::new_at(list, front, 0)
    }

    /// Unlink exactly the node returned by the last `next`, without comparing
    /// elements.
    pub(crate) fn remove_visited(&mut self) -> Option<T> {
        let last = self.last.take()?;
        // A forward-only cursor has just stepped over `last`, so it lies
        // right before `pointer`, at `index - 1`.
        self.index -= 1;
        // SAFETY: `last` is an element node of the list that has not been
        // removed since it was returned.
        Some(unsafe { self.list.detach_node(last) })
    }
}

impl<'a, T: 'a> ListIter<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, pointer: NodePtr<T>, index: usize) -> Self {
        Self::new_at(list, pointer, index)
    }

    /// Returns `true` if there is an element before the cursor.
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Move the cursor before the previous element and return it, or return
    /// `None` if the cursor is before the first element.
    ///
    /// This operation should compute in *O*(*1*) time.
    pub fn previous(&mut self) -> Option<&T> {
        if !self.has_previous() {
            return None;
        }
        // SAFETY: `index > 0`, so `pointer.prev` is an element node.
        unsafe {
            self.pointer = node::prev(self.pointer);
            self.index -= 1;
            self.last = Some(self.pointer);
            Some(node::element(self.pointer))
        }
    }

    /// The index of the element a following `next` returns, or `len` if the
    /// cursor is after the last element.
    pub fn next_index(&self) -> usize {
        self.index
    }

    /// The index of the element a following `previous` returns, or `None` if
    /// the cursor is before the first element.
    pub fn previous_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    /// Replace the last-returned element in place, and return the prior one.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCursorState`] if no element has been returned
    /// since the cursor was created or last changed the list.
    pub fn set(&mut self, element: T) -> Result<T> {
        let last = self.last.ok_or(Error::InvalidCursorState)?;
        // SAFETY: `last` is an element node of the list, and the list is
        // borrowed mutably by the cursor.
        Ok(std::mem::replace(unsafe { node::element_mut(last) }, element))
    }

    /// Insert an element right before the cursor, appending if the cursor is
    /// after the last element. A following `next` is unaffected, while
    /// `previous` returns the new element.
    ///
    /// Afterwards there is no last-returned element until the cursor moves
    /// again.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// let mut iter = list.list_iter_at(2).unwrap();
    /// iter.add(3);
    /// assert_eq!(iter.next_index(), 3);
    /// assert!(!iter.has_next());
    ///
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn add(&mut self, element: T) {
        self.last = None;
        // SAFETY: `pointer` is a valid node of the list.
        unsafe { self.list.insert_before(self.pointer, element) };
        self.index += 1;
    }
}

impl<'a, T: 'a> DescendingIter<'a, T> {
    pub(crate) fn new(iter: ListIter<'a, T>) -> Self {
        Self { iter }
    }

    /// Returns `true` if there is an element before the cursor.
    pub fn has_next(&self) -> bool {
        self.iter.has_previous()
    }

    /// Return the element before the cursor, moving towards the front.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        self.iter.previous()
    }
}

impl<'a, T: PartialEq + 'a> DescendingIter<'a, T> {
    /// Remove the last-returned element. See [`ListIter::remove`].
    pub fn remove(&mut self) -> Result<T> {
        self.iter.remove()
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for DescendingIter<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DescendingIter").field(&self.iter).finish()
    }
}

unsafe impl<T: Send> Send for ForwardIter<'_, T> {}

unsafe impl<T: Sync> Sync for ForwardIter<'_, T> {}

unsafe impl<T: Send> Send for ListIter<'_, T> {}

unsafe impl<T: Sync> Sync for ListIter<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::list::tests::{check_links, list_eq};
    use crate::{Error, List};
    use std::iter::FromIterator;

    #[test]
    fn forward_iter_yields_in_order() {
        let mut list = List::from_iter(1..=3);
        let mut iter = list.forward_iter();
        let mut seen = Vec::new();
        while iter.has_next() {
            seen.push(*iter.next().unwrap());
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(iter.next(), None);
        assert!(!iter.has_next());
    }

    #[test]
    fn forward_iter_remove() {
        let mut list = List::from_iter(1..=3);
        let mut iter = list.forward_iter();
        assert_eq!(iter.remove(), Err(Error::InvalidCursorState));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.remove(), Ok(2));
        assert_eq!(iter.remove(), Err(Error::InvalidCursorState));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        list_eq(&list, vec![1, 3]);
    }

    #[test]
    fn forward_iter_remove_all() {
        let mut list = List::from_iter(0..5);
        let mut iter = list.forward_iter();
        while iter.next().is_some() {
            iter.remove().unwrap();
        }
        assert!(!iter.has_next());
        assert!(list.is_empty());
        check_links(&list);
    }

    #[test]
    fn forward_iter_remove_duplicates_by_value() {
        // The first equal element is the one removed.
        let mut list = List::from(['a', 'b', 'a', 'c']);
        let mut iter = list.forward_iter();
        iter.next();
        iter.next();
        assert_eq!(iter.next(), Some(&'a'));
        assert_eq!(iter.remove(), Ok('a'));
        assert_eq!(iter.next(), Some(&'c'));
        assert!(!iter.has_next());
        list_eq(&list, vec!['b', 'a', 'c']);
    }

    #[test]
    fn forward_iter_remove_without_reflexive_eq() {
        let mut list = List::from([1.0, f64::NAN, 3.0]);
        let mut iter = list.forward_iter();
        iter.next();
        assert!(iter.next().unwrap().is_nan());
        assert!(iter.remove().unwrap().is_nan());
        assert_eq!(iter.next(), Some(&3.0));
        assert_eq!(list.to_vec(), vec![1.0, 3.0]);
        check_links(&list);
    }

    #[test]
    fn forward_iter_remove_visited_node() {
        let mut list = List::from(['a', 'b', 'a']);
        let mut iter = list.forward_iter();
        assert_eq!(iter.remove_visited(), None);
        iter.next();
        iter.next();
        assert_eq!(iter.next(), Some(&'a'));
        assert_eq!(iter.remove_visited(), Some('a'));
        assert_eq!(iter.remove_visited(), None);
        assert!(!iter.has_next());
        list_eq(&list, vec!['a', 'b']);
    }

    #[test]
    fn list_iter_walks_both_ways() {
        let mut list = List::from_iter(0..3);
        let mut iter = list.list_iter();
        assert!(!iter.has_previous());
        assert_eq!(iter.previous(), None);
        assert_eq!(iter.previous_index(), None);
        assert_eq!(iter.next_index(), 0);

        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_index(), 3);
        assert_eq!(iter.previous_index(), Some(2));

        assert_eq!(iter.previous(), Some(&2));
        assert_eq!(iter.previous(), Some(&1));
        assert_eq!(iter.previous(), Some(&0));
        assert_eq!(iter.previous(), None);
        assert_eq!(iter.next(), Some(&0));
    }

    #[test]
    fn list_iter_at_positions() {
        let mut list = List::from_iter(0..3);
        let mut iter = list.list_iter_at(1).unwrap();
        assert_eq!(iter.previous(), Some(&0));

        let mut iter = list.list_iter_at(3).unwrap();
        assert!(!iter.has_next());
        assert_eq!(iter.previous(), Some(&2));

        assert_eq!(
            list.list_iter_at(4).unwrap_err(),
            Error::OutOfRange { index: 4, len: 3 }
        );

        let mut empty = List::<i32>::new();
        let iter = empty.list_iter_at(0).unwrap();
        assert!(!iter.has_next());
        assert!(!iter.has_previous());
    }

    #[test]
    fn list_iter_add() {
        let mut list = List::from(['a', 'b', 'c']);
        let mut iter = list.list_iter();
        assert_eq!(iter.next(), Some(&'a'));
        iter.add('x');
        assert_eq!(iter.next_index(), 2);
        assert_eq!(iter.set('y'), Err(Error::InvalidCursorState));
        assert_eq!(iter.remove(), Err(Error::InvalidCursorState));
        assert_eq!(iter.next(), Some(&'b'));
        list_eq(&list, vec!['a', 'x', 'b', 'c']);

        let mut iter = list.list_iter();
        iter.add('0');
        assert_eq!(iter.previous(), Some(&'0'));
        let mut iter = list.list_iter_at(5).unwrap();
        iter.add('z');
        assert_eq!(iter.previous(), Some(&'z'));
        list_eq(&list, vec!['0', 'a', 'x', 'b', 'c', 'z']);

        let mut empty = List::new();
        empty.list_iter().add(1);
        list_eq(&empty, Some(1));
    }

    #[test]
    fn list_iter_set() {
        let mut list = List::from_iter(0..3);
        let mut iter = list.list_iter();
        iter.next();
        assert_eq!(iter.set(10), Ok(0));
        assert_eq!(iter.set(20), Ok(10));
        iter.next();
        iter.previous();
        assert_eq!(iter.set(11), Ok(1));
        list_eq(&list, vec![20, 11, 2]);
    }

    #[test]
    fn list_iter_remove_after_previous() {
        let mut list = List::from_iter(0..4);
        let mut iter = list.list_iter_at(4).unwrap();
        assert_eq!(iter.previous(), Some(&3));
        assert_eq!(iter.previous(), Some(&2));
        assert_eq!(iter.remove(), Ok(2));
        assert_eq!(iter.next_index(), 2);
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.previous(), Some(&3));
        assert_eq!(iter.previous(), Some(&1));
        assert_eq!(iter.remove(), Ok(1));
        assert_eq!(iter.previous(), Some(&0));
        assert_eq!(iter.previous(), None);
        list_eq(&list, vec![0, 3]);
    }

    #[test]
    fn list_iter_remove_earlier_duplicate() {
        // After `previous`, an equal element before the cursor is removed
        // instead of the returned one, and the cursor index shifts with it.
        let mut list = List::from([7, 1, 7]);
        let mut iter = list.list_iter_at(3).unwrap();
        assert_eq!(iter.previous(), Some(&7));
        assert_eq!(iter.remove(), Ok(7));
        assert_eq!(iter.next_index(), 1);
        assert_eq!(iter.next(), Some(&7));
        assert_eq!(iter.previous(), Some(&7));
        assert_eq!(iter.previous(), Some(&1));
        list_eq(&list, vec![1, 7]);
    }

    #[test]
    fn descending_iter() {
        let mut list = List::from_iter(1..=3);
        let mut iter = list.descending_iter();
        let mut seen = Vec::new();
        while iter.has_next() {
            seen.push(*iter.next().unwrap());
        }
        assert_eq!(seen, vec![3, 2, 1]);
        assert_eq!(iter.next(), None);

        let mut iter = list.descending_iter();
        assert_eq!(iter.remove(), Err(Error::InvalidCursorState));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.remove(), Ok(2));
        assert_eq!(iter.next(), Some(&1));
        assert!(!iter.has_next());
        list_eq(&list, vec![1, 3]);

        let mut empty = List::<i32>::new();
        assert!(!empty.descending_iter().has_next());
    }
}
