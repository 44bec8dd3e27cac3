//! Whole-collection operations of [`List`], written on top of the single
//! element primitives and the cursors.

use crate::error::Result;
use crate::list::List;

impl<T> List<T> {
    /// Appends every element of `iter` to the back of the list, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1]);
    /// list.add_all(vec![2, 3]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let before = self.len();
        self.extend(iter);
        trace!("appended {} elements", self.len() - before);
    }

    /// Inserts every element of `iter` consecutively, the first one ending up
    /// at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if
    /// `index > len`. Nothing is inserted in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 4]);
    /// list.add_all_at(1, [2, 3]).unwrap();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    /// assert!(list.add_all_at(5, [0]).is_err());
    /// ```
    pub fn add_all_at<I: IntoIterator<Item = T>>(&mut self, index: usize, iter: I) -> Result<()> {
        self.check_position(index)?;
        let next = self.walk(index);
        let mut count = 0_usize;
        for element in iter {
            // SAFETY: `next` is a node of the list, and it stays linked while
            // new nodes are inserted before it.
            unsafe { self.insert_before(next, element) };
            count += 1;
        }
        trace!("inserted {} elements at {}", count, index);
        Ok(())
    }

    /// Removes the first occurrence of each of `values`. Returns whether the
    /// list changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2, 1, 3]);
    /// assert!(list.remove_all(&[1, 3]));
    /// assert_eq!(list.to_vec(), vec![2, 1]);
    /// assert!(!list.remove_all(&[5]));
    /// ```
    pub fn remove_all(&mut self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        let removed = values.iter().filter(|value| self.remove_item(value)).count();
        trace!("removed {} of {} requested elements", removed, values.len());
        removed > 0
    }

    /// Keeps only the elements contained in `values`. Returns whether the list
    /// changed.
    ///
    /// An empty list or an empty `values` leaves the list untouched and
    /// returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2, 3, 2]);
    /// assert!(list.retain_all(&[2, 3]));
    /// assert_eq!(list.to_vec(), vec![2, 3, 2]);
    ///
    /// assert!(!list.retain_all(&[]));
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn retain_all(&mut self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        if self.is_empty() || values.is_empty() {
            return false;
        }
        let removed = self.remove_matching(|element| !values.contains(element));
        trace!("retained {} elements, removed {}", self.len(), removed);
        removed > 0
    }

    /// Returns `true` if every one of `values` is contained in the list.
    pub fn contains_all(&self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        values.iter().all(|value| self.contains(value))
    }

    /// Replaces every element with the result of `f` applied to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.replace_all(|x| x * 10);
    /// assert_eq!(list.to_vec(), vec![10, 20, 30]);
    /// ```
    pub fn replace_all<F: FnMut(&T) -> T>(&mut self, mut f: F) {
        let mut iter = self.list_iter();
        while let Some(element) = iter.next() {
            let replaced = f(element);
            if iter.set(replaced).is_err() {
                unreachable!("the element has just been returned by `next`");
            }
        }
    }

    /// Removes every element matching `pred`. Returns whether any element was
    /// removed.
    ///
    /// Each matching element is the one unlinked, even when other elements
    /// compare equal to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list: List<_> = (0..6).collect();
    /// assert!(list.remove_if(|x| x % 2 == 0));
    /// assert_eq!(list.to_vec(), vec![1, 3, 5]);
    /// assert!(!list.remove_if(|x| *x > 10));
    /// ```
    pub fn remove_if<F: FnMut(&T) -> bool>(&mut self, pred: F) -> bool {
        let removed = self.remove_matching(pred);
        trace!("removed {} matching elements", removed);
        removed > 0
    }

    fn remove_matching<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> usize {
        let mut removed = 0;
        let mut iter = self.forward_iter();
        while let Some(element) = iter.next() {
            if pred(element) && iter.remove_visited().is_some() {
                removed += 1;
            }
        }
        removed
    }
}
