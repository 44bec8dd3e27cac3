//! The double-ended queue surface of [`List`].
//!
//! Every operation here is an endpoint operation: it addresses the first or
//! the last element without an explicit index, and reports
//! [`Error::EmptyCollection`] when there is no such element. The `offer_*`
//! methods always succeed, since the list is unbounded.

use crate::error::{Error, Result};
use crate::list::List;

impl<T> List<T> {
    /// Adds an element first in the list. Same as [`List::push_front`].
    pub fn add_first(&mut self, element: T) {
        self.push_front(element);
    }

    /// Appends an element to the back of the list. Same as
    /// [`List::push_back`], which also covers the empty list.
    pub fn add_last(&mut self, element: T) {
        self.push_back(element);
    }

    /// Removes the first element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{Error, List};
    ///
    /// let mut list = List::from([1, 2]);
    /// assert_eq!(list.remove_first(), Ok(1));
    /// assert_eq!(list.remove_first(), Ok(2));
    /// assert_eq!(list.remove_first(), Err(Error::EmptyCollection));
    /// ```
    pub fn remove_first(&mut self) -> Result<T> {
        self.pop_front().ok_or(Error::EmptyCollection)
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the list is empty.
    pub fn remove_last(&mut self) -> Result<T> {
        self.pop_back().ok_or(Error::EmptyCollection)
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the list is empty.
    pub fn get_first(&self) -> Result<&T> {
        self.front().ok_or(Error::EmptyCollection)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the list is empty.
    pub fn get_last(&self) -> Result<&T> {
        self.back().ok_or(Error::EmptyCollection)
    }

    /// Adds an element first in the list and returns `true`. Same as
    /// [`List::add_first`], since the list is unbounded.
    pub fn offer_first(&mut self, element: T) -> bool {
        self.add_first(element);
        true
    }

    /// Appends an element and returns `true`. Same as [`List::add_last`],
    /// since the list is unbounded.
    pub fn offer_last(&mut self, element: T) -> bool {
        self.add_last(element);
        true
    }

    /// Same as [`List::get_first`].
    pub fn peek_first(&self) -> Result<&T> {
        self.get_first()
    }

    /// Same as [`List::get_last`].
    pub fn peek_last(&self) -> Result<&T> {
        self.get_last()
    }

    /// Same as [`List::remove_first`].
    pub fn poll_first(&mut self) -> Result<T> {
        self.remove_first()
    }

    /// Same as [`List::remove_last`].
    pub fn poll_last(&mut self) -> Result<T> {
        self.remove_last()
    }

    /// Queue-style head access. Same as [`List::get_first`].
    pub fn element(&self) -> Result<&T> {
        self.get_first()
    }

    /// Queue-style enqueue at the tail. Same as [`List::offer_last`].
    pub fn offer(&mut self, element: T) -> bool {
        self.offer_last(element)
    }

    /// Queue-style dequeue from the head. Same as [`List::poll_first`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut queue = List::new();
    /// queue.offer(1);
    /// queue.offer(2);
    /// assert_eq!(queue.poll(), Ok(1));
    /// assert_eq!(queue.poll(), Ok(2));
    /// assert!(queue.poll().is_err());
    /// ```
    pub fn poll(&mut self) -> Result<T> {
        self.poll_first()
    }

    /// Stack-style push onto the head. Same as [`List::add_first`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut stack = List::new();
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(stack.peek(), Ok(&2));
    /// assert_eq!(stack.pop(), Ok(2));
    /// assert_eq!(stack.pop(), Ok(1));
    /// assert!(stack.pop().is_err());
    /// ```
    pub fn push(&mut self, element: T) {
        self.add_first(element);
    }

    /// Stack-style pop from the head. Same as [`List::remove_first`].
    pub fn pop(&mut self) -> Result<T> {
        self.remove_first()
    }

    /// Stack-style look at the head. Same as [`List::peek_first`].
    pub fn peek(&self) -> Result<&T> {
        self.peek_first()
    }
}

#[cfg(test)]
mod tests {
    use crate::list::tests::list_eq;
    use crate::{Error, List};

    #[test]
    fn deque_endpoints_on_empty_list() {
        let mut list = List::<i32>::new();
        assert_eq!(list.remove_first(), Err(Error::EmptyCollection));
        assert_eq!(list.remove_last(), Err(Error::EmptyCollection));
        assert_eq!(list.get_first(), Err(Error::EmptyCollection));
        assert_eq!(list.get_last(), Err(Error::EmptyCollection));
        assert_eq!(list.peek_first(), Err(Error::EmptyCollection));
        assert_eq!(list.peek_last(), Err(Error::EmptyCollection));
        assert_eq!(list.poll_first(), Err(Error::EmptyCollection));
        assert_eq!(list.poll_last(), Err(Error::EmptyCollection));
        assert_eq!(list.element(), Err(Error::EmptyCollection));
        assert_eq!(list.peek(), Err(Error::EmptyCollection));
        assert_eq!(list.pop(), Err(Error::EmptyCollection));
        assert_eq!(list.poll(), Err(Error::EmptyCollection));
        list_eq(&list, None);
    }

    #[test]
    fn deque_add_and_remove_at_both_ends() {
        let mut list = List::new();
        list.add_last(2);
        list.add_first(1);
        assert!(list.offer_last(3));
        assert!(list.offer_first(0));
        list_eq(&list, 0..4);

        assert_eq!(list.get_first(), Ok(&0));
        assert_eq!(list.get_last(), Ok(&3));
        assert_eq!(list.peek_first(), Ok(&0));
        assert_eq!(list.peek_last(), Ok(&3));
        assert_eq!(list.element(), Ok(&0));

        assert_eq!(list.poll_last(), Ok(3));
        assert_eq!(list.remove_last(), Ok(2));
        assert_eq!(list.poll_first(), Ok(0));
        assert_eq!(list.remove_first(), Ok(1));
        list_eq(&list, None);
    }

    #[test]
    fn deque_add_last_on_empty_list() {
        let mut list = List::new();
        list.add_last('a');
        list_eq(&list, Some('a'));
        assert_eq!(list.get_first(), list.get_last());
    }

    #[test]
    fn deque_fifo_and_lifo_drain() {
        let mut queue = List::new();
        for i in 0..5 {
            queue.add_last(i);
        }
        let drained: Vec<_> = (0..5).map(|_| queue.remove_first().unwrap()).collect();
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        assert!(queue.is_empty());

        let mut stack = List::new();
        for i in 0..5 {
            stack.add_first(i);
        }
        let drained: Vec<_> = (0..5).map(|_| stack.remove_first().unwrap()).collect();
        assert_eq!(drained, vec![4, 3, 2, 1, 0]);
        assert!(stack.is_empty());
    }

    #[test]
    fn queue_and_stack_views() {
        let mut list = List::new();
        assert!(list.offer(1));
        assert!(list.offer(2));
        list.push(0);
        list_eq(&list, 0..3);
        assert_eq!(list.peek(), Ok(&0));
        assert_eq!(list.pop(), Ok(0));
        assert_eq!(list.poll(), Ok(1));
        assert_eq!(list.element(), Ok(&2));
    }
}
