use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Reuses the nodes of `self`: the common prefix is cloned in place, then
    /// the list is either truncated or extended to the length of `other`.
    fn clone_from(&mut self, other: &Self) {
        for (elem, elem_other) in self.iter_mut().zip(other) {
            elem.clone_from(elem_other);
        }
        let common = self.len().min(other.len());
        if self.len() > common {
            // `common <= len`, so the split never fails.
            let _ = self.split_off(common);
        } else {
            self.extend(other.iter().skip(common).cloned());
        }
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    /// Converts a `[T; N]` into a `List<T>`.
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list1 = List::from([1, 2, 3, 4]);
    /// let list2: List<_> = [1, 2, 3, 4].into();
    /// assert_eq!(list1, list2);
    /// ```
    fn from(arr: [T; N]) -> Self {
        IntoIterator::into_iter(arr).collect()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}
