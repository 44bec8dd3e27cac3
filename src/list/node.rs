use std::marker::PhantomData;
use std::ptr::NonNull;

/// The linking part of a node.
///
/// The ghost node of a list is a bare `Link` without any payload, while
/// every element node is a [`Node`] whose first field is its `Link`. All
/// node pointers of a list are therefore `NonNull<Link<T>>`, and are only
/// cast to `Node<T>` when they are known not to be the ghost node.
pub(crate) struct Link<T> {
    pub(crate) next: NodePtr<T>,
    pub(crate) prev: NodePtr<T>,
    _marker: PhantomData<*const T>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    link: Link<T>,
    element: T,
}

pub(crate) type NodePtr<T> = NonNull<Link<T>>;

/// Allocate a ghost node whose `next` and `prev` point to itself.
pub(crate) fn new_ghost<T>() -> NodePtr<T> {
    let ghost = NonNull::from(Box::leak(Box::new(Link {
        next: NonNull::dangling(),
        prev: NonNull::dangling(),
        _marker: PhantomData,
    })));
    // SAFETY: `ghost` has just been allocated and nothing else refers to it.
    unsafe {
        (*ghost.as_ptr()).next = ghost;
        (*ghost.as_ptr()).prev = ghost;
    }
    ghost
}

/// Release a ghost node allocated by [`new_ghost`].
///
/// It is unsafe because `ghost` must come from [`new_ghost`] and must not
/// be used afterwards.
pub(crate) unsafe fn free_ghost<T>(ghost: NodePtr<T>) {
    drop(Box::from_raw(ghost.as_ptr()));
}

/// Create a detached node with given element.
///
/// The links of a detached node are dangling until it is attached to a list.
pub(crate) fn new_detached<T>(element: T) -> NodePtr<T> {
    let node = Box::new(Node {
        link: Link {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            _marker: PhantomData,
        },
        element,
    });
    NonNull::from(Box::leak(node)).cast()
}

/// Release a detached element node and move its element out.
///
/// It is unsafe because `node` must be an element node already unlinked
/// from its list.
pub(crate) unsafe fn into_element<T>(node: NodePtr<T>) -> T {
    Box::from_raw(node.cast::<Node<T>>().as_ptr()).element
}

/// It is unsafe because `node` must be a live element node (never the ghost).
pub(crate) unsafe fn element<'a, T>(node: NodePtr<T>) -> &'a T {
    &(*node.cast::<Node<T>>().as_ptr()).element
}

/// It is unsafe because `node` must be a live element node (never the ghost),
/// and no other reference to its element may be alive.
pub(crate) unsafe fn element_mut<'a, T>(node: NodePtr<T>) -> &'a mut T {
    &mut (*node.cast::<Node<T>>().as_ptr()).element
}

pub(crate) unsafe fn next<T>(node: NodePtr<T>) -> NodePtr<T> {
    (*node.as_ptr()).next
}

pub(crate) unsafe fn prev<T>(node: NodePtr<T>) -> NodePtr<T> {
    (*node.as_ptr()).prev
}

/// Link `prev` and `next` to each other.
pub(crate) unsafe fn connect<T>(prev: NodePtr<T>, next: NodePtr<T>) {
    (*prev.as_ptr()).next = next;
    (*next.as_ptr()).prev = prev;
}

#[cfg(debug_assertions)]
pub(crate) fn assert_adjacent<T>(prev: NodePtr<T>, next: NodePtr<T>) {
    unsafe {
        assert_eq!(self::next(prev), next);
        assert_eq!(self::prev(next), prev);
    }
}
