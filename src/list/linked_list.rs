//! A doubly-linked list whose nodes live in an arena owned by the list.
//!
//! Links are slot indices into that arena instead of pointers. Slot `0` is
//! the head sentinel and slot `1` the tail sentinel: they never hold an
//! element, so every real node always has both neighbours and insertion or
//! removal never has to special-case the ends. The list is empty exactly
//! when the head sentinel links straight to the tail sentinel.
//!
//! Slots freed by removals are chained into a free list and reused.
//!
//! ```
//! use ilist::DLinkedList;
//!
//! let mut list = DLinkedList::new();
//! list.add(10);
//! list.add(20);
//! list.insert(1, 15).unwrap();
//! assert_eq!(list.to_string(), "[10, 15, 20]");
//!
//! assert_eq!(list.remove_at(0), Ok(10));
//! assert_eq!(list.to_string(), "[15, 20]");
//! assert_eq!(list.index_of(&20), Some(1));
//! assert!(!list.contains(&99));
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr;
use std::rc::Rc;

use log::trace;

use super::item_eq::{DeleteUserData, ItemEq, NativeEq};
use super::{render, IList};
use crate::error::IndexOutOfBounds;

const HEAD: usize = 0;
const TAIL: usize = 1;
/// Link value of the outer side of a sentinel and of the end of the free list.
const NIL: usize = usize::MAX;

struct Node<T> {
    element: Option<T>,
    prev: usize,
    next: usize,
}

impl<T> Node<T> {
    fn new(element: T, prev: usize, next: usize) -> Self {
        Node {
            element: Some(element),
            prev,
            next,
        }
    }

    fn sentinel(prev: usize, next: usize) -> Self {
        Node {
            element: None,
            prev,
            next,
        }
    }
}

/// A doubly-linked list with arena-allocated nodes.
///
/// `E` is the equality strategy used by `index_of`, `contains` and
/// `remove_item`; it defaults to [`NativeEq`].
pub struct DLinkedList<T, E = NativeEq> {
    nodes: Vec<Node<T>>,
    free: usize,
    len: usize,
    item_eq: E,
    delete_user_data: Option<DeleteUserData<DLinkedList<T, E>>>,
}

/// An iterator over the elements of a `DLinkedList`.
///
/// This `struct` is created by [`DLinkedList::iter()`].
pub struct Iter<'a, T: 'a> {
    nodes: &'a [Node<T>],
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

/// A mutable iterator over the elements of a `DLinkedList`.
///
/// This `struct` is created by [`DLinkedList::iter_mut()`].
pub struct IterMut<'a, T: 'a> {
    // Base of the arena. Each yielded reference points into a distinct real
    // node, reached by following links, so they never alias.
    nodes: *mut Node<T>,
    head: usize,
    tail: usize,
    len: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.len).finish()
    }
}

/// An owning iterator over the elements of a `DLinkedList`.
///
/// This `struct` is created by the `into_iter` method on [`DLinkedList`].
/// Elements it has not yielded yet are still seen by the deletion callback
/// when it is dropped.
pub struct IntoIter<T, E = NativeEq> {
    list: DLinkedList<T, E>,
}

impl<T: fmt::Debug, E> fmt::Debug for IntoIter<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Traversal direction of a cursor: [`Forward`] or [`Backward`].
pub trait Direction: sealed::Sealed {
    #[doc(hidden)]
    const END: usize;
    #[doc(hidden)]
    fn step(prev: usize, next: usize) -> usize;
    #[doc(hidden)]
    fn step_back(prev: usize, next: usize) -> usize;
}

/// Head to tail.
#[derive(Debug)]
pub enum Forward {}

/// Tail to head.
#[derive(Debug)]
pub enum Backward {}

impl sealed::Sealed for Forward {}
impl sealed::Sealed for Backward {}

impl Direction for Forward {
    const END: usize = TAIL;

    #[inline]
    fn step(_prev: usize, next: usize) -> usize {
        next
    }

    #[inline]
    fn step_back(prev: usize, _next: usize) -> usize {
        prev
    }
}

impl Direction for Backward {
    const END: usize = HEAD;

    #[inline]
    fn step(prev: usize, _next: usize) -> usize {
        prev
    }

    #[inline]
    fn step_back(_prev: usize, next: usize) -> usize {
        next
    }
}

/// A read-only cursor over a `DLinkedList`.
///
/// Two cursors are equal when they sit on the same position of the same
/// list; the elements are never compared. At a sentinel position
/// [`get`](Cursor::get) returns `None`.
pub struct Cursor<'a, T: 'a, E: 'a = NativeEq, D: Direction = Forward> {
    list: &'a DLinkedList<T, E>,
    current: usize,
    direction: PhantomData<D>,
}

impl<T, E, D: Direction> Clone for Cursor<'_, T, E, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E, D: Direction> Copy for Cursor<'_, T, E, D> {}

impl<T, E, D: Direction> PartialEq for Cursor<'_, T, E, D> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list) && self.current == other.current
    }
}

impl<T, E, D: Direction> Eq for Cursor<'_, T, E, D> {}

impl<T: fmt::Debug, E, D: Direction> fmt::Debug for Cursor<'_, T, E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.get()).finish()
    }
}

impl<'a, T, E, D: Direction> Cursor<'a, T, E, D> {
    /// The element under the cursor, `None` on a sentinel.
    pub fn get(&self) -> Option<&'a T> {
        self.list.nodes[self.current].element.as_ref()
    }

    /// Moves one position in the cursor's direction. Does nothing at the end.
    pub fn move_next(&mut self) {
        if self.current != D::END {
            let node = &self.list.nodes[self.current];
            self.current = D::step(node.prev, node.next);
        }
    }

    /// Whether the cursor is on the end sentinel of its direction.
    pub fn is_end(&self) -> bool {
        self.current == D::END
    }
}

/// A cursor over a `DLinkedList` that can remove the element under it.
///
/// [`remove_current`](CursorMut::remove_current) moves the cursor back to
/// the preceding position in traversal order (possibly the start sentinel),
/// so that the next [`move_next`](CursorMut::move_next) lands on the element
/// that followed the removed one.
///
/// ```
/// use ilist::DLinkedList;
///
/// let mut list: DLinkedList<u32> = (1..=6).collect();
///
/// let mut cursor = list.cursor_mut();
/// while !cursor.is_end() {
///     if cursor.current().map_or(false, |x| *x % 2 == 0) {
///         cursor.remove_current();
///     }
///     cursor.move_next();
/// }
///
/// assert_eq!(list.to_string(), "[1, 3, 5]");
/// ```
pub struct CursorMut<'a, T: 'a, E: 'a = NativeEq, D: Direction = Forward> {
    list: &'a mut DLinkedList<T, E>,
    current: usize,
    direction: PhantomData<D>,
}

impl<T: fmt::Debug, E, D: Direction> fmt::Debug for CursorMut<'_, T, E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut")
            .field(&self.list.nodes[self.current].element)
            .finish()
    }
}

impl<'a, T, E, D: Direction> CursorMut<'a, T, E, D> {
    /// The element under the cursor, `None` on a sentinel.
    pub fn current(&mut self) -> Option<&mut T> {
        self.list.nodes[self.current].element.as_mut()
    }

    /// Moves one position in the cursor's direction. Does nothing at the end.
    pub fn move_next(&mut self) {
        if self.current != D::END {
            let node = &self.list.nodes[self.current];
            self.current = D::step(node.prev, node.next);
        }
    }

    pub fn is_end(&self) -> bool {
        self.current == D::END
    }

    /// Removes the element under the cursor and returns it.
    ///
    /// Returns `None` and leaves the list alone on a sentinel.
    pub fn remove_current(&mut self) -> Option<T> {
        if self.current == HEAD || self.current == TAIL {
            return None;
        }
        let node = &self.list.nodes[self.current];
        let predecessor = D::step_back(node.prev, node.next);
        let element = self.list.unlink(self.current)?;
        self.current = predecessor;
        Some(element)
    }

    /// Removes the element under the cursor and hands it to `on_removed`.
    ///
    /// Returns whether an element was removed.
    pub fn remove_current_with<F>(&mut self, on_removed: F) -> bool
    where
        F: FnOnce(T),
    {
        match self.remove_current() {
            Some(element) => {
                on_removed(element);
                true
            }
            None => false,
        }
    }

    /// A read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T, E, D> {
        Cursor {
            list: &*self.list,
            current: self.current,
            direction: PhantomData,
        }
    }
}

// private methods
impl<T, E> DLinkedList<T, E> {
    fn sentinels() -> Vec<Node<T>> {
        vec![Node::sentinel(NIL, TAIL), Node::sentinel(HEAD, NIL)]
    }

    fn from_parts(item_eq: E, delete_user_data: Option<DeleteUserData<Self>>) -> Self {
        DLinkedList {
            nodes: Self::sentinels(),
            free: NIL,
            len: 0,
            item_eq,
            delete_user_data,
        }
    }

    /// Places `element` in a free slot, or a new one, and returns the slot.
    fn alloc(&mut self, element: T, prev: usize, next: usize) -> usize {
        match self.free {
            NIL => {
                self.nodes.push(Node::new(element, prev, next));
                self.nodes.len() - 1
            }
            slot => {
                self.free = self.nodes[slot].next;
                self.nodes[slot] = Node::new(element, prev, next);
                slot
            }
        }
    }

    /// Links a new node holding `element` right after `prev`.
    fn link_after(&mut self, prev: usize, element: T) -> usize {
        let next = self.nodes[prev].next;
        let slot = self.alloc(element, prev, next);
        self.nodes[prev].next = slot;
        self.nodes[next].prev = slot;
        self.len += 1;
        slot
    }

    /// Unlinks the real node at `slot`, returns its element and frees the slot.
    ///
    /// Returns `None` for sentinels and already free slots.
    fn unlink(&mut self, slot: usize) -> Option<T> {
        if slot == HEAD || slot == TAIL {
            return None;
        }
        let element = self.nodes[slot].element.take()?;
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;

        self.nodes[slot].prev = NIL;
        self.nodes[slot].next = self.free;
        self.free = slot;
        self.len -= 1;
        Some(element)
    }

    /// Returns the slot right before logical position `index`, so that its
    /// `next` is the node at `index` (or the tail sentinel when
    /// `index == len`).
    ///
    /// Walks from whichever sentinel is closer.
    fn previous_slot_of(&self, index: usize) -> usize {
        debug_assert!(index <= self.len);
        if index <= self.len / 2 {
            let mut current = HEAD;
            for _ in 0..index {
                current = self.nodes[current].next;
            }
            current
        } else {
            let mut current = TAIL;
            for _ in index..=self.len {
                current = self.nodes[current].prev;
            }
            current
        }
    }

    fn slot_at(&self, index: usize) -> usize {
        self.nodes[self.previous_slot_of(index)].next
    }

    fn check_read(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds::new(index, 0..self.len))
        }
    }

    fn release_user_data(&self) {
        if let Some(delete_user_data) = self.delete_user_data.clone() {
            trace!("running delete callback over {} elements", self.len);
            delete_user_data(self);
        }
    }
}

impl<T> DLinkedList<T> {
    /// Creates an empty `DLinkedList` comparing elements with `PartialEq`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ilist::DLinkedList;
    ///
    /// let list: DLinkedList<u32> = DLinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::from_parts(NativeEq, None)
    }
}

impl<T, E: Default> Default for DLinkedList<T, E> {
    fn default() -> Self {
        Self::from_parts(E::default(), None)
    }
}

impl<T, E> DLinkedList<T, E> {
    /// Creates an empty `DLinkedList` comparing elements with `item_eq`.
    pub fn with_item_eq(item_eq: E) -> Self {
        Self::from_parts(item_eq, None)
    }

    /// Registers the container-wide deletion callback.
    ///
    /// The callback sees the list, elements still in place, before `clear`,
    /// `clone_from` or drop discards them.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    /// use ilist::DLinkedList;
    ///
    /// let released = Rc::new(RefCell::new(Vec::new()));
    /// let sink = released.clone();
    ///
    /// let mut handles = DLinkedList::new().with_delete_user_data(move |list: &DLinkedList<u32>| {
    ///     sink.borrow_mut().extend(list.iter().copied());
    /// });
    /// handles.add(7);
    /// handles.add(9);
    /// handles.clear();
    ///
    /// assert_eq!(*released.borrow(), vec![7, 9]);
    /// ```
    pub fn with_delete_user_data<F>(mut self, delete_user_data: F) -> Self
    where
        F: Fn(&Self) + 'static,
    {
        self.delete_user_data = Some(Rc::new(delete_user_data));
        self
    }

    /// Replaces, or with `None` removes, the container-wide deletion callback.
    pub fn set_delete_user_data(&mut self, delete_user_data: Option<DeleteUserData<Self>>) {
        self.delete_user_data = delete_user_data;
    }

    /// The equality strategy of this list.
    pub fn item_eq(&self) -> &E {
        &self.item_eq
    }

    /// Returns the number of elements. *O*(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty. *O*(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes[HEAD].next == TAIL
    }

    /// Appends an element at the back. *O*(1).
    pub fn add(&mut self, e: T) {
        self.push_back(e);
    }

    /// Appends an element at the back. *O*(1).
    pub fn push_back(&mut self, e: T) {
        let last = self.nodes[TAIL].prev;
        self.link_after(last, e);
    }

    /// Adds an element first in the list. *O*(1).
    pub fn push_front(&mut self, e: T) {
        self.link_after(HEAD, e);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty. *O*(1).
    pub fn pop_front(&mut self) -> Option<T> {
        let first = self.nodes[HEAD].next;
        self.unlink(first)
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty. *O*(1).
    pub fn pop_back(&mut self) -> Option<T> {
        let last = self.nodes[TAIL].prev;
        self.unlink(last)
    }

    pub fn front(&self) -> Option<&T> {
        self.nodes[self.nodes[HEAD].next].element.as_ref()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        let first = self.nodes[HEAD].next;
        self.nodes[first].element.as_mut()
    }

    pub fn back(&self) -> Option<&T> {
        self.nodes[self.nodes[TAIL].prev].element.as_ref()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.nodes[TAIL].prev;
        self.nodes[last].element.as_mut()
    }

    /// Inserts `e` before position `index`; `index == len` appends.
    ///
    /// *O*(min(index, len - index)).
    ///
    /// # Examples
    ///
    /// ```
    /// use ilist::DLinkedList;
    ///
    /// let mut list: DLinkedList<char> = "ac".chars().collect();
    /// list.insert(1, 'b').unwrap();
    /// list.insert(3, 'd').unwrap();
    /// assert_eq!(list.to_string(), "[a, b, c, d]");
    ///
    /// let err = list.insert(9, 'z').unwrap_err();
    /// assert_eq!(err.valid, 0..5);
    /// ```
    pub fn insert(&mut self, index: usize, e: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds::new(index, 0..self.len + 1));
        }
        let prev = self.previous_slot_of(index);
        self.link_after(prev, e);
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// *O*(min(index, len - index)).
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_read(index)?;
        let slot = self.slot_at(index);
        self.unlink(slot)
            .ok_or_else(|| IndexOutOfBounds::new(index, 0..self.len))
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_read(index)?;
        self.nodes[self.slot_at(index)]
            .element
            .as_ref()
            .ok_or_else(|| IndexOutOfBounds::new(index, 0..self.len))
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_read(index)?;
        let slot = self.slot_at(index);
        let len = self.len;
        self.nodes[slot]
            .element
            .as_mut()
            .ok_or_else(|| IndexOutOfBounds::new(index, 0..len))
    }

    /// Position of the first element equal to `item`, according to the
    /// list's equality strategy.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        E: ItemEq<T>,
    {
        self.iter().position(|e| self.item_eq.item_eq(e, item))
    }

    pub fn contains(&self, item: &T) -> bool
    where
        E: ItemEq<T>,
    {
        self.index_of(item).is_some()
    }

    /// Removes the first element equal to `item` and drops it.
    pub fn remove_item(&mut self, item: &T) -> bool
    where
        E: ItemEq<T>,
    {
        self.remove_item_with(item, drop)
    }

    /// Removes the first element equal to `item` and hands it to
    /// `on_removed`. Returns whether a match was found.
    ///
    /// # Examples
    ///
    /// ```
    /// use ilist::DLinkedList;
    ///
    /// let mut list: DLinkedList<String> =
    ///     ["a", "b", "a"].iter().map(|s| s.to_string()).collect();
    ///
    /// let mut removed = None;
    /// assert!(list.remove_item_with(&"a".to_string(), |s| removed = Some(s)));
    /// assert_eq!(removed.as_deref(), Some("a"));
    /// assert_eq!(list.to_string(), "[b, a]");
    /// ```
    pub fn remove_item_with<F>(&mut self, item: &T, on_removed: F) -> bool
    where
        E: ItemEq<T>,
        F: FnOnce(T),
    {
        let mut slot = self.nodes[HEAD].next;
        while slot != TAIL {
            let found = match &self.nodes[slot].element {
                Some(e) => self.item_eq.item_eq(e, item),
                None => false,
            };
            if found {
                if let Some(element) = self.unlink(slot) {
                    on_removed(element);
                }
                return true;
            }
            slot = self.nodes[slot].next;
        }
        false
    }

    /// Removes all elements. The deletion callback, if any, runs first.
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        self.release_user_data();
        self.nodes.truncate(2);
        self.nodes[HEAD].next = TAIL;
        self.nodes[TAIL].prev = HEAD;
        self.free = NIL;
        self.len = 0;
    }

    /// Renders the list as `[e0, e1, ..., en]` using `item2str` per element.
    pub fn to_string_with<F>(&self, item2str: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        render(self.iter(), item2str)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ilist::DLinkedList;
    ///
    /// let list: DLinkedList<u32> = (0..3).collect();
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next_back(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            head: self.nodes[HEAD].next,
            tail: self.nodes[TAIL].prev,
            len: self.len,
        }
    }

    /// Provides a forward iterator with mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            head: self.nodes[HEAD].next,
            tail: self.nodes[TAIL].prev,
            len: self.len,
            nodes: self.nodes.as_mut_ptr(),
            marker: PhantomData,
        }
    }

    /// A forward cursor at the first element, or at the end if empty.
    pub fn begin(&self) -> Cursor<'_, T, E, Forward> {
        self.cursor_at(self.nodes[HEAD].next)
    }

    /// A forward cursor one past the last element (the tail sentinel).
    pub fn end(&self) -> Cursor<'_, T, E, Forward> {
        self.cursor_at(TAIL)
    }

    /// A backward cursor at the last element, or at the end if empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ilist::DLinkedList;
    ///
    /// let list: DLinkedList<u32> = (1..=3).collect();
    ///
    /// let mut seen: Vec<&u32> = vec![];
    /// let mut it = list.bbegin();
    /// while it != list.bend() {
    ///     seen.extend(it.get());
    ///     it.move_next();
    /// }
    /// assert_eq!(seen, [&3, &2, &1]);
    /// ```
    pub fn bbegin(&self) -> Cursor<'_, T, E, Backward> {
        self.cursor_at(self.nodes[TAIL].prev)
    }

    /// A backward cursor one before the first element (the head sentinel).
    pub fn bend(&self) -> Cursor<'_, T, E, Backward> {
        self.cursor_at(HEAD)
    }

    /// A forward editing cursor at the first element.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T, E, Forward> {
        let first = self.nodes[HEAD].next;
        self.cursor_mut_at(first)
    }

    /// A backward editing cursor at the last element.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T, E, Backward> {
        let last = self.nodes[TAIL].prev;
        self.cursor_mut_at(last)
    }

    fn cursor_at<D: Direction>(&self, current: usize) -> Cursor<'_, T, E, D> {
        Cursor {
            list: self,
            current,
            direction: PhantomData,
        }
    }

    fn cursor_mut_at<D: Direction>(&mut self, current: usize) -> CursorMut<'_, T, E, D> {
        CursorMut {
            list: self,
            current,
            direction: PhantomData,
        }
    }
}

impl<T, E> Drop for DLinkedList<T, E> {
    fn drop(&mut self) {
        self.release_user_data();
    }
}

impl<T, E: ItemEq<T>> IList<T> for DLinkedList<T, E> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, e: T) {
        self.push_back(e);
    }

    fn insert(&mut self, index: usize, e: T) -> Result<(), IndexOutOfBounds> {
        DLinkedList::insert(self, index, e)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        DLinkedList::remove_at(self, index)
    }

    fn remove_item_with<F>(&mut self, item: &T, on_removed: F) -> bool
    where
        F: FnOnce(T),
    {
        DLinkedList::remove_item_with(self, item, on_removed)
    }

    fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        DLinkedList::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        DLinkedList::get_mut(self, index)
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        DLinkedList::index_of(self, item)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        DLinkedList::clear(self)
    }

    fn iter(&self) -> Iter<'_, T> {
        DLinkedList::iter(self)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            None
        } else {
            let node = &self.nodes[self.head];
            self.len -= 1;
            self.head = node.next;
            node.element.as_ref()
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            None
        } else {
            let node = &self.nodes[self.tail];
            self.len -= 1;
            self.tail = node.prev;
            node.element.as_ref()
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            None
        } else {
            // SAFETY: `head` is a live slot of the arena borrowed for 'a, and
            // `len` stops us before head and tail cross.
            let node = unsafe { &mut *self.nodes.add(self.head) };
            self.len -= 1;
            self.head = node.next;
            node.element.as_mut()
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn last(mut self) -> Option<&'a mut T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            None
        } else {
            // SAFETY: see `next`.
            let node = unsafe { &mut *self.nodes.add(self.tail) };
            self.len -= 1;
            self.tail = node.prev;
            node.element.as_mut()
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T, E> Iterator for IntoIter<T, E> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T, E> DoubleEndedIterator for IntoIter<T, E> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T, E> ExactSizeIterator for IntoIter<T, E> {}

impl<T, E> FusedIterator for IntoIter<T, E> {}

impl<T, E: Default> FromIterator<T> for DLinkedList<T, E> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}

impl<T, E> IntoIterator for DLinkedList<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T, E>;

    /// Consumes the list into an iterator yielding elements by value.
    #[inline]
    fn into_iter(self) -> IntoIter<T, E> {
        IntoIter { list: self }
    }
}

impl<'a, T, E> IntoIterator for &'a DLinkedList<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut DLinkedList<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T, E> Extend<T> for DLinkedList<T, E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(move |elt| self.push_back(elt));
    }
}

impl<'a, T: 'a + Copy, E> Extend<&'a T> for DLinkedList<T, E> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: PartialEq, E> PartialEq for DLinkedList<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq, E> Eq for DLinkedList<T, E> {}

impl<T: PartialOrd, E> PartialOrd for DLinkedList<T, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord, E> Ord for DLinkedList<T, E> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

/// Copies are deep value copies into a fresh, compact arena. The equality
/// strategy and the deletion callback are shared with the source.
impl<T: Clone, E: Clone> Clone for DLinkedList<T, E> {
    fn clone(&self) -> Self {
        let mut list = Self::from_parts(self.item_eq.clone(), self.delete_user_data.clone());
        list.extend(self.iter().cloned());
        list
    }

    /// Clears `self` first, running its own deletion callback, then copies
    /// `source`.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.item_eq = source.item_eq.clone();
        self.delete_user_data = source.delete_user_data.clone();
        self.extend(source.iter().cloned());
    }
}

impl<T: fmt::Debug, E> fmt::Debug for DLinkedList<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: fmt::Display, E> fmt::Display for DLinkedList<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.iter(), |e| e.to_string()))
    }
}

impl<T: Hash, E> Hash for DLinkedList<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}
