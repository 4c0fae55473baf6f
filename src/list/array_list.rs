//! A growable list over a contiguous buffer with an explicit capacity.
//!
//! The list tracks its own `capacity` instead of relying on whatever the
//! allocator hands out, so growth happens at predictable points: when an
//! insertion would exceed the capacity, a new buffer of
//! `max(2 * capacity, needed)` slots is allocated and the elements are moved
//! over in order.
//!
//! ```
//! use ilist::ArrayList;
//!
//! let mut list = ArrayList::with_capacity(2);
//! list.add('a');
//! list.add('c');
//! list.insert(1, 'b').unwrap();
//!
//! assert_eq!(list.capacity(), 4);
//! assert_eq!(list.as_slice(), ['a', 'b', 'c']);
//! ```

use core::cmp::max;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;
use core::ptr;
use core::slice;
use std::rc::Rc;
use std::vec;

use log::{debug, trace};

use super::item_eq::{DeleteUserData, ItemEq, NativeEq};
use super::{render, IList};
use crate::error::IndexOutOfBounds;

/// Capacity of a list built with [`ArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    /// `0..len`
    Read,
    /// `0..=len`
    Insert,
}

/// A list backed by a contiguous buffer.
///
/// `E` is the equality strategy used by `index_of`, `contains` and
/// `remove_item`; it defaults to [`NativeEq`].
pub struct ArrayList<T, E = NativeEq> {
    buffer: Vec<T>,
    capacity: usize,
    item_eq: E,
    delete_user_data: Option<DeleteUserData<ArrayList<T, E>>>,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with [`DEFAULT_CAPACITY`] slots, comparing
    /// elements with `PartialEq`.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(capacity, NativeEq, None)
    }
}

impl<T, E: Default> Default for ArrayList<T, E> {
    fn default() -> Self {
        Self::from_parts(DEFAULT_CAPACITY, E::default(), None)
    }
}

impl<T, E> ArrayList<T, E> {
    fn from_parts(
        capacity: usize,
        item_eq: E,
        delete_user_data: Option<DeleteUserData<Self>>,
    ) -> Self {
        ArrayList {
            buffer: Vec::with_capacity(capacity),
            capacity,
            item_eq,
            delete_user_data,
        }
    }

    /// Creates an empty list with [`DEFAULT_CAPACITY`] slots, comparing
    /// elements with `item_eq`.
    pub fn with_item_eq(item_eq: E) -> Self {
        Self::from_parts(DEFAULT_CAPACITY, item_eq, None)
    }

    /// Creates an empty list with room for `capacity` elements, comparing
    /// elements with `item_eq`.
    pub fn with_capacity_and_item_eq(capacity: usize, item_eq: E) -> Self {
        Self::from_parts(capacity, item_eq, None)
    }

    /// Registers the container-wide deletion callback.
    ///
    /// The callback sees the list, elements still in place, before `clear`,
    /// `clone_from` or drop discards them.
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

    pub fn item_eq(&self) -> &E {
        &self.item_eq
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of elements the list holds before it has to grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Grows the buffer so that it holds at least `min_capacity` elements.
    ///
    /// The new capacity is `max(2 * capacity, min_capacity)`. Does nothing
    /// if the list is already large enough.
    pub fn ensure_capacity(&mut self, min_capacity: usize) {
        if min_capacity <= self.capacity {
            return;
        }
        let capacity = max(self.capacity.saturating_mul(2), min_capacity);
        debug!("growing array list from {} to {} slots", self.capacity, capacity);

        let mut buffer = Vec::with_capacity(capacity);
        buffer.append(&mut self.buffer);
        self.buffer = buffer;
        self.capacity = capacity;
    }

    fn check_index(&self, index: usize, access: Access) -> Result<(), IndexOutOfBounds> {
        let valid = match access {
            Access::Read => 0..self.len(),
            Access::Insert => 0..self.len() + 1,
        };
        if valid.contains(&index) {
            Ok(())
        } else {
            Err(IndexOutOfBounds::new(index, valid))
        }
    }

    fn release_user_data(&self) {
        if let Some(delete_user_data) = self.delete_user_data.clone() {
            trace!("running delete callback over {} elements", self.len());
            delete_user_data(self);
        }
    }

    /// Appends an element, growing the buffer if it is full.
    pub fn add(&mut self, e: T) {
        self.ensure_capacity(self.len() + 1);
        self.buffer.push(e);
    }

    /// Inserts `e` before position `index`, shifting the tail one slot right.
    /// `index == len` appends.
    pub fn insert(&mut self, index: usize, e: T) -> Result<(), IndexOutOfBounds> {
        self.check_index(index, Access::Insert)?;
        self.ensure_capacity(self.len() + 1);
        self.buffer.insert(index, e);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail one
    /// slot left.
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index, Access::Read)?;
        Ok(self.buffer.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index, Access::Read)?;
        Ok(&self.buffer[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index, Access::Read)?;
        Ok(&mut self.buffer[index])
    }

    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        E: ItemEq<T>,
    {
        self.buffer
            .iter()
            .position(|e| self.item_eq.item_eq(e, item))
    }

    pub fn contains(&self, item: &T) -> bool
    where
        E: ItemEq<T>,
    {
        self.index_of(item).is_some()
    }

    pub fn remove_item(&mut self, item: &T) -> bool
    where
        E: ItemEq<T>,
    {
        self.remove_item_with(item, drop)
    }

    /// Removes the first element equal to `item` and hands it to
    /// `on_removed`. Returns whether a match was found.
    pub fn remove_item_with<F>(&mut self, item: &T, on_removed: F) -> bool
    where
        E: ItemEq<T>,
        F: FnOnce(T),
    {
        match self.index_of(item) {
            Some(index) => {
                on_removed(self.buffer.remove(index));
                true
            }
            None => false,
        }
    }

    /// Removes all elements and keeps the capacity. The deletion callback,
    /// if any, runs first.
    pub fn clear(&mut self) {
        self.release_user_data();
        self.buffer.clear();
    }

    /// Renders the list as `[e0, e1, ..., en]` using `item2str` per element.
    pub fn to_string_with<F>(&self, item2str: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        render(self.buffer.iter(), item2str)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buffer.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.buffer.iter_mut()
    }

    /// A read-only cursor at the first element, or at the end if empty.
    pub fn begin(&self) -> Cursor<'_, T, E> {
        Cursor {
            list: self,
            position: Some(0),
        }
    }

    /// A read-only cursor one past the last element.
    pub fn end(&self) -> Cursor<'_, T, E> {
        Cursor {
            list: self,
            position: Some(self.len()),
        }
    }

    /// An editing cursor at the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ilist::ArrayList;
    ///
    /// let mut list: ArrayList<u32> = (1..=5).collect();
    /// let mut odd = vec![];
    ///
    /// let mut cursor = list.cursor_mut();
    /// while !cursor.is_end() {
    ///     if cursor.current().map_or(false, |x| *x % 2 == 1) {
    ///         cursor.remove_current_with(|x| odd.push(x));
    ///     }
    ///     cursor.move_next();
    /// }
    ///
    /// assert_eq!(odd, [1, 3, 5]);
    /// assert_eq!(list.as_slice(), [2, 4]);
    /// ```
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T, E> {
        CursorMut {
            list: self,
            position: Some(0),
        }
    }
}

impl<T, E> Drop for ArrayList<T, E> {
    fn drop(&mut self) {
        self.release_user_data();
    }
}

impl<T, E: ItemEq<T>> IList<T> for ArrayList<T, E> {
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, e: T) {
        ArrayList::add(self, e)
    }

    fn insert(&mut self, index: usize, e: T) -> Result<(), IndexOutOfBounds> {
        ArrayList::insert(self, index, e)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        ArrayList::remove_at(self, index)
    }

    fn remove_item_with<F>(&mut self, item: &T, on_removed: F) -> bool
    where
        F: FnOnce(T),
    {
        ArrayList::remove_item_with(self, item, on_removed)
    }

    fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        ArrayList::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        ArrayList::get_mut(self, index)
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        ArrayList::index_of(self, item)
    }

    fn len(&self) -> usize {
        self.buffer.len()
    }

    fn clear(&mut self) {
        ArrayList::clear(self)
    }

    fn iter(&self) -> slice::Iter<'_, T> {
        self.buffer.iter()
    }
}

/// A read-only cursor over an `ArrayList`.
///
/// Positions run from "before the first element" to "one past the last".
/// Two cursors are equal when they sit on the same position of the same list.
pub struct Cursor<'a, T: 'a, E: 'a = NativeEq> {
    list: &'a ArrayList<T, E>,
    position: Option<usize>,
}

impl<T, E> Clone for Cursor<'_, T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E> Copy for Cursor<'_, T, E> {}

impl<T, E> PartialEq for Cursor<'_, T, E> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list) && self.position == other.position
    }
}

impl<T, E> Eq for Cursor<'_, T, E> {}

impl<T: fmt::Debug, E> fmt::Debug for Cursor<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor")
            .field(&self.position)
            .field(&self.get())
            .finish()
    }
}

impl<'a, T, E> Cursor<'a, T, E> {
    pub fn get(&self) -> Option<&'a T> {
        let list = self.list;
        self.position.and_then(|index| list.buffer.get(index))
    }

    /// Index of the element under the cursor, `None` when there is none.
    pub fn index(&self) -> Option<usize> {
        self.position.filter(|index| *index < self.list.len())
    }

    pub fn move_next(&mut self) {
        self.position = step(self.position, self.list.len());
    }

    pub fn is_end(&self) -> bool {
        self.position == Some(self.list.len())
    }
}

/// An editing cursor over an `ArrayList`.
///
/// [`remove_current`](CursorMut::remove_current) moves the cursor back one
/// position, to "before the first element" when the first element was
/// removed, so that the next [`move_next`](CursorMut::move_next) lands on
/// the element that followed the removed one.
pub struct CursorMut<'a, T: 'a, E: 'a = NativeEq> {
    list: &'a mut ArrayList<T, E>,
    position: Option<usize>,
}

impl<T: fmt::Debug, E> fmt::Debug for CursorMut<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut")
            .field(&self.position)
            .field(&self.position.and_then(|index| self.list.buffer.get(index)))
            .finish()
    }
}

impl<'a, T, E> CursorMut<'a, T, E> {
    pub fn current(&mut self) -> Option<&mut T> {
        match self.position {
            Some(index) => self.list.buffer.get_mut(index),
            None => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.position.filter(|index| *index < self.list.len())
    }

    pub fn move_next(&mut self) {
        self.position = step(self.position, self.list.len());
    }

    pub fn is_end(&self) -> bool {
        self.position == Some(self.list.len())
    }

    /// Removes the element under the cursor and returns it.
    ///
    /// Returns `None` and leaves the list alone when the cursor is not on an
    /// element.
    pub fn remove_current(&mut self) -> Option<T> {
        let index = self.index()?;
        let element = self.list.buffer.remove(index);
        self.position = index.checked_sub(1);
        Some(element)
    }

    /// Removes the element under the cursor and hands it to `on_removed`.
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

    pub fn as_cursor(&self) -> Cursor<'_, T, E> {
        Cursor {
            list: &*self.list,
            position: self.position,
        }
    }
}

fn step(position: Option<usize>, len: usize) -> Option<usize> {
    match position {
        None => Some(0),
        Some(index) if index < len => Some(index + 1),
        end => end,
    }
}

/// An owning iterator over the elements of an `ArrayList`.
///
/// Created by the `into_iter` method on [`ArrayList`]. The elements move to
/// the caller, so the list's deletion callback is detached and not run.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T, E> IntoIterator for ArrayList<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        self.delete_user_data = None;
        IntoIter {
            inner: mem::take(&mut self.buffer).into_iter(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a ArrayList<T, E> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.buffer.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut ArrayList<T, E> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.buffer.iter_mut()
    }
}

impl<T, E: Default> FromIterator<T> for ArrayList<T, E> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}

impl<T, E> Extend<T> for ArrayList<T, E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.ensure_capacity(self.len() + lower);
        iter.for_each(move |elt| self.add(elt));
    }
}

impl<'a, T: 'a + Copy, E> Extend<&'a T> for ArrayList<T, E> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

/// The copy gets a fresh buffer of the source's capacity. The equality
/// strategy and the deletion callback are shared with the source.
impl<T: Clone, E: Clone> Clone for ArrayList<T, E> {
    fn clone(&self) -> Self {
        let mut list = Self::from_parts(
            self.capacity,
            self.item_eq.clone(),
            self.delete_user_data.clone(),
        );
        list.buffer.extend(self.buffer.iter().cloned());
        list
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.buffer = Vec::with_capacity(source.capacity);
        self.capacity = source.capacity;
        self.item_eq = source.item_eq.clone();
        self.delete_user_data = source.delete_user_data.clone();
        self.buffer.extend(source.buffer.iter().cloned());
    }
}

impl<T: PartialEq, E> PartialEq for ArrayList<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
    }
}

impl<T: Eq, E> Eq for ArrayList<T, E> {}

impl<T: Hash, E> Hash for ArrayList<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buffer.hash(state);
    }
}

impl<T: fmt::Debug, E> fmt::Debug for ArrayList<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.buffer).finish()
    }
}

impl<T: fmt::Display, E> fmt::Display for ArrayList<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.buffer.iter(), |e| e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn new_list_has_default_capacity() {
        let list: ArrayList<u8> = ArrayList::new();
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "[]");
        assert!(list.begin() == list.end());
    }

    #[test]
    fn grows_by_doubling() {
        let k = 4;
        let mut list = ArrayList::with_capacity(k);
        for i in 0..k {
            list.add(i);
        }
        assert_eq!(list.capacity(), k);

        list.add(k);
        assert_eq!(list.capacity(), 2 * k);
        for i in k + 1..2 * k + 1 {
            list.add(i);
        }
        assert_eq!(list.capacity(), 4 * k);
        assert_eq!(list.len(), 2 * k + 1);
        assert_eq!(list.as_slice(), (0..2 * k + 1).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn ensure_capacity_takes_the_larger_target() {
        let mut list: ArrayList<u8> = ArrayList::with_capacity(3);
        list.ensure_capacity(2);
        assert_eq!(list.capacity(), 3);
        list.ensure_capacity(4);
        assert_eq!(list.capacity(), 6);
        list.ensure_capacity(20);
        assert_eq!(list.capacity(), 20);

        let mut empty: ArrayList<u8> = ArrayList::with_capacity(0);
        empty.add(1);
        assert_eq!(empty.capacity(), 1);
    }

    #[test]
    fn check_index_per_access() {
        let list: ArrayList<u8> = [1, 2, 3].into_iter().collect();
        assert!(list.check_index(2, Access::Read).is_ok());
        assert_eq!(
            list.check_index(3, Access::Read),
            Err(IndexOutOfBounds::new(3, 0..3))
        );
        assert!(list.check_index(3, Access::Insert).is_ok());
        assert_eq!(
            list.check_index(4, Access::Insert),
            Err(IndexOutOfBounds::new(4, 0..4))
        );
    }

    #[test]
    fn insert_and_remove_shift() {
        let mut list: ArrayList<i32> = [10, 20].into_iter().collect();
        list.insert(1, 15).unwrap();
        list.insert(0, 5).unwrap();
        list.insert(4, 25).unwrap();
        assert_eq!(list.as_slice(), [5, 10, 15, 20, 25]);

        assert_eq!(list.remove_at(0), Ok(5));
        assert_eq!(list.remove_at(3), Ok(25));
        assert_eq!(list.remove_at(3), Err(IndexOutOfBounds::new(3, 0..3)));
        assert_eq!(list.to_string(), "[10, 15, 20]");
        assert_eq!(list.index_of(&20), Some(2));
    }

    #[test]
    fn cursor_removal_repositions_backwards() {
        let mut list: ArrayList<i32> = [1, 2, 3].into_iter().collect();
        {
            let mut cursor = list.cursor_mut();
            assert_eq!(cursor.remove_current(), Some(1));
            assert_eq!(cursor.index(), None);
            assert_eq!(cursor.current(), None);
            cursor.move_next();
            assert_eq!(cursor.current(), Some(&mut 2));
            cursor.move_next();
            assert_eq!(cursor.remove_current(), Some(3));
            assert_eq!(cursor.index(), Some(0));
            cursor.move_next();
            assert!(cursor.is_end());
            assert_eq!(cursor.remove_current(), None);
            cursor.move_next();
            assert!(cursor.is_end());
        }
        assert_eq!(list.as_slice(), [2]);
    }

    #[test]
    fn read_cursor_walks_to_end() {
        let list: ArrayList<i32> = [4, 5].into_iter().collect();
        let mut it = list.begin();
        let mut seen: Vec<&i32> = vec![];
        while it != list.end() {
            seen.extend(it.get());
            it.move_next();
        }
        assert_eq!(seen, [&4, &5]);
        assert!(it.is_end());
    }

    #[test]
    fn clone_keeps_capacity_and_is_independent() {
        let mut a = ArrayList::with_capacity(7);
        a.extend([1, 2, 3]);
        let mut b = a.clone();
        assert_eq!(b.capacity(), 7);
        assert_eq!(a, b);

        b.add(4);
        a.remove_at(0).unwrap();
        assert_eq!(a.as_slice(), [2, 3]);
        assert_eq!(b.as_slice(), [1, 2, 3, 4]);
    }

    #[test]
    fn clear_keeps_capacity_and_runs_callback() {
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        let mut list = ArrayList::with_capacity(2).with_delete_user_data(move |l: &ArrayList<i32>| {
            assert!(!l.is_empty());
            c.set(c.get() + 1);
        });
        list.extend([1, 2, 3]);
        let capacity = list.capacity();
        list.clear();
        assert_eq!(list.capacity(), capacity);
        assert_eq!(calls.get(), 1);

        list.add(9);
        drop(list);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn into_iter_detaches_callback() {
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        let mut list = ArrayList::new().with_delete_user_data(move |_| c.set(c.get() + 1));
        list.extend([1, 2]);
        let values: Vec<i32> = list.into_iter().collect();
        assert_eq!(values, [1, 2]);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn with_item_eq_uses_default_capacity() {
        let mut list = ArrayList::with_item_eq(|a: &i32, b: &i32| a.abs() == b.abs());
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        list.extend([-3, 4]);
        assert_eq!(list.index_of(&3), Some(0));
        assert!(list.contains(&-4));
    }

    #[test]
    fn remove_item_with_closure_equality() {
        let mut list = ArrayList::with_capacity_and_item_eq(4, |a: &&str, b: &&str| a.len() == b.len());
        list.extend(["one", "three", "four"]);
        let mut removed = None;
        assert!(list.remove_item_with(&"xxxx", |s| removed = Some(s)));
        assert_eq!(removed, Some("four"));
        assert!(!list.remove_item(&"xx"));
        assert_eq!(list.to_string_with(|s| s.to_uppercase()), "[ONE, THREE]");
    }
}
