//! The `IList` sequence contract and its two storage strategies.

pub mod array_list;
pub mod item_eq;
pub mod linked_list;

use core::fmt;

use crate::error::IndexOutOfBounds;

/// An index-addressable sequence.
///
/// Implemented by [`DLinkedList`](crate::DLinkedList) (node chain) and
/// [`ArrayList`](crate::ArrayList) (contiguous buffer). Element equality in
/// `index_of`, `contains` and `remove_item` goes through the list's
/// [`ItemEq`](crate::ItemEq) strategy, not necessarily `PartialEq`.
///
/// Every fallible operation leaves the list untouched when it fails.
///
/// ```
/// use ilist::{ArrayList, DLinkedList, IList};
///
/// fn fill<L: IList<u32>>(list: &mut L) {
///     list.add(10);
///     list.add(20);
///     list.insert(1, 15).unwrap();
/// }
///
/// let mut linked = DLinkedList::new();
/// let mut array = ArrayList::new();
/// fill(&mut linked);
/// fill(&mut array);
///
/// assert_eq!(linked.to_string(), "[10, 15, 20]");
/// assert_eq!(array.to_string(), "[10, 15, 20]");
/// ```
pub trait IList<T> {
    /// Borrowing front-to-back iterator.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Appends `e` at the end.
    fn add(&mut self, e: T);

    /// Inserts `e` before position `index`; `index == len` appends.
    fn insert(&mut self, index: usize, e: T) -> Result<(), IndexOutOfBounds>;

    /// Removes and returns the element at `index`.
    fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds>;

    /// Removes the first element equal to `item`, handing it to `on_removed`.
    ///
    /// Returns whether an element was found and removed.
    fn remove_item_with<F>(&mut self, item: &T, on_removed: F) -> bool
    where
        F: FnOnce(T);

    /// Removes the first element equal to `item`.
    fn remove_item(&mut self, item: &T) -> bool {
        self.remove_item_with(item, drop)
    }

    fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds>;

    fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds>;

    /// Position of the first element equal to `item`, `None` if there is none.
    fn index_of(&self, item: &T) -> Option<usize>;

    fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element; the deletion callback, if any, runs first.
    fn clear(&mut self);

    fn iter(&self) -> Self::Iter<'_>;

    /// Renders the list as `[e0, e1, ..., en]` using `item2str` per element.
    fn to_string_with<F>(&self, item2str: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        render(self.iter(), item2str)
    }

    /// Renders the list as `[e0, e1, ..., en]` with each element's `Display`.
    fn to_display_string(&self) -> String
    where
        T: fmt::Display,
    {
        render(self.iter(), |e| e.to_string())
    }
}

pub(crate) fn render<'a, T, I, F>(items: I, mut item2str: F) -> String
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    F: FnMut(&T) -> String,
{
    let mut out = String::from("[");
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&item2str(item));
    }
    out.push(']');
    out
}
