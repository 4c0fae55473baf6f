//! Equality strategies and deletion callbacks the lists are parameterised with.

use std::rc::Rc;

/// Decides whether two elements are "the same item" for `index_of`,
/// `contains` and `remove_item`.
///
/// [`NativeEq`] is the default and defers to `PartialEq`. Any
/// `Fn(&T, &T) -> bool` is a strategy as well, so a closure can be passed
/// straight to `with_item_eq`.
///
/// ```
/// use ilist::DLinkedList;
///
/// let mut names = DLinkedList::with_item_eq(|a: &String, b: &String| {
///     a.eq_ignore_ascii_case(b)
/// });
/// names.add("Alice".to_string());
/// names.add("Bob".to_string());
///
/// assert_eq!(names.index_of(&"BOB".to_string()), Some(1));
/// ```
pub trait ItemEq<T> {
    fn item_eq(&self, lhs: &T, rhs: &T) -> bool;
}

/// Element equality through `PartialEq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeEq;

impl<T: PartialEq> ItemEq<T> for NativeEq {
    #[inline]
    fn item_eq(&self, lhs: &T, rhs: &T) -> bool {
        lhs == rhs
    }
}

impl<T, F> ItemEq<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn item_eq(&self, lhs: &T, rhs: &T) -> bool {
        self(lhs, rhs)
    }
}

/// Container-wide deletion callback.
///
/// It is handed the whole container, elements still in place, right before
/// `clear`, `clone_from` or drop discards them. Use it to release resources
/// the elements refer to but do not own (pool handles, external keys, ...).
/// Copies of a container share the callback with their source.
pub type DeleteUserData<L> = Rc<dyn Fn(&L)>;

#[cfg(test)]
mod tests {
    use super::*;

    fn same_len(a: &&str, b: &&str) -> bool {
        a.len() == b.len()
    }

    #[test]
    fn native_eq_uses_partial_eq() {
        assert!(NativeEq.item_eq(&3, &3));
        assert!(!NativeEq.item_eq(&3, &4));
    }

    #[test]
    fn closures_and_fns_are_strategies() {
        let modulo = |a: &i32, b: &i32| a % 10 == b % 10;
        assert!(modulo.item_eq(&13, &3));
        assert!(!modulo.item_eq(&13, &4));

        assert!(same_len.item_eq(&"abc", &"xyz"));
        assert!(!same_len.item_eq(&"abc", &"xy"));
    }
}
