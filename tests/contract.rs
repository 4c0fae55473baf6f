use ilist::{ArrayList, DLinkedList, IList, IndexOutOfBounds};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn filled<L: IList<i32> + Default>(values: &[i32]) -> L {
    let mut list = L::default();
    for &value in values {
        list.add(value);
    }
    list
}

fn render<L: IList<i32>>(list: &L) -> String {
    list.to_string_with(|x| x.to_string())
}

fn natural<L: IList<i32>>(list: &L) -> String {
    list.to_display_string()
}

/// Runs a seeded random sequence of operations against `L` and a `Vec`.
fn follows_vec_model<L: IList<i32> + Default>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut list = L::default();
    let mut model: Vec<i32> = Vec::new();

    for _ in 0..2_000 {
        let value = rng.gen_range(0..20);
        let index = rng.gen_range(0..model.len() + 2);
        match rng.gen_range(0..7) {
            0 | 1 => {
                list.add(value);
                model.push(value);
            }
            2 => {
                let expected = if index <= model.len() {
                    model.insert(index, value);
                    Ok(())
                } else {
                    Err(IndexOutOfBounds {
                        index,
                        valid: 0..model.len() + 1,
                    })
                };
                assert_eq!(list.insert(index, value), expected);
            }
            3 => {
                let expected = if index < model.len() {
                    Ok(model.remove(index))
                } else {
                    Err(IndexOutOfBounds {
                        index,
                        valid: 0..model.len(),
                    })
                };
                assert_eq!(list.remove_at(index), expected);
            }
            4 => {
                let position = model.iter().position(|x| *x == value);
                let mut removed = None;
                let found = list.remove_item_with(&value, |x| removed = Some(x));
                assert_eq!(found, position.is_some());
                if let Some(position) = position {
                    assert_eq!(removed, Some(model.remove(position)));
                }
            }
            5 => {
                assert_eq!(list.index_of(&value), model.iter().position(|x| *x == value));
                assert_eq!(list.get(index).ok(), model.get(index));
            }
            _ => {
                if let Ok(x) = list.get_mut(index) {
                    *x += 1;
                    model[index] += 1;
                }
            }
        }
        if rng.gen_ratio(1, 400) {
            list.clear();
            model.clear();
        }
        assert_eq!(list.len(), model.len());
        assert_eq!(list.is_empty(), model.is_empty());
    }
    assert!(list.iter().eq(model.iter()));
}

macro_rules! contract {
    ($module:ident, $list:ty) => {
        mod $module {
            use super::*;
            use test_case::test_case;

            type List = $list;

            #[test]
            fn add_insert_remove_lookup() {
                let mut list: List = filled(&[10, 20]);
                list.insert(1, 15).unwrap();
                assert_eq!(render(&list), "[10, 15, 20]");

                assert_eq!(list.remove_at(0), Ok(10));
                assert_eq!(render(&list), "[15, 20]");
                assert_eq!(list.index_of(&20), Some(1));
                assert!(!list.contains(&99));
            }

            #[test_case(0 => "[99, 1, 2, 3]" ; "front")]
            #[test_case(1 => "[1, 99, 2, 3]" ; "middle")]
            #[test_case(2 => "[1, 2, 99, 3]" ; "before last")]
            #[test_case(3 => "[1, 2, 3, 99]" ; "append")]
            fn insert_places_before_index(index: usize) -> String {
                let mut list: List = filled(&[1, 2, 3]);
                list.insert(index, 99).unwrap();
                assert_eq!(list.get(index), Ok(&99));
                render(&list)
            }

            #[test_case(&[], 1 ; "empty")]
            #[test_case(&[1, 2, 3], 4 ; "past append position")]
            fn insert_out_of_range_is_rejected(values: &[i32], index: usize) {
                let mut list: List = filled(values);
                let err = list.insert(index, 0).unwrap_err();
                assert_eq!(err.index, index);
                assert_eq!(err.valid, 0..values.len() + 1);
                assert!(list.iter().eq(values.iter()));
            }

            #[test_case(&[], 0 ; "empty")]
            #[test_case(&[1, 2, 3], 3 ; "one past the end")]
            #[test_case(&[1], 10 ; "far past the end")]
            fn remove_at_out_of_range_is_rejected(values: &[i32], index: usize) {
                let mut list: List = filled(values);
                assert_eq!(
                    list.remove_at(index),
                    Err(IndexOutOfBounds {
                        index,
                        valid: 0..values.len()
                    })
                );
                assert!(list.get(index).is_err());
                assert!(list.iter().eq(values.iter()));
            }

            #[test_case(10 => Some(0) ; "first")]
            #[test_case(30 => Some(2) ; "last")]
            #[test_case(20 => Some(1) ; "first of duplicates")]
            #[test_case(99 => None ; "missing")]
            fn index_of_finds_first_match(item: i32) -> Option<usize> {
                let list: List = filled(&[10, 20, 30, 20]);
                list.index_of(&item)
            }

            #[test]
            fn remove_item_takes_first_match_only() {
                let mut list: List = filled(&[5, 6, 5]);
                assert!(list.remove_item(&5));
                assert_eq!(render(&list), "[6, 5]");
                assert!(list.remove_item(&5));
                assert!(!list.remove_item(&5));
                assert_eq!(render(&list), "[6]");
            }

            #[test]
            fn get_mut_writes_through() {
                let mut list: List = filled(&[1, 2, 3]);
                *list.get_mut(1).unwrap() = 20;
                assert_eq!(render(&list), "[1, 20, 3]");
            }

            #[test]
            fn clear_then_reuse() {
                let mut list: List = filled(&[1, 2, 3]);
                list.clear();
                assert!(list.is_empty());
                assert_eq!(render(&list), "[]");
                list.add(4);
                assert_eq!(list.len(), 1);
                assert_eq!(list.get(0), Ok(&4));
            }

            #[test]
            fn custom_formatter() {
                let list: List = filled(&[1, 2]);
                assert_eq!(list.to_string_with(|x| format!("<{}>", x)), "[<1>, <2>]");
            }

            #[test_case(&[] => "[]" ; "empty")]
            #[test_case(&[7] => "[7]" ; "single")]
            #[test_case(&[1, -2, 3] => "[1, -2, 3]" ; "several")]
            fn display_string_through_the_contract(values: &[i32]) -> String {
                let list: List = filled(values);
                assert_eq!(natural(&list), list.to_string());
                natural(&list)
            }

            #[test_case(1)]
            #[test_case(7)]
            #[test_case(1234)]
            fn matches_vec_model(seed: u64) {
                follows_vec_model::<List>(seed);
            }
        }
    };
}

contract!(linked_list, DLinkedList<i32>);
contract!(array_list, ArrayList<i32>);

#[test]
fn variants_agree_on_display() {
    let linked: DLinkedList<i32> = (1..=4).collect();
    let array: ArrayList<i32> = (1..=4).collect();
    assert_eq!(linked.to_string(), array.to_string());
    assert_eq!(format!("{:?}", linked), format!("{:?}", array));
}

#[test]
fn iterator_removal_of_middle_element() {
    let mut linked: DLinkedList<i32> = (1..=3).collect();
    let mut array: ArrayList<i32> = (1..=3).collect();

    let mut cursor = linked.cursor_mut();
    cursor.move_next();
    assert_eq!(cursor.remove_current(), Some(2));

    let mut cursor = array.cursor_mut();
    cursor.move_next();
    assert_eq!(cursor.remove_current(), Some(2));

    assert_eq!(linked.to_string(), "[1, 3]");
    assert_eq!(array.to_string(), "[1, 3]");
}

fn removal_plan(seed: u64) -> (Vec<i32>, Vec<bool>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = rng.gen_range(0..24);
    let values: Vec<i32> = (0..len).collect();
    let remove = values.iter().map(|_| rng.gen_bool(0.4)).collect();
    (values, remove)
}

fn kept(values: &[i32], remove: &[bool]) -> Vec<i32> {
    values
        .iter()
        .zip(remove)
        .filter(|(_, removed)| !**removed)
        .map(|(value, _)| *value)
        .collect()
}

#[test]
fn random_cursor_removal_keeps_order() {
    for seed in 0..200 {
        let (values, remove) = removal_plan(seed);
        let expected = kept(&values, &remove);

        let mut forward: DLinkedList<i32> = values.iter().copied().collect();
        let mut visited = vec![];
        let mut cursor = forward.cursor_mut();
        while !cursor.is_end() {
            let value = *cursor.current().unwrap();
            visited.push(value);
            if remove[value as usize] {
                assert_eq!(cursor.remove_current(), Some(value));
            }
            cursor.move_next();
        }
        assert_eq!(visited, values);
        assert!(forward.iter().copied().eq(expected.iter().copied()));

        let mut backward: DLinkedList<i32> = values.iter().copied().collect();
        let mut visited = vec![];
        let mut cursor = backward.cursor_back_mut();
        while !cursor.is_end() {
            let value = *cursor.current().unwrap();
            visited.push(value);
            if remove[value as usize] {
                assert_eq!(cursor.remove_current(), Some(value));
            }
            cursor.move_next();
        }
        assert!(visited.iter().eq(values.iter().rev()));
        assert!(backward.iter().copied().eq(expected.iter().copied()));
        let mut reversed: Vec<i32> = vec![];
        let mut it = backward.bbegin();
        while it != backward.bend() {
            reversed.extend(it.get().copied());
            it.move_next();
        }
        assert!(reversed.iter().eq(expected.iter().rev()));

        let mut array: ArrayList<i32> = ArrayList::with_capacity(0);
        array.extend(values.iter().copied());
        let mut visited = vec![];
        let mut cursor = array.cursor_mut();
        while !cursor.is_end() {
            let value = *cursor.current().unwrap();
            visited.push(value);
            if remove[value as usize] {
                assert_eq!(cursor.remove_current(), Some(value));
            }
            cursor.move_next();
        }
        assert_eq!(visited, values);
        assert_eq!(array.as_slice(), expected.as_slice());
    }
}
