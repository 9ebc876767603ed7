#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::collections::linked::{EmptyList, ValueNotFound};
use crate::util::alloc::CountedDrop;

fn contents<T: Clone>(list: &DoublyList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_display_sequence() {
    let mut list = DoublyList::new(1);
    assert_eq!(list.to_string(), "1");

    list.insert_next_to_head(2).expect("The list isn't empty");
    list.verify_double_links();
    assert_eq!(list.to_string(), "1 <-> 2");

    list.insert_before_head(3);
    list.verify_double_links();
    assert_eq!(list.to_string(), "3 <-> 1 <-> 2");

    assert_eq!(list.insert_after_value(5, &3), Ok(()));
    list.verify_double_links();
    assert_eq!(list.to_string(), "3 <-> 5 <-> 1 <-> 2");

    assert_eq!(list.delete_value(&5), Ok(5));
    list.verify_double_links();
    assert_eq!(
        list.to_string(),
        "3 <-> 1 <-> 2",
        "The display shouldn't repeat the head, the list isn't circular."
    );
    assert_eq!(list.len(), 3);
}

#[test]
fn test_insert_next_to_head() {
    let mut list = DoublyList::new('a');
    list.insert_next_to_head('c').expect("The list isn't empty");
    list.insert_next_to_head('b').expect("The list isn't empty");
    list.verify_double_links();
    assert_eq!(contents(&list), ['a', 'b', 'c']);
    assert_eq!(list.head(), Some(&'a'));
}

#[test]
fn test_insert_after_value() {
    let mut list = DoublyList::new(1);
    list.insert_next_to_head(2).expect("The list isn't empty");

    assert_eq!(list.insert_after_value(3, &2), Ok(()));
    list.verify_double_links();
    assert_eq!(contents(&list), [1, 2, 3], "Inserting after the tail should extend the list.");

    assert_eq!(list.insert_after_value(4, &1), Ok(()));
    list.verify_double_links();
    assert_eq!(contents(&list), [1, 4, 2, 3]);

    assert_eq!(list.insert_after_value(9, &42), Err(ValueNotFound));
    list.verify_double_links();
    assert_eq!(list.len(), 4, "A failed search shouldn't change the length.");
    assert_eq!(contents(&list), [1, 4, 2, 3]);
}

#[test]
fn test_delete_value() {
    let mut list = DoublyList::new(1);
    for i in [4, 3, 2] {
        list.insert_next_to_head(i).expect("The list isn't empty");
    }
    assert_eq!(contents(&list), [1, 2, 3, 4]);

    assert_eq!(list.delete_value(&4), Ok(4));
    list.verify_double_links();
    assert_eq!(contents(&list), [1, 2, 3], "Deleting the tail should leave a new tail.");

    assert_eq!(list.delete_value(&1), Ok(1));
    list.verify_double_links();
    assert_eq!(list.head(), Some(&2), "Deleting the head should promote its successor.");
    assert_eq!(contents(&list), [2, 3]);

    assert_eq!(list.delete_value(&42), Err(ValueNotFound));
    assert_eq!(list.len(), 2, "A failed delete shouldn't change the length.");
    list.verify_double_links();
}

#[test]
fn test_delete_first_duplicate() {
    let mut list = DoublyList::new(7);
    list.insert_next_to_head(7).expect("The list isn't empty");
    list.insert_next_to_head(1).expect("The list isn't empty");
    *list.head_mut().expect("The list isn't empty") = 0;

    assert_eq!(contents(&list), [0, 1, 7]);
    list.insert_before_head(7);
    assert_eq!(list.delete_value(&7), Ok(7));
    assert_eq!(contents(&list), [0, 1, 7], "Only the first match should be deleted.");
    list.verify_double_links();
}

#[test]
fn test_empty_list() {
    let mut list = DoublyList::new("x");
    assert_eq!(list.delete_value(&"x"), Ok("x"));
    list.verify_double_links();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.head(), None);
    assert_eq!(list.to_string(), "()");
    assert_eq!(list.iter().next(), None);

    assert_eq!(list.insert_next_to_head("y"), Err(EmptyList));
    assert_eq!(list.insert_after_value("y", &"x"), Err(ValueNotFound));
    assert_eq!(list.delete_value(&"x"), Err(ValueNotFound));
    assert!(list.is_empty(), "Failed operations shouldn't add anything to an empty list.");

    list.insert_before_head("z");
    list.verify_double_links();
    assert_eq!(list.len(), 1);
    assert_eq!(list.to_string(), "z");
}

#[test]
fn test_round_trip() {
    let mut list = DoublyList::new(10);
    for i in [40, 30, 20] {
        list.insert_next_to_head(i).expect("The list isn't empty");
    }
    let before = list.clone();

    list.insert_after_value(25, &20).expect("20 is in the list");
    assert_eq!(list.len(), before.len() + 1);
    assert_eq!(list.delete_value(&25), Ok(25));

    assert_eq!(list, before, "Inserting then deleting a unique value should restore the list.");
    list.verify_double_links();
}

#[test]
fn test_len_matches_traversal() {
    let mut list = DoublyList::new(0);
    for i in 1..20 {
        match i % 3 {
            0 => list.insert_before_head(i),
            1 => list.insert_next_to_head(i).expect("The list isn't empty"),
            _ => list.insert_after_value(i, &(i - 1)).expect("i - 1 was just inserted"),
        }
        list.verify_double_links();
        assert_eq!(list.len(), list.iter().count());
        assert_eq!(list.iter().len(), list.len());
    }

    for i in 0..20 {
        assert_eq!(list.delete_value(&i), Ok(i));
        list.verify_double_links();
        assert_eq!(list.len(), list.iter().count());
        assert!(!list.contains(&i));
    }
    assert!(list.is_empty());
}

#[test]
fn test_clone_and_debug() {
    let mut list = DoublyList::new(String::from("b"));
    list.insert_before_head(String::from("a"));

    let copy = list.clone();
    copy.verify_double_links();
    list.head_mut().expect("The list isn't empty").push('!');

    assert_eq!(list.to_string(), "a! <-> b");
    assert_eq!(copy.to_string(), "a <-> b", "A clone shouldn't share nodes.");
    assert_ne!(list, copy);
    assert_eq!(format!("{copy:?}"), r#"DoublyList { contents: ["a", "b"], len: 2 }"#);

    let mut empty = DoublyList::new(String::new());
    empty.delete_value(&String::new()).expect("The list holds an empty string");
    assert!(empty.clone().is_empty());
}

#[test]
fn test_drops_every_node_once() {
    let drops = Rc::new(Cell::new(0));
    let mut list = DoublyList::new(CountedDrop::new(0, &drops));
    for id in 1..6 {
        list.insert_before_head(CountedDrop::new(id, &drops));
    }

    let probe = CountedDrop::new(3, &drops);
    let removed = list.delete_value(&probe).expect("3 is in the list");
    drop(probe);
    assert_eq!(removed.id, 3);
    assert_eq!(drops.get(), 1, "Only the probe should have been dropped so far.");
    drop(removed);
    assert_eq!(drops.get(), 2);

    drop(list);
    assert_eq!(drops.get(), 7, "Dropping the list should drop each remaining value once.");
}
