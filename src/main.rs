use linked_lists::collections::linked::{CircularList, DoublyList};

fn main() {
    println!("\n[CircularList]\n");

    let mut ring = CircularList::new(1);
    ring.insert_next_to_head(2);
    ring.insert_next_to_head(3);
    ring.insert_before_head(4);
    ring.insert_next_to_last(5);
    println!("{ring}");

    if let Err(err) = ring.insert_before_last(6) {
        eprintln!("{err}");
    }
    if let Err(err) = ring.insert_next_to_value(7, &2) {
        eprintln!("{err}");
    }
    if let Err(err) = ring.insert_before_value(8, &5) {
        eprintln!("{err}");
    }
    match ring.delete_value(&4) {
        Ok(value) => println!("Deleted {value}"),
        Err(err) => eprintln!("{err}"),
    }
    println!("{ring}");
    println!("Size: {}", ring.len());

    if let Err(err) = ring.delete_value(&42) {
        eprintln!("{err}");
    }

    let mut single = CircularList::new('A');
    if let Err(err) = single.insert_before_last('B') {
        eprintln!("{err}");
    }

    println!("\n[DoublyList]\n");

    let mut list = DoublyList::new(1);
    if let Err(err) = list.insert_next_to_head(2) {
        eprintln!("{err}");
    }
    println!("{list}");

    list.insert_before_head(3);
    println!("{list}");

    list.insert_before_head(4);
    println!("{list}");

    for (value, target) in [(5, 3), (6, 2), (7, 42)] {
        match list.insert_after_value(value, &target) {
            Ok(()) => println!("{list}"),
            Err(err) => eprintln!("{err}"),
        }
    }

    match list.delete_value(&3) {
        Ok(_) => println!("{list}"),
        Err(err) => eprintln!("{err}"),
    }
    println!("{list:?}");
}
