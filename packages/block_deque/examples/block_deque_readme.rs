//! Basic usage of the `block_deque` crate:
//!
//! * Pushing at both ends.
//! * Random access by position.
//! * Traversal in both directions.

use block_deque::BlockDeque;

fn main() {
    let mut deque = BlockDeque::new();

    deque.push_back("middle".to_string());
    deque.push_back("newest".to_string());
    deque.push_front("oldest".to_string());

    println!("The deque holds {} items", deque.len());
    println!("Position 1 holds: {}", deque.get(1));

    // The cursor walks in both directions without moving any element.
    for item in &deque {
        println!("forward: {item}");
    }
    for item in deque.iter().rev() {
        println!("backward: {item}");
    }

    while !deque.is_empty() {
        println!("popped: {}", deque.pop_front());
    }
}
