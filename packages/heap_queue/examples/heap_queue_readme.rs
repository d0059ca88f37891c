//! Basic usage of the `heap_queue` crate:
//!
//! * Pushing in arbitrary order.
//! * Popping in comparator order.
//! * Ad-hoc comparators from closures.

use heap_queue::HeapQueue;

struct Patient {
    urgency: u8,
    name: &'static str,
}

fn main() {
    let mut triage = HeapQueue::with_comparator(|a: &Patient, b: &Patient| {
        a.urgency.cmp(&b.urgency)
    });

    triage.push(Patient {
        urgency: 3,
        name: "sprained ankle",
    });
    triage.push(Patient {
        urgency: 9,
        name: "chest pain",
    });
    triage.push(Patient {
        urgency: 5,
        name: "deep cut",
    });

    println!("{} patients waiting", triage.len());

    while !triage.is_empty() {
        let patient = triage.pop();
        println!("treating (urgency {}): {}", patient.urgency, patient.name);
    }
}
