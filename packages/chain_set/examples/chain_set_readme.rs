//! Basic usage of the `chain_set` crate:
//!
//! * Inserting unique keys.
//! * Duplicate rejection.
//! * Map-like lookup through a key space.

use chain_set::{ChainSet, KeySpace};

#[derive(Debug)]
struct Peer {
    id: u64,
    address: String,
}

/// Peers are identified by their numeric id alone.
enum ById {}

impl KeySpace<Peer> for ById {
    type Key = u64;

    fn key_of(peer: &Peer) -> &u64 {
        &peer.id
    }
}

fn main() {
    let mut peers = ChainSet::<Peer>::builder().key_space::<ById>().build();

    peers.insert(Peer {
        id: 1,
        address: "192.0.2.10".to_string(),
    });
    peers.insert(Peer {
        id: 2,
        address: "192.0.2.20".to_string(),
    });

    // A peer re-announcing itself is not an error and changes nothing.
    let inserted = peers.insert(Peer {
        id: 1,
        address: "203.0.113.99".to_string(),
    });
    println!("re-announcement inserted: {inserted}");

    if let Some(peer) = peers.get(&1) {
        println!("peer 1 is at {}", peer.address);
    }

    println!(
        "{} peers across {} buckets",
        peers.len(),
        peers.bucket_count()
    );

    for peer in &peers {
        println!("known peer: {peer:?}");
    }
}
