use std::collections::HashSet;
use std::thread;

use driftflake::{IdGenerator, IdGeneratorOptions, SharedIdGenerator};

fn main() {
    let options = IdGeneratorOptions::builder()
        .worker_id(12)
        .worker_id_bit_length(10)
        .seq_bit_length(12)
        .build()
        .unwrap();
    let shared = SharedIdGenerator::new(IdGenerator::with_options(options).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let shared = shared.clone();
            thread::spawn(move || {
                let ids: Vec<i64> = (0..10_000).map(|_| shared.next_id()).collect();
                println!("thread {n}: first {} last {}", ids[0], ids[ids.len() - 1]);
                ids
            })
        })
        .collect();

    let mut unique = HashSet::new();
    for handle in handles {
        unique.extend(handle.join().unwrap());
    }
    println!("{} unique ids from worker {}", unique.len(), options.worker_id());
}
