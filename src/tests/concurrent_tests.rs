#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{assert_strictly_increasing, assert_unique_ids};
    use crate::*;
    use std::collections::HashSet;
    use std::sync::{Arc, Barrier, Mutex};
    use std::thread;

    #[test]
    fn test_concurrent_generation_external_lock() {
        let generator = Arc::new(Mutex::new(IdGenerator::new(1).unwrap()));
        let mut handles = vec![];
        let num_threads = 4;
        let ids_per_thread = 250;

        for _ in 0..num_threads {
            let generator_clone = Arc::clone(&generator);
            handles.push(thread::spawn(move || {
                (0..ids_per_thread)
                    .map(|_| generator_clone.lock().unwrap().next_id())
                    .collect::<Vec<_>>()
            }));
        }

        let mut all_ids = Vec::with_capacity(num_threads * ids_per_thread);
        for handle in handles {
            all_ids.extend(handle.join().unwrap());
        }

        assert_unique_ids(&all_ids, num_threads * ids_per_thread);
    }

    #[test]
    fn test_shared_generator_high_contention() {
        let options = IdGeneratorOptions::builder()
            .worker_id(7)
            .build()
            .unwrap();
        let shared = SharedIdGenerator::new(IdGenerator::with_options(options).unwrap());
        let num_threads = 8;
        let ids_per_thread = 2_000;
        let barrier = Arc::new(Barrier::new(num_threads));

        let handles: Vec<_> = (0..num_threads)
            .map(|_| {
                let shared = shared.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    let ids: Vec<i64> = (0..ids_per_thread).map(|_| shared.next_id()).collect();
                    // Each thread observes its own ids in increasing order
                    assert_strictly_increasing(&ids);
                    ids
                })
            })
            .collect();

        let mut all_ids = Vec::with_capacity(num_threads * ids_per_thread);
        for h in handles {
            all_ids.extend(h.join().expect("thread panicked"));
        }

        assert_unique_ids(&all_ids, num_threads * ids_per_thread);
        let extract = shared.extractor();
        assert!(all_ids.iter().all(|id| extract.worker_id(*id) == 7));
    }

    #[test]
    fn test_shared_temp_ids_disjoint_from_regular() {
        let shared: SharedIdGenerator = IdGenerator::new(2).unwrap().into();
        let mut seen = HashSet::new();

        for _ in 0..500 {
            let id = shared.next_id();
            let temp = shared.next_temp_id();
            assert!(!is_temp_id(id));
            assert!(is_temp_id(temp));
            assert!(seen.insert(id));
            assert!(seen.insert(confirmed_id(temp)));
        }
        assert_eq!(shared.options().worker_id(), 2);
    }
}
