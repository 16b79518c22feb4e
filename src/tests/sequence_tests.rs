//! Normal-path sequence allocation

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{
        assert_strictly_increasing, ids_per_tick, options_builder, MockClock,
    };
    use crate::*;

    #[test]
    fn test_first_id_starts_at_min_sequence() {
        let clock = MockClock::at_tick(500);
        let options = options_builder().build().unwrap();
        let mut generator = IdGenerator::with_clock(options, clock).unwrap();

        let id = generator.next_id();
        assert_eq!(generator.extract.decompose(id), (500, 1, 5));
        assert_eq!(generator.last_time_tick(), 500);
        assert_eq!(generator.mode(), Mode::Normal);
    }

    #[test]
    fn test_sequence_increments_within_tick() {
        let clock = MockClock::at_tick(500);
        let options = options_builder().build().unwrap();
        let mut generator = IdGenerator::with_clock(options, clock).unwrap();

        let ids: Vec<i64> = (0..10).map(|_| generator.next_id()).collect();
        for (i, id) in ids.iter().enumerate() {
            let (tick, _, seq) = generator.extract.decompose(*id);
            assert_eq!(tick, 500);
            assert_eq!(seq, 5 + i as u32);
        }
        assert_strictly_increasing(&ids);
    }

    #[test]
    fn test_sequence_restarts_on_new_tick() {
        let clock = MockClock::at_tick(500);
        let options = options_builder().build().unwrap();
        let mut generator = IdGenerator::with_clock(options, clock.clone()).unwrap();

        for _ in 0..10 {
            generator.next_id();
        }
        clock.advance(3);

        let id = generator.next_id();
        assert_eq!(generator.extract.decompose(id), (503, 1, 5));
    }

    #[test]
    fn test_custom_sequence_bounds() {
        let clock = MockClock::at_tick(10);
        let options = options_builder()
            .min_seq_number(10)
            .max_seq_number(12)
            .build()
            .unwrap();
        let mut generator = IdGenerator::with_clock(options, clock).unwrap();

        let seqs: Vec<(i64, u32)> = (0..4)
            .map(|_| {
                let id = generator.next_id();
                let (tick, _, seq) = generator.extract.decompose(id);
                (tick, seq)
            })
            .collect();
        assert_eq!(seqs, vec![(10, 10), (10, 11), (10, 12), (11, 10)]);
    }

    #[test]
    fn test_exhaustion_borrows_next_tick() {
        let clock = MockClock::at_tick(1_000);
        let options = options_builder().build().unwrap();
        let mut generator = IdGenerator::with_clock(options, clock).unwrap();
        let capacity = ids_per_tick(&options);

        let ids: Vec<i64> = (0..capacity).map(|_| generator.next_id()).collect();
        let (tick, _, seq) = generator.extract.decompose(*ids.last().unwrap());
        assert_eq!((tick, seq), (1_000, options.max_seq_number()));
        assert_eq!(generator.mode(), Mode::Normal);

        // The K+1th call drifts one tick ahead instead of failing
        let borrowed = generator.next_id();
        assert_eq!(
            generator.extract.decompose(borrowed),
            (1_001, 1, options.min_seq_number())
        );
        assert_eq!(generator.last_time_tick(), 1_001);
        assert_eq!(generator.mode(), Mode::OverCost);
        assert!(borrowed > *ids.last().unwrap());
    }

    #[test]
    fn test_monotonic_with_advancing_clock() {
        let clock = MockClock::at_tick(1);
        let options = options_builder().build().unwrap();
        let mut generator = IdGenerator::with_clock(options, clock.clone()).unwrap();

        let mut ids = Vec::new();
        for _ in 0..200 {
            for _ in 0..7 {
                ids.push(generator.next_id());
            }
            clock.advance(1);
        }
        assert_strictly_increasing(&ids);
        assert_eq!(generator.mode(), Mode::Normal);
    }

    #[test]
    fn test_real_clock_monotonic() {
        let mut generator = IdGenerator::new(3).unwrap();
        let ids: Vec<i64> = (0..10_000).map(|_| generator.next_id()).collect();
        assert_strictly_increasing(&ids);
    }
}
