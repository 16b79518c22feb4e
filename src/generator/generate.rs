//! Id generation logic
//!
//! `next_id` dispatches on the drift flag; rollback is detected on the
//! normal path only

use tracing::{debug, warn};

use super::time::Clock;
use super::IdGenerator;

impl<C: Clock> IdGenerator<C> {
    /// Generate a new id.
    ///
    /// Never fails. Blocks only when the drift budget is spent, until real
    /// time passes the last borrowed tick.
    #[inline]
    pub fn next_id(&mut self) -> i64 {
        if self.state.is_over_cost {
            self.next_over_cost_id()
        } else {
            self.next_normal_id()
        }
    }

    fn next_normal_id(&mut self) -> i64 {
        let tick = self.now_tick();
        let min_seq = self.options.min_seq_number();

        if tick < self.state.last_time_tick {
            return self.next_turn_back_id(tick);
        }

        if self.state.turn_back_time_tick > 0 {
            debug!(
                worker_id = self.options.worker_id(),
                tick,
                turn_back_index = self.state.turn_back_index,
                "clock recovered from rollback"
            );
            self.state.turn_back_time_tick = 0;
        }

        if tick > self.state.last_time_tick {
            self.state.adopt_tick(tick, min_seq);
            return self.issue_at_last_tick();
        }

        if self.state.current_seq_number > self.options.max_seq_number() {
            self.state.over_cost_count_in_one_term = 0;
            self.state.borrow_tick(min_seq);
            debug!(
                worker_id = self.options.worker_id(),
                tick,
                borrowed_tick = self.state.last_time_tick,
                "sequence exhausted, drifting ahead of the clock"
            );
            return self.issue_at_last_tick();
        }

        self.issue_at_last_tick()
    }

    fn next_over_cost_id(&mut self) -> i64 {
        let tick = self.now_tick();
        let min_seq = self.options.min_seq_number();

        if tick > self.state.last_time_tick {
            self.state.adopt_tick(tick, min_seq);
            return self.issue_at_last_tick();
        }

        if self.state.over_cost_count_in_one_term >= self.options.top_over_cost_count() {
            let borrowed_tick = self.state.last_time_tick;
            warn!(
                worker_id = self.options.worker_id(),
                tick,
                borrowed_tick,
                over_cost_count = self.state.over_cost_count_in_one_term,
                "drift budget exhausted, waiting for the clock"
            );
            let tick = self.wait_next_tick(borrowed_tick);
            debug!(
                worker_id = self.options.worker_id(),
                tick,
                "clock caught up with borrowed tick"
            );
            self.state.adopt_tick(tick, min_seq);
            return self.issue_at_last_tick();
        }

        if self.state.current_seq_number > self.options.max_seq_number() {
            self.state.borrow_tick(min_seq);
            return self.issue_at_last_tick();
        }

        self.issue_at_last_tick()
    }

    /// Issue an id on a synthetic, decreasing tick while the clock is behind
    #[cold]
    #[inline(never)]
    fn next_turn_back_id(&mut self, tick: i64) -> i64 {
        if self.state.begin_turn_back() {
            warn!(
                worker_id = self.options.worker_id(),
                tick,
                last_time_tick = self.state.last_time_tick,
                turn_back_index = self.state.turn_back_index,
                "clock moved backwards, issuing turn-back ids"
            );
        }

        let id = self.assemble_id(self.state.turn_back_time_tick, self.state.turn_back_index);
        self.state.turn_back_time_tick -= 1;
        id
    }

    #[inline(always)]
    fn issue_at_last_tick(&mut self) -> i64 {
        let id = self.assemble_id(self.state.last_time_tick, self.state.current_seq_number);
        self.state.current_seq_number += 1;
        id
    }
}
