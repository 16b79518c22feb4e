//! Mutable generation state
//!
//! Owned by a single generator and touched only by `next_id`

/// Which branch of the state machine the next call will take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Issuing ids at the real tick
    Normal,
    /// Ahead of real time on borrowed ticks
    OverCost,
    /// Absorbing a backward clock jump with synthetic ticks
    TurnBack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct State {
    pub(crate) last_time_tick: i64,
    pub(crate) current_seq_number: u32,
    pub(crate) is_over_cost: bool,
    pub(crate) over_cost_count_in_one_term: u32,
    pub(crate) turn_back_time_tick: i64,
    pub(crate) turn_back_index: u32,
}

impl State {
    /// Number of distinct turn-back indexes before they cycle
    pub(crate) const TURN_BACK_CYCLE: u32 = 4;

    pub(crate) const fn new(min_seq_number: u32) -> Self {
        Self {
            last_time_tick: 0,
            current_seq_number: min_seq_number,
            is_over_cost: false,
            over_cost_count_in_one_term: 0,
            turn_back_time_tick: 0,
            turn_back_index: 0,
        }
    }

    pub(crate) const fn mode(&self) -> Mode {
        if self.is_over_cost {
            Mode::OverCost
        } else if self.turn_back_time_tick > 0 {
            Mode::TurnBack
        } else {
            Mode::Normal
        }
    }

    /// Move to the real tick `tick` and leave drift mode
    #[inline]
    pub(crate) fn adopt_tick(&mut self, tick: i64, min_seq_number: u32) {
        self.last_time_tick = tick;
        self.current_seq_number = min_seq_number;
        self.is_over_cost = false;
        self.over_cost_count_in_one_term = 0;
    }

    /// Take the next tick ahead of real time
    #[inline]
    pub(crate) fn borrow_tick(&mut self, min_seq_number: u32) {
        self.last_time_tick += 1;
        self.current_seq_number = min_seq_number;
        self.is_over_cost = true;
        self.over_cost_count_in_one_term += 1;
    }

    /// Start a rollback episode if none is active
    pub(crate) fn begin_turn_back(&mut self) -> bool {
        if self.turn_back_time_tick >= 1 {
            return false;
        }
        self.turn_back_time_tick = self.last_time_tick - 1;
        self.turn_back_index = self.turn_back_index % Self::TURN_BACK_CYCLE + 1;
        true
    }
}
