//! Slot grid generation.
//!
//! A slot is a fixed 1-hour bookable interval derived from a facility's
//! operating hours. Slots are never persisted; the grid is regenerated
//! on every availability query.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use courtyard_core::types::time::hhmm;

/// Length of every bookable slot.
pub const SLOT_MINUTES: i64 = 60;

/// A single 1-hour bookable interval within a facility's operating hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Slot start (inclusive).
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// Slot end (exclusive). Always start + 60 minutes.
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

/// Generate the ordered slot grid for an operating window.
///
/// Walks from `open` towards `close` in 60-minute steps. A slot is
/// emitted only when the full 60 minutes fit before `close`; a shorter
/// closing remainder is silently dropped. `close <= open` yields an
/// empty grid.
pub fn generate_slots(open: NaiveTime, close: NaiveTime) -> Vec<Slot> {
    let step = Duration::minutes(SLOT_MINUTES);
    let mut slots = Vec::new();
    let mut start = open;

    loop {
        let (end, wrapped) = start.overflowing_add_signed(step);
        // overflowing past midnight means the slot no longer fits today
        if wrapped != 0 || end > close || end <= start {
            break;
        }
        slots.push(Slot {
            start_time: start,
            end_time: end,
        });
        start = end;
    }

    slots
}
