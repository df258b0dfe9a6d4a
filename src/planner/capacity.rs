//! Daily slot capacity planning and candidate time-slot generation.
//!
//! Capacities ramp upward as the exam nears: day `d` of `total_days` gets
//! `max(1, ceil(base_limit * (1 + ramp_factor * (d+1)/total_days)))` blocks.
//! Candidate slots walk those capacities day by day from a fixed start hour,
//! with a break gap between slots, dropping anything in the past and stopping
//! the instant a slot would end at or after the exam. Once the deadline is
//! crossed, every later day's first slot fails the same check, so no slot is
//! ever emitted past the exam.

use chrono::{Duration, NaiveDateTime, NaiveTime};

/// Every day gets at least one block regardless of ramp math.
pub const MIN_DAY_CAPACITY: u32 = 1;

/// Per-day block counts for `total_days` days, ramped by `ramp_factor`.
///
/// Day index 0 is today; the last index is the final day before the exam.
/// For non-negative ramp factors, later days never have less capacity than
/// earlier ones.
pub fn daily_capacities(total_days: u32, base_daily_limit: u32, ramp_factor: f64) -> Vec<u32> {
    (0..total_days)
        .map(|day_index| {
            let progress = f64::from(day_index + 1) / f64::from(total_days.max(1));
            let multiplier = 1.0 + ramp_factor * progress;
            // NaN or negative products fall through the cast to 0 and hit the floor
            let capacity = (f64::from(base_daily_limit) * multiplier).ceil() as u32;
            capacity.max(MIN_DAY_CAPACITY)
        })
        .collect()
}

/// Concrete candidate start times for the given per-day capacities.
///
/// Each day's slots begin at `day_start_hour:00` and run back to back with a
/// `break_minutes` gap. Returned starts are strictly increasing, each with
/// `start >= now` and `start + block_minutes < exam`.
pub fn candidate_slots(
    now: NaiveDateTime,
    exam: NaiveDateTime,
    day_start_hour: u32,
    block_minutes: u32,
    break_minutes: u32,
    capacities: &[u32],
) -> Vec<NaiveDateTime> {
    let day_start =
        NaiveTime::from_hms_opt(day_start_hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN);
    let block = Duration::minutes(i64::from(block_minutes));
    let gap = Duration::minutes(i64::from(break_minutes));

    let mut candidates = Vec::new();
    let today = now.date();
    for (offset, &capacity) in capacities.iter().enumerate() {
        let day = today + Duration::days(offset as i64);
        let mut slot = day.and_time(day_start);
        for _ in 0..capacity {
            let end = slot + block;
            if end >= exam {
                break;
            }
            // Slots already begun are dropped; only affects today
            if slot >= now {
                candidates.push(slot);
            }
            slot = end + gap;
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_capacities_zero_ramp_is_flat() {
        let caps = daily_capacities(5, 4, 0.0);
        assert_eq!(caps, vec![4, 4, 4, 4, 4]);
    }

    #[test]
    fn test_capacities_ramp_upward() {
        let caps = daily_capacities(4, 4, 0.5);
        // progress 0.25, 0.5, 0.75, 1.0 -> multipliers 1.125, 1.25, 1.375, 1.5
        assert_eq!(caps, vec![5, 5, 6, 6]);
        for pair in caps.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_capacities_floor_at_one() {
        let caps = daily_capacities(3, 1, -2.0);
        assert!(caps.iter().all(|&c| c >= MIN_DAY_CAPACITY));
    }

    #[test]
    fn test_capacities_last_day_full_ramp() {
        let caps = daily_capacities(10, 4, 1.0);
        // final day: ceil(4 * 2.0) = 8
        assert_eq!(*caps.last().unwrap(), 8);
    }

    #[test]
    fn test_slots_sequential_with_breaks() {
        let now = dt(1, 8, 0);
        let exam = dt(3, 9, 0);
        let slots = candidate_slots(now, exam, 9, 45, 10, &[3]);

        assert_eq!(slots, vec![dt(1, 9, 0), dt(1, 9, 55), dt(1, 10, 50)]);
    }

    #[test]
    fn test_slots_drop_past_starts_today_only() {
        let now = dt(1, 10, 0);
        let exam = dt(3, 9, 0);
        let slots = candidate_slots(now, exam, 9, 45, 10, &[3, 2]);

        // Today's 09:00 and 09:55 slots have already begun; tomorrow is untouched
        assert_eq!(slots, vec![dt(1, 10, 50), dt(2, 9, 0), dt(2, 9, 55)]);
    }

    #[test]
    fn test_slots_stop_at_deadline() {
        let now = dt(1, 8, 0);
        let exam = dt(1, 10, 30);
        let slots = candidate_slots(now, exam, 9, 45, 10, &[5]);

        // 09:00-09:45 fits, 09:55-10:40 would end past 10:30
        assert_eq!(slots, vec![dt(1, 9, 0)]);
    }

    #[test]
    fn test_slots_block_ending_exactly_at_exam_rejected() {
        let now = dt(1, 8, 0);
        let exam = dt(1, 9, 45);
        let slots = candidate_slots(now, exam, 9, 45, 10, &[2]);
        assert!(slots.is_empty());
    }

    #[test]
    fn test_no_slots_after_deadline_day() {
        let now = dt(1, 8, 0);
        let exam = dt(2, 10, 0);
        // Generous capacities on days past the exam yield nothing
        let slots = candidate_slots(now, exam, 9, 30, 0, &[2, 2, 8, 8]);

        assert_eq!(slots.len(), 3);
        assert!(slots.iter().all(|s| *s < exam));
        assert_eq!(slots.last(), Some(&dt(2, 9, 0)));
    }

    #[test]
    fn test_slots_strictly_increasing() {
        let now = dt(1, 8, 0);
        let exam = dt(5, 12, 0);
        let slots = candidate_slots(now, exam, 9, 45, 10, &[4, 4, 5, 5]);

        for pair in slots.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_zero_break_packs_back_to_back() {
        let now = dt(1, 8, 0);
        let exam = dt(2, 0, 0);
        let slots = candidate_slots(now, exam, 9, 60, 0, &[3]);

        assert_eq!(slots, vec![dt(1, 9, 0), dt(1, 10, 0), dt(1, 11, 0)]);
    }
}
