use chrono::Utc;
use tracing::debug;

use crate::model::task::{ScheduledTask, Task};

/// First slot of the working day, minutes since midnight (07:00).
pub const OPENING_MINUTES: u16 = 7 * 60;
/// Closing boundary, minutes since midnight (23:00). No placement may end past it.
pub const CLOSING_MINUTES: u16 = 23 * 60;
/// Grid granularity in minutes.
pub const SLOT_MINUTES: u16 = 30;

/// Error type for placement attempts
#[derive(Debug, thiserror::Error)]
pub enum PlaceError {
    #[error("invalid time: {0}")]
    InvalidTime(String),
    #[error("placement would end at {end}, past closing time 23:00")]
    PastClosing { end: String },
    #[error("time slot conflicts with {name} ({start} - {end})")]
    Overlap {
        name: String,
        start: String,
        end: String,
    },
}

// ---------------------------------------------------------------------------
// Time arithmetic
// ---------------------------------------------------------------------------

/// Parse a zero-padded "HH:MM" label into minutes since midnight.
pub fn parse_hhmm(time: &str) -> Result<u16, PlaceError> {
    let bad = || PlaceError::InvalidTime(time.to_string());
    let (h, m) = time.split_once(':').ok_or_else(bad)?;
    let hours: u16 = h.parse().map_err(|_| bad())?;
    let minutes: u16 = m.parse().map_err(|_| bad())?;
    if hours > 23 || minutes > 59 {
        return Err(bad());
    }
    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as zero-padded "HH:MM".
pub fn format_hhmm(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// End time for a placement: start + duration, clamped to "23:59" when the
/// raw sum would cross midnight. The closing-boundary rejection in
/// [`try_place`] keeps the clamp out of reach in normal use.
pub fn compute_end_time(start: &str, duration: u16) -> Result<String, PlaceError> {
    let end = parse_hhmm(start)? + duration;
    if end >= 24 * 60 {
        return Ok("23:59".to_string());
    }
    Ok(format_hhmm(end))
}

// ---------------------------------------------------------------------------
// Slot grid
// ---------------------------------------------------------------------------

/// All slot labels at 30-minute steps from 07:00 to 23:00 inclusive.
/// No half-hour slot follows the final "23:00".
pub fn time_slots() -> Vec<String> {
    let mut slots = Vec::new();
    let mut t = OPENING_MINUTES;
    while t <= CLOSING_MINUTES {
        slots.push(format_hhmm(t));
        t += SLOT_MINUTES;
    }
    slots
}

// ---------------------------------------------------------------------------
// Placement engine
// ---------------------------------------------------------------------------

/// Whether a candidate `[start, start + duration)` fits: within the closing
/// boundary and free of overlap with every existing placement (half-open
/// interval comparison).
pub fn slot_available(start: &str, duration: u16, existing: &[ScheduledTask]) -> bool {
    match parse_hhmm(start) {
        Ok(start_min) => check_slot(start_min, duration, existing).is_ok(),
        Err(_) => false,
    }
}

fn check_slot(start_min: u16, duration: u16, existing: &[ScheduledTask]) -> Result<(), PlaceError> {
    let end_min = start_min + duration;

    if end_min > CLOSING_MINUTES {
        return Err(PlaceError::PastClosing {
            end: format_hhmm(end_min.min(24 * 60 - 1)),
        });
    }

    for other in existing {
        let other_start = parse_hhmm(&other.start_time)?;
        let other_end = parse_hhmm(&other.end_time)?;
        if start_min < other_end && end_min > other_start {
            return Err(PlaceError::Overlap {
                name: other.name.clone(),
                start: other.start_time.clone(),
                end: other.end_time.clone(),
            });
        }
    }
    Ok(())
}

/// Attempt to bind `task` to the slot at `start`. A single atomic
/// accept-or-reject decision: on acceptance the returned ScheduledTask carries
/// a fresh placement id; on rejection nothing is mutated. The stored times are
/// re-rendered zero-padded, so an unpadded "7:00" comes back as "07:00" and
/// the report's lexicographic sort stays chronological.
pub fn try_place(
    task: &Task,
    start: &str,
    existing: &[ScheduledTask],
) -> Result<ScheduledTask, PlaceError> {
    let start_min = parse_hhmm(start)?;
    if let Err(e) = check_slot(start_min, task.duration, existing) {
        debug!(task = %task.name, start, error = %e, "placement rejected");
        return Err(e);
    }
    let start_time = format_hhmm(start_min);
    let end_time = compute_end_time(&start_time, task.duration)?;
    Ok(ScheduledTask {
        id: format!("{}-{}", task.id, Utc::now().timestamp_millis()),
        name: task.name.clone(),
        duration: task.duration,
        category: task.category.clone(),
        description: task.description.clone(),
        start_time,
        end_time,
    })
}

/// Remove exactly the placement with the given id, leaving the rest untouched.
pub fn remove_placement(scheduled: &mut Vec<ScheduledTask>, id: &str) {
    scheduled.retain(|t| t.id != id);
}

/// The placement starting at `slot`, if any.
pub fn placement_at<'a>(scheduled: &'a [ScheduledTask], slot: &str) -> Option<&'a ScheduledTask> {
    scheduled.iter().find(|t| t.start_time == slot)
}

/// Whether `slot` falls inside an existing placement's interval without being
/// its start (the tail rows of a multi-slot placement).
pub fn slot_is_covered(scheduled: &[ScheduledTask], slot: &str) -> bool {
    let Ok(slot_min) = parse_hhmm(slot) else {
        return false;
    };
    scheduled.iter().any(|t| {
        let (Ok(start), Ok(end)) = (parse_hhmm(&t.start_time), parse_hhmm(&t.end_time)) else {
            return false;
        };
        slot_min > start && slot_min < end
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{DURATION_CHOICES, FALLBACK_CATEGORY};
    use pretty_assertions::assert_eq;

    fn task(name: &str, duration: u16) -> Task {
        Task::new(name.to_string(), duration, FALLBACK_CATEGORY.to_string(), None)
    }

    // --- Slot grid ---

    #[test]
    fn test_time_slots_bounds() {
        let slots = time_slots();
        assert_eq!(slots.first().unwrap(), "07:00");
        assert_eq!(slots.last().unwrap(), "23:00");
        // 07:00..23:00 is 16 hours at 2 slots each, plus the closing label
        assert_eq!(slots.len(), 33);
        // No half slot after closing
        assert!(!slots.contains(&"23:30".to_string()));
    }

    #[test]
    fn test_time_slots_deterministic() {
        assert_eq!(time_slots(), time_slots());
    }

    // --- Time arithmetic ---

    #[test]
    fn test_parse_and_format_round() {
        assert_eq!(parse_hhmm("07:00").unwrap(), 420);
        assert_eq!(parse_hhmm("23:00").unwrap(), 1380);
        assert_eq!(format_hhmm(420), "07:00");
        assert_eq!(format_hhmm(1439), "23:59");
        assert!(parse_hhmm("25:00").is_err());
        assert!(parse_hhmm("0900").is_err());
    }

    #[test]
    fn test_compute_end_time_all_durations() {
        for &d in DURATION_CHOICES {
            let end = compute_end_time("09:00", d).unwrap();
            assert_eq!(end, format_hhmm(9 * 60 + d));
        }
    }

    #[test]
    fn test_compute_end_time_ninety_minutes() {
        assert_eq!(compute_end_time("09:00", 90).unwrap(), "10:30");
    }

    #[test]
    fn test_compute_end_time_clamps_past_midnight() {
        assert_eq!(compute_end_time("23:00", 60).unwrap(), "23:59");
        assert_eq!(compute_end_time("22:00", 240).unwrap(), "23:59");
    }

    // --- Placement engine ---

    #[test]
    fn test_place_accepts_and_computes_end() {
        let t = task("処方入力", 90);
        let placed = try_place(&t, "09:00", &[]).unwrap();
        assert_eq!(placed.start_time, "09:00");
        assert_eq!(placed.end_time, "10:30");
        assert_eq!(placed.name, "処方入力");
        assert!(placed.id.starts_with(&t.id));
        assert_ne!(placed.id, t.id);
    }

    #[test]
    fn test_place_normalizes_unpadded_start() {
        let placed = try_place(&task("開局準備", 60), "7:00", &[]).unwrap();
        assert_eq!(placed.start_time, "07:00");
        assert_eq!(placed.end_time, "08:00");
    }

    #[test]
    fn test_place_rejects_past_closing() {
        let t = task("監査", 60);
        let err = try_place(&t, "22:30", &[]).unwrap_err();
        assert!(matches!(err, PlaceError::PastClosing { .. }));
    }

    #[test]
    fn test_place_accepts_flush_with_closing() {
        let t = task("レジ締め", 60);
        let placed = try_place(&t, "22:00", &[]).unwrap();
        assert_eq!(placed.end_time, "23:00");
    }

    #[test]
    fn test_place_rejects_overlap() {
        let first = try_place(&task("調剤", 60), "09:00", &[]).unwrap();
        let existing = vec![first];
        // 09:30-10:00 overlaps 09:00-10:00
        let err = try_place(&task("監査", 30), "09:30", &existing).unwrap_err();
        assert!(matches!(err, PlaceError::Overlap { .. }));
    }

    #[test]
    fn test_adjacent_placements_do_not_overlap() {
        let first = try_place(&task("調剤", 60), "09:00", &[]).unwrap();
        let existing = vec![first];
        // Half-open intervals: 10:00 start touches 10:00 end, no conflict
        let placed = try_place(&task("監査", 30), "10:00", &existing).unwrap();
        assert_eq!(placed.end_time, "10:30");
        // And the slot just before the existing start
        let before = try_place(&task("薬歴", 30), "08:30", &existing).unwrap();
        assert_eq!(before.end_time, "09:00");
    }

    #[test]
    fn test_no_overlap_after_any_accept_sequence() {
        let mut scheduled: Vec<ScheduledTask> = Vec::new();
        let attempts = [
            ("09:00", 60),
            ("09:30", 30), // rejected
            ("10:00", 90),
            ("11:00", 60), // rejected
            ("13:00", 120),
            ("22:30", 60), // rejected, past closing
            ("11:30", 30),
        ];
        for (start, duration) in attempts {
            if let Ok(placed) = try_place(&task("t", duration), start, &scheduled) {
                scheduled.push(placed);
            }
        }
        assert_eq!(scheduled.len(), 4);
        for a in &scheduled {
            for b in &scheduled {
                if a.id == b.id {
                    continue;
                }
                let (a0, a1) = (parse_hhmm(&a.start_time).unwrap(), parse_hhmm(&a.end_time).unwrap());
                let (b0, b1) = (parse_hhmm(&b.start_time).unwrap(), parse_hhmm(&b.end_time).unwrap());
                assert!(a1 <= b0 || b1 <= a0, "{:?} overlaps {:?}", a, b);
            }
            assert!(parse_hhmm(&a.end_time).unwrap() <= CLOSING_MINUTES);
        }
    }

    #[test]
    fn test_remove_placement_removes_exactly_one() {
        let a = try_place(&task("a", 30), "09:00", &[]).unwrap();
        let b = try_place(&task("b", 30), "10:00", &[a.clone()]).unwrap();
        let c = try_place(&task("c", 30), "11:00", &[a.clone(), b.clone()]).unwrap();
        let mut scheduled = vec![a.clone(), b.clone(), c.clone()];
        remove_placement(&mut scheduled, &b.id);
        assert_eq!(scheduled, vec![a, c]);
    }

    #[test]
    fn test_slot_cover_queries() {
        let placed = try_place(&task("調剤", 90), "09:00", &[]).unwrap();
        let scheduled = vec![placed];
        assert!(placement_at(&scheduled, "09:00").is_some());
        assert!(placement_at(&scheduled, "09:30").is_none());
        assert!(slot_is_covered(&scheduled, "09:30"));
        assert!(slot_is_covered(&scheduled, "10:00"));
        assert!(!slot_is_covered(&scheduled, "10:30"));
        assert!(!slot_is_covered(&scheduled, "09:00"));
    }

    #[test]
    fn test_slot_available_matches_try_place() {
        let placed = try_place(&task("調剤", 60), "09:00", &[]).unwrap();
        let scheduled = vec![placed];
        assert!(slot_available("10:00", 30, &scheduled));
        assert!(!slot_available("09:30", 30, &scheduled));
        assert!(!slot_available("22:30", 60, &scheduled));
    }
}
