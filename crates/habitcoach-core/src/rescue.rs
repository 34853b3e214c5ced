//! Habit rescue: a one-way support transition for a struggling habit.
//!
//! Rescue demotes the habit to the tiny difficulty tier and annotates
//! the goal so the card reads as the reduced version. The struggling
//! predicate is advisory only; it drives a prompt and has no side
//! effects.

use chrono::{Days, NaiveDate};

use crate::model::{Difficulty, Habit};

/// Suffix appended to the goal of a rescued habit.
pub const RESCUE_SUFFIX: &str = " (Reduced for success)";

/// Demote the habit to tiny and annotate its goal, returning a new
/// snapshot.
///
/// Idempotent: a second rescue keeps `difficulty == Tiny` and does not
/// append the suffix again.
pub fn rescue(habit: &Habit) -> Habit {
    let mut updated = habit.clone();
    updated.difficulty = Difficulty::Tiny;
    if !updated.goal.ends_with(RESCUE_SUFFIX) {
        updated.goal.push_str(RESCUE_SUFFIX);
    }
    updated
}

/// Whether the habit looks stuck: streak at zero, some history, nothing
/// completed yesterday, and today still open.
pub fn is_struggling(habit: &Habit, today: NaiveDate) -> bool {
    let yesterday = match today.checked_sub_days(Days::new(1)) {
        Some(d) => d,
        None => return false,
    };
    habit.streak == 0
        && !habit.logs.is_empty()
        && !habit.completed_on(yesterday)
        && !habit.completed_on(today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkin::check_in;
    use crate::model::{Frequency, HabitLog, Mood};

    fn habit() -> Habit {
        Habit {
            id: "h1".into(),
            name: "Move".into(),
            goal: "Walk for 5 minutes".into(),
            motivation: None,
            time: "08:00".into(),
            frequency: Frequency::Daily,
            difficulty: Difficulty::Advanced,
            logs: vec![],
            streak: 0,
            best_streak: 0,
            reminder_shift_count: 0,
            is_paused: false,
        }
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn rescue_demotes_to_tiny_and_annotates_goal() {
        let rescued = rescue(&habit());
        assert_eq!(rescued.difficulty, Difficulty::Tiny);
        assert_eq!(rescued.goal, "Walk for 5 minutes (Reduced for success)");
    }

    #[test]
    fn double_rescue_keeps_one_suffix() {
        let rescued = rescue(&rescue(&habit()));
        assert_eq!(rescued.difficulty, Difficulty::Tiny);
        assert_eq!(rescued.goal, "Walk for 5 minutes (Reduced for success)");
    }

    #[test]
    fn fresh_habit_is_not_struggling() {
        // No history yet, nothing to rescue.
        assert!(!is_struggling(&habit(), day("2026-08-25")));
    }

    #[test]
    fn stale_habit_with_history_is_struggling() {
        let mut h = habit();
        h.logs.push(HabitLog {
            date: day("2026-08-20"),
            completed: true,
            mood: Mood::Okay,
            notes: None,
        });
        assert!(is_struggling(&h, day("2026-08-25")));
    }

    #[test]
    fn habit_completed_yesterday_is_not_struggling() {
        let h = check_in(&habit(), Mood::Okay, None, day("2026-08-24"));
        let mut h = h;
        h.streak = 0; // even with streak forced to zero, yesterday counts
        assert!(!is_struggling(&h, day("2026-08-25")));
    }

    #[test]
    fn habit_done_today_is_not_struggling() {
        let mut h = check_in(&habit(), Mood::Okay, None, day("2026-08-25"));
        h.streak = 0;
        assert!(!is_struggling(&h, day("2026-08-25")));
    }

    #[test]
    fn positive_streak_is_not_struggling() {
        let h = check_in(&habit(), Mood::Happy, None, day("2026-08-20"));
        assert_eq!(h.streak, 1);
        assert!(!is_struggling(&h, day("2026-08-25")));
    }
}
