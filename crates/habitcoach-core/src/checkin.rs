//! Daily check-in engine.
//!
//! Applies a same-day completion to a habit exactly once per calendar
//! day and recomputes the streak counters. The streak increment is
//! unconditional on previous-day continuity: streak counts consecutive
//! check-in events performed, not consecutive calendar days covered, so
//! a user who skipped days and shows up today still gets `streak + 1`.
//! That kindness policy is part of the product contract.

use chrono::NaiveDate;

use crate::model::{Habit, HabitLog, LogNotes, Mood};

/// Apply a completion for `today` to the habit, returning a new snapshot.
///
/// Idempotent per day: if a completed log for `today` already exists the
/// habit comes back unchanged. No duplicate log, no streak increment, no
/// error.
pub fn check_in(habit: &Habit, mood: Mood, notes: Option<LogNotes>, today: NaiveDate) -> Habit {
    if habit.completed_on(today) {
        return habit.clone();
    }

    let mut updated = habit.clone();
    updated.logs.push(HabitLog {
        date: today,
        completed: true,
        mood,
        notes,
    });
    updated.streak = habit.streak + 1;
    updated.best_streak = habit.best_streak.max(updated.streak);
    updated
}
