//! Core entities: habits, daily logs, and weekly reflections.
//!
//! Field names serialize in camelCase so that state written by earlier
//! builds of the app (`bestStreak`, `reminderShiftCount`, ...) loads
//! unchanged.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Difficulty tier of a habit. Rescue only ever lowers this to `Tiny`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Tiny,
    Normal,
    Advanced,
}

impl Difficulty {
    /// Parse from the CLI/user-facing spelling.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tiny" => Some(Difficulty::Tiny),
            "normal" => Some(Difficulty::Normal),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Tiny => "tiny",
            Difficulty::Normal => "normal",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// Mood recorded at check-in time.
///
/// The variant order is the fixed enumeration order used for
/// deterministic tie-breaking in mood statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Okay,
    Stressed,
    None,
}

impl Mood {
    /// All moods in tie-break order.
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Okay, Mood::Stressed, Mood::None];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "happy" => Some(Mood::Happy),
            "okay" => Some(Mood::Okay),
            "stressed" => Some(Mood::Stressed),
            "none" => Some(Mood::None),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Okay => "okay",
            Mood::Stressed => "stressed",
            Mood::None => "none",
        }
    }
}

/// How often a habit recurs. Only `Daily` is produced by habit creation;
/// `Weekly` is admitted by the model for forward compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
}

/// Optional free-text notes attached to a check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogNotes {
    pub win: String,
    pub learned: String,
}

/// One day's record for one habit.
///
/// Created once at check-in time and never mutated afterwards. Within a
/// habit's log sequence the calendar date is the natural key: at most one
/// completed entry may exist per date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitLog {
    /// Calendar day, no time component.
    pub date: NaiveDate,
    pub completed: bool,
    pub mood: Mood,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<LogNotes>,
}

/// A tracked behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Opaque unique identifier, assigned at creation, immutable.
    pub id: String,
    pub name: String,
    pub goal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation: Option<String>,
    /// Reminder time of day, e.g. "08:00".
    pub time: String,
    pub frequency: Frequency,
    pub difficulty: Difficulty,
    /// Append-only check-in history, chronological insertion order.
    pub logs: Vec<HabitLog>,
    /// Count of consecutive check-in events (not calendar days) ending at
    /// the most recent completion. Never reset by a missed day.
    pub streak: u32,
    /// Maximum streak ever observed; monotonically non-decreasing.
    pub best_streak: u32,
    pub reminder_shift_count: u32,
    #[serde(default)]
    pub is_paused: bool,
}

impl Habit {
    /// Whether a completed log exists for the given calendar date.
    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.logs.iter().any(|l| l.date == date && l.completed)
    }

    /// The completed log for the given date, if any.
    pub fn log_on(&self, date: NaiveDate) -> Option<&HabitLog> {
        self.logs.iter().find(|l| l.date == date && l.completed)
    }
}

/// Answers to the three weekly retrospective questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionAnswers {
    /// What went well?
    pub q1: String,
    /// What was the biggest challenge?
    pub q2: String,
    /// One tiny improvement for next week?
    pub q3: String,
}

/// A point-in-time weekly retrospective, independent of any single habit.
///
/// Prepended to history on save (most-recent-first) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReflection {
    pub id: String,
    /// Timestamp at save time.
    pub week_starting: DateTime<Utc>,
    pub answers: ReflectionAnswers,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit_with_log(date: NaiveDate, completed: bool) -> Habit {
        Habit {
            id: "h1".into(),
            name: "Hydrate".into(),
            goal: "Drink one glass of water".into(),
            motivation: None,
            time: "08:00".into(),
            frequency: Frequency::Daily,
            difficulty: Difficulty::Tiny,
            logs: vec![HabitLog {
                date,
                completed,
                mood: Mood::Happy,
                notes: None,
            }],
            streak: 1,
            best_streak: 1,
            reminder_shift_count: 0,
            is_paused: false,
        }
    }

    #[test]
    fn completed_on_matches_only_completed_entries() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        assert!(habit_with_log(date, true).completed_on(date));
        assert!(!habit_with_log(date, false).completed_on(date));
        assert!(!habit_with_log(date, true)
            .completed_on(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()));
    }

    #[test]
    fn habit_serializes_with_camel_case_keys() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let json = serde_json::to_value(habit_with_log(date, true)).unwrap();
        assert!(json.get("bestStreak").is_some());
        assert!(json.get("reminderShiftCount").is_some());
        assert_eq!(json["difficulty"], "tiny");
        assert_eq!(json["logs"][0]["mood"], "happy");
        assert_eq!(json["logs"][0]["date"], "2026-08-25");
    }

    #[test]
    fn habit_round_trips_through_json() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let habit = habit_with_log(date, true);
        let json = serde_json::to_string(&habit).unwrap();
        let back: Habit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, habit);
    }

    #[test]
    fn legacy_json_without_is_paused_still_loads() {
        let json = r#"{
            "id": "abc123", "name": "Read", "goal": "Read 2 pages",
            "time": "08:00", "frequency": "daily", "difficulty": "normal",
            "logs": [], "streak": 0, "bestStreak": 0, "reminderShiftCount": 0
        }"#;
        let habit: Habit = serde_json::from_str(json).unwrap();
        assert!(!habit.is_paused);
        assert_eq!(habit.difficulty, Difficulty::Normal);
    }
}
