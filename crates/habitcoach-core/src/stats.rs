//! Dashboard statistics engine.
//!
//! Pure derivation of a statistics snapshot from `(habits, today)`.
//! No side effects and no clock access: identical input yields an
//! identical snapshot, so everything here is property-testable.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::{Habit, Mood};

/// One day's activity in the 7-day consistency chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayActivity {
    /// Weekday short name, e.g. "Mon".
    pub name: String,
    pub date: NaiveDate,
    /// Number of distinct habits with a completed log on this date.
    pub count: u32,
}

/// Mood tallies over the trailing 7 days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCounts {
    pub happy: u32,
    pub okay: u32,
    pub stressed: u32,
    pub none: u32,
}

impl MoodCounts {
    pub fn get(&self, mood: Mood) -> u32 {
        match mood {
            Mood::Happy => self.happy,
            Mood::Okay => self.okay,
            Mood::Stressed => self.stressed,
            Mood::None => self.none,
        }
    }

    fn bump(&mut self, mood: Mood) {
        match mood {
            Mood::Happy => self.happy += 1,
            Mood::Okay => self.okay += 1,
            Mood::Stressed => self.stressed += 1,
            Mood::None => self.none += 1,
        }
    }
}

/// The most recent recorded win across all habits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestWin {
    pub habit_id: String,
    pub habit_name: String,
    pub date: NaiveDate,
    pub win: String,
}

/// One cell in a habit's 7-day completion row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub date: NaiveDate,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
}

/// Per-habit row for the dashboard grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitRow {
    pub habit_id: String,
    pub name: String,
    pub streak: u32,
    /// Exactly 7 cells, oldest first, aligned with `last7_days`.
    pub days: Vec<GridCell>,
}

/// Read-only statistics snapshot derived from the habit collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_habits: usize,
    /// Sum of current streaks across habits.
    pub active_streaks: u32,
    /// Habits without a completed log today.
    pub remaining_today: usize,
    /// Exactly 7 entries spanning `[today-6, today]`, oldest first.
    pub last7_days: Vec<DayActivity>,
    /// Percent of possible daily completions actually logged over the
    /// trailing 7 days; 0 when there are no habits.
    pub consistency_rate: f64,
    /// Composite 0-100 index blending average streak and consistency.
    pub growth_score: u32,
    pub mood_counts: MoodCounts,
    pub dominant_mood: Mood,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_win: Option<LatestWin>,
    pub habit_grid: Vec<HabitRow>,
}

/// Compute the dashboard snapshot for the habit collection as of `today`.
pub fn dashboard(habits: &[Habit], today: NaiveDate) -> DashboardStats {
    let total_habits = habits.len();
    let active_streaks: u32 = habits.iter().map(|h| h.streak).sum();
    let remaining_today = habits.iter().filter(|h| !h.completed_on(today)).count();

    let last7_days = last7_days(habits, today);

    let total_completions: u32 = last7_days.iter().map(|d| d.count).sum();
    let consistency_rate = if total_habits > 0 {
        100.0 * f64::from(total_completions) / (total_habits as f64 * 7.0)
    } else {
        0.0
    };

    // Exact coefficients from the product formula: avg streak weighted 5,
    // consistency weighted 0.5, rounded half-up on the sum, capped at 100.
    let avg_streak = if total_habits > 0 {
        f64::from(active_streaks) / total_habits as f64
    } else {
        0.0
    };
    let growth_score = (avg_streak * 5.0 + consistency_rate * 0.5)
        .round()
        .min(100.0) as u32;

    let (mood_counts, dominant_mood) = mood_summary(habits, today);
    let latest_win = latest_win(habits);
    let habit_grid = habit_grid(habits, &last7_days);

    DashboardStats {
        total_habits,
        active_streaks,
        remaining_today,
        last7_days,
        consistency_rate,
        growth_score,
        mood_counts,
        dominant_mood,
        latest_win,
        habit_grid,
    }
}

fn last7_days(habits: &[Habit], today: NaiveDate) -> Vec<DayActivity> {
    (0..7)
        .map(|i| {
            // i = 0 is six days ago, i = 6 is today.
            let date = today - Days::new(6 - i);
            let count = habits.iter().filter(|h| h.completed_on(date)).count() as u32;
            DayActivity {
                name: date.format("%a").to_string(),
                date,
                count,
            }
        })
        .collect()
}

/// Tally moods over logs dated within the trailing 7 days (inclusive
/// lower bound `today - 7`), excluding `none` entries. The dominant mood
/// is the mode over the fixed order {happy, okay, stressed, none} with
/// strict-greater comparison, so ties keep the earlier mood and an empty
/// window yields `none`.
fn mood_summary(habits: &[Habit], today: NaiveDate) -> (MoodCounts, Mood) {
    let window_start = today - Days::new(7);
    let mut counts = MoodCounts::default();

    for habit in habits {
        for log in &habit.logs {
            if log.date >= window_start && log.mood != Mood::None {
                counts.bump(log.mood);
            }
        }
    }

    let mut dominant = Mood::None;
    let mut max_count = 0;
    for mood in Mood::ALL {
        if counts.get(mood) > max_count {
            max_count = counts.get(mood);
            dominant = mood;
        }
    }

    (counts, dominant)
}

/// The log with a non-empty `notes.win` carrying the most recent date.
/// Date ties go to the habit earliest in the collection.
fn latest_win(habits: &[Habit]) -> Option<LatestWin> {
    let mut best: Option<LatestWin> = None;

    for habit in habits {
        for log in &habit.logs {
            let win = match &log.notes {
                Some(notes) if !notes.win.is_empty() => notes.win.clone(),
                _ => continue,
            };
            let newer = best.as_ref().map_or(true, |b| log.date > b.date);
            if newer {
                best = Some(LatestWin {
                    habit_id: habit.id.clone(),
                    habit_name: habit.name.clone(),
                    date: log.date,
                    win,
                });
            }
        }
    }

    best
}

fn habit_grid(habits: &[Habit], last7_days: &[DayActivity]) -> Vec<HabitRow> {
    habits
        .iter()
        .map(|habit| HabitRow {
            habit_id: habit.id.clone(),
            name: habit.name.clone(),
            streak: habit.streak,
            days: last7_days
                .iter()
                .map(|day| {
                    let log = habit.log_on(day.date);
                    GridCell {
                        date: day.date,
                        completed: log.is_some(),
                        mood: log.map(|l| l.mood),
                    }
                })
                .collect(),
        })
        .collect()
}
