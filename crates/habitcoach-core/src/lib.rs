//! # Habit Coach Core Library
//!
//! This library provides the core business logic for Habit Coach, a
//! kindness-first tracker for tiny daily habits. It implements a
//! CLI-first philosophy where all operations are available via a
//! standalone CLI binary, with any GUI being a thin layer over the same
//! core library.
//!
//! ## Architecture
//!
//! - **Habit Store**: admission-controlled collection of habits and
//!   weekly reflections (at most 3 habits, the Overwhelm Shield)
//! - **Engines**: pure check-in, rescue, and statistics functions that
//!   turn one immutable snapshot into the next
//! - **Storage**: JSON state files plus TOML configuration
//! - **Coach**: HTTP boundary to the hosted coach model with
//!   fallback-on-failure semantics
//!
//! ## Key Components
//!
//! - [`HabitStore`]: habit collection with the 3-habit cap
//! - [`check_in`]: apply a same-day completion exactly once per day
//! - [`dashboard`]: derive the statistics snapshot for display
//! - [`rescue`]: one-way downgrade of a struggling habit
//! - [`CoachClient`]: conversational coach with supportive fallbacks

pub mod checkin;
pub mod coach;
pub mod error;
pub mod library;
pub mod model;
pub mod rescue;
pub mod stats;
pub mod storage;
pub mod store;

pub use checkin::check_in;
pub use coach::{habits_context, CoachClient, HabitImprovement};
pub use error::{ConfigError, CoreError, StorageError, StoreError};
pub use library::{HabitPlan, HabitTemplate, HABIT_LIBRARY, HABIT_PLANS, TINY_HABITS};
pub use model::{
    Difficulty, Frequency, Habit, HabitLog, LogNotes, Mood, ReflectionAnswers, WeeklyReflection,
};
pub use rescue::{is_struggling, rescue};
pub use stats::{dashboard, DashboardStats};
pub use storage::{Config, StateFiles};
pub use store::{HabitStore, MAX_HABITS};
