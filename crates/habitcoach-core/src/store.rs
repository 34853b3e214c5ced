//! Habit store: admission control and CRUD over the habit collection.
//!
//! The store owns the habit and reflection collections for a session.
//! Its one structural invariant is the Overwhelm Shield: at most
//! [`MAX_HABITS`] habits exist at any time, and creation beyond that is
//! rejected up front with no partial mutation.

use chrono::Utc;
use uuid::Uuid;

use crate::error::StoreError;
use crate::library::HabitPlan;
use crate::model::{
    Difficulty, Frequency, Habit, ReflectionAnswers, WeeklyReflection,
};

/// Hard cap on concurrently tracked habits (the Overwhelm Shield).
pub const MAX_HABITS: usize = 3;

/// The session's habit and reflection collections.
#[derive(Debug, Clone, Default)]
pub struct HabitStore {
    habits: Vec<Habit>,
    reflections: Vec<WeeklyReflection>,
}

impl HabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously persisted collections.
    pub fn from_parts(habits: Vec<Habit>, reflections: Vec<WeeklyReflection>) -> Self {
        Self {
            habits,
            reflections,
        }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn reflections(&self) -> &[WeeklyReflection] {
        &self.reflections
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Create a habit with the standard defaults.
    ///
    /// Rejected with no mutation when the collection already holds
    /// [`MAX_HABITS`] habits.
    pub fn create(
        &mut self,
        name: &str,
        goal: &str,
        difficulty: Difficulty,
        motivation: Option<String>,
    ) -> Result<&Habit, StoreError> {
        if self.habits.len() >= MAX_HABITS {
            return Err(StoreError::OverwhelmShield { max: MAX_HABITS });
        }

        let habit = Habit {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            goal: goal.to_string(),
            motivation,
            time: "08:00".to_string(),
            frequency: Frequency::Daily,
            difficulty,
            logs: Vec::new(),
            streak: 0,
            best_streak: 0,
            reminder_shift_count: 0,
            is_paused: false,
        };
        self.habits.push(habit);
        Ok(self.habits.last().expect("habit was just pushed"))
    }

    /// Adopt every habit of a curated plan, all-or-nothing.
    ///
    /// If the plan needs more slots than remain under the cap, nothing
    /// is admitted. Returns the ids of the created habits.
    pub fn adopt_plan(&mut self, plan: &HabitPlan) -> Result<Vec<String>, StoreError> {
        // A hand-edited data file can hold more habits than the cap.
        let available = MAX_HABITS.saturating_sub(self.habits.len());
        if plan.habits.len() > available {
            return Err(StoreError::PlanDoesNotFit {
                title: plan.title.to_string(),
                needed: plan.habits.len(),
                available,
            });
        }

        let motivation = format!("Part of {} plan", plan.title);
        let mut ids = Vec::with_capacity(plan.habits.len());
        for template in plan.habits {
            let habit = self.create(
                template.name,
                template.goal,
                template.difficulty,
                Some(motivation.clone()),
            )?;
            ids.push(habit.id.clone());
        }
        Ok(ids)
    }

    /// Replace the stored snapshot of a habit with an updated one.
    ///
    /// Used to apply engine output (check-in, rescue) back to the
    /// collection. The id must already exist.
    pub fn replace(&mut self, updated: Habit) -> Result<(), StoreError> {
        match self.habits.iter_mut().find(|h| h.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                Ok(())
            }
            None => Err(StoreError::HabitNotFound(updated.id)),
        }
    }

    /// Remove a habit, returning the removed entity.
    pub fn delete(&mut self, id: &str) -> Result<Habit, StoreError> {
        match self.habits.iter().position(|h| h.id == id) {
            Some(idx) => Ok(self.habits.remove(idx)),
            None => Err(StoreError::HabitNotFound(id.to_string())),
        }
    }

    /// Save a weekly reflection, prepending it to history.
    pub fn save_reflection(&mut self, answers: ReflectionAnswers) -> &WeeklyReflection {
        let reflection = WeeklyReflection {
            id: Uuid::new_v4().to_string(),
            week_starting: Utc::now(),
            answers,
        };
        self.reflections.insert(0, reflection);
        &self.reflections[0]
    }

    /// Tear down the store into its persistable collections.
    pub fn into_parts(self) -> (Vec<Habit>, Vec<WeeklyReflection>) {
        (self.habits, self.reflections)
    }
}
