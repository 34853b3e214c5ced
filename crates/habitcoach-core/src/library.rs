//! Curated habit content: starter templates, the browsable library,
//! multi-habit plans, science tips, and barrier suggestions.
//!
//! Plans and templates are concrete typed structures so nothing loosely
//! typed crosses the boundary into the store.

use serde::Serialize;

use crate::model::Difficulty;

/// A ready-made tiny habit suggestion.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HabitTemplate {
    pub name: &'static str,
    pub goal: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
}

/// One habit inside a curated plan.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlanHabit {
    pub name: &'static str,
    pub goal: &'static str,
    pub difficulty: Difficulty,
}

/// A curated multi-habit plan, adopted all-or-nothing by the store.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HabitPlan {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub habits: &'static [PlanHabit],
}

/// A category section of the browsable library.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LibraryCategory {
    pub category: &'static str,
    pub habits: &'static [HabitTemplate],
}

/// Popular starter habits shown on the add-habit screen.
pub const TINY_HABITS: &[HabitTemplate] = &[
    HabitTemplate { name: "Hydrate", goal: "Drink one glass of water", icon: "💧", category: "Health" },
    HabitTemplate { name: "Read", goal: "Read 2 pages of a book", icon: "📖", category: "Mind" },
    HabitTemplate { name: "Move", goal: "Walk for 5 minutes", icon: "🚶", category: "Health" },
    HabitTemplate { name: "Mindfulness", goal: "One minute of deep breathing", icon: "🧘", category: "Mind" },
    HabitTemplate { name: "Tidy", goal: "Put away 3 items in a room", icon: "✨", category: "Productivity" },
    HabitTemplate { name: "Journal", goal: "Write one sentence about today", icon: "✍️", category: "Mind" },
];

/// Rotating habit-science one-liners for the dashboard side panel.
pub const SCIENCE_TIPS: &[&str] = &[
    "Habits stick faster when you attach them to another existing habit (Habit Stacking).",
    "Tiny steps every day > big effort once a week. Your brain loves easy wins.",
    "Your environment dictates your behavior. Place visual cues where you'll see them.",
    "Missing one day doesn't ruin a habit. Missing two is the start of a new one.",
    "The 'Goldilocks Zone' of habits: Not too easy to be boring, not too hard to be scary.",
    "Motivation is a wave; systems are the surfboard. Build the system first.",
];

/// Deterministic tip selection; any index wraps around the tip list.
pub fn science_tip(index: usize) -> &'static str {
    SCIENCE_TIPS[index % SCIENCE_TIPS.len()]
}

/// Supportive suggestion for a named barrier, if we know it.
pub fn barrier_solution(barrier: &str) -> Option<&'static str> {
    match barrier {
        "forgot" => Some("Try a sticky note on your mirror or a phone wallpaper reminder!"),
        "no-time" => Some("Can you do a 'Nano' version? 30 seconds is better than zero."),
        "tired" => Some("Do the '2-Minute Version'—just start, and you can stop after 120 seconds."),
        "not-feeling-it" => Some("Focus on how you'll feel *after* you've done it, even for a moment."),
        _ => None,
    }
}

/// Curated starter plans.
pub const HABIT_PLANS: &[HabitPlan] = &[
    HabitPlan {
        id: "sleep",
        title: "Better Sleep",
        description: "Wind down and wake up refreshed.",
        icon: "🌙",
        habits: &[
            PlanHabit { name: "No Screens", goal: "Turn off phone 15m before bed", difficulty: Difficulty::Tiny },
            PlanHabit { name: "Morning Light", goal: "Step outside for 2m after waking", difficulty: Difficulty::Tiny },
        ],
    },
    HabitPlan {
        id: "focus",
        title: "Study Focus",
        description: "Deep work for busy minds.",
        icon: "🧠",
        habits: &[
            PlanHabit { name: "Clear Desk", goal: "Remove 1 distraction from desk", difficulty: Difficulty::Tiny },
            PlanHabit { name: "Focus Block", goal: "Set a 10m timer for one task", difficulty: Difficulty::Tiny },
        ],
    },
    HabitPlan {
        id: "fitness",
        title: "Fitness Starter",
        description: "Start moving without the gym fear.",
        icon: "💪",
        habits: &[
            PlanHabit { name: "Squats", goal: "Do 5 squats while brushing teeth", difficulty: Difficulty::Tiny },
            PlanHabit { name: "Stretch", goal: "One child's pose stretch", difficulty: Difficulty::Tiny },
        ],
    },
];

/// Find a curated plan by id.
pub fn plan_by_id(id: &str) -> Option<&'static HabitPlan> {
    HABIT_PLANS.iter().find(|p| p.id == id)
}

/// The full browsable library, grouped by category.
pub const HABIT_LIBRARY: &[LibraryCategory] = &[
    LibraryCategory {
        category: "Health",
        habits: &[
            HabitTemplate { name: "Water", goal: "Drink water before coffee", icon: "💧", category: "Health" },
            HabitTemplate { name: "Sunlight", goal: "2 minutes of morning sun", icon: "☀️", category: "Health" },
            HabitTemplate { name: "Posture", goal: "One shoulder roll every hour", icon: "🧍", category: "Health" },
        ],
    },
    LibraryCategory {
        category: "Productivity",
        habits: &[
            HabitTemplate { name: "Inbox", goal: "Archive 5 old emails", icon: "📧", category: "Productivity" },
            HabitTemplate { name: "Priority", goal: "Write down top 1 task", icon: "📝", category: "Productivity" },
            HabitTemplate { name: "Desktop", goal: "Close unused browser tabs", icon: "💻", category: "Productivity" },
        ],
    },
    LibraryCategory {
        category: "Mind",
        habits: &[
            HabitTemplate { name: "Gratitude", goal: "Name 1 thing I'm thankful for", icon: "🙏", category: "Mind" },
            HabitTemplate { name: "Breathing", goal: "3 deep belly breaths", icon: "🌬️", category: "Mind" },
            HabitTemplate { name: "Observation", goal: "Notice 1 beautiful thing outside", icon: "🌸", category: "Mind" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_are_addressable_by_id() {
        assert_eq!(plan_by_id("sleep").unwrap().title, "Better Sleep");
        assert_eq!(plan_by_id("focus").unwrap().habits.len(), 2);
        assert!(plan_by_id("unknown").is_none());
    }

    #[test]
    fn every_plan_fits_under_the_cap_from_empty() {
        for plan in HABIT_PLANS {
            assert!(plan.habits.len() <= crate::store::MAX_HABITS);
        }
    }

    #[test]
    fn science_tip_wraps_around() {
        assert_eq!(science_tip(0), SCIENCE_TIPS[0]);
        assert_eq!(science_tip(SCIENCE_TIPS.len()), SCIENCE_TIPS[0]);
        assert_eq!(science_tip(SCIENCE_TIPS.len() + 2), SCIENCE_TIPS[2]);
    }

    #[test]
    fn known_barriers_have_suggestions() {
        for key in ["forgot", "no-time", "tired", "not-feeling-it"] {
            assert!(barrier_solution(key).is_some());
        }
        assert!(barrier_solution("aliens").is_none());
    }
}
