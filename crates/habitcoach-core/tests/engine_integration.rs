//! End-to-end engine scenarios across store, check-in, rescue, and stats.

use chrono::{Days, NaiveDate};
use habitcoach_core::{
    check_in, dashboard, is_struggling, rescue, Difficulty, HabitStore, Mood, StateFiles,
};

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn two_day_hydrate_journey() {
    let mut store = HabitStore::new();
    assert!(store.habits().is_empty());

    let id = store
        .create("Hydrate", "Drink one glass of water", Difficulty::Tiny, None)
        .unwrap()
        .id
        .clone();
    assert_eq!(store.habits().len(), 1);
    assert_eq!(store.habits()[0].streak, 0);

    // Day one: first check-in counts, the second is a no-op.
    let today = day("2026-08-24");
    let updated = check_in(store.get(&id).unwrap(), Mood::Happy, None, today);
    store.replace(updated).unwrap();

    let habit = store.get(&id).unwrap();
    assert_eq!(habit.streak, 1);
    assert_eq!(habit.best_streak, 1);
    assert_eq!(habit.logs.len(), 1);
    assert_eq!(habit.logs[0].date, today);

    let repeat = check_in(habit, Mood::Okay, None, today);
    assert_eq!(&repeat, habit);

    // Day two.
    let tomorrow = today + Days::new(1);
    let updated = check_in(store.get(&id).unwrap(), Mood::Stressed, None, tomorrow);
    store.replace(updated).unwrap();

    let habit = store.get(&id).unwrap();
    assert_eq!(habit.streak, 2);
    assert_eq!(habit.best_streak, 2);
    assert_eq!(habit.logs.len(), 2);

    let stats = dashboard(store.habits(), tomorrow);
    assert_eq!(stats.last7_days[6].count, 1);
    assert_eq!(stats.remaining_today, 0);
    assert_eq!(stats.total_habits, 1);
}

#[test]
fn rescue_flow_for_a_stalled_habit() {
    let mut store = HabitStore::new();
    let id = store
        .create("Move", "Walk for 5 minutes", Difficulty::Normal, None)
        .unwrap()
        .id
        .clone();

    // Logged once, then nothing for days.
    let updated = check_in(store.get(&id).unwrap(), Mood::Okay, None, day("2026-08-18"));
    store.replace(updated).unwrap();

    let mut stalled = store.get(&id).unwrap().clone();
    stalled.streak = 0;
    store.replace(stalled).unwrap();

    let today = day("2026-08-25");
    let habit = store.get(&id).unwrap();
    assert!(is_struggling(habit, today));

    let rescued = rescue(habit);
    store.replace(rescued).unwrap();

    let habit = store.get(&id).unwrap();
    assert_eq!(habit.difficulty, Difficulty::Tiny);
    assert!(habit.goal.ends_with("(Reduced for success)"));

    // Rescue again: still tiny, still a single suffix.
    let again = rescue(habit);
    assert_eq!(again.goal, habit.goal);
}

#[test]
fn session_state_survives_a_save_load_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let files = StateFiles::at(dir.path());

    let mut store = HabitStore::new();
    let id = store
        .create("Read", "Read 2 pages of a book", Difficulty::Tiny, None)
        .unwrap()
        .id
        .clone();
    let updated = check_in(store.get(&id).unwrap(), Mood::Happy, None, day("2026-08-25"));
    store.replace(updated).unwrap();
    files.save(&store).unwrap();

    let reloaded = files.load();
    let habit = reloaded.get(&id).unwrap();
    assert_eq!(habit.streak, 1);
    assert_eq!(habit.logs.len(), 1);

    // Stats from the reloaded snapshot match the in-memory ones.
    let today = day("2026-08-25");
    assert_eq!(
        dashboard(reloaded.habits(), today),
        dashboard(store.habits(), today)
    );
}
