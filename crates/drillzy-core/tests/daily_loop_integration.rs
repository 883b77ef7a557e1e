//! Integration test for the full daily loop.
//!
//! Walks a user from intake survey through several days of assignments and
//! completions, checking the streak and progress stats along the way.

use chrono::NaiveDate;
use drillzy_core::{
    achievement_statuses, pick_next, streak_on, Categorizer, Category, Database, TallyCategorizer,
};
use drillzy_core::stats::{category_breakdown, cumulative_completions, weekly_progress};
use drillzy_core::survey::{default_questions, SurveyAnswer};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// One answer per question, each picking the option for the given category.
fn answers_all(category: Category) -> Vec<SurveyAnswer> {
    default_questions()
        .iter()
        .map(|q| {
            let opt = q
                .options
                .iter()
                .find(|o| o.category == category)
                .expect("every question covers every category");
            SurveyAnswer {
                question: q.text.clone(),
                answer: opt.text.clone(),
            }
        })
        .collect()
}

#[test]
fn survey_to_streak_workflow() {
    let db = Database::open_memory().unwrap();

    // Sign-up and intake survey.
    let profile = db.create_profile("Ada").unwrap();
    let assignment = TallyCategorizer::new()
        .categorize(&answers_all(Category::Builder))
        .unwrap();
    assert_eq!(assignment.category, Category::Builder);
    db.set_profile_category(&profile.id, assignment.category)
        .unwrap();

    // Three consecutive days: assign and complete.
    let days = ["2026-08-27", "2026-08-28", "2026-08-29"];
    for day in days {
        let seen = db.seen_skill_ids(&profile.id).unwrap();
        let catalog = db.all_skills().unwrap();
        let skill = pick_next(&catalog, &seen, Some(Category::Builder))
            .expect("catalog has unseen skills");
        assert!(db.assign_skill(&profile.id, date(day), &skill.id).unwrap());
        assert!(db.complete_skill(&profile.id, date(day)).unwrap());
    }

    let history = db.history(&profile.id).unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(streak_on(&history, date("2026-08-29")), 3);

    // The streak is still alive the next morning before completion.
    assert_eq!(streak_on(&history, date("2026-08-30")), 3);
    // Two days later it is dead.
    assert_eq!(streak_on(&history, date("2026-08-31")), 0);

    // Achievements: the 3-day badge just unlocked.
    let statuses = achievement_statuses(3, &[3, 7, 14, 30]);
    assert!(statuses[0].unlocked);
    assert!(!statuses[1].unlocked);
}

#[test]
fn assigned_skills_follow_the_profile_category() {
    let db = Database::open_memory().unwrap();
    let profile = db.create_profile("Kay").unwrap();
    db.set_profile_category(&profile.id, Category::Connector)
        .unwrap();

    // The catalog holds 5 connector skills; the first five assignments
    // must all be connector skills.
    for (i, day) in ["2026-08-01", "2026-08-02", "2026-08-03", "2026-08-04", "2026-08-05"]
        .iter()
        .enumerate()
    {
        let seen = db.seen_skill_ids(&profile.id).unwrap();
        assert_eq!(seen.len(), i);
        let catalog = db.all_skills().unwrap();
        let skill = pick_next(&catalog, &seen, Some(Category::Connector)).unwrap();
        assert_eq!(skill.category, Category::Connector, "assignment {i}");
        db.assign_skill(&profile.id, date(day), &skill.id).unwrap();
    }

    // The sixth assignment spills into another category.
    let seen = db.seen_skill_ids(&profile.id).unwrap();
    let catalog = db.all_skills().unwrap();
    let skill = pick_next(&catalog, &seen, Some(Category::Connector)).unwrap();
    assert_ne!(skill.category, Category::Connector);
}

#[test]
fn burn_swaps_todays_skill_without_breaking_history() {
    let db = Database::open_memory().unwrap();
    let profile = db.create_profile("Lin").unwrap();
    let today = date("2026-08-29");

    db.assign_skill(&profile.id, today, "skill_001").unwrap();

    // Burn: replace with an unseen skill.
    let seen = db.seen_skill_ids(&profile.id).unwrap();
    let catalog = db.all_skills().unwrap();
    let replacement = pick_next(&catalog, &seen, None).unwrap();
    assert!(db
        .replace_skill(&profile.id, today, &replacement.id)
        .unwrap());

    let history = db.history(&profile.id).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].skill_id, replacement.id);

    // Once completed, burning is refused.
    db.complete_skill(&profile.id, today).unwrap();
    assert!(!db.replace_skill(&profile.id, today, "skill_002").unwrap());
}

#[test]
fn stats_reflect_completed_history() {
    let db = Database::open_memory().unwrap();
    let profile = db.create_profile("Mo").unwrap();
    let today = date("2026-08-29");

    db.assign_skill(&profile.id, date("2026-08-27"), "skill_001").unwrap(); // thinker
    db.complete_skill(&profile.id, date("2026-08-27")).unwrap();
    db.assign_skill(&profile.id, date("2026-08-28"), "skill_016").unwrap(); // connector
    db.complete_skill(&profile.id, date("2026-08-28")).unwrap();
    db.assign_skill(&profile.id, today, "skill_002").unwrap(); // builder, not done

    let history = db.history(&profile.id).unwrap();
    let catalog = db.all_skills().unwrap();

    let week = weekly_progress(&history, today);
    assert_eq!(week.iter().map(|d| d.completed).sum::<u32>(), 2);

    let breakdown = category_breakdown(&history, &catalog);
    assert_eq!(breakdown[0].completed, 1); // thinker
    assert_eq!(breakdown[1].completed, 0); // builder placeholder not counted
    assert_eq!(breakdown[3].completed, 1); // connector

    let curve = cumulative_completions(&history);
    assert_eq!(curve.last().unwrap().total, 2);
}
