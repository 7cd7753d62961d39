mod common;

use common::{exercise, meal};
use fitfocus::core::aggregate::aggregate;
use fitfocus::core::evaluate::{
    NUTRIENT_GOAL, Progress, Status, carb_goal, evaluate, fat_goal, percent_of,
};
use fitfocus::models::UserGoals;

#[test]
fn test_percent_of_zero_goal_treats_goal_as_one() {
    assert_eq!(percent_of(1.5, 0.0), 150);
    assert_eq!(percent_of(0.0, 0.0), 0);
    assert_eq!(percent_of(-2.0, 0.0), -200);
}

#[test]
fn test_percent_of_rounds() {
    assert_eq!(percent_of(75.0, 150.0), 50);
    assert_eq!(percent_of(1.0, 3.0), 33);
    assert_eq!(percent_of(2.0, 3.0), 67);
}

#[test]
fn test_status_on_target_boundaries() {
    assert_eq!(Status::classify(90), Status::OnTarget);
    assert_eq!(Status::classify(110), Status::OnTarget);
    assert_ne!(Status::classify(89), Status::OnTarget);
    assert_ne!(Status::classify(111), Status::OnTarget);
}

#[test]
fn test_status_caution_and_off_target_bands() {
    assert_eq!(Status::classify(49), Status::OffTarget);
    assert_eq!(Status::classify(50), Status::Caution);
    assert_eq!(Status::classify(89), Status::Caution);
    assert_eq!(Status::classify(111), Status::Caution);
    assert_eq!(Status::classify(130), Status::Caution);
    assert_eq!(Status::classify(131), Status::OffTarget);
    assert_eq!(Status::classify(-20), Status::OffTarget);
}

#[test]
fn test_derived_goals() {
    assert_eq!(carb_goal(2000.0), 250.0);
    assert!((fat_goal(2000.0) - 66.666_666).abs() < 1e-3);
    assert_eq!(NUTRIENT_GOAL, 100.0);
}

#[test]
fn test_display_percent_clamped_but_status_uses_raw() {
    let p = Progress::new(300.0, 150.0);
    assert_eq!(p.percent, 200);
    assert_eq!(p.display_percent, 100);
    assert_eq!(p.status, Status::OffTarget);

    let neg = Progress::new(-100.0, 2000.0);
    assert_eq!(neg.percent, -5);
    assert_eq!(neg.display_percent, 0);
}

#[test]
fn test_report_against_default_goals() {
    let goals = UserGoals::default();
    let totals = aggregate(&[
        meal(1800.0, 140.0, 240.0, 61.0, 80),
        meal(400.0, 10.0, 10.0, 5.0, 90),
        exercise(300.0, 45.0),
    ]);
    let r = evaluate(&totals, &goals);

    assert_eq!(r.net_calories, 1900.0);
    assert_eq!(r.remaining_calories, 100.0);
    assert_eq!(r.calories.percent, 95);
    assert_eq!(r.calories.status, Status::OnTarget);
    assert_eq!(r.protein.percent, 100);
    assert_eq!(r.carbs.percent, 100);
    assert_eq!(r.fats.percent, 99);
    assert_eq!(r.nutrients.percent, 85);
    assert_eq!(r.nutrients.status, Status::Caution);
    assert_eq!(r.meal_count, 2);
}

#[test]
fn test_remaining_goes_negative_when_over() {
    let totals = aggregate(&[meal(2600.0, 0.0, 0.0, 0.0, 70)]);
    let r = evaluate(&totals, &UserGoals::default());
    assert_eq!(r.remaining_calories, -600.0);
}
