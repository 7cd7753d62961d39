use serde::Serialize;

use crate::core::aggregate::DailyTotals;
use crate::models::UserGoals;

pub const CARB_SHARE: f64 = 0.5;
pub const FAT_SHARE: f64 = 0.3;
pub const KCAL_PER_GRAM_CARB: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
pub const NUTRIENT_GOAL: f64 = 100.0;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    OnTarget,
    Caution,
    OffTarget,
}

impl Status {
    /// 90..=110 on target, below 50 or above 130 off target, caution between.
    pub fn classify(percent: i64) -> Self {
        match percent {
            90..=110 => Self::OnTarget,
            p if !(50..=130).contains(&p) => Self::OffTarget,
            _ => Self::Caution,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OnTarget => write!(f, "on target"),
            Self::Caution => write!(f, "caution"),
            Self::OffTarget => write!(f, "off target"),
        }
    }
}

/// Percent of goal, rounded half up. A zero goal counts as 1.
pub fn percent_of(actual: f64, goal: f64) -> i64 {
    let goal = if goal == 0.0 || goal.is_nan() { 1.0 } else { goal };
    round_half_up(actual / goal * 100.0)
}

/// Progress-bar width: the raw percent clamped to 0..=100.
pub fn display_percent(percent: i64) -> u8 {
    percent.clamp(0, 100) as u8
}

pub fn carb_goal(calorie_goal: f64) -> f64 {
    calorie_goal * CARB_SHARE / KCAL_PER_GRAM_CARB
}

pub fn fat_goal(calorie_goal: f64) -> f64 {
    calorie_goal * FAT_SHARE / KCAL_PER_GRAM_FAT
}

pub(crate) fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

#[derive(Debug, Clone, Serialize)]
pub struct Progress {
    pub actual: f64,
    pub goal: f64,
    pub percent: i64,
    pub display_percent: u8,
    pub status: Status,
}

impl Progress {
    pub fn new(actual: f64, goal: f64) -> Self {
        let percent = percent_of(actual, goal);
        Self {
            actual,
            goal,
            percent,
            display_percent: display_percent(percent),
            status: Status::classify(percent),
        }
    }
}

/// Totals measured against every tracked goal.
#[derive(Debug, Clone, Serialize)]
pub struct GoalReport {
    pub net_calories: f64,
    pub remaining_calories: f64,
    pub calories_in: f64,
    pub calories_out: f64,
    pub calories: Progress,
    pub protein: Progress,
    pub carbs: Progress,
    pub fats: Progress,
    pub nutrients: Progress,
    pub meal_count: u32,
}

pub fn evaluate(totals: &DailyTotals, goals: &UserGoals) -> GoalReport {
    let net = totals.net_calories();
    GoalReport {
        net_calories: net,
        remaining_calories: goals.calorie_goal - net,
        calories_in: totals.calories_in,
        calories_out: totals.calories_out,
        calories: Progress::new(net, goals.calorie_goal),
        protein: Progress::new(totals.protein, goals.protein_goal),
        carbs: Progress::new(totals.carbs, carb_goal(goals.calorie_goal)),
        fats: Progress::new(totals.fats, fat_goal(goals.calorie_goal)),
        nutrients: Progress::new(totals.average_nutrient_score(), NUTRIENT_GOAL),
        meal_count: totals.meal_count,
    }
}
