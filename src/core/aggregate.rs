use serde::Serialize;

use crate::models::{Kind, LogRecord};

/// Running sums for one day. Always derived from the record set, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyTotals {
    pub calories_in: f64,
    pub calories_out: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub nutrient_score_sum: f64,
    pub meal_count: u32,
}

impl DailyTotals {
    /// Intake minus expenditure. Negative when more was burned than eaten.
    pub fn net_calories(&self) -> f64 {
        self.calories_in - self.calories_out
    }

    pub fn average_nutrient_score(&self) -> f64 {
        if self.meal_count == 0 {
            0.0
        } else {
            self.nutrient_score_sum / f64::from(self.meal_count)
        }
    }
}

/// Fold a day's records into totals. Order does not matter: each field is
/// summed over its values in ascending order, so any permutation of the
/// records yields bit-identical totals.
pub fn aggregate(records: &[LogRecord]) -> DailyTotals {
    let meals: Vec<&LogRecord> = records.iter().filter(|r| r.kind == Kind::Meal).collect();
    let exercise = records.iter().filter(|r| r.kind == Kind::Exercise);
    DailyTotals {
        calories_in: ordered_sum(meals.iter().map(|r| r.calories)),
        calories_out: ordered_sum(exercise.map(|r| r.calories)),
        protein: ordered_sum(meals.iter().map(|r| r.protein)),
        carbs: ordered_sum(meals.iter().map(|r| r.carbs)),
        fats: ordered_sum(meals.iter().map(|r| r.fats)),
        nutrient_score_sum: ordered_sum(meals.iter().map(|r| f64::from(r.nutrient_score))),
        meal_count: u32::try_from(meals.len()).unwrap_or(u32::MAX),
    }
}

fn ordered_sum(values: impl Iterator<Item = f64>) -> f64 {
    let mut values: Vec<f64> = values.collect();
    values.sort_by(f64::total_cmp);
    values.into_iter().fold(0.0, |acc, v| acc + v)
}
