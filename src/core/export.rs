use anyhow::Result;
use chrono::NaiveDate;

use crate::core::aggregate::DailyTotals;
use crate::core::evaluate::round_half_up;
use crate::models::UserGoals;

pub const TSV_HEADER: &str =
    "Date\tGoal kcal\tIn kcal\tOut kcal\tNet kcal\tProtein(g)\tCarbs(g)\tFats(g)\tAvg Mineral Score";

/// Header row plus one data row, tab separated.
pub fn daily_tsv(date: NaiveDate, totals: &DailyTotals, goals: &UserGoals) -> String {
    format!(
        "{}\n{}\t{}\t{}\t{}\t{}\t{:.1}\t{:.1}\t{:.1}\t{}%",
        TSV_HEADER,
        date.format("%Y-%m-%d"),
        goals.calorie_goal,
        totals.calories_in,
        totals.calories_out,
        totals.net_calories(),
        totals.protein,
        totals.carbs,
        totals.fats,
        round_half_up(totals.average_nutrient_score()),
    )
}

/// Put text on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
