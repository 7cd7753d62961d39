use chrono::{DateTime, Local, Utc};
use colored::{ColoredString, Colorize};
use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};

use crate::core::evaluate::{GoalReport, Progress, Status};
use crate::models::{Kind, LogRecord, UserGoals};

fn local_time(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// `+N kcal` for meals, `-N kcal` for exercise.
pub fn signed_calories(r: &LogRecord) -> String {
    match r.kind {
        Kind::Meal => format!("+{} kcal", r.calories),
        Kind::Exercise => format!("-{} kcal", r.calories),
    }
}

/// One-line summary of a record.
pub fn format_record(r: &LogRecord) -> String {
    let mut line = format!(
        "{} | {} | {} {}",
        local_time(r.created_at),
        short_id(&r.id),
        r.label,
        signed_calories(r)
    );
    match r.kind {
        Kind::Meal => line.push_str(&format!(
            "  P:{}g C:{}g F:{}g",
            r.protein, r.carbs, r.fats
        )),
        Kind::Exercise => line.push_str(&format!("  {} min", r.duration_minutes)),
    }
    line
}

/// Today's records as a table, newest first.
pub fn format_timeline(records: &[&LogRecord]) -> String {
    if records.is_empty() {
        return "No logs for today yet.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED).set_header(vec![
        "Time", "Id", "Kind", "Label", "Kcal", "P(g)", "C(g)", "F(g)", "Min",
    ]);
    for r in records {
        let (p, c, f, min) = match r.kind {
            Kind::Meal => (
                r.protein.to_string(),
                r.carbs.to_string(),
                r.fats.to_string(),
                String::new(),
            ),
            Kind::Exercise => (
                String::new(),
                String::new(),
                String::new(),
                r.duration_minutes.to_string(),
            ),
        };
        table.add_row(vec![
            Cell::new(local_time(r.created_at)),
            Cell::new(short_id(&r.id)),
            Cell::new(r.kind),
            Cell::new(&r.label),
            Cell::new(signed_calories(r)),
            Cell::new(p),
            Cell::new(c),
            Cell::new(f),
            Cell::new(min),
        ]);
    }
    format!("{}\n{} entries", table, records.len())
}

fn tint(status: Status, text: String) -> ColoredString {
    match status {
        Status::OnTarget => text.green().bold(),
        Status::Caution => text.yellow().bold(),
        Status::OffTarget => text.red().bold(),
    }
}

fn progress_line(name: &str, unit: &str, p: &Progress) -> String {
    format!(
        "{:<10} {:>8.1}{} / {:.0}{}  {}  [{}{}]",
        name,
        p.actual,
        unit,
        p.goal,
        unit,
        tint(p.status, format!("{}% ({})", p.percent, p.status)),
        "#".repeat(usize::from(p.display_percent) / 5),
        ".".repeat(20 - usize::from(p.display_percent) / 5),
    )
}

/// Daily totals against goals.
pub fn format_report(date: chrono::NaiveDate, r: &GoalReport) -> String {
    let mut out = format!("=== FitFocus — {} ===\n\n", date);
    let remaining = if r.remaining_calories >= 0.0 {
        format!("{} kcal left", r.remaining_calories).green()
    } else {
        format!("{} kcal over", -r.remaining_calories).red()
    };
    out.push_str(&format!(
        "Net: {} kcal (in {} / out {})  {}\n",
        r.net_calories, r.calories_in, r.calories_out, remaining
    ));
    out.push_str(&progress_line("Calories", "", &r.calories));
    out.push('\n');
    out.push_str(&progress_line("Protein", "g", &r.protein));
    out.push('\n');
    out.push_str(&progress_line("Carbs", "g", &r.carbs));
    out.push('\n');
    out.push_str(&progress_line("Fats", "g", &r.fats));
    out.push('\n');
    out.push_str(&progress_line("Minerals", "", &r.nutrients));
    out.push_str(&format!("\nMeals logged: {}", r.meal_count));
    out
}

pub fn format_goals(g: &UserGoals) -> String {
    format!(
        "Calories: {} kcal\nProtein:  {} g\nWeight:   {} kg\nHeight:   {} cm\nAge:      {}\nGender:   {}",
        g.calorie_goal, g.protein_goal, g.weight, g.height, g.age, g.gender
    )
}
