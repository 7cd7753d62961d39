use anyhow::Result;
use serde_json::json;
use std::io::{self, Write};

use fitfocus::db::{Database, GOALS_SLOT};
use fitfocus::models::UserGoals;
use fitfocus::models::config::Config;
use fitfocus::output;

pub fn run(skip: bool, human: bool) -> Result<()> {
    let config = Config::load().unwrap_or_default();
    config.save()?;
    let db = Database::open(&Config::db_path()?)?;

    if !skip {
        println!("FitFocus — Initial Setup\n");
        let mut goals = db.load_goals()?;
        prompt_into(&mut goals, "calories", "Daily calorie goal (kcal)")?;
        prompt_into(&mut goals, "protein", "Daily protein goal (g)")?;
        prompt_into(&mut goals, "weight", "Weight (kg)")?;
        prompt_into(&mut goals, "height", "Height (cm)")?;
        prompt_into(&mut goals, "age", "Age")?;
        prompt_into(&mut goals, "gender", "Gender (male/female/other)")?;
        db.save_goals(&goals)?;
        println!("\nSetup complete. Data stored in {:?}", Config::data_dir()?);
        return Ok(());
    }

    if db.read_slot(GOALS_SLOT)?.is_none() {
        db.save_goals(&UserGoals::default())?;
    }
    if human {
        println!("Config initialized with defaults at {:?}", Config::path()?);
    } else {
        output::print_success(
            "init",
            json!({ "config": Config::path()?, "goals": db.load_goals()? }),
        )?;
    }
    Ok(())
}

/// Prompt until the value is accepted; an empty answer keeps the current one.
fn prompt_into(goals: &mut UserGoals, key: &str, label: &str) -> Result<()> {
    loop {
        print!("{}: ", label);
        io::stdout().flush()?;
        let mut buf = String::new();
        io::stdin().read_line(&mut buf)?;
        let answer = buf.trim();
        if answer.is_empty() {
            return Ok(());
        }
        match goals.set(key, answer) {
            Ok(()) => return Ok(()),
            Err(e) => println!("{}", e),
        }
    }
}
