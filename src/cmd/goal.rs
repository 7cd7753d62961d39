use anyhow::Result;
use serde_json::json;

use fitfocus::output;
use fitfocus::output::human;

pub fn run_show(human_flag: bool) -> Result<()> {
    let session = super::open_session()?;
    if human_flag {
        println!("{}", human::format_goals(session.goals()));
    } else {
        output::print_success("goal", json!({ "goals": session.goals() }))?;
    }
    Ok(())
}

pub fn run_set(key: &str, value: &str, human_flag: bool) -> Result<()> {
    let mut session = super::open_session()?;
    let goals = session.set_goal(key, value)?;
    if human_flag {
        println!("Goal set: {} = {}", key, value);
    } else {
        output::print_success("goal", json!({ "goals": goals }))?;
    }
    Ok(())
}
