use anyhow::Result;
use serde_json::json;

use fitfocus::core::advice;
use fitfocus::core::extract::HeuristicExtractor;
use fitfocus::core::session::Outcome;
use fitfocus::models::config::Config;
use fitfocus::output;
use fitfocus::output::human;

pub fn run(text: &str, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let mut session = super::open_session()?;
    let mut extractor = HeuristicExtractor::new();

    match session.submit(text, &mut extractor)? {
        Outcome::Logged(record) => {
            let mut source = advice::from_settings(&config.advice);
            let line = session.advice_for(&record, source.as_mut());
            if human_flag {
                println!("Logged: {}", human::format_record(&record));
                println!("Coach Kanga: {}", line);
            } else {
                output::print_success("log", json!({ "entry": record, "advice": line }))?;
            }
        }
        Outcome::Failed { input, reason } => {
            if human_flag {
                println!("Nothing logged ({}). Your input was kept:\n{}", reason, input);
            } else {
                output::print_success(
                    "log",
                    json!({ "entry": null, "input": input, "reason": reason }),
                )?;
            }
        }
        Outcome::Superseded => {
            if human_flag {
                println!("Nothing logged: a newer entry replaced this one.");
            } else {
                output::print_success("log", json!({ "entry": null }))?;
            }
        }
    }
    Ok(())
}
