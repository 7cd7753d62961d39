use anyhow::Result;
use serde_json::json;

use fitfocus::output;
use fitfocus::output::human;

pub fn run(human_flag: bool) -> Result<()> {
    let session = super::open_session()?;
    let entries = session.timeline();

    if human_flag {
        println!("--- {} ---", session.today());
        println!("{}", human::format_timeline(&entries));
    } else {
        output::print_success(
            "show",
            json!({ "date": session.today().to_string(), "entries": entries }),
        )?;
    }
    Ok(())
}
