use anyhow::Result;
use serde_json::json;

use fitfocus::output;
use fitfocus::output::human;

pub fn run(human_flag: bool) -> Result<()> {
    let session = super::open_session()?;
    let report = session.report();

    if human_flag {
        println!("{}", human::format_report(session.today(), &report));
    } else {
        output::print_success(
            "status",
            json!({
                "date": session.today().to_string(),
                "entries": session.records().len(),
                "report": report,
            }),
        )?;
    }
    Ok(())
}
