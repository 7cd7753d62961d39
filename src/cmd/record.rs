use anyhow::Result;
use serde_json::json;

use fitfocus::models::record::Field;
use fitfocus::output;
use fitfocus::output::human;

pub fn run_edit(id: &str, field: &str, value: &str, human_flag: bool) -> Result<()> {
    let field: Field = field.parse()?;
    let mut session = super::open_session()?;
    let correction = session.correct(id, field, value)?;

    if human_flag {
        if correction.updated {
            println!("Updated: {}", human::format_record(&correction.record));
        } else {
            println!("Ignored non-numeric value for {}: {}", field, value);
        }
    } else {
        output::print_success(
            "edit",
            json!({
                "field": field.to_string(),
                "updated": correction.updated,
                "entry": correction.record,
            }),
        )?;
    }
    Ok(())
}

pub fn run_delete(id: &str, human_flag: bool) -> Result<()> {
    let mut session = super::open_session()?;
    let removed = session.delete(id)?;

    if human_flag {
        println!("Deleted: {}", human::format_record(&removed));
    } else {
        output::print_success("delete", json!({ "removed": removed.id }))?;
    }
    Ok(())
}
