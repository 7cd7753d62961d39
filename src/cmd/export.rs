use anyhow::Result;
use serde_json::json;
use std::path::Path;

use fitfocus::core::export;
use fitfocus::output;

pub fn run(output_path: Option<&Path>, copy: bool, human: bool) -> Result<()> {
    let session = super::open_session()?;
    let tsv = export::daily_tsv(session.today(), &session.totals(), session.goals());

    if output_path.is_none() && !copy {
        println!("{}", tsv);
        return Ok(());
    }

    if let Some(path) = output_path {
        std::fs::write(path, format!("{}\n", tsv))?;
    }

    // Clipboard is best effort; a failure never undoes the file write.
    let copied = copy.then(|| match export::copy_to_clipboard(&tsv) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable");
            false
        }
    });

    if human {
        if let Some(path) = output_path {
            println!("Exported to {}", path.display());
        }
        if copied == Some(true) {
            println!("Copied daily summary to clipboard.");
        }
        if copy && output_path.is_none() {
            println!("{}", tsv);
        }
        return Ok(());
    }

    let mut data = json!({ "format": "tsv" });
    if let Some(path) = output_path {
        data["path"] = json!(path);
    }
    if let Some(copied) = copied {
        data["copied"] = json!(copied);
        data["tsv"] = json!(tsv);
    }
    output::print_success("export", data)
}
