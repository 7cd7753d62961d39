use anyhow::Result;
use serde_json::json;

use fitfocus::models::config::Config;
use fitfocus::output;

pub fn run_show(human: bool) -> Result<()> {
    let config = Config::load()?;
    if human {
        let toml_str = toml::to_string_pretty(&config)?;
        println!("{}", toml_str);
    } else {
        output::print_success("config", json!({ "config": config }))?;
    }
    Ok(())
}

pub fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    output::print_success("config", json!({ "key": key, "value": value }))
}
