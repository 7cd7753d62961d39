pub mod config;
pub mod export;
pub mod goal;
pub mod init;
pub mod log;
pub mod record;
pub mod show;
pub mod status;

use anyhow::Result;
use fitfocus::core::session::Session;
use fitfocus::db::Database;
use fitfocus::models::config::Config;

/// Open the store at the configured path and load today's session.
pub fn open_session() -> Result<Session> {
    let db = Database::open(&Config::db_path()?)?;
    Session::load(db)
}
