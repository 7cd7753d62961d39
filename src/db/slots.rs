use anyhow::Result;
use chrono::Utc;
use rusqlite::{OptionalExtension, params};

use crate::models::{LogRecord, UserGoals};

use super::Database;

pub const RECORDS_SLOT: &str = "records";
pub const GOALS_SLOT: &str = "goals";

impl Database {
    pub fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Replace the whole slot value.
    pub fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Every stored record, regardless of day. Missing or unparseable
    /// snapshots read as empty.
    pub fn load_records(&self) -> Result<Vec<LogRecord>> {
        let Some(raw) = self.read_slot(RECORDS_SLOT)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(error = %e, slot = RECORDS_SLOT, "malformed snapshot, starting empty");
                Ok(Vec::new())
            }
        }
    }

    pub fn save_records(&self, records: &[LogRecord]) -> Result<()> {
        self.write_slot(RECORDS_SLOT, &serde_json::to_string(records)?)
    }

    /// Stored goals, or defaults when the slot is missing or unparseable.
    pub fn load_goals(&self) -> Result<UserGoals> {
        let Some(raw) = self.read_slot(GOALS_SLOT)? else {
            return Ok(UserGoals::default());
        };
        match serde_json::from_str(&raw) {
            Ok(goals) => Ok(goals),
            Err(e) => {
                tracing::warn!(error = %e, slot = GOALS_SLOT, "malformed snapshot, using defaults");
                Ok(UserGoals::default())
            }
        }
    }

    pub fn save_goals(&self, goals: &UserGoals) -> Result<()> {
        self.write_slot(GOALS_SLOT, &serde_json::to_string(goals)?)
    }
}
