use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::core::advice::{self, AdviceContext, AdviceSource};
use crate::core::aggregate::{DailyTotals, aggregate};
use crate::core::evaluate::{GoalReport, evaluate, percent_of};
use crate::core::extract::{ExtractError, Extractor};
use crate::db::Database;
use crate::models::record::Field;
use crate::models::{ExtractedFields, LogRecord, UserGoals};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("nothing to log: input is empty")]
    EmptyInput,
    #[error("record not found: {0}")]
    RecordNotFound(String),
    #[error("id prefix matches more than one record: {0}")]
    AmbiguousId(String),
}

/// One pending extraction. Only the most recently started submission may
/// apply its result; older ones are discarded when they complete.
#[derive(Debug)]
pub struct Submission {
    generation: u64,
    input: String,
}

impl Submission {
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Result of a completed submission.
#[derive(Debug)]
pub enum Outcome {
    Logged(LogRecord),
    /// Extraction failed. The input is handed back for a retry.
    Failed { input: String, reason: String },
    /// A newer submission started before this one finished.
    Superseded,
}

#[derive(Debug)]
pub struct Correction {
    pub updated: bool,
    pub record: LogRecord,
}

/// Owner of the day's records and the user's goals.
///
/// Both are loaded once from the store. Records from any other local
/// calendar day are dropped at load, so the next records save removes them
/// from storage as well. Every mutation rewrites the affected slot in full.
pub struct Session {
    db: Database,
    today: NaiveDate,
    records: Vec<LogRecord>,
    goals: UserGoals,
    generation: u64,
}

impl Session {
    pub fn load(db: Database) -> Result<Self> {
        Self::load_for(db, Local::now().date_naive())
    }

    pub fn load_for(db: Database, today: NaiveDate) -> Result<Self> {
        let stored = db.load_records()?;
        let total = stored.len();
        let records: Vec<LogRecord> = stored
            .into_iter()
            .filter(|r| r.local_date() == Some(today))
            .collect();
        if records.len() < total {
            tracing::info!(
                dropped = total - records.len(),
                %today,
                "excluding records from other days"
            );
        }
        let goals = db.load_goals()?;
        Ok(Self {
            db,
            today,
            records,
            goals,
            generation: 0,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Records newest first.
    pub fn timeline(&self) -> Vec<&LogRecord> {
        let mut out: Vec<&LogRecord> = self.records.iter().collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out
    }

    pub fn goals(&self) -> &UserGoals {
        &self.goals
    }

    pub fn totals(&self) -> DailyTotals {
        aggregate(&self.records)
    }

    pub fn report(&self) -> GoalReport {
        evaluate(&self.totals(), &self.goals)
    }

    /// Start a submission. Empty or whitespace-only input is rejected here,
    /// before any extractor sees it.
    pub fn begin_submission(&mut self, input: &str) -> Result<Submission, SessionError> {
        if input.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }
        self.generation += 1;
        tracing::debug!(generation = self.generation, "submission started");
        Ok(Submission {
            generation: self.generation,
            input: input.to_string(),
        })
    }

    /// Apply an extraction result if its submission is still the latest.
    pub fn complete_submission(
        &mut self,
        submission: Submission,
        result: Result<ExtractedFields, ExtractError>,
    ) -> Result<Outcome> {
        if submission.generation != self.generation {
            tracing::debug!(
                generation = submission.generation,
                latest = self.generation,
                "discarding stale extraction result"
            );
            return Ok(Outcome::Superseded);
        }
        match result {
            Ok(fields) => {
                let record = LogRecord::build(fields);
                self.records.push(record.clone());
                self.save_records()?;
                tracing::info!(id = %record.id, kind = %record.kind, "record logged");
                Ok(Outcome::Logged(record))
            }
            Err(e) => {
                tracing::warn!(error = %e, "extraction failed; nothing logged");
                Ok(Outcome::Failed {
                    input: submission.input,
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Begin, extract and complete in one step.
    pub fn submit(&mut self, input: &str, extractor: &mut dyn Extractor) -> Result<Outcome> {
        let submission = self.begin_submission(input)?;
        let result = extractor.extract(submission.input());
        self.complete_submission(submission, result)
    }

    /// Motivational line for a record that was just logged.
    pub fn advice_for(&self, record: &LogRecord, source: &mut dyn AdviceSource) -> String {
        let ctx = AdviceContext {
            label: record.label.clone(),
            protein_percent: percent_of(self.totals().protein, self.goals.protein_goal),
        };
        advice::advise_or_fallback(source, &ctx)
    }

    /// Overwrite one numeric field. Unusable values are ignored and the
    /// record comes back unchanged with `updated: false`.
    pub fn correct(&mut self, id: &str, field: Field, raw: &str) -> Result<Correction> {
        let idx = self.find(id)?;
        let updated = self.records[idx].correct(field, raw);
        if updated {
            self.save_records()?;
        } else {
            tracing::warn!(id = %self.records[idx].id, %field, value = raw, "ignoring invalid correction");
        }
        Ok(Correction {
            updated,
            record: self.records[idx].clone(),
        })
    }

    /// Remove exactly one record.
    pub fn delete(&mut self, id: &str) -> Result<LogRecord> {
        let idx = self.find(id)?;
        let removed = self.records.remove(idx);
        self.save_records()?;
        Ok(removed)
    }

    pub fn set_goal(&mut self, key: &str, value: &str) -> Result<&UserGoals> {
        self.goals.set(key, value)?;
        self.db.save_goals(&self.goals)?;
        Ok(&self.goals)
    }

    /// Write both slots.
    pub fn save(&self) -> Result<()> {
        self.save_records()?;
        self.db.save_goals(&self.goals)
    }

    fn save_records(&self) -> Result<()> {
        self.db.save_records(&self.records)
    }

    /// Index of the record whose id equals or uniquely starts with `id`.
    fn find(&self, id: &str) -> Result<usize, SessionError> {
        if let Some(i) = self.records.iter().position(|r| r.id == id) {
            return Ok(i);
        }
        let mut matches = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| !id.is_empty() && r.id.starts_with(id));
        match (matches.next(), matches.next()) {
            (Some((i, _)), None) => Ok(i),
            (Some(_), Some(_)) => Err(SessionError::AmbiguousId(id.to_string())),
            _ => Err(SessionError::RecordNotFound(id.to_string())),
        }
    }
}
