use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Meal,
    Exercise,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Meal => write!(f, "meal"),
            Self::Exercise => write!(f, "exercise"),
        }
    }
}

/// Structured fields pulled out of one free-text log line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedFields {
    pub kind: Kind,
    pub label: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub nutrient_score: u8,
    pub duration_minutes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: String,
    pub kind: Kind,
    /// Epoch milliseconds.
    pub created_at: i64,
    pub label: String,
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fats: f64,
    #[serde(default)]
    pub nutrient_score: u8,
    #[serde(default)]
    pub duration_minutes: f64,
}

impl LogRecord {
    /// Wrap extracted fields with a fresh id and the current time.
    pub fn build(fields: ExtractedFields) -> Self {
        Self::build_at(fields, Utc::now().timestamp_millis())
    }

    pub fn build_at(fields: ExtractedFields, created_at: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind: fields.kind,
            created_at,
            label: fields.label,
            calories: fields.calories,
            protein: fields.protein,
            carbs: fields.carbs,
            fats: fields.fats,
            nutrient_score: fields.nutrient_score,
            duration_minutes: fields.duration_minutes,
        }
    }

    /// Calendar day of creation in the local time zone.
    pub fn local_date(&self) -> Option<NaiveDate> {
        DateTime::<Utc>::from_timestamp_millis(self.created_at)
            .map(|dt| dt.with_timezone(&Local).date_naive())
    }

    /// Overwrite one numeric field. Returns false and leaves the record
    /// untouched when the value is not a usable number for that field.
    pub fn correct(&mut self, field: Field, raw: &str) -> bool {
        let raw = raw.trim();
        let slot = match field {
            Field::NutrientScore => {
                return match raw.parse::<u8>() {
                    Ok(v) if v <= 100 => {
                        self.nutrient_score = v;
                        true
                    }
                    _ => false,
                };
            }
            Field::Calories => &mut self.calories,
            Field::Protein => &mut self.protein,
            Field::Carbs => &mut self.carbs,
            Field::Fats => &mut self.fats,
            Field::Duration => &mut self.duration_minutes,
        };
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => {
                *slot = v;
                true
            }
            _ => false,
        }
    }
}

/// Numeric fields open to user correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Calories,
    Protein,
    Carbs,
    Fats,
    Duration,
    NutrientScore,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calories => write!(f, "calories"),
            Self::Protein => write!(f, "protein"),
            Self::Carbs => write!(f, "carbs"),
            Self::Fats => write!(f, "fats"),
            Self::Duration => write!(f, "duration"),
            Self::NutrientScore => write!(f, "nutrient_score"),
        }
    }
}

impl FromStr for Field {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "calories" | "kcal" => Ok(Self::Calories),
            "protein" => Ok(Self::Protein),
            "carbs" => Ok(Self::Carbs),
            "fats" | "fat" => Ok(Self::Fats),
            "duration" | "duration_minutes" => Ok(Self::Duration),
            "nutrient_score" | "minerals" => Ok(Self::NutrientScore),
            _ => anyhow::bail!(
                "invalid field: {} (expected calories/protein/carbs/fats/duration/nutrient_score)",
                s
            ),
        }
    }
}
