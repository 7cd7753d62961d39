use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Gender {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => anyhow::bail!("invalid gender: {} (expected male/female/other)", s),
        }
    }
}

/// User-configured daily targets plus informational profile fields.
///
/// Only `calorie_goal` and `protein_goal` feed the evaluator; weight, height,
/// age and gender are stored and displayed but never used in calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGoals {
    pub calorie_goal: f64,
    pub protein_goal: f64,
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    pub gender: Gender,
}

impl Default for UserGoals {
    fn default() -> Self {
        Self {
            calorie_goal: 2000.0,
            protein_goal: 150.0,
            weight: 70.0,
            height: 165.0,
            age: 25,
            gender: Gender::Female,
        }
    }
}

impl UserGoals {
    /// Apply a `key = value` edit. Numeric keys must be positive.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "calories" | "calorie_goal" => self.calorie_goal = positive(key, value)?,
            "protein" | "protein_goal" => self.protein_goal = positive(key, value)?,
            "weight" => self.weight = positive(key, value)?,
            "height" => self.height = positive(key, value)?,
            "age" => {
                let age: u32 = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid value for age: {}", value))?;
                if age == 0 {
                    anyhow::bail!("age must be positive");
                }
                self.age = age;
            }
            "gender" => self.gender = value.parse()?,
            _ => anyhow::bail!("unknown goal key: {}", key),
        }
        Ok(())
    }
}

fn positive(key: &str, value: &str) -> anyhow::Result<f64> {
    let v: f64 = value
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid value for {}: {}", key, value))?;
    if !v.is_finite() || v <= 0.0 {
        anyhow::bail!("{} must be a positive number", key);
    }
    Ok(v)
}
