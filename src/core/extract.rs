use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use std::sync::LazyLock;

use crate::models::{ExtractedFields, Kind};

/// Substrings that mark a line as physical activity. Membership alone
/// decides; there is no negation handling.
pub const ACTIVITY_KEYWORDS: [&str; 10] = [
    "run", "yoga", "gym", "workout", "lift", "cardio", "walk", "exercise", "cycling", "swimming",
];

const MEAL_CALORIES: f64 = 350.0;
const EXERCISE_CALORIES: f64 = 200.0;
const MEAL_PROTEIN: f64 = 20.0;
const MEAL_CARBS: f64 = 40.0;
const MEAL_FATS: f64 = 10.0;
const EXERCISE_MINUTES: f64 = 30.0;

const LABEL_LIMIT: usize = 30;
const LABEL_KEEP: usize = 27;

// Numbers must not follow a digit or a decimal point, so the tail of `2.5`
// is never read as `5`.
static CALORIES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\d.])\b(\d+)\s*(?:kcal|calories|cal)\b").expect("valid regex")
});
static PROTEIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\d.])\b(\d+)\s*(?:grams|g)\s*(?:of\s+)?protein\b").expect("valid regex")
});
static CARBS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\d.])\b(\d+)\s*(?:grams|g)\s*(?:of\s+)?carbs?\b").expect("valid regex")
});
static FATS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\d.])\b(\d+)\s*(?:grams|g)\s*(?:of\s+)?fats?\b").expect("valid regex")
});
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\d.])\b(\d+)\s*(minutes|minute|mins|min|hours|hour|hrs|hr)\b")
        .expect("valid regex")
});

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("nothing to extract from empty input")]
    EmptyInput,
    #[error("extraction unavailable: {0}")]
    Unavailable(String),
}

/// Turns one free-text log line into structured fields.
///
/// A failed extraction produces no record; the caller keeps the input text
/// so the user can retry.
pub trait Extractor {
    fn extract(&mut self, raw: &str) -> Result<ExtractedFields, ExtractError>;
}

/// Local keyword and unit-pattern matcher.
///
/// Never fails on non-empty input: every field falls back to a
/// kind-dependent default. The nutrient score is not read from the text at
/// all; it is a random value in `70..90` standing in for a real
/// micronutrient estimate.
pub struct HeuristicExtractor {
    rng: StdRng,
}

impl HeuristicExtractor {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic nutrient scores, for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for HeuristicExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for HeuristicExtractor {
    fn extract(&mut self, raw: &str) -> Result<ExtractedFields, ExtractError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ExtractError::EmptyInput);
        }
        let text = trimmed.to_lowercase();
        let kind = classify(&text);

        let fields = match kind {
            Kind::Meal => ExtractedFields {
                kind,
                label: label_for(trimmed),
                calories: first_number(&CALORIES_RE, &text).unwrap_or(MEAL_CALORIES),
                protein: first_number(&PROTEIN_RE, &text).unwrap_or(MEAL_PROTEIN),
                carbs: first_number(&CARBS_RE, &text).unwrap_or(MEAL_CARBS),
                fats: first_number(&FATS_RE, &text).unwrap_or(MEAL_FATS),
                nutrient_score: self.rng.gen_range(70..90),
                duration_minutes: duration_minutes(&text).unwrap_or(0.0),
            },
            Kind::Exercise => ExtractedFields {
                kind,
                label: label_for(trimmed),
                calories: first_number(&CALORIES_RE, &text).unwrap_or(EXERCISE_CALORIES),
                protein: first_number(&PROTEIN_RE, &text).unwrap_or(0.0),
                carbs: first_number(&CARBS_RE, &text).unwrap_or(0.0),
                fats: first_number(&FATS_RE, &text).unwrap_or(0.0),
                nutrient_score: self.rng.gen_range(70..90),
                duration_minutes: duration_minutes(&text).unwrap_or(EXERCISE_MINUTES),
            },
        };
        tracing::debug!(kind = %fields.kind, calories = fields.calories, "extracted fields");
        Ok(fields)
    }
}

/// Exercise if any activity keyword occurs anywhere in the lowercased text.
pub fn classify(text: &str) -> Kind {
    let text = text.to_lowercase();
    if ACTIVITY_KEYWORDS.iter().any(|k| text.contains(k)) {
        Kind::Exercise
    } else {
        Kind::Meal
    }
}

/// Input text, cut to 27 characters plus `...` when longer than 30.
pub fn label_for(raw: &str) -> String {
    if raw.chars().count() > LABEL_LIMIT {
        let head: String = raw.chars().take(LABEL_KEEP).collect();
        format!("{}...", head)
    } else {
        raw.to_string()
    }
}

fn first_number(re: &Regex, text: &str) -> Option<f64> {
    let caps = re.captures(text)?;
    caps[1].parse::<u32>().ok().map(f64::from)
}

/// Minutes from the first `<n> min|minutes|hr|hour` match; hours count as 60.
fn duration_minutes(text: &str) -> Option<f64> {
    let caps = DURATION_RE.captures(text)?;
    let n = f64::from(caps[1].parse::<u32>().ok()?);
    if caps[2].starts_with('h') {
        Some(n * 60.0)
    } else {
        Some(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calorie_unit_must_follow_number() {
        assert_eq!(first_number(&CALORIES_RE, "300kcal"), Some(300.0));
        assert_eq!(first_number(&CALORIES_RE, "about 450 calories"), Some(450.0));
        assert_eq!(first_number(&CALORIES_RE, "120 cal bar"), Some(120.0));
        assert_eq!(first_number(&CALORIES_RE, "120 cals"), None);
        assert_eq!(first_number(&CALORIES_RE, "kcal 300"), None);
    }

    #[test]
    fn macro_patterns_accept_optional_of() {
        assert_eq!(first_number(&PROTEIN_RE, "30g protein"), Some(30.0));
        assert_eq!(first_number(&PROTEIN_RE, "30 grams of protein"), Some(30.0));
        assert_eq!(first_number(&CARBS_RE, "55g of carbs"), Some(55.0));
        assert_eq!(first_number(&FATS_RE, "12 g fat"), Some(12.0));
    }

    #[test]
    fn hours_convert_to_minutes() {
        assert_eq!(duration_minutes("walked for 2 hours"), Some(120.0));
        assert_eq!(duration_minutes("1hr spin"), Some(60.0));
        assert_eq!(duration_minutes("yoga for 40 mins"), Some(40.0));
        assert_eq!(duration_minutes("no time given"), None);
    }

    #[test]
    fn fractional_number_is_absent_not_truncated() {
        assert_eq!(first_number(&CALORIES_RE, "2.5kcal"), None);
        assert_eq!(first_number(&CALORIES_RE, "gum 2.5 kcal"), None);
        assert_eq!(first_number(&PROTEIN_RE, "12.5g protein"), None);
        assert_eq!(duration_minutes("brisk walk for 1.5 hours"), None);
        assert_eq!(first_number(&CALORIES_RE, "toast, 150 kcal."), Some(150.0));
        assert_eq!(duration_minutes("(45 min)"), Some(45.0));
    }

    #[test]
    fn oversized_number_is_treated_as_absent() {
        assert_eq!(first_number(&CALORIES_RE, "99999999999 kcal"), None);
    }

    #[test]
    fn label_truncation_boundary() {
        let thirty = "a".repeat(30);
        assert_eq!(label_for(&thirty), thirty);
        let long = "b".repeat(31);
        assert_eq!(label_for(&long), format!("{}...", "b".repeat(27)));
    }
}
