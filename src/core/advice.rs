use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::config::{AdviceKind, AdviceSettings};

pub const GREETING: &str = "Hop on in! Let's get that Stanley cup filled and the goals crushed!";
pub const FALLBACK: &str = "Let's keep hopping toward those goals!";
const EMPTY_REPLY: &str = "Keep it up, you're doing great!";

pub const DEFAULT_POOL: [&str; 8] = [
    "Keep it up, you're doing great!",
    "Every hop counts. Nice logging!",
    "Hydrate, then dominate!",
    "Add some greens next time for a mineral boost.",
    "Consistency beats intensity. Well done!",
    "Protein up, pouch full, goals crushed!",
    "Small steps, big jumps. Keep going!",
    "Stretch it out, you've earned it!",
];

/// What a coach knows when asked for a line after a new record.
#[derive(Debug, Clone)]
pub struct AdviceContext {
    pub label: String,
    /// Protein percent-of-goal including the new record.
    pub protein_percent: i64,
}

impl AdviceContext {
    /// Plain-language summary of the context, suitable as a prompt.
    pub fn summary(&self) -> String {
        format!(
            "The user just logged {}. They are at {}% of their protein goal.",
            self.label, self.protein_percent
        )
    }
}

/// Source of a short motivational line after each new record.
pub trait AdviceSource {
    fn advise(&mut self, ctx: &AdviceContext) -> anyhow::Result<String>;
}

/// Uniform pick from a fixed pool; ignores the context.
pub struct PoolAdvice {
    pool: Vec<String>,
    rng: StdRng,
}

impl PoolAdvice {
    pub fn new(pool: Vec<String>) -> Self {
        Self::with_rng(pool, StdRng::from_entropy())
    }

    pub fn seeded(pool: Vec<String>, seed: u64) -> Self {
        Self::with_rng(pool, StdRng::seed_from_u64(seed))
    }

    fn with_rng(pool: Vec<String>, rng: StdRng) -> Self {
        let pool = if pool.is_empty() {
            DEFAULT_POOL.iter().map(|s| s.to_string()).collect()
        } else {
            pool
        };
        Self { pool, rng }
    }
}

impl AdviceSource for PoolAdvice {
    fn advise(&mut self, _ctx: &AdviceContext) -> anyhow::Result<String> {
        self.pool
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("advice pool is empty"))
    }
}

/// Picks a line from protein progress.
pub struct ProgressAdvice {
    rng: StdRng,
}

impl ProgressAdvice {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ProgressAdvice {
    fn default() -> Self {
        Self::new()
    }
}

const LOW_PROTEIN: [&str; 3] = [
    "Protein at {p}%. Eggs, beans or fish would hop you closer!",
    "Only {p}% of your protein so far. Time for a lean snack?",
    "{p}% protein. Greek yogurt is a kangaroo favourite!",
];
const HIGH_PROTEIN: [&str; 2] = [
    "{p}% protein already! Balance it with plants and minerals.",
    "Protein maxed at {p}%. Add leafy greens for your minerals!",
];
const ON_TRACK: [&str; 3] = [
    "Protein right on track! Why did the kangaroo buy leggings? For the hop-timal stretch!",
    "Spot on with protein. You're leaping ahead!",
    "Perfect protein pace. Pouch-itively great work!",
];

impl AdviceSource for ProgressAdvice {
    fn advise(&mut self, ctx: &AdviceContext) -> anyhow::Result<String> {
        let lines: &[&str] = match ctx.protein_percent {
            p if p < 90 => &LOW_PROTEIN,
            p if p > 110 => &HIGH_PROTEIN,
            _ => &ON_TRACK,
        };
        let line = lines[self.rng.gen_range(0..lines.len())];
        Ok(line.replace("{p}", &ctx.protein_percent.to_string()))
    }
}

/// Build the configured advice source.
pub fn from_settings(settings: &AdviceSettings) -> Box<dyn AdviceSource> {
    match settings.source {
        AdviceKind::Pool => Box::new(PoolAdvice::new(settings.messages.clone())),
        AdviceKind::Progress => Box::new(ProgressAdvice::new()),
    }
}

/// Ask the source for a line; failures and blank replies fall back to a
/// fixed encouragement so the caller always gets something to show.
pub fn advise_or_fallback(source: &mut dyn AdviceSource, ctx: &AdviceContext) -> String {
    match source.advise(ctx) {
        Ok(s) if !s.trim().is_empty() => s,
        Ok(_) => EMPTY_REPLY.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "advice source failed");
            FALLBACK.to_string()
        }
    }
}
