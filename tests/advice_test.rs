use fitfocus::core::advice::{
    AdviceContext, AdviceSource, DEFAULT_POOL, PoolAdvice, ProgressAdvice, advise_or_fallback,
    from_settings,
};
use fitfocus::models::config::{AdviceKind, AdviceSettings};

fn ctx(protein_percent: i64) -> AdviceContext {
    AdviceContext {
        label: "salmon bowl".into(),
        protein_percent,
    }
}

struct Silent;

impl AdviceSource for Silent {
    fn advise(&mut self, _ctx: &AdviceContext) -> anyhow::Result<String> {
        Ok("   ".into())
    }
}

#[test]
fn test_pool_picks_from_builtin_lines() {
    let mut pool = PoolAdvice::seeded(Vec::new(), 11);
    for _ in 0..50 {
        let line = pool.advise(&ctx(50)).unwrap();
        assert!(DEFAULT_POOL.contains(&line.as_str()), "{line}");
    }
}

#[test]
fn test_pool_uses_configured_lines() {
    let lines = vec!["one".to_string(), "two".to_string()];
    let mut pool = PoolAdvice::seeded(lines.clone(), 2);
    for _ in 0..20 {
        assert!(lines.contains(&pool.advise(&ctx(100)).unwrap()));
    }
}

#[test]
fn test_progress_reacts_to_protein() {
    let mut coach = ProgressAdvice::seeded(4);
    let low = coach.advise(&ctx(40)).unwrap();
    assert!(low.contains("40%"), "{low}");
    let high = coach.advise(&ctx(140)).unwrap();
    assert!(high.contains("140%"), "{high}");
    let ok = coach.advise(&ctx(100)).unwrap();
    assert!(!ok.contains('%'), "{ok}");
}

#[test]
fn test_blank_reply_gets_default_line() {
    assert_eq!(
        advise_or_fallback(&mut Silent, &ctx(80)),
        "Keep it up, you're doing great!"
    );
}

#[test]
fn test_context_summary_mentions_protein() {
    assert_eq!(
        ctx(64).summary(),
        "The user just logged salmon bowl. They are at 64% of their protein goal."
    );
}

#[test]
fn test_settings_select_source() {
    let settings = AdviceSettings {
        source: AdviceKind::Pool,
        messages: vec!["configured".into()],
    };
    let mut source = from_settings(&settings);
    assert_eq!(advise_or_fallback(source.as_mut(), &ctx(0)), "configured");

    let settings = AdviceSettings {
        source: AdviceKind::Progress,
        messages: Vec::new(),
    };
    let mut source = from_settings(&settings);
    assert!(advise_or_fallback(source.as_mut(), &ctx(10)).contains("10%"));
}
