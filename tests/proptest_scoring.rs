//! Property-based tests for scoring, aggregation and normalization.
//!
//! Scores must stay within 0-100 for any input, never decrease when a raw
//! counter grows, and the normalizer must survive arbitrary JSON.

use footprint_score::config::{EngineConfig, ScoringConfig};
use footprint_score::model::Platform;
use footprint_score::normalize::normalize;
use footprint_score::pipeline::{PlatformInput, ScanOrchestrator, ScanRequest};
use footprint_score::scoring::{saturating_linear, DimensionAggregator, PlatformScorer};
use proptest::prelude::*;
use serde_json::{json, Value};

fn github_payload(commits: u64, stars: u64, followers: u64, weeks: u64) -> Value {
    json!({
        "login": "prop",
        "public_repos": 5,
        "followers": followers,
        "following": 1,
        "total_stars": stars,
        "total_forks": 0,
        "commits_last_year": commits,
        "active_weeks": weeks,
        "languages": ["Rust"]
    })
}

fn stackexchange_payload(reputation: u64, answers: u64, reached: u64, tag_score: u64) -> Value {
    json!({
        "user_id": "prop",
        "reputation": reputation,
        "answer_count": answers,
        "question_count": 3,
        "people_reached": reached,
        "badge_counts": {"gold": 0, "silver": 1, "bronze": 4},
        "top_tags": [
            {"tag_name": "rust", "answer_score": tag_score, "answer_count": 10},
            {"tag_name": "sql", "answer_score": 40, "answer_count": 4}
        ]
    })
}

fn professional_payload(connections: u64, posts: u64, endorsements: u64) -> Value {
    json!({
        "public_identifier": "prop",
        "headline": "Engineer",
        "connections": connections,
        "posts_last_90_days": posts,
        "recommendations_received": 1,
        "experience": [{"title": "Engineer", "company": "Acme", "current": true}],
        "education": [{"school": "State"}],
        "skills": [
            {"name": "Rust", "endorsements": endorsements},
            {"name": "SQL", "endorsements": 3}
        ]
    })
}

fn platform_score(platform: Platform, payload: &Value) -> u8 {
    let profile = normalize(platform, payload).expect("payload has an identity");
    PlatformScorer::new(ScoringConfig::default()).score(&profile).value
}

fn github_score(payload: &Value) -> u8 {
    platform_score(Platform::GitHub, payload)
}

/// Arbitrary JSON up to a small depth
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        any::<f64>().prop_map(|f| json!(f)),
        "\\PC{0,24}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map(
                prop_oneof![
                    Just("login".to_string()),
                    Just("user_id".to_string()),
                    Just("public_identifier".to_string()),
                    Just("followers".to_string()),
                    Just("reputation".to_string()),
                    Just("languages".to_string()),
                    Just("top_tags".to_string()),
                    Just("skills".to_string()),
                    Just("experience".to_string()),
                    "[a-z_]{1,12}",
                ],
                inner,
                0..8
            )
            .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn saturating_linear_is_bounded(raw in proptest::num::f64::ANY, threshold in proptest::num::f64::ANY) {
        prop_assert!(saturating_linear(raw, threshold) <= 100);
    }

    #[test]
    fn platform_score_is_bounded(
        commits in any::<u64>(),
        stars in any::<u64>(),
        followers in any::<u64>(),
        weeks in any::<u64>(),
    ) {
        let score = github_score(&github_payload(commits, stars, followers, weeks));
        prop_assert!(score <= 100);
    }

    #[test]
    fn raising_an_input_never_lowers_the_score(
        commits in 0u64..2_000,
        stars in 0u64..4_000,
        followers in 0u64..2_000,
        weeks in 0u64..60,
        bump in 1u64..1_000,
    ) {
        let base = github_score(&github_payload(commits, stars, followers, weeks));
        prop_assert!(github_score(&github_payload(commits + bump, stars, followers, weeks)) >= base);
        prop_assert!(github_score(&github_payload(commits, stars + bump, followers, weeks)) >= base);
        prop_assert!(github_score(&github_payload(commits, stars, followers + bump, weeks)) >= base);
        prop_assert!(github_score(&github_payload(commits, stars, followers, weeks + bump)) >= base);
    }

    #[test]
    fn raising_a_stackexchange_input_never_lowers_the_score(
        reputation in 0u64..40_000,
        answers in 0u64..500,
        reached in 0u64..200_000,
        tag_score in 0u64..2_000,
        bump in 1u64..5_000,
    ) {
        let score = |r, a, p, t| platform_score(Platform::StackExchange, &stackexchange_payload(r, a, p, t));
        let base = score(reputation, answers, reached, tag_score);
        prop_assert!(score(reputation + bump, answers, reached, tag_score) >= base);
        prop_assert!(score(reputation, answers + bump, reached, tag_score) >= base);
        prop_assert!(score(reputation, answers, reached + bump, tag_score) >= base);
        prop_assert!(score(reputation, answers, reached, tag_score + bump) >= base);
    }

    #[test]
    fn raising_a_professional_input_never_lowers_the_score(
        connections in 0u64..1_000,
        posts in 0u64..40,
        endorsements in 0u64..200,
        bump in 1u64..500,
    ) {
        let score = |c, p, e| platform_score(Platform::ProfessionalNetwork, &professional_payload(c, p, e));
        let base = score(connections, posts, endorsements);
        prop_assert!(score(connections + bump, posts, endorsements) >= base);
        prop_assert!(score(connections, posts + bump, endorsements) >= base);
        prop_assert!(score(connections, posts, endorsements + bump) >= base);
    }

    #[test]
    fn filling_a_professional_section_never_lowers_the_score(
        connections in 0u64..1_000,
        posts in 0u64..40,
        section in prop::sample::select(vec!["full_name", "summary", "location", "industry"]),
    ) {
        let sparse = professional_payload(connections, posts, 5);
        let mut filled = sparse.clone();
        filled[section] = json!("Filled in");
        prop_assert!(
            platform_score(Platform::ProfessionalNetwork, &filled)
                >= platform_score(Platform::ProfessionalNetwork, &sparse)
        );
    }

    #[test]
    fn single_platform_overall_equals_platform_score(
        commits in any::<u64>(),
        stars in 0u64..5_000,
        weeks in 0u64..60,
    ) {
        let profile = normalize(Platform::GitHub, &github_payload(commits, stars, 10, weeks)).unwrap();
        let score = PlatformScorer::new(ScoringConfig::default()).score(&profile);
        let dims = DimensionAggregator::new(ScoringConfig::default()).aggregate(std::slice::from_ref(&score));
        prop_assert_eq!(dims.overall, score.value);
        prop_assert!(!dims.insufficient_data);
    }

    #[test]
    fn normalizer_never_panics(payload in arb_json()) {
        for platform in Platform::all() {
            let _ = normalize(*platform, &payload);
        }
    }

    #[test]
    fn scans_of_arbitrary_payloads_are_bounded_and_deterministic(
        github in arb_json(),
        stackexchange in arb_json(),
    ) {
        let request = ScanRequest::new()
            .with_platform(Platform::GitHub, PlatformInput::payload(github))
            .with_platform(Platform::StackExchange, PlatformInput::payload(stackexchange));
        let orchestrator = ScanOrchestrator::new(EngineConfig::default()).unwrap();
        let at = chrono::DateTime::<chrono::Utc>::UNIX_EPOCH;

        let first = orchestrator.run(&request, at);
        let second = orchestrator.run(&request, at);
        prop_assert_eq!(&first.scoring_fingerprint, &second.scoring_fingerprint);

        let s = first.scores;
        for value in [s.overall, s.visibility, s.activity, s.impact, s.expertise] {
            prop_assert!(value <= 100);
        }
        prop_assert_eq!(
            first.results.len() + first.unavailable.len(),
            Platform::all().len()
        );
    }
}
