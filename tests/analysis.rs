use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use symptom_insights::companion::fallback_response;
use symptom_insights::{
    analyze, assistant_context, attach_sentiment, detect_red_flags, format_float,
    generate_insights, AnalysisOptions, AnalyticsConfig, DailyLogEntry, Interpretation, Locale,
    SymptomId, TrendDirection,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
}

fn sample_entries() -> Vec<DailyLogEntry> {
    vec![
        attach_sentiment(
            DailyLogEntry::new(day(8))
                .with_symptom(SymptomId::HotFlashes, 3.0)
                .with_note("Happy and calm"),
            Locale::En,
        ),
        attach_sentiment(
            DailyLogEntry::new(day(9))
                .with_symptom(SymptomId::HotFlashes, 2.0)
                .with_symptom(SymptomId::Headache, 1.0)
                .with_note("sad"),
            Locale::En,
        ),
        DailyLogEntry::new(day(10)).with_mood(5).with_energy(5).with_sleep(10),
    ]
}

#[test]
fn facade_anchors_on_latest_entry() {
    let entries = sample_entries();
    let report = analyze(&entries, &AnalysisOptions::default());
    assert_eq!(report.as_of, day(10));
    assert_eq!(report.locale, Locale::Fr);
    assert_eq!(report.quality_of_life.entries_analyzed, 3);
    assert!((report.quality_of_life.global_score - 1.5).abs() < 1e-6);
    assert_eq!(report.quality_of_life.interpretation, Interpretation::Mild);
    assert_eq!(report.sentiment_trend.total_analyzed, 2);
    assert_eq!(report.sentiment_trend.trend_direction, TrendDirection::Stable);
    assert!(report.red_flags.is_empty());

    let earlier = analyze(&entries, &AnalysisOptions::default().with_as_of(day(8)));
    assert_eq!(earlier.as_of, day(8));
    assert_eq!(earlier.quality_of_life.entries_analyzed, 1);
    assert_eq!(earlier.sentiment_trend.total_analyzed, 1);
}

#[test]
fn facade_handles_an_empty_log() {
    let report = analyze(&[], &AnalysisOptions::default().with_locale(Locale::En));
    assert_eq!(report.quality_of_life.interpretation, Interpretation::NoData);
    assert!(report.insights.is_empty());
    assert!(report.red_flags.is_empty());
    assert_eq!(report.sentiment_trend.total_analyzed, 0);
}

#[test]
fn report_serializes_with_camel_case_fields() {
    let entries = sample_entries();
    let report = analyze(&entries, &AnalysisOptions::default().with_locale(Locale::En));
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["asOf"], "2026-08-10");
    assert!(value["qualityOfLife"]["globalScore"].is_number());
    assert!(value["sentimentTrend"]["trendDirection"].is_string());
}

#[test]
fn entries_parse_from_stored_json() {
    let json = r#"[
        {"date": "2026-08-09", "mood": 2, "symptomIntensities": {"hot_flashes": 5, "brain_fog": 1}},
        {"date": "2026-08-10", "note": "Fatiguée", "sentiment": {"label": "negative", "score": -1.0, "emoji": "😢", "confidence": 0.2}}
    ]"#;
    let entries: Vec<DailyLogEntry> = serde_json::from_str(json).unwrap();
    assert_eq!(entries[0].symptom(SymptomId::HotFlashes), Some(5.0));
    assert_eq!(entries[0].symptom(SymptomId::BrainFog), Some(1.0));
    assert!(entries[1].sentiment.is_some());
}

#[test]
fn digest_summarizes_each_component() {
    let entries = sample_entries();
    let digest = assistant_context(&entries, &AnalysisOptions::default().with_locale(Locale::En));
    let lines: Vec<_> = digest.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Average note sentiment: 0.00 (stable).",
            "Notes: 1 positive, 1 negative, 0 neutral.",
            "Most frequent symptoms this week: hot flashes (2), headache (1).",
            "Quality-of-life score: 1.5/8 (Mild impact on your quality of life).",
        ]
    );
}

#[test]
fn digest_without_symptoms_says_so() {
    let entries = vec![DailyLogEntry::new(day(10)).with_mood(4)];
    let digest = assistant_context(&entries, &AnalysisOptions::default());
    assert!(digest.contains("Aucun symptôme noté cette semaine."));
}

#[test]
fn fallback_reply_is_seeded_and_localized() {
    let mut first = StdRng::seed_from_u64(7);
    let mut second = StdRng::seed_from_u64(7);
    let reply = fallback_response(&mut first, Locale::En);
    assert_eq!(reply, fallback_response(&mut second, Locale::En));
    assert!(Locale::En.messages().fallback_responses.contains(&reply));

    let reply = fallback_response(&mut first, Locale::Fr);
    assert!(Locale::Fr.messages().fallback_responses.contains(&reply));
}

#[test]
fn partial_config_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analytics.toml");
    fs::write(&path, "[windows]\ntrend_days = 14\n").unwrap();

    let (config, loaded_from) = AnalyticsConfig::load(Some(path.clone())).unwrap();
    assert_eq!(loaded_from, Some(path));
    assert_eq!(config.windows.trend_days, 14);
    assert_eq!(config.windows.quality_days, 30);
    assert_eq!(config.server.port, 8787);
    assert_eq!(config.locale.to_locale(), Locale::Fr);
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (config, _) = AnalyticsConfig::load(Some(dir.path().join("absent.toml"))).unwrap();
    assert_eq!(config.windows.digest_symptom_days, 7);
}

#[test]
fn written_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("analytics.toml");
    let mut config = AnalyticsConfig::default();
    config.locale.default = "en".to_string();
    config.windows.quality_days = 14;
    config.write(&path).unwrap();

    let (loaded, _) = AnalyticsConfig::load(Some(path)).unwrap();
    assert_eq!(loaded.locale.to_locale(), Locale::En);
    assert_eq!(loaded.windows.quality_days, 14);
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analytics.toml");
    fs::write(&path, "[windows\n").unwrap();
    assert!(AnalyticsConfig::load(Some(path)).is_err());
}

#[test]
fn earliest_representable_date_does_not_panic() {
    let entries = vec![DailyLogEntry::new(NaiveDate::MIN).with_mood(3)];
    let report = analyze(&entries, &AnalysisOptions::default());
    assert_eq!(report.as_of, NaiveDate::MIN);
    assert_eq!(report.quality_of_life.entries_analyzed, 1);
    assert!(report.red_flags.is_empty());
    assert!(!assistant_context(&entries, &AnalysisOptions::default()).is_empty());
    assert!(detect_red_flags(&entries, NaiveDate::MIN, Locale::En).is_empty());
    let insights = generate_insights(&entries, NaiveDate::MIN, Locale::En);
    assert!(insights.iter().all(|insight| insight.id != "mood_trend"));
}

#[test]
fn oversized_windows_cover_the_whole_log() {
    let entries = sample_entries();
    let mut options = AnalysisOptions::default();
    options.quality_days = i64::MAX;
    options.trend_days = i64::MAX;
    options.digest_symptom_days = i64::MAX;
    let report = analyze(&entries, &options);
    assert_eq!(report.quality_of_life.entries_analyzed, 3);
    assert_eq!(report.sentiment_trend.total_analyzed, 2);
    assert!(assistant_context(&entries, &options).contains("(2)"));
}

#[test]
fn formats_fixed_digits() {
    assert_eq!(format_float(2.345, 1), "2.3");
    assert_eq!(format_float(4.0, 2), "4.00");
}
