use chrono::NaiveDate;
use symptom_insights::entry::days_before;
use symptom_insights::{DailyLogEntry, EntryLog, SymptomId};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

#[test]
fn accessors_clamp_to_scale() {
    let entry = DailyLogEntry::new(day(1))
        .with_mood(9)
        .with_sleep(0)
        .with_symptom(SymptomId::Anxiety, -1.0)
        .with_symptom(SymptomId::HotFlashes, f64::NAN);

    assert_eq!(entry.mood(), Some(5.0));
    assert_eq!(entry.sleep(), Some(1.0));
    assert_eq!(entry.symptom(SymptomId::Anxiety), Some(0.0));
    assert_eq!(entry.symptom(SymptomId::HotFlashes), None);
    assert_eq!(entry.energy(), None);
}

#[test]
fn log_keeps_last_entry_per_day_and_sorts() {
    let entries = vec![
        DailyLogEntry::new(day(3)).with_mood(2),
        DailyLogEntry::new(day(1)).with_mood(4),
        DailyLogEntry::new(day(3)).with_mood(5),
    ];
    let log = EntryLog::new(&entries);
    assert_eq!(log.len(), 2);
    let dates: Vec<_> = log.iter().map(|entry| entry.date).collect();
    assert_eq!(dates, vec![day(1), day(3)]);
    assert_eq!(log.iter().last().and_then(|entry| entry.mood()), Some(5.0));
}

#[test]
fn window_is_inclusive_of_anchor() {
    let entries: Vec<_> = (1..=10).map(|d| DailyLogEntry::new(day(d))).collect();
    let log = EntryLog::new(&entries);
    let window = log.window(day(10), 7);
    assert_eq!(window.len(), 7);
    assert_eq!(window[0].date, day(4));
    assert!(log.window(day(10), 0).is_empty());
}

#[test]
fn window_at_the_earliest_date_saturates() {
    let entries = vec![DailyLogEntry::new(NaiveDate::MIN).with_mood(3)];
    let log = EntryLog::new(&entries);
    assert_eq!(log.window(NaiveDate::MIN, 7).len(), 1);
    assert_eq!(log.window(day(10), i64::MAX).len(), 1);
}

#[test]
fn days_before_never_overflows() {
    assert_eq!(days_before(day(10), 3), day(7));
    assert_eq!(days_before(day(10), -3), day(10));
    assert_eq!(days_before(NaiveDate::MIN, 1), NaiveDate::MIN);
    assert_eq!(days_before(day(10), i64::MAX), NaiveDate::MIN);
}

#[test]
fn note_matching_ignores_case() {
    let entry = DailyLogEntry::new(day(1)).with_note("Pas de DOULEUR THORACIQUE");
    assert!(entry.note_mentions(&["douleur thoracique"]));
    assert!(!DailyLogEntry::new(day(1)).note_mentions(&["douleur"]));
}
