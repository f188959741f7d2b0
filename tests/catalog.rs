use symptom_insights::{Domain, ItemId, Signal, SymptomId};

#[test]
fn every_domain_has_items() {
    for domain in Domain::ALL {
        assert!(ItemId::in_domain(domain).count() > 0, "{domain} is empty");
    }
}

#[test]
fn wellbeing_signals_map_to_expected_domains() {
    assert_eq!(Signal::Mood.spec().domain, Domain::Psychosocial);
    assert_eq!(Signal::SleepQuality.spec().domain, Domain::Physical);
    assert_eq!(Signal::EnergyLevel.spec().max_scale, 5.0);
}

#[test]
fn parses_item_keys() {
    assert_eq!(
        "hot-flashes".parse::<ItemId>().ok(),
        Some(ItemId::Symptom(SymptomId::HotFlashes))
    );
    assert_eq!(
        "Sleep_Quality".parse::<ItemId>().ok(),
        Some(ItemId::Signal(Signal::SleepQuality))
    );
    assert!("tinnitus".parse::<SymptomId>().is_err());
}

#[test]
fn clamp_respects_scale() {
    let spec = SymptomId::Anxiety.spec();
    assert_eq!(spec.clamp(-2.0), 0.0);
    assert_eq!(spec.clamp(7.0), 3.0);
    assert_eq!(Signal::SleepQuality.spec().clamp(0.0), 1.0);
}
