use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Vasomotor,
    Psychosocial,
    Physical,
    Sexual,
}

impl Domain {
    /// Declaration order. Also the tie-break order for recommendations.
    pub const ALL: [Domain; 4] = [
        Domain::Vasomotor,
        Domain::Psychosocial,
        Domain::Physical,
        Domain::Sexual,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Domain::Vasomotor => "vasomotor",
            Domain::Psychosocial => "psychosocial",
            Domain::Physical => "physical",
            Domain::Sexual => "sexual",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Whether a high raw value means more burden or more wellbeing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Burden,
    Wellbeing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSpec {
    pub domain: Domain,
    pub min_scale: f64,
    pub max_scale: f64,
    pub polarity: Polarity,
}

impl ItemSpec {
    const fn burden(domain: Domain, max_scale: f64) -> Self {
        Self {
            domain,
            min_scale: 0.0,
            max_scale,
            polarity: Polarity::Burden,
        }
    }

    const fn wellbeing(domain: Domain, max_scale: f64) -> Self {
        Self {
            domain,
            min_scale: 1.0,
            max_scale,
            polarity: Polarity::Wellbeing,
        }
    }

    pub fn clamp(&self, raw: f64) -> f64 {
        raw.max(self.min_scale).min(self.max_scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomId {
    HotFlashes,
    NightSweats,
    Chills,
    Anxiety,
    Irritability,
    MoodSwings,
    BrainFog,
    Headache,
    Fatigue,
    JointPain,
    Bloating,
    LowLibido,
    VaginalDryness,
}

impl SymptomId {
    /// Catalog scan order.
    pub const ALL: [SymptomId; 13] = [
        SymptomId::HotFlashes,
        SymptomId::NightSweats,
        SymptomId::Chills,
        SymptomId::Anxiety,
        SymptomId::Irritability,
        SymptomId::MoodSwings,
        SymptomId::BrainFog,
        SymptomId::Headache,
        SymptomId::Fatigue,
        SymptomId::JointPain,
        SymptomId::Bloating,
        SymptomId::LowLibido,
        SymptomId::VaginalDryness,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SymptomId::HotFlashes => "hot_flashes",
            SymptomId::NightSweats => "night_sweats",
            SymptomId::Chills => "chills",
            SymptomId::Anxiety => "anxiety",
            SymptomId::Irritability => "irritability",
            SymptomId::MoodSwings => "mood_swings",
            SymptomId::BrainFog => "brain_fog",
            SymptomId::Headache => "headache",
            SymptomId::Fatigue => "fatigue",
            SymptomId::JointPain => "joint_pain",
            SymptomId::Bloating => "bloating",
            SymptomId::LowLibido => "low_libido",
            SymptomId::VaginalDryness => "vaginal_dryness",
        }
    }

    pub fn spec(self) -> ItemSpec {
        match self {
            SymptomId::HotFlashes => ItemSpec::burden(Domain::Vasomotor, 5.0),
            SymptomId::NightSweats => ItemSpec::burden(Domain::Vasomotor, 5.0),
            SymptomId::Chills => ItemSpec::burden(Domain::Vasomotor, 3.0),
            SymptomId::Anxiety => ItemSpec::burden(Domain::Psychosocial, 3.0),
            SymptomId::Irritability => ItemSpec::burden(Domain::Psychosocial, 3.0),
            SymptomId::MoodSwings => ItemSpec::burden(Domain::Psychosocial, 3.0),
            SymptomId::BrainFog => ItemSpec::burden(Domain::Psychosocial, 3.0),
            SymptomId::Headache => ItemSpec::burden(Domain::Physical, 5.0),
            SymptomId::Fatigue => ItemSpec::burden(Domain::Physical, 5.0),
            SymptomId::JointPain => ItemSpec::burden(Domain::Physical, 3.0),
            SymptomId::Bloating => ItemSpec::burden(Domain::Physical, 3.0),
            SymptomId::LowLibido => ItemSpec::burden(Domain::Sexual, 3.0),
            SymptomId::VaginalDryness => ItemSpec::burden(Domain::Sexual, 3.0),
        }
    }
}

impl FromStr for SymptomId {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase().replace('-', "_");
        SymptomId::ALL
            .into_iter()
            .find(|id| id.key() == normalized)
            .ok_or_else(|| Error::UnknownItem(value.to_string()))
    }
}

impl fmt::Display for SymptomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Self-rated wellbeing fields carried on every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Mood,
    SleepQuality,
    EnergyLevel,
}

impl Signal {
    pub const ALL: [Signal; 3] = [Signal::Mood, Signal::SleepQuality, Signal::EnergyLevel];

    pub fn key(self) -> &'static str {
        match self {
            Signal::Mood => "mood",
            Signal::SleepQuality => "sleep_quality",
            Signal::EnergyLevel => "energy_level",
        }
    }

    pub fn spec(self) -> ItemSpec {
        match self {
            Signal::Mood => ItemSpec::wellbeing(Domain::Psychosocial, 5.0),
            Signal::SleepQuality => ItemSpec::wellbeing(Domain::Physical, 10.0),
            Signal::EnergyLevel => ItemSpec::wellbeing(Domain::Physical, 5.0),
        }
    }
}

/// Anything that contributes to a domain score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Symptom(SymptomId),
    Signal(Signal),
}

impl ItemId {
    pub fn spec(self) -> ItemSpec {
        match self {
            ItemId::Symptom(id) => id.spec(),
            ItemId::Signal(signal) => signal.spec(),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ItemId::Symptom(id) => id.key(),
            ItemId::Signal(signal) => signal.key(),
        }
    }

    /// Symptoms first, then signals, each in their declaration order.
    pub fn all() -> impl Iterator<Item = ItemId> {
        SymptomId::ALL
            .into_iter()
            .map(ItemId::Symptom)
            .chain(Signal::ALL.into_iter().map(ItemId::Signal))
    }

    pub fn in_domain(domain: Domain) -> impl Iterator<Item = ItemId> {
        Self::all().filter(move |item| item.spec().domain == domain)
    }
}

impl FromStr for ItemId {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase().replace('-', "_");
        ItemId::all()
            .find(|item| item.key() == normalized)
            .ok_or_else(|| Error::UnknownItem(value.to_string()))
    }
}
