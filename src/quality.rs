use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::{Domain, ItemId, Polarity};
use crate::entry::{DailyLogEntry, EntryLog};
use crate::locale::{render, Locale, Messages};
use crate::mean;

pub const SCALE_MAX: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    None,
    Mild,
    Moderate,
    Severe,
    VerySevere,
}

impl Severity {
    pub fn from_score(score: f64) -> Self {
        if score <= 0.0 {
            Severity::None
        } else if score < 2.0 {
            Severity::Mild
        } else if score < 4.0 {
            Severity::Moderate
        } else if score < 6.0 {
            Severity::Severe
        } else {
            Severity::VerySevere
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    NoData,
    NoImpact,
    Mild,
    Moderate,
    Significant,
    Severe,
}

impl Interpretation {
    pub fn from_global(global_score: f64, has_entries: bool) -> Self {
        if !has_entries {
            Interpretation::NoData
        } else if global_score <= 0.0 {
            Interpretation::NoImpact
        } else if global_score < 2.0 {
            Interpretation::Mild
        } else if global_score < 4.0 {
            Interpretation::Moderate
        } else if global_score < 6.0 {
            Interpretation::Significant
        } else {
            Interpretation::Severe
        }
    }

    pub fn text(self, messages: &Messages) -> &'static str {
        match self {
            Interpretation::NoData => messages.interpretation_no_data,
            Interpretation::NoImpact => messages.interpretation_no_impact,
            Interpretation::Mild => messages.interpretation_mild,
            Interpretation::Moderate => messages.interpretation_moderate,
            Interpretation::Significant => messages.interpretation_significant,
            Interpretation::Severe => messages.interpretation_severe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    pub item: ItemId,
    pub label: &'static str,
    pub average_score: f64,
    pub days_reported: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainScore {
    pub score: f64,
    pub severity: Severity,
    pub days_affected: usize,
    pub item_details: Vec<ItemDetail>,
}

impl DomainScore {
    fn empty() -> Self {
        Self {
            score: 0.0,
            severity: Severity::None,
            days_affected: 0,
            item_details: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityOfLifeReport {
    pub global_score: f64,
    pub domains: BTreeMap<Domain, DomainScore>,
    pub interpretation: Interpretation,
    pub interpretation_text: String,
    pub recommendation: String,
    pub entries_analyzed: usize,
}

impl QualityOfLifeReport {
    pub fn domain(&self, domain: Domain) -> &DomainScore {
        // Every report carries all four domains.
        &self.domains[&domain]
    }

    /// Highest aggregate, ties resolved by declaration order.
    pub fn most_affected(&self) -> (Domain, f64) {
        Domain::ALL
            .into_iter()
            .map(|domain| (domain, self.domain(domain).score))
            .fold((Domain::ALL[0], f64::NEG_INFINITY), |best, candidate| {
                if candidate.1 > best.1 {
                    candidate
                } else {
                    best
                }
            })
    }
}

/// Rescales a raw item value to 0-8. Returns `None` when the item does not
/// contribute for that entry.
pub fn item_contribution(entry: &DailyLogEntry, item: ItemId) -> Option<f64> {
    let spec = item.spec();
    let raw = entry.item(item)?;
    let burden = match spec.polarity {
        Polarity::Burden => raw,
        Polarity::Wellbeing => {
            let inverted = spec.max_scale - raw;
            if inverted <= 0.0 {
                return None;
            }
            inverted
        }
    };
    Some((burden / spec.max_scale * SCALE_MAX).round())
}

/// Mean of the contributing items for one domain on one day.
pub fn entry_domain_score(entry: &DailyLogEntry, domain: Domain) -> Option<f64> {
    let values: Vec<f64> = ItemId::in_domain(domain)
        .filter_map(|item| item_contribution(entry, item))
        .collect();
    mean(&values)
}

fn score_domain(log: &EntryLog<'_>, domain: Domain, messages: &Messages) -> DomainScore {
    let daily: Vec<f64> = log
        .iter()
        .filter_map(|entry| entry_domain_score(entry, domain))
        .collect();

    let Some(score) = mean(&daily) else {
        return DomainScore::empty();
    };

    let item_details = ItemId::in_domain(domain)
        .filter_map(|item| {
            let values: Vec<f64> = log
                .iter()
                .filter_map(|entry| item_contribution(entry, item))
                .collect();
            mean(&values).map(|average_score| ItemDetail {
                item,
                label: messages.item(item),
                average_score,
                days_reported: values.len(),
            })
        })
        .collect();

    DomainScore {
        score,
        severity: Severity::from_score(score),
        days_affected: daily.len(),
        item_details,
    }
}

pub fn score_quality_of_life(entries: &[DailyLogEntry], locale: Locale) -> QualityOfLifeReport {
    let messages = locale.messages();
    let log = EntryLog::new(entries);

    let domains: BTreeMap<Domain, DomainScore> = Domain::ALL
        .into_iter()
        .map(|domain| (domain, score_domain(&log, domain, messages)))
        .collect();

    let global_score = domains.values().map(|domain| domain.score).sum::<f64>() / Domain::ALL.len() as f64;
    let interpretation = Interpretation::from_global(global_score, !log.is_empty());

    let mut report = QualityOfLifeReport {
        global_score,
        domains,
        interpretation,
        interpretation_text: interpretation.text(messages).to_string(),
        recommendation: String::new(),
        entries_analyzed: log.len(),
    };
    report.recommendation = recommendation(&report, messages);

    debug!(
        global_score,
        entries = report.entries_analyzed,
        "scored quality of life"
    );
    report
}

fn recommendation(report: &QualityOfLifeReport, messages: &Messages) -> String {
    if report.entries_analyzed == 0 {
        return messages.recommendation_no_data.to_string();
    }
    let (domain, score) = report.most_affected();
    let template = if score <= 0.0 {
        messages.recommendation_clear
    } else if score < 4.0 {
        messages.recommendation_moderate
    } else {
        messages.recommendation_high
    };
    render(template, &[("domain", messages.domain(domain))])
}
