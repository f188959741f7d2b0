use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use symptom_insights::{AnalysisOptions, AnalyticsConfig, DailyLogEntry, Locale};

#[derive(Debug, Deserialize)]
pub struct ApiSentimentRequest {
    pub text: Option<String>,
    pub locale: Option<String>,
}

impl ApiSentimentRequest {
    pub fn locale(&self, config: &AnalyticsConfig) -> Locale {
        Locale::resolve(self.locale.as_deref(), config.locale.to_locale())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAnalysisRequest {
    #[serde(default)]
    pub entries: Vec<DailyLogEntry>,
    pub as_of: Option<String>,
    pub locale: Option<String>,
}

impl ApiAnalysisRequest {
    pub fn into_parts(self, config: &AnalyticsConfig) -> Result<(Vec<DailyLogEntry>, AnalysisOptions), String> {
        let mut options = AnalysisOptions::from_config(config)
            .with_locale(Locale::resolve(self.locale.as_deref(), config.locale.to_locale()));
        if let Some(value) = self.as_of.as_deref() {
            options = options.with_as_of(parse_date(value)?);
        }
        Ok((self.entries, options))
    }
}

#[derive(Debug, Serialize)]
pub struct ApiDigestResponse {
    pub digest: String,
}

pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| symptom_insights::Error::InvalidDate(value.to_string()).to_string())
}
