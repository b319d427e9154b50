use crate::charts::{CanvasTarget, ChartSpec};
use crate::score::{compute_score, Category, StressLevel};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One day's metrics plus the score derived from them when the sample was made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySample {
    date: String,
    #[serde(rename = "sleep")]
    sleep_hours: f64,
    #[serde(rename = "study")]
    study_hours: f64,
    #[serde(rename = "screen")]
    screen_hours: f64,
    #[serde(rename = "stress")]
    stress_level: StressLevel,
    score: u8,
}

impl DailySample {
    pub fn new(
        date: impl Into<String>,
        sleep_hours: f64,
        study_hours: f64,
        screen_hours: f64,
        stress_level: StressLevel,
    ) -> Self {
        Self {
            date: date.into(),
            sleep_hours,
            study_hours,
            screen_hours,
            stress_level,
            score: compute_score(sleep_hours, study_hours, screen_hours, stress_level),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn sleep_hours(&self) -> f64 {
        self.sleep_hours
    }

    pub fn study_hours(&self) -> f64 {
        self.study_hours
    }

    pub fn screen_hours(&self) -> f64 {
        self.screen_hours
    }

    pub fn stress_level(&self) -> StressLevel {
        self.stress_level
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    /// `MM-DD` part of the date, used as a chart axis label.
    pub fn day_label(&self) -> &str {
        self.date.get(5..10).unwrap_or(&self.date)
    }
}

/// Form fields as the browser sends them: numbers, strings, or nothing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeRequest {
    pub sleep: Option<Value>,
    pub study: Option<Value>,
    pub screen: Option<Value>,
    pub stress: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub score: u8,
    pub category: Category,
    pub category_label: &'static str,
    pub advice: String,
    pub sleep: f64,
    pub study: f64,
    pub screen: f64,
    pub stress: StressLevel,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: Analysis,
    pub charts: Vec<ChartSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSnapshot {
    pub target: CanvasTarget,
    pub revision: u64,
    pub spec: ChartSpec,
}

#[derive(Debug, Deserialize, Default)]
pub struct TrendQuery {
    pub view: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub message: &'static str,
    pub trend: Option<ChartSnapshot>,
}
