use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StressLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl StressLevel {
    /// Unknown text maps to `Low`, which carries no penalty.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Low,
        }
    }

    fn penalty(self) -> f64 {
        match self {
            Self::Low => 0.0,
            Self::Medium => 5.0,
            Self::High => 15.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Excellent,
    Average,
    NeedsImprovement,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "🌟 Excellent",
            Self::Average => "🙂 Average",
            Self::NeedsImprovement => "⚠️ Needs Improvement",
        }
    }
}

pub const SLEEP_ADVICE: &str = "Try to get 7–8 hours of sleep nightly.";
pub const STUDY_ADVICE: &str = "Increase focused study blocks (try Pomodoro).";
pub const SCREEN_ADVICE: &str = "Reduce passive screen time; schedule phone-free blocks.";
pub const STRESS_ADVICE: &str = "Add short exercise, breathing or a walk.";
pub const BALANCED_ADVICE: &str = "Great balance — keep these habits consistent.";

pub fn compute_score(sleep: f64, study: f64, screen: f64, stress: StressLevel) -> u8 {
    let raw = study * 10.0 + sleep * 6.0 - screen * 2.0 - stress.penalty();
    // NaN saturates to 0 on the cast.
    raw.clamp(0.0, 100.0).round() as u8
}

pub fn category_from_score(score: u8) -> Category {
    if score >= 80 {
        Category::Excellent
    } else if score >= 50 {
        Category::Average
    } else {
        Category::NeedsImprovement
    }
}

/// Every triggered rule contributes its message, in the order sleep, study,
/// screen, stress.
pub fn advice(sleep: f64, study: f64, screen: f64, stress: StressLevel) -> String {
    let rules = [
        (sleep < 6.0, SLEEP_ADVICE),
        (study < 3.0, STUDY_ADVICE),
        (screen > 5.0, SCREEN_ADVICE),
        (stress == StressLevel::High, STRESS_ADVICE),
    ];

    let triggered: Vec<&str> = rules
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, message)| *message)
        .collect();

    if triggered.is_empty() {
        BALANCED_ADVICE.to_string()
    } else {
        triggered.join(" ")
    }
}
