use crate::charts::{self, CanvasTarget, ChartSurface, RenderRegistry};
use crate::errors::StoreError;
use crate::history::HistoryStore;
use crate::models::{Analysis, AnalyzeRequest, DailySample};
use crate::score::{advice, category_from_score, compute_score, StressLevel};
use crate::storage::KeyValueStore;
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use serde_json::Value;
use tracing::info;

pub const RESET_ACK: &str = "Demo data reset";

/// Inputs used by the "load sample" button.
pub const DEMO_INPUT: MetricsInput = MetricsInput {
    sleep: 7.2,
    study: 4.1,
    screen: 3.0,
    stress: StressLevel::Medium,
};

const DEFAULT_HOURS: (f64, f64, f64) = (7.0, 4.0, 3.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsInput {
    pub sleep: f64,
    pub study: f64,
    pub screen: f64,
    pub stress: StressLevel,
}

impl MetricsInput {
    pub fn from_request(request: &AnalyzeRequest) -> Self {
        Self {
            sleep: normalize_hours(request.sleep.as_ref()),
            study: normalize_hours(request.study.as_ref()),
            screen: normalize_hours(request.screen.as_ref()),
            stress: normalize_stress(request.stress.as_ref()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendView {
    #[default]
    Week,
    Month,
}

impl TrendView {
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(view) if view.eq_ignore_ascii_case("month") => Self::Month,
            _ => Self::Week,
        }
    }

    pub fn days(self) -> usize {
        match self {
            Self::Week => 7,
            Self::Month => 30,
        }
    }
}

/// Anything that is not a finite, non-negative number becomes 0.
pub fn normalize_hours(raw: Option<&Value>) -> f64 {
    let parsed = match raw {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => parse_leading_float(text),
        _ => None,
    };

    match parsed {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Text is matched leniently; any other JSON value means `Low`.
pub fn normalize_stress(raw: Option<&Value>) -> StressLevel {
    match raw {
        Some(Value::String(text)) => StressLevel::parse_lenient(text),
        _ => StressLevel::Low,
    }
}

/// Reads the longest decimal number at the start of `text`, so `"7.5h"` is 7.5.
fn parse_leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

/// Input, then score, then history, then charts.
pub struct AnalysisController<S, R, C: ChartSurface> {
    history: HistoryStore<S, R>,
    charts: RenderRegistry<C>,
}

impl<S, R, C> AnalysisController<S, R, C>
where
    S: KeyValueStore,
    R: Rng + Send,
    C: ChartSurface,
{
    pub fn new(history: HistoryStore<S, R>, charts: RenderRegistry<C>) -> Self {
        Self { history, charts }
    }

    pub fn history(&self) -> &HistoryStore<S, R> {
        &self.history
    }

    pub fn charts(&self) -> &RenderRegistry<C> {
        &self.charts
    }

    /// First paint: default hours and the weekly trend.
    pub async fn init(&mut self) -> Result<(), StoreError> {
        let (sleep, study, screen) = DEFAULT_HOURS;
        self.charts
            .replace(CanvasTarget::Overview, &charts::overview(sleep, study, screen));
        self.charts
            .replace(CanvasTarget::Budget, &charts::budget(sleep, study, screen));
        self.show_trend(TrendView::Week).await?;
        Ok(())
    }

    pub async fn analyze(&mut self, input: MetricsInput) -> Result<Analysis, StoreError> {
        self.analyze_at(input, Utc::now()).await
    }

    pub async fn analyze_at(
        &mut self,
        input: MetricsInput,
        now: DateTime<Utc>,
    ) -> Result<Analysis, StoreError> {
        let MetricsInput {
            sleep,
            study,
            screen,
            stress,
        } = input;

        let score = compute_score(sleep, study, screen, stress);
        let category = category_from_score(score);
        let analysis = Analysis {
            score,
            category,
            category_label: category.label(),
            advice: advice(sleep, study, screen, stress),
            sleep,
            study,
            screen,
            stress,
        };

        let stamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        self.history
            .save(DailySample::new(stamp, sleep, study, screen, stress))
            .await?;

        self.charts
            .replace(CanvasTarget::Overview, &charts::overview(sleep, study, screen));
        self.charts
            .replace(CanvasTarget::Budget, &charts::budget(sleep, study, screen));

        info!(score, ?category, "analysis recorded");
        Ok(analysis)
    }

    pub async fn analyze_sample(&mut self) -> Result<Analysis, StoreError> {
        self.analyze(DEMO_INPUT).await
    }

    pub async fn show_trend(&mut self, view: TrendView) -> Result<&C::Handle, StoreError> {
        let samples = self.history.trailing(view.days()).await?;
        Ok(self
            .charts
            .replace(CanvasTarget::Trend, &charts::trend(&samples)))
    }

    /// Clears history and redraws the weekly trend from fresh demo data.
    pub async fn reset(&mut self) -> Result<&'static str, StoreError> {
        self.history.reset().await?;
        self.show_trend(TrendView::Week).await?;
        Ok(RESET_ACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{ChartKind, SpecSurface};
    use crate::generator::SampleGenerator;
    use crate::history::SEED_DAYS;
    use crate::score::Category;
    use crate::storage::MemoryStore;
    use rand::{rngs::StdRng, SeedableRng};
    use serde_json::json;

    type TestController = AnalysisController<MemoryStore, StdRng, SpecSurface>;

    /// Reads like an empty store and refuses every write.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        async fn set(&mut self, _key: &str, _value: String) -> Result<(), StoreError> {
            Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied).into())
        }

        async fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied).into())
        }
    }

    fn controller() -> TestController {
        let history = HistoryStore::new(
            MemoryStore::default(),
            SampleGenerator::new(StdRng::seed_from_u64(21)),
        );
        AnalysisController::new(history, RenderRegistry::new(SpecSurface::default()))
    }

    #[test]
    fn normalizes_numbers_strings_and_garbage() {
        assert_eq!(normalize_hours(Some(&json!(7.5))), 7.5);
        assert_eq!(normalize_hours(Some(&json!("4.1"))), 4.1);
        assert_eq!(normalize_hours(Some(&json!("  3h"))), 3.0);
        assert_eq!(normalize_hours(Some(&json!(".5"))), 0.5);
        assert_eq!(normalize_hours(Some(&json!("1e1"))), 10.0);
        assert_eq!(normalize_hours(Some(&json!("2e"))), 2.0);
        assert_eq!(normalize_hours(Some(&json!("abc"))), 0.0);
        assert_eq!(normalize_hours(Some(&json!(""))), 0.0);
        assert_eq!(normalize_hours(Some(&json!("-3"))), 0.0);
        assert_eq!(normalize_hours(Some(&json!(true))), 0.0);
        assert_eq!(normalize_hours(Some(&Value::Null)), 0.0);
        assert_eq!(normalize_hours(None), 0.0);
    }

    #[test]
    fn request_with_missing_fields_defaults_to_zero_and_low() {
        let request: AnalyzeRequest = serde_json::from_value(json!({ "sleep": "8" })).unwrap();
        let input = MetricsInput::from_request(&request);
        assert_eq!(
            input,
            MetricsInput {
                sleep: 8.0,
                study: 0.0,
                screen: 0.0,
                stress: StressLevel::Low,
            }
        );
    }

    #[test]
    fn out_of_range_numbers_and_odd_stress_still_parse() {
        let request: AnalyzeRequest = serde_json::from_str(
            r#"{"sleep":1e999,"study":"4","screen":-1e999,"stress":2}"#,
        )
        .unwrap();
        let input = MetricsInput::from_request(&request);
        assert_eq!(
            input,
            MetricsInput {
                sleep: 0.0,
                study: 4.0,
                screen: 0.0,
                stress: StressLevel::Low,
            }
        );

        let request: AnalyzeRequest =
            serde_json::from_str(r#"{"stress":{"level":"High"}}"#).unwrap();
        assert_eq!(MetricsInput::from_request(&request).stress, StressLevel::Low);

        let request: AnalyzeRequest = serde_json::from_str(r#"{"stress":"High"}"#).unwrap();
        assert_eq!(MetricsInput::from_request(&request).stress, StressLevel::High);
    }

    #[test]
    fn trend_view_parsing() {
        assert_eq!(TrendView::parse_lenient(Some("month")), TrendView::Month);
        assert_eq!(TrendView::parse_lenient(Some(" Month ")), TrendView::Month);
        assert_eq!(TrendView::parse_lenient(Some("week")), TrendView::Week);
        assert_eq!(TrendView::parse_lenient(Some("year")), TrendView::Week);
        assert_eq!(TrendView::parse_lenient(None), TrendView::Week);
        assert_eq!(TrendView::Month.days(), 30);
    }

    #[tokio::test]
    async fn demo_sample_end_to_end() {
        let mut controller = controller();
        let now = DateTime::parse_from_rfc3339("2026-01-05T09:30:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let analysis = controller.analyze_at(DEMO_INPUT, now).await.unwrap();
        assert_eq!(analysis.score, 73);
        assert_eq!(analysis.category, Category::Average);
        assert_eq!(analysis.category_label, "🙂 Average");

        let log = controller.history().load().await.unwrap().unwrap();
        assert_eq!(log.len(), SEED_DAYS + 1);
        let last = log.last().unwrap();
        assert_eq!(last.date(), "2026-01-05T09:30:00.000Z");
        assert_eq!(last.score(), 73);
        assert_eq!(last.stress_level(), StressLevel::Medium);

        let overview = controller.charts().current(CanvasTarget::Overview).unwrap();
        assert_eq!(overview.spec.kind, ChartKind::Bar);
        assert_eq!(overview.spec.datasets[0].values, vec![7.2, 4.1, 3.0]);
        assert!(controller.charts().current(CanvasTarget::Budget).is_some());
    }

    #[tokio::test]
    async fn failed_save_leaves_charts_untouched() {
        let history = HistoryStore::new(
            ReadOnlyStore,
            SampleGenerator::new(StdRng::seed_from_u64(4)),
        );
        let mut controller =
            AnalysisController::new(history, RenderRegistry::new(SpecSurface::default()));

        assert!(controller.analyze_sample().await.is_err());
        assert!(controller.charts().current(CanvasTarget::Overview).is_none());
        assert!(controller.charts().current(CanvasTarget::Budget).is_none());
        assert_eq!(controller.charts().surface().live(), 0);
    }

    #[tokio::test]
    async fn month_view_reads_thirty_days_of_history() {
        let mut controller = controller();
        for _ in 0..40 {
            controller.analyze_sample().await.unwrap();
        }

        let trend = controller.show_trend(TrendView::Month).await.unwrap();
        assert_eq!(trend.spec.labels.len(), 30);
        assert!(trend.spec.datasets[0].values.iter().all(|score| *score == 73.0));
    }

    #[tokio::test]
    async fn reset_acknowledges_and_redraws_week() {
        let mut controller = controller();
        controller.init().await.unwrap();
        controller.analyze_sample().await.unwrap();

        let ack = controller.reset().await.unwrap();
        assert_eq!(ack, RESET_ACK);
        assert_eq!(controller.history().load().await.unwrap(), None);

        let trend = controller.charts().current(CanvasTarget::Trend).unwrap();
        assert_eq!(trend.spec.labels.len(), 7);
        assert_eq!(controller.charts().surface().live(), 3);
    }
}
