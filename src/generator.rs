use crate::models::DailySample;
use crate::score::StressLevel;
use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Synthetic daily samples for the empty state: smooth baselines with bounded
/// jitter drawn from the injected random source.
#[derive(Debug, Clone)]
pub struct SampleGenerator<R> {
    rng: R,
}

impl<R: Rng> SampleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// `days` consecutive samples, oldest first, the last one dated `today`.
    pub fn generate(&mut self, days: usize, today: NaiveDate) -> Vec<DailySample> {
        let mut samples = Vec::with_capacity(days);
        for index in 0..days {
            let date = today - Duration::days((days - 1 - index) as i64);
            let phase = index as f64 / 2.0;

            let sleep = round1(6.0 + phase.sin() * 0.8 + self.uniform() * 0.8);
            let study = round1(2.0 + phase.cos().abs() * 2.0 + self.uniform());
            let screen = round1(3.0 + self.uniform() * 3.0);
            let stress = self.stress();

            samples.push(DailySample::new(
                date.format("%Y-%m-%d").to_string(),
                sleep,
                study,
                screen,
                stress,
            ));
        }
        samples
    }

    // One draw against the 0.7 / 0.4 thresholds: 30% High, 30% Medium, 40% Low.
    fn stress(&mut self) -> StressLevel {
        let draw = self.uniform();
        if draw > 0.7 {
            StressLevel::High
        } else if draw > 0.4 {
            StressLevel::Medium
        } else {
            StressLevel::Low
        }
    }

    fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::compute_score;
    use rand::{rngs::StdRng, SeedableRng};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    #[test]
    fn generates_consecutive_days_ending_today() {
        let mut generator = SampleGenerator::new(StdRng::seed_from_u64(7));
        let samples = generator.generate(7, today());

        assert_eq!(samples.len(), 7);
        assert_eq!(samples.first().unwrap().date(), "2025-12-30");
        assert_eq!(samples.last().unwrap().date(), "2026-01-05");
    }

    #[test]
    fn same_seed_same_samples() {
        let first = SampleGenerator::new(StdRng::seed_from_u64(42)).generate(30, today());
        let second = SampleGenerator::new(StdRng::seed_from_u64(42)).generate(30, today());
        assert_eq!(first, second);
    }

    #[test]
    fn values_stay_inside_jitter_bounds() {
        let mut generator = SampleGenerator::new(StdRng::seed_from_u64(3));
        for sample in generator.generate(90, today()) {
            assert!((5.2..=7.6).contains(&sample.sleep_hours()), "{sample:?}");
            assert!((2.0..=5.0).contains(&sample.study_hours()), "{sample:?}");
            assert!((3.0..=6.0).contains(&sample.screen_hours()), "{sample:?}");
            assert_eq!(
                sample.score(),
                compute_score(
                    sample.sleep_hours(),
                    sample.study_hours(),
                    sample.screen_hours(),
                    sample.stress_level(),
                )
            );
        }
    }

    #[test]
    fn zero_days_is_empty() {
        let mut generator = SampleGenerator::new(StdRng::seed_from_u64(1));
        assert!(generator.generate(0, today()).is_empty());
    }

    #[test]
    fn stress_distribution_roughly_matches_thresholds() {
        let mut generator = SampleGenerator::new(StdRng::seed_from_u64(99));
        let draws = 10_000;
        let mut high = 0;
        let mut medium = 0;
        for _ in 0..draws {
            match generator.stress() {
                StressLevel::High => high += 1,
                StressLevel::Medium => medium += 1,
                StressLevel::Low => {}
            }
        }
        let high = high as f64 / draws as f64;
        let medium = medium as f64 / draws as f64;
        assert!((high - 0.3).abs() < 0.03, "high share {high}");
        assert!((medium - 0.3).abs() < 0.03, "medium share {medium}");
    }
}
