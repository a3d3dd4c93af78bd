//! Property tests for the stability monitor

use balance_core::calibration::DEFAULT_CALIBRATION_SAMPLES;
use balance_core::{Classification, MonitorState, Sample, StabilityMonitor};
use proptest::prelude::*;

fn sample_strategy() -> impl Strategy<Value = Sample> {
    (-20.0f32..20.0, -20.0f32..20.0, -20.0f32..20.0).prop_map(|(x, y, z)| Sample::new(x, y, z))
}

/// Values on a 0.25 grid sum exactly in f32, so the mean is exact
fn grid_value() -> impl Strategy<Value = f32> {
    (-48i16..=48).prop_map(|v| v as f32 / 4.0)
}

proptest! {
    #[test]
    fn replay_is_deterministic(samples in prop::collection::vec(sample_strategy(), 0..80)) {
        let mut first = StabilityMonitor::new();
        let mut second = StabilityMonitor::new();

        let a: Vec<Classification> = samples.iter().map(|s| first.ingest(*s)).collect();
        let b: Vec<Classification> = samples.iter().map(|s| second.ingest(*s)).collect();

        prop_assert_eq!(a, b);
        prop_assert_eq!(first.baseline(), second.baseline());
    }

    #[test]
    fn calibration_window_reports_calibrating(
        samples in prop::collection::vec(sample_strategy(), DEFAULT_CALIBRATION_SAMPLES)
    ) {
        let mut monitor = StabilityMonitor::new();

        for (i, sample) in samples.iter().enumerate() {
            prop_assert_eq!(monitor.ingest(*sample), Classification::Calibrating);
            prop_assert_eq!(monitor.is_calibrated(), i + 1 == DEFAULT_CALIBRATION_SAMPLES);
        }
        prop_assert_eq!(monitor.state(), MonitorState::Calibrated);
    }

    #[test]
    fn constant_window_gives_exact_baseline(x in grid_value(), y in grid_value(), z in grid_value()) {
        let mut monitor = StabilityMonitor::new();
        let still = Sample::new(x, y, z);

        for _ in 0..DEFAULT_CALIBRATION_SAMPLES {
            monitor.ingest(still);
        }

        let baseline = monitor.baseline().expect("calibrated after full window");
        prop_assert_eq!(baseline.as_sample(), still);
        prop_assert_eq!(monitor.ingest(still), Classification::Balanced);
    }

    #[test]
    fn baseline_lies_within_window(samples in prop::collection::vec(sample_strategy(), DEFAULT_CALIBRATION_SAMPLES)) {
        let mut monitor = StabilityMonitor::new();
        for sample in &samples {
            monitor.ingest(*sample);
        }

        let baseline = monitor.baseline().expect("calibrated after full window");
        let min_x = samples.iter().map(|s| s.x).fold(f32::INFINITY, f32::min);
        let max_x = samples.iter().map(|s| s.x).fold(f32::NEG_INFINITY, f32::max);
        prop_assert!(baseline.mean_x() >= min_x - 1e-3 && baseline.mean_x() <= max_x + 1e-3);
    }

    #[test]
    fn calibrated_output_is_never_calibrating(
        window in prop::collection::vec(sample_strategy(), DEFAULT_CALIBRATION_SAMPLES),
        live in prop::collection::vec(sample_strategy(), 1..40)
    ) {
        let mut monitor = StabilityMonitor::new();
        for sample in &window {
            monitor.ingest(*sample);
        }

        for sample in &live {
            let classification = monitor.ingest(*sample);
            prop_assert_ne!(classification, Classification::Calibrating);
            prop_assert_eq!(monitor.samples_collected(), DEFAULT_CALIBRATION_SAMPLES);
        }
    }
}
