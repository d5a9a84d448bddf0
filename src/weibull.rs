//! Weibull curve sampling for the interactive explorer.
//!
//! Everything here is closed-form: given shape (beta) and scale (eta), the
//! reliability and hazard functions are evaluated over a fixed time grid.
//!
//! ```text
//! R(t)      = exp(-(t/eta)^beta)
//! lambda(t) = (beta/eta) * (t/eta)^(beta-1)
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Number of points in a sampled series.
pub const SAMPLE_COUNT: usize = 50;

/// Spacing of the time grid, in hours.
pub const TIME_STEP: f64 = 20.0;

/// Shape and scale parameters of a Weibull distribution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeibullParams {
    /// Shape parameter (beta). Governs the failure-rate trend.
    pub shape: f64,
    /// Scale parameter (eta). Characteristic life: the time at which
    /// roughly 63.2 % of units have failed.
    pub scale: f64,
}

impl WeibullParams {
    /// Interactive range for the shape slider.
    pub const SHAPE_RANGE: RangeInclusive<f64> = 0.5..=5.0;
    /// Interactive range for the scale slider.
    pub const SCALE_RANGE: RangeInclusive<f64> = 500.0..=2000.0;
}

impl Default for WeibullParams {
    fn default() -> Self {
        Self {
            shape: 2.0,
            scale: 1000.0,
        }
    }
}

/// One evaluated point of the curve.
///
/// `reliability_pct` is rounded to 2 decimals, `hazard_rate` to 4, matching
/// what the charts and exports display.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Time in hours.
    pub time: f64,
    /// Survival probability at `time`, as a percentage in [0, 100].
    pub reliability_pct: f64,
    /// Instantaneous failure rate at `time`, conditional on survival.
    pub hazard_rate: f64,
}

/// A full sampled curve: exactly [`SAMPLE_COUNT`] points, time-ascending,
/// regenerated wholesale whenever a parameter changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleSeries {
    pub points: Vec<SamplePoint>,
}

impl SampleSeries {
    /// (time, reliability %) pairs for plotting, non-finite values removed.
    pub fn reliability_points(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .filter(|p| p.reliability_pct.is_finite())
            .map(|p| [p.time, p.reliability_pct])
            .collect()
    }

    /// (time, hazard rate) pairs for plotting, non-finite values removed.
    ///
    /// For beta < 1 the hazard is singular at t = 0 and the sampler stores
    /// the resulting infinity; plots must not see it.
    pub fn hazard_points(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .filter(|p| p.hazard_rate.is_finite())
            .map(|p| [p.time, p.hazard_rate])
            .collect()
    }
}

/// Closed-form Weibull reliability/hazard evaluation.
///
/// The constructor performs no validation: the interactive sliders already
/// constrain beta and eta, and out-of-range inputs simply produce whatever
/// the formulas yield (including non-finite values).
#[derive(Clone, Copy, Debug)]
pub struct WeibullCurve {
    shape: f64,
    scale: f64,
}

impl WeibullCurve {
    pub fn new(shape: f64, scale: f64) -> Self {
        Self { shape, scale }
    }

    /// Survival probability R(t) = exp(-(t/eta)^beta), in [0, 1].
    pub fn reliability(&self, t: f64) -> f64 {
        let z = t / self.scale;
        (-z.powf(self.shape)).exp()
    }

    /// Hazard rate lambda(t) = (beta/eta) * (t/eta)^(beta-1).
    ///
    /// Evaluated directly, without special-casing t = 0: for beta > 1 the
    /// limit is 0, for beta = 1 it is the constant 1/eta, and for beta < 1
    /// IEEE arithmetic yields +inf. Callers tolerate the single non-finite
    /// point instead of this function inventing a value for it.
    pub fn hazard_rate(&self, t: f64) -> f64 {
        let z = t / self.scale;
        (self.shape / self.scale) * z.powf(self.shape - 1.0)
    }

    /// Samples the curve over the fixed grid t = 0, 20, ..., 980.
    pub fn sample_series(&self) -> SampleSeries {
        let points = (0..SAMPLE_COUNT)
            .map(|i| {
                let t = i as f64 * TIME_STEP;
                SamplePoint {
                    time: t,
                    reliability_pct: round_to(self.reliability(t) * 100.0, 2),
                    hazard_rate: round_to(self.hazard_rate(t), 4),
                }
            })
            .collect();
        SampleSeries { points }
    }
}

/// Samples a full series from the given parameters.
pub fn sample_series(params: WeibullParams) -> SampleSeries {
    WeibullCurve::new(params.shape, params.scale).sample_series()
}

/// Caption for the failure-rate trend implied by the shape parameter.
pub fn trend_label(shape: f64) -> &'static str {
    if shape < 1.0 {
        "Decreasing failure rate (infant mortality)"
    } else if shape > 1.0 {
        "Increasing failure rate (wear-out)"
    } else {
        "Constant failure rate (random failures)"
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn series_covers_the_fixed_grid() {
        let series = sample_series(WeibullParams::default());
        assert_eq!(series.points.len(), SAMPLE_COUNT);
        for (i, p) in series.points.iter().enumerate() {
            assert_eq!(p.time, i as f64 * TIME_STEP, "grid point {i}");
        }
        assert_eq!(series.points.last().map(|p| p.time), Some(980.0));
    }

    #[test]
    fn reliability_starts_at_one_hundred_percent() {
        for shape in [0.5, 1.0, 2.0, 5.0] {
            let series = sample_series(WeibullParams {
                shape,
                scale: 1000.0,
            });
            assert_eq!(
                series.points[0].reliability_pct, 100.0,
                "R(0) must be 100 % for beta = {shape}"
            );
        }
    }

    #[test]
    fn reliability_is_monotonic_decay() {
        for (shape, scale) in [(0.5, 500.0), (1.0, 1000.0), (3.5, 2000.0)] {
            let series = sample_series(WeibullParams { shape, scale });
            for w in series.points.windows(2) {
                assert!(
                    w[1].reliability_pct <= w[0].reliability_pct,
                    "decay violated at t = {} for beta = {shape}: {} > {}",
                    w[1].time,
                    w[1].reliability_pct,
                    w[0].reliability_pct
                );
            }
        }
    }

    #[test]
    fn unit_shape_gives_constant_hazard() {
        // beta = 1 collapses to the exponential: lambda(t) = 1/eta everywhere,
        // including t = 0 where (t/eta)^0 evaluates to 1.
        let series = sample_series(WeibullParams {
            shape: 1.0,
            scale: 1000.0,
        });
        for p in &series.points {
            assert_eq!(p.hazard_rate, 0.001, "hazard at t = {}", p.time);
        }
    }

    #[test]
    fn wear_out_hazard_increases_strictly() {
        let curve = WeibullCurve::new(2.0, 1000.0);
        let mut prev = curve.hazard_rate(0.0);
        assert_eq!(prev, 0.0);
        for i in 1..SAMPLE_COUNT {
            let h = curve.hazard_rate(i as f64 * TIME_STEP);
            assert!(h > prev, "hazard not increasing at point {i}");
            prev = h;
        }
    }

    #[test]
    fn infant_mortality_hazard_decreases_strictly() {
        let curve = WeibullCurve::new(0.5, 1000.0);
        assert!(curve.hazard_rate(0.0).is_infinite());
        let mut prev = f64::INFINITY;
        for i in 1..SAMPLE_COUNT {
            let h = curve.hazard_rate(i as f64 * TIME_STEP);
            assert!(h < prev, "hazard not decreasing at point {i}");
            assert!(h > 0.0);
            prev = h;
        }
    }

    #[test]
    fn rayleigh_reference_values() {
        // beta = 2, eta = 1000: R(eta) = exp(-1) = 36.79 % once rounded.
        let curve = WeibullCurve::new(2.0, 1000.0);
        let expected = (-1.0f64).exp();
        assert!(
            (curve.reliability(1000.0) - expected).abs() < 1e-12,
            "R(eta) should equal exp(-1)"
        );
        assert_eq!(round_to(curve.reliability(1000.0) * 100.0, 2), 36.79);

        // Last grid point at t = 980.
        let series = curve.sample_series();
        assert_eq!(series.points[49].reliability_pct, 38.27);
    }

    #[test]
    fn identical_inputs_give_bit_identical_series() {
        for shape in [0.5, 1.0, 2.7] {
            let params = WeibullParams {
                shape,
                scale: 1234.0,
            };
            assert_eq!(
                sample_series(params),
                sample_series(params),
                "sampler must be deterministic for beta = {shape}"
            );
        }
    }

    #[test]
    fn plot_points_drop_the_singular_hazard() {
        let series = sample_series(WeibullParams {
            shape: 0.5,
            scale: 1000.0,
        });
        assert!(series.points[0].hazard_rate.is_infinite());
        assert_eq!(series.hazard_points().len(), SAMPLE_COUNT - 1);
        assert_eq!(series.reliability_points().len(), SAMPLE_COUNT);
    }

    #[test]
    fn trend_labels_split_on_unit_shape() {
        assert!(trend_label(0.5).contains("Decreasing"));
        assert!(trend_label(1.0).contains("Constant"));
        assert!(trend_label(1.1).contains("Increasing"));
    }

    proptest! {
        #[test]
        fn series_invariants_hold_across_slider_ranges(
            shape in 0.5f64..=5.0,
            scale in 500.0f64..=2000.0,
        ) {
            let series = sample_series(WeibullParams { shape, scale });
            prop_assert_eq!(series.points.len(), SAMPLE_COUNT);
            prop_assert_eq!(series.points[0].reliability_pct, 100.0);
            for w in series.points.windows(2) {
                prop_assert!(w[1].time > w[0].time);
                prop_assert!(w[1].reliability_pct <= w[0].reliability_pct);
            }
            for p in series.points.iter().skip(1) {
                prop_assert!(p.hazard_rate.is_finite() && p.hazard_rate >= 0.0);
                prop_assert!((0.0..=100.0).contains(&p.reliability_pct));
            }
        }
    }
}
