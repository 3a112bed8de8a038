//! Offline construction of the Bessel-ratio inversion spline.
//!
//! The map `κ ↦ A(κ) = I1(κ)/I0(κ)` is sampled on a log-spaced grid and a natural
//! cubic spline is fitted through `(A(κ_i), ln κ_i)`. The resulting [`SplineTable`]
//! is what `mixtape-spline-table` prints into `src/inv_bessel_table.rs`; nothing on
//! the fitting path calls into this module.

use crate::config::SplineConfig;
use crate::errors::{MixtapeError, MixtapeResult};
use crate::special::{bessel_i0e, bessel_i1e};
use std::fmt::Write as _;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Knots and second derivatives of a natural cubic spline.
///
/// `x` is strictly increasing; `second_derivs` is zero at both ends.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplineTable {
    /// Knot abscissae (Bessel ratios)
    pub x: Vec<f64>,
    /// Knot ordinates (ln κ)
    pub log_y: Vec<f64>,
    /// Second derivative of the spline at each knot
    pub second_derivs: Vec<f64>,
}

impl SplineTable {
    /// Assembles a table from raw arrays, checking lengths and ordering.
    pub fn from_parts(x: Vec<f64>, log_y: Vec<f64>, second_derivs: Vec<f64>) -> MixtapeResult<Self> {
        if x.len() < 2 {
            return Err(MixtapeError::configuration(
                "spline table",
                format!("needs at least 2 knots, got {}", x.len()),
            ));
        }
        for (name, len) in [("log_y", log_y.len()), ("second_derivs", second_derivs.len())] {
            if len != x.len() {
                return Err(MixtapeError::DimensionMismatch {
                    context: format!("spline table {}", name),
                    expected: x.len(),
                    actual: len,
                });
            }
        }
        check_strictly_increasing(&x)?;

        Ok(Self {
            x,
            log_y,
            second_derivs,
        })
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Renders the table as the Rust source of `inv_bessel_table.rs`.
    pub fn to_rust_source(&self, config: &SplineConfig) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "//! Natural cubic spline through `(I1(κ)/I0(κ), ln κ)` for the von Mises concentration."
        );
        let _ = writeln!(out, "//!");
        let _ = writeln!(
            out,
            "//! Generated by `mixtape-spline-table` with {} log-spaced knots over κ ∈ [{:e}, {}].",
            config.num_points, config.y_min, config.y_max
        );
        let _ = writeln!(
            out,
            "//! Regenerate with `cargo run --bin mixtape-spline-table > src/inv_bessel_table.rs`."
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "/// Number of knots in each table.");
        let _ = writeln!(out, "pub const INV_BESSEL_KNOTS: usize = {};", self.len());
        let _ = writeln!(out);
        let _ = writeln!(out, "/// Lower end of the fitted concentration range.");
        let _ = writeln!(out, "pub const INV_BESSEL_KAPPA_MIN: f64 = {:?};", config.y_min);
        let _ = writeln!(out);
        let _ = writeln!(out, "/// Upper end of the fitted concentration range.");
        let _ = writeln!(out, "pub const INV_BESSEL_KAPPA_MAX: f64 = {:?};", config.y_max);

        let arrays: [(&str, &str, &[f64]); 3] = [
            (
                "Knot abscissae: the Bessel ratio A(κ) = I1(κ)/I0(κ), strictly increasing.",
                "INV_BESSEL_X",
                &self.x,
            ),
            ("Knot ordinates: ln κ.", "INV_BESSEL_LOG_KAPPA", &self.log_y),
            (
                "Second derivatives of the spline at each knot (zero at both ends).",
                "INV_BESSEL_SECOND_DERIV",
                &self.second_derivs,
            ),
        ];
        for (doc, name, values) in arrays {
            let _ = writeln!(out);
            let _ = writeln!(out, "/// {}", doc);
            let _ = writeln!(out, "pub static {}: [f64; INV_BESSEL_KNOTS] = [", name);
            for chunk in values.chunks(3) {
                let line: Vec<String> = chunk.iter().map(|v| format!("{:?},", v)).collect();
                let _ = writeln!(out, "    {}", line.join(" "));
            }
            let _ = writeln!(out, "];");
        }
        out
    }
}

/// Samples the Bessel ratio on a log-spaced grid and fits the inversion spline.
#[derive(Debug, Clone, Default)]
pub struct SplineCoefficientBuilder {
    config: SplineConfig,
}

impl SplineCoefficientBuilder {
    pub fn new(config: SplineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SplineConfig {
        &self.config
    }

    /// Log-spaced concentrations `κ_i = 10^(log10 y_min + i·Δ)`.
    pub fn grid(&self) -> Vec<f64> {
        let n = self.config.num_points;
        let lo = self.config.y_min.log10();
        let hi = self.config.y_max.log10();
        let step = (hi - lo) / (n - 1) as f64;
        (0..n).map(|i| 10f64.powf(lo + i as f64 * step)).collect()
    }

    /// Builds the table.
    ///
    /// # Errors
    /// [`MixtapeError::ConfigurationError`] for an invalid grid, or when the sampled
    /// ratios are not strictly increasing.
    pub fn build(&self) -> MixtapeResult<SplineTable> {
        self.config.validate()?;

        let kappas = self.grid();
        let x: Vec<f64> = kappas
            .iter()
            .map(|&k| bessel_i1e(k) / bessel_i0e(k))
            .collect();
        check_strictly_increasing(&x)?;

        let log_y: Vec<f64> = kappas.iter().map(|k| k.ln()).collect();
        let second_derivs = natural_cubic_spline(&x, &log_y)?;

        log::debug!(
            "built Bessel-ratio spline with {} knots over [{:e}, {}]",
            x.len(),
            self.config.y_min,
            self.config.y_max
        );

        Ok(SplineTable {
            x,
            log_y,
            second_derivs,
        })
    }
}

/// Second derivatives of the natural cubic spline through `(x_i, y_i)`.
///
/// Solves the tridiagonal system by forward elimination and back substitution,
/// with `y''` fixed to zero at both endpoints.
pub fn natural_cubic_spline(x: &[f64], y: &[f64]) -> MixtapeResult<Vec<f64>> {
    let n = x.len();
    if y.len() != n {
        return Err(MixtapeError::DimensionMismatch {
            context: "natural_cubic_spline ordinates".to_string(),
            expected: n,
            actual: y.len(),
        });
    }
    if n < 3 {
        return Ok(vec![0.0; n]);
    }

    let mut y2 = vec![0.0; n];
    let mut u = vec![0.0; n];

    for i in 1..n - 1 {
        let sig = (x[i] - x[i - 1]) / (x[i + 1] - x[i - 1]);
        let p = sig * y2[i - 1] + 2.0;
        y2[i] = (sig - 1.0) / p;
        let d = (y[i + 1] - y[i]) / (x[i + 1] - x[i]) - (y[i] - y[i - 1]) / (x[i] - x[i - 1]);
        u[i] = (6.0 * d / (x[i + 1] - x[i - 1]) - sig * u[i - 1]) / p;
    }

    y2[n - 1] = 0.0;
    for k in (0..n - 1).rev() {
        y2[k] = y2[k] * y2[k + 1] + u[k];
    }

    Ok(y2)
}

fn check_strictly_increasing(x: &[f64]) -> MixtapeResult<()> {
    if let Some(i) = (1..x.len()).find(|&i| !(x[i] > x[i - 1])) {
        return Err(MixtapeError::configuration(
            "spline grid",
            format!(
                "knots are not strictly increasing at index {} ({} after {})",
                i,
                x[i],
                x[i - 1]
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn splint(table: &SplineTable, x: f64) -> f64 {
        let hi = table.x.partition_point(|&k| k <= x).min(table.len() - 1).max(1);
        let lo = hi - 1;
        let h = table.x[hi] - table.x[lo];
        let a = (table.x[hi] - x) / h;
        let b = (x - table.x[lo]) / h;
        a * table.log_y[lo]
            + b * table.log_y[hi]
            + ((a * a * a - a) * table.second_derivs[lo] + (b * b * b - b) * table.second_derivs[hi])
                * h
                * h
                / 6.0
    }

    #[test]
    fn test_natural_spline_reproduces_lines() {
        let x = [0.0, 0.5, 1.5, 2.0, 4.0];
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v - 1.0).collect();
        let y2 = natural_cubic_spline(&x, &y).unwrap();
        for v in y2 {
            assert_approx_eq!(v, 0.0, 1e-12);
        }
    }

    #[test]
    fn test_natural_spline_boundary_conditions() {
        let x: Vec<f64> = (0..20).map(|i| i as f64 * 0.3).collect();
        let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
        let y2 = natural_cubic_spline(&x, &y).unwrap();
        assert_eq!(y2[0], 0.0);
        assert_eq!(y2[19], 0.0);
        // Interior second derivatives approximate -sin(x)
        assert_approx_eq!(y2[10], -x[10].sin(), 0.05);
    }

    #[test]
    fn test_grid_endpoints() {
        let builder = SplineCoefficientBuilder::default();
        let grid = builder.grid();
        assert_eq!(grid.len(), 1024);
        assert_approx_eq!(grid[0], 1e-5, 1e-18);
        assert_approx_eq!(grid[1023], 700.0, 1e-9);
    }

    #[test]
    fn test_default_build_matches_shipped_table() {
        use crate::inv_bessel_table::{INV_BESSEL_LOG_KAPPA, INV_BESSEL_SECOND_DERIV, INV_BESSEL_X};

        let table = SplineCoefficientBuilder::default().build().unwrap();
        assert_eq!(table.len(), INV_BESSEL_X.len());
        for i in (0..table.len()).step_by(97) {
            assert_approx_eq!(table.x[i], INV_BESSEL_X[i], 1e-15);
            assert_approx_eq!(table.log_y[i], INV_BESSEL_LOG_KAPPA[i], 1e-12);
            assert_approx_eq!(
                table.second_derivs[i],
                INV_BESSEL_SECOND_DERIV[i],
                1e-6 * INV_BESSEL_SECOND_DERIV[i].abs().max(1.0)
            );
        }
    }

    #[test]
    fn test_coarse_grid_accuracy() {
        let config = SplineConfig {
            num_points: 256,
            y_min: 1e-3,
            y_max: 100.0,
        };
        let table = SplineCoefficientBuilder::new(config).build().unwrap();
        for &kappa in &[0.01, 0.3, 1.0, 4.2, 20.0, 75.0] {
            let ratio = crate::special::bessel_ratio(kappa);
            assert!((splint(&table, ratio) - kappa.ln()).abs() < 1e-3, "κ = {}", kappa);
        }
    }

    #[test]
    fn test_invalid_grid_is_configuration_error() {
        let config = SplineConfig {
            num_points: 2,
            ..SplineConfig::default()
        };
        assert!(matches!(
            SplineCoefficientBuilder::new(config).build(),
            Err(MixtapeError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_from_parts_rejects_unsorted_knots() {
        let result = SplineTable::from_parts(vec![0.1, 0.3, 0.2], vec![0.0; 3], vec![0.0; 3]);
        assert!(matches!(result, Err(MixtapeError::ConfigurationError { .. })));

        let result = SplineTable::from_parts(vec![0.1, 0.2], vec![0.0; 3], vec![0.0; 2]);
        assert!(matches!(result, Err(MixtapeError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_rust_source_round_trips_values() {
        let config = SplineConfig {
            num_points: 8,
            y_min: 0.1,
            y_max: 10.0,
        };
        let table = SplineCoefficientBuilder::new(config).build().unwrap();
        let source = table.to_rust_source(&config);
        assert!(source.contains("pub const INV_BESSEL_KNOTS: usize = 8;"));
        assert!(source.contains("pub static INV_BESSEL_SECOND_DERIV: [f64; INV_BESSEL_KNOTS] = ["));
        assert!(source.contains(&format!("{:?},", table.x[3])));
    }
}
