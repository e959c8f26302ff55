//! Ordinary least-squares line fit.

use crate::error::{ForecastError, Result};

/// `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Least-squares fit of `ys` against `xs`.
    ///
    /// Sums are taken around the means so large x values (day ordinals,
    /// calendar years) keep their precision.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(ForecastError::MismatchedSeries {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(ForecastError::InsufficientPoints { found: xs.len() });
        }

        let n = xs.len() as f64;
        let mean_x = xs.iter().sum::<f64>() / n;
        let mean_y = ys.iter().sum::<f64>() / n;

        let (sxx, sxy) = xs
            .iter()
            .zip(ys)
            .fold((0.0, 0.0), |(sxx, sxy), (x, y)| {
                let dx = x - mean_x;
                (sxx + dx * dx, sxy + dx * (y - mean_y))
            });

        if sxx == 0.0 {
            return Err(ForecastError::Degenerate("all x values are equal"));
        }

        let slope = sxy / sxx;
        Ok(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// The x at which the line reaches `y`.
    pub fn solve(&self, y: f64) -> Result<f64> {
        if self.slope == 0.0 {
            return Err(ForecastError::Degenerate("flat line never reaches target"));
        }
        Ok((y - self.intercept) / self.slope)
    }
}
