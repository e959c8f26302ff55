//! Arrival-date estimation for the catastrophe clock.
//!
//! Each estimator fits a straight line to a public time series and
//! extrapolates to the point where it crosses a threshold:
//! total reservoir storage reaching zero, or global mean sea level
//! reaching the elevation of Miami.

pub mod error;
pub mod regression;
pub mod sea_level;
pub mod stations;
pub mod storage;

pub use error::{ForecastError, Result};
pub use regression::LinearFit;
