//! Readers for radar reflectivity volumes and rain-gauge time series
//! stored in hierarchical HDF5 files.
//!
//! Radar acquisitions are stored sparsely, as parallel 1-based index
//! arrays plus a value matrix; [`read_radar_volume`] reconstructs the
//! dense NaN-filled 3-D reflectivity volume and its coordinate axes, and
//! [`RadarVolume`] answers nearest-point profile and scalar queries.
//! [`read_rain_series`] assembles the filtered observation table of a
//! rain station from the same store layout.

mod error;
mod query;
mod radar;
mod rain;
mod store;
mod time;

#[cfg(test)]
mod testutil;

pub use crate::{error::*, query::*, radar::*, rain::*, store::*, time::*};
