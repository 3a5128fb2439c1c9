use ndarray::{s, Array1, ArrayView1};

use crate::radar::RadarVolume;

/// Index of the axis value closest to `value` (minimum absolute
/// difference). Ties go to the lowest index.
///
/// This is a plain linear scan: the store does not guarantee sorted
/// axes, and radar grids are small enough that a binary search would
/// buy nothing while silently assuming sortedness.
pub fn nearest_index(axis: &Array1<f64>, value: f64) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, &v) in axis.iter().enumerate() {
        let distance = (v - value).abs();
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

fn within_envelope(axis: &Array1<f64>, value: f64) -> bool {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in axis.iter() {
        min = min.min(v);
        max = max.max(v);
    }
    value >= min && value <= max
}

impl RadarVolume {
    /// Reflectivity profile over all altitude levels at the grid point
    /// nearest to `(longitude, latitude)`, aligned with `altitudes`.
    ///
    /// Returns `None` when the point lies strictly outside the closed
    /// envelope of either horizontal axis; that is a "no coverage"
    /// signal, not an error.
    pub fn profile_at(&self, longitude: f64, latitude: f64) -> Option<ArrayView1<'_, f64>> {
        if !within_envelope(&self.longitudes, longitude)
            || !within_envelope(&self.latitudes, latitude)
        {
            return None;
        }
        let y = nearest_index(&self.latitudes, latitude);
        let x = nearest_index(&self.longitudes, longitude);
        Some(self.values.slice(s![y, x, ..]))
    }

    /// Reflectivity at the grid point nearest to `(longitude, latitude)`
    /// and the altitude level nearest to `altitude`. Same envelope rule
    /// as [`RadarVolume::profile_at`].
    pub fn value_at(&self, longitude: f64, latitude: f64, altitude: f64) -> Option<f64> {
        let profile = self.profile_at(longitude, latitude)?;
        let z = nearest_index(&self.altitudes, altitude);
        profile.get(z).copied()
    }
}
