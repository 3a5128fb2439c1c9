use ndarray::{s, Array1, Array3, ArrayD, Ix2};
use tracing::debug;

use crate::{
    error::{RainquestError, StoreError},
    store::DataStore,
    time::AcquisitionTime,
};

/// Geographic position of a radar site, invariant across acquisitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarPosition {
    pub longitude: f64,
    pub latitude: f64,
    pub elevation: f64,
}

/// How the altitude dimension of a reconstructed volume is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AltitudeMode {
    /// The volume spans the radar's full altitude catalog; the shared
    /// `zAxis_index` set scatters value rows onto catalog levels.
    #[default]
    Full,
    /// The altitude axis is reduced to the levels named by the
    /// acquisition's `zAxis_index`; value columns are written whole.
    ValidOnly,
}

/// A dense reflectivity volume reconstructed from one acquisition,
/// together with its coordinate axes.
///
/// `values` is indexed `[latitude-row, longitude-column, altitude-depth]`
/// and NaN-filled wherever the acquisition carried no data. Dimension 0
/// is sized by `latitudes` but populated from the on-disk `Axis2_index`
/// array; queries address it with the latitude axis. Callers must not
/// transpose.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarVolume {
    pub values: Array3<f64>,
    /// Axis1 of the radar grid.
    pub latitudes: Array1<f64>,
    /// Axis2 of the radar grid.
    pub longitudes: Array1<f64>,
    /// Effective altitude axis: the full catalog in `AltitudeMode::Full`,
    /// the reduced per-acquisition catalog in `AltitudeMode::ValidOnly`.
    pub altitudes: Array1<f64>,
    /// Acquisition timestamp, seconds since the epoch, UTC.
    pub utc: f64,
    pub position: RadarPosition,
}

/// Reconstruct the dense reflectivity volume for a single acquisition.
///
/// The radar group `/{radar}` must hold `Axis1`, `Axis2` and `zAxis`
/// datasets and the `radar_latitude`/`radar_longitude`/`radar_elevation`
/// attributes; the acquisition group `/{radar}/{time}` must hold
/// `Axis1_index`, `Axis2_index`, `zAxis_index` and `zAxis_values`
/// datasets and a `UTC` attribute. The store is only read; the same
/// store state always yields a bit-identical volume.
pub fn read_radar_volume<S: DataStore>(
    store: &S,
    radar: &str,
    time: &AcquisitionTime<'_>,
    mode: AltitudeMode,
) -> Result<RadarVolume, RainquestError> {
    let radar_group = format!("/{radar}");
    if !store.contains_group(&radar_group) {
        return Err(StoreError::MissingGroup(radar_group).into());
    }

    let latitudes = flatten_floats(store.read_floats(&format!("{radar_group}/Axis1"))?);
    let longitudes = flatten_floats(store.read_floats(&format!("{radar_group}/Axis2"))?);
    let altitude_catalog = flatten_floats(store.read_floats(&format!("{radar_group}/zAxis"))?);

    let position = RadarPosition {
        longitude: scalar_attr(store, &radar_group, "radar_longitude")?,
        latitude: scalar_attr(store, &radar_group, "radar_latitude")?,
        elevation: scalar_attr(store, &radar_group, "radar_elevation")?,
    };

    let acq_group = format!("{radar_group}/{time}");
    if !store.contains_group(&acq_group) {
        return Err(StoreError::MissingGroup(acq_group).into());
    }

    let x_indices = flatten_ints(store.read_ints(&format!("{acq_group}/Axis2_index"))?);
    let y_indices = flatten_ints(store.read_ints(&format!("{acq_group}/Axis1_index"))?);
    let level_indices = store.read_ints(&format!("{acq_group}/zAxis_index"))?;
    let values = store
        .read_floats(&format!("{acq_group}/zAxis_values"))?
        .into_dimensionality::<Ix2>()
        .map_err(|_| {
            RainquestError::MalformedAcquisition("zAxis_values must be two-dimensional".to_owned())
        })?;
    let utc = scalar_attr(store, &acq_group, "UTC")?;

    let columns = x_indices.len();
    if y_indices.len() != columns || values.ncols() != columns {
        return Err(RainquestError::MalformedAcquisition(format!(
            "column counts disagree: {} Axis2 indices, {} Axis1 indices, {} value columns",
            columns,
            y_indices.len(),
            values.ncols()
        )));
    }

    // The effective altitude axis, and for `Full` the decoded catalog
    // slot of each value row.
    let (altitudes, scatter_slots) = match mode {
        AltitudeMode::ValidOnly => {
            let shared = shared_level_indices(&level_indices)?;
            let slots = decode_indices(&shared, altitude_catalog.len(), "zAxis")?;
            if values.nrows() != slots.len() {
                return Err(RainquestError::MalformedAcquisition(format!(
                    "{} value rows but {} valid altitude levels",
                    values.nrows(),
                    slots.len()
                )));
            }
            let altitudes: Array1<f64> = slots.iter().map(|&k| altitude_catalog[k]).collect();
            (altitudes, None)
        }
        AltitudeMode::Full => {
            let raw: Vec<i64> = level_indices.iter().copied().collect();
            let slots = decode_indices(&raw, altitude_catalog.len(), "zAxis")?;
            if values.nrows() != slots.len() {
                return Err(RainquestError::MalformedAcquisition(format!(
                    "{} value rows but {} altitude indices",
                    values.nrows(),
                    slots.len()
                )));
            }
            (altitude_catalog, Some(slots))
        }
    };

    let (lat_len, lon_len) = (latitudes.len(), longitudes.len());
    let mut volume = Array3::from_elem((lat_len, lon_len, altitudes.len()), f64::NAN);

    for idx in 0..columns {
        let x = decode_index(x_indices[idx], lat_len, "Axis1")?;
        let y = decode_index(y_indices[idx], lon_len, "Axis2")?;
        match &scatter_slots {
            Some(slots) => {
                for (row, &slot) in slots.iter().enumerate() {
                    volume[[x, y, slot]] = values[[row, idx]];
                }
            }
            None => volume.slice_mut(s![x, y, ..]).assign(&values.column(idx)),
        }
    }

    debug!(
        radar,
        columns,
        shape = ?volume.dim(),
        "reconstructed reflectivity volume"
    );

    Ok(RadarVolume {
        values: volume,
        latitudes,
        longitudes,
        altitudes,
        utc,
        position,
    })
}

/// Decode a 1-based on-disk index into a 0-based offset into an axis of
/// length `len`.
pub(crate) fn decode_index(
    raw: i64,
    len: usize,
    axis: &'static str,
) -> Result<usize, RainquestError> {
    if raw >= 1 && (raw as usize) <= len {
        Ok((raw - 1) as usize)
    } else {
        Err(RainquestError::IndexOutOfRange {
            axis,
            index: raw,
            len,
        })
    }
}

fn decode_indices(
    raw: &[i64],
    len: usize,
    axis: &'static str,
) -> Result<Vec<usize>, RainquestError> {
    raw.iter().map(|&i| decode_index(i, len, axis)).collect()
}

/// Extract the single altitude index set shared by all columns.
///
/// `zAxis_index` may be stored flat or as one row per populated column;
/// 2-D inputs must repeat the same row, since the reduced altitude axis
/// is one catalog shared by the whole volume.
fn shared_level_indices(indices: &ArrayD<i64>) -> Result<Vec<i64>, RainquestError> {
    match indices.ndim() {
        0 | 1 => Ok(indices.iter().copied().collect()),
        2 => {
            let view = indices.view().into_dimensionality::<Ix2>().unwrap();
            let first: Vec<i64> = view.row(0).iter().copied().collect();
            for row in view.rows().into_iter().skip(1) {
                if row.iter().copied().ne(first.iter().copied()) {
                    return Err(RainquestError::MalformedAcquisition(
                        "altitude index set varies across columns".to_owned(),
                    ));
                }
            }
            Ok(first)
        }
        n => Err(RainquestError::MalformedAcquisition(format!(
            "zAxis_index has {n} dimensions, expected at most 2"
        ))),
    }
}

fn flatten_floats(array: ArrayD<f64>) -> Array1<f64> {
    array.into_iter().collect()
}

fn flatten_ints(array: ArrayD<i64>) -> Vec<i64> {
    array.into_iter().collect()
}

fn scalar_attr<S: DataStore>(
    store: &S,
    group: &str,
    name: &str,
) -> Result<f64, RainquestError> {
    let values = store.read_attr_floats(group, name)?;
    values.first().copied().ok_or_else(|| {
        RainquestError::MalformedAcquisition(format!("attribute {name} on {group} is empty"))
    })
}
