use std::fmt::{self, Display, Formatter};

use ndarray::ArrayD;
use tracing::debug;

use crate::{
    error::{RainquestError, StoreError},
    store::DataStore,
};

/// Level filters for a rain-gauge series read.
///
/// `None` at a calendar level enumerates every subgroup at that level,
/// in the store's enumeration order. `minute` is positional: it selects
/// the single row at index `minute / 5` of the already-collected rows,
/// which assumes exactly one row per 5-minute interval in arrival order
/// (not validated).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RainFilter<'a> {
    pub year: Option<&'a str>,
    pub month: Option<&'a str>,
    pub day: Option<&'a str>,
    pub hour: Option<&'a str>,
    pub minute: Option<u32>,
}

/// One rain-gauge observation: timestamp and the 5-minute rain sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainRecord {
    /// Seconds since the epoch, UTC.
    pub utc: f64,
    pub rs_05: f64,
}

/// An ordered rain-gauge observation table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RainSeries {
    records: Vec<RainRecord>,
}

impl RainSeries {
    pub fn records(&self) -> &[RainRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RainSeries {
    type Item = &'a RainRecord;
    type IntoIter = std::slice::Iter<'a, RainRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Display for RainSeries {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "{:>14} {:>10}", "utc", "RS_05")?;
        for record in &self.records {
            writeln!(f, "{:>14.0} {:>10.2}", record.utc, record.rs_05)?;
        }
        Ok(())
    }
}

/// Read the filtered observation table for one rain station.
///
/// Walks `/{station}/year/month/day/hour`; each terminal hour group must
/// hold parallel `utc` and `RS_05` datasets, whose rows are zipped in
/// arrival order.
pub fn read_rain_series<S: DataStore>(
    store: &S,
    station: &str,
    filter: &RainFilter<'_>,
) -> Result<RainSeries, RainquestError> {
    let station_group = format!("/{station}");
    if !store.contains_group(&station_group) {
        return Err(StoreError::MissingGroup(station_group).into());
    }

    let levels = [filter.year, filter.month, filter.day, filter.hour];
    let mut records = Vec::new();
    collect(store, &station_group, &levels, &mut records)?;
    debug!(station, rows = records.len(), "collected rain series");

    if let Some(minute) = filter.minute {
        let row = (minute / 5) as usize;
        records = records.get(row).copied().into_iter().collect();
    }

    Ok(RainSeries { records })
}

fn collect<S: DataStore>(
    store: &S,
    group: &str,
    levels: &[Option<&str>],
    out: &mut Vec<RainRecord>,
) -> Result<(), RainquestError> {
    match levels.split_first() {
        None => {
            let utc = flatten(store.read_floats(&format!("{group}/utc"))?);
            let rs_05 = flatten(store.read_floats(&format!("{group}/RS_05"))?);
            out.extend(
                utc.into_iter()
                    .zip(rs_05)
                    .map(|(utc, rs_05)| RainRecord { utc, rs_05 }),
            );
            Ok(())
        }
        Some((Some(name), rest)) => {
            let child = format!("{group}/{name}");
            if !store.contains_group(&child) {
                return Err(StoreError::MissingGroup(child).into());
            }
            collect(store, &child, rest, out)
        }
        Some((None, rest)) => {
            for name in store.group_names(group)? {
                collect(store, &format!("{group}/{name}"), rest, out)?;
            }
            Ok(())
        }
    }
}

fn flatten(array: ArrayD<f64>) -> Vec<f64> {
    array.into_iter().collect()
}
