#![allow(dead_code)]

use std::path::PathBuf;

use hdf5::Group;
use ndarray::{arr1, arr2};
use tempfile::TempDir;

/// A temporary HDF5 file; the directory is removed on drop.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

fn new_file(name: &str) -> (Fixture, hdf5::File) {
    let dir = TempDir::new().expect("failed to create a temporary directory");
    let path = dir.path().join(name);
    let file = hdf5::File::create(&path).expect("failed to create an HDF5 file");
    (Fixture { _dir: dir, path }, file)
}

fn nested_group(parent: &Group, path: &str) -> Group {
    let mut group = parent.clone();
    for part in path.split('/') {
        group = match group.group(part) {
            Ok(existing) => existing,
            Err(_) => group.create_group(part).expect("failed to create a group"),
        };
    }
    group
}

fn write_scalar_attr(group: &Group, name: &str, value: f64) {
    group
        .new_attr::<f64>()
        .shape(1)
        .create(name)
        .and_then(|attr| attr.write_raw(&[value]))
        .expect("failed to write an attribute");
}

/// Radar file with one acquisition of a single populated column:
/// Axis1 = Axis2 = [0, 1, 2], zAxis = [100, 200], column (1, 1)
/// carrying values [5.0, 7.0] on levels [1, 2], UTC 1688547600.
pub fn radar_file() -> Fixture {
    let (fixture, file) = new_file("radar.h5");

    let radar = file.create_group("BER").unwrap();
    radar
        .new_dataset_builder()
        .with_data(&arr1(&[0.0, 1.0, 2.0]))
        .create("Axis1")
        .unwrap();
    radar
        .new_dataset_builder()
        .with_data(&arr1(&[0.0, 1.0, 2.0]))
        .create("Axis2")
        .unwrap();
    radar
        .new_dataset_builder()
        .with_data(&arr1(&[100.0, 200.0]))
        .create("zAxis")
        .unwrap();
    write_scalar_attr(&radar, "radar_latitude", 46.9);
    write_scalar_attr(&radar, "radar_longitude", 7.4);
    write_scalar_attr(&radar, "radar_elevation", 550.0);

    let acq = nested_group(&radar, "2023/07/05/09/00");
    acq.new_dataset_builder()
        .with_data(&arr2(&[[1_i64]]))
        .create("Axis2_index")
        .unwrap();
    acq.new_dataset_builder()
        .with_data(&arr2(&[[1_i64]]))
        .create("Axis1_index")
        .unwrap();
    acq.new_dataset_builder()
        .with_data(&arr1(&[1_i64, 2]))
        .create("zAxis_index")
        .unwrap();
    acq.new_dataset_builder()
        .with_data(&arr2(&[[5.0], [7.0]]))
        .create("zAxis_values")
        .unwrap();
    write_scalar_attr(&acq, "UTC", 1_688_547_600.0);

    fixture
}

/// Radar file whose acquisition populates a strict subset of the
/// altitude catalog: zAxis = [100, 200, 300] but the shared index set
/// is [1, 3], leaving the middle level untouched.
pub fn gapped_altitude_radar_file() -> Fixture {
    let (fixture, file) = new_file("radar_gapped.h5");

    let radar = file.create_group("BER").unwrap();
    radar
        .new_dataset_builder()
        .with_data(&arr1(&[0.0, 1.0, 2.0]))
        .create("Axis1")
        .unwrap();
    radar
        .new_dataset_builder()
        .with_data(&arr1(&[0.0, 1.0, 2.0]))
        .create("Axis2")
        .unwrap();
    radar
        .new_dataset_builder()
        .with_data(&arr1(&[100.0, 200.0, 300.0]))
        .create("zAxis")
        .unwrap();
    write_scalar_attr(&radar, "radar_latitude", 46.9);
    write_scalar_attr(&radar, "radar_longitude", 7.4);
    write_scalar_attr(&radar, "radar_elevation", 550.0);

    let acq = nested_group(&radar, "2023/07/05/09/00");
    acq.new_dataset_builder()
        .with_data(&arr2(&[[2_i64]]))
        .create("Axis2_index")
        .unwrap();
    acq.new_dataset_builder()
        .with_data(&arr2(&[[1_i64]]))
        .create("Axis1_index")
        .unwrap();
    acq.new_dataset_builder()
        .with_data(&arr1(&[1_i64, 3]))
        .create("zAxis_index")
        .unwrap();
    acq.new_dataset_builder()
        .with_data(&arr2(&[[5.0], [7.0]]))
        .create("zAxis_values")
        .unwrap();
    write_scalar_attr(&acq, "UTC", 1_688_547_600.0);

    fixture
}

/// Radar file whose acquisition stores one `zAxis_index` row per column,
/// for the reduced-altitude reconstruction path. The altitude catalog
/// has four levels of which [2, 4] are populated.
pub fn valid_altitude_radar_file() -> Fixture {
    let (fixture, file) = new_file("radar_valid.h5");

    let radar = file.create_group("BER").unwrap();
    radar
        .new_dataset_builder()
        .with_data(&arr1(&[0.0, 1.0]))
        .create("Axis1")
        .unwrap();
    radar
        .new_dataset_builder()
        .with_data(&arr1(&[0.0, 1.0]))
        .create("Axis2")
        .unwrap();
    radar
        .new_dataset_builder()
        .with_data(&arr1(&[100.0, 200.0, 300.0, 400.0]))
        .create("zAxis")
        .unwrap();
    write_scalar_attr(&radar, "radar_latitude", 46.9);
    write_scalar_attr(&radar, "radar_longitude", 7.4);
    write_scalar_attr(&radar, "radar_elevation", 550.0);

    let acq = nested_group(&radar, "2023/07/05/09/00");
    acq.new_dataset_builder()
        .with_data(&arr2(&[[2_i64, 1]]))
        .create("Axis2_index")
        .unwrap();
    acq.new_dataset_builder()
        .with_data(&arr2(&[[1_i64, 2]]))
        .create("Axis1_index")
        .unwrap();
    acq.new_dataset_builder()
        .with_data(&arr2(&[[2_i64, 4], [2, 4]]))
        .create("zAxis_index")
        .unwrap();
    acq.new_dataset_builder()
        .with_data(&arr2(&[[5.0, 6.0], [7.0, 8.0]]))
        .create("zAxis_values")
        .unwrap();
    write_scalar_attr(&acq, "UTC", 1_688_547_600.0);

    fixture
}

/// Station file with three hour groups of three 5-minute rows each.
pub fn rain_file() -> Fixture {
    let (fixture, file) = new_file("rain.h5");

    let station = file.create_group("STA042").unwrap();
    for (day, hour, base) in [
        ("05", "09", 1_688_547_600.0),
        ("05", "10", 1_688_551_200.0),
        ("06", "09", 1_688_634_000.0),
    ] {
        let group = nested_group(&station, &format!("2023/07/{day}/{hour}"));
        group
            .new_dataset_builder()
            .with_data(&arr1(&[base, base + 300.0, base + 600.0]))
            .create("utc")
            .unwrap();
        group
            .new_dataset_builder()
            .with_data(&arr1(&[0.0, 0.25, 1.5]))
            .create("RS_05")
            .unwrap();
    }

    fixture
}
