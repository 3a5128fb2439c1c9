use std::path::Path;

use hdf5::H5Type;
use ndarray::{ArrayD, IxDyn};

use crate::error::StoreError;

/// Read-only access to a hierarchical key/attribute container.
///
/// Groups are addressed by slash-delimited paths (`/BER/2023/07/15/12/30`);
/// each group holds named n-dimensional numeric datasets and small
/// fixed-length numeric attributes. The radar and rain readers only ever
/// consume this trait, so alternative backends can be dropped in for
/// testing.
pub trait DataStore {
    /// Whether a group exists at `path`.
    fn contains_group(&self, path: &str) -> bool;

    /// Names of the child groups of `path`, in the store's enumeration
    /// order.
    fn group_names(&self, path: &str) -> Result<Vec<String>, StoreError>;

    /// Read the dataset at `path` as an n-dimensional `f64` array.
    fn read_floats(&self, path: &str) -> Result<ArrayD<f64>, StoreError>;

    /// Read the dataset at `path` as an n-dimensional `i64` array.
    fn read_ints(&self, path: &str) -> Result<ArrayD<i64>, StoreError>;

    /// Read a numeric attribute named `name` on the group at `group`.
    fn read_attr_floats(&self, group: &str, name: &str) -> Result<Vec<f64>, StoreError>;
}

/// `DataStore` backed by an HDF5 file opened read-only.
///
/// The underlying file handle is released when the store is dropped,
/// on success and error paths alike.
pub struct Hdf5Store {
    file: hdf5::File,
}

impl Hdf5Store {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let file = hdf5::File::open(path)?;
        Ok(Self { file })
    }

    /// Open a group, reporting `MissingGroup` only when the path truly
    /// does not exist; other open failures (a non-group link, a corrupt
    /// file) stay `Backend` errors.
    fn open_group(&self, path: &str) -> Result<hdf5::Group, StoreError> {
        match self.file.group(path) {
            Ok(group) => Ok(group),
            Err(e) => {
                let name = path.trim_start_matches('/');
                if !name.is_empty() && self.file.link_exists(name) {
                    Err(StoreError::Backend(e.to_string()))
                } else {
                    Err(StoreError::MissingGroup(path.to_owned()))
                }
            }
        }
    }

    fn read_dataset<T: H5Type + Clone>(&self, path: &str) -> Result<ArrayD<T>, StoreError> {
        let (parent, name) = split_dataset_path(path);
        let group = self.open_group(parent)?;
        let dataset = match group.dataset(name) {
            Ok(dataset) => dataset,
            Err(e) if group.link_exists(name) => {
                return Err(StoreError::Backend(e.to_string()));
            }
            Err(_) => return Err(StoreError::MissingDataset(path.to_owned())),
        };
        let shape = dataset.shape();
        let data = dataset.read_raw::<T>()?;
        ArrayD::from_shape_vec(IxDyn(&shape), data)
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

impl DataStore for Hdf5Store {
    fn contains_group(&self, path: &str) -> bool {
        self.file.group(path).is_ok()
    }

    fn group_names(&self, path: &str) -> Result<Vec<String>, StoreError> {
        let group = self.open_group(path)?;
        let names = group.member_names()?;
        // member_names lists every link; keep the subgroups only.
        Ok(names
            .into_iter()
            .filter(|name| group.group(name).is_ok())
            .collect())
    }

    fn read_floats(&self, path: &str) -> Result<ArrayD<f64>, StoreError> {
        self.read_dataset::<f64>(path)
    }

    fn read_ints(&self, path: &str) -> Result<ArrayD<i64>, StoreError> {
        self.read_dataset::<i64>(path)
    }

    fn read_attr_floats(&self, group: &str, name: &str) -> Result<Vec<f64>, StoreError> {
        let group_path = group;
        let group = self.open_group(group_path)?;
        let attr = group
            .attr(name)
            .map_err(|_| StoreError::MissingDataset(format!("{group_path}@{name}")))?;
        Ok(attr.read_raw::<f64>()?)
    }
}

fn split_dataset_path(path: &str) -> (&str, &str) {
    match path.rsplit_once('/') {
        Some(("", name)) => ("/", name),
        Some((parent, name)) => (parent, name),
        None => ("/", path),
    }
}
