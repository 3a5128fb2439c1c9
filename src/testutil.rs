//! In-memory `DataStore` for unit tests.

use std::collections::{BTreeSet, HashMap};

use ndarray::ArrayD;

use crate::{error::StoreError, store::DataStore};

#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    groups: BTreeSet<String>,
    floats: HashMap<String, ArrayD<f64>>,
    ints: HashMap<String, ArrayD<i64>>,
    attrs: HashMap<String, Vec<f64>>,
}

impl MemoryStore {
    /// Register a group and all of its ancestors.
    pub(crate) fn add_group(&mut self, path: &str) {
        let mut current = String::new();
        for part in path.split('/').filter(|p| !p.is_empty()) {
            current.push('/');
            current.push_str(part);
            self.groups.insert(current.clone());
        }
    }

    pub(crate) fn put_floats(&mut self, path: &str, array: ArrayD<f64>) {
        self.add_parent(path);
        self.floats.insert(path.to_owned(), array);
    }

    pub(crate) fn put_ints(&mut self, path: &str, array: ArrayD<i64>) {
        self.add_parent(path);
        self.ints.insert(path.to_owned(), array);
    }

    pub(crate) fn put_attr(&mut self, group: &str, name: &str, values: Vec<f64>) {
        self.add_group(group);
        self.attrs.insert(format!("{group}@{name}"), values);
    }

    fn add_parent(&mut self, dataset_path: &str) {
        if let Some((parent, _)) = dataset_path.rsplit_once('/') {
            if !parent.is_empty() {
                self.add_group(parent);
            }
        }
    }

    fn missing(&self, path: &str) -> StoreError {
        match path.rsplit_once('/') {
            Some((parent, _)) if !parent.is_empty() && !self.contains_group(parent) => {
                StoreError::MissingGroup(parent.to_owned())
            }
            _ => StoreError::MissingDataset(path.to_owned()),
        }
    }
}

impl DataStore for MemoryStore {
    fn contains_group(&self, path: &str) -> bool {
        path == "/" || self.groups.contains(path)
    }

    fn group_names(&self, path: &str) -> Result<Vec<String>, StoreError> {
        if !self.contains_group(path) {
            return Err(StoreError::MissingGroup(path.to_owned()));
        }
        let prefix = if path == "/" {
            "/".to_owned()
        } else {
            format!("{path}/")
        };
        Ok(self
            .groups
            .iter()
            .filter_map(|g| g.strip_prefix(&prefix))
            .filter(|rest| !rest.contains('/'))
            .map(str::to_owned)
            .collect())
    }

    fn read_floats(&self, path: &str) -> Result<ArrayD<f64>, StoreError> {
        self.floats.get(path).cloned().ok_or_else(|| self.missing(path))
    }

    fn read_ints(&self, path: &str) -> Result<ArrayD<i64>, StoreError> {
        self.ints.get(path).cloned().ok_or_else(|| self.missing(path))
    }

    fn read_attr_floats(&self, group: &str, name: &str) -> Result<Vec<f64>, StoreError> {
        if !self.contains_group(group) {
            return Err(StoreError::MissingGroup(group.to_owned()));
        }
        self.attrs
            .get(&format!("{group}@{name}"))
            .cloned()
            .ok_or_else(|| StoreError::MissingDataset(format!("{group}@{name}")))
    }
}
