use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Failures raised by the hierarchical store backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreError {
    /// A slash-delimited group path does not exist in the file.
    MissingGroup(String),
    /// The group exists but a required dataset or attribute is absent.
    MissingDataset(String),
    /// Any other backend failure, carried as its message.
    Backend(String),
}

impl Error for StoreError {}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::MissingGroup(path) => write!(f, "group not found: {path}"),
            Self::MissingDataset(path) => write!(f, "dataset or attribute not found: {path}"),
            Self::Backend(s) => write!(f, "store backend error: {s}"),
        }
    }
}

impl From<hdf5::Error> for StoreError {
    fn from(e: hdf5::Error) -> Self {
        Self::Backend(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RainquestError {
    Store(StoreError),
    /// Sparse index/value arrays are mutually inconsistent.
    MalformedAcquisition(String),
    /// A decoded coordinate falls outside its axis.
    IndexOutOfRange {
        axis: &'static str,
        index: i64,
        len: usize,
    },
}

impl Error for RainquestError {}

impl From<StoreError> for RainquestError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl Display for RainquestError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Store(e) => write!(f, "{e}"),
            Self::MalformedAcquisition(s) => write!(f, "malformed acquisition: {s}"),
            Self::IndexOutOfRange { axis, index, len } => {
                write!(f, "index {index} is out of range for {axis} of length {len}")
            }
        }
    }
}
