use std::fmt;

/// The five concrete path components addressing one radar acquisition.
///
/// Components are kept as strings because group names are opaque store
/// keys; whatever zero-padding convention the file uses is preserved
/// as-is. All components are mandatory; callers wanting "all times
/// under X" enumerate concrete paths themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcquisitionTime<'a> {
    pub year: &'a str,
    pub month: &'a str,
    pub day: &'a str,
    pub hour: &'a str,
    pub minute: &'a str,
}

impl<'a> AcquisitionTime<'a> {
    pub fn new(year: &'a str, month: &'a str, day: &'a str, hour: &'a str, minute: &'a str) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }
}

impl fmt::Display for AcquisitionTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}
