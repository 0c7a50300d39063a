//! Owned status documents.

use crate::document::{DocumentError, Map, Step, ToPath, Value, merge_into};

/// The `status` sub-tree of a resource, detached from the resource.
///
/// A `Status` is always a mapping. It is what pipelines read from and write
/// to the metadata status file, and what [`crate::sdk::Sdk::publish_status`]
/// merges onto the persisted status.
///
/// ```
/// # use kratix_sdk::resource::Status;
/// let mut status = Status::new();
/// status.set("healthStatus.state", "ready")?;
/// assert_eq!(status.get("healthStatus.state")?.and_then(|v| v.as_str()), Some("ready"));
///
/// status.remove("healthStatus.state")?;
/// assert_eq!(status.get("healthStatus.state")?, None);
/// # Ok::<(), kratix_sdk::document::DocumentError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Status {
    data: Map,
}

impl Status {
    /// Creates an empty status
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing mapping
    pub fn from_map(map: Map) -> Self {
        Self { data: map }
    }

    /// Wraps a value; anything but a mapping yields an empty status.
    pub fn from_value(value: Value) -> Self {
        Self::from_map(value.into_mapping().unwrap_or_default())
    }

    pub fn get(&self, path: impl ToPath) -> Result<Option<&Value>, DocumentError> {
        let path = path.to_path()?;
        Ok(match path.steps().split_first() {
            Some((Step::Key(key), rest)) => self.data.get(key).and_then(|v| v.get_steps(rest)),
            _ => None,
        })
    }

    pub fn set(&mut self, path: impl ToPath, value: impl Into<Value>) -> Result<(), DocumentError> {
        self.with_root(|root| root.set(path, value))
    }

    pub fn remove(&mut self, path: impl ToPath) -> Result<Option<Value>, DocumentError> {
        self.with_root(|root| root.remove(path))
    }

    /// Deep merges `other` on top of this status.
    pub fn merge(&mut self, other: Status) {
        merge_into(&mut self.data, other.data);
    }

    /// Returns true if the status holds no fields
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_map(&self) -> &Map {
        &self.data
    }

    pub fn into_map(self) -> Map {
        self.data
    }

    pub fn into_value(self) -> Value {
        Value::Mapping(self.data)
    }

    /// Runs a path write against the status as a document root.
    ///
    /// Writes on a mapping root keep it a mapping: a leading index step is a
    /// type mismatch before anything is replaced.
    fn with_root<T>(&mut self, write: impl FnOnce(&mut Value) -> T) -> T {
        let mut root = Value::Mapping(std::mem::take(&mut self.data));
        let result = write(&mut root);
        self.data = root.into_mapping().unwrap_or_default();
        result
    }
}

impl From<Map> for Status {
    fn from(map: Map) -> Self {
        Self::from_map(map)
    }
}

impl From<Status> for Value {
    fn from(status: Status) -> Self {
        status.into_value()
    }
}
