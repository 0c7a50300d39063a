//! Typed wrappers around Kubernetes-style object documents.
//!
//! A [`Resource`] owns a decoded object and the identity fields read from it
//! once at construction: name, namespace, group/version/kind, labels and
//! annotations. Everything else is reached through path operations on the
//! underlying document.
//!
//! # Usage
//!
//! ```
//! use kratix_sdk::resource::Resource;
//!
//! let resource = Resource::from_yaml_str(
//!     r#"
//! apiVersion: mygroup.example/v1
//! kind: mykind
//! metadata:
//!   name: my-resource
//!   namespace: default
//! spec:
//!   dbConfig:
//!     size: small
//! "#,
//! )?;
//!
//! assert_eq!(resource.name(), "my-resource");
//! assert_eq!(resource.group_version_kind().group, "mygroup.example");
//! assert_eq!(resource.get_value(".spec.dbConfig.size")?, "small");
//! # Ok::<(), kratix_sdk::Error>(())
//! ```

use std::{collections::BTreeMap, fmt};

use tracing::warn;

use crate::{
    Result,
    document::{DocumentError, PathExpr, Scope, Step, ToPath, Value, codec},
};

pub mod errors;
mod promise;
mod status;

pub use errors::ResourceError;
pub use promise::Promise;
pub use status::Status;

/// Key of the status sub-tree on every resource.
pub const STATUS_KEY: &str = "status";

/// API group, version and kind of an object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GroupVersionKind {
    /// API group; empty for the core group
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl GroupVersionKind {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }

    /// Splits an `apiVersion` such as `apps/v1` or `v1` into group and version.
    pub fn from_api_version(api_version: &str, kind: impl Into<String>) -> Self {
        match api_version.split_once('/') {
            Some((group, version)) => Self::new(group, version, kind),
            None => Self::new("", api_version, kind),
        }
    }

    /// The `apiVersion` string for this group and version
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Kind={}", self.api_version(), self.kind)
    }
}

/// Identity of an object, as handed to a status persistence call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub group_version_kind: GroupVersionKind,
    pub name: String,
    /// Empty for cluster-scoped objects
    pub namespace: String,
    /// Plural resource name used to address the API endpoint, if known
    pub plural: Option<String>,
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{} {}", self.group_version_kind, self.name)
        } else {
            write!(
                f,
                "{} {}/{}",
                self.group_version_kind, self.namespace, self.name
            )
        }
    }
}

/// An object document plus its pre-extracted identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    object: Value,
    name: String,
    namespace: String,
    gvk: GroupVersionKind,
    labels: BTreeMap<String, String>,
    annotations: BTreeMap<String, String>,
}

impl Resource {
    /// Wraps a decoded object.
    ///
    /// # Errors
    /// Returns [`ResourceError::NotAnObject`] if `object` is not a mapping.
    pub fn from_value(object: Value) -> std::result::Result<Self, ResourceError> {
        if !object.is_mapping() {
            return Err(ResourceError::NotAnObject {
                actual: object.type_name(),
            });
        }

        let text = |path: &[&str]| -> String {
            lookup(&object, path)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let gvk = GroupVersionKind::from_api_version(&text(&["apiVersion"]), text(&["kind"]));
        let name = text(&["metadata", "name"]);
        let namespace = text(&["metadata", "namespace"]);
        let labels = string_map(&object, "labels");
        let annotations = string_map(&object, "annotations");

        Ok(Self {
            object,
            name,
            namespace,
            gvk,
            labels,
            annotations,
        })
    }

    /// Decodes and wraps a YAML object
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        Ok(Self::from_value(codec::from_yaml_str(input)?)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn group_version_kind(&self) -> &GroupVersionKind {
        &self.gvk
    }

    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    pub fn annotations(&self) -> &BTreeMap<String, String> {
        &self.annotations
    }

    /// Returns the value at `path`, which may start with a `.`.
    ///
    /// # Errors
    /// Returns [`DocumentError::NotFound`] when nothing exists at `path`, and
    /// [`DocumentError::InvalidPath`] for a malformed path.
    pub fn get_value(&self, path: impl ToPath) -> std::result::Result<&Value, DocumentError> {
        let path = path.to_path()?;
        self.object
            .get_at(&path)
            .ok_or_else(|| DocumentError::NotFound {
                path: path.to_string(),
            })
    }

    /// Returns a detached copy of the object's status.
    ///
    /// A missing or non-mapping status yields an empty [`Status`].
    pub fn status(&self) -> Status {
        match self.object.as_mapping().and_then(|m| m.get(STATUS_KEY)) {
            Some(value) => Status::from_value(value.clone()),
            None => Status::new(),
        }
    }

    /// Opens a mutable handle rooted at `status`, or at `status.<sub_path>`.
    ///
    /// Missing levels are created as empty mappings.
    pub fn status_mut(&mut self, sub_path: Option<&str>) -> Result<Scope<'_>> {
        let mut path = PathExpr::from_steps([Step::from(STATUS_KEY)])?;
        if let Some(sub_path) = sub_path {
            path = path.join(&PathExpr::parse(sub_path)?);
        }
        Ok(self.object.scope_mut(&path)?)
    }

    /// Replaces the whole status sub-tree.
    pub fn set_status(&mut self, status: Status) {
        if let Some(map) = self.object.as_mapping_mut() {
            map.insert(STATUS_KEY.to_string(), status.into_value());
        }
    }

    /// Identity of this object for persistence calls
    pub fn object_ref(&self, plural: Option<&str>) -> ObjectRef {
        ObjectRef {
            group_version_kind: self.gvk.clone(),
            name: self.name.clone(),
            namespace: self.namespace.clone(),
            plural: plural.filter(|p| !p.is_empty()).map(str::to_string),
        }
    }

    /// The underlying object document
    pub fn object(&self) -> &Value {
        &self.object
    }

    pub fn into_value(self) -> Value {
        self.object
    }

    /// Encodes the object as YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        codec::to_yaml_string(&self.object)
    }
}

/// Reads the value under a fixed chain of keys.
fn lookup<'a>(object: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let path = PathExpr::from_steps(keys.iter().copied().map(Step::from)).ok()?;
    object.get_at(&path)
}

/// Reads `metadata.<field>` as a string map, skipping non-string entries.
fn string_map(object: &Value, field: &str) -> BTreeMap<String, String> {
    let Some(entries) = lookup(object, &["metadata", field]).and_then(Value::as_mapping) else {
        return BTreeMap::new();
    };

    entries
        .iter()
        .filter_map(|(key, value)| match value.as_str() {
            Some(text) => Some((key.clone(), text.to_string())),
            None => {
                warn!(
                    field,
                    key = %key,
                    kind = value.type_name(),
                    "Skipping non-string metadata entry"
                );
                None
            }
        })
        .collect()
}
