use std::ops::Deref;

use super::{Resource, ResourceError};
use crate::{
    Result,
    document::{Value, codec},
};

/// Kind every promise object carries
pub const PROMISE_KIND: &str = "Promise";

/// A [`Resource`] known to be a `Promise`.
///
/// Promise pipelines read their input through this wrapper; every accessor of
/// the underlying resource is available through `Deref`.
#[derive(Debug, Clone, PartialEq)]
pub struct Promise {
    resource: Resource,
}

impl Promise {
    /// Wraps a resource, checking its kind.
    ///
    /// # Errors
    /// Returns [`ResourceError::UnexpectedKind`] unless the kind is `Promise`.
    pub fn from_resource(resource: Resource) -> std::result::Result<Self, ResourceError> {
        let kind = &resource.group_version_kind().kind;
        if kind != PROMISE_KIND {
            return Err(ResourceError::UnexpectedKind {
                expected: PROMISE_KIND,
                actual: kind.clone(),
            });
        }
        Ok(Self { resource })
    }

    pub fn from_value(object: Value) -> std::result::Result<Self, ResourceError> {
        Self::from_resource(Resource::from_value(object)?)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self> {
        Ok(Self::from_value(codec::from_yaml_str(input)?)?)
    }

    /// The `spec` sub-tree, if present
    pub fn spec(&self) -> Option<&Value> {
        self.field(&["spec"])
    }

    /// The CRD the promise exposes, under `spec.api`
    pub fn api(&self) -> Option<&Value> {
        self.field(&["spec", "api"])
    }

    /// Entries of `spec.dependencies`; empty when absent
    pub fn dependencies(&self) -> &[Value] {
        self.field(&["spec", "dependencies"])
            .and_then(Value::as_sequence)
            .unwrap_or_default()
    }

    /// The `spec.workflows` tree, if present
    pub fn workflows(&self) -> Option<&Value> {
        self.field(&["spec", "workflows"])
    }

    pub fn into_resource(self) -> Resource {
        self.resource
    }

    fn field(&self, keys: &[&str]) -> Option<&Value> {
        super::lookup(self.resource.object(), keys)
    }
}

impl Deref for Promise {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        &self.resource
    }
}

impl TryFrom<Resource> for Promise {
    type Error = ResourceError;

    fn try_from(resource: Resource) -> std::result::Result<Self, Self::Error> {
        Self::from_resource(resource)
    }
}
