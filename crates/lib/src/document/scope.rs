//! A mutable handle re-rooted at an interior node of a document.

use super::{DocumentError, PathExpr, ToPath, Value};

/// A mutable lens into a sub-tree of a document.
///
/// Paths given to a `Scope` are relative to the node it was opened at.
/// The handle borrows the document mutably, so it must be dropped before the
/// document is used again.
///
/// ```
/// # use kratix_sdk::document::Value;
/// let mut doc = Value::mapping();
/// {
///     let mut status = doc.scope_mut("status")?;
///     status.set("phase", "Ready")?;
///     status.set("conditions[0].type", "Available")?;
/// }
/// assert_eq!(doc.get("status.phase")?, Some(&Value::from("Ready")));
/// # Ok::<(), kratix_sdk::document::DocumentError>(())
/// ```
#[derive(Debug)]
pub struct Scope<'a> {
    root: &'a mut Value,
    base: Option<PathExpr>,
}

impl<'a> Scope<'a> {
    /// Opens a scope directly on `root`
    pub fn new(root: &'a mut Value) -> Self {
        Self { root, base: None }
    }

    /// Path of this scope relative to where it was opened, if any
    pub fn base(&self) -> Option<&PathExpr> {
        self.base.as_ref()
    }

    /// The node this scope is rooted at
    pub fn value(&self) -> &Value {
        &*self.root
    }

    /// Mutable access to the node this scope is rooted at
    pub fn value_mut(&mut self) -> &mut Value {
        &mut *self.root
    }

    pub fn get(&self, path: impl ToPath) -> Result<Option<&Value>, DocumentError> {
        self.root.get(path)
    }

    pub fn set(&mut self, path: impl ToPath, value: impl Into<Value>) -> Result<(), DocumentError> {
        self.root.set(path, value)
    }

    pub fn remove(&mut self, path: impl ToPath) -> Result<Option<Value>, DocumentError> {
        self.root.remove(path)
    }

    /// Deep merges `other` into the scoped node.
    pub fn merge(&mut self, other: Value) {
        self.root.merge(other);
    }

    /// Opens a narrower scope one or more steps below this one.
    pub fn scope_mut(&mut self, path: impl ToPath) -> Result<Scope<'_>, DocumentError> {
        let path = path.to_path()?;
        let base = match &self.base {
            Some(base) => base.join(&path),
            None => path.as_ref().clone(),
        };
        let node = self.root.open_mapping(&path)?;
        Ok(Scope {
            root: node,
            base: Some(base),
        })
    }
}

impl Value {
    /// Opens a [`Scope`] rooted at `path`.
    ///
    /// The path is walked like [`Value::set`]; a missing or `null` target is
    /// replaced by an empty mapping, any existing value is kept as is.
    pub fn scope_mut(&mut self, path: impl ToPath) -> Result<Scope<'_>, DocumentError> {
        let path = path.to_path()?;
        let base = path.as_ref().clone();
        let node = self.open_mapping(&path)?;
        Ok(Scope {
            root: node,
            base: Some(base),
        })
    }

    fn open_mapping(&mut self, path: &PathExpr) -> Result<&mut Value, DocumentError> {
        let node = self.entry_at(path)?;
        if node.is_null() {
            *node = Value::mapping();
        }
        Ok(node)
    }
}
