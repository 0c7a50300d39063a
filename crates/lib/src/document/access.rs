//! Path-based reads and writes on a [`Value`] tree.
//!
//! All operations work from whichever node they are called on, so a caller
//! can re-root the accessor at any interior mapping or sequence.
//!
//! # Write semantics
//!
//! - Before a key step, a node that is not a mapping is replaced by an empty
//!   mapping.
//! - Before an index step, a `null` node becomes an empty sequence and a short
//!   sequence is padded with `null` up to the index. Any other node is a
//!   [`DocumentError::TypeMismatch`]: sequences are never created over an
//!   existing scalar or mapping. An index whose padding cannot be allocated
//!   is [`DocumentError::IndexTooLarge`].
//!
//! # Remove semantics
//!
//! Intermediate steps are never created. A missing intermediate segment is
//! [`DocumentError::PathNotResolvable`], a wrong container kind is
//! [`DocumentError::TypeMismatch`], and a missing final key or index is a
//! successful no-op.

use super::{DocumentError, PathExpr, Step, ToPath, Value};

impl Value {
    /// Gets the value at `path`.
    ///
    /// Returns `Ok(None)` when any step does not resolve; only a malformed
    /// path string is an error.
    ///
    /// ```
    /// # use kratix_sdk::document::{Value, codec};
    /// let doc = codec::from_yaml_str("pods: [{name: a}, {name: b}]")?;
    /// assert_eq!(doc.get("pods[1].name")?, Some(&Value::from("b")));
    /// assert_eq!(doc.get("pods[5]")?, None);
    /// assert!(doc.get("pods[").is_err());
    /// # Ok::<(), kratix_sdk::Error>(())
    /// ```
    pub fn get(&self, path: impl ToPath) -> Result<Option<&Value>, DocumentError> {
        let path = path.to_path()?;
        Ok(self.get_at(&path))
    }

    /// Gets the value at an already parsed path.
    pub fn get_at(&self, path: &PathExpr) -> Option<&Value> {
        self.get_steps(path.steps())
    }

    /// Walks `steps` from this node; an empty slice resolves to the node.
    pub(crate) fn get_steps(&self, steps: &[Step]) -> Option<&Value> {
        let mut current = self;
        for step in steps {
            current = match (step, current) {
                (Step::Key(key), Value::Mapping(map)) => map.get(key)?,
                (Step::Index(index), Value::Sequence(items)) => items.get(*index)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Gets a mutable reference to the value at an already parsed path,
    /// without creating anything.
    pub fn get_mut_at(&mut self, path: &PathExpr) -> Option<&mut Value> {
        let mut current = self;
        for step in path.steps() {
            current = match (step, current) {
                (Step::Key(key), Value::Mapping(map)) => map.get_mut(key)?,
                (Step::Index(index), Value::Sequence(items)) => items.get_mut(*index)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Sets `value` at `path`, creating intermediate containers as needed.
    ///
    /// # Errors
    /// - [`DocumentError::InvalidPath`] for a malformed path string.
    /// - [`DocumentError::TypeMismatch`] when an index step meets a scalar or
    ///   mapping. The document keeps whatever the walk created before that.
    /// - [`DocumentError::IndexTooLarge`] when padding a sequence up to an
    ///   index would overflow or cannot be allocated.
    pub fn set(&mut self, path: impl ToPath, value: impl Into<Value>) -> Result<(), DocumentError> {
        let path = path.to_path()?;
        self.set_at(&path, value)
    }

    /// Sets `value` at an already parsed path.
    pub fn set_at(&mut self, path: &PathExpr, value: impl Into<Value>) -> Result<(), DocumentError> {
        *self.entry_at(path)? = value.into();
        Ok(())
    }

    /// Returns the slot at `path`, walking with the same auto-vivification
    /// rules as [`Value::set`]. A slot that did not exist is `null`.
    pub fn entry(&mut self, path: impl ToPath) -> Result<&mut Value, DocumentError> {
        let path = path.to_path()?;
        self.entry_at(&path)
    }

    /// Returns the slot at an already parsed path, creating it if needed.
    pub fn entry_at(&mut self, path: &PathExpr) -> Result<&mut Value, DocumentError> {
        let mut current = self;
        for (position, step) in path.steps().iter().enumerate() {
            current = current.child_or_insert(step, path, position)?;
        }
        Ok(current)
    }

    /// Removes the value at `path`, returning it if it existed.
    ///
    /// # Errors
    /// - [`DocumentError::InvalidPath`] for a malformed path string.
    /// - [`DocumentError::PathNotResolvable`] when an intermediate segment is
    ///   missing.
    /// - [`DocumentError::TypeMismatch`] when a segment exists but is the
    ///   wrong container kind for the following step.
    pub fn remove(&mut self, path: impl ToPath) -> Result<Option<Value>, DocumentError> {
        let path = path.to_path()?;
        self.remove_at(&path)
    }

    /// Removes the value at an already parsed path.
    pub fn remove_at(&mut self, path: &PathExpr) -> Result<Option<Value>, DocumentError> {
        let steps = path.steps();
        let (last, parents) = match steps.split_last() {
            Some(split) => split,
            None => return Ok(None),
        };

        let mut current = self;
        for (position, step) in parents.iter().enumerate() {
            current = match (step, current) {
                (Step::Key(key), Value::Mapping(map)) => {
                    map.get_mut(key).ok_or_else(|| DocumentError::PathNotResolvable {
                        path: path.prefix(position + 1),
                    })?
                }
                (Step::Index(index), Value::Sequence(items)) => {
                    items.get_mut(*index).ok_or_else(|| DocumentError::PathNotResolvable {
                        path: path.prefix(position + 1),
                    })?
                }
                (_, Value::Null) => {
                    return Err(DocumentError::PathNotResolvable {
                        path: path.prefix(position + 1),
                    });
                }
                (step, other) => return Err(mismatch(path, position, step, other)),
            };
        }

        match (last, current) {
            (Step::Key(key), Value::Mapping(map)) => Ok(map.remove(key)),
            (Step::Index(index), Value::Sequence(items)) => {
                Ok((*index < items.len()).then(|| items.remove(*index)))
            }
            (_, Value::Null) => Ok(None),
            (step, other) => Err(mismatch(path, parents.len(), step, other)),
        }
    }

    /// Resolves one step for writing, preparing this node for it first.
    fn child_or_insert(
        &mut self,
        step: &Step,
        path: &PathExpr,
        position: usize,
    ) -> Result<&mut Value, DocumentError> {
        match step {
            Step::Key(key) => {
                if !self.is_mapping() {
                    *self = Value::mapping();
                }
                match self {
                    Value::Mapping(map) => Ok(map.entry(key.clone()).or_insert(Value::Null)),
                    other => Err(mismatch(path, position, step, other)),
                }
            }
            Step::Index(index) => {
                if self.is_null() {
                    *self = Value::sequence();
                }
                match self {
                    Value::Sequence(items) => {
                        if items.len() <= *index {
                            pad_to(items, *index, path, position)?;
                        }
                        items
                            .get_mut(*index)
                            .ok_or_else(|| index_too_large(path, position, *index))
                    }
                    other => Err(mismatch(path, position, step, other)),
                }
            }
        }
    }
}

/// Pads `items` with `null` so that `index` is in bounds.
fn pad_to(
    items: &mut Vec<Value>,
    index: usize,
    path: &PathExpr,
    position: usize,
) -> Result<(), DocumentError> {
    let new_len = index
        .checked_add(1)
        .ok_or_else(|| index_too_large(path, position, index))?;
    items
        .try_reserve(new_len - items.len())
        .map_err(|_| index_too_large(path, position, index))?;
    items.resize(new_len, Value::Null);
    Ok(())
}

fn index_too_large(path: &PathExpr, position: usize, index: usize) -> DocumentError {
    let at = path.prefix(position);
    DocumentError::IndexTooLarge {
        path: if at.is_empty() { ".".to_string() } else { at },
        index,
    }
}

fn mismatch(path: &PathExpr, position: usize, step: &Step, found: &Value) -> DocumentError {
    let at = path.prefix(position);
    DocumentError::TypeMismatch {
        path: if at.is_empty() { ".".to_string() } else { at },
        expected: step.container_name(),
        actual: found.type_name(),
    }
}
