//! Path expressions for addressing values inside a document.
//!
//! A path is a dotted sequence of map keys with optional bracketed sequence
//! indices, e.g. `spec.dbConfig.size` or `pods[0].containers[1].ready`.
//!
//! # Grammar
//!
//! - One leading `.` is ignored, so `.spec.size` and `spec.size` are the same.
//! - The remainder is split on `.` into segments.
//! - A segment `name[0][1]` produces a key step for `name` followed by one
//!   index step per bracket pair.
//! - A bare `[n]` segment produces only the index step.
//!
//! # Usage
//!
//! ```rust
//! use kratix_sdk::document::{PathExpr, Step};
//!
//! let path: PathExpr = "pods[0].containers[1].ready".parse()?;
//! assert_eq!(path.len(), 5);
//! assert_eq!(path.steps()[1], Step::Index(0));
//! assert_eq!(path.to_string(), "pods[0].containers[1].ready");
//! # Ok::<(), kratix_sdk::document::DocumentError>(())
//! ```

use std::{borrow::Cow, fmt, str::FromStr};

use super::DocumentError;

/// One unit of path navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Descend into a mapping by key
    Key(String),
    /// Descend into a sequence by position
    Index(usize),
}

impl Step {
    /// Human-readable name of the container kind this step needs
    pub fn container_name(&self) -> &'static str {
        match self {
            Step::Key(_) => "an object",
            Step::Index(_) => "an array",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key(key) => f.write_str(key),
            Step::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl From<&str> for Step {
    fn from(key: &str) -> Self {
        Step::Key(key.to_string())
    }
}

impl From<String> for Step {
    fn from(key: String) -> Self {
        Step::Key(key)
    }
}

impl From<usize> for Step {
    fn from(index: usize) -> Self {
        Step::Index(index)
    }
}

/// A parsed, non-empty path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathExpr {
    steps: Vec<Step>,
}

impl PathExpr {
    /// Parses a path string into its steps.
    ///
    /// # Errors
    /// Returns [`DocumentError::InvalidPath`] when the input is empty, has an
    /// empty segment, or contains a malformed bracket index.
    pub fn parse(input: &str) -> Result<Self, DocumentError> {
        if input.is_empty() {
            return Err(DocumentError::invalid_path(input, "path cannot be empty"));
        }

        let body = input.strip_prefix('.').unwrap_or(input);
        if body.is_empty() {
            return Err(DocumentError::invalid_path(
                input,
                format!("invalid path '{input}': no segments after leading '.'"),
            ));
        }

        let mut steps = Vec::new();
        for segment in body.split('.') {
            parse_segment(input, segment, &mut steps)?;
        }

        Ok(PathExpr { steps })
    }

    /// Builds a path from already separated steps.
    ///
    /// # Errors
    /// Returns [`DocumentError::InvalidPath`] if `steps` is empty.
    pub fn from_steps(steps: impl IntoIterator<Item = Step>) -> Result<Self, DocumentError> {
        let steps: Vec<Step> = steps.into_iter().collect();
        if steps.is_empty() {
            return Err(DocumentError::invalid_path("", "path cannot be empty"));
        }
        Ok(PathExpr { steps })
    }

    /// The steps of this path in walk order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps (always at least one)
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// The final step
    pub fn last(&self) -> &Step {
        // Construction guarantees at least one step.
        &self.steps[self.steps.len() - 1]
    }

    /// The path without its final step, or `None` for a single-step path.
    pub fn parent(&self) -> Option<PathExpr> {
        if self.steps.len() < 2 {
            return None;
        }
        Some(PathExpr {
            steps: self.steps[..self.steps.len() - 1].to_vec(),
        })
    }

    /// Returns a new path with `other` appended to this one.
    pub fn join(&self, other: &PathExpr) -> PathExpr {
        let mut steps = self.steps.clone();
        steps.extend(other.steps.iter().cloned());
        PathExpr { steps }
    }

    /// Renders the first `count` steps, used to locate errors along a walk.
    pub(crate) fn prefix(&self, count: usize) -> String {
        render(&self.steps[..count.min(self.steps.len())])
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.steps))
    }
}

impl FromStr for PathExpr {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PathExpr::parse(s)
    }
}

impl TryFrom<&str> for PathExpr {
    type Error = DocumentError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        PathExpr::parse(s)
    }
}

/// Conversion into a parsed path.
///
/// Implemented for strings (parsed on every call) and for [`PathExpr`]
/// (borrowed), so accessor methods accept either form.
pub trait ToPath {
    fn to_path(&self) -> Result<Cow<'_, PathExpr>, DocumentError>;
}

impl ToPath for str {
    fn to_path(&self) -> Result<Cow<'_, PathExpr>, DocumentError> {
        PathExpr::parse(self).map(Cow::Owned)
    }
}

impl ToPath for String {
    fn to_path(&self) -> Result<Cow<'_, PathExpr>, DocumentError> {
        self.as_str().to_path()
    }
}

impl ToPath for PathExpr {
    fn to_path(&self) -> Result<Cow<'_, PathExpr>, DocumentError> {
        Ok(Cow::Borrowed(self))
    }
}

impl<T: ToPath + ?Sized> ToPath for &T {
    fn to_path(&self) -> Result<Cow<'_, PathExpr>, DocumentError> {
        (**self).to_path()
    }
}

fn render(steps: &[Step]) -> String {
    let mut out = String::new();
    for step in steps {
        match step {
            Step::Key(key) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            Step::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    out
}

/// Splits one dot-separated segment into a key and its trailing indices.
fn parse_segment(input: &str, segment: &str, steps: &mut Vec<Step>) -> Result<(), DocumentError> {
    if segment.is_empty() {
        return Err(DocumentError::invalid_path(
            input,
            format!("invalid path '{input}': empty segment"),
        ));
    }

    let (name, mut rest) = match segment.find('[') {
        Some(open) => segment.split_at(open),
        None => (segment, ""),
    };

    if name.contains(']') {
        return Err(DocumentError::invalid_path(
            input,
            format!("invalid path '{input}': unexpected ']' in '{segment}'"),
        ));
    }
    if !name.is_empty() {
        steps.push(Step::Key(name.to_string()));
    }

    while !rest.is_empty() {
        // `rest` always starts with '[' here
        let body = &rest[1..];
        let close = body.find(']').ok_or_else(|| {
            DocumentError::invalid_path(
                input,
                format!("invalid path '{input}': unterminated '[' in '{segment}'"),
            )
        })?;
        let digits = &body[..close];
        if digits.contains('[') {
            return Err(DocumentError::invalid_path(
                input,
                format!("invalid path '{input}': nested '[' in '{segment}'"),
            ));
        }
        steps.push(Step::Index(parse_index(input, digits)?));

        rest = &body[close + 1..];
        if !rest.is_empty() && !rest.starts_with('[') {
            return Err(DocumentError::invalid_path(
                input,
                format!("invalid path '{input}': unexpected '{rest}' after index in '{segment}'"),
            ));
        }
    }

    Ok(())
}

fn parse_index(input: &str, digits: &str) -> Result<usize, DocumentError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DocumentError::invalid_path(
            input,
            format!("invalid path '{input}': index '{digits}' is not a non-negative integer"),
        ));
    }
    digits.parse::<usize>().map_err(|_| {
        DocumentError::invalid_path(
            input,
            format!("invalid path '{input}': index '{digits}' is out of range"),
        )
    })
}
