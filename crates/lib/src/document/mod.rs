//! Path-addressable documents.
//!
//! A document is a tree of mappings, sequences and scalars decoded from YAML
//! or JSON. This module provides the tree type ([`Value`]), the path grammar
//! used to address nodes inside it ([`PathExpr`]), and the operations built on
//! top of them.
//!
//! # Core Types
//!
//! - [`Value`] - A document node; the root of a document is just a `Value`
//! - [`PathExpr`] / [`Step`] - A parsed path such as `pods[0].containers[1].ready`
//! - [`Scope`] - A mutable handle re-rooted at an interior node
//! - [`DocumentError`] - Path and access errors
//!
//! # Usage
//!
//! ```
//! use kratix_sdk::document::{Value, codec};
//!
//! let mut doc = codec::from_yaml_str("spec: {dbConfig: {size: small}}")?;
//! assert_eq!(doc.get("spec.dbConfig.size")?, Some(&Value::from("small")));
//!
//! doc.set("status.replicas[2]", 3)?;
//! assert_eq!(
//!     doc.get("status.replicas")?,
//!     Some(&Value::from(vec![Value::Null, Value::Null, Value::Int(3)]))
//! );
//!
//! doc.remove("spec.dbConfig")?;
//! assert_eq!(doc.get("spec.dbConfig.size")?, None);
//! # Ok::<(), kratix_sdk::Error>(())
//! ```

mod access;
pub mod codec;
pub mod errors;
mod merge;
pub mod path;
mod scope;
pub mod value;

pub use errors::DocumentError;
pub use merge::{merge, merge_into};
pub use path::{PathExpr, Step, ToPath};
pub use scope::Scope;
pub use value::{Map, Value};
