//! Shape faults raised when a well-known predicate carries the wrong kind of object.

use thiserror::Error;

use crate::model::{SchemaString, UrlNode};

/// A recognized triple whose object has a shape the predicate does not allow.
///
/// These indicate malformed vocabulary data. Callers are expected to abort
/// processing of the subject or document; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// An `rdfs:comment` whose object is a reference.
    #[error("non-string object: <{predicate}> <{object}>")]
    NonStringObject {
        /// The matched predicate.
        predicate: UrlNode,
        /// The offending object.
        object: UrlNode,
    },
    /// An `rdfs:subClassOf` whose object is a literal.
    #[error("unexpected object for predicate <{predicate}>: {object}")]
    UnexpectedObject {
        /// The matched predicate.
        predicate: UrlNode,
        /// The offending object.
        object: SchemaString,
    },
    /// An `rdfs:subClassOf` pointing at a namespace root.
    #[error("unnamed URL used as a super-class: <{object}>")]
    UnnamedSuperClass {
        /// The offending object.
        object: UrlNode,
    },
    /// An `rdf:type` whose object is a literal.
    #[error("unexpected type: {object}")]
    UnexpectedType {
        /// The offending object.
        object: SchemaString,
    },
    /// An `rdf:type` pointing at a namespace root, found while assembling a
    /// [`TypedTopic`](crate::topic::TypedTopic).
    #[error("unnamed URL used as a type: <{object}>")]
    UnnamedType {
        /// The offending object.
        object: UrlNode,
    },
}

impl ShapeError {
    /// The fixed reason text, without the offending values.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            ShapeError::NonStringObject { .. } => "non-string object",
            ShapeError::UnexpectedObject { .. } => "unexpected object for predicate",
            ShapeError::UnnamedSuperClass { .. } => "unnamed URL used as a super-class",
            ShapeError::UnexpectedType { .. } => "unexpected type",
            ShapeError::UnnamedType { .. } => "unnamed URL used as a type",
        }
    }
}
