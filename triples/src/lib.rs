//! Well-known vocabulary interpreter for schema.org triples.
//!
//! The `schema-triples` crate sits between an RDF triple parser and a type-model
//! builder. It recognizes the `rdfs:comment`, `rdfs:subClassOf` and `rdf:type`
//! predicates, validates the shape of each recognized triple, and decides for
//! every subject whether it is a directly named class or only an enumeration
//! value.
//!
//! # Classifying facts
//!
//! ```
//! use schema_triples::{get_comment, get_sub_class_of, Fact, SchemaString, UrlNode};
//!
//! let comment = Fact::new(
//!     UrlNode::parse("http://www.w3.org/2000/01/rdf-schema#comment")?,
//!     SchemaString::new("A person (alive, dead, undead, or fictional)."),
//! );
//! assert!(get_comment(&comment)?.is_some());
//! assert!(get_sub_class_of(&comment)?.is_none());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Classifying subjects
//!
//! ```
//! use schema_triples::{classify_subject, group_by_subject, Triple, UrlNode};
//!
//! let triples = vec![Triple::new(
//!     UrlNode::parse("https://schema.org/True")?,
//!     UrlNode::parse("http://www.w3.org/1999/02/22-rdf-syntax-ns#type")?,
//!     UrlNode::parse("https://schema.org/Boolean")?,
//! )];
//! for (subject, facts) in group_by_subject(triples) {
//!     let record = classify_subject(subject, facts)?;
//!     assert!(!record.directly_named_class);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod classify;
pub mod error;
pub mod model;
pub mod topic;
pub mod well_known;

pub use classify::{classify_subject, group_by_subject, ClassifiedSubject};
pub use error::ShapeError;
pub use model::{Fact, NamedUrl, Object, SchemaString, Triple, UrlError, UrlNode};
pub use topic::TypedTopic;
pub use well_known::{
    classify, get_comment, get_sub_class_of, get_type, get_types, is_directly_named_class,
    Classified, ClassifiedComment, ClassifiedParent, WellKnownTerm,
};
