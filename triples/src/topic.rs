//! Everything known about one subject, as handed to the class-membership decision.

use crate::error::ShapeError;
use crate::model::{Fact, NamedUrl, UrlNode};
use crate::well_known::{get_types, is_directly_named_class, RDF_TYPE};

/// A subject with its declared types and remaining facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedTopic {
    /// The subject being described.
    pub subject: UrlNode,
    /// Declared `rdf:type` objects, in document order.
    pub types: Vec<NamedUrl>,
    /// All other facts about the subject, in document order.
    pub values: Vec<Fact>,
}

impl TypedTopic {
    /// Creates a topic from already-separated types and values.
    pub fn new(subject: UrlNode, types: Vec<NamedUrl>, values: Vec<Fact>) -> Self {
        Self {
            subject,
            types,
            values,
        }
    }

    /// Builds a topic from every fact known about `subject`.
    ///
    /// Types come from [`get_types`]; every fact that is not an `rdf:type`
    /// statement is kept in `values`.
    ///
    /// # Errors
    ///
    /// Propagates shape errors from [`get_types`], and returns
    /// [`ShapeError::UnnamedType`] if a type is a namespace root.
    pub fn from_facts(subject: UrlNode, facts: Vec<Fact>) -> Result<Self, ShapeError> {
        let types = get_types(&subject, &facts)?
            .into_iter()
            .map(|ty| {
                ty.into_named()
                    .map_err(|object| ShapeError::UnnamedType { object })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let values = facts
            .into_iter()
            .filter(|fact| !RDF_TYPE.matches(&fact.predicate))
            .collect();
        Ok(Self::new(subject, types, values))
    }

    /// See [`is_directly_named_class`].
    #[must_use]
    pub fn is_directly_named_class(&self) -> bool {
        is_directly_named_class(self)
    }
}
