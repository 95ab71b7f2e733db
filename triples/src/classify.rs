//! Per-subject classification: groups a triple stream by subject and folds each
//! subject's facts into a single record for the type-model builder.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::ShapeError;
use crate::model::{Fact, NamedUrl, Triple, UrlNode};
use crate::topic::TypedTopic;
use crate::well_known::{classify, Classified};

/// Everything the type-model builder needs to know about one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassifiedSubject {
    /// The subject.
    pub subject: UrlNode,
    /// The first `rdfs:comment`, if any.
    pub comment: Option<String>,
    /// `rdfs:subClassOf` targets, in document order.
    pub parents: Vec<NamedUrl>,
    /// `rdf:type` objects, in document order.
    pub types: Vec<NamedUrl>,
    /// Whether the subject is emitted as its own named class.
    pub directly_named_class: bool,
}

/// Classifies one subject from all of its facts.
///
/// # Errors
///
/// Returns the first [`ShapeError`] raised by any fact. No partial record is
/// produced.
pub fn classify_subject(
    subject: UrlNode,
    facts: Vec<Fact>,
) -> Result<ClassifiedSubject, ShapeError> {
    let mut comment = None;
    let mut parents = Vec::new();
    for fact in &facts {
        match classify(fact)? {
            Some(Classified::Comment(c)) => {
                if comment.is_some() {
                    warn!(%subject, dropped = %c.comment, "duplicate rdfs:comment");
                } else {
                    comment = Some(c.comment);
                }
            }
            Some(Classified::Parent(p)) => parents.push(p.sub_class_of),
            Some(Classified::Type(_)) | None => {}
        }
    }

    let topic = TypedTopic::from_facts(subject, facts)?;
    let directly_named_class = topic.is_directly_named_class();
    debug!(
        subject = %topic.subject,
        types = topic.types.len(),
        parents = parents.len(),
        directly_named_class,
        "classified subject"
    );

    Ok(ClassifiedSubject {
        subject: topic.subject,
        comment,
        parents,
        types: topic.types,
        directly_named_class,
    })
}

/// Groups triples by subject.
///
/// Subjects keep the order in which they were first seen, and each subject's
/// facts keep document order.
pub fn group_by_subject<I>(triples: I) -> IndexMap<UrlNode, Vec<Fact>>
where
    I: IntoIterator<Item = Triple>,
{
    let mut subjects: IndexMap<UrlNode, Vec<Fact>> = IndexMap::new();
    for triple in triples {
        let (subject, fact) = triple.split();
        subjects.entry(subject).or_default().push(fact);
    }
    subjects
}
