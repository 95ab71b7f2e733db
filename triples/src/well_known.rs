//! Recognition of the well-known RDF and RDFS vocabulary terms.
//!
//! Each recognized predicate is described by a [`WellKnownTerm`]: canonical
//! context, canonical name and the schemes under which it has been published.
//! The classifiers are side-effect-free on unrelated predicates and return
//! `Ok(None)`, so a caller may probe every fact with every classifier.
//!
//! | Term | Namespace | Schemes |
//! |------|-----------|---------|
//! | [`RDFS_COMMENT`] | RDF Schema | `http`, `https` |
//! | [`RDFS_SUB_CLASS_OF`] | RDF Schema | `http`, `https` |
//! | [`RDFS_CLASS`] | RDF Schema | `http`, `https` |
//! | [`RDF_TYPE`] | RDF syntax | `http` |

use tracing::trace;

use crate::error::ShapeError;
use crate::model::{Fact, NamedUrl, Object, UrlNode};
use crate::topic::TypedTopic;

/// Namespace contexts, without scheme.
pub mod contexts {
    /// RDF Schema.
    pub const RDFS: &str = "www.w3.org/2000/01/rdf-schema";
    /// RDF syntax.
    pub const RDF: &str = "www.w3.org/1999/02/22-rdf-syntax-ns";
}

/// Schemes under which a namespace is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemePolicy {
    /// Only the given scheme.
    Exact(&'static str),
    /// Either `http` or `https`.
    HttpOrHttps,
}

impl SchemePolicy {
    /// Returns true if `scheme` satisfies this policy.
    #[must_use]
    pub fn accepts(self, scheme: &str) -> bool {
        match self {
            SchemePolicy::Exact(expected) => scheme == expected,
            SchemePolicy::HttpOrHttps => scheme == "http" || scheme == "https",
        }
    }
}

/// A vocabulary term recognized by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WellKnownTerm {
    /// Canonical context, without scheme.
    pub context: &'static str,
    /// Canonical term name.
    pub name: &'static str,
    /// Accepted schemes.
    pub scheme: SchemePolicy,
}

impl WellKnownTerm {
    /// Returns true if `url` spells this term.
    #[must_use]
    pub fn matches(&self, url: &UrlNode) -> bool {
        url.name() == Some(self.name)
            && url.context() == self.context
            && self.scheme.accepts(url.scheme())
    }
}

/// `rdfs:comment`.
pub const RDFS_COMMENT: WellKnownTerm = WellKnownTerm {
    context: contexts::RDFS,
    name: "comment",
    scheme: SchemePolicy::HttpOrHttps,
};

/// `rdfs:subClassOf`.
pub const RDFS_SUB_CLASS_OF: WellKnownTerm = WellKnownTerm {
    context: contexts::RDFS,
    name: "subClassOf",
    scheme: SchemePolicy::HttpOrHttps,
};

/// `rdfs:Class`, the meta-class of every named class.
pub const RDFS_CLASS: WellKnownTerm = WellKnownTerm {
    context: contexts::RDFS,
    name: "Class",
    scheme: SchemePolicy::HttpOrHttps,
};

/// `rdf:type`.
pub const RDF_TYPE: WellKnownTerm = WellKnownTerm {
    context: contexts::RDF,
    name: "type",
    scheme: SchemePolicy::Exact("http"),
};

/// Documentation harvested from an `rdfs:comment` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedComment {
    /// The literal text.
    pub comment: String,
}

/// An inheritance edge harvested from an `rdfs:subClassOf` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedParent {
    /// The parent class.
    pub sub_class_of: NamedUrl,
}

/// A fact recognized by one of the well-known predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// From `rdfs:comment`.
    Comment(ClassifiedComment),
    /// From `rdfs:subClassOf`.
    Parent(ClassifiedParent),
    /// From `rdf:type`.
    Type(UrlNode),
}

type Handler = fn(&Fact) -> Result<Classified, ShapeError>;

/// Recognized predicates in evaluation order. Handlers run only after their
/// term has matched the predicate.
const WELL_KNOWN_PREDICATES: &[(WellKnownTerm, Handler)] = &[
    (RDFS_COMMENT, classify_comment),
    (RDFS_SUB_CLASS_OF, classify_parent),
    (RDF_TYPE, classify_type),
];

/// The predicates [`classify`] recognizes, in evaluation order.
pub fn recognized_predicates() -> impl Iterator<Item = WellKnownTerm> {
    WELL_KNOWN_PREDICATES.iter().map(|(term, _)| *term)
}

/// Offers `fact` to every recognized predicate and returns the first match.
///
/// # Errors
///
/// Returns the matched classifier's [`ShapeError`] if the object has the wrong
/// shape for the predicate.
pub fn classify(fact: &Fact) -> Result<Option<Classified>, ShapeError> {
    WELL_KNOWN_PREDICATES
        .iter()
        .find(|(term, _)| term.matches(&fact.predicate))
        .map(|(_, handler)| handler(fact))
        .transpose()
}

/// Extracts the text of an `rdfs:comment` fact.
///
/// `https://schema.org/comment` is a different term and is not recognized.
///
/// # Errors
///
/// Returns [`ShapeError::NonStringObject`] if the object is a reference.
pub fn get_comment(fact: &Fact) -> Result<Option<ClassifiedComment>, ShapeError> {
    if !RDFS_COMMENT.matches(&fact.predicate) {
        return Ok(None);
    }
    comment_of(fact).map(Some)
}

/// Extracts the parent of an `rdfs:subClassOf` fact.
///
/// # Errors
///
/// Returns [`ShapeError::UnnamedSuperClass`] if the object is a namespace root
/// and [`ShapeError::UnexpectedObject`] if it is a literal.
pub fn get_sub_class_of(fact: &Fact) -> Result<Option<ClassifiedParent>, ShapeError> {
    if !RDFS_SUB_CLASS_OF.matches(&fact.predicate) {
        return Ok(None);
    }
    parent_of(fact).map(Some)
}

/// Extracts the object of an `rdf:type` fact, unchanged.
///
/// # Errors
///
/// Returns [`ShapeError::UnexpectedType`] if the object is a literal.
pub fn get_type(fact: &Fact) -> Result<Option<UrlNode>, ShapeError> {
    if !RDF_TYPE.matches(&fact.predicate) {
        return Ok(None);
    }
    type_of(fact).map(Some)
}

/// Collects the `rdf:type` objects of one subject's facts.
///
/// Input order and duplicates are preserved. `subject` is used only for
/// diagnostics; the facts are assumed to belong to it.
///
/// # Errors
///
/// Propagates the first [`ShapeError`] from [`get_type`].
pub fn get_types(subject: &UrlNode, facts: &[Fact]) -> Result<Vec<UrlNode>, ShapeError> {
    let mut types = Vec::new();
    for fact in facts {
        if let Some(ty) = get_type(fact)? {
            trace!(%subject, %ty, "declared type");
            types.push(ty);
        }
    }
    Ok(types)
}

/// Returns true if the topic's subject should be emitted as its own named
/// class rather than only as an enumeration member.
///
/// A subject is a directly named class exactly when `rdfs:Class` is among its
/// declared types, whatever else it is typed as. `topic.values` is not
/// consulted.
#[must_use]
pub fn is_directly_named_class(topic: &TypedTopic) -> bool {
    topic.types.iter().any(|ty| RDFS_CLASS.matches(ty.as_url()))
}

fn comment_of(fact: &Fact) -> Result<ClassifiedComment, ShapeError> {
    match &fact.object {
        Object::Literal(s) => Ok(ClassifiedComment {
            comment: s.value.clone(),
        }),
        Object::Url(url) => Err(ShapeError::NonStringObject {
            predicate: fact.predicate.clone(),
            object: url.clone(),
        }),
    }
}

fn parent_of(fact: &Fact) -> Result<ClassifiedParent, ShapeError> {
    match &fact.object {
        Object::Url(url) => url
            .clone()
            .into_named()
            .map(|sub_class_of| ClassifiedParent { sub_class_of })
            .map_err(|object| ShapeError::UnnamedSuperClass { object }),
        Object::Literal(s) => Err(ShapeError::UnexpectedObject {
            predicate: fact.predicate.clone(),
            object: s.clone(),
        }),
    }
}

fn type_of(fact: &Fact) -> Result<UrlNode, ShapeError> {
    match &fact.object {
        Object::Url(url) => Ok(url.clone()),
        Object::Literal(s) => Err(ShapeError::UnexpectedType { object: s.clone() }),
    }
}

fn classify_comment(fact: &Fact) -> Result<Classified, ShapeError> {
    comment_of(fact).map(Classified::Comment)
}

fn classify_parent(fact: &Fact) -> Result<Classified, ShapeError> {
    parent_of(fact).map(Classified::Parent)
}

fn classify_type(fact: &Fact) -> Result<Classified, ShapeError> {
    type_of(fact).map(Classified::Type)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::SchemaString;

    const RDFS_HTTP: &str = "http://www.w3.org/2000/01/rdf-schema#";
    const RDFS_HTTPS: &str = "https://www.w3.org/2000/01/rdf-schema#";
    const RDF_TYPE_IRI: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    const SCHEMA: &str = "https://schema.org/";

    fn url(href: &str) -> UrlNode {
        UrlNode::parse(href).unwrap()
    }

    fn rdfs(name: &str) -> UrlNode {
        url(&format!("{RDFS_HTTP}{name}"))
    }

    fn schema(name: &str) -> UrlNode {
        url(&format!("{SCHEMA}{name}"))
    }

    fn named(href: &str) -> NamedUrl {
        url(href).into_named().unwrap()
    }

    fn type_fact(object: UrlNode) -> Fact {
        Fact::new(url(RDF_TYPE_IRI), object)
    }

    fn label_fact(text: &str) -> Fact {
        Fact::new(rdfs("label"), SchemaString::new(text))
    }

    fn topic(subject: &str, types: &[&str]) -> TypedTopic {
        TypedTopic::new(
            url(subject),
            types.iter().map(|t| named(t)).collect(),
            Vec::new(),
        )
    }

    #[test]
    fn unrelated_predicates_are_not_applicable() {
        let objects: Vec<Object> = vec![
            schema("Thing").into(),
            url(SCHEMA).into(),
            SchemaString::new("text").into(),
        ];
        let predicates = [
            rdfs("label"),
            schema("name"),
            schema("comment"),
            schema("subClassOf"),
            url("https://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
            url("http://www.w3.org/2000/01/rdf-schema"),
        ];
        for predicate in &predicates {
            for object in &objects {
                let fact = Fact::new(predicate.clone(), object.clone());
                assert_eq!(get_comment(&fact), Ok(None), "{fact}");
                assert_eq!(get_sub_class_of(&fact), Ok(None), "{fact}");
                assert_eq!(get_type(&fact), Ok(None), "{fact}");
                assert_eq!(classify(&fact), Ok(None), "{fact}");
            }
        }
    }

    #[test]
    fn comment_extracts_literal_under_both_schemes() {
        for ns in [RDFS_HTTP, RDFS_HTTPS] {
            let fact = Fact::new(
                url(&format!("{ns}comment")),
                SchemaString::with_language("A person (alive, dead, undead, or fictional).", "en"),
            );
            assert_eq!(
                get_comment(&fact).unwrap(),
                Some(ClassifiedComment {
                    comment: "A person (alive, dead, undead, or fictional).".to_string()
                })
            );
        }
    }

    #[test]
    fn schema_org_comment_is_not_rdfs_comment() {
        for href in ["https://schema.org/comment", "http://schema.org/comment"] {
            let fact = Fact::new(url(href), SchemaString::new("Not documentation."));
            assert_eq!(get_comment(&fact), Ok(None));
        }
    }

    #[test]
    fn comment_with_reference_object_is_a_shape_error() {
        let fact = Fact::new(rdfs("comment"), schema("Thing"));
        let err = get_comment(&fact).unwrap_err();
        assert_eq!(err.reason(), "non-string object");
        assert!(matches!(err, ShapeError::NonStringObject { ref object, .. } if *object == schema("Thing")));
    }

    #[test]
    fn sub_class_of_accepts_both_schemes() {
        for ns in [RDFS_HTTP, RDFS_HTTPS] {
            let fact = Fact::new(url(&format!("{ns}subClassOf")), schema("CreativeWork"));
            let parent = get_sub_class_of(&fact).unwrap().unwrap();
            assert_eq!(parent.sub_class_of, named("https://schema.org/CreativeWork"));
            assert_eq!(parent.sub_class_of.name(), "CreativeWork");
        }
    }

    #[test]
    fn sub_class_of_rejects_unnamed_roots_identically() {
        let errors: Vec<ShapeError> = ["https://schema.org/", "https://schema.org"]
            .into_iter()
            .map(|root| get_sub_class_of(&Fact::new(rdfs("subClassOf"), url(root))).unwrap_err())
            .collect();
        assert_eq!(errors[0], errors[1]);
        assert_eq!(errors[0].reason(), "unnamed URL used as a super-class");
    }

    #[test]
    fn sub_class_of_rejects_literals() {
        let fact = Fact::new(rdfs("subClassOf"), SchemaString::new("Thing"));
        let err = get_sub_class_of(&fact).unwrap_err();
        assert_eq!(err.reason(), "unexpected object for predicate");
    }

    #[test]
    fn type_returns_object_unchanged() {
        for object in [schema("Boolean"), rdfs("Class"), url(SCHEMA)] {
            assert_eq!(get_type(&type_fact(object.clone())), Ok(Some(object)));
        }
    }

    #[test]
    fn type_rejects_literals() {
        let fact = Fact::new(url(RDF_TYPE_IRI), SchemaString::new("Class"));
        let err = get_type(&fact).unwrap_err();
        assert_eq!(err.reason(), "unexpected type");
    }

    #[test]
    fn classify_dispatches_by_predicate() {
        assert_eq!(
            classify(&type_fact(rdfs("Class"))),
            Ok(Some(Classified::Type(rdfs("Class"))))
        );
        assert_eq!(
            classify(&Fact::new(rdfs("subClassOf"), schema("Thing"))),
            Ok(Some(Classified::Parent(ClassifiedParent {
                sub_class_of: named("https://schema.org/Thing")
            })))
        );
        assert_eq!(
            classify(&Fact::new(rdfs("comment"), SchemaString::new("x"))),
            Ok(Some(Classified::Comment(ClassifiedComment {
                comment: "x".to_string()
            })))
        );
        let names: Vec<&str> = recognized_predicates().map(|t| t.name).collect();
        assert_eq!(names, ["comment", "subClassOf", "type"]);
    }

    #[test]
    fn types_are_filtered_in_order() {
        let subject = schema("Thing");
        let facts = vec![type_fact(rdfs("Class")), label_fact("Thing")];
        assert_eq!(get_types(&subject, &facts).unwrap(), vec![rdfs("Class")]);

        let facts = vec![
            type_fact(rdfs("Class")),
            label_fact("Thing"),
            type_fact(schema("Thing")),
        ];
        assert_eq!(
            get_types(&subject, &facts).unwrap(),
            vec![rdfs("Class"), schema("Thing")]
        );
    }

    #[test]
    fn types_keep_duplicates_and_skip_other_predicates() {
        let subject = schema("Text");
        let facts = vec![
            Fact::new(rdfs("subClassOf"), schema("DataType")),
            type_fact(schema("DataType")),
            label_fact("Text"),
            type_fact(rdfs("Class")),
            type_fact(schema("DataType")),
        ];
        assert_eq!(
            get_types(&subject, &facts).unwrap(),
            vec![schema("DataType"), rdfs("Class"), schema("DataType")]
        );
        assert_eq!(get_types(&subject, &[]).unwrap(), Vec::<UrlNode>::new());
    }

    #[test]
    fn types_propagate_shape_errors() {
        let facts = vec![
            type_fact(rdfs("Class")),
            Fact::new(url(RDF_TYPE_IRI), SchemaString::new("Class")),
        ];
        let err = get_types(&schema("Thing"), &facts).unwrap_err();
        assert_eq!(err.reason(), "unexpected type");
    }

    #[test]
    fn data_type_with_class_is_directly_named() {
        let class = "http://www.w3.org/2000/01/rdf-schema#Class";
        let data_type = "https://schema.org/DataType";
        assert!(is_directly_named_class(&topic(
            "https://schema.org/Text",
            &[class, data_type]
        )));
        assert!(is_directly_named_class(&topic(
            "https://schema.org/Text",
            &[data_type, class]
        )));
    }

    #[test]
    fn enum_value_is_not_directly_named() {
        assert!(!is_directly_named_class(&topic(
            "https://schema.org/True",
            &["https://schema.org/Boolean"]
        )));
        assert!(!is_directly_named_class(&topic("https://schema.org/True", &[])));
    }

    #[test]
    fn class_membership_dominates_enum_membership() {
        assert!(is_directly_named_class(&topic(
            "https://schema.org/ItsComplicated",
            &[
                "https://schema.org/Boolean",
                "https://www.w3.org/2000/01/rdf-schema#Class"
            ]
        )));
    }

    #[test]
    fn values_do_not_affect_the_decision() {
        let mut enum_value = topic("https://schema.org/True", &["https://schema.org/Boolean"]);
        enum_value.values = vec![Fact::new(rdfs("subClassOf"), rdfs("Class"))];
        assert!(!is_directly_named_class(&enum_value));
    }
}
