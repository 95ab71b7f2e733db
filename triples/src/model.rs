//! Vocabulary identifiers, literals and triple facts.
//!
//! Every term of the schema.org vocabulary is an absolute URL. A [`UrlNode`]
//! splits that URL into a *context* (the namespace the term lives in, without
//! its scheme) and an optional *name* (the term itself). Nodes without a name
//! are bare namespace roots such as `https://schema.org/`; positions that can
//! only hold a term take a [`NamedUrl`] instead.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use percent_encoding::percent_decode_str;
use thiserror::Error;
use url::Url;

/// Errors produced when parsing a [`UrlNode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// The text is not an absolute URL.
    #[error("invalid URL {href:?}: {source}")]
    Invalid {
        /// The rejected text.
        href: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },
}

/// An absolute URL naming a vocabulary term or a namespace root.
///
/// Equality and hashing are structural over scheme, context and name; the
/// original spelling is kept only for display. `http` and `https` spellings
/// are distinct nodes here. Scheme-insensitive matching is the job of
/// [`WellKnownTerm`](crate::well_known::WellKnownTerm).
#[derive(Debug, Clone)]
pub struct UrlNode {
    href: String,
    scheme: String,
    context: String,
    name: Option<String>,
}

impl UrlNode {
    /// Parses an absolute URL.
    ///
    /// The name is the fragment when one is present (`rdf-schema#comment`),
    /// otherwise the last path segment (`schema.org/Person`). An empty
    /// fragment or a trailing separator yields an unnamed node, so
    /// `https://schema.org/` and `https://schema.org` parse identically.
    ///
    /// Names are percent-decoded (`schema.org/Caf%C3%A9` is named `Café`);
    /// the context keeps the normalized, encoded form. A query string stays
    /// with the part it precedes: it is appended to the name
    /// (`issues?q=1`), or to the context when a fragment follows it. URLs
    /// without a host (`urn:`, `mailto:`) have an empty authority, so
    /// `urn:isbn:0451450523` has context `""` and name `isbn:0451450523`.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError`] if `href` is not an absolute URL.
    pub fn parse(href: &str) -> Result<Self, UrlError> {
        let url = Url::parse(href).map_err(|source| UrlError::Invalid {
            href: href.to_string(),
            source,
        })?;
        let authority = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        };
        let query = url
            .query()
            .filter(|q| !q.is_empty())
            .map(|q| format!("?{q}"))
            .unwrap_or_default();

        let path = url.path();
        let (context_path, name) = match url.fragment() {
            Some(fragment) => (
                format!("{}{query}", path.trim_end_matches('/')),
                decode(fragment),
            ),
            None => {
                let (dir, last) = match path.rfind('/') {
                    Some(i) => (&path[..i], &path[i + 1..]),
                    None => ("", path),
                };
                (
                    dir.trim_end_matches('/').to_string(),
                    format!("{}{query}", decode(last)),
                )
            }
        };

        Ok(Self {
            href: href.to_string(),
            scheme: url.scheme().to_string(),
            context: format!("{authority}{context_path}"),
            name: Some(name).filter(|n| !n.is_empty()),
        })
    }

    /// The URL as it was written.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The URL scheme, lowercased (e.g. `"https"`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host and path of the namespace, without scheme or trailing separator
    /// (e.g. `"www.w3.org/2000/01/rdf-schema"`).
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The percent-decoded term name, or `None` for a namespace root.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if this node names a term.
    #[must_use]
    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }

    /// Converts into a [`NamedUrl`].
    ///
    /// # Errors
    ///
    /// Hands the node back unchanged if it is a namespace root.
    pub fn into_named(self) -> Result<NamedUrl, UrlNode> {
        if self.is_named() {
            Ok(NamedUrl(self))
        } else {
            Err(self)
        }
    }
}

fn decode(component: &str) -> String {
    percent_decode_str(component).decode_utf8_lossy().into_owned()
}

impl PartialEq for UrlNode {
    fn eq(&self, other: &Self) -> bool {
        self.scheme == other.scheme && self.context == other.context && self.name == other.name
    }
}

impl Eq for UrlNode {}

impl Hash for UrlNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scheme.hash(state);
        self.context.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for UrlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href)
    }
}

impl FromStr for UrlNode {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UrlNode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.href)
    }
}

/// A [`UrlNode`] that is guaranteed to name a term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct NamedUrl(UrlNode);

impl NamedUrl {
    /// The term name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.name().unwrap_or_default()
    }

    /// Borrows the underlying node.
    #[must_use]
    pub fn as_url(&self) -> &UrlNode {
        &self.0
    }

    /// Unwraps into the underlying node.
    #[must_use]
    pub fn into_url(self) -> UrlNode {
        self.0
    }
}

impl AsRef<UrlNode> for NamedUrl {
    fn as_ref(&self) -> &UrlNode {
        &self.0
    }
}

impl From<NamedUrl> for UrlNode {
    fn from(named: NamedUrl) -> Self {
        named.0
    }
}

impl fmt::Display for NamedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A string literal, optionally language-tagged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SchemaString {
    /// Lexical value.
    pub value: String,
    /// BCP 47 language tag, if any.
    pub language: Option<String>,
}

impl SchemaString {
    /// A plain literal.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
        }
    }

    /// A language-tagged literal.
    pub fn with_language(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
        }
    }
}

impl fmt::Display for SchemaString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.language {
            Some(lang) => write!(f, "{:?}@{lang}", self.value),
            None => write!(f, "{:?}", self.value),
        }
    }
}

/// The object of a triple: a reference or a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Object {
    /// A reference to another term.
    Url(UrlNode),
    /// A string literal.
    Literal(SchemaString),
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Url(url) => write!(f, "<{url}>"),
            Object::Literal(s) => s.fmt(f),
        }
    }
}

impl From<UrlNode> for Object {
    fn from(url: UrlNode) -> Self {
        Object::Url(url)
    }
}

impl From<NamedUrl> for Object {
    fn from(url: NamedUrl) -> Self {
        Object::Url(url.into_url())
    }
}

impl From<SchemaString> for Object {
    fn from(s: SchemaString) -> Self {
        Object::Literal(s)
    }
}

/// A predicate/object pair about a subject held by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fact {
    /// The predicate term.
    pub predicate: UrlNode,
    /// The object value.
    pub object: Object,
}

impl Fact {
    /// Creates a fact.
    pub fn new(predicate: UrlNode, object: impl Into<Object>) -> Self {
        Self {
            predicate,
            object: object.into(),
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> {}", self.predicate, self.object)
    }
}

/// A full statement as delivered by a triple parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// The subject term.
    pub subject: UrlNode,
    /// The predicate term.
    pub predicate: UrlNode,
    /// The object value.
    pub object: Object,
}

impl Triple {
    /// Creates a triple.
    pub fn new(subject: UrlNode, predicate: UrlNode, object: impl Into<Object>) -> Self {
        Self {
            subject,
            predicate,
            object: object.into(),
        }
    }

    /// Splits off the subject.
    #[must_use]
    pub fn split(self) -> (UrlNode, Fact) {
        (
            self.subject,
            Fact {
                predicate: self.predicate,
                object: self.object,
            },
        )
    }

    /// Drops the subject.
    #[must_use]
    pub fn into_fact(self) -> Fact {
        self.split().1
    }
}
