//! `schema-classify`: classifies every subject of a schema.org N-Triples document.
//!
//! Each subject is reported as `CLASS` (emitted as its own named type) or
//! `VALUE` (an enumeration member only), with its declared types and parents.
//! Processing stops at the first malformed `rdfs:comment`, `rdfs:subClassOf`
//! or `rdf:type` triple.
//!
//! **Usage:**
//! ```
//! schema-classify <input.nt> [--json] [--classes-only] [--verbose]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use schema_triples::{
    classify_subject, group_by_subject, ClassifiedSubject, Object, SchemaString, Triple,
    UrlError, UrlNode,
};
use sophia_api::source::TripleSource;
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple as _;
use sophia_turtle::parser::nt;
use tracing::{debug, info, Level};

/// Classify the subjects of a schema.org vocabulary document.
#[derive(Parser)]
#[command(
    name = "schema-classify",
    about = "Classify the subjects of a schema.org N-Triples document"
)]
struct Args {
    /// N-Triples document to read.
    input: PathBuf,

    /// Print the classification as JSON instead of a text report.
    #[arg(long)]
    json: bool,

    /// Only report directly named classes.
    #[arg(long)]
    classes_only: bool,

    /// Log every subject decision to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let triples = read_triples(BufReader::new(file))
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    info!(triples = triples.len(), "read N-Triples document");

    let mut records = Vec::new();
    for (subject, facts) in group_by_subject(triples) {
        let href = subject.to_string();
        let record = classify_subject(subject, facts)
            .with_context(|| format!("Failed to classify <{href}>"))?;
        if record.directly_named_class || !args.classes_only {
            records.push(record);
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&records)
            .context("Failed to serialize classification to JSON")?;
        println!("{json}");
    } else {
        print_report(&records);
    }
    Ok(())
}

/// Parses an N-Triples document into subject-bearing triples.
///
/// Triples whose subject or object is a blank node carry no vocabulary term
/// and are skipped.
///
/// # Errors
///
/// Returns an error if the document is not valid N-Triples or an IRI cannot be
/// parsed as a [`UrlNode`].
fn read_triples<R: BufRead>(reader: R) -> Result<Vec<Triple>> {
    let mut triples = Vec::new();
    let mut skipped = 0usize;
    nt::parse_bufread(reader)
        .try_for_each_triple(|t| -> Result<(), UrlError> {
            let subject = url_of(t.s())?;
            let predicate = url_of(t.p())?;
            let object = object_of(t.o())?;
            match (subject, predicate, object) {
                (Some(subject), Some(predicate), Some(object)) => {
                    triples.push(Triple::new(subject, predicate, object));
                }
                _ => skipped += 1,
            }
            Ok(())
        })
        .map_err(|e| anyhow!("{e}"))?;
    if skipped > 0 {
        debug!(skipped, "skipped triples with blank nodes");
    }
    Ok(triples)
}

/// Parses the IRI of `term`, or returns `None` for literals and blank nodes.
///
/// # Errors
///
/// Returns [`UrlError`] if the IRI is not an absolute URL.
fn url_of<T: Term>(term: T) -> Result<Option<UrlNode>, UrlError> {
    term.iri()
        .map(|iri| UrlNode::parse(iri.as_str()))
        .transpose()
}

/// Converts an object term, or returns `None` for blank nodes.
///
/// # Errors
///
/// Returns [`UrlError`] if the object is an IRI that cannot be parsed.
fn object_of<T: Term>(term: T) -> Result<Option<Object>, UrlError> {
    match term.kind() {
        TermKind::Iri => Ok(url_of(term)?.map(Object::Url)),
        TermKind::Literal => Ok(term.lexical_form().map(|value| {
            let literal = match term.language_tag() {
                Some(tag) => SchemaString::with_language(value.to_string(), tag.as_str()),
                None => SchemaString::new(value.to_string()),
            };
            Object::Literal(literal)
        })),
        _ => Ok(None),
    }
}

fn print_report(records: &[ClassifiedSubject]) {
    let mut classes = 0usize;
    let mut values = 0usize;

    for record in records {
        let status = if record.directly_named_class {
            classes += 1;
            "CLASS"
        } else {
            values += 1;
            "VALUE"
        };
        println!("[{status}] {}", record.subject);
        if !record.types.is_empty() {
            println!("        types:   {}", join(&record.types));
        }
        if !record.parents.is_empty() {
            println!("        parents: {}", join(&record.parents));
        }
    }

    println!();
    println!(
        "Summary: {} subjects, {} classes, {} values",
        records.len(),
        classes,
        values
    );
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
