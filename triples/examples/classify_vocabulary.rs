//! Classifies a handful of schema.org subjects and prints the result.
//!
//! Run with: `cargo run --example classify_vocabulary -p schema-triples`

use schema_triples::{classify_subject, group_by_subject, SchemaString, Triple, UrlNode};

const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
const SCHEMA: &str = "https://schema.org/";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let term = |ns: &str, name: &str| UrlNode::parse(&format!("{ns}{name}"));

    let triples = vec![
        Triple::new(term(SCHEMA, "Text")?, UrlNode::parse(RDF_TYPE)?, term(RDFS, "Class")?),
        Triple::new(term(SCHEMA, "Text")?, UrlNode::parse(RDF_TYPE)?, term(SCHEMA, "DataType")?),
        Triple::new(
            term(SCHEMA, "Text")?,
            term(RDFS, "comment")?,
            SchemaString::new("Data type: Text."),
        ),
        Triple::new(term(SCHEMA, "True")?, UrlNode::parse(RDF_TYPE)?, term(SCHEMA, "Boolean")?),
        Triple::new(
            term(SCHEMA, "ItsComplicated")?,
            UrlNode::parse(RDF_TYPE)?,
            term(SCHEMA, "Boolean")?,
        ),
        Triple::new(
            term(SCHEMA, "ItsComplicated")?,
            UrlNode::parse(RDF_TYPE)?,
            term(RDFS, "Class")?,
        ),
    ];

    for (subject, facts) in group_by_subject(triples) {
        let record = classify_subject(subject, facts)?;
        let kind = if record.directly_named_class {
            "class"
        } else {
            "enum value"
        };
        println!(
            "  {:40} {:10} {}",
            record.subject.href(),
            kind,
            record.comment.as_deref().unwrap_or("")
        );
    }
    Ok(())
}
