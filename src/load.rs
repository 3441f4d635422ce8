//! YAML loading — ontology text → `Vec<Record>`.
//!
//! The whole input is buffered before parsing; there is no per-record
//! streaming. JSON input works too, being a subset of YAML.

use std::io::Read;

use serde::Deserialize;

use crate::model::{EntityRecord, Record, VerbRecord};
use crate::Result;

/// One sequence item as it appears on disk. Keys other than `Entity` and
/// `Verb` are ignored.
#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(rename = "Entity")]
    entity: Option<EntityRecord>,
    #[serde(rename = "Verb")]
    verb: Option<VerbRecord>,
}

/// Parse ontology records from a YAML string.
///
/// Empty or `null` documents yield no records. Items carrying neither an
/// `Entity` nor a `Verb` key are skipped with a warning; anything the YAML
/// parser rejects is an [`Error::Parse`](crate::Error::Parse).
pub fn from_str(input: &str) -> Result<Vec<Record>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    let items: Option<Vec<RawItem>> = serde_yaml::from_str(input)?;

    let mut records = Vec::new();
    for (index, item) in items.unwrap_or_default().into_iter().enumerate() {
        let RawItem { entity, verb } = item;
        if entity.is_none() && verb.is_none() {
            tracing::warn!(index, "skipping item with neither Entity nor Verb");
            continue;
        }
        records.extend(entity.map(Record::Entity));
        records.extend(verb.map(Record::Verb));
    }
    Ok(records)
}

/// Read `reader` to the end and parse it with [`from_str`].
pub fn from_reader<R: Read>(mut reader: R) -> Result<Vec<Record>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)?;
    from_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AllowedEdge;

    #[test]
    fn test_entity_and_verb() {
        let yaml = r#"
- Entity:
    id: http://www.purl.org/ogit/Bar
    parent: http://www.purl.org/ogit/Foo
- Verb:
    id: http://www.purl.org/ogit/connects
    allowed:
      - from: http://www.purl.org/ogit/Foo
        to: http://www.purl.org/ogit/Bar
"#;
        let records = from_str(yaml).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            Record::Entity(
                EntityRecord::new("http://www.purl.org/ogit/Bar")
                    .with_parent("http://www.purl.org/ogit/Foo")
            )
        );
        let Record::Verb(verb) = &records[1] else { panic!("expected verb") };
        assert_eq!(
            verb.allowed,
            vec![AllowedEdge {
                from: "http://www.purl.org/ogit/Foo".into(),
                to: "http://www.purl.org/ogit/Bar".into(),
            }]
        );
    }

    #[test]
    fn test_extra_fields_ignored() {
        let yaml = r#"
- Entity:
    id: http://www.purl.org/ogit/Foo
    name: Foo
    description: a foo
    mandatory: []
- Verb:
    id: http://www.purl.org/ogit/owns
    cardinality: many
"#;
        let records = from_str(yaml).unwrap();
        assert_eq!(records[0], Record::Entity(EntityRecord::new("http://www.purl.org/ogit/Foo")));
        assert_eq!(records[1], Record::Verb(VerbRecord::new("http://www.purl.org/ogit/owns")));
    }

    #[test]
    fn test_null_allowed_is_empty() {
        let records = from_str("- Verb: { id: ogit/x, allowed: ~ }").unwrap();
        assert_eq!(records, vec![Record::Verb(VerbRecord::new("ogit/x"))]);
    }

    #[test]
    fn test_unknown_item_skipped() {
        let yaml = "- Attribute: { id: ogit/name }\n- Entity: { id: ogit/Foo }\n";
        let records = from_str(yaml).unwrap();
        assert_eq!(records, vec![Record::Entity(EntityRecord::new("ogit/Foo"))]);
    }

    #[test]
    fn test_item_with_both_keys() {
        let yaml = "- Entity: { id: ogit/Foo }\n  Verb: { id: ogit/rel }\n";
        let records = from_str(yaml).unwrap();
        assert_eq!(
            records,
            vec![
                Record::Entity(EntityRecord::new("ogit/Foo")),
                Record::Verb(VerbRecord::new("ogit/rel")),
            ]
        );
    }

    #[test]
    fn test_empty_and_null_documents() {
        assert!(from_str("").unwrap().is_empty());
        assert!(from_str("  \n").unwrap().is_empty());
        assert!(from_str("~").unwrap().is_empty());
    }

    #[test]
    fn test_json_input() {
        let json = r#"[{"Entity": {"id": "http://www.purl.org/ogit/Foo"}}]"#;
        assert_eq!(from_str(json).unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_input_is_error() {
        assert!(matches!(from_str("- Entity: [unclosed"), Err(crate::Error::Parse(_))));
        assert!(matches!(from_str("just a scalar"), Err(crate::Error::Parse(_))));
    }

    #[test]
    fn test_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = &[0x2d, 0x20, 0xff, 0xfe];
        assert!(matches!(from_reader(bytes), Err(crate::Error::Utf8(_))));
    }
}
