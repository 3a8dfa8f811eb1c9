// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_parser::Pos;
use flureeql_model::{HistoryQuery, VARIABLE_SIGIL};
use serde_json::Value;
use tracing::error;

use crate::translation::{Arguments, translation_error::TranslationError};

/// `_history(subject: "...")`, optionally with `block`, `showAuth` and `prettyPrint`.
///
/// The hyphenated `show-auth`/`pretty-print` spellings are looked up first; they cannot be
/// written in GraphQL syntax but may reach us from documents assembled by other means.
pub(in crate::translation) fn history_query(
    field_name: &str,
    arguments: &Arguments,
    pos: Pos,
) -> Result<HistoryQuery, TranslationError> {
    let subject = arguments
        .supplied("subject")
        .ok_or(TranslationError::MissingHistorySubject(pos))?
        .as_str()
        .ok_or(TranslationError::NonStringHistorySubject(pos))?;

    let either = |legacy, current| {
        arguments
            .supplied(legacy)
            .or_else(|| arguments.supplied(current))
            .cloned()
    };

    Ok(HistoryQuery {
        history: decode_legacy_subject(field_name, subject)?,
        block: arguments.supplied("block").cloned(),
        show_auth: either("show-auth", "showAuth"),
        pretty_print: either("pretty-print", "prettyPrint"),
    })
}

/// Decode a history subject, which is JSON carried inside a GraphQL string: a subject id
/// (`"369435906932737"`), an ident pair (`"[\"_user/username\", \"jdoe\"]"`) and so on. A
/// variable reference (`?sub`) is passed through untouched.
pub fn decode_legacy_subject(collection: &str, subject: &str) -> Result<Value, TranslationError> {
    if subject.starts_with(VARIABLE_SIGIL) {
        return Ok(Value::String(subject.to_string()));
    }

    serde_json::from_str(subject).map_err(|source| {
        error!(collection, subject, %source, "Failed to decode history subject");
        TranslationError::MalformedHistorySubject {
            subject: subject.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::test_support::field;
    use serde_json::json;
    use test_log::test;

    fn translate(query: &str) -> Result<Value, TranslationError> {
        let field = field(query);
        let arguments = Arguments::from_field(&field).unwrap();
        history_query(field.node.name.node.as_str(), &arguments, field.pos)
            .map(|query| serde_json::to_value(query).unwrap())
    }

    #[test]
    fn numeric_subject() {
        assert_eq!(
            translate(r#"{ _history(subject: "369435906932737", block: 4) }"#).unwrap(),
            json!({ "history": 369435906932737_i64, "block": 4 })
        );
    }

    #[test]
    fn ident_subject_with_flags() {
        assert_eq!(
            translate(
                r#"{ _history(subject: "[\"_user/username\", \"jdoe\"]", showAuth: true, prettyPrint: false) }"#
            )
            .unwrap(),
            json!({
                "history": ["_user/username", "jdoe"],
                "show-auth": true,
                "pretty-print": false
            })
        );
    }

    #[test]
    fn variable_subject() {
        assert_eq!(
            translate("query($sub: String!, $b: Int) { _history(subject: $sub, block: $b) }")
                .unwrap(),
            json!({ "history": "?sub", "block": "?b" })
        );
    }

    #[test]
    fn subject_is_required() {
        for query in ["{ _history(block: 4) }", "{ _history(subject: null) }"] {
            let error = translate(query).unwrap_err();
            assert_eq!(error.to_string(), "History query must always have a subject key.");
        }
    }

    #[test]
    fn subject_must_be_a_string() {
        let error = translate("{ _history(subject: 369435906932737) }").unwrap_err();

        assert_eq!(
            error.to_string(),
            "History query subject must always be a JSON string."
        );
    }

    #[test]
    fn malformed_subject() {
        let error = translate(r#"{ _history(subject: "[\"_user/username\"") }"#).unwrap_err();

        assert!(matches!(
            error,
            TranslationError::MalformedHistorySubject { ref subject, .. } if subject == r#"["_user/username""#
        ));
    }

    #[test]
    fn legacy_decoding() {
        assert_eq!(decode_legacy_subject("_history", "?s").unwrap(), json!("?s"));
        assert_eq!(decode_legacy_subject("_history", "\"jdoe\"").unwrap(), json!("jdoe"));
        assert!(decode_legacy_subject("_history", "jdoe").is_err());
    }
}
