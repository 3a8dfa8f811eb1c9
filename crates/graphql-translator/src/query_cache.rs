// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dashmap::DashMap;
use flureeql_model::FlureeDocument;

/// Translations keyed by normalized query text (see [`normalize_query`]). Safe to share between
/// threads.
#[derive(Debug, Default)]
pub struct QueryCache {
    documents: DashMap<String, FlureeDocument>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<FlureeDocument> {
        self.documents.get(key).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, key: String, document: FlureeDocument) {
        self.documents.insert(key, document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn clear(&self) {
        self.documents.clear();
    }
}

/// Reduce query text to a canonical form so that formatting differences share a cache entry.
///
/// Outside string literals, comments are dropped and every run of ignored tokens (space, tab,
/// line terminators, commas and the byte order mark) becomes a single space. Other Unicode
/// whitespace is kept, since the parser rejects it. String literals, including block strings,
/// are copied verbatim.
pub fn normalize_query(query: &str) -> String {
    let chars: Vec<char> = query.chars().collect();
    let mut normalized = String::with_capacity(query.len());
    let mut pending_separator = false;
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '#' => {
                while i < chars.len() && chars[i] != '\n' && chars[i] != '\r' {
                    i += 1;
                }
                pending_separator = true;
            }
            ' ' | '\t' | '\n' | '\r' | ',' | '\u{feff}' => {
                pending_separator = true;
                i += 1;
            }
            c => {
                if pending_separator && !normalized.is_empty() {
                    normalized.push(' ');
                }
                pending_separator = false;

                if c == '"' {
                    let end = string_literal_end(&chars, i);
                    normalized.extend(&chars[i..end]);
                    i = end;
                } else {
                    normalized.push(c);
                    i += 1;
                }
            }
        }
    }

    normalized
}

const BLOCK_QUOTE: [char; 3] = ['"', '"', '"'];

/// Index just past the string literal opening at `start`, or the end of input if unterminated.
fn string_literal_end(chars: &[char], start: usize) -> usize {
    if chars[start..].starts_with(&BLOCK_QUOTE) {
        let mut i = start + 3;
        while i < chars.len() {
            if chars[i] == '\\' && chars[i + 1..].starts_with(&BLOCK_QUOTE) {
                i += 4;
            } else if chars[i..].starts_with(&BLOCK_QUOTE) {
                return i + 3;
            } else {
                i += 1;
            }
        }
    } else {
        let mut i = start + 1;
        while i < chars.len() {
            match chars[i] {
                '\\' => i += 2,
                '"' => return i + 1,
                _ => i += 1,
            }
        }
    }

    chars.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_differences_collapse() {
        let compact = normalize_query("{ _block(from: 3, to: 5) }");
        let spread = normalize_query(
            "
            # blocks three to five
            {
                _block(from: 3,   to: 5)
            }
            ",
        );

        assert_eq!(compact, "{ _block(from: 3 to: 5) }");
        assert_eq!(spread, compact);
    }

    #[test]
    fn other_unicode_whitespace_is_significant() {
        for query in ["{\u{a0}chat }", "{\u{b}chat }", "{\u{2028}chat }"] {
            assert_ne!(normalize_query(query), normalize_query("{ chat }"), "{query:?}");
        }
        assert_eq!(normalize_query("{\t\u{feff}chat\r\n}"), "{ chat }");
    }

    #[test]
    fn string_literals_are_preserved() {
        assert_eq!(
            normalize_query(r#"{ _history(subject:  "a,  b # c\" d") }"#),
            r#"{ _history(subject: "a,  b # c\" d") }"#
        );
        assert_ne!(
            normalize_query(r#"{ chat(where: "a  b") }"#),
            normalize_query(r#"{ chat(where: "a b") }"#)
        );
    }

    #[test]
    fn block_strings_are_preserved() {
        let query = "{ chat(where: \"\"\"\n  multi,  line \\\"\"\" \"\"\") }";

        assert_eq!(normalize_query(query), query);
    }

    #[test]
    fn unterminated_string_runs_to_the_end() {
        assert_eq!(normalize_query("{ chat(where: \"a  b"), "{ chat(where: \"a  b");
    }

    #[test]
    fn stores_clones() {
        let cache = QueryCache::new();
        assert!(cache.is_empty());

        cache.insert("{ chat }".to_string(), FlureeDocument::new());
        assert_eq!(cache.get("{ chat }"), Some(FlureeDocument::new()));
        assert_eq!(cache.get("{ _user }"), None);
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }
}
