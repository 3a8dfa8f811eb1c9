// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Serialize, Serializer, ser::SerializeMap};

pub const WILDCARD: &str = "*";

/// The `select` clause of a graph query.
///
/// Entries keep the order of the GraphQL selections they came from, since that order becomes
/// the projection order of the query result.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct SelectPattern(pub Vec<PatternEntry>);

impl SelectPattern {
    /// `["*"]`: select every predicate.
    pub fn wildcard() -> Self {
        Self(vec![PatternEntry::Field(WILDCARD.to_string())])
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.0
    }
}

impl FromIterator<PatternEntry> for SelectPattern {
    fn from_iter<I: IntoIterator<Item = PatternEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PatternEntry {
    /// A leaf predicate, serialized as its bare name.
    Field(String),
    /// A predicate followed into the referenced subject, serialized as `{ name: [...] }`.
    Join(String, SelectPattern),
}

impl PatternEntry {
    pub fn name(&self) -> &str {
        match self {
            PatternEntry::Field(name) | PatternEntry::Join(name, _) => name,
        }
    }
}

impl Serialize for PatternEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PatternEntry::Field(name) => serializer.serialize_str(name),
            PatternEntry::Join(name, pattern) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(name, pattern)?;
                map.end()
            }
        }
    }
}
