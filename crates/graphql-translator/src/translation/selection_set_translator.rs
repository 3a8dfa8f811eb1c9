// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_parser::{
    Positioned,
    types::{Field, Selection, SelectionSet},
};
use flureeql_model::{PatternEntry, SelectPattern};

use super::translation_error::TranslationError;

/// Build the select pattern for a field's selection set.
///
/// A field without subfields selects everything (`["*"]`). Otherwise each subfield, in the
/// order written, becomes either its bare name or, when it has subfields of its own, a join
/// `{ name: <pattern> }`. Aliases and arguments on subfields do not affect the pattern.
pub(super) fn select_pattern(
    selection_set: &Positioned<SelectionSet>,
) -> Result<SelectPattern, TranslationError> {
    if selection_set.node.items.is_empty() {
        return Ok(SelectPattern::wildcard());
    }

    selection_set
        .node
        .items
        .iter()
        .map(|selection| pattern_entry(as_field(selection)?))
        .collect()
}

fn pattern_entry(field: &Positioned<Field>) -> Result<PatternEntry, TranslationError> {
    let name = field.node.name.node.to_string();

    if field.node.selection_set.node.items.is_empty() {
        Ok(PatternEntry::Field(name))
    } else {
        select_pattern(&field.node.selection_set).map(|pattern| PatternEntry::Join(name, pattern))
    }
}

pub(super) fn as_field(
    selection: &Positioned<Selection>,
) -> Result<&Positioned<Field>, TranslationError> {
    match &selection.node {
        Selection::Field(field) => Ok(field),
        Selection::FragmentSpread(_) | Selection::InlineFragment(_) => {
            Err(TranslationError::FragmentsNotSupported(selection.pos))
        }
    }
}
