// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use common::env_const::{FLUREEQL_OPTIONAL_ARGUMENTS, FLUREEQL_QUERY_CACHE};
use flureeql_env::{EnvError, Environment, get_enum};
use serde_json::Value;

/// Decides whether an optional graph-query argument (`block`, `where`, `limit`, `offset`)
/// makes it into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionalArgumentPolicy {
    /// Drop the key when the argument is absent or falsy: `null`, `false`, `0`, `0.0` or `""`.
    /// Lists always count as supplied.
    #[default]
    Truthy,
    /// Drop the key only when the argument is absent or `null`.
    Present,
}

impl OptionalArgumentPolicy {
    pub fn includes(self, value: &Value) -> bool {
        match self {
            OptionalArgumentPolicy::Truthy => is_truthy(value),
            OptionalArgumentPolicy::Present => !value.is_null(),
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "truthy" => Some(OptionalArgumentPolicy::Truthy),
            "present" => Some(OptionalArgumentPolicy::Present),
            _ => None,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(boolean) => *boolean,
        Value::Number(number) => number.as_f64().is_some_and(|number| number != 0.0),
        Value::String(string) => !string.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    pub optional_arguments: OptionalArgumentPolicy,
    /// Memoize translations by normalized query text (see [`crate::Translator`]).
    pub cache_queries: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            optional_arguments: OptionalArgumentPolicy::default(),
            cache_queries: true,
        }
    }
}

impl TranslatorConfig {
    pub fn from_env(env: &dyn Environment) -> Result<Self, EnvError> {
        let optional_arguments = get_enum(
            env,
            FLUREEQL_OPTIONAL_ARGUMENTS,
            &["truthy", "present"],
            OptionalArgumentPolicy::parse,
        )?
        .unwrap_or_default();

        Ok(Self {
            optional_arguments,
            cache_queries: env.enabled(FLUREEQL_QUERY_CACHE, true)?,
        })
    }
}
