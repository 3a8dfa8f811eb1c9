// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result, anyhow};
use clap::{ArgMatches, Command};
use flureeql_env::Environment;
use graphql_translator::Translator;
use tracing::debug;

use super::command::{CommandDefinition, get, output_arg, pretty_arg, query_file_arg};

pub(crate) struct TranslateCommandDefinition {}

impl CommandDefinition for TranslateCommandDefinition {
    fn command(&self) -> Command {
        Command::new("translate")
            .about("Translate a GraphQL query into a FlureeQL query")
            .arg(query_file_arg())
            .arg(output_arg())
            .arg(pretty_arg())
    }

    fn execute(&self, matches: &ArgMatches, env: &dyn Environment) -> Result<()> {
        let query = match get::<PathBuf>(matches, "query") {
            Some(path) => fs::read_to_string(&path)
                .with_context(|| format!("Failed to read query file {}", path.display()))?,
            None => {
                let mut query = String::new();
                io::stdin()
                    .read_to_string(&mut query)
                    .context("Failed to read query from stdin")?;
                query
            }
        };

        let translator = Translator::from_env(env)?;
        debug!(config = ?translator.config(), "Translating query");

        let document = translator.translate(&query).map_err(|error| match error.position() {
            Some(pos) => anyhow!("{error} (line {}, column {})", pos.line, pos.column),
            None => anyhow!(error),
        })?;

        let json = if matches.get_flag("pretty") {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };

        match get::<PathBuf>(matches, "output") {
            Some(output) => fs::write(&output, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", output.display()))?,
            None => println!("{json}"),
        }

        Ok(())
    }
}
