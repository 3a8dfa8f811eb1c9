// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Access to configuration values supplied through the environment.
//!
//! The translator never reads `std::env` directly. Instead it takes a `&dyn Environment`, so the
//! CLI can pass [`SystemEnvironment`] while tests pass a [`MapEnvironment`].

mod map;

pub use map::MapEnvironment;

pub trait Environment: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn enabled(&self, key: &str, default_value: bool) -> Result<bool, EnvError> {
        match self.get(key) {
            Some(value) => match value.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" | "enabled" | "enable" => Ok(true),
                "false" | "0" | "no" | "off" | "disabled" | "disable" => Ok(false),
                _ => Err(EnvError::InvalidBoolean {
                    key: key.to_string(),
                    value,
                }),
            },
            None => Ok(default_value),
        }
    }
}

/// Look up `key` and map it through `parse`, reporting an [`EnvError::InvalidEnum`] naming the
/// accepted values when the mapping fails.
pub fn get_enum<T>(
    env: &(impl Environment + ?Sized),
    key: &'static str,
    accepted: &[&str],
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, EnvError> {
    match env.get(key) {
        Some(value) => match parse(&value.to_lowercase()) {
            Some(parsed) => Ok(Some(parsed)),
            None => Err(EnvError::InvalidEnum {
                env_key: key,
                env_value: value,
                message: format!("Must be one of: {}", accepted.join(", ")),
            }),
        },
        None => Ok(None),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "Invalid value for {key}: {value}. Expected true, 1, yes, on, enabled, enable OR false, 0, no, off, disabled, disable"
    )]
    InvalidBoolean { key: String, value: String },

    #[error("Invalid env value {env_value} for {env_key}: {message}")]
    InvalidEnum {
        env_key: &'static str,
        env_value: String,
        message: String,
    },
}

pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
