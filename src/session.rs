// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Module used to configure logging.

use crate::error::SessionError;
use serde::Deserialize;
use std::io::IsTerminal;
use std::str::FromStr;
use tracing_subscriber::{filter::Directive, layer::SubscriberExt, EnvFilter, Registry};
use tracing_tree::HierarchicalLayer;

/// Environment variable used to control log tracing.
pub const LOG_ENV_VAR: &str = "OVERVIEW_LOG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, strum_macros::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LogFormat {
    #[default]
    Hierarchical,
    Json,
}

/// The `[log]` section of a harness catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Extra filter directive on top of `OVERVIEW_LOG`, e.g. `debug` or
    /// `overview_examples::harness=trace`.
    pub level: Option<String>,
    pub format: LogFormat,
}

/// Initialize the global logger using the OVERVIEW_LOG environment variable and the catalog's
/// log section.
pub fn init_logger(config: &LogConfig) -> Result<(), SessionError> {
    let filter = build_filter(config)?;
    match config.format {
        LogFormat::Json => json_logs(filter),
        LogFormat::Hierarchical => hier_logs(filter),
    }
}

fn build_filter(config: &LogConfig) -> Result<EnvFilter, SessionError> {
    let filter = EnvFilter::from_env(LOG_ENV_VAR);
    Ok(match &config.level {
        Some(level) => filter.add_directive(Directive::from_str(level)?),
        None => filter,
    })
}

/// Configure global logger to use a json logger.
fn json_logs(filter: EnvFilter) -> Result<(), SessionError> {
    use tracing_subscriber::fmt::layer;
    let subscriber = Registry::default().with(filter).with(layer().json());
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Configure global logger to use a hierarchical view.
fn hier_logs(filter: EnvFilter) -> Result<(), SessionError> {
    let use_colors = std::io::stdout().is_terminal();
    let subscriber = Registry::default().with(filter);
    let subscriber = subscriber.with(
        HierarchicalLayer::default()
            .with_writer(std::io::stdout)
            .with_indent_lines(true)
            .with_ansi(use_colors)
            .with_targets(true)
            .with_verbose_exit(true)
            .with_indent_amount(4),
    );
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_directive() {
        let level = Some("overview_examples=loud".to_string());
        let config = LogConfig { level, ..Default::default() };
        assert!(matches!(build_filter(&config), Err(SessionError::Directive(_))));
    }

    #[test]
    fn good_directive() {
        let level = Some("overview_examples::harness=trace".to_string());
        let config = LogConfig { level, ..Default::default() };
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn format_names() {
        assert_eq!(LogFormat::default().to_string(), "hierarchical");
        assert_eq!(LogFormat::Json.to_string(), "json");
    }
}
