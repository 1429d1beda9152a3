// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Harness catalogs read from TOML.
//!
//! A catalog lists harnesses as `[[harness]]` entries, either at the top of
//! the document or under `[package.metadata.overview]` so that it can live in
//! a `Cargo.toml`. The metadata table takes precedence when both are present.
//! Unknown keys are errors; only `[package]` may sit beside a root catalog.

use crate::error::{ConfigError, HarnessError};
use crate::harness::{HarnessReport, HarnessSpec, DEFAULT_LIMIT};
use crate::quartile::Quartile;
use crate::session::LogConfig;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use toml::{Table, Value};
use tracing::{debug, info, instrument};

const BUILTIN_CATALOG: &str = include_str!("../harnesses.toml");

/// Where a catalog embedded in a `Cargo.toml` lives.
const METADATA_TABLE: &str = "package.metadata.overview";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    #[serde(default = "default_limit")]
    limit: u64,
    #[serde(default)]
    log: LogConfig,
    #[serde(default, rename = "harness")]
    harnesses: Vec<RawHarness>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHarness {
    name: String,
    lower: i32,
    upper: i32,
    expected: Quartile,
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Largest precondition any single harness may enumerate.
    pub limit: u64,
    pub log: LogConfig,
    pub harnesses: Vec<HarnessSpec>,
}

impl Catalog {
    /// The catalog shipped in `harnesses.toml`.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), "loading harness catalog");
        Self::from_toml(&data)
    }

    pub fn from_toml(data: &str) -> Result<Self, ConfigError> {
        let mut document: Table = toml::from_str(data)?;
        let table = match get_table(&document, METADATA_TABLE).cloned() {
            Some(metadata) => metadata,
            None => {
                // A manifest without catalog metadata still carries `[package]`.
                document.remove("package");
                document
            }
        };
        let raw: RawCatalog = Value::Table(table).try_into()?;
        Self::validate(raw)
    }

    fn validate(raw: RawCatalog) -> Result<Self, ConfigError> {
        let mut seen = BTreeSet::new();
        let mut harnesses = Vec::with_capacity(raw.harnesses.len());
        for RawHarness { name, lower, upper, expected } in raw.harnesses {
            if !seen.insert(name.clone()) {
                return Err(ConfigError::DuplicateHarness(name));
            }
            let spec = HarnessSpec::new(name.clone(), lower, upper, expected)
                .map_err(|source| ConfigError::Harness { name, source })?;
            harnesses.push(spec);
        }
        Ok(Catalog { limit: raw.limit, log: raw.log, harnesses })
    }

    pub fn get(&self, name: &str) -> Option<&HarnessSpec> {
        self.harnesses.iter().find(|harness| harness.name == name)
    }

    /// Check every harness in declaration order, stopping at the first failure.
    #[instrument(level = "debug", skip(self), fields(harnesses = self.harnesses.len()))]
    pub fn check_all(&self) -> Result<Vec<HarnessReport>, HarnessError> {
        let reports = self
            .harnesses
            .iter()
            .map(|harness| harness.check(self.limit))
            .collect::<Result<Vec<_>, _>>()?;
        let checked: u64 = reports.iter().map(|report| report.checked).sum();
        info!(harnesses = reports.len(), checked, "all harnesses hold");
        Ok(reports)
    }
}

/// Take 'a.b.c' and turn it into 'start['a']['b']['c']', interpreting the result as a table
fn get_table<'a>(start: &'a Table, path: &str) -> Option<&'a Table> {
    let mut current = start;
    for key in path.split('.') {
        current = current.get(key)?.as_table()?;
    }
    Some(current)
}
