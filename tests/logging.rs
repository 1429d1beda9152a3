// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The global logger can be installed once per process.

use overview_examples::session::{init_logger, LogConfig, LogFormat};
use overview_examples::{Catalog, SessionError};

#[test]
fn install_once() {
    let level = Some("overview_examples=debug".to_string());
    let config = LogConfig { level, format: LogFormat::Json };
    init_logger(&config).unwrap();

    // Checks run with the logger installed.
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog.check_all().is_ok());

    let again = init_logger(&LogConfig::default());
    assert!(matches!(again, Err(SessionError::AlreadyInitialized(_))));
}
