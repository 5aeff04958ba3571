//! `exception-server init` command.
//!
//! Writes the commented `host` / `port` / `log_level` template from
//! [`generate_default_config`] so `serve --config` has a file to start from.

use std::fs;
use std::path::Path;

use crate::config::generate_default_config;
use crate::error::Error;

/// Write the config template to `output`.
///
/// An existing file is left alone unless `force` is set.
///
/// # Errors
///
/// Returns [`Error::Config`] if `output` exists without `force`, or if the
/// template cannot be written.
#[allow(clippy::print_stderr)]
pub fn run(output: &Path, force: bool) -> Result<(), Error> {
    if !force && output.exists() {
        return Err(Error::config(format!(
            "'{}' already exists, pass --force to replace it",
            output.display()
        )));
    }

    fs::write(output, generate_default_config()).map_err(|e| {
        Error::config_with(format!("cannot write template to '{}'", output.display()), e)
    })?;

    eprintln!(
        "Wrote {}; start the server with `exception-server serve --config {}`",
        output.display(),
        output.display()
    );
    Ok(())
}
