//! Config command - show the effective configuration

use std::path::Path;

use tdd_assert::Config;
use tdd_assert::config::CONFIG_FILE;
use tdd_assert::output::{ConfigResult, OutputMode};

/// Load `path` if given, else discover `tdd-assert.toml` in the working directory
///
/// Returns the config and the file it came from, if any.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<(Config, Option<String>)> {
    if let Some(path) = path {
        return Ok((Config::load(path)?, Some(path.display().to_string())));
    }

    let cwd = std::env::current_dir()?;
    let source = cwd.join(CONFIG_FILE);
    let config = Config::discover(&cwd)?;
    Ok((config, source.is_file().then(|| source.display().to_string())))
}

/// Print the effective configuration
pub fn config(path: Option<&Path>, output_mode: OutputMode) -> anyhow::Result<()> {
    let (config, source) = load_config(path)?;
    ConfigResult { source, config }.render(output_mode);
    Ok(())
}
