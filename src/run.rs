//! Application execution logic.
//!
//! This module runs one enumeration, filters the result and renders it.

use thiserror::Error;

use netres::config::ValidatedConfig;
use netres::network::platform::PlatformProvider;
use netres::network::{EnumerateError, NetworkProvider, enumerate_with};
use netres::output;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The enumeration failed.
    #[error("{0}")]
    Enumerate(#[source] EnumerateError),

    /// The results could not be rendered.
    #[error("Failed to render results: {0}")]
    Render(#[source] serde_json::Error),
}

/// Enumerates with the platform provider and prints the result to stdout.
///
/// # Errors
///
/// Returns an error if the enumeration or rendering fails.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires the
/// platform network provider.
#[cfg(not(tarpaulin_include))]
pub fn execute(config: &ValidatedConfig) -> Result<(), RunError> {
    let rendered = execute_with(&PlatformProvider::default(), config)?;
    print!("{rendered}");
    if !rendered.is_empty() && !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Enumerates with `provider`, applies the configured filter and renders
/// the survivors in the configured format.
///
/// # Errors
///
/// Returns an error if the enumeration or rendering fails.
pub fn execute_with<P: NetworkProvider + ?Sized>(
    provider: &P,
    config: &ValidatedConfig,
) -> Result<String, RunError> {
    let resources = enumerate_with(provider, &config.options).map_err(RunError::Enumerate)?;
    let total = resources.len();

    let resources = config.filter.apply(resources);
    tracing::info!(
        "Enumerated {total} resource(s), {} after filtering",
        resources.len()
    );

    output::render(&resources, config.format).map_err(RunError::Render)
}
