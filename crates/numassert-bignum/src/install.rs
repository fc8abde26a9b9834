use std::sync::Arc;

use numassert_canonical::{Normalizer, NormalizerConfig};
use numassert_host::{AssertionContext, MethodRegistry};
use thiserror::Error;
use tracing::info;

use crate::dispatch::{dispatch, OVERRIDES};

/// Extension tag claimed in the registry on installation.
pub const EXTENSION_TAG: &str = "bignum";

/// Errors raised while installing the extension.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstallError {
    /// The registry already carries the extension.
    #[error("big-integer assertions are already installed in this registry")]
    AlreadyInstalled,
    /// The registry lacks a method the extension wraps.
    #[error("registry has no '{0}' method to extend")]
    MissingMethod(String),
}

/// Wraps every method in [`OVERRIDES`] so big-integer operands are compared
/// exactly; other operands reach the previous implementation unchanged.
///
/// Installing twice into one registry is a configuration error. The registry
/// is left untouched when installation fails.
pub fn install(registry: &mut MethodRegistry, config: NormalizerConfig) -> Result<(), InstallError> {
    if registry.has_extension(EXTENSION_TAG) {
        return Err(InstallError::AlreadyInstalled);
    }
    if let Some(missing) = OVERRIDES.iter().find(|entry| !registry.has_method(entry.name)) {
        return Err(InstallError::MissingMethod(missing.name.to_string()));
    }

    let normalizer = Arc::new(Normalizer::new(config));
    for entry in OVERRIDES {
        let check = entry.check;
        let normalizer = Arc::clone(&normalizer);
        registry
            .overwrite_method(entry.name, move |previous| {
                move |ctx: &AssertionContext<'_>| dispatch(check, ctx, &normalizer, &previous)
            })
            .map_err(|_| InstallError::MissingMethod(entry.name.to_string()))?;
    }
    registry.claim_extension(EXTENSION_TAG);

    info!(
        methods = OVERRIDES.len(),
        accept_hex = normalizer.config().accept_hex,
        "installed big-integer assertions"
    );
    Ok(())
}

/// Builds a standard registry with the extension installed.
pub fn extended_registry(config: NormalizerConfig) -> Result<MethodRegistry, InstallError> {
    let mut registry = MethodRegistry::standard();
    install(&mut registry, config)?;
    Ok(registry)
}
