//! Configuration file loading
//!
//! `sdlgen.toml` holds a [`GeneratorConfig`] in TOML form. Keys left out keep
//! their defaults; command-line flags are applied on top.

use anyhow::Context;
use sdlgen_codegen::GeneratorConfig;
use std::path::{Path, PathBuf};

use crate::GenerateArgs;

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "sdlgen.toml";

/// Load the generator configuration.
///
/// An explicit path must exist. Without one, `./sdlgen.toml` is used when
/// present and the defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !fallback.exists() {
                tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                return Ok(GeneratorConfig::default());
            }
            fallback
        }
    };

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = parse_config(&text)
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    tracing::info!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Parse a configuration from TOML text
pub fn parse_config(text: &str) -> anyhow::Result<GeneratorConfig> {
    Ok(toml::from_str(text)?)
}

/// Apply `generate` flags on top of a configuration
pub fn apply_overrides(mut config: GeneratorConfig, args: &GenerateArgs, verbose: bool) -> GeneratorConfig {
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }
    if args.overwrite {
        config.overwrite = true;
    }
    if verbose {
        config.verbose = true;
    }
    if let Some(file) = &args.merged {
        config = config.merged_into(file.clone());
    }
    if let Some(id_scalar) = args.id_scalar {
        config.id_scalar = id_scalar.into();
    }
    if let Some(lookup) = args.lookup {
        config.lookup = lookup.into();
    }
    if let Some(kind) = args.output_kind {
        config.output_kind = kind.into();
    }
    if args.no_filters {
        config.filters = false;
    }
    if args.no_resolvers {
        config.emit_resolvers = false;
    }
    if let Some(dir) = &args.resolver_dir {
        config.resolver_dir = dir.clone();
    }
    config
}

// ============================================================================
// Tests
// ============================================================================
