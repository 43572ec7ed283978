//! # sdlgen CLI
//!
//! Command-line interface for sdlgen.
//!
//! ## Commands
//!
//! - `generate` - Generate GraphQL SDL and resolver stubs from a schema file
//! - `merge` - Merge existing `.graphql` files into one root document
//! - `validate` - Validate a schema file
//! - `info` - Display information about a schema file
//!

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;
pub mod config;

// Re-export dependencies for use in main.rs
pub use clap::Parser;
pub use sdlgen_codegen;
pub use sdlgen_core;
pub use sdlgen_ir;

use sdlgen_codegen::{LookupStyle, ResolverModuleKind};
use sdlgen_core::IdScalar;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Command line
// ============================================================================

/// sdlgen - GraphQL SDL and resolver stubs from entity schemas
#[derive(Parser, Debug)]
#[command(name = "sdlgen", author, version, about, long_about = None)]
pub struct Cli {
    /// Log every written or skipped file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./sdlgen.toml when present)
    #[arg(short, long, global = true, value_name = "FILE", env = "SDLGEN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate SDL and resolver stubs from a schema file
    Generate(GenerateArgs),

    /// Merge existing .graphql files into one root document
    Merge(MergeArgs),

    /// Validate a schema file
    Validate {
        /// Schema file (.json or .toml)
        schema: PathBuf,
    },

    /// Display information about a schema file
    Info {
        /// Schema file (.json or .toml)
        schema: PathBuf,
    },
}

/// Flags of `sdlgen generate`; each one overrides the configuration file
#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Schema file (.json or .toml)
    pub schema: PathBuf,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Overwrite existing files
    #[arg(long)]
    pub overwrite: bool,

    /// Write one merged document with this file name instead of one file per model
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = "schema.graphql")]
    pub merged: Option<PathBuf>,

    /// Scalar used for UniqueIdentifier properties
    #[arg(long, value_enum, ignore_case = true)]
    pub id_scalar: Option<IdScalarArg>,

    /// Shape of the singular lookup query
    #[arg(long, value_enum)]
    pub lookup: Option<LookupArg>,

    /// Export syntax of resolver stubs
    #[arg(long, value_enum)]
    pub output_kind: Option<OutputKindArg>,

    /// Do not generate filter input types
    #[arg(long)]
    pub no_filters: bool,

    /// Do not write resolver stubs
    #[arg(long)]
    pub no_resolvers: bool,

    /// Directory of resolver stubs, relative to the output directory
    #[arg(long, value_name = "DIR")]
    pub resolver_dir: Option<PathBuf>,
}

/// Flags of `sdlgen merge`
#[derive(Args, Debug, Default, Clone)]
pub struct MergeArgs {
    /// .graphql files or directories to merge, in order
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output file (prints to stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub overwrite: bool,

    /// Scalar used for UniqueIdentifier properties
    #[arg(long, value_enum, ignore_case = true)]
    pub id_scalar: Option<IdScalarArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdScalarArg {
    #[value(name = "ID")]
    Id,
    #[value(name = "UUID")]
    Uuid,
}

impl From<IdScalarArg> for IdScalar {
    fn from(arg: IdScalarArg) -> Self {
        match arg {
            IdScalarArg::Id => IdScalar::Id,
            IdScalarArg::Uuid => IdScalar::Uuid,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupArg {
    UniqueFilter,
    PerIdentifier,
}

impl From<LookupArg> for LookupStyle {
    fn from(arg: LookupArg) -> Self {
        match arg {
            LookupArg::UniqueFilter => LookupStyle::UniqueFilter,
            LookupArg::PerIdentifier => LookupStyle::PerIdentifier,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKindArg {
    SourceModule,
    PlainScript,
}

impl From<OutputKindArg> for ResolverModuleKind {
    fn from(arg: OutputKindArg) -> Self {
        match arg {
            OutputKindArg::SourceModule => ResolverModuleKind::SourceModule,
            OutputKindArg::PlainScript => ResolverModuleKind::PlainScript,
        }
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Run a parsed command line
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Generate(args) => {
            commands::generate::run(&args, cli.config.as_deref(), cli.verbose)
        }
        Command::Merge(args) => commands::merge::run(&args, cli.verbose),
        Command::Validate { schema } => {
            commands::validate::run(&schema, cli.config.as_deref())
        }
        Command::Info { schema } => commands::info::run(&schema),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::parse_from([
            "sdlgen",
            "generate",
            "schema.json",
            "-o",
            "out",
            "--merged",
            "--id-scalar",
            "uuid",
            "--lookup",
            "per-identifier",
            "--no-filters",
        ]);

        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.schema, PathBuf::from("schema.json"));
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert_eq!(args.merged, Some(PathBuf::from("schema.graphql")));
        assert_eq!(args.id_scalar, Some(IdScalarArg::Uuid));
        assert_eq!(args.lookup, Some(LookupArg::PerIdentifier));
        assert!(args.no_filters);
        assert!(!args.no_resolvers);
    }

    #[test]
    fn test_global_verbose_after_subcommand() {
        let cli = Cli::parse_from(["sdlgen", "info", "schema.toml", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_merge_requires_paths() {
        assert!(Cli::try_parse_from(["sdlgen", "merge"]).is_err());
    }
}
