//! `sdlgen merge`
//!
//! Merges existing `.graphql` / `.gql` files into one root document with a
//! single `Query` and `Mutation` type. Directories are walked recursively in
//! file-name order.

use anyhow::Context;
use colored::Colorize;
use sdlgen_codegen::{FileEmitter, GeneratedFile, SchemaFragment, merge_fragments};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::MergeArgs;

const SDL_EXTENSIONS: &[&str] = &["graphql", "gql"];

pub fn run(args: &MergeArgs, verbose: bool) -> anyhow::Result<()> {
    let files = collect_sdl_files(&args.paths, args.output.as_deref())?;
    if files.is_empty() {
        anyhow::bail!("No .graphql files found to merge");
    }

    let merged = merge_files(&files, args.id_scalar.map(Into::into).unwrap_or_default())?;

    let Some(output) = &args.output else {
        print!("{}", merged);
        return Ok(());
    };

    let mut emitter = FileEmitter::new(PathBuf::new(), args.overwrite, verbose);
    let written = emitter
        .emit(&GeneratedFile::graphql(output, merged))
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if written {
        println!(
            "{} merged {} file(s) into {}",
            "✓".green().bold(),
            files.len(),
            output.display()
        );
    } else {
        println!(
            "{} {} exists; pass --overwrite to replace it",
            "warning:".yellow().bold(),
            output.display()
        );
    }
    Ok(())
}

/// Parse and merge files in the given order
pub fn merge_files(files: &[PathBuf], id_scalar: sdlgen_core::IdScalar) -> anyhow::Result<String> {
    let mut fragments = Vec::with_capacity(files.len());
    for path in files {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let fragment = SchemaFragment::parse(path.display().to_string(), &source)?;
        tracing::debug!(
            file = %path.display(),
            definitions = fragment.definitions.len(),
            queries = fragment.query_fields.len(),
            mutations = fragment.mutation_fields.len(),
            "parsed fragment",
        );
        fragments.push(fragment);
    }
    Ok(merge_fragments(&fragments, id_scalar))
}

/// Expand the given paths into SDL files.
///
/// Files named explicitly are taken as they are. Directories contribute
/// every file with an SDL extension. The output file is never an input.
pub fn collect_sdl_files(paths: &[PathBuf], exclude: Option<&Path>) -> anyhow::Result<Vec<PathBuf>> {
    let excluded = exclude.and_then(|p| p.canonicalize().ok());
    let is_excluded = |path: &Path| match (&excluded, path.canonicalize()) {
        (Some(excluded), Ok(path)) => *excluded == path,
        _ => false,
    };

    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            if !is_excluded(path) {
                files.push(path.clone());
            }
            continue;
        }
        if !path.is_dir() {
            anyhow::bail!("No such file or directory: {}", path.display());
        }

        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.with_context(|| format!("Failed to read {}", path.display()))?;
            let candidate = entry.path();
            if entry.file_type().is_file() && has_sdl_extension(candidate) && !is_excluded(candidate) {
                files.push(candidate.to_path_buf());
            }
        }
    }
    Ok(files)
}

fn has_sdl_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SDL_EXTENSIONS.contains(&e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdlgen_core::IdScalar;

    #[test]
    fn test_collect_walks_directories_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("b.graphql"), "").unwrap();
        std::fs::write(dir.path().join("a.gql"), "").unwrap();
        std::fs::write(dir.path().join("notes.md"), "").unwrap();
        std::fs::write(dir.path().join("nested/c.graphql"), "").unwrap();

        let files = collect_sdl_files(&[dir.path().to_path_buf()], None).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.gql"),
                PathBuf::from("b.graphql"),
                PathBuf::from("nested/c.graphql"),
            ]
        );
    }

    #[test]
    fn test_collect_skips_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("schema.graphql");
        std::fs::write(&output, "").unwrap();
        std::fs::write(dir.path().join("Widget.graphql"), "").unwrap();

        let files = collect_sdl_files(&[dir.path().to_path_buf()], Some(&output)).unwrap();
        assert_eq!(files, vec![dir.path().join("Widget.graphql")]);
    }

    #[test]
    fn test_collect_rejects_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_sdl_files(&[dir.path().join("gone")], None).is_err());
    }

    #[test]
    fn test_merge_files_combines_root_types() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.graphql");
        let b = dir.path().join("b.graphql");
        std::fs::write(&a, "type A {\n  id: ID!\n}\n\ntype Query {\n  as: [A!]!\n}\n").unwrap();
        std::fs::write(&b, "type Query {\n  bs: [String]\n}\n\ntype Mutation {\n  reset: Boolean\n}\n").unwrap();

        let merged = merge_files(&[a, b], IdScalar::Id).unwrap();
        assert_eq!(merged.matches("type Query").count(), 1);
        assert!(merged.contains("type Query {\n  as: [A!]!\n  bs: [String]\n}"));
        assert!(merged.contains("type Mutation {\n  reset: Boolean\n}"));
        assert!(merged.starts_with("scalar Date"));
    }

    #[test]
    fn test_merge_files_reports_malformed_input() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.graphql");
        std::fs::write(&bad, "type Broken {\n  id: ID!\n").unwrap();

        let err = merge_files(&[bad], IdScalar::Id).unwrap_err();
        assert!(err.to_string().contains("bad.graphql"));
    }
}
