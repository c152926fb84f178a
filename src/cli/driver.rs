//! Conversion driver: input discovery, parallel per-file conversion, and
//! output writing.
//!
//! Each file's conversion is a pure, synchronous transform with no shared
//! state, so files fan out across the rayon pool with zero coordination.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use globset::{Glob, GlobSetBuilder};
use rayon::prelude::*;
use walkdir::WalkDir;

use dtsj_common::diagnostics::{Diagnostic, DiagnosticCategory};
use dtsj_json::{Converter, ConverterOptions, pretty_stringify};
use dtsj_parser::ParserState;

use super::args::CliArgs;

/// Outcome of converting one input file.
pub struct FileResult {
    pub path: PathBuf,
    pub source: String,
    /// Serialized canonical AST; `None` when conversion failed outright
    /// (fail-fast mode).
    pub json: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct DriverResult {
    pub files: Vec<FileResult>,
}

impl DriverResult {
    pub fn error_count(&self) -> usize {
        self.files
            .iter()
            .flat_map(|file| file.diagnostics.iter())
            .filter(|d| d.category == DiagnosticCategory::Error)
            .count()
    }
}

/// Run the full pipeline: discover inputs, convert them in parallel, write
/// outputs.
pub fn run(args: &CliArgs, cwd: &Path) -> Result<DriverResult> {
    let inputs = discover_inputs(&args.inputs, cwd)?;
    if inputs.is_empty() {
        bail!("no input files matched");
    }
    tracing::debug!(count = inputs.len(), "inputs discovered");

    let options = ConverterOptions {
        fail_fast: args.fail_fast,
        ..ConverterOptions::default()
    };
    let options = match args.max_depth {
        Some(max_depth) => ConverterOptions { max_depth, ..options },
        None => options,
    };

    let files = inputs
        .par_iter()
        .map(|path| convert_file(path, options))
        .collect::<Result<Vec<_>>>()?;

    for file in &files {
        let Some(json) = &file.json else { continue };
        if args.stdout {
            println!("{json}");
        } else {
            let out_path = output_path(&file.path, args.out_dir.as_deref());
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(&out_path, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", out_path.display()))?;
            tracing::debug!(path = %out_path.display(), "output written");
        }
    }

    Ok(DriverResult { files })
}

/// Parse and convert one file. Conversion failures surface as diagnostics,
/// not process errors; only I/O problems abort the run.
fn convert_file(path: &Path, options: ConverterOptions) -> Result<FileResult> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path.display().to_string();

    let mut parser = ParserState::new(file_name.clone(), source.clone());
    let root = parser.parse_source_file();
    let (arena, mut diagnostics) = parser.into_parts();

    let mut converter = Converter::with_options(&arena, options);
    let json = match converter.convert_source_file(root) {
        Ok(converted) => Some(pretty_stringify(&converted)),
        Err(error) => {
            diagnostics.push(error.to_diagnostic(&file_name));
            None
        }
    };
    diagnostics.extend(converter.take_diagnostics());

    Ok(FileResult {
        path: path.to_path_buf(),
        source,
        json,
        diagnostics,
    })
}

/// `foo.d.ts` maps to `foo.json` (the `.d` belongs to the declaration
/// extension, not the stem).
fn output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("out");
    let stem = stem.strip_suffix(".d").unwrap_or(stem);
    let file_name = format!("{stem}.json");
    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// Expand inputs: literal paths pass through, everything else is treated as
/// a glob over the working directory. The result is sorted and deduplicated
/// so conversion order is stable.
fn discover_inputs(inputs: &[String], cwd: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let mut glob_builder = GlobSetBuilder::new();
    let mut have_globs = false;

    for input in inputs {
        let candidate = cwd.join(input);
        if candidate.is_file() {
            paths.push(candidate);
        } else {
            glob_builder.add(
                Glob::new(input).with_context(|| format!("invalid input pattern '{input}'"))?,
            );
            have_globs = true;
        }
    }

    if have_globs {
        let glob_set = glob_builder.build()?;
        for entry in WalkDir::new(cwd).into_iter().filter_map(|entry| entry.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(cwd).unwrap_or(entry.path());
            if glob_set.is_match(relative) {
                paths.push(entry.path().to_path_buf());
            }
        }
    }

    paths.sort();
    paths.dedup();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::CliArgs;
    use clap::Parser;

    fn args_for(inputs: &[&str], extra: &[&str]) -> CliArgs {
        let mut argv = vec!["dtsj"];
        argv.extend_from_slice(inputs);
        argv.extend_from_slice(extra);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_convert_file_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("main.d.ts");
        fs::write(&input, "declare function f(): boolean;\n").unwrap();

        let result = convert_file(&input, ConverterOptions::default()).unwrap();
        assert!(result.diagnostics.is_empty());
        let json = result.json.unwrap();
        assert!(json.contains("\"kind\": \"FunctionDeclaration\""));
        assert!(json.contains("\"typeName\": \"boolean\""));
    }

    #[test]
    fn test_run_writes_json_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("lib.d.ts");
        fs::write(&input, "declare function g(a: number): void;\n").unwrap();

        let args = args_for(&["lib.d.ts"], &[]);
        let result = run(&args, dir.path()).unwrap();
        assert_eq!(result.files.len(), 1);
        assert_eq!(result.error_count(), 0);

        let written = fs::read_to_string(dir.path().join("lib.json")).unwrap();
        assert!(written.ends_with('\n'));
        assert!(written.contains("\"name\": \"g\""));
    }

    #[test]
    fn test_run_with_glob_and_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("types")).unwrap();
        fs::write(
            dir.path().join("types/a.d.ts"),
            "declare function a(): void;\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("types/b.d.ts"),
            "declare function b(): void;\n",
        )
        .unwrap();

        let out_dir = dir.path().join("build");
        let out_dir_arg = out_dir.display().to_string();
        let args = args_for(&["types/*.d.ts"], &["--out-dir", &out_dir_arg]);
        let result = run(&args, dir.path()).unwrap();
        assert_eq!(result.files.len(), 2);
        assert!(out_dir.join("a.json").is_file());
        assert!(out_dir.join("b.json").is_file());
    }

    #[test]
    fn test_no_matching_inputs_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(&["missing/*.d.ts"], &[]);
        assert!(run(&args, dir.path()).is_err());
    }

    #[test]
    fn test_unsupported_statement_reports_warning() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("vars.d.ts");
        fs::write(&input, "declare var n: number;\n").unwrap();

        let result = convert_file(&input, ConverterOptions::default()).unwrap();
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(
            result.diagnostics[0].category,
            DiagnosticCategory::Warning
        );
        assert!(result.json.is_some());
    }
}
