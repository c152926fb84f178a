//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dtsj",
    version,
    about = "Convert declaration files to canonical JSON ASTs"
)]
pub struct CliArgs {
    /// Input files or glob patterns (e.g. types/**/*.d.ts)
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Directory for .json outputs (defaults to each input's directory)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Print converted JSON to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Abort a file's conversion on the first unsupported or malformed
    /// statement instead of skipping it
    #[arg(long)]
    pub fail_fast: bool,

    /// Override the conversion recursion guard
    #[arg(long)]
    pub max_depth: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args = CliArgs::parse_from(["dtsj", "main.d.ts"]);
        assert_eq!(args.inputs, ["main.d.ts"]);
        assert!(!args.fail_fast);
        assert!(args.out_dir.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "dtsj",
            "types/**/*.d.ts",
            "--out-dir",
            "build",
            "--fail-fast",
            "--max-depth",
            "64",
        ]);
        assert!(args.fail_fast);
        assert_eq!(args.max_depth, Some(64));
        assert_eq!(args.out_dir.as_deref(), Some(std::path::Path::new("build")));
    }
}
