//! showdoc — generate showcase documentation from Rust doc comments.
//!
//! Scans `//!` module docs and `///` declaration docs, reconstructs each
//! comment into ordered typed content (prose, code examples, lists,
//! callouts), and renders one showcase page per source file.
//!
//! - **stdin mode**: `showdoc < src/lib.rs`
//! - **file mode**: `showdoc -o docs src/*.rs`

mod content;
mod generate;
mod indent;
mod model;
mod parser;
mod render;
mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "showdoc",
    about = "Generate showcase documentation from Rust doc comments"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), html, json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Include declarations without a `pub` modifier
    #[arg(long)]
    include_private: bool,

    /// Page title for stdin mode (file mode derives it from the file name)
    #[arg(long)]
    title: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: read Rust source from stdin, write one page to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let doc = scanner::scan(&input, cli.title.clone(), cli.include_private);
    let renderer = render::create_renderer(&cli.format)?;
    print!("{}", renderer.render(&doc)?);
    Ok(())
}

/// file mode: process multiple files, write one page per file.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    for path in expand_globs(&cli.files)? {
        let input = match fs::read_to_string(&path) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let name = derive_output_name(&path);
        let doc = scanner::scan(&input, Some(name.clone()), cli.include_private);

        // Nothing documented — no page.
        if doc.declarations.is_empty() && doc.module.is_empty() {
            continue;
        }

        let out_path = output_dir.join(format!("{}.{}", name, ext));
        fs::write(&out_path, renderer.render(&doc)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    Ok(())
}

/// Expand glob patterns into a sorted, deduplicated list of files.
/// Bare directory paths are scanned (non-recursive) for `.rs` files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("rs") {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the output page name from a source path: "src/button.rs" → "button".
fn derive_output_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_from_rs() {
        assert_eq!(derive_output_name(Path::new("src/button.rs")), "button");
        assert_eq!(derive_output_name(Path::new("button.rs")), "button");
    }

    #[test]
    fn output_name_without_extension() {
        assert_eq!(derive_output_name(Path::new("Makefile")), "Makefile");
    }
}
