use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "resumetex", version, about = "Render a YAML resume into LaTeX and PDF")]
pub struct Cli {
    /// Resume document (plain YAML or YAML between `---` lines).
    #[arg(default_value = "resume.yaml")]
    pub input: PathBuf,

    /// LaTeX template containing the placeholder tokens.
    #[arg(long, default_value = "template.tex")]
    pub template: PathBuf,

    /// Directory for the generated files [default: $OUTPUT_DIR or .]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// LaTeX compiler to run [default: $LATEX_COMPILER or pdflatex]
    #[arg(long)]
    pub compiler: Option<String>,

    /// Only write the .tex file.
    #[arg(long)]
    pub no_compile: bool,

    /// Author name to bold in publications; repeatable. Defaults to the
    /// resume owner's name.
    #[arg(long = "highlight-author")]
    pub highlight_authors: Vec<String>,
}

/// Resolved settings for one run. Built once at startup; nothing reads the
/// environment after this.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub template: PathBuf,
    pub output_dir: PathBuf,
    pub compiler: String,
    pub compile: bool,
    pub highlight_authors: Vec<String>,
    pub rust_log: String,
}

impl Config {
    /// Reads `OUTPUT_DIR`, `LATEX_COMPILER` and `RUST_LOG` (after loading `.env`
    /// if present); command-line values win.
    pub fn from_env(cli: Cli) -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::resolve(cli, |key| std::env::var(key).ok())
    }

    fn resolve(cli: Cli, env: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            output_dir: cli
                .output_dir
                .or_else(|| env("OUTPUT_DIR").map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(".")),
            compiler: cli
                .compiler
                .or_else(|| env("LATEX_COMPILER"))
                .unwrap_or_else(|| "pdflatex".to_string()),
            rust_log: env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            input: cli.input,
            template: cli.template,
            compile: !cli.no_compile,
            highlight_authors: cli.highlight_authors,
        }
    }
}
