//! External LaTeX compilation and auxiliary-file cleanup.
//!
//! The compiler runs with the output directory as its working directory so
//! that the PDF and its auxiliary files land next to the `.tex` file.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{info, warn};

use crate::errors::AppError;

/// Auxiliary files the compiler leaves next to `<base>.pdf`.
const AUX_EXTENSIONS: &[&str] = &["aux", "log", "out"];

/// Leftovers from compiling the template itself in the output directory.
const TEMPLATE_ARTIFACTS: &[&str] = &[
    "template.aux",
    "template.log",
    "template.out",
    "template.pdf",
    "template.fdb_latexmk",
    "template.fls",
    "template.synctex.gz",
];

/// A configured LaTeX compiler.
#[derive(Debug, Clone)]
pub struct Compiler {
    program: String,
    output_dir: PathBuf,
}

impl Compiler {
    pub fn new(program: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Arguments passed to the compiler for `tex_file`.
    pub fn args(&self, tex_file: &Path, base_name: &str) -> Vec<String> {
        vec![
            "-interaction=nonstopmode".to_string(),
            format!("-jobname={base_name}"),
            tex_file.display().to_string(),
        ]
    }

    /// Compiles `tex_file` into `<output_dir>/<base_name>.pdf`.
    ///
    /// Auxiliary files are removed whether or not compilation succeeds.
    pub fn compile(&self, tex_file: &Path, base_name: &str) -> Result<PathBuf, AppError> {
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| AppError::io(&self.output_dir, e))?;
        let tex_file = std::path::absolute(tex_file).map_err(|e| AppError::io(tex_file, e))?;

        let result = self.run(&tex_file, base_name);
        remove_files(&self.output_dir, AUX_EXTENSIONS.iter().map(|ext| format!("{base_name}.{ext}")));
        result
    }

    fn run(&self, tex_file: &Path, base_name: &str) -> Result<PathBuf, AppError> {
        let args = self.args(tex_file, base_name);
        info!("Running command: {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(&self.output_dir)
            .output()
            .map_err(|e| AppError::Compile {
                program: self.program.clone(),
                message: format!("could not start: {e}"),
            })?;

        if !output.status.success() {
            // pdflatex reports errors on stdout; keep both streams.
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Compile {
                program: self.program.clone(),
                message: format!("{}\n{}{}", output.status, stderr, stdout),
            });
        }

        let pdf = self.output_dir.join(format!("{base_name}.pdf"));
        if !pdf.exists() {
            return Err(AppError::MissingArtifact { path: pdf });
        }
        Ok(pdf)
    }

    /// Removes stale template artifacts from the output directory.
    pub fn clean_template_artifacts(&self) {
        remove_files(
            &self.output_dir,
            TEMPLATE_ARTIFACTS.iter().map(|name| name.to_string()),
        );
    }
}

/// Removes each existing file; failures are logged and ignored.
fn remove_files(dir: &Path, names: impl IntoIterator<Item = String>) {
    for name in names {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        if let Err(e) = std::fs::remove_file(&path) {
            warn!("Could not remove {}: {e}", path.display());
        }
    }
}
