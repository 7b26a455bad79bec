//! End-to-end run: load → format → fill → write → compile.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::compile::Compiler;
use crate::config::Config;
use crate::errors::AppError;
use crate::loader::load_resume;
use crate::render::template::{render, TemplateValues};

/// Base name used when the resume name has fewer than two words.
pub const DEFAULT_BASE_NAME: &str = "resume";

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub tex_path: PathBuf,
    /// `None` when compilation was skipped or failed.
    pub pdf_path: Option<PathBuf>,
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// `Firstname_Lastname` from the first and last words of `name`.
pub fn output_base_name(name: Option<&str>) -> String {
    let parts: Vec<&str> = name.map(|n| n.split_whitespace().collect()).unwrap_or_default();
    match parts.as_slice() {
        [first, .., last] => format!("{}_{}", capitalize(first), capitalize(last)),
        _ => DEFAULT_BASE_NAME.to_string(),
    }
}

/// Writes `contents` to `path` through a temporary file in the same
/// directory, so a failed write never leaves a partial file at `path`.
fn write_atomic(path: &Path, contents: &str) -> Result<(), AppError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| AppError::io(dir, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| AppError::io(file.path(), e))?;
    file.persist(path).map_err(|e| AppError::io(path, e.error))?;
    Ok(())
}

/// Generates the `.tex` file and, unless disabled, compiles it.
///
/// Load, template and write errors are returned. Compiler failures are logged
/// and leave `pdf_path` empty.
pub fn run(config: &Config) -> Result<RunOutcome, AppError> {
    info!("Using resume document: {}", config.input.display());
    let document = load_resume(&config.input)?;

    let template =
        std::fs::read_to_string(&config.template).map_err(|source| AppError::Template {
            path: config.template.clone(),
            source,
        })?;

    let highlight = if config.highlight_authors.is_empty() {
        document.author_variants()
    } else {
        config.highlight_authors.clone()
    };
    let latex = render(&template, &TemplateValues::from_document(&document, &highlight));

    let base_name = output_base_name(Some(&document.name));
    std::fs::create_dir_all(&config.output_dir)
        .map_err(|e| AppError::io(&config.output_dir, e))?;
    let tex_path = config.output_dir.join(format!("{base_name}.tex"));
    write_atomic(&tex_path, &latex)?;
    info!("Generated LaTeX file: {}", tex_path.display());

    if !config.compile {
        return Ok(RunOutcome {
            tex_path,
            pdf_path: None,
        });
    }

    let compiler = Compiler::new(&config.compiler, &config.output_dir);
    let pdf_path = match compiler.compile(&tex_path, &base_name) {
        Ok(pdf) => {
            compiler.clean_template_artifacts();
            info!("Generated PDF file: {}", pdf.display());
            Some(pdf)
        }
        Err(e) if e.is_compile_failure() => {
            warn!("Failed to generate PDF: {e}");
            None
        }
        Err(e) => return Err(e),
    };

    Ok(RunOutcome { tex_path, pdf_path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::template::Token;

    const RESUME: &str = "---
name: Ada King Lovelace
summary: Writes notes
contact:
  email: ada@example.org
  links:
    - name: Site
      url: https://ada.dev
skills:
  - category: Math
    items: Analysis
experience:
  - title: Analyst
    company: Engines
    location: London
    date_start: 1842
    date_end: 1843
publications:
  - authors: C. Babbage and Ada King Lovelace
    title: Sketch
    venue: Memoirs
    year: 1843
    url: https://example.org
---
Notes below the front matter are ignored.
";

    const TEMPLATE: &str = "NAME|PHONE|EMAIL|LOCATION|LINKS|SUMMARY|SKILLS|EXPERIENCE|EDUCATION|AWARDS|CERTIFICATIONS|PUBLICATIONS";

    fn config_in(dir: &Path) -> Config {
        let input = dir.join("resume.md");
        let template = dir.join("template.tex");
        std::fs::write(&input, RESUME).unwrap();
        std::fs::write(&template, TEMPLATE).unwrap();
        Config {
            input,
            template,
            output_dir: dir.join("out"),
            compiler: "resumetex-no-such-compiler".to_string(),
            compile: false,
            highlight_authors: vec![],
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_output_base_name() {
        assert_eq!(output_base_name(Some("ada lovelace")), "Ada_Lovelace");
        assert_eq!(output_base_name(Some("ADA king LOVELACE")), "Ada_Lovelace");
        assert_eq!(output_base_name(Some("Ada")), DEFAULT_BASE_NAME);
        assert_eq!(output_base_name(Some("  ")), DEFAULT_BASE_NAME);
        assert_eq!(output_base_name(None), DEFAULT_BASE_NAME);
    }

    #[test]
    fn test_run_writes_named_tex_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let outcome = run(&config).unwrap();
        assert_eq!(outcome.tex_path, dir.path().join("out").join("Ada_Lovelace.tex"));
        assert!(outcome.pdf_path.is_none());

        let latex = std::fs::read_to_string(&outcome.tex_path).unwrap();
        for token in Token::ALL {
            assert!(!latex.contains(token.as_str()));
        }
        assert!(latex.starts_with("Ada King Lovelace||ada@example.org||"));
        assert!(latex.contains(r"\textbf{Ada King Lovelace}"));
    }

    #[test]
    fn test_explicit_highlight_overrides_owner_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.highlight_authors = vec!["C. Babbage".to_string()];

        let outcome = run(&config).unwrap();
        let latex = std::fs::read_to_string(&outcome.tex_path).unwrap();
        assert!(latex.contains(r"\textbf{C. Babbage}"));
        assert!(!latex.contains(r"\textbf{Ada King Lovelace}"));
    }

    #[test]
    fn test_compile_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.compile = true;

        let outcome = run(&config).unwrap();
        assert!(outcome.tex_path.exists());
        assert!(outcome.pdf_path.is_none());
    }

    #[test]
    fn test_missing_template_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.template = dir.path().join("missing.tex");

        let err = run(&config).unwrap_err();
        assert!(matches!(err, AppError::Template { .. }));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.input = dir.path().join("missing.yaml");

        assert!(matches!(run(&config).unwrap_err(), AppError::Io { .. }));
    }
}
