use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::errors::AppError;
use crate::models::ResumeDocument;

/// A YAML block between `---` lines at the very start of the file.
static FRONT_MATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---").expect("front matter pattern is valid")
});

/// Returns the front-matter block of `content`, or all of it when there is none.
pub fn extract_yaml(content: &str) -> &str {
    FRONT_MATTER_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map_or(content, |m| m.as_str())
}

/// Parses a resume from the text of an input document.
pub fn parse_resume(content: &str, path: &Path) -> Result<ResumeDocument, AppError> {
    serde_yaml::from_str(extract_yaml(content)).map_err(|source| AppError::InputParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and parses the resume document at `path`.
pub fn load_resume(path: &Path) -> Result<ResumeDocument, AppError> {
    debug!("Reading resume document {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    parse_resume(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BODY: &str = "name: Ada Lovelace
summary: Analyst
contact:
  links: []
skills: []
experience: []";

    #[test]
    fn test_extract_front_matter() {
        let content = format!("---\n{BODY}\n---\n\n# Notes\nfree text: [not yaml\n");
        assert_eq!(extract_yaml(&content), BODY);
    }

    #[test]
    fn test_plain_yaml_used_whole() {
        assert_eq!(extract_yaml(BODY), BODY);
    }

    #[test]
    fn test_front_matter_must_start_the_file() {
        let content = format!("intro\n---\n{BODY}\n---\n");
        assert_eq!(extract_yaml(&content), content);
    }

    #[test]
    fn test_load_from_file_with_front_matter() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "---\n{BODY}\n---\ntrailing notes").unwrap();
        let doc = load_resume(file.path()).unwrap();
        assert_eq!(doc.name, "Ada Lovelace");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_resume(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }

    #[test]
    fn test_unparsable_document_is_input_error() {
        let err = parse_resume("name: [unclosed", Path::new("bad.yaml")).unwrap_err();
        assert!(matches!(err, AppError::InputParse { .. }));
    }

    #[test]
    fn test_missing_mandatory_key_is_input_error() {
        let err = parse_resume("name: Ada\nsummary: x\n", Path::new("r.yaml")).unwrap_err();
        assert!(err.to_string().contains("r.yaml"));
    }
}
