// src/utils.rs
use anyhow::{Context, Result};
use std::path::Path;

/// Extensions accepted for résumé and job-description inputs. Binary formats
/// (PDF, DOCX) must be decoded to text before they reach this tool.
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md"];

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Validate file extension against allowed types
pub fn validate_file_extension(filename: &str, allowed: &[&str]) -> Result<()> {
    let ext = get_file_extension(filename)
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", filename))?;

    if !allowed.contains(&ext.as_str()) {
        anyhow::bail!(
            "Unsupported file extension: {}. Allowed: {:?}",
            ext,
            allowed
        );
    }

    Ok(())
}

/// Read an input document as text with proper error context. This is the
/// decode step for plain-text inputs; a failure here is surfaced to the
/// caller since analysis cannot proceed without text.
pub async fn read_document(path: &Path) -> Result<String> {
    let filename = path.to_string_lossy();
    validate_file_extension(&filename, TEXT_EXTENSIONS)?;
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Write result content with proper error context
pub async fn write_output(path: &Path, content: &str) -> Result<()> {
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_file_extension() {
        assert_eq!(get_file_extension("resume.txt"), Some("txt".to_string()));
        assert_eq!(get_file_extension("resume.TXT"), Some("txt".to_string()));
        assert_eq!(get_file_extension("noext"), None);
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("resume.txt", TEXT_EXTENSIONS).is_ok());
        assert!(validate_file_extension("notes.md", TEXT_EXTENSIONS).is_ok());
        assert!(validate_file_extension("resume.pdf", TEXT_EXTENSIONS).is_err());
        assert!(validate_file_extension("noext", TEXT_EXTENSIONS).is_err());
    }
}
