use crate::utils::error::{BatchError, Result};
use std::fs::Metadata;
use std::path::{Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();

    if display.is_empty() {
        return Err(BatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(BatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| BatchError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// 兩個路徑是否指向同一個檔案 (含 hard link)
pub fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (std::fs::metadata(a), std::fs::metadata(b)) {
        (Ok(meta_a), Ok(meta_b)) => same_identity(a, &meta_a, b, &meta_b),
        _ => false,
    }
}

#[cfg(unix)]
fn same_identity(_a: &Path, meta_a: &Metadata, _b: &Path, meta_b: &Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    meta_a.dev() == meta_b.dev() && meta_a.ino() == meta_b.ino()
}

#[cfg(not(unix))]
fn same_identity(a: &Path, _meta_a: &Metadata, b: &Path, _meta_b: &Metadata) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

pub fn validate_distinct_paths(
    field_name: &str,
    path: &Path,
    others: &[(&str, &PathBuf)],
) -> Result<()> {
    for (other_name, other) in others {
        if same_file(path, other) {
            return Err(BatchError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: path.display().to_string(),
                reason: format!("Must differ from {}", other_name),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("job.input", Path::new("corpus.txt")).is_ok());
        assert!(validate_path("job.input", Path::new("")).is_err());
        assert!(validate_path("job.input", Path::new("bad\0name")).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(PathBuf::from("a.txt"));
        let missing: Option<PathBuf> = None;

        assert_eq!(
            validate_required_field("job.sink_a", &present).unwrap(),
            &PathBuf::from("a.txt")
        );
        let err = validate_required_field("job.sink_b", &missing).unwrap_err();
        assert!(
            matches!(err, BatchError::MissingConfigError { ref field } if field == "job.sink_b")
        );
    }

    #[test]
    fn test_validate_distinct_paths() {
        let input = PathBuf::from("corpus.txt");
        let other = PathBuf::from("train.txt");
        let others = [("job.input", &input), ("job.sink_b", &other)];

        assert!(validate_distinct_paths("job.sink_a", Path::new("test.txt"), &others).is_ok());
        assert!(validate_distinct_paths("job.sink_a", Path::new("train.txt"), &others).is_err());
    }

    #[test]
    fn test_same_file_resolves_existing_paths() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("corpus.txt");
        std::fs::write(&file, "x").unwrap();

        let dotted = dir.path().join(".").join("corpus.txt");
        assert!(same_file(&file, &dotted));
        assert!(!same_file(&file, &dir.path().join("other.txt")));
    }

    #[cfg(unix)]
    #[test]
    fn test_same_file_detects_hard_link() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("corpus.txt");
        let link = dir.path().join("linked.txt");
        std::fs::write(&file, "x").unwrap();
        std::fs::hard_link(&file, &link).unwrap();

        assert!(same_file(&file, &link));
    }
}
