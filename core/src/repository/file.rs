use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::error::LoadError;
use crate::model::raw::RawApiResponse;
use crate::repository::traits::PayloadSource;

/// Reads the payload from a JSON file on disk.
#[derive(Clone)]
pub struct FilePayloadSource {
    file_path: PathBuf,
}

impl FilePayloadSource {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl PayloadSource for FilePayloadSource {
    fn fetch(&self) -> Result<RawApiResponse, LoadError> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_payload_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = r#"{"success": true, "data": {"total": [], "table": [], "year": 2023}}"#;
        write!(file, "{}", json).unwrap();

        let source = FilePayloadSource::new(file.path());
        let raw = source.fetch().unwrap();
        assert_eq!(raw.success, Some(true));
        assert_eq!(raw.data.unwrap().year, Some(2023));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FilePayloadSource::new(dir.path().join("nope.json"));
        assert!(matches!(source.fetch(), Err(LoadError::Io(_))));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<html>not json</html>").unwrap();
        let source = FilePayloadSource::new(file.path());
        assert!(matches!(source.fetch(), Err(LoadError::Parse(_))));
    }
}
