//! Config writer
//!
//! Turns form values into a netplan document, overwrites the target file
//! and runs the applier.

use std::path::{Path, PathBuf};

use crate::config::defaults::DEFAULT_FILE_MODE;
use crate::core::form::FormValues;
use crate::core::netplan::NetplanDocument;
use crate::core::settings::Settings;
use crate::error::{DocumentError, FilesystemError, SettingsError, SubmitError};
use crate::infra::applier::CommandApplier;
use crate::infra::filesystem;

/// Result of a successful submission
#[derive(Debug, Clone)]
pub struct ApplyOutcome {
    /// File that was written
    pub path: PathBuf,
    /// Exact document written
    pub content: String,
    /// Applier output, `None` when applying is disabled
    pub apply_output: Option<String>,
}

/// Writes and applies the netplan file
#[derive(Debug, Clone)]
pub struct ConfigWriter {
    path: PathBuf,
    file_mode: u32,
    applier: Option<CommandApplier>,
}

impl ConfigWriter {
    /// Create a writer for `path`
    pub fn new(path: impl Into<PathBuf>, applier: Option<CommandApplier>) -> Self {
        Self {
            path: path.into(),
            file_mode: DEFAULT_FILE_MODE,
            applier,
        }
    }

    /// Create a writer from loaded settings
    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        let writer = Self::new(settings.netplan_path(), settings.applier());
        Ok(writer.with_file_mode(settings.file_mode()?))
    }

    /// Override the permission bits of the written file
    #[must_use]
    pub fn with_file_mode(mut self, mode: u32) -> Self {
        self.file_mode = mode;
        self
    }

    /// Target file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Configured applier, if any
    pub fn applier(&self) -> Option<&CommandApplier> {
        self.applier.as_ref()
    }

    /// Build and serialize the document without touching the filesystem
    pub fn render(&self, values: &FormValues) -> Result<String, SubmitError> {
        let document = NetplanDocument::from_form(values)?;
        Ok(document.to_yaml()?)
    }

    /// Validate, write and apply
    ///
    /// The file is written before the applier runs; an applier failure leaves
    /// the new file in place.
    pub fn submit(&self, values: &FormValues) -> Result<ApplyOutcome, SubmitError> {
        let content = self.render(values)?;

        filesystem::write_file(&self.path, &content, self.file_mode)?;
        tracing::info!(
            "Wrote {} bytes to {}",
            content.len(),
            self.path.display()
        );

        let apply_output = match &self.applier {
            Some(applier) => Some(applier.apply()?.output),
            None => {
                tracing::info!("Apply disabled, skipping");
                None
            }
        };

        Ok(ApplyOutcome {
            path: self.path.clone(),
            content,
            apply_output,
        })
    }

    /// Current file contents, verbatim
    pub fn read_current(&self) -> Result<String, FilesystemError> {
        filesystem::read_file(&self.path)
    }

    /// Parse the current file
    ///
    /// Returns `Ok(None)` when the file does not exist yet.
    pub fn load_current(&self) -> Result<Option<NetplanDocument>, DocumentError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = self.read_current()?;
        NetplanDocument::from_yaml(&content, &self.path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApplyError, ValidationError};
    use tempfile::TempDir;

    fn values(dhcp4: bool) -> FormValues {
        FormValues {
            interface: Some("eth0".to_string()),
            dhcp4,
            dhcp6: false,
            address: "10.0.0.5/24".to_string(),
            gateway: "10.0.0.1".to_string(),
            nameservers: "8.8.8.8, 1.1.1.1".to_string(),
        }
    }

    fn sh(script: &str) -> Option<CommandApplier> {
        Some(CommandApplier::new(
            "sh",
            vec!["-c".to_string(), script.to_string()],
        ))
    }

    #[test]
    fn test_submit_writes_and_applies() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("01-netcfg.yaml");
        let writer = ConfigWriter::new(&path, sh("echo applied"));

        let outcome = writer.submit(&values(false)).unwrap();

        assert_eq!(outcome.path, path);
        assert_eq!(outcome.apply_output.as_deref(), Some("applied\n"));
        assert_eq!(writer.read_current().unwrap(), outcome.content);
    }

    #[test]
    fn test_read_current_returns_latest_write() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ConfigWriter::new(temp_dir.path().join("01-netcfg.yaml"), None);

        writer.submit(&values(false)).unwrap();
        let second = writer.submit(&values(true)).unwrap();

        assert_eq!(writer.read_current().unwrap(), second.content);
        assert!(second.content.contains("dhcp4: true"));
    }

    #[test]
    fn test_validation_error_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("01-netcfg.yaml");
        let writer = ConfigWriter::new(&path, sh("exit 0"));

        let bad = FormValues {
            gateway: String::new(),
            ..values(false)
        };
        let err = writer.submit(&bad).unwrap_err();

        assert!(matches!(
            err,
            SubmitError::Validation(ValidationError::MissingGateway)
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_apply_failure_keeps_written_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("01-netcfg.yaml");
        let writer = ConfigWriter::new(&path, sh("echo 'Invalid YAML' >&2; exit 1"));

        let err = writer.submit(&values(true)).unwrap_err();

        match err {
            SubmitError::Apply(ApplyError::Failed { output, .. }) => {
                assert!(output.contains("Invalid YAML"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(path.exists());
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        // A directory in place of the file
        let writer = ConfigWriter::new(temp_dir.path(), None);

        let err = writer.submit(&values(true)).unwrap_err();
        assert!(matches!(err, SubmitError::Io(_)));
    }

    #[test]
    fn test_load_current() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ConfigWriter::new(temp_dir.path().join("01-netcfg.yaml"), None);
        assert!(writer.load_current().unwrap().is_none());

        writer.submit(&values(false)).unwrap();
        let doc = writer.load_current().unwrap().unwrap();
        assert_eq!(
            doc.interface("eth0").unwrap().gateway4.as_deref(),
            Some("10.0.0.1")
        );
    }

    #[test]
    fn test_load_current_read_failure_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        // Exists but cannot be read as a file
        let writer = ConfigWriter::new(temp_dir.path(), None);

        let err = writer.load_current().unwrap_err();
        assert!(matches!(
            err,
            DocumentError::Read(FilesystemError::ReadFile { .. })
        ));
    }

    #[test]
    fn test_read_current_is_lossy_for_non_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("01-netcfg.yaml");
        std::fs::write(&path, b"# caf\xe9\nnetwork: {}\n").unwrap();
        let writer = ConfigWriter::new(&path, None);

        let content = writer.read_current().unwrap();
        assert_eq!(content, "# caf\u{fffd}\nnetwork: {}\n");
    }

    #[test]
    fn test_from_settings_uses_configured_path() {
        let mut settings = Settings::default();
        settings.netplan.path = Some(PathBuf::from("/tmp/99-custom.yaml"));
        settings.apply.enabled = Some(false);

        let writer = ConfigWriter::from_settings(&settings).unwrap();
        assert_eq!(writer.path(), Path::new("/tmp/99-custom.yaml"));
        assert!(writer.applier().is_none());
    }
}
