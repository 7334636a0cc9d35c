use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// A mintbl.toml file on disk with both raw content and parsed manifest.
pub struct ManifestFile {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse a mintbl.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// The source root module directories are relative to: the directory
    /// containing the manifest.
    pub fn source_root(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_reads_and_parses() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mintbl.toml");
        fs::write(&path, "[modules.attrs]\nin = \"Attributes.td\"\n").unwrap();

        let file = ManifestFile::open(&path).unwrap();

        assert_eq!(file.path(), path.as_path());
        assert!(file.content().contains("Attributes.td"));
        assert_eq!(file.manifest().modules.len(), 1);
        assert_eq!(file.source_root(), temp.path());
    }

    #[test]
    fn test_source_root_of_bare_filename() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mintbl.toml");
        fs::write(&path, "").unwrap();

        let mut file = ManifestFile::open(&path).unwrap();
        file.path = PathBuf::from("mintbl.toml");
        assert_eq!(file.source_root(), Path::new("."));
    }
}
