/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Validation configuration.

use fixvet_dictionary::Version;
use fixvet_tagvalue::SOH;
use std::path::{Path, PathBuf};

/// Default directory holding the dictionary files.
pub const DEFAULT_DICTIONARY_DIR: &str = "/usr/local/etc/fixparser";

/// Configuration for validation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Field separator octet. SOH (0x01) on the wire; fixtures commonly use
    /// `b'|'` as a print-safe surrogate.
    pub separator: u8,
    /// FIX version whose dictionary governs validation.
    pub version: Version,
    /// Directory the dictionary file is loaded from.
    pub dictionary_dir: PathBuf,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            separator: SOH,
            version: Version::Fix44,
            dictionary_dir: PathBuf::from(DEFAULT_DICTIONARY_DIR),
        }
    }
}

impl ValidatorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field separator octet.
    #[must_use]
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the FIX version.
    #[must_use]
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Sets the directory the dictionary file is loaded from.
    #[must_use]
    pub fn with_dictionary_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dictionary_dir = dir.into();
        self
    }

    /// Returns the full path of the dictionary file for the configured
    /// version.
    #[must_use]
    pub fn dictionary_path(&self) -> PathBuf {
        self.dictionary_dir
            .join(self.version.dictionary_file_name())
    }

    /// Returns the configured dictionary directory.
    #[must_use]
    pub fn dictionary_dir(&self) -> &Path {
        &self.dictionary_dir
    }
}
