//! Municipality display names
//!
//! The municipal store keys rows by code (`GM0363`). Names come from a CSV with
//! `gm_code` and `gm_naam` columns.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use log::debug;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::{AtlasError, Result};

#[derive(Debug, Deserialize)]
struct MunicipalityRow {
    gm_code: String,
    gm_naam: String,
}

/// Lookup from municipality code to name
#[derive(Debug, Clone, Default)]
pub struct MunicipalityNames {
    names: FxHashMap<String, String>,
}

impl MunicipalityNames {
    /// Read names from a CSV file
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(AtlasError::MissingFile(path.to_path_buf()));
        }
        let reader = ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
        let names = Self::collect(reader)?;
        debug!("Read {} municipality names from {}", names.len(), path.display());
        Ok(names)
    }

    /// Read names from any CSV source with a header row
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Self::collect(ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader))
    }

    fn collect<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let mut names = FxHashMap::default();
        for row in reader.deserialize::<MunicipalityRow>() {
            let row = row?;
            if !row.gm_code.is_empty() {
                names.insert(row.gm_code, row.gm_naam);
            }
        }
        Ok(Self { names })
    }

    /// Name for a code, if known
    #[must_use]
    pub fn name(&self, code: &str) -> Option<&str> {
        self.names
            .get(code)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Name for a code, falling back to the code itself
    #[must_use]
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.name(code).unwrap_or(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
