//! Data sources that supply the unfiltered records of a form.

use crate::errors::FilterError;
use crate::import::{self, EXTENSIONS, ImportFormat};
use crate::record::Record;
use crate::types::FormName;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Supplies the full record collection of a form. Called once per form selection.
pub trait RecordSource {
    /// # Errors
    /// Returns `NoSuchForm` for unknown forms, or the loading error.
    fn fetch(&self, form: &str) -> Result<Vec<Record>, FilterError>;

    /// # Errors
    /// Returns an error if the available forms cannot be listed.
    fn forms(&self) -> Result<Vec<FormName>, FilterError>;
}

/// Records held in memory, keyed by form.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    forms: BTreeMap<FormName, Vec<Record>>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, form: impl Into<FormName>, records: Vec<Record>) {
        self.forms.insert(form.into(), records);
    }

    #[must_use]
    pub fn with_form(mut self, form: impl Into<FormName>, records: Vec<Record>) -> Self {
        self.insert(form, records);
        self
    }
}

impl RecordSource for MemorySource {
    fn fetch(&self, form: &str) -> Result<Vec<Record>, FilterError> {
        self.forms.get(form).cloned().ok_or_else(|| FilterError::NoSuchForm(form.to_string()))
    }

    fn forms(&self) -> Result<Vec<FormName>, FilterError> {
        Ok(self.forms.keys().cloned().collect())
    }
}

/// A directory where form `name` lives in `name.json`, `name.ndjson`, `name.jsonl` or `name.csv`.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, form: &str) -> Option<(PathBuf, ImportFormat)> {
        // Form names are plain file stems
        if form.is_empty() || form.contains(['/', '\\']) || form.starts_with('.') {
            return None;
        }
        EXTENSIONS.iter().find_map(|(ext, fmt)| {
            let p = self.dir.join(format!("{form}.{ext}"));
            p.is_file().then_some((p, *fmt))
        })
    }
}

impl RecordSource for DirSource {
    fn fetch(&self, form: &str) -> Result<Vec<Record>, FilterError> {
        let (path, fmt) =
            self.path_for(form).ok_or_else(|| FilterError::NoSuchForm(form.to_string()))?;
        import::load_file(&path, fmt)
    }

    fn forms(&self) -> Result<Vec<FormName>, FilterError> {
        let mut out = Vec::new();
        for entry in std::fs::read_dir(&self.dir)
            .map_err(|e| FilterError::Io(format!("{}: {e}", self.dir.display())))?
        {
            let path = entry?.path();
            if !path.is_file() || import::format_from_path(&path).is_none() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                out.push(stem.to_string());
            }
        }
        out.sort();
        out.dedup();
        Ok(out)
    }
}
