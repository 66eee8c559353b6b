//! Workbook sources
//!
//! A [`WorkbookSource`] turns a relative source path (for example
//! `municipal/Scenario Horizon Aanvoer 2030 Gemeentendata.xlsx`) into a decoded
//! [`Workbook`]. The stores never touch the filesystem directly, so tests can
//! hand them in-memory fixtures.

use std::collections::HashSet;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use calamine::{Data, Range, Reader, open_workbook_auto};
use rustc_hash::FxHashMap;

use super::sheet::{CellValue, Sheet, Workbook};
use crate::error::{AtlasError, Result};
use crate::utils::logging::{log_workbook_open, log_workbook_read};

/// Boxed future returned by [`WorkbookSource::fetch`]
pub type WorkbookFuture<'a> = Pin<Box<dyn Future<Output = Result<Workbook>> + Send + 'a>>;

/// Core trait for fetching and decoding one source workbook
pub trait WorkbookSource: Send + Sync {
    /// Fetch the workbook at `path`, relative to the source's root.
    ///
    /// A source that does not have the file must fail with
    /// [`AtlasError::MissingFile`].
    fn fetch<'a>(&'a self, path: &'a Path) -> WorkbookFuture<'a>;
}

impl<S: WorkbookSource + ?Sized> WorkbookSource for Arc<S> {
    fn fetch<'a>(&'a self, path: &'a Path) -> WorkbookFuture<'a> {
        (**self).fetch(path)
    }
}

/// Reads `.xlsx`/`.xls`/`.ods` files below a root directory with calamine
#[derive(Debug, Clone)]
pub struct FileWorkbookSource {
    root: PathBuf,
}

impl FileWorkbookSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl WorkbookSource for FileWorkbookSource {
    fn fetch<'a>(&'a self, path: &'a Path) -> WorkbookFuture<'a> {
        let full_path = self.root.join(path);
        Box::pin(async move {
            // calamine is synchronous; keep decoding off the async workers
            tokio::task::spawn_blocking(move || read_workbook(&full_path)).await?
        })
    }
}

/// Decode every sheet of a workbook file
pub fn read_workbook(path: &Path) -> Result<Workbook> {
    if !path.is_file() {
        return Err(AtlasError::MissingFile(path.to_path_buf()));
    }

    let start = Instant::now();
    log_workbook_open(path);

    let mut reader = open_workbook_auto(path).map_err(|e| AtlasError::workbook(path, e))?;
    let mut workbook = Workbook::new();
    for name in reader.sheet_names() {
        let range = reader
            .worksheet_range(&name)
            .map_err(|e| AtlasError::workbook(path, format!("sheet '{name}': {e}")))?;
        workbook.insert(name, range_to_sheet(&range));
    }

    log_workbook_read(path, workbook.sheet_count(), start.elapsed());
    Ok(workbook)
}

/// Copy a calamine range into a grid indexed from A1
fn range_to_sheet(range: &Range<Data>) -> Sheet {
    let (Some((start_row, start_col)), Some((end_row, end_col))) = (range.start(), range.end())
    else {
        return Sheet::default();
    };

    let width = end_col as usize + 1;
    let mut rows = vec![vec![CellValue::Empty; width]; end_row as usize + 1];
    for (row, col, data) in range.cells() {
        let cell = to_cell_value(data);
        if !cell.is_empty() {
            rows[start_row as usize + row][start_col as usize + col] = cell;
        }
    }
    Sheet::from_rows(rows)
}

#[allow(clippy::cast_precision_loss)]
fn to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::from(s.as_str()),
        other => CellValue::Text(other.to_string()),
    }
}

/// In-memory workbooks keyed by relative path.
///
/// Counts fetches and can simulate slow or broken files, which makes it the
/// source of choice for fixtures.
#[derive(Debug, Default)]
pub struct MemoryWorkbookSource {
    workbooks: FxHashMap<PathBuf, Workbook>,
    broken: HashSet<PathBuf>,
    delay: Option<Duration>,
    fetches: AtomicUsize,
}

impl MemoryWorkbookSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a workbook under a relative path
    #[must_use]
    pub fn with_workbook(mut self, path: impl Into<PathBuf>, workbook: Workbook) -> Self {
        self.workbooks.insert(path.into(), workbook);
        self
    }

    /// Make fetches of `path` fail as if the file could not be decoded
    #[must_use]
    pub fn with_broken(mut self, path: impl Into<PathBuf>) -> Self {
        self.broken.insert(path.into());
        self
    }

    /// Wait this long inside every fetch
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of fetches issued so far
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl WorkbookSource for MemoryWorkbookSource {
    fn fetch<'a>(&'a self, path: &'a Path) -> WorkbookFuture<'a> {
        Box::pin(async move {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.broken.contains(path) {
                return Err(AtlasError::workbook(path, "unreadable workbook"));
            }
            self.workbooks
                .get(path)
                .cloned()
                .ok_or_else(|| AtlasError::MissingFile(path.to_path_buf()))
        })
    }
}
