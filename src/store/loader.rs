//! Bulk loading shared by the municipal and provincial stores
//!
//! A [`DataStore`] owns a workbook source and a once-only value table. The
//! first `load_all` call runs a single pass over every (scenario, year) file.
//! Callers arriving while it runs join that pass and see its outcome, failure
//! included. After a successful pass the table is frozen.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use futures::future::{BoxFuture, FutureExt, Shared};
use futures::stream::{self, StreamExt, TryStreamExt};
use log::{debug, error, info, warn};
use rayon::prelude::*;
use tokio::sync::OnceCell;

use super::table::ValueTable;
use crate::config::{DataConfig, MissingFilePolicy};
use crate::error::{AtlasError, NotAvailable, QueryResult, Result};
use crate::models::{Carrier, DataValue, MetricType, QueryParams, Scenario, SliceKey};
use crate::utils::logging::{log_missing_sheet, log_skipped_file};
use crate::workbook::{MemoryWorkbookSource, Sheet, Workbook, WorkbookSource};

/// Naming and parsing rules of one family of source workbooks
pub trait SheetLayout: Send + Sync + 'static {
    /// Name used in log messages
    const DOMAIN: &'static str;

    /// Relative path of the workbook for a scenario and year
    fn source_path(config: &DataConfig, scenario: Scenario, year: u16) -> PathBuf;

    /// Name of the sheet holding a carrier and metric type
    fn sheet_name(carrier: Carrier, metric_type: MetricType) -> String;

    /// Record every labelled cell of `sheet` under `slice`
    fn parse_sheet(sheet: &Sheet, slice: SliceKey, table: &mut ValueTable);
}

/// Outcome of one load pass, shared by every caller that awaited it
type PassOutcome = std::result::Result<Arc<ValueTable>, Arc<AtlasError>>;

/// A running load pass
type LoadPass = Shared<BoxFuture<'static, PassOutcome>>;

/// Loader and frozen table for one layout
pub struct DataStore<L: SheetLayout> {
    source: Arc<dyn WorkbookSource>,
    config: DataConfig,
    table: OnceCell<Arc<ValueTable>>,
    in_flight: Mutex<Option<LoadPass>>,
    layout: PhantomData<fn() -> L>,
}

impl<L: SheetLayout> DataStore<L> {
    /// Create an empty, unloaded store reading from `source`
    pub fn new(source: impl WorkbookSource + 'static, config: DataConfig) -> Self {
        Self {
            source: Arc::new(source),
            config,
            table: OnceCell::new(),
            in_flight: Mutex::new(None),
            layout: PhantomData,
        }
    }

    /// Create a store that is already loaded with `table`
    #[must_use]
    pub fn from_table(table: ValueTable) -> Self {
        Self {
            source: Arc::new(MemoryWorkbookSource::new()),
            config: DataConfig::default(),
            table: OnceCell::new_with(Some(Arc::new(table))),
            in_flight: Mutex::new(None),
            layout: PhantomData,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &DataConfig {
        &self.config
    }

    /// Whether a load pass has completed successfully
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.table.initialized()
    }

    /// The loaded table, if any
    #[must_use]
    pub fn table(&self) -> Option<&ValueTable> {
        self.table.get().map(|table| &**table)
    }

    /// Load every source file once.
    ///
    /// Returns immediately when already loaded. Callers arriving while a pass
    /// runs join it and receive its outcome, error included. A failed pass
    /// leaves the store unloaded; only a call made after that failure was
    /// returned starts a new pass.
    pub async fn load_all(&self) -> Result<()> {
        if self.is_loaded() {
            return Ok(());
        }

        let pass = self.join_or_start_pass();
        let outcome = pass.clone().await;

        if let Ok(table) = &outcome {
            // Every caller of the pass offers the same table; the first one stores it
            let _ = self.table.set(Arc::clone(table));
        }
        let mut in_flight = self.lock_in_flight();
        if in_flight.as_ref().is_some_and(|running| running.ptr_eq(&pass)) {
            *in_flight = None;
        }

        outcome.map(|_| ()).map_err(AtlasError::Load)
    }

    fn join_or_start_pass(&self) -> LoadPass {
        let mut in_flight = self.lock_in_flight();
        if let Some(pass) = in_flight.as_ref() {
            debug!("Joining the running {} load pass", L::DOMAIN);
            return pass.clone();
        }

        let pass = load_pass::<L>(Arc::clone(&self.source), self.config.clone())
            .map(|outcome| outcome.map(Arc::new).map_err(Arc::new))
            .boxed()
            .shared();
        *in_flight = Some(pass.clone());
        pass
    }

    /// The slot only holds a future handle, so poisoning is ignored
    fn lock_in_flight(&self) -> MutexGuard<'_, Option<LoadPass>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stored value for fully specified parameters
    pub fn lookup(&self, params: &QueryParams) -> QueryResult<&DataValue> {
        let Some(table) = self.table.get() else {
            debug!("{} data not loaded yet", L::DOMAIN);
            return Err(NotAvailable);
        };
        let Some(key) = params.to_key() else {
            warn!("Missing required parameters: {:?}", params.missing());
            return Err(NotAvailable);
        };
        table.get(&key)
    }
}

async fn load_pass<L: SheetLayout>(
    source: Arc<dyn WorkbookSource>,
    config: DataConfig,
) -> Result<ValueTable> {
    let start = Instant::now();
    let config = Arc::new(config);
    let pairs: Vec<(Scenario, u16)> = Scenario::pairs().collect();
    info!("Loading {} {} source files", pairs.len(), L::DOMAIN);

    let tables: Vec<ValueTable> = stream::iter(pairs)
        .map(|(scenario, year)| {
            load_file::<L>(Arc::clone(&source), Arc::clone(&config), scenario, year)
        })
        .buffer_unordered(config.concurrency())
        .try_collect()
        .await
        .inspect_err(|e| error!("Error loading {} data: {e}", L::DOMAIN))?;

    let mut table = ValueTable::new();
    for file_table in tables {
        table.merge(file_table);
    }

    info!(
        "All {} data loaded: {} values in {:?}",
        L::DOMAIN,
        table.len(),
        start.elapsed()
    );
    Ok(table)
}

async fn load_file<L: SheetLayout>(
    source: Arc<dyn WorkbookSource>,
    config: Arc<DataConfig>,
    scenario: Scenario,
    year: u16,
) -> Result<ValueTable> {
    let path = L::source_path(&config, scenario, year);

    let workbook = match source.fetch(&path).await {
        Ok(workbook) => workbook,
        Err(e) if e.is_missing_file() && config.missing_files == MissingFilePolicy::Skip => {
            log_skipped_file(L::DOMAIN, &path);
            return Ok(ValueTable::new());
        }
        Err(e) => {
            error!("Error loading file {}: {e}", path.display());
            return Err(e);
        }
    };

    let table =
        tokio::task::spawn_blocking(move || parse_workbook::<L>(&workbook, scenario, year, &path))
            .await?;
    Ok(table)
}

/// Parse the sheets of one workbook in parallel and merge the results.
///
/// Each sheet fills its own table, so no locking is involved. Missing sheets
/// are logged and skipped.
fn parse_workbook<L: SheetLayout>(
    workbook: &Workbook,
    scenario: Scenario,
    year: u16,
    path: &Path,
) -> ValueTable {
    let sheets: Vec<(SliceKey, &Sheet)> = Carrier::ALL
        .into_iter()
        .flat_map(|carrier| MetricType::ALL.into_iter().map(move |metric| (carrier, metric)))
        .filter_map(|(carrier, metric_type)| {
            let name = L::sheet_name(carrier, metric_type);
            match workbook.sheet(&name) {
                Some(sheet) => Some((SliceKey::new(scenario, year, carrier, metric_type), sheet)),
                None => {
                    log_missing_sheet(L::DOMAIN, &name, path);
                    None
                }
            }
        })
        .collect();

    let table = sheets
        .par_iter()
        .map(|(slice, sheet)| {
            let mut table = ValueTable::new();
            L::parse_sheet(sheet, *slice, &mut table);
            table
        })
        .reduce(ValueTable::new, |mut acc, table| {
            acc.merge(table);
            acc
        });

    debug!(
        "Parsed {} sheets with {} values from {}",
        sheets.len(),
        table.len(),
        path.display()
    );
    table
}
