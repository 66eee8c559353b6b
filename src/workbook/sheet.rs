//! In-memory grid form of a workbook.
//!
//! Sheets are stored with absolute row/column indices so that header rows keep
//! their position regardless of where the first populated cell is.

use rustc_hash::FxHashMap;

use crate::models::DataValue;

/// Value of one spreadsheet cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

static EMPTY: CellValue = CellValue::Empty;

impl CellValue {
    /// True for empty cells and blank text
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// String form of a header or identifier cell; `None` when empty
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Self::Number(n) => Some(n.to_string()),
            Self::Bool(b) => Some(b.to_string()),
        }
    }

    /// Stored form of a data cell; `None` for empty cells
    #[must_use]
    pub fn to_data_value(&self) -> Option<DataValue> {
        match self {
            Self::Empty => None,
            Self::Number(n) => Some(DataValue::Number(*n)),
            Self::Text(text) => Some(DataValue::Text(text.clone())),
            Self::Bool(b) => Some(DataValue::Number(if *b { 1.0 } else { 0.0 })),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value.to_string())
        }
    }
}

/// Rectangular-ish grid of cells; rows may have different lengths
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    #[must_use]
    pub const fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// Number of rows, including leading empty ones
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Index one past the last populated column across all rows
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Cell at an absolute position; out-of-range positions read as empty
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    /// A whole row; missing rows read as empty
    #[must_use]
    pub fn row(&self, row: usize) -> &[CellValue] {
        self.rows.get(row).map_or(&[], Vec::as_slice)
    }
}

/// A decoded workbook: sheets by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    sheets: FxHashMap<String, Sheet>,
}

impl Workbook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sheet(mut self, name: impl Into<String>, sheet: Sheet) -> Self {
        self.insert(name, sheet);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, sheet: Sheet) {
        self.sheets.insert(name.into(), sheet);
    }

    #[must_use]
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.get(name)
    }

    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

/// Builder for sheets in the header layout both stores read.
///
/// Row 3 holds flow types, row 4 sectors, data starts at row 6. Columns 0 and 1
/// are identifier columns and data columns start at 2.
#[derive(Debug, Clone, Default)]
pub struct SheetBuilder {
    columns: Vec<(String, String)>,
    rows: Vec<Vec<CellValue>>,
}

impl SheetBuilder {
    /// Row index of the flow-type header
    pub const TYPE_ROW: usize = 3;
    /// Row index of the sector header
    pub const SECTOR_ROW: usize = 4;
    /// First data row
    pub const FIRST_DATA_ROW: usize = 6;
    /// First data column
    pub const FIRST_DATA_COL: usize = 2;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a data column labelled with a flow type and sector
    #[must_use]
    pub fn column(mut self, flow_type: &str, sector: &str) -> Self {
        self.columns.push((flow_type.to_string(), sector.to_string()));
        self
    }

    /// Add a data row: two identifier cells followed by one cell per column
    #[must_use]
    pub fn row(mut self, code: &str, name: &str, values: Vec<CellValue>) -> Self {
        let mut row = vec![CellValue::from(code), CellValue::from(name)];
        row.extend(values);
        self.rows.push(row);
        self
    }

    #[must_use]
    pub fn build(self) -> Sheet {
        let width = Self::FIRST_DATA_COL + self.columns.len();
        let mut rows = vec![Vec::new(); Self::FIRST_DATA_ROW];
        rows[0] = vec![CellValue::from("Scenario data")];
        let mut types = vec![CellValue::Empty; width];
        let mut sectors = vec![CellValue::Empty; width];
        types[0] = CellValue::from("TYPE");
        sectors[0] = CellValue::from("SECTOR");
        for (i, (flow_type, sector)) in self.columns.into_iter().enumerate() {
            types[Self::FIRST_DATA_COL + i] = CellValue::from(flow_type.as_str());
            sectors[Self::FIRST_DATA_COL + i] = CellValue::from(sector.as_str());
        }
        rows[Self::TYPE_ROW] = types;
        rows[Self::SECTOR_ROW] = sectors;
        rows.extend(self.rows);
        Sheet::from_rows(rows)
    }
}
