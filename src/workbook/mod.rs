//! Spreadsheet access
//!
//! Decoding is delegated to calamine; the rest of the crate only sees the
//! [`Sheet`] grid and the [`WorkbookSource`] trait.

pub mod sheet;
pub mod source;

pub use sheet::{CellValue, Sheet, SheetBuilder, Workbook};
pub use source::{
    FileWorkbookSource, MemoryWorkbookSource, WorkbookFuture, WorkbookSource, read_workbook,
};
