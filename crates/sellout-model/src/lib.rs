pub mod field;
pub mod format;
pub mod mapping;
pub mod summary;
pub mod table;

pub use field::MappedField;
pub use format::{format_decimal, format_decimal_with};
pub use mapping::{ColumnHint, ColumnMapping};
pub use summary::{AggregationResult, ClassSummary, GroupResult, SizeMetrics};
pub use table::{CellValue, SalesRecord, SourceRow, SourceTable};
