//! The six semantic fields a source table must be mapped onto.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic role of a source column in the sell-out data model.
///
/// Every aggregation run needs exactly one source column bound to each
/// field; see [`crate::ColumnMapping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MappedField {
    /// Top-level grouping key, first half.
    Gender,
    /// Top-level grouping key, second half.
    Line,
    /// Merchandising class nested within a (Gender, Line) group.
    MerchandisingClass,
    /// Size label of the SKU row.
    SizeCode,
    /// Ordered (demand) quantity.
    OrderQty,
    /// Sold quantity.
    SoldQty,
}

impl MappedField {
    /// All fields, in canonical order.
    pub const ALL: [MappedField; 6] = [
        MappedField::Gender,
        MappedField::Line,
        MappedField::MerchandisingClass,
        MappedField::SizeCode,
        MappedField::OrderQty,
        MappedField::SoldQty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::Line => "Line",
            Self::MerchandisingClass => "MerchandisingClass",
            Self::SizeCode => "SizeCode",
            Self::OrderQty => "OrderQty",
            Self::SoldQty => "SoldQty",
        }
    }

    /// True for the two quantity fields, which expect numeric columns.
    pub fn is_quantity(&self) -> bool {
        matches!(self, Self::OrderQty | Self::SoldQty)
    }
}

impl fmt::Display for MappedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
