//! Per-field header synonyms, as seen in real source files (English and
//! Italian merchandising exports).

use sellout_model::MappedField;

pub(crate) fn synonyms(field: MappedField) -> &'static [&'static str] {
    match field {
        MappedField::Gender => &["Gender", "Genere", "Sesso"],
        MappedField::Line => &["Line", "Linea"],
        MappedField::MerchandisingClass => {
            &["Merchandising Class", "Merch Class", "Class", "Classe"]
        }
        MappedField::SizeCode => &["Size Code", "Size", "Taglia", "Cod Taglia"],
        MappedField::OrderQty => &[
            "ORDER QTY",
            "Order Quantity",
            "Qty Ordered",
            "Quantità Ordinata",
        ],
        MappedField::SoldQty => &[
            "SOLD QTY",
            "Sold Quantity",
            "Qty Sold",
            "Quantità Venduta",
        ],
    }
}
