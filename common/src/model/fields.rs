use crate::model::document::{DocumentType, FieldSpec};
use crate::model::invoice::LineItem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The structured part of a generation request.
///
/// On the wire this is a flat JSON object of string values keyed by field
/// name, plus an optional `invoice_items` array for invoices:
///
/// ```json
/// { "seller": "ACME", "client": "Bob", "invoice_items": [{ "desc": "x", "qty": 1, "price": 2 }] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredFields {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invoice_items: Vec<LineItem>,
    #[serde(flatten)]
    pub values: BTreeMap<String, String>,
}

impl StructuredFields {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Fields of `doc_type` that carry a non-blank value, in the type's display order.
    pub fn filled<'a>(
        &'a self,
        doc_type: DocumentType,
    ) -> impl Iterator<Item = (&'static FieldSpec, &'a str)> + 'a {
        doc_type.fields().iter().filter_map(move |spec| {
            self.get(spec.name)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(|value| (spec, value))
        })
    }
}
