//! Form state of the generator.
//!
//! [`GeneratorState`] is a plain snapshot: it holds no DOM handles and no
//! browser resources, so every transition in `reducer` can be tested natively.
//! The object URL of the current preview lives in the component instead.

use super::messages::LineItemField;
use common::model::document::{DocumentType, FieldSpec};
use common::model::fields::StructuredFields;
use common::model::invoice::{invoice_total, is_valid_amount, LineItem};
use common::requests::GenerateRequest;
use std::collections::BTreeMap;

/// Whether a generation request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Busy,
}

/// Numeric cells of one line item exactly as typed.
///
/// Partial input such as `12.` or an emptied cell has to survive the next
/// render, so the text shown in the editor is kept apart from the parsed
/// amounts in [`LineItem`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AmountDraft {
    pub quantity: String,
    pub unit_price: String,
}

impl From<&LineItem> for AmountDraft {
    fn from(item: &LineItem) -> Self {
        Self {
            quantity: item.quantity.to_string(),
            unit_price: item.unit_price.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneratorState {
    pub document_type: DocumentType,

    /// Scalar field values keyed by field name. Values typed for another
    /// document type stay here when the type changes; only the active subset
    /// is ever sent.
    pub values: BTreeMap<String, String>,

    pub invoice_items: Vec<LineItem>,

    /// One entry per row of `invoice_items`.
    pub amount_drafts: Vec<AmountDraft>,

    /// Free text describing the document.
    pub prompt: String,

    pub phase: Phase,

    /// LaTeX source of the document currently shown in the preview.
    pub latex: Option<String>,

    /// Message of the last failed submission, cleared by the next one.
    pub last_error: Option<String>,

    pub dark: bool,
    pub show_latex: bool,
}

impl GeneratorState {
    /// Fresh form with every `date` field defaulting to `today` (`YYYY-MM-DD`).
    pub fn new(today: impl Into<String>) -> Self {
        let mut values = BTreeMap::new();
        values.insert("date".to_string(), today.into());
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Busy
    }

    /// Exactly the field subset of the selected type, in display order.
    pub fn active_fields(&self) -> &'static [FieldSpec] {
        self.document_type.fields()
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn shows_line_items(&self) -> bool {
        self.document_type.has_line_items()
    }

    /// Text of one line-item cell as the editor shows it.
    pub fn cell_text(&self, index: usize, field: LineItemField) -> String {
        let Some(item) = self.invoice_items.get(index) else {
            return String::new();
        };
        let draft = self.amount_drafts.get(index);
        match field {
            LineItemField::Description => item.description.clone(),
            LineItemField::Quantity => draft
                .map(|d| d.quantity.clone())
                .unwrap_or_else(|| item.quantity.to_string()),
            LineItemField::UnitPrice => draft
                .map(|d| d.unit_price.clone())
                .unwrap_or_else(|| item.unit_price.to_string()),
        }
    }

    /// Makes `amount_drafts` match `invoice_items` row for row.
    pub fn align_drafts(&mut self) {
        let missing: Vec<AmountDraft> = self
            .invoice_items
            .iter()
            .skip(self.amount_drafts.len())
            .map(AmountDraft::from)
            .collect();
        self.amount_drafts.extend(missing);
        self.amount_drafts.truncate(self.invoice_items.len());
    }

    pub fn invoice_total(&self) -> f64 {
        invoice_total(&self.invoice_items)
    }

    /// Builds the request body from the active subset only.
    pub fn to_request(&self) -> GenerateRequest {
        let values = self
            .active_fields()
            .iter()
            .filter_map(|spec| {
                self.values
                    .get(spec.name)
                    .map(|value| (spec.name.to_string(), value.clone()))
            })
            .collect();
        let invoice_items = if self.shows_line_items() {
            self.invoice_items.clone()
        } else {
            Vec::new()
        };

        GenerateRequest::new(
            self.document_type,
            self.prompt.clone(),
            StructuredFields {
                invoice_items,
                values,
            },
        )
    }
}

/// Parses a quantity or price typed by the user.
///
/// Anything that is not a number between `0` and `MAX_AMOUNT` becomes `0`.
pub fn coerce_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| is_valid_amount(*value))
        .unwrap_or(0.0)
}
