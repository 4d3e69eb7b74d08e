use serde::{Deserialize, Serialize};

/// One row of an invoice.
///
/// The wire names (`desc`, `qty`, `price`) are the ones the browser form has
/// always sent; the longer names are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "desc", alias = "description", default)]
    pub description: String,
    #[serde(rename = "qty", alias = "quantity", default)]
    pub quantity: f64,
    #[serde(rename = "price", alias = "unit_price", alias = "unitPrice", default)]
    pub unit_price: f64,
}

impl Default for LineItem {
    /// A freshly added row: one unit at zero price.
    fn default() -> Self {
        Self {
            description: String::new(),
            quantity: 1.0,
            unit_price: 0.0,
        }
    }
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Sum of quantity × unit price over all rows. Always recomputed, never stored.
pub fn invoice_total(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::line_total).sum()
}

/// Largest quantity or unit price accepted on a line item.
pub const MAX_AMOUNT: f64 = 1e9;

/// `true` when an amount may appear on an invoice: not negative and at most
/// [`MAX_AMOUNT`]. Rejects NaN and infinities.
pub fn is_valid_amount(value: f64) -> bool {
    (0.0..=MAX_AMOUNT).contains(&value)
}
