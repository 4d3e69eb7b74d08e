use common::model::document::DocumentType;

/// Column of an invoice line item being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemField {
    Description,
    Quantity,
    UnitPrice,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    SelectDocumentType(DocumentType),
    UpdateField(String, String),
    UpdatePrompt(String),
    AddLineItem,
    /// Raw input text; numeric columns are coerced by the reducer.
    UpdateLineItem(usize, LineItemField, String),
    RemoveLineItem(usize),
    Submit,
    GenerationSucceeded { latex: String, document: Vec<u8> },
    GenerationFailed(String),
    ToggleTheme,
    ToggleLatex,
}
