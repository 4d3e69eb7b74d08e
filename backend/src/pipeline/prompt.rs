use common::model::invoice::invoice_total;
use common::requests::DocumentRequest;
use std::fmt::Write;

pub const SYSTEM_INSTRUCTION: &str =
    "You output only valid LaTeX. No markdown fences. No explanations. Keep the document self-contained.";

/// The instruction pair sent to the chat-completion service.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    pub fn len(&self) -> usize {
        self.system.len() + self.user.len()
    }
}

/// Builds the prompt for one request.
///
/// Structured fields are written as a `Details:` block between the document
/// type line and the user's free text. Invoices also list every line item and
/// the computed total. The block is left out when nothing was filled in.
pub fn build(request: &DocumentRequest) -> Prompt {
    let label = request.document_type.label();
    let mut user = format!("Document type: {label}\nGenerate a professional {label}.\n");

    let details = details_block(request);
    if !details.is_empty() {
        user.push('\n');
        user.push_str(&details);
    }

    user.push_str("\nUser text:\n");
    user.push_str(&request.free_text);

    Prompt {
        system: SYSTEM_INSTRUCTION.to_string(),
        user,
    }
}

fn details_block(request: &DocumentRequest) -> String {
    let mut block = String::new();
    let doc_type = request.document_type;

    for (spec, value) in request.fields.filled(doc_type) {
        let _ = writeln!(block, "- {}: {}", spec.label, value);
    }

    let items = &request.fields.invoice_items;
    if doc_type.has_line_items() && !items.is_empty() {
        block.push_str("Line items:\n");
        for item in items {
            let description = match item.description.trim() {
                "" => "(no description)",
                text => text,
            };
            let _ = writeln!(
                block,
                "- {description}: {} x {:.2} = {:.2}",
                item.quantity,
                item.unit_price,
                item.line_total()
            );
        }
        let _ = writeln!(block, "Total: {:.2}", invoice_total(items));
    }

    if block.is_empty() {
        block
    } else {
        format!("Details:\n{block}")
    }
}
