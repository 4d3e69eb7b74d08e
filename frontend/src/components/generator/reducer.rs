//! Pure transition function of the generator form.
//!
//! `reduce` never touches the browser. Anything that has to happen outside
//! the state (the HTTP call, swapping the preview blob, toasts) is returned
//! as an [`Effect`] and carried out by `update::run_effect`.

use super::messages::{LineItemField, Msg};
use super::state::{coerce_amount, AmountDraft, GeneratorState, Phase};
use common::model::invoice::LineItem;
use common::requests::GenerateRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send the request to the backend.
    Dispatch(GenerateRequest),
    /// Show these PDF bytes, releasing the previous preview.
    ReplacePreview(Vec<u8>),
    /// Tell the user and log the diagnostic.
    ReportFailure(String),
}

pub fn reduce(mut state: GeneratorState, msg: Msg) -> (GeneratorState, Option<Effect>) {
    let effect = match msg {
        Msg::SelectDocumentType(document_type) => {
            state.document_type = document_type;
            None
        }
        Msg::UpdateField(name, value) => {
            state.values.insert(name, value);
            None
        }
        Msg::UpdatePrompt(prompt) => {
            state.prompt = prompt;
            None
        }
        Msg::AddLineItem => {
            state.align_drafts();
            let item = LineItem::default();
            state.amount_drafts.push(AmountDraft::from(&item));
            state.invoice_items.push(item);
            None
        }
        Msg::UpdateLineItem(index, field, raw) => {
            state.align_drafts();
            if let (Some(item), Some(draft)) = (
                state.invoice_items.get_mut(index),
                state.amount_drafts.get_mut(index),
            ) {
                match field {
                    LineItemField::Description => item.description = raw,
                    LineItemField::Quantity => {
                        item.quantity = coerce_amount(&raw);
                        draft.quantity = raw;
                    }
                    LineItemField::UnitPrice => {
                        item.unit_price = coerce_amount(&raw);
                        draft.unit_price = raw;
                    }
                }
            }
            None
        }
        Msg::RemoveLineItem(index) => {
            state.align_drafts();
            if index < state.invoice_items.len() {
                state.invoice_items.remove(index);
                state.amount_drafts.remove(index);
            }
            None
        }
        Msg::Submit => match state.phase {
            Phase::Busy => None,
            Phase::Idle => {
                state.phase = Phase::Busy;
                state.last_error = None;
                Some(Effect::Dispatch(state.to_request()))
            }
        },
        Msg::GenerationSucceeded { latex, document } => {
            state.phase = Phase::Idle;
            state.latex = Some(latex);
            Some(Effect::ReplacePreview(document))
        }
        Msg::GenerationFailed(message) => {
            state.phase = Phase::Idle;
            state.last_error = Some(message.clone());
            Some(Effect::ReportFailure(message))
        }
        Msg::ToggleTheme => {
            state.dark = !state.dark;
            None
        }
        Msg::ToggleLatex => {
            state.show_latex = !state.show_latex;
            None
        }
    };
    (state, effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::document::DocumentType;
    use pretty_assertions::assert_eq;

    fn apply(state: GeneratorState, msgs: Vec<Msg>) -> (GeneratorState, Vec<Effect>) {
        msgs.into_iter().fold((state, Vec::new()), |(state, mut effects), msg| {
            let (next, effect) = reduce(state, msg);
            effects.extend(effect);
            (next, effects)
        })
    }

    fn names(state: &GeneratorState) -> Vec<&'static str> {
        state.active_fields().iter().map(|f| f.name).collect()
    }

    #[test]
    fn active_fields_follow_the_last_selection() {
        let (state, _) = apply(
            GeneratorState::new("2024-01-01"),
            vec![
                Msg::SelectDocumentType(DocumentType::Invoice),
                Msg::UpdateField("seller".into(), "ACME".into()),
                Msg::SelectDocumentType(DocumentType::Custom),
                Msg::SelectDocumentType(DocumentType::Letter),
            ],
        );
        assert_eq!(
            names(&state),
            vec!["your_name", "recipient_name", "subject_or_role", "date"]
        );
        // Hidden values are kept but not sent.
        assert_eq!(state.value("seller"), "ACME");
        assert_eq!(state.to_request().fields.get("seller"), None);

        for doc_type in DocumentType::ALL {
            let (state, _) = reduce(state.clone(), Msg::SelectDocumentType(doc_type));
            assert_eq!(state.active_fields(), doc_type.fields());
        }
    }

    #[test]
    fn total_tracks_adds_and_removes() {
        let (state, _) = apply(
            GeneratorState::default(),
            vec![
                Msg::AddLineItem,
                Msg::UpdateLineItem(0, LineItemField::Quantity, "2".into()),
                Msg::UpdateLineItem(0, LineItemField::UnitPrice, "10".into()),
                Msg::AddLineItem,
                Msg::UpdateLineItem(1, LineItemField::UnitPrice, "5".into()),
            ],
        );
        assert_eq!(state.invoice_total(), 25.0);

        let (state, _) = reduce(state, Msg::RemoveLineItem(0));
        assert_eq!(state.invoice_total(), 5.0);

        let (state, _) = reduce(state, Msg::RemoveLineItem(0));
        assert_eq!(state.invoice_total(), 0.0);
        assert!(state.invoice_items.is_empty());
    }

    #[test]
    fn new_line_item_is_one_unit_at_zero() {
        let (state, _) = reduce(GeneratorState::default(), Msg::AddLineItem);
        assert_eq!(state.invoice_items, vec![LineItem::new("", 1.0, 0.0)]);
    }

    #[test]
    fn bad_numbers_become_zero_and_bad_indices_are_ignored() {
        let (state, _) = apply(
            GeneratorState::default(),
            vec![
                Msg::AddLineItem,
                Msg::UpdateLineItem(0, LineItemField::Quantity, "-4".into()),
                Msg::UpdateLineItem(0, LineItemField::UnitPrice, "ten".into()),
                Msg::UpdateLineItem(0, LineItemField::Description, "Hosting".into()),
                Msg::UpdateLineItem(7, LineItemField::Quantity, "3".into()),
                Msg::RemoveLineItem(7),
            ],
        );
        assert_eq!(state.invoice_items, vec![LineItem::new("Hosting", 0.0, 0.0)]);
    }

    #[test]
    fn partial_decimal_input_is_kept_while_typing() {
        let (state, _) = apply(
            GeneratorState::default(),
            vec![
                Msg::AddLineItem,
                Msg::UpdateLineItem(0, LineItemField::UnitPrice, "12.".into()),
            ],
        );
        assert_eq!(state.cell_text(0, LineItemField::UnitPrice), "12.");
        assert_eq!(state.invoice_items[0].unit_price, 12.0);

        let (state, _) = reduce(
            state,
            Msg::UpdateLineItem(0, LineItemField::UnitPrice, "12.5".into()),
        );
        assert_eq!(state.cell_text(0, LineItemField::UnitPrice), "12.5");
        assert_eq!(state.invoice_items[0].unit_price, 12.5);
        assert_eq!(state.invoice_total(), 12.5);
    }

    #[test]
    fn emptied_cell_stays_empty_and_counts_as_zero() {
        let (state, _) = apply(
            GeneratorState::default(),
            vec![
                Msg::AddLineItem,
                Msg::UpdateLineItem(0, LineItemField::Quantity, "".into()),
            ],
        );
        assert_eq!(state.cell_text(0, LineItemField::Quantity), "");
        assert_eq!(state.invoice_items[0].quantity, 0.0);

        let (state, _) = reduce(
            state,
            Msg::UpdateLineItem(0, LineItemField::Quantity, "3".into()),
        );
        assert_eq!(state.cell_text(0, LineItemField::Quantity), "3");
        assert_eq!(state.invoice_items[0].quantity, 3.0);
    }

    #[test]
    fn removing_a_row_removes_its_typed_text() {
        let (state, _) = apply(
            GeneratorState::default(),
            vec![
                Msg::AddLineItem,
                Msg::AddLineItem,
                Msg::UpdateLineItem(0, LineItemField::UnitPrice, "7.".into()),
                Msg::UpdateLineItem(1, LineItemField::UnitPrice, "19.99".into()),
                Msg::RemoveLineItem(0),
            ],
        );
        assert_eq!(state.amount_drafts.len(), 1);
        assert_eq!(state.cell_text(0, LineItemField::UnitPrice), "19.99");
        assert_eq!(state.cell_text(0, LineItemField::Quantity), "1");
    }

    #[test]
    fn submit_while_busy_dispatches_nothing() {
        let state = GeneratorState::new("2024-01-01");
        let (state, first) = reduce(state, Msg::Submit);
        assert!(matches!(first, Some(Effect::Dispatch(_))));
        assert!(state.is_busy());

        let (state, second) = reduce(state, Msg::Submit);
        assert_eq!(second, None);
        assert!(state.is_busy());
    }

    #[test]
    fn dispatch_carries_the_form() {
        let (_, effects) = apply(
            GeneratorState::new("2024-01-01"),
            vec![
                Msg::SelectDocumentType(DocumentType::Cv),
                Msg::UpdateField("your_name".into(), "Ada".into()),
                Msg::UpdatePrompt("backend engineer".into()),
                Msg::Submit,
            ],
        );
        let Some(Effect::Dispatch(request)) = effects.into_iter().next() else {
            panic!("expected a dispatch");
        };
        assert_eq!(request.doc_type, "cv");
        assert_eq!(request.prompt, "backend engineer");
        assert_eq!(request.fields.get("your_name"), Some("Ada"));
    }

    #[test]
    fn success_replaces_the_preview() {
        let (state, _) = reduce(GeneratorState::default(), Msg::Submit);
        let (state, effect) = reduce(
            state,
            Msg::GenerationSucceeded {
                latex: "\\documentclass{letter}".into(),
                document: b"%PDF-1.4".to_vec(),
            },
        );
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.latex.as_deref(), Some("\\documentclass{letter}"));
        assert_eq!(effect, Some(Effect::ReplacePreview(b"%PDF-1.4".to_vec())));
    }

    #[test]
    fn failure_keeps_the_previous_preview_and_is_visible() {
        let mut state = GeneratorState::default();
        state.latex = Some("old".into());

        let (state, _) = reduce(state, Msg::Submit);
        let (state, effect) = reduce(state, Msg::GenerationFailed("compile failed".into()));
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.latex.as_deref(), Some("old"));
        assert_eq!(state.last_error.as_deref(), Some("compile failed"));
        assert_eq!(effect, Some(Effect::ReportFailure("compile failed".into())));

        let (state, _) = reduce(state, Msg::Submit);
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn toggles() {
        let (state, _) = apply(
            GeneratorState::default(),
            vec![Msg::ToggleTheme, Msg::ToggleLatex, Msg::ToggleLatex],
        );
        assert!(state.dark);
        assert!(!state.show_latex);
    }
}
