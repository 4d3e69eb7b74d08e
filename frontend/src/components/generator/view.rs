//! View rendering for the generator component.
//!
//! Left pane: document type, the structured fields of that type on a two
//! column grid, the invoice line-item editor with its live total, the free
//! text and the submit button. Right pane: `preview::preview_pane`.

use super::helpers::format_amount;
use super::messages::{LineItemField, Msg};
use super::preview::{preview_pane, progress_overlay};
use super::GeneratorComponent;
use crate::field_grid::FieldGrid;
use common::model::document::{DocumentType, FieldKind, FieldSpec};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

pub fn view(component: &GeneratorComponent, ctx: &Context<GeneratorComponent>) -> Html {
    let link = ctx.link();
    let state = &component.state;

    html! {
        <div class={classes!("app", state.dark.then_some("dark"))}>
            { build_header(component, link) }
            {
                if let Some(message) = &state.last_error {
                    html! { <div class="error-banner" role="alert">{ message.clone() }</div> }
                } else {
                    html! {}
                }
            }
            <main class="layout">
                { build_form(component, link) }
                { preview_pane(component, link) }
            </main>
            { if state.is_busy() { progress_overlay() } else { html! {} } }
        </div>
    }
}

fn build_header(component: &GeneratorComponent, link: &Scope<GeneratorComponent>) -> Html {
    let label = if component.state.dark { "Light mode" } else { "Dark mode" };
    html! {
        <header class="app-header">
            <h1>{ "PDF Wizard" }</h1>
            <button class="btn secondary" onclick={link.callback(|_| Msg::ToggleTheme)}>
                { label }
            </button>
        </header>
    }
}

fn build_form(component: &GeneratorComponent, link: &Scope<GeneratorComponent>) -> Html {
    let state = &component.state;
    let busy = state.is_busy();

    let on_type = link.batch_callback(|e: Event| {
        let tag = e.target_unchecked_into::<HtmlSelectElement>().value();
        tag.parse::<DocumentType>().ok().map(Msg::SelectDocumentType)
    });
    let on_prompt = link.callback(|e: InputEvent| {
        Msg::UpdatePrompt(e.target_unchecked_into::<HtmlTextAreaElement>().value())
    });
    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="panel form-panel" onsubmit={on_submit}>
            <label class="field">
                <span>{ "Document type" }</span>
                <select onchange={on_type} disabled={busy}>
                    {
                        for DocumentType::ALL.into_iter().map(|doc_type| html! {
                            <option
                                value={doc_type.tag()}
                                selected={doc_type == state.document_type}
                            >
                                { doc_type.label() }
                            </option>
                        })
                    }
                </select>
            </label>

            <FieldGrid columns={2}>
                { for state.active_fields().iter().map(|spec| build_field(component, link, spec)) }
            </FieldGrid>

            { if state.shows_line_items() { build_line_items(component, link) } else { html! {} } }

            <label class="field">
                <span>{ "Describe your document" }</span>
                <textarea
                    rows="8"
                    placeholder="What should the document say?"
                    value={state.prompt.clone()}
                    oninput={on_prompt}
                />
            </label>

            <button class="btn primary" type="submit" disabled={busy}>
                { if busy { "Generating..." } else { "Generate PDF" } }
            </button>
        </form>
    }
}

fn build_field(
    component: &GeneratorComponent,
    link: &Scope<GeneratorComponent>,
    spec: &'static FieldSpec,
) -> Html {
    let name = spec.name;
    let input_type = match spec.kind {
        FieldKind::Text => "text",
        FieldKind::Date => "date",
    };
    let oninput = link.callback(move |e: InputEvent| {
        Msg::UpdateField(
            name.to_string(),
            e.target_unchecked_into::<HtmlInputElement>().value(),
        )
    });

    html! {
        <label class="field" key={name}>
            <span>{ spec.label }</span>
            <input
                type={input_type}
                name={name}
                value={component.state.value(name).to_string()}
                {oninput}
            />
        </label>
    }
}

fn build_line_items(component: &GeneratorComponent, link: &Scope<GeneratorComponent>) -> Html {
    let state = &component.state;

    let on_cell = |index: usize, field: LineItemField| {
        link.callback(move |e: InputEvent| {
            Msg::UpdateLineItem(
                index,
                field,
                e.target_unchecked_into::<HtmlInputElement>().value(),
            )
        })
    };

    html! {
        <div class="line-items">
            <table>
                <thead>
                    <tr>
                        <th>{ "Description" }</th>
                        <th>{ "Qty" }</th>
                        <th>{ "Unit price" }</th>
                        <th>{ "Amount" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {
                        for state.invoice_items.iter().enumerate().map(|(index, item)| html! {
                            <tr>
                                <td>
                                    <input
                                        type="text"
                                        value={item.description.clone()}
                                        oninput={on_cell(index, LineItemField::Description)}
                                    />
                                </td>
                                <td>
                                    <input
                                        type="text"
                                        inputmode="decimal"
                                        value={state.cell_text(index, LineItemField::Quantity)}
                                        oninput={on_cell(index, LineItemField::Quantity)}
                                    />
                                </td>
                                <td>
                                    <input
                                        type="text"
                                        inputmode="decimal"
                                        value={state.cell_text(index, LineItemField::UnitPrice)}
                                        oninput={on_cell(index, LineItemField::UnitPrice)}
                                    />
                                </td>
                                <td class="amount">{ format_amount(item.line_total()) }</td>
                                <td>
                                    <button
                                        type="button"
                                        class="btn link"
                                        title="Remove line"
                                        onclick={link.callback(move |_| Msg::RemoveLineItem(index))}
                                    >
                                        { "✕" }
                                    </button>
                                </td>
                            </tr>
                        })
                    }
                </tbody>
            </table>
            <div class="line-items-footer">
                <button type="button" class="btn secondary" onclick={link.callback(|_| Msg::AddLineItem)}>
                    { "Add line" }
                </button>
                <strong>{ format!("Total: {}", format_amount(state.invoice_total())) }</strong>
            </div>
        </div>
    }
}
