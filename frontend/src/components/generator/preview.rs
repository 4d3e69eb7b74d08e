use super::messages::Msg;
use super::GeneratorComponent;
use yew::html::Scope;
use yew::prelude::*;

/// Right-hand pane: the compiled PDF, a download link and the LaTeX source.
pub fn preview_pane(component: &GeneratorComponent, link: &Scope<GeneratorComponent>) -> Html {
    let state = &component.state;

    html! {
        <section class="panel preview-panel">
            <div class="preview-header">
                <h2>{ "Preview" }</h2>
                {
                    if let Some(url) = &component.preview_url {
                        html! {
                            <a class="btn secondary" href={url.clone()} download="document.pdf">
                                { "Download PDF" }
                            </a>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <div style="position:relative;width:100%;height:70vh;">
                {
                    if let Some(url) = &component.preview_url {
                        html! {
                            <iframe
                                title="PDF preview"
                                src={url.clone()}
                                style="width:100%;height:100%;border:none;background:#fff;border-radius:4px;"
                            />
                        }
                    } else {
                        html! {
                            <div class="preview-empty">
                                { "Your PDF will appear here." }
                            </div>
                        }
                    }
                }
            </div>

            {
                if let Some(latex) = &state.latex {
                    html! {
                        <div class="latex-source">
                            <button class="btn link" onclick={link.callback(|_| Msg::ToggleLatex)}>
                                { if state.show_latex { "Hide LaTeX" } else { "Show LaTeX" } }
                            </button>
                            {
                                if state.show_latex {
                                    html! { <pre>{ latex.clone() }</pre> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

/// Full-screen spinner shown while a request is in flight.
pub fn progress_overlay() -> Html {
    html! {
        <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.55);z-index:9999;display:flex;align-items:center;justify-content:center;">
            <div style="background:#fff;padding:24px 32px;border-radius:8px;display:flex;flex-direction:column;align-items:center;">
                <div class="spin" style="width:48px;height:48px;border:6px solid #ccc;border-top-color:#1976d2;border-radius:50%;animation:spin 1s linear infinite;"></div>
                <div style="margin-top:12px;color:#000;">{ "Generating your PDF..." }</div>
            </div>
            <style>{ "@keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }" }</style>
        </div>
    }
}
