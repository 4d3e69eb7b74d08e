//! Update function for the generator component.
//!
//! Elm-style: `update` runs the pure `reducer::reduce` on the current state
//! and then carries out the returned effect.
//!
//! Effects
//! - `Dispatch`: POST the form to the backend; the answer comes back as
//!   `GenerationSucceeded` or `GenerationFailed`.
//! - `ReplacePreview`: revoke the previous object URL and create one for the
//!   new PDF.
//! - `ReportFailure`: toast plus a console diagnostic. The old preview stays.

use gloo_console::{error, log};
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::GenerateRequest;
use common::responses::{ErrorResponse, GenerateResponse};

use super::helpers::{describe_failure, pdf_object_url, revoke_object_url, show_toast};
use super::messages::Msg;
use super::reducer::{reduce, Effect};
use super::GeneratorComponent;

const GENERATE_URL: &str = "/api/generate";

pub fn update(component: &mut GeneratorComponent, ctx: &Context<GeneratorComponent>, msg: Msg) -> bool {
    let (state, effect) = reduce(std::mem::take(&mut component.state), msg);
    component.state = state;
    if let Some(effect) = effect {
        run_effect(component, ctx, effect);
    }
    true
}

fn run_effect(component: &mut GeneratorComponent, ctx: &Context<GeneratorComponent>, effect: Effect) {
    match effect {
        Effect::Dispatch(request) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(post_generate(&request).await);
            });
        }
        Effect::ReplacePreview(document) => {
            if let Some(previous) = component.preview_url.take() {
                revoke_object_url(&previous);
            }
            match pdf_object_url(&document) {
                Ok(url) => {
                    log!(format!("preview ready ({} bytes)", document.len()));
                    component.preview_url = Some(url);
                }
                Err(err) => {
                    error!("could not create the preview blob", err);
                    show_toast("The PDF was generated but cannot be previewed.", true);
                }
            }
        }
        Effect::ReportFailure(message) => {
            error!(format!("generation failed: {}", message));
            show_toast(&message, true);
        }
    }
}

async fn post_generate(request: &GenerateRequest) -> Msg {
    let pending = match Request::post(GENERATE_URL).json(request) {
        Ok(pending) => pending,
        Err(err) => return Msg::GenerationFailed(format!("Could not encode the request: {}", err)),
    };

    match pending.send().await {
        Ok(response) if response.ok() => match response.json::<GenerateResponse>().await {
            Ok(body) => match body.document() {
                Ok(document) => Msg::GenerationSucceeded {
                    latex: body.latex,
                    document,
                },
                Err(err) => Msg::GenerationFailed(format!("The server sent an unreadable PDF: {}", err)),
            },
            Err(err) => Msg::GenerationFailed(format!("Unexpected answer from the server: {}", err)),
        },
        Ok(response) => {
            let status = response.status();
            match response.json::<ErrorResponse>().await {
                Ok(body) => Msg::GenerationFailed(describe_failure(&body)),
                Err(_) => Msg::GenerationFailed(format!("Generation failed (HTTP {})", status)),
            }
        }
        Err(err) => Msg::GenerationFailed(format!("Could not reach the server: {}", err)),
    }
}
