//! Document generator: root module wiring the Yew `Component` implementation
//! with submodules for state, the reducer, update glue, view rendering and
//! helpers.
//!
//! Responsibilities
//! - Own the current `GeneratorState` snapshot and the object URL of the
//!   PDF preview.
//! - Delegate every message to `update::update` and rendering to `view::view`.
//! - Release the preview blob when the component goes away.

use yew::prelude::*;

mod helpers;
mod messages;
mod preview;
mod reducer;
mod state;
mod update;
mod view;

use helpers::{revoke_object_url, today_iso};
pub use messages::Msg;
use state::GeneratorState;

pub struct GeneratorComponent {
    pub state: GeneratorState,

    /// Object URL of the PDF shown in the preview `<iframe>`, if any.
    pub preview_url: Option<String>,
}

impl Component for GeneratorComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: GeneratorState::new(today_iso()),
            preview_url: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(url) = self.preview_url.take() {
            revoke_object_url(&url);
        }
    }
}
