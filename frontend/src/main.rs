use crate::app::App;

mod app;
mod components;
mod field_grid;

fn main() {
    yew::Renderer::<App>::new().render();
}
