use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct FieldGridProps {
    pub columns: usize,
    pub children: Children,
}

/// Lays its children out on an even grid, used for the structured fields.
pub struct FieldGrid;

impl Component for FieldGrid {
    type Message = ();
    type Properties = FieldGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FieldGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, minmax(0, 1fr));
             gap: 12px;
             margin-bottom: 16px;",
            props.columns.max(1)
        );

        html! {
            <div style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
