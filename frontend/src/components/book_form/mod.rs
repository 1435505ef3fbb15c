//! Creation form: wires the Yew `Component` implementation to the state,
//! update and view submodules.
//!
//! On a successful create the form clears itself and hands the new book to
//! the parent through `on_book_added`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::BookFormProps;
pub use state::{BookFormComponent, Command, ADD_FAILED_MESSAGE};

impl Component for BookFormComponent {
    type Message = Msg;
    type Properties = BookFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BookFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
