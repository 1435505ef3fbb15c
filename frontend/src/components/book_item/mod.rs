//! Item view: one book, shown read-only or as an inline edit form.
//!
//! Saves and deletions go to the backend from here; the outcome is reported
//! to the parent list through `on_book_updated` / `on_book_deleted`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::BookItemProps;
pub use state::{BookItemComponent, Command, Mode, DELETE_FAILED_MESSAGE, UPDATE_FAILED_MESSAGE};

impl Component for BookItemComponent {
    type Message = Msg;
    type Properties = BookItemProps;

    fn create(ctx: &Context<Self>) -> Self {
        BookItemComponent::new(&ctx.props().book)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.receive(&ctx.props().book);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
