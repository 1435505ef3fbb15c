//! List view: owns the in-memory collection of books.
//!
//! Fetches on first render and again whenever the `refresh_key` prop changes
//! value. Updates and deletions reported by child items are patched into the
//! collection directly, without going back to the backend.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::BookListProps;
pub use state::{BookListComponent, Command, ListDisplay, LOAD_FAILED_MESSAGE};

impl Component for BookListComponent {
    type Message = Msg;
    type Properties = BookListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BookListComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if let Some(command) = self.refresh(old_props.refresh_key, ctx.props().refresh_key) {
            update::run(ctx, command);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Fetch);
        }
    }
}
