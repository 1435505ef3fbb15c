use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::{BookFormComponent, Command};

/// Applies `msg` to the form and runs the side effect it asks for.
pub fn update(component: &mut BookFormComponent, ctx: &Context<BookFormComponent>, msg: Msg) -> bool {
    match component.reduce(msg) {
        Some(Command::Create(new_book)) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::books::create(&new_book).await;
                link.send_message(Msg::Created(result));
            });
        }
        Some(Command::NotifyAdded(book)) => {
            gloo_console::log!(format!("Book created: {} ({})", book.id, book.title));
            ctx.props().on_book_added.emit(book);
        }
        None => {}
    }
    true
}
