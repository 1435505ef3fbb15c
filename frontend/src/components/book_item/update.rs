use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::helpers::{confirm, show_toast};

use super::messages::Msg;
use super::state::{BookItemComponent, Command};

pub fn update(component: &mut BookItemComponent, ctx: &Context<BookItemComponent>, msg: Msg) -> bool {
    let Some(command) = component.reduce(msg) else {
        return true;
    };

    match command {
        Command::Update(book_id, fields) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::books::update(book_id, &fields).await;
                link.send_message(Msg::Saved(result));
            });
        }
        Command::ConfirmDelete { prompt } => {
            if confirm(&prompt) {
                ctx.link().send_message(Msg::DeleteConfirmed);
            }
        }
        Command::Delete(book_id) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::books::delete(book_id).await;
                link.send_message(Msg::Deleted(result));
            });
        }
        Command::NotifyUpdated(book) => {
            gloo_console::log!(format!("Book updated: {}", book.id));
            ctx.props().on_book_updated.emit(book);
        }
        Command::NotifyDeleted(book_id) => {
            gloo_console::log!(format!("Book deleted: {}", book_id));
            ctx.props().on_book_deleted.emit(book_id);
        }
        Command::ShowFailure(message) => show_toast(message),
    }
    true
}
