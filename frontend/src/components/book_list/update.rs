use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::{BookListComponent, Command};

pub fn update(component: &mut BookListComponent, ctx: &Context<BookListComponent>, msg: Msg) -> bool {
    if let Some(command) = component.reduce(msg) {
        run(ctx, command);
    }
    true
}

pub fn run(ctx: &Context<BookListComponent>, command: Command) {
    match command {
        Command::Fetch => {
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::books::list_all().await;
                if let Ok(books) = &result {
                    gloo_console::log!(format!("Fetched {} books", books.len()));
                }
                link.send_message(Msg::Loaded(result));
            });
        }
    }
}
