use common::model::book::Book;
use yew::{html, Component, Context, Html};

use crate::components::book_form::BookFormComponent;
use crate::components::book_list::BookListComponent;

pub enum Msg {
    BookAdded(Book),
}

/// Page root: the creation form above the list.
///
/// A successful create bumps `refresh_key`, which the list compares by value
/// to decide whether to refetch.
pub struct App {
    refresh_key: u64,
}

impl App {
    fn bump(&mut self) {
        self.refresh_key = self.refresh_key.wrapping_add(1);
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { refresh_key: 0 }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::BookAdded(_) => {
                self.bump();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <header class="app-header">
                    <h1>{"📚 Book Library"}</h1>
                    <p class="app-subtitle">{"Track what you want to read, are reading, and have finished"}</p>
                </header>
                <main class="app-main">
                    <BookFormComponent on_book_added={ctx.link().callback(Msg::BookAdded)} />
                    <BookListComponent refresh_key={self.refresh_key} />
                </main>
            </div>
        }
    }
}
