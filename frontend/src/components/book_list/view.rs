use common::model::book::BookStatus;
use common::model::shelf::{count_label, Shelf};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::book_item::BookItemComponent;

use super::messages::Msg;
use super::state::{BookListComponent, ListDisplay};

pub fn view(component: &BookListComponent, ctx: &Context<BookListComponent>) -> Html {
    let link = ctx.link();

    let content = match component.display() {
        ListDisplay::Loading => html! {
            <div class="book-list-loading">{"Loading books..."}</div>
        },
        ListDisplay::Error(message) => build_error(message, link),
        ListDisplay::Empty => html! {
            <div class="book-list-empty">
                <div class="book-list-empty-icon">{"📚"}</div>
                <p class="book-list-empty-text">{"No books yet."}</p>
                <p class="text-secondary">{"Add your first book above!"}</p>
            </div>
        },
        ListDisplay::Shelves(shelves) => html! {
            <>
                <div class="book-list-header">
                    <h2 class="book-list-title">
                        {"My Library"}
                        <span class="book-count">{ count_label(component.books.len()) }</span>
                    </h2>
                </div>
                { for shelves.iter().map(|shelf| build_shelf(shelf, link)) }
            </>
        },
    };

    html! {
        <div class="book-list">{ content }</div>
    }
}

fn build_error(message: &str, link: &Scope<BookListComponent>) -> Html {
    html! {
        <div class="book-list-error">
            { message.to_string() }
            <div class="book-list-error-actions">
                <button class="btn-primary" onclick={link.callback(|_| Msg::Fetch)}>
                    {"Retry"}
                </button>
            </div>
        </div>
    }
}

fn shelf_icon(shelf: &Shelf<'_>) -> &'static str {
    match shelf.status {
        BookStatus::WantToRead => "📚",
        BookStatus::Reading => "📖",
        _ => "✅",
    }
}

/// One status section: heading with count, then the items in order.
fn build_shelf(shelf: &Shelf<'_>, link: &Scope<BookListComponent>) -> Html {
    let on_book_updated = link.callback(Msg::BookUpdated);
    let on_book_deleted = link.callback(Msg::BookDeleted);
    let section_class = format!("status-section status-{}", shelf.status.as_str().replace('_', "-"));

    html! {
        <div class={section_class}>
            <div class="status-section-header">
                <h3 class="status-section-title">
                    { format!("{} {}", shelf_icon(shelf), shelf.title()) }
                    <span class="status-section-count">{ shelf.len() }</span>
                </h3>
            </div>
            <div class="books-grid">
                {
                    for shelf.books.iter().map(|book| html! {
                        <BookItemComponent
                            key={book.id}
                            book={(*book).clone()}
                            on_book_updated={on_book_updated.clone()}
                            on_book_deleted={on_book_deleted.clone()}
                        />
                    })
                }
            </div>
        </div>
    }
}
