use common::model::book::{Book, DraftField};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::helpers::{input_value, select_value, status_options, textarea_value};

use super::messages::Msg;
use super::state::BookItemComponent;

pub fn view(component: &BookItemComponent, ctx: &Context<BookItemComponent>) -> Html {
    if component.is_editing() {
        build_edit_form(component, ctx.link())
    } else {
        build_card(component, ctx.link())
    }
}

fn status_class(book: &Book) -> String {
    format!("status-badge status-{}", book.status.as_str().replace('_', "-"))
}

fn optional_line(label: &str, class: &str, value: Option<&str>) -> Html {
    match value.filter(|v| !v.is_empty()) {
        Some(value) => html! {
            <p class={class.to_string()}>
                <strong>{ format!("{}: ", label) }</strong>
                { value.to_string() }
            </p>
        },
        None => html! {},
    }
}

fn build_card(component: &BookItemComponent, link: &Scope<BookItemComponent>) -> Html {
    let book = &component.book;

    html! {
        <div class="book-item">
            <div class="book-item-header">
                <h3 class="book-title">{ book.title.clone() }</h3>
                <span class={status_class(book)}>{ book.status.badge_text() }</span>
            </div>
            <p class="book-author">{ format!("by {}", book.author) }</p>
            { optional_line("Genre", "book-genre", book.genre.as_deref()) }
            { optional_line("Notes", "book-notes", book.notes.as_deref()) }
            <div class="book-item-actions">
                <button
                    class="btn-secondary btn-edit"
                    disabled={component.pending}
                    onclick={link.callback(|_| Msg::Edit)}
                >
                    {"Edit"}
                </button>
                <button
                    class="btn-danger btn-delete"
                    disabled={component.pending}
                    onclick={link.callback(|_| Msg::Delete)}
                >
                    {"Delete"}
                </button>
            </div>
        </div>
    }
}

fn build_edit_form(component: &BookItemComponent, link: &Scope<BookItemComponent>) -> Html {
    let draft = &component.draft;
    let save_label = if component.pending { "Saving..." } else { "Save" };

    html! {
        <div class="book-item editing">
            <form onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Save
            })}>
                <div class="form-group">
                    <label>{"Title"}</label>
                    <input
                        type="text"
                        required={true}
                        value={draft.title.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Input(DraftField::Title, input_value(e)))}
                    />
                </div>
                <div class="form-group">
                    <label>{"Author"}</label>
                    <input
                        type="text"
                        required={true}
                        value={draft.author.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Input(DraftField::Author, input_value(e)))}
                    />
                </div>
                <div class="form-group">
                    <label>{"Status"}</label>
                    <select onchange={link.callback(|e: Event| Msg::Input(DraftField::Status, select_value(e)))}>
                        { status_options(&draft.status) }
                    </select>
                </div>
                <div class="form-group">
                    <label>{"Genre"}</label>
                    <input
                        type="text"
                        value={draft.genre.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Input(DraftField::Genre, input_value(e)))}
                    />
                </div>
                <div class="form-group">
                    <label>{"Notes"}</label>
                    <textarea
                        rows="3"
                        value={draft.notes.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Input(DraftField::Notes, textarea_value(e)))}
                    />
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn-primary" disabled={component.pending}>
                        { save_label }
                    </button>
                    <button
                        type="button"
                        class="btn-secondary"
                        onclick={link.callback(|_| Msg::Cancel)}
                    >
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </div>
    }
}
