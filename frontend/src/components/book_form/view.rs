use common::model::book::DraftField;
use yew::prelude::*;

use crate::components::helpers::{input_value, select_value, status_options, textarea_value};

use super::messages::Msg;
use super::state::BookFormComponent;

pub fn view(component: &BookFormComponent, ctx: &Context<BookFormComponent>) -> Html {
    let link = ctx.link();
    let draft = &component.draft;

    html! {
        <div class="book-form">
            <h2 class="book-form-title">{"Add New Book"}</h2>

            {
                if let Some(error) = &component.error {
                    html! { <div class="book-form-error">{ error.clone() }</div> }
                } else {
                    html! {}
                }
            }

            <form onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <div class="form-group">
                    <label>{"Title "}<span class="required">{"*"}</span></label>
                    <input
                        type="text"
                        id="title"
                        name="title"
                        required={true}
                        placeholder="Enter book title"
                        value={draft.title.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Input(DraftField::Title, input_value(e)))}
                    />
                </div>

                <div class="form-group">
                    <label>{"Author "}<span class="required">{"*"}</span></label>
                    <input
                        type="text"
                        id="author"
                        name="author"
                        required={true}
                        placeholder="Enter author name"
                        value={draft.author.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Input(DraftField::Author, input_value(e)))}
                    />
                </div>

                <div class="form-group">
                    <label>{"Status"}</label>
                    <select
                        id="status"
                        name="status"
                        onchange={link.callback(|e: Event| Msg::Input(DraftField::Status, select_value(e)))}
                    >
                        { status_options(&draft.status) }
                    </select>
                </div>

                <div class="form-group">
                    <label>{"Genre"}</label>
                    <input
                        type="text"
                        id="genre"
                        name="genre"
                        placeholder="e.g., Fiction, Science Fiction, Biography"
                        value={draft.genre.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Input(DraftField::Genre, input_value(e)))}
                    />
                </div>

                <div class="form-group">
                    <label>{"Notes"}</label>
                    <textarea
                        id="notes"
                        name="notes"
                        rows="4"
                        placeholder="Add your thoughts or notes about this book..."
                        value={draft.notes.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Input(DraftField::Notes, textarea_value(e)))}
                    />
                </div>

                { build_actions(component) }
            </form>
        </div>
    }
}

fn build_actions(component: &BookFormComponent) -> Html {
    let label = if component.submitting { "Adding..." } else { "Add Book" };
    html! {
        <div class="form-actions">
            <button type="submit" class="btn-primary btn-submit" disabled={component.submitting}>
                { label }
            </button>
        </div>
    }
}
