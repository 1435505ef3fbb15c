//! Browser helpers shared by the book components.
//!
//! - **User Feedback**: `show_toast` shows a short-lived notification for
//!   failed saves and deletes.
//! - **Confirmation**: `confirm` wraps the blocking `window.confirm` prompt.
//! - **Input Extraction**: `input_value`, `textarea_value` and `select_value`
//!   read the current value out of a form control event.
//! - **Markup**: `status_options` renders the status `<option>` list.

use common::model::book::BookStatus;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const TOAST_STYLE: &str = "position: fixed; bottom: 20px; left: 50%; transform: translateX(-50%); \
    background: rgba(0, 0, 0, 0.8); color: #fff; padding: 10px 20px; border-radius: 4px; z-index: 10000;";

const TOAST_MILLIS: u32 = 3000;

/// Shows `message` at the bottom of the screen for three seconds.
pub fn show_toast(message: &str) {
    if let Some(toast) = append_toast(message) {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            toast.remove();
        });
    }
}

fn append_toast(message: &str) -> Option<HtmlElement> {
    let document = web_sys::window()?.document()?;
    let toast: HtmlElement = document.create_element("div").ok()?.unchecked_into();
    toast.set_class_name("toast");
    toast.set_text_content(Some(message));
    toast.style().set_css_text(TOAST_STYLE);
    document.body()?.append_child(&toast).ok()?;
    Some(toast)
}

/// Blocking yes/no prompt. Anything other than an explicit "OK" is a no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// `<option>` list for the three statuses, marking `selected` as chosen.
///
/// A status outside the three is listed first under its formatted name so the
/// control shows what the record actually holds.
pub fn status_options(selected: &BookStatus) -> Html {
    let current = (!selected.is_known()).then(|| {
        html! {
            <option value={selected.as_str().to_string()} selected={true}>
                { selected.badge_text() }
            </option>
        }
    });

    let known = BookStatus::KNOWN.iter().map(|status| {
        html! {
            <option value={status.as_str().to_string()} selected={status == selected}>
                { status.option_label().to_string() }
            </option>
        }
    });

    current.into_iter().chain(known).collect::<Html>()
}
