use std::rc::Rc;

use dominator::{Dom, html};
use futures_signals::signal::SignalExt;

use crate::constants::{APP_TITLE, TAG_DIV};
use crate::elements::config_panel::config_panel;
use crate::elements::notes_list::{note_form, notes_list};
use crate::elements::token_panel::token_panel;
use crate::state::NotesApp;
use crate::utils::set_title;

fn css_class(label: &str) -> String {
    format!("app-root__{label}")
}

pub fn app_root(app: Rc<NotesApp>) -> Dom {
    set_title(APP_TITLE);
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!("h1", {
                .text(APP_TITLE)
            }),
            html!("p", {
                .class(css_class("subtitle"))
                .text("Create, list and delete notes on the configured API.")
            }),
            config_panel(&app),
            token_panel(&app),
        ])
        .child_signal(app.state.error.signal_cloned().map(error_view))
        .children([
            note_form(&app),
            notes_list(&app),
        ])
        .child_signal(app.signal_has_token().map(|flag| if flag { None } else { Some(hint_view()) }))
    })
}

fn error_view(error: String) -> Option<Dom> {
    if error.is_empty() {
        None
    } else {
        Some(html!(TAG_DIV, {
            .class(css_class("error"))
            .child(html!("b", {.text("Error: ")}))
            .text(&error)
        }))
    }
}

fn hint_view() -> Dom {
    html!("p", {
        .class(css_class("hint"))
        .text("Add your AccessToken above to load notes.")
    })
}
