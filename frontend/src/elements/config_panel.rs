use std::rc::Rc;

use dominator::{Dom, html};
use futures_signals::signal::{Mutable, SignalExt};

use shared::constants::CONFIG_PATH;
use shared::types::Config;

use crate::constants::{TAG_CODE, TAG_DIV};
use crate::state::NotesApp;

fn css_class(label: &str) -> String {
    format!("panel__{label}")
}

pub fn config_panel(app: &Rc<NotesApp>) -> Dom {
    let config_error = app.state.config_error.clone();
    html!(TAG_DIV, {
        .class(css_class("container"))
        .child_signal(app.state.config.signal_cloned().map(move |config| {
            Some(match config {
                Some(config) => ready_view(&config),
                None => loading_view(config_error.clone()),
            })
        }))
    })
}

fn loading_view(config_error: Mutable<String>) -> Dom {
    html!(TAG_DIV, {
        .child(html!("b", {.text("Loading config…")}))
        .child(html!(TAG_DIV, {
            .class(css_class("muted"))
            .text("Trying to fetch ")
            .child(html!(TAG_CODE, {.text(CONFIG_PATH)}))
        }))
        .child_signal(config_error.signal_cloned().map(|error| {
            if error.is_empty() {
                None
            } else {
                Some(error_view(&error))
            }
        }))
    })
}

fn error_view(error: &str) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("error"))
        .child(html!("b", {.text("Config error: ")}))
        .text(error)
        .child(html!(TAG_DIV, {
            .class(css_class("muted"))
            .text("Make sure ")
            .child(html!(TAG_CODE, {.text("config.json")}))
            .text(" is deployed next to the site and the CDN cache has been invalidated.")
        }))
    })
}

fn ready_view(config: &Config) -> Dom {
    html!(TAG_DIV, {
        .children([
            html!(TAG_DIV, {
                .class(css_class("muted"))
                .text("API Base from config: ")
                .child(html!(TAG_CODE, {.text(&config.api_base)}))
            }),
            html!(TAG_DIV, {
                .class(css_class("muted"))
                .text("Region: ")
                .child(html!(TAG_CODE, {.text(&config.region)}))
                .text(" • UserPool: ")
                .child(html!(TAG_CODE, {.text(&config.user_pool_id)}))
                .text(" • ClientId: ")
                .child(html!(TAG_CODE, {.text(&config.client_id)}))
            }),
        ])
    })
}
