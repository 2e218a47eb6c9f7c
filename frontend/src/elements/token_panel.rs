use std::rc::Rc;

use dominator::{clone, Dom, events, html};
use futures_signals::signal::{Signal, SignalExt};

use crate::constants::{PROP_DISABLED, PROP_PLACEHOLDER, PROP_ROWS, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_TEXTAREA};
use crate::state::{spawn_action, NotesApp};
use crate::utils::value_from_target;

fn css_class(label: &str) -> String {
    format!("token-panel__{label}")
}

pub fn token_panel(app: &Rc<NotesApp>) -> Dom {
    html!(TAG_DIV, {
        .class("panel__container")
        .children([
            html!("h3", {.text("Access Token")}),
            html!("p", {
                .class("panel__muted")
                .text("Paste your Cognito AccessToken here. Whitespace and line breaks are removed on save.")
            }),
            html!(TAG_TEXTAREA, {
                .class(css_class("input"))
                .attr(PROP_ROWS, "4")
                .attr(PROP_PLACEHOLDER, "Paste AccessToken here...")
                .prop_signal(PROP_VALUE, app.state.token_input.signal_cloned())
                .event(clone!(app => move |e: events::Input| {
                    app.state.token_input.set(value_from_target(e.target()));
                }))
            }),
            html!(TAG_DIV, {
                .class(css_class("buttons"))
                .children([
                    button("Save token + Load notes", app.signal_can_save_token(), clone!(app => move || {
                        spawn_action(&app, |app| async move { app.save_token().await });
                    })),
                    button("Clear token", not_loading(app), clone!(app => move || {
                        app.clear_token();
                    })),
                    button("Refresh", app.signal_can_refresh(), clone!(app => move || {
                        spawn_action(&app, |app| async move { app.refresh().await });
                    })),
                    button("Reload config", not_loading(app), clone!(app => move || {
                        spawn_action(&app, |app| async move { app.load_config().await });
                    })),
                ])
            }),
        ])
    })
}

fn not_loading(app: &Rc<NotesApp>) -> impl Signal<Item=bool> {
    app.state.loading.signal().map(|flag| !flag)
}

fn button<S, F>(label: &str, enabled: S, click: F) -> Dom
    where
        S: Signal<Item=bool> + 'static,
        F: Fn() + 'static
{
    html!(TAG_BUTTON, {
        .text(label)
        .prop_signal(PROP_DISABLED, enabled.map(|flag| !flag))
        .event(move |_: events::Click| click())
    })
}
