use std::rc::Rc;

use dominator::{clone, Dom, events, html};
use futures_signals::signal::SignalExt;
use futures_signals::signal_vec::SignalVecExt;

use shared::types::Note;

use crate::constants::{KEY_ENTER, PROP_DISABLED, PROP_PLACEHOLDER, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_INPUT, TAG_SPAN};
use crate::state::{spawn_action, NotesApp};
use crate::utils::value_from_target;

fn css_class(label: &str) -> String {
    format!("notes-list__{label}")
}

fn submit(app: &Rc<NotesApp>) {
    if app.can_refresh() {
        spawn_action(app, |app| async move { app.create_note().await });
    }
}

pub fn note_form(app: &Rc<NotesApp>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("form"))
        .children([
            html!(TAG_INPUT, {
                .class(css_class("input"))
                .attr(PROP_PLACEHOLDER, "Write a note...")
                .prop_signal(PROP_VALUE, app.state.draft_text.signal_cloned())
                .event(clone!(app => move |e: events::Input| {
                    app.state.draft_text.set(value_from_target(e.target()));
                }))
                .event(clone!(app => move |e: events::KeyDown| {
                    if e.key() == KEY_ENTER {
                        submit(&app);
                    }
                }))
            }),
            html!(TAG_BUTTON, {
                .text("Add")
                .prop_signal(PROP_DISABLED, app.signal_can_refresh().map(|flag| !flag))
                .event(clone!(app => move |_: events::Click| submit(&app)))
            }),
        ])
    })
}

pub fn notes_list(app: &Rc<NotesApp>) -> Dom {
    html!(TAG_DIV, {
        .children([
            html!(TAG_DIV, {
                .class(css_class("header"))
                .child(html!("h2", {.text("Notes")}))
                .child_signal(app.state.loading.signal().map(|flag| {
                    if flag {
                        Some(html!(TAG_SPAN, {
                            .class(css_class("loading"))
                            .text("Loading…")
                        }))
                    } else {
                        None
                    }
                }))
            }),
            html!("ul", {
                .class(css_class("items"))
                .children_signal_vec(app.state.notes.signal_vec_cloned().map(clone!(app => move |note| note_view(&app, note))))
            }),
        ])
    })
}

fn note_view(app: &Rc<NotesApp>, note: Note) -> Dom {
    let note_id = note.note_id.clone();
    html!("li", {
        .child(html!(TAG_DIV, {
            .class(css_class("item"))
            .children([
                html!(TAG_DIV, {
                    .class(css_class("body"))
                    .children([
                        html!(TAG_DIV, {
                            .child(html!("b", {.text(&note.text)}))
                        }),
                        html!(TAG_DIV, {
                            .class(css_class("meta"))
                            .text(&format!("{} • {}", note.note_id, note.created_at))
                        }),
                    ])
                }),
                html!(TAG_BUTTON, {
                    .text("Delete")
                    .prop_signal(PROP_DISABLED, app.state.loading.signal())
                    .event(clone!(app => move |_: events::Click| {
                        let note_id = note_id.clone();
                        spawn_action(&app, |app| async move { app.delete_note(&note_id).await });
                    }))
                }),
            ])
        }))
    })
}
