use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use shared::app::App;

use crate::connect_fetch::FetchTransport;
use crate::storage::LocalStorage;

pub type NotesApp = App<FetchTransport, LocalStorage>;

pub fn create_app() -> Rc<NotesApp> {
    Rc::new(App::new(FetchTransport, LocalStorage))
}

/// Runs an action in the background; its outcome lands in the app state.
pub fn spawn_action<F, R>(app: &Rc<NotesApp>, action: F)
    where
        F: FnOnce(Rc<NotesApp>) -> R,
        R: Future<Output=()> + 'static
{
    spawn_local(action(app.clone()));
}
