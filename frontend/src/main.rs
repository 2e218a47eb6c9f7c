use crate::elements::app_root::app_root;
use crate::state::{create_app, spawn_action};

mod elements;
mod utils;
mod constants;
mod state;
mod storage;
mod connect_fetch;

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let app = create_app();
    spawn_action(&app, |app| async move { app.load_config().await });
    dominator::append_dom(&dominator::body(), app_root(app));
}
