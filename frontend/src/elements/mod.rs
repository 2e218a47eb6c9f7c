pub mod app_root;
pub mod config_panel;
pub mod token_panel;
pub mod notes_list;
