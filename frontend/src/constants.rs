pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_DISABLED: &'static str = "disabled";
pub static PROP_ROWS: &'static str = "rows";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_TEXTAREA: &'static str = "textarea";
pub static TAG_BUTTON: &'static str = "button";
pub static TAG_CODE: &'static str = "code";

pub static KEY_ENTER: &'static str = "Enter";

pub static APP_TITLE: &'static str = "Notes";
