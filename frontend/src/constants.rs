pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_TITLE: &'static str = "title";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_SELECTED: &'static str = "selected";

pub static PROP_TYPE_PASSWORD: &'static str = "password";
pub static PROP_TYPE_TEXT: &'static str = "text";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_BUTTON: &'static str = "button";
pub static TAG_SELECT: &'static str = "select";
pub static TAG_OPTION: &'static str = "option";

pub static APP_TITLE: &'static str = "Учетные записи";
