pub mod account_row;
pub mod app_header;
pub mod app_root;
