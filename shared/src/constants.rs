/// Identifier of the account store, also the local storage key of its state.
pub static STORE_ID: &'static str = "accountStore";

pub static DEFAULT_ACCOUNT_TYPE: &'static str = "LDAP";
pub static ACCOUNT_TYPE_LOCAL: &'static str = "Local";
pub static ACCOUNT_TYPES: [&'static str; 2] = ["LDAP", "Local"];

pub static MOUNT_POINT_ID: &'static str = "app";

pub const LABEL_SEPARATOR: char = ';';
