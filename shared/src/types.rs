use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::DEFAULT_ACCOUNT_TYPE;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct AccountLabel {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl From<&str> for AccountLabel {
    fn from(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

/// One credential record. `password == None` means no password is set and is
/// persisted as `null`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Account {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(rename = "type", default = "default_account_type", deserialize_with = "null_as_default_type")]
    pub type_: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub login: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<AccountLabel>,
}

fn default_account_type() -> String {
    DEFAULT_ACCOUNT_TYPE.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_type<'de, D>(deserializer: D) -> Result<String, D::Error>
    where D: Deserializer<'de>
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_account_type))
}

/// A record that still does not parse is dropped; the rest of the list is kept.
fn skip_invalid_accounts<'de, D>(deserializer: D) -> Result<Vec<Account>, D::Error>
    where D: Deserializer<'de>
{
    let rows = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    let accounts = rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<Account>(row) {
            Ok(account) => Some(account),
            Err(err) => {
                log::warn!("skipping stored account {}: {}", index, err);
                None
            }
        })
        .collect();
    Ok(accounts)
}

impl Default for Account {
    fn default() -> Self {
        Self {
            label: "".to_string(),
            type_: default_account_type(),
            login: "".to_string(),
            password: None,
            labels: vec![],
        }
    }
}

/// Whole persisted state of the account store: `{"accounts": [...]}`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct AccountState {
    #[serde(default, deserialize_with = "skip_invalid_accounts")]
    pub accounts: Vec<Account>,
}
