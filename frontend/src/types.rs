use futures_signals::signal::Mutable;

use shared::types::{Account, AccountLabel};

/// View-side copy of one account. Fields are updated in place so the row's
/// DOM survives edits.
#[derive(Debug, Clone, Default)]
pub struct AccountRow {
    pub label: Mutable<String>,
    pub type_: Mutable<String>,
    pub login: Mutable<String>,
    pub password: Mutable<Option<String>>,
    pub labels: Mutable<Vec<AccountLabel>>,
}

impl AccountRow {
    pub fn set_from(&self, src: Account) {
        self.label.set_neq(src.label);
        self.type_.set_neq(src.type_);
        self.login.set_neq(src.login);
        self.password.set_neq(src.password);
        self.labels.set_neq(src.labels);
    }

    pub fn to_account(&self) -> Account {
        Account {
            label: self.label.get_cloned(),
            type_: self.type_.get_cloned(),
            login: self.login.get_cloned(),
            password: self.password.get_cloned(),
            labels: self.labels.get_cloned(),
        }
    }
}

impl From<Account> for AccountRow {
    fn from(src: Account) -> Self {
        Self {
            label: Mutable::new(src.label),
            type_: Mutable::new(src.type_),
            login: Mutable::new(src.login),
            password: Mutable::new(src.password),
            labels: Mutable::new(src.labels),
        }
    }
}
