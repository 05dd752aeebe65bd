//! Account store: an ordered list of accounts saved through its [`Persist`]
//! binding after every mutation.
//!
//! Index-addressed operations are bound-checked; an out-of-range index
//! changes nothing and writes nothing.

use crate::error::StoreError;
use crate::persist::Persist;
use crate::types::{Account, AccountState};

#[derive(Debug)]
pub struct AccountStore<P> {
    state: AccountState,
    persist: P,
}

impl<P: Persist> AccountStore<P> {
    /// Create an empty store and rehydrate it from `persist` if a saved state exists.
    pub fn new(persist: P) -> Self {
        let state = match persist.load() {
            Some(state) => {
                log::info!("account store restored: {} accounts", state.accounts.len());
                state
            }
            None => AccountState::default(),
        };
        Self { state, persist }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.state.accounts
    }

    pub fn state(&self) -> &AccountState {
        &self.state
    }

    pub fn get(&self, index: usize) -> Option<&Account> {
        self.state.accounts.get(index)
    }

    pub fn len(&self) -> usize {
        self.state.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.accounts.is_empty()
    }

    pub fn persist(&self) -> &P {
        &self.persist
    }

    pub fn into_persist(self) -> P {
        self.persist
    }

    /// Append a default account (`type = "LDAP"`, everything else empty).
    pub fn add_account(&mut self) -> Result<(), StoreError> {
        self.state.accounts.push(Account::default());
        log::debug!("add_account: {}", self.state.accounts.len());
        self.save()
    }

    /// Replace the account at `index`. Returns `false` if there is none.
    pub fn update_account(&mut self, index: usize, account: Account) -> Result<bool, StoreError> {
        match self.state.accounts.get_mut(index) {
            Some(current) => *current = account,
            None => {
                log::warn!("update_account: index {} out of range ({})", index, self.state.accounts.len());
                return Ok(false);
            }
        }
        log::debug!("update_account: {}", index);
        self.save()?;
        Ok(true)
    }

    /// Remove the account at `index`, shifting later accounts left.
    pub fn remove_account(&mut self, index: usize) -> Result<Option<Account>, StoreError> {
        if index >= self.state.accounts.len() {
            log::warn!("remove_account: index {} out of range ({})", index, self.state.accounts.len());
            return Ok(None);
        }
        let removed = self.state.accounts.remove(index);
        log::debug!("remove_account: {}", index);
        self.save()?;
        Ok(Some(removed))
    }

    /// Back to the initial empty state.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.state = AccountState::default();
        self.save()
    }

    fn save(&mut self) -> Result<(), StoreError> {
        self.persist.save(&self.state).map_err(|err| {
            log::error!("account store save: {}", err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::{KeyValueStorage, MemoryStorage, Persistence};
    use crate::types::AccountLabel;

    type TestStore = AccountStore<Persistence<MemoryStorage>>;

    fn new_store() -> TestStore {
        AccountStore::new(Persistence::new(MemoryStorage::new()))
    }

    fn reload(store: TestStore) -> TestStore {
        AccountStore::new(store.into_persist())
    }

    fn account(label: &str) -> Account {
        Account {
            label: label.to_string(),
            type_: "Local".to_string(),
            login: format!("{label}-login"),
            password: Some(format!("{label}-pass")),
            labels: vec![AccountLabel::from(label)],
        }
    }

    fn store_with(labels: &[&str]) -> TestStore {
        let mut store = new_store();
        for (index, label) in labels.iter().enumerate() {
            store.add_account().unwrap();
            assert!(store.update_account(index, account(label)).unwrap());
        }
        store
    }

    #[test]
    fn test_fresh_store_is_empty() {
        let store = new_store();
        assert!(store.is_empty());
        assert!(store.persist().storage().is_empty());
    }

    #[test]
    fn test_add_account_default_record() {
        let mut store = new_store();
        store.add_account().unwrap();
        assert_eq!(store.accounts(), &[Account {
            label: "".to_string(),
            type_: "LDAP".to_string(),
            login: "".to_string(),
            password: None,
            labels: vec![],
        }]);
    }

    #[test]
    fn test_add_account_n_times() {
        let mut store = new_store();
        for _ in 0..5 {
            store.add_account().unwrap();
        }
        assert_eq!(store.len(), 5);
        assert!(store.accounts().iter().all(|row| *row == Account::default()));
    }

    #[test]
    fn test_update_replaces_only_index() {
        let mut store = store_with(&["a", "b", "c"]);
        assert!(store.update_account(1, account("x")).unwrap());
        assert_eq!(store.accounts(), &[account("a"), account("x"), account("c")]);
    }

    #[test]
    fn test_update_second_of_two() {
        let mut store = store_with(&["a", "b"]);
        store.update_account(1, account("c")).unwrap();
        assert_eq!(store.accounts(), &[account("a"), account("c")]);
    }

    #[test]
    fn test_update_out_of_range_is_noop() {
        let mut store = store_with(&["a"]);
        let saved = store.persist().storage().get_item("accountStore").unwrap();
        assert!(!store.update_account(1, account("x")).unwrap());
        assert!(!store.update_account(usize::MAX, account("x")).unwrap());
        assert_eq!(store.accounts(), &[account("a")]);
        assert_eq!(store.persist().storage().get_item("accountStore").unwrap(), saved);
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        let removed = store.remove_account(1).unwrap();
        assert_eq!(removed, Some(account("b")));
        assert_eq!(store.accounts(), &[account("a"), account("c"), account("d")]);
    }

    #[test]
    fn test_remove_only_account() {
        let mut store = new_store();
        store.add_account().unwrap();
        store.remove_account(0).unwrap();
        assert!(store.is_empty());
        assert!(reload(store).is_empty());
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut store = store_with(&["a", "b"]);
        assert_eq!(store.remove_account(2).unwrap(), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_identical_accounts_allowed() {
        let mut store = store_with(&["a", "a"]);
        assert_eq!(store.get(0), store.get(1));
        store.remove_account(0).unwrap();
        assert_eq!(store.accounts(), &[account("a")]);
    }

    #[test]
    fn test_reload_after_each_mutation() {
        let mut store = new_store();
        store.add_account().unwrap();
        store.add_account().unwrap();
        let store = reload(store);
        assert_eq!(store.len(), 2);

        let mut store = store;
        store.update_account(0, account("a")).unwrap();
        let expected = store.state().clone();
        let mut store = reload(store);
        assert_eq!(store.state(), &expected);

        store.remove_account(1).unwrap();
        let expected = store.state().clone();
        let store = reload(store);
        assert_eq!(store.state(), &expected);
    }

    #[test]
    fn test_construction_does_not_write() {
        let store = store_with(&["a"]);
        let storage = store.into_persist().storage().clone();
        let store = AccountStore::new(Persistence::new(storage.clone()));
        assert_eq!(store.accounts(), &[account("a")]);
        assert_eq!(
            store.persist().storage().get_item("accountStore").unwrap(),
            storage.get_item("accountStore").unwrap()
        );
    }

    #[test]
    fn test_corrupt_storage_starts_empty() {
        let mut storage = MemoryStorage::new();
        storage.set_item("accountStore", "[1,2").unwrap();
        let store = AccountStore::new(Persistence::new(storage));
        assert!(store.is_empty());
    }

    #[test]
    fn test_null_field_keeps_other_accounts() {
        let mut storage = MemoryStorage::new();
        storage.set_item("accountStore", r#"{"accounts":[
            {"label":"a","type":"Local","login":"a-login","password":"a-pass","labels":[{"text":"a"}]},
            {"label":"b","type":null,"login":"b","password":null,"labels":[]}
        ]}"#).unwrap();
        let mut store = AccountStore::new(Persistence::new(storage));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).map(|row| row.type_.as_str()), Some("LDAP"));

        store.add_account().unwrap();
        let store = reload(store);
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0), Some(&account("a")));
        assert_eq!(store.get(1).map(|row| row.login.as_str()), Some("b"));
    }

    #[test]
    fn test_save_failure_keeps_memory_state() {
        let mut store = store_with(&["a"]);
        store.persist.storage_mut().set_fail_writes(true);
        let result = store.add_account();
        assert!(matches!(result, Err(StoreError::Storage(_))));
        assert_eq!(store.len(), 2);
        assert_eq!(reload(store).accounts(), &[account("a")]);
    }

    #[test]
    fn test_reset() {
        let mut store = store_with(&["a", "b"]);
        store.reset().unwrap();
        assert!(store.is_empty());
        assert!(reload(store).is_empty());
    }
}
