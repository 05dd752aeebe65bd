use std::cell::RefCell;
use std::rc::Rc;

use futures_signals::signal_vec::MutableVec;

use shared::error::StoreError;
use shared::persist::{Persist, Persistence};
use shared::store::AccountStore;
use shared::types::Account;

use crate::storage::BrowserStorage;
use crate::types::AccountRow;

/// Application state, created once by `main` and passed down to the views.
/// `accounts` mirrors the store for rendering; rows are only inserted or
/// removed when the store's list changes length.
pub struct AppState<P = Persistence<BrowserStorage>> {
    store: RefCell<AccountStore<P>>,
    pub accounts: MutableVec<Rc<AccountRow>>,
}

fn rows(accounts: &[Account]) -> Vec<Rc<AccountRow>> {
    accounts.iter().cloned().map(|account| Rc::new(AccountRow::from(account))).collect()
}

// The store keeps its in-memory edit when saving fails, so the mirror follows
// it either way.
fn log_error(action: &str, err: StoreError) {
    log::error!("{}: {}", action, err);
}

impl<P: Persist> AppState<P> {
    pub fn new(store: AccountStore<P>) -> Rc<Self> {
        let accounts = MutableVec::new_with_values(rows(store.accounts()));
        Rc::new(Self {
            store: RefCell::new(store),
            accounts,
        })
    }

    pub fn account(&self, index: usize) -> Option<Account> {
        self.store.borrow().get(index).cloned()
    }

    pub fn add_account(&self) {
        let result = self.store.borrow_mut().add_account();
        if let Err(err) = result {
            log_error("add_account", err);
        }
        self.accounts.lock_mut().push_cloned(Rc::new(AccountRow::from(Account::default())));
    }

    pub fn update_account(&self, index: usize, account: Account) {
        let result = self.store.borrow_mut().update_account(index, account.clone());
        let changed = match result {
            Ok(changed) => changed,
            Err(err) => {
                log_error("update_account", err);
                true
            }
        };
        if changed {
            let row = self.accounts.lock_ref().get(index).cloned();
            if let Some(row) = row {
                row.set_from(account);
            }
        }
    }

    /// Update the account at `index` with `edit` applied to its current value.
    pub fn edit_account<F>(&self, index: usize, edit: F)
        where F: FnOnce(&mut Account)
    {
        if let Some(mut account) = self.account(index) {
            edit(&mut account);
            self.update_account(index, account);
        }
    }

    pub fn remove_account(&self, index: usize) {
        let result = self.store.borrow_mut().remove_account(index);
        let removed = match result {
            Ok(removed) => removed.is_some(),
            Err(err) => {
                log_error("remove_account", err);
                true
            }
        };
        if removed {
            self.accounts.lock_mut().remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::persist::MemoryStorage;
    use shared::types::{AccountLabel, AccountState};

    type TestState = AppState<Persistence<MemoryStorage>>;

    fn new_state(fail_writes: bool) -> Rc<TestState> {
        let mut storage = MemoryStorage::new();
        storage.set_fail_writes(fail_writes);
        AppState::new(AccountStore::new(Persistence::new(storage)))
    }

    fn mirror(state: &TestState) -> Vec<Account> {
        state.accounts.lock_ref().iter().map(|row| row.to_account()).collect()
    }

    fn stored(state: &TestState) -> Vec<Account> {
        state.store.borrow().accounts().to_vec()
    }

    fn account(login: &str) -> Account {
        Account {
            login: login.to_string(),
            labels: vec![AccountLabel::from(login)],
            ..Account::default()
        }
    }

    fn run_actions(state: &TestState) {
        state.add_account();
        state.add_account();
        state.add_account();
        state.update_account(1, account("b"));
        state.edit_account(2, |row| row.login = " c ".to_string());
        state.remove_account(0);
        state.update_account(9, account("x"));
        state.remove_account(9);
    }

    #[test]
    fn test_mirror_follows_store() {
        let state = new_state(false);
        run_actions(&state);
        assert_eq!(mirror(&state), stored(&state));
        assert_eq!(stored(&state)[0], account("b"));
        assert_eq!(stored(&state)[1].login, " c ");
    }

    #[test]
    fn test_mirror_follows_store_after_failed_save() {
        let state = new_state(true);
        run_actions(&state);
        assert_eq!(stored(&state).len(), 2);
        assert_eq!(mirror(&state), stored(&state));
    }

    #[test]
    fn test_update_keeps_row_in_place() {
        let state = new_state(false);
        state.add_account();
        let before = state.accounts.lock_ref()[0].clone();
        state.update_account(0, account("a"));
        let after = state.accounts.lock_ref()[0].clone();
        assert!(Rc::ptr_eq(&before, &after));
        assert_eq!(after.login.get_cloned(), "a");
    }

    #[test]
    fn test_rehydrated_rows() {
        let mut persistence = Persistence::new(MemoryStorage::new());
        persistence.save(&AccountState { accounts: vec![account("a"), account("b")] }).unwrap();
        let state = AppState::new(AccountStore::new(persistence));
        assert_eq!(mirror(&state), vec![account("a"), account("b")]);
    }
}
