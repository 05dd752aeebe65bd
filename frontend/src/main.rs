use shared::constants::MOUNT_POINT_ID;
use shared::persist::Persistence;
use shared::store::AccountStore;

use crate::elements::app_root::app_root;
use crate::state::AppState;
use crate::storage::BrowserStorage;

mod constants;
mod elements;
mod state;
mod storage;
mod types;
mod utils;

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let storage = match BrowserStorage::local() {
        Ok(storage) => storage,
        Err(err) => {
            log::error!("account store: {}", err);
            wasm_bindgen::throw_str(&err.to_string());
        }
    };
    let state = AppState::new(AccountStore::new(Persistence::new(storage)));

    dominator::append_dom(&dominator::get_id(MOUNT_POINT_ID), app_root(state));
}
