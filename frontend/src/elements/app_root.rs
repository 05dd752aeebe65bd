use std::rc::Rc;

use dominator::{clone, Dom, html};
use futures_signals::signal_vec::SignalVecExt;

use crate::constants::{APP_TITLE, TAG_DIV};
use crate::elements::account_row::account_row;
use crate::elements::app_header::app_header;
use crate::state::AppState;
use crate::utils::set_title;

fn css_class(label: &str) -> String {
    format!("app-root__{label}")
}

pub fn app_root(state: Rc<AppState>) -> Dom {
    set_title(APP_TITLE);
    html!(TAG_DIV, {
        .class("app-root")
        .children([
            app_header(state.clone()),
            html!(TAG_DIV, {
                .class(css_class("list"))
                .children_signal_vec(state.accounts.signal_vec_cloned()
                    .enumerate()
                    .map(clone!(state => move |(index, row)| account_row(state.clone(), index, row))))
            }),
            html!(TAG_DIV, {
                .class(css_class("empty"))
                .visible_signal(state.accounts.signal_vec_cloned().is_empty())
                .text("Нет учетных записей")
            }),
        ])
    })
}
