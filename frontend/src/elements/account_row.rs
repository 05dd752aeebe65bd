use std::rc::Rc;

use dominator::{clone, Dom, events, html};
use futures_signals::map_ref;
use futures_signals::signal::{ReadOnlyMutable, SignalExt};

use shared::constants::{ACCOUNT_TYPE_LOCAL, ACCOUNT_TYPES};
use shared::types::{Account, AccountLabel};
use shared::utils::{labels_to_string, parse_labels};

use crate::constants::{PROP_PLACEHOLDER, PROP_SELECTED, PROP_TITLE, PROP_TYPE, PROP_TYPE_PASSWORD, PROP_TYPE_TEXT, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_INPUT, TAG_OPTION, TAG_SELECT};
use crate::state::AppState;
use crate::types::AccountRow;
use crate::utils::get_value_from_target;

type RowIndex = ReadOnlyMutable<Option<usize>>;

fn css_class(label: &str) -> String {
    format!("account-row__{label}")
}

/// Only local accounts carry a password; any other type stores `null`.
fn apply_type(account: &mut Account, type_: String) {
    if type_ != ACCOUNT_TYPE_LOCAL {
        account.password = None;
    } else if account.password.is_none() {
        account.password = Some("".to_string());
    }
    account.type_ = type_;
}

/// `label` keeps the text as typed, `labels` its parsed pieces.
fn labels_text(label: &str, labels: &[AccountLabel]) -> String {
    if label.is_empty() {
        labels_to_string(labels)
    } else {
        label.to_string()
    }
}

/// Known types, plus the current one when it is something else.
fn type_options(current: &str) -> Vec<String> {
    let mut options = ACCOUNT_TYPES.iter().map(|type_| type_.to_string()).collect::<Vec<_>>();
    if !options.iter().any(|type_| type_ == current) {
        options.push(current.to_string());
    }
    options
}

fn edit<F>(state: &AppState, index: &RowIndex, f: F)
    where F: FnOnce(&mut Account)
{
    if let Some(index) = index.get() {
        state.edit_account(index, f);
    }
}

pub fn account_row(state: Rc<AppState>, index: RowIndex, row: Rc<AccountRow>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_INPUT, {
                .class(css_class("input"))
                .attr(PROP_TYPE, PROP_TYPE_TEXT)
                .attr(PROP_TITLE, "Метки")
                .attr(PROP_PLACEHOLDER, "метка; метка")
                .prop_signal(PROP_VALUE, map_ref! {
                    let label = row.label.signal_cloned(),
                    let labels = row.labels.signal_cloned() =>
                    labels_text(label, labels)
                })
                .event(clone!(state, index => move |ev: events::Change| {
                    let text = get_value_from_target(ev.target());
                    edit(&state, &index, |account| {
                        account.labels = parse_labels(&text);
                        account.label = text;
                    });
                }))
            }),
            type_select(state.clone(), index.clone(), &row),
            html!(TAG_INPUT, {
                .class(css_class("input"))
                .class_signal(css_class("wide"), row.type_.signal_cloned().map(|type_| type_ != ACCOUNT_TYPE_LOCAL))
                .attr(PROP_TYPE, PROP_TYPE_TEXT)
                .attr(PROP_TITLE, "Логин")
                .attr(PROP_PLACEHOLDER, "логин")
                .prop_signal(PROP_VALUE, row.login.signal_cloned())
                .event(clone!(state, index => move |ev: events::Change| {
                    let login = get_value_from_target(ev.target());
                    edit(&state, &index, |account| account.login = login);
                }))
            }),
        ])
        .child_signal(row.type_.signal_cloned().map(clone!(state, index, row => move |type_| {
            if type_ == ACCOUNT_TYPE_LOCAL {
                Some(password_input(state.clone(), index.clone(), &row))
            } else {
                None
            }
        })))
        .child(html!(TAG_BUTTON, {
            .class(css_class("remove"))
            .attr(PROP_TITLE, "Удалить")
            .text("✕")
            .event(clone!(state, index => move |_: events::Click| {
                if let Some(index) = index.get() {
                    state.remove_account(index);
                }
            }))
        }))
    })
}

fn type_select(state: Rc<AppState>, index: RowIndex, row: &AccountRow) -> Dom {
    let options = type_options(&row.type_.lock_ref());
    html!(TAG_SELECT, {
        .class(css_class("select"))
        .attr(PROP_TITLE, "Тип записи")
        .children(options.into_iter().map(|option| html!(TAG_OPTION, {
            .attr(PROP_VALUE, &option)
            .text(&option)
            .prop_signal(PROP_SELECTED, row.type_.signal_cloned().map(clone!(option => move |type_| type_ == option)))
        })))
        .event(move |ev: events::Change| {
            let type_ = get_value_from_target(ev.target());
            edit(&state, &index, |account| apply_type(account, type_));
        })
    })
}

fn password_input(state: Rc<AppState>, index: RowIndex, row: &AccountRow) -> Dom {
    html!(TAG_INPUT, {
        .class(css_class("input"))
        .attr(PROP_TYPE, PROP_TYPE_PASSWORD)
        .attr(PROP_TITLE, "Пароль")
        .attr(PROP_PLACEHOLDER, "пароль")
        .prop_signal(PROP_VALUE, row.password.signal_cloned().map(|password| password.unwrap_or_default()))
        .event(move |ev: events::Change| {
            let password = get_value_from_target(ev.target());
            edit(&state, &index, |account| account.password = Some(password));
        })
    })
}
