use std::rc::Rc;

use dominator::{clone, Dom, events, html};
use futures_signals::signal::SignalExt;
use futures_signals::signal_vec::SignalVecExt;

use crate::constants::{APP_TITLE, PROP_TITLE, TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::state::AppState;

fn css_class(label: &str) -> String {
    format!("app-header__{label}")
}

pub fn app_header(state: Rc<AppState>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!("h2", {
                .class(css_class("title"))
                .text(APP_TITLE)
            }),
            html!(TAG_BUTTON, {
                .class(css_class("button"))
                .attr(PROP_TITLE, "Добавить учетную запись")
                .text("+")
                .event(clone!(state => move |_: events::Click| state.add_account()))
            }),
            html!(TAG_SPAN, {
                .class(css_class("count"))
                .text("всего: ")
                .text_signal(state.accounts.signal_vec_cloned().len().map(|len| len.to_string()))
            }),
        ])
    })
}
