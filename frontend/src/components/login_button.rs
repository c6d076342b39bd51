use yew::prelude::*;

use crate::navigation::{activate, browser_navigate, Navigate};

#[derive(Properties, PartialEq)]
pub struct LoginButtonProps {
    pub url: AttrValue,
    pub label: AttrValue,
    #[prop_or_else(browser_navigate)]
    pub navigate: Navigate,
}

/// One navigation attempt per event, however many times it fires.
fn click_handler<E: 'static>(navigate: &Navigate, url: &AttrValue) -> Callback<E> {
    let navigate = navigate.clone();
    let url = url.clone();
    Callback::from(move |_: E| activate(&navigate, &url))
}

/// Sends the whole page to the login endpoint when clicked.
#[function_component(LoginButton)]
pub fn login_button(props: &LoginButtonProps) -> Html {
    let onclick = click_handler::<MouseEvent>(&props.navigate, &props.url);

    html! {
        <div class="login">
            <button type="button" class="login-button" {onclick}>
                { props.label.clone() }
            </button>
        </div>
    }
}
