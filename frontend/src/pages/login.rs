use fantasy_shared::LoginConfig;
use yew::prelude::*;

use crate::components::login_button::LoginButton;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub config: LoginConfig,
}

#[function_component(Login)]
pub fn login(props: &LoginProps) -> Html {
    html! {
        <div class="login-container">
            <div class="login-card">
                <h1 class="login-title">{ "Fantasy Analyzer" }</h1>
                <LoginButton
                    url={AttrValue::from(props.config.url.clone())}
                    label={AttrValue::from(props.config.label.clone())}
                />
            </div>
        </div>
    }
}
