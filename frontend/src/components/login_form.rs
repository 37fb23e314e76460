use shared::{AuthOutcome, LoginRequest};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub on_login: Callback<LoginRequest>,
    pub on_signup: Callback<()>,
    #[prop_or_default]
    pub outcome: Option<AuthOutcome>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            Logger::debug_with_component("LoginForm", "Submitting credentials");
            on_login.emit(LoginRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
            });
        })
    };

    let on_signup = {
        let on_signup = props.on_signup.clone();
        Callback::from(move |_: MouseEvent| on_signup.emit(()))
    };

    html! {
        <form class="auth-form" onsubmit={on_submit}>
            <h2>{"Entrar"}</h2>
            if let Some(outcome) = &props.outcome {
                <div class={if outcome.success { "alert alert-success" } else { "alert alert-danger" }}>
                    {&outcome.message}
                </div>
            }
            <div class="form-group">
                <label for="login-email">{"Email"}</label>
                <input id="login-email" type="email" value={(*email).clone()} oninput={on_email} />
            </div>
            <div class="form-group">
                <label for="login-senha">{"Senha"}</label>
                <input id="login-senha" type="password" value={(*password).clone()} oninput={on_password} />
            </div>
            <button type="submit" class="btn-primary">{"Entrar"}</button>
            <button type="button" class="btn-link" onclick={on_signup}>{"Criar conta"}</button>
        </form>
    }
}
