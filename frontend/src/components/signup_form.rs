use shared::validation::format_telefone;
use shared::{AuthOutcome, SignupRequest};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const PERFIS: [(&str, &str); 3] = [
    ("professor", "Professor"),
    ("coordenador", "Coordenador"),
    ("administrador", "Administrador"),
];

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub on_signup: Callback<SignupRequest>,
    pub on_back: Callback<()>,
    #[prop_or_default]
    pub outcome: Option<AuthOutcome>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let request = use_state(|| SignupRequest {
        nome: String::new(),
        email: String::new(),
        senha: String::new(),
        telefone: None,
        perfil: PERFIS[0].0.to_string(),
    });

    let on_text = |apply: fn(&mut SignupRequest, String)| {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*request).clone();
            apply(&mut updated, input.value());
            request.set(updated);
        })
    };

    let on_perfil = {
        let request = request.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut updated = (*request).clone();
            updated.perfil = select.value();
            request.set(updated);
        })
    };

    let on_submit = {
        let request = request.clone();
        let on_signup = props.on_signup.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_signup.emit((*request).clone());
        })
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <form class="auth-form" onsubmit={on_submit}>
            <h2>{"Criar conta"}</h2>
            if let Some(outcome) = &props.outcome {
                <div class={if outcome.success { "alert alert-success" } else { "alert alert-danger" }}>
                    {&outcome.message}
                </div>
            }
            <div class="form-group">
                <label for="signup-nome">{"Nome"}</label>
                <input id="signup-nome" type="text" value={request.nome.clone()}
                    oninput={on_text(|r, v| r.nome = v)} />
            </div>
            <div class="form-group">
                <label for="signup-email">{"Email"}</label>
                <input id="signup-email" type="email" value={request.email.clone()}
                    oninput={on_text(|r, v| r.email = v)} />
            </div>
            <div class="form-group">
                <label for="signup-telefone">{"Telefone"}</label>
                <input id="signup-telefone" type="tel" value={request.telefone.clone().unwrap_or_default()}
                    oninput={on_text(|r, v| r.telefone = Some(format_telefone(&v)).filter(|t| !t.is_empty()))} />
            </div>
            <div class="form-group">
                <label for="signup-senha">{"Senha"}</label>
                <input id="signup-senha" type="password" value={request.senha.clone()}
                    oninput={on_text(|r, v| r.senha = v)} />
            </div>
            <div class="form-group">
                <label for="signup-perfil">{"Perfil"}</label>
                <select id="signup-perfil" onchange={on_perfil}>
                    { for PERFIS.iter().map(|(value, label)| html! {
                        <option value={*value} selected={request.perfil == *value}>{*label}</option>
                    }) }
                </select>
            </div>
            <button type="submit" class="btn-primary">{"Cadastrar"}</button>
            <button type="button" class="btn-link" onclick={on_back}>{"Já tenho conta"}</button>
        </form>
    }
}
