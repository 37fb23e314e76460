use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::aluno_form::AlunoForm;
use components::alunos_list::AlunosList;
use components::header::Header;
use components::lesson_agenda::LessonAgenda;
use components::login_form::LoginForm;
use components::signup_form::SignupForm;
use hooks::use_auth::use_auth;
use services::api::ApiClient;
use services::config::AppConfig;
use services::logging;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Page {
    Signup,
    Alunos,
    NewAluno,
    EditAluno(u32),
    Agenda(u32),
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_env());
    let auth = use_auth();
    let page = use_state(|| Page::Alunos);

    // Rebuilt on login so the client picks up the session token
    let api_client = use_memo(auth.state.user.clone(), {
        let config = config.clone();
        move |_| ApiClient::new(&config)
    });

    let go_to = |target: Page| {
        let page = page.clone();
        let clear_outcome = auth.actions.clear_outcome.clone();
        Callback::from(move |_: ()| {
            clear_outcome.emit(());
            page.set(target);
        })
    };

    let on_logout = {
        let page = page.clone();
        let logout = auth.actions.logout.clone();
        Callback::from(move |_: ()| {
            logout.emit(());
            page.set(Page::Alunos);
        })
    };

    let content = match (&auth.state.user, *page) {
        (None, Page::Signup) => html! {
            <SignupForm
                on_signup={auth.actions.signup.clone()}
                on_back={go_to(Page::Alunos)}
                outcome={auth.state.outcome.clone()}
            />
        },
        (None, _) => html! {
            <LoginForm
                on_login={auth.actions.login.clone()}
                on_signup={go_to(Page::Signup)}
                outcome={auth.state.outcome.clone()}
            />
        },
        (Some(_), Page::Alunos | Page::Signup) => {
            let page_for_edit = page.clone();
            let page_for_agenda = page.clone();
            html! {
                <AlunosList
                    api_client={(*api_client).clone()}
                    on_new={go_to(Page::NewAluno)}
                    on_edit={Callback::from(move |id: u32| page_for_edit.set(Page::EditAluno(id)))}
                    on_agenda={Callback::from(move |id: u32| page_for_agenda.set(Page::Agenda(id)))}
                />
            }
        }
        (Some(_), Page::NewAluno) => html! {
            <AlunoForm
                key="new"
                api_client={(*api_client).clone()}
                default_lesson_time={AttrValue::from(config.default_lesson_time.clone())}
                on_done={go_to(Page::Alunos)}
            />
        },
        (Some(_), Page::EditAluno(id)) => html! {
            <AlunoForm
                key={id}
                api_client={(*api_client).clone()}
                aluno_id={Some(id)}
                default_lesson_time={AttrValue::from(config.default_lesson_time.clone())}
                on_done={go_to(Page::Alunos)}
            />
        },
        (Some(_), Page::Agenda(id)) => html! {
            <LessonAgenda
                api_client={(*api_client).clone()}
                aluno_id={id}
                on_back={go_to(Page::Alunos)}
            />
        },
    };

    html! {
        <div class="app">
            <Header
                user={auth.state.user.clone()}
                {on_logout}
                on_home={go_to(Page::Alunos)}
            />
            <main class="container">
                {content}
            </main>
        </div>
    }
}

fn main() {
    let config = AppConfig::from_env();
    logging::init(config.log_level);
    log::info!("Tutti Agenda starting, API at {}", config.api_base_url);

    yew::Renderer::<App>::new().render();
}
