use gloo::timers::callback::Timeout;
use shared::agenda::format_next_lesson;
use shared::Aluno;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Properties, PartialEq)]
pub struct AlunosListProps {
    pub api_client: ApiClient,
    pub on_new: Callback<()>,
    pub on_edit: Callback<u32>,
    pub on_agenda: Callback<u32>,
}

#[function_component(AlunosList)]
pub fn alunos_list(props: &AlunosListProps) -> Html {
    let alunos = use_state(Vec::<Aluno>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let search_input = use_state(String::new);
    let search_term = use_state(String::new);
    let search_timeout = use_mut_ref(|| Option::<Timeout>::None);
    let reload = use_state(|| 0u32);

    {
        let api_client = props.api_client.clone();
        let alunos = alunos.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                loading.set(true);
                match api_client.list_alunos().await {
                    Ok(data) => {
                        alunos.set(data);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("Erro ao carregar alunos: {}", e);
                        error.set(Some(format!("Erro ao carregar alunos: {}", e)));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    // Apply the search term once typing pauses
    let on_search = {
        let search_input = search_input.clone();
        let search_term = search_term.clone();
        let search_timeout = search_timeout.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            search_input.set(value.clone());

            let search_term = search_term.clone();
            let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || search_term.set(value));
            // Dropping the previous timeout cancels it
            *search_timeout.borrow_mut() = Some(timeout);
        })
    };

    let on_clear_search = {
        let search_input = search_input.clone();
        let search_term = search_term.clone();
        let search_timeout = search_timeout.clone();
        Callback::from(move |_: MouseEvent| {
            search_timeout.borrow_mut().take();
            search_input.set(String::new());
            search_term.set(String::new());
        })
    };

    let on_delete = |id: u32, nome: String| {
        let api_client = props.api_client.clone();
        let reload = reload.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message(&format!(
                        "Tem certeza que deseja excluir {}? Esta ação não pode ser desfeita.",
                        nome
                    ))
                    .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let api_client = api_client.clone();
            let reload = reload.clone();
            let error = error.clone();
            spawn_local(async move {
                match api_client.delete_aluno(id).await {
                    Ok(()) => {
                        Logger::info_with_component(
                            "AlunosList",
                            &format!("Aluno {} excluído", id),
                        );
                        reload.set(*reload + 1);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "AlunosList",
                            &format!("Erro ao excluir aluno {}: {}", id, e),
                        );
                        error.set(Some(
                            "Erro ao excluir aluno. Por favor, tente novamente.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    let on_new = {
        let on_new = props.on_new.clone();
        Callback::from(move |_: MouseEvent| on_new.emit(()))
    };

    let visible: Vec<&Aluno> = alunos.iter().filter(|a| a.matches_search(&search_term)).collect();

    html! {
        <div class="alunos-list">
            <div class="alunos-list-header">
                <h2>{"Alunos"}</h2>
                <div class="search-box">
                    <input
                        type="search"
                        placeholder="Buscar por nome, matrícula ou escola"
                        value={(*search_input).clone()}
                        oninput={on_search}
                    />
                    if !search_input.is_empty() {
                        <button class="clear-search" onclick={on_clear_search}>{"✕"}</button>
                    }
                </div>
                <button class="btn-primary" onclick={on_new}>{"Novo aluno"}</button>
            </div>

            if let Some(message) = &*error {
                <div class="alert alert-danger">{message}</div>
            }

            if *loading {
                <div class="loading">{"Carregando alunos..."}</div>
            } else if visible.is_empty() {
                <div class="empty-state">{"Nenhum aluno encontrado"}</div>
            } else {
                <table class="alunos-table">
                    <thead>
                        <tr>
                            <th>{"Nome"}</th>
                            <th>{"Matrícula"}</th>
                            <th>{"Escola"}</th>
                            <th>{"Disciplinas"}</th>
                            <th>{"Próxima aula"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for visible.into_iter().map(|aluno| {
                            let Some(id) = aluno.id else {
                                return html! {};
                            };
                            let on_edit = {
                                let on_edit = props.on_edit.clone();
                                Callback::from(move |_: MouseEvent| on_edit.emit(id))
                            };
                            let on_agenda = {
                                let on_agenda = props.on_agenda.clone();
                                Callback::from(move |_: MouseEvent| on_agenda.emit(id))
                            };
                            html! {
                                <tr key={id}>
                                    <td>{&aluno.nome}</td>
                                    <td>{&aluno.matricula}</td>
                                    <td>{&aluno.escola}</td>
                                    <td>{aluno.disciplinas_label()}</td>
                                    <td>{format_next_lesson(aluno.proxima_aula.as_deref())}</td>
                                    <td class="actions">
                                        <button onclick={on_agenda} title="Agenda">{"📅"}</button>
                                        <button onclick={on_edit} title="Editar">{"✏️"}</button>
                                        <button onclick={on_delete(id, aluno.nome.clone())} title="Excluir">{"🗑️"}</button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            }
        </div>
    }
}
