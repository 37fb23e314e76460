use shared::agenda::{build_agenda, AgendaRow};
use shared::AlunoAgenda;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::{ApiClient, ApiError};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct LessonAgendaProps {
    pub api_client: ApiClient,
    pub aluno_id: u32,
    pub on_back: Callback<()>,
}

struct AgendaData {
    header: Option<AlunoAgenda>,
    rows: Vec<AgendaRow>,
}

async fn load_agenda(api_client: &ApiClient, aluno_id: u32) -> Result<AgendaData, ApiError> {
    let aluno = api_client.get_aluno(aluno_id).await?;
    let escolas = api_client.list_escolas().await.unwrap_or_else(|e| {
        Logger::warn_with_component(
            "LessonAgenda",
            &format!("escolas unavailable, printing without logo: {}", e),
        );
        Vec::new()
    });
    let escola = escolas.iter().find(|e| e.id.is_some() && e.id == aluno.escola_id);
    let aulas = api_client.list_aulas(aluno_id).await?;

    Ok(AgendaData {
        header: AlunoAgenda::from_aluno(&aluno, escola),
        rows: build_agenda(&aulas),
    })
}

/// Printable list of a student's lessons
#[function_component(LessonAgenda)]
pub fn lesson_agenda(props: &LessonAgendaProps) -> Html {
    let header = use_state(|| Option::<AlunoAgenda>::None);
    let rows = use_state(Vec::<AgendaRow>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    {
        let api_client = props.api_client.clone();
        let header = header.clone();
        let rows = rows.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(props.aluno_id, move |aluno_id| {
            let aluno_id = *aluno_id;
            spawn_local(async move {
                loading.set(true);
                match load_agenda(&api_client, aluno_id).await {
                    Ok(data) => {
                        header.set(data.header);
                        rows.set(data.rows);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("Erro ao carregar agenda do aluno {}: {}", aluno_id, e);
                        error.set(Some(format!("Erro ao carregar agenda: {}", e)));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_print = Callback::from(|_: MouseEvent| {
        let printed = web_sys::window().map(|w| w.print());
        if let Some(Err(e)) = printed {
            log::error!("window.print() failed: {:?}", e);
        }
    });

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    if *loading {
        return html! { <div class="loading">{"Carregando agenda..."}</div> };
    }

    html! {
        <div class="lesson-agenda">
            <div class="agenda-actions no-print">
                <button class="btn-secondary" onclick={on_back}>{"Voltar"}</button>
                <button class="btn-primary" onclick={on_print}>{"Imprimir"}</button>
            </div>

            if let Some(message) = &*error {
                <div class="alert alert-danger">{message}</div>
            }

            if let Some(aluno) = &*header {
                <div class="agenda-header">
                    if let Some(logo) = &aluno.escola_logo {
                        <img class="escola-logo" src={logo.clone()} alt="Logo da escola" />
                    }
                    <div>
                        <h2>{&aluno.nome}</h2>
                        <div class="agenda-subtitle">
                            {format!("Matrícula: {}", aluno.matricula)}
                            if let Some(escola) = &aluno.escola_nome {
                                {format!(" | {}", escola)}
                            }
                        </div>
                    </div>
                </div>
            }

            if rows.is_empty() {
                <div class="empty-state">{"Nenhuma aula agendada"}</div>
            } else {
                <table class="agenda-table">
                    <thead>
                        <tr>
                            <th>{"Data"}</th>
                            <th>{"Dia"}</th>
                            <th>{"Horário"}</th>
                            <th>{"Disciplina"}</th>
                            <th>{"Professor"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.iter().map(|row| html! {
                            <tr key={row.id}>
                                <td>{&row.date_label}</td>
                                <td>{&row.weekday}</td>
                                <td>{&row.horario}</td>
                                <td>{&row.disciplina}</td>
                                <td>{&row.professor}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        </div>
    }
}
