use gloo::timers::future::TimeoutFuture;
use shared::agenda::{lessons_from_selection, selection_from_lessons};
use shared::date_format::display_date;
use shared::validation::{format_telefone, validate_aluno, FieldErrors};
use shared::{Aluno, Disciplina, Escola, Selection};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::calendar::Calendar;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const REDIRECT_DELAY_MS: u32 = 2000;
const LOAD_ERROR: &str =
    "Não foi possível carregar os dados do aluno. Por favor, tente novamente.";
const INVALID_FORM: &str = "Por favor, corrija os erros no formulário antes de continuar.";

#[derive(Properties, PartialEq)]
pub struct AlunoFormProps {
    pub api_client: ApiClient,
    /// Student being edited; `None` registers a new one
    #[prop_or_default]
    pub aluno_id: Option<u32>,
    pub default_lesson_time: AttrValue,
    /// Called after a successful save or on cancel
    pub on_done: Callback<()>,
}

#[derive(Clone, Copy)]
enum Field {
    Nome,
    Email,
    Telefone,
    Matricula,
}

impl Field {
    fn key(self) -> &'static str {
        match self {
            Field::Nome => "nome",
            Field::Email => "email",
            Field::Telefone => "telefone",
            Field::Matricula => "matricula",
        }
    }

    fn apply(self, aluno: &mut Aluno, value: String) {
        match self {
            Field::Nome => aluno.nome = value,
            Field::Email => aluno.email = value,
            Field::Telefone => aluno.telefone = format_telefone(&value),
            Field::Matricula => aluno.matricula = value,
        }
    }
}

#[function_component(AlunoForm)]
pub fn aluno_form(props: &AlunoFormProps) -> Html {
    let form = use_state(Aluno::default);
    let escolas = use_state(Vec::<Escola>::new);
    let disciplinas = use_state(Vec::<Disciplina>::new);
    let selection = use_state(Selection::new);
    let default_time = use_state(|| props.default_lesson_time.to_string());
    let use_default_time = use_state(|| false);
    let field_errors = use_state(FieldErrors::new);
    let error = use_state(|| Option::<String>::None);
    let success = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);
    let loading = use_state(|| false);

    // Load schools and subjects once
    {
        let api_client = props.api_client.clone();
        let escolas = escolas.clone();
        let disciplinas = disciplinas.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.list_escolas().await {
                    Ok(data) => escolas.set(data),
                    Err(e) => log::error!("Erro ao carregar escolas: {}", e),
                }
                match api_client.list_disciplinas().await {
                    Ok(data) => disciplinas.set(data),
                    Err(e) => log::error!("Erro ao carregar disciplinas: {}", e),
                }
            });
            || ()
        });
    }

    // Load the student in edit mode
    {
        let api_client = props.api_client.clone();
        let form = form.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with(props.aluno_id, move |aluno_id| {
            if let Some(id) = *aluno_id {
                spawn_local(async move {
                    loading.set(true);
                    match api_client.get_aluno(id).await {
                        Ok(mut aluno) => {
                            aluno.ensure_matricula();
                            form.set(aluno);
                        }
                        Err(e) => {
                            log::error!("Erro ao carregar aluno {}: {}", id, e);
                            error.set(Some(LOAD_ERROR.to_string()));
                        }
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    let on_field = |field: Field| {
        let form = form.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut aluno = (*form).clone();
            field.apply(&mut aluno, input.value());
            form.set(aluno);

            if field_errors.contains_key(field.key()) {
                let mut errors = (*field_errors).clone();
                errors.remove(field.key());
                field_errors.set(errors);
            }
        })
    };

    let on_escola_change = {
        let form = form.clone();
        let escolas = escolas.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let escola_id = select.value().parse::<u32>().ok();
            let mut aluno = (*form).clone();
            aluno.escola_id = escola_id;
            aluno.escola = escola_id
                .and_then(|id| escolas.iter().find(|escola| escola.id == Some(id)))
                .map(|escola| escola.nome.clone())
                .unwrap_or_default();
            form.set(aluno);
        })
    };

    let on_disciplina_toggle = |disciplina: Disciplina| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut aluno = (*form).clone();
            aluno.disciplinas.retain(|d| d.id != disciplina.id);
            if input.checked() {
                aluno.disciplinas.push(disciplina.clone());
            }
            form.set(aluno);
        })
    };

    let on_select_date = {
        let selection = selection.clone();
        Callback::from(move |dates: Selection| selection.set(dates))
    };

    let on_default_time_change = {
        let default_time = default_time.clone();
        Callback::from(move |time: String| default_time.set(time))
    };

    let on_use_default_time_change = {
        let use_default_time = use_default_time.clone();
        Callback::from(move |flag: bool| use_default_time.set(flag))
    };

    let on_cancel = {
        let on_done = props.on_done.clone();
        Callback::from(move |_: MouseEvent| on_done.emit(()))
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let aluno_id = props.aluno_id;
        let on_done = props.on_done.clone();
        let form = form.clone();
        let selection = selection.clone();
        let field_errors = field_errors.clone();
        let error = error.clone();
        let success = success.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);
            success.set(None);

            let errors = validate_aluno(&form);
            let valid = errors.is_empty();
            field_errors.set(errors);
            if !valid {
                error.set(Some(INVALID_FORM.to_string()));
                return;
            }

            let mut aluno = (*form).clone();
            if !selection.is_empty() {
                let subject_ids: Vec<u32> = aluno.disciplinas.iter().filter_map(|d| d.id).collect();
                aluno.aulas = lessons_from_selection(&selection, &subject_ids);
            }

            let api_client = api_client.clone();
            let on_done = on_done.clone();
            let form = form.clone();
            let error = error.clone();
            let success = success.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);
                let result = match aluno_id {
                    Some(id) => api_client
                        .update_aluno(id, &aluno)
                        .await
                        .map(|_| "Aluno atualizado com sucesso!"),
                    None => api_client
                        .create_aluno(&aluno)
                        .await
                        .map(|_| "Aluno cadastrado com sucesso!"),
                };
                submitting.set(false);

                match result {
                    Ok(message) => {
                        Logger::info_with_component(
                            "AlunoForm",
                            &format!("{} ({} aulas)", message, aluno.aulas.len()),
                        );
                        success.set(Some(message.to_string()));
                        if aluno_id.is_none() {
                            form.set(Aluno::default());
                        }
                        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        on_done.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "AlunoForm",
                            &format!("Erro ao processar o formulário: {}", e),
                        );
                        error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    let field_error = |field: Field| -> Html {
        match field_errors.get(field.key()) {
            Some(message) => html! { <div class="field-error">{message}</div> },
            None => html! {},
        }
    };

    let stored_lessons = selection_from_lessons(&form.aulas);
    let title = if props.aluno_id.is_some() { "Editar Aluno" } else { "Cadastrar Aluno" };

    if *loading {
        return html! { <div class="loading">{"Carregando dados do aluno..."}</div> };
    }

    html! {
        <form class="aluno-form" onsubmit={on_submit}>
            <h2>{title}</h2>

            if let Some(message) = &*error {
                <div class="alert alert-danger">{message}</div>
            }
            if let Some(message) = &*success {
                <div class="alert alert-success">{message}</div>
            }

            <div class="form-group">
                <label for="nome">{"Nome"}</label>
                <input id="nome" type="text" value={form.nome.clone()} oninput={on_field(Field::Nome)} />
                { field_error(Field::Nome) }
            </div>
            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input id="email" type="email" value={form.email.clone()} oninput={on_field(Field::Email)} />
                { field_error(Field::Email) }
            </div>
            <div class="form-group">
                <label for="telefone">{"Telefone"}</label>
                <input id="telefone" type="tel" value={form.telefone.clone()} oninput={on_field(Field::Telefone)} />
                { field_error(Field::Telefone) }
            </div>
            <div class="form-group">
                <label for="matricula">{"Matrícula"}</label>
                <input id="matricula" type="text" value={form.matricula.clone()} oninput={on_field(Field::Matricula)} />
                { field_error(Field::Matricula) }
            </div>

            <div class="form-group">
                <label for="escola">{"Escola"}</label>
                <select id="escola" onchange={on_escola_change}>
                    <option value="" selected={form.escola_id.is_none()}>{"Selecione uma escola"}</option>
                    { for escolas.iter().map(|escola| {
                        let id = escola.id.map(|id| id.to_string()).unwrap_or_default();
                        html! {
                            <option value={id} selected={escola.id.is_some() && escola.id == form.escola_id}>
                                {&escola.nome}
                            </option>
                        }
                    }) }
                </select>
            </div>

            <fieldset class="form-group disciplinas">
                <legend>{"Disciplinas"}</legend>
                { for disciplinas.iter().map(|disciplina| {
                    let checked = form.disciplinas.iter().any(|d| d.id == disciplina.id);
                    html! {
                        <label class="disciplina-option">
                            <input
                                type="checkbox"
                                {checked}
                                onchange={on_disciplina_toggle(disciplina.clone())}
                            />
                            {format!(" {}", disciplina.nome)}
                        </label>
                    }
                }) }
            </fieldset>

            if !stored_lessons.is_empty() && selection.is_empty() {
                <div class="stored-lessons">
                    <h4>{"Aulas agendadas"}</h4>
                    <ul>
                        { for stored_lessons.iter().map(|(date, time)| html! {
                            <li key={date.clone()}>{format!("{} às {}", display_date(date), time)}</li>
                        }) }
                    </ul>
                </div>
            }

            <Calendar
                {on_select_date}
                default_time={AttrValue::from((*default_time).clone())}
                use_default_time={*use_default_time}
                on_default_time_change={Some(on_default_time_change)}
                on_use_default_time_change={Some(on_use_default_time_change)}
            />

            <div class="form-actions">
                <button type="button" class="btn-secondary" onclick={on_cancel} disabled={*submitting}>
                    {"Cancelar"}
                </button>
                <button type="submit" class="btn-primary" disabled={*submitting}>
                    { if *submitting { "Salvando..." } else { "Salvar" } }
                </button>
            </div>
        </form>
    }
}
