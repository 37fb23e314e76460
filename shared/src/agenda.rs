//! Lesson records built from a calendar selection, and the rows of the
//! printable lesson agenda.

use chrono::{NaiveDate, NaiveDateTime};

use crate::calendar::Selection;
use crate::date_format::{agenda_date, parse_storage_key, weekday_name};
use crate::{Aula, AulaAgendada};

/// One lesson record per selected date, in chronological order.
/// Every lesson is assigned the first chosen subject, if any.
pub fn lessons_from_selection(selection: &Selection, subject_ids: &[u32]) -> Vec<Aula> {
    let disciplina_id = subject_ids.first().copied();
    selection
        .iter()
        .map(|(data, horario)| Aula {
            data: data.clone(),
            horario: horario.clone(),
            disciplina_id,
        })
        .collect()
}

/// Rebuild a selection from lessons already stored for a student
pub fn selection_from_lessons(aulas: &[Aula]) -> Selection {
    aulas
        .iter()
        .filter(|aula| parse_storage_key(&aula.data).is_ok())
        .map(|aula| (aula.data.clone(), aula.horario.clone()))
        .collect()
}

/// A printable line of the lesson agenda
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaRow {
    pub id: u32,
    /// e.g. "15-mar-23"
    pub date_label: String,
    /// e.g. "quarta-feira"
    pub weekday: String,
    pub horario: String,
    pub disciplina: String,
    pub professor: String,
}

impl From<&AulaAgendada> for AgendaRow {
    fn from(aula: &AulaAgendada) -> Self {
        let (date_label, weekday) = match parse_storage_key(&aula.data_aula) {
            Ok(date) => (agenda_date(date), weekday_name(date).to_string()),
            Err(e) => {
                log::warn!("Agenda: lesson {} has an unreadable date: {}", aula.id, e);
                ("Data inválida".to_string(), "Dia inválido".to_string())
            }
        };

        Self {
            id: aula.id,
            date_label,
            weekday,
            horario: aula.horario.clone(),
            disciplina: aula.disciplina_nome.clone(),
            professor: aula.professor_nome.clone().unwrap_or_default(),
        }
    }
}

/// Agenda rows ordered by date, then time
pub fn build_agenda(aulas: &[AulaAgendada]) -> Vec<AgendaRow> {
    let mut sorted: Vec<&AulaAgendada> = aulas.iter().collect();
    sorted.sort_by(|a, b| (&a.data_aula, &a.horario).cmp(&(&b.data_aula, &b.horario)));
    sorted.into_iter().map(AgendaRow::from).collect()
}

/// Next-lesson label for the student list, e.g. "15/05/2023 14:30"
pub fn format_next_lesson(proxima_aula: Option<&str>) -> String {
    let Some(value) = proxima_aula.filter(|v| !v.trim().is_empty()) else {
        return "Não agendada".to_string();
    };

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return dt.format("%d/%m/%Y %H:%M").to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }

    "Data inválida".to_string()
}
