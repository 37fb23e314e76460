use serde::{Deserialize, Serialize};

pub mod agenda;
pub mod calendar;
pub mod date_format;
pub mod error;
pub mod holidays;
pub mod session;
pub mod validation;

pub use calendar::{CalendarConfig, CalendarSelector, Clock, FixedClock, SelectedDate, Selection};
pub use error::{DateParseError, SessionError};

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Trailing day of the previous month shown before the 1st (inactive)
    PaddingBefore,
    /// Actual day within the displayed month (active, clickable)
    MonthDay,
    /// Leading day of the next month completing the last week (inactive)
    PaddingAfter,
}

/// A displayed month laid out as complete 7-column weeks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    /// Month index, 0 = January .. 11 = December
    pub month: u32,
    pub year: i32,
    pub days: Vec<CalendarDay>,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
}

impl CalendarMonth {
    /// Only the days belonging to the displayed month
    pub fn month_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days
            .iter()
            .filter(|d| d.day_type == CalendarDayType::MonthDay)
    }

    /// Days chunked by week, for row-based rendering
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }
}

/// Represents a single cell in the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day of month shown in the cell
    pub day: u32,
    pub day_type: CalendarDayType,
    /// Storage key (YYYY-MM-DD); only set for days of the displayed month
    pub date: Option<String>,
    pub is_selected: bool,
    pub is_today: bool,
    /// Holiday label when the day matches the holiday table
    pub holiday: Option<String>,
}

impl CalendarDay {
    pub fn is_active(&self) -> bool {
        self.day_type == CalendarDayType::MonthDay
    }
}

/// School subject ("disciplina"), e.g. an instrument course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disciplina {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Escola {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// One scheduled lesson as sent to the lesson API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aula {
    /// Lesson date (YYYY-MM-DD)
    pub data: String,
    /// Lesson time (HH:MM)
    pub horario: String,
    pub disciplina_id: Option<u32>,
}

/// A student record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Aluno {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefone: String,
    /// School name, denormalised for list display
    #[serde(default)]
    pub escola: String,
    #[serde(default, rename = "escolaId")]
    pub escola_id: Option<u32>,
    #[serde(default)]
    pub matricula: String,
    #[serde(default)]
    pub disciplinas: Vec<Disciplina>,
    #[serde(default)]
    pub aulas: Vec<Aula>,
    /// Next lesson timestamp as reported by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxima_aula: Option<String>,
}

impl Aluno {
    /// Enrollment number in format "A" followed by the zero-padded id, e.g. "A00042"
    pub fn generate_matricula(id: u32) -> String {
        format!("A{:05}", id)
    }

    /// Fill in a generated enrollment number for a stored student that has none
    pub fn ensure_matricula(&mut self) {
        if let (true, Some(id)) = (self.matricula.trim().is_empty(), self.id) {
            self.matricula = Self::generate_matricula(id);
        }
    }

    /// Comma-separated subject names, or "Sem disciplina"
    pub fn disciplinas_label(&self) -> String {
        if self.disciplinas.is_empty() {
            "Sem disciplina".to_string()
        } else {
            self.disciplinas
                .iter()
                .map(|d| d.nome.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    /// Case-insensitive match on name, enrollment number or school
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [&self.nome, &self.matricula, &self.escola]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

/// A lesson as returned for the printable agenda
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AulaAgendada {
    pub id: u32,
    /// Lesson date (YYYY-MM-DD)
    pub data_aula: String,
    /// Lesson time (HH:MM)
    pub horario: String,
    pub disciplina_nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professor_nome: Option<String>,
}

/// Student header printed on top of the agenda
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlunoAgenda {
    pub id: u32,
    pub nome: String,
    pub matricula: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escola_nome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escola_logo: Option<String>,
}

impl AlunoAgenda {
    /// Header for a stored student, with the school's logo when the school is known.
    /// Returns `None` for a student that has not been saved yet.
    pub fn from_aluno(aluno: &Aluno, escola: Option<&Escola>) -> Option<Self> {
        Some(Self {
            id: aluno.id?,
            nome: aluno.nome.clone(),
            matricula: aluno.matricula.clone(),
            escola_nome: escola
                .map(|e| e.nome.clone())
                .or_else(|| Some(aluno.escola.clone()).filter(|nome| !nome.is_empty())),
            escola_logo: escola.and_then(|e| e.logo.clone()),
        })
    }
}

/// Authenticated user kept in the session store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub nome: String,
    pub email: String,
    /// professor, coordenador or administrador
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perfil: Option<String>,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
}

impl User {
    /// Display name derived from the local part of an email, first letter capitalised
    pub fn name_from_email(email: &str) -> String {
        let local = email.split('@').next().unwrap_or_default();
        let mut chars = local.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    pub perfil: String,
}

/// Result of a login or signup attempt, shown as a form message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: String,
}

impl AuthOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aluno(nome: &str, matricula: &str, escola: &str) -> Aluno {
        Aluno {
            nome: nome.to_string(),
            matricula: matricula.to_string(),
            escola: escola.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_matricula() {
        assert_eq!(Aluno::generate_matricula(1), "A00001");
        assert_eq!(Aluno::generate_matricula(12345), "A12345");
        assert_eq!(Aluno::generate_matricula(123456), "A123456");
    }

    #[test]
    fn test_ensure_matricula() {
        let mut a = aluno("Maria", "", "Tutti");
        a.ensure_matricula();
        assert_eq!(a.matricula, "");

        a.id = Some(42);
        a.ensure_matricula();
        assert_eq!(a.matricula, "A00042");

        a.matricula = "M-7".to_string();
        a.ensure_matricula();
        assert_eq!(a.matricula, "M-7");
    }

    #[test]
    fn test_disciplinas_label() {
        let mut a = aluno("Maria", "A00001", "Tutti Sonora");
        assert_eq!(a.disciplinas_label(), "Sem disciplina");

        a.disciplinas = vec![
            Disciplina { id: Some(1), nome: "Piano".to_string(), descricao: None, icone: None },
            Disciplina { id: Some(2), nome: "Violão".to_string(), descricao: None, icone: None },
        ];
        assert_eq!(a.disciplinas_label(), "Piano, Violão");
    }

    #[test]
    fn test_matches_search() {
        let a = aluno("Maria Silva", "A00042", "Escola de Música Tutti Sonora");

        assert!(a.matches_search(""));
        assert!(a.matches_search("  maria "));
        assert!(a.matches_search("a00042"));
        assert!(a.matches_search("tutti"));
        assert!(!a.matches_search("joão"));
    }

    #[test]
    fn test_agenda_header() {
        let mut a = aluno("Maria", "A00001", "Tutti Sonora");
        assert!(AlunoAgenda::from_aluno(&a, None).is_none());

        a.id = Some(7);
        let header = AlunoAgenda::from_aluno(&a, None).unwrap();
        assert_eq!(header.id, 7);
        assert_eq!(header.escola_nome.as_deref(), Some("Tutti Sonora"));
        assert!(header.escola_logo.is_none());

        let escola = Escola {
            id: Some(1),
            nome: "Escola de Música Tutti Sonora".to_string(),
            endereco: None,
            telefone: None,
            email: None,
            website: None,
            logo: Some("/logos/tutti.png".to_string()),
        };
        let header = AlunoAgenda::from_aluno(&a, Some(&escola)).unwrap();
        assert_eq!(header.escola_nome.as_deref(), Some("Escola de Música Tutti Sonora"));
        assert_eq!(header.escola_logo.as_deref(), Some("/logos/tutti.png"));
    }

    #[test]
    fn test_name_from_email() {
        assert_eq!(User::name_from_email("maria@exemplo.com"), "Maria");
        assert_eq!(User::name_from_email("joão.p@exemplo.com"), "João.p");
        assert_eq!(User::name_from_email("@exemplo.com"), "");
    }

    #[test]
    fn test_aluno_serializes_escola_id_as_camel_case() {
        let mut a = aluno("Maria", "A00001", "Tutti");
        a.escola_id = Some(3);

        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["escolaId"], 3);
        assert!(json.get("id").is_none());

        let back: Aluno = serde_json::from_value(json).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_calendar_month_weeks() {
        let day = |n: u32, day_type: CalendarDayType| CalendarDay {
            day: n,
            day_type,
            date: None,
            is_selected: false,
            is_today: false,
            holiday: None,
        };
        let mut days: Vec<CalendarDay> =
            (1..=7).map(|n| day(n, CalendarDayType::MonthDay)).collect();
        days.push(day(8, CalendarDayType::MonthDay));
        days.extend((1..=6).map(|n| day(n, CalendarDayType::PaddingAfter)));

        let month = CalendarMonth { month: 0, year: 2025, days, first_day_of_week: 0 };
        assert_eq!(month.weeks().count(), 2);
        assert_eq!(month.month_days().count(), 8);
    }
}
