//! Reusable form validation rules.
//!
//! Every rule except `Required` lets an empty value through, so optional
//! fields are only checked when filled in. A field reports the message of the
//! first rule it fails.

use std::collections::BTreeMap;

use crate::Aluno;

/// Field name -> error message, for fields that failed validation
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationRule {
    Required { field: String },
    Email,
    /// Brazilian phone number, with or without area code
    Telefone,
    MinLength { length: usize, field: String },
    MaxLength { length: usize, field: String },
    NumberInRange { min: f64, max: f64, field: String },
}

impl ValidationRule {
    pub fn required(field: &str) -> Self {
        Self::Required { field: field.to_string() }
    }

    pub fn email() -> Self {
        Self::Email
    }

    pub fn telefone() -> Self {
        Self::Telefone
    }

    pub fn min_length(length: usize, field: &str) -> Self {
        Self::MinLength { length, field: field.to_string() }
    }

    pub fn max_length(length: usize, field: &str) -> Self {
        Self::MaxLength { length, field: field.to_string() }
    }

    pub fn number_in_range(min: f64, max: f64, field: &str) -> Self {
        Self::NumberInRange { min, max, field: field.to_string() }
    }

    /// Whether `value` passes this rule
    pub fn test(&self, value: &str) -> bool {
        match self {
            Self::Required { .. } => !value.trim().is_empty(),
            _ if value.is_empty() => true,
            Self::Email => is_email(value),
            Self::Telefone => is_telefone(value),
            Self::MinLength { length, .. } => value.chars().count() >= *length,
            Self::MaxLength { length, .. } => value.chars().count() <= *length,
            Self::NumberInRange { min, max, .. } => value
                .trim()
                .parse::<f64>()
                .map(|n| n >= *min && n <= *max)
                .unwrap_or(false),
        }
    }

    /// Message shown when the rule fails
    pub fn message(&self) -> String {
        match self {
            Self::Required { field } => format!("O campo {} é obrigatório.", field),
            Self::Email => "Formato de email inválido.".to_string(),
            Self::Telefone => "Formato de telefone inválido.".to_string(),
            Self::MinLength { length, field } => {
                format!("O campo {} deve ter no mínimo {} caracteres.", field, length)
            }
            Self::MaxLength { length, field } => {
                format!("O campo {} deve ter no máximo {} caracteres.", field, length)
            }
            Self::NumberInRange { min, max, field } => {
                format!("O campo {} deve estar entre {} e {}.", field, min, max)
            }
        }
    }
}

/// Validate one value against rules, in order. Returns the first failure's message.
pub fn validate_field(value: &str, rules: &[ValidationRule]) -> Result<(), String> {
    match rules.iter().find(|rule| !rule.test(value)) {
        Some(rule) => Err(rule.message()),
        None => Ok(()),
    }
}

/// Validate a whole form. Fields missing from `values` are validated as empty.
pub fn validate_form(
    values: &BTreeMap<String, String>,
    rules: &[(&str, Vec<ValidationRule>)],
) -> FieldErrors {
    rules
        .iter()
        .filter_map(|(field, field_rules)| {
            let value = values.get(*field).map(String::as_str).unwrap_or_default();
            validate_field(value, field_rules)
                .err()
                .map(|message| (field.to_string(), message))
        })
        .collect()
}

/// Rules applied by the student form
pub fn aluno_rules() -> Vec<(&'static str, Vec<ValidationRule>)> {
    vec![
        ("nome", vec![ValidationRule::required("Nome"), ValidationRule::max_length(100, "Nome")]),
        ("email", vec![ValidationRule::email()]),
        ("telefone", vec![ValidationRule::telefone()]),
        ("matricula", vec![ValidationRule::max_length(20, "Matrícula")]),
    ]
}

pub fn validate_aluno(aluno: &Aluno) -> FieldErrors {
    let values: BTreeMap<String, String> = [
        ("nome", &aluno.nome),
        ("email", &aluno.email),
        ("telefone", &aluno.telefone),
        ("matricula", &aluno.matricula),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.clone()))
    .collect();

    validate_form(&values, &aluno_rules())
}

/// Mask phone digits as "(DD) DDDD-DDDD" or "(DD) DDDDD-DDDD", keeping at most 11 digits
pub fn format_telefone(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 2 {
        digits
    } else if len <= 6 {
        format!("({}) {}", &digits[..2], &digits[2..])
    } else if len <= 10 {
        format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..])
    } else {
        format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..11])
    }
}

/// `local@domain.tld` with no whitespace and a single '@'
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Digits of the value form an 8-digit landline (first digit 2-9) or a
/// 9-digit mobile (first digit 9), optionally after a 2-digit area code
fn is_telefone(value: &str) -> bool {
    let digits: Vec<u8> = value.bytes().filter(u8::is_ascii_digit).collect();

    let subscriber = |d: &[u8]| match d.len() {
        8 => (b'2'..=b'9').contains(&d[0]),
        9 => d[0] == b'9',
        _ => false,
    };

    subscriber(&digits) || (digits.len() >= 10 && digits[0] != b'0' && subscriber(&digits[2..]))
}
