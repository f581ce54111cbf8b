//! Shared wire-level enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Boolean flag as accepted on the wire.
///
/// Clients spell booleans loosely: the JSON literals `true`/`false`, the
/// integers `1`/`0`, or the strings `"True"`/`"1"`/`"False"`/`"0"`. The
/// accepted spellings are a closed set; everything else is rejected.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum BoolLit {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl BoolLit {
    /// Resolve the literal to a boolean, rejecting unknown spellings
    pub fn as_bool(&self) -> AppResult<bool> {
        match self {
            BoolLit::Bool(b) => Ok(*b),
            BoolLit::Int(1) => Ok(true),
            BoolLit::Int(0) => Ok(false),
            BoolLit::Int(other) => Err(AppError::Validation(format!(
                "unexpected boolean value: {}",
                other
            ))),
            BoolLit::Text(s) => Self::parse_spelling(s),
        }
    }

    /// Parse a textual boolean spelling (used for query parameters too)
    pub fn parse_spelling(s: &str) -> AppResult<bool> {
        match s {
            "True" | "1" => Ok(true),
            "False" | "0" => Ok(false),
            _ => Err(AppError::Validation(format!(
                "unexpected boolean value: {}",
                s
            ))),
        }
    }
}

/// Unit of a loan duration specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Dia,
    Semana,
    Mes,
    Ano,
}

impl DurationUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Dia => "dia",
            DurationUnit::Semana => "semana",
            DurationUnit::Mes => "mes",
            DurationUnit::Ano => "ano",
        }
    }
}

impl std::fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_spellings() {
        assert_eq!(BoolLit::Bool(true).as_bool().unwrap(), true);
        assert_eq!(BoolLit::Int(1).as_bool().unwrap(), true);
        assert_eq!(BoolLit::Text("True".to_string()).as_bool().unwrap(), true);
        assert_eq!(BoolLit::Text("1".to_string()).as_bool().unwrap(), true);
    }

    #[test]
    fn test_falsy_spellings() {
        assert_eq!(BoolLit::Bool(false).as_bool().unwrap(), false);
        assert_eq!(BoolLit::Int(0).as_bool().unwrap(), false);
        assert_eq!(BoolLit::Text("False".to_string()).as_bool().unwrap(), false);
        assert_eq!(BoolLit::Text("0".to_string()).as_bool().unwrap(), false);
    }

    #[test]
    fn test_unknown_spellings_rejected() {
        assert!(BoolLit::Int(2).as_bool().is_err());
        assert!(BoolLit::Int(-1).as_bool().is_err());
        assert!(BoolLit::Text("true".to_string()).as_bool().is_err());
        assert!(BoolLit::Text("yes".to_string()).as_bool().is_err());
        assert!(BoolLit::Text(String::new()).as_bool().is_err());
    }
}
