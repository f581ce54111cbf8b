//! Loan (empréstimo) model and due-date arithmetic

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

use super::enums::{BoolLit, DurationUnit};

/// Loan model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: i32,
    pub data_emprestimo: NaiveDate,
    pub data_devolucao: NaiveDate,
    pub status_finalizado: bool,
    pub usuario_id: i32,
    pub livro_id: i32,
}

/// Create loan request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLoan {
    pub id_usuario: i32,
    pub id_livro: i32,
    /// Loan date, strictly `YYYY-MM-DD`
    pub data_emprestimo: String,
    /// Duration magnitude; combined with `unidade_duracao` to compute the due date
    #[validate(range(min = 1, message = "duracao must be at least 1"))]
    pub duracao: i64,
    pub unidade_duracao: DurationUnit,
}

/// Edit loan request; `status` flips the finalized flag
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateLoan {
    pub status: Option<BoolLit>,
}

/// Parse a loan date, accepting exactly the 10-character `YYYY-MM-DD` shape
pub fn parse_loan_date(s: &str) -> AppResult<NaiveDate> {
    if s.len() != 10 {
        return Err(AppError::Validation(format!(
            "date must be formatted YYYY-MM-DD: {}",
            s
        )));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!("date must be formatted YYYY-MM-DD: {}", s))
    })
}

/// Advance a loan date by a duration specifier.
///
/// Day and week units are fixed-width; month and year units follow calendar
/// addition, clamping to the last day of shorter target months. Returns None
/// on arithmetic overflow.
pub fn compute_due_date(start: NaiveDate, amount: i64, unit: DurationUnit) -> Option<NaiveDate> {
    match unit {
        DurationUnit::Dia => start.checked_add_signed(Duration::try_days(amount)?),
        DurationUnit::Semana => start.checked_add_signed(Duration::try_weeks(amount)?),
        DurationUnit::Mes => {
            let months = u32::try_from(amount).ok()?;
            start.checked_add_months(Months::new(months))
        }
        DurationUnit::Ano => {
            let months = u32::try_from(amount).ok()?.checked_mul(12)?;
            start.checked_add_months(Months::new(months))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_loan_date(s).unwrap()
    }

    #[test]
    fn test_parse_loan_date_strict_shape() {
        assert!(parse_loan_date("2024-01-31").is_ok());
        assert!(parse_loan_date("2024-1-31").is_err());
        assert!(parse_loan_date("31-01-2024").is_err());
        assert!(parse_loan_date("2024-01-31T00:00").is_err());
        assert!(parse_loan_date("2024-13-01").is_err());
        assert!(parse_loan_date("2023-02-29").is_err());
        assert!(parse_loan_date("").is_err());
    }

    #[test]
    fn test_due_date_fixed_width_units() {
        assert_eq!(
            compute_due_date(date("2024-02-27"), 3, DurationUnit::Dia),
            Some(date("2024-03-01"))
        );
        assert_eq!(
            compute_due_date(date("2024-01-01"), 2, DurationUnit::Semana),
            Some(date("2024-01-15"))
        );
    }

    #[test]
    fn test_due_date_month_clamps_to_leap_day() {
        assert_eq!(
            compute_due_date(date("2024-01-31"), 1, DurationUnit::Mes),
            Some(date("2024-02-29"))
        );
    }

    #[test]
    fn test_due_date_month_clamps_in_common_year() {
        assert_eq!(
            compute_due_date(date("2023-01-31"), 1, DurationUnit::Mes),
            Some(date("2023-02-28"))
        );
    }

    #[test]
    fn test_due_date_year_clamps_leap_day() {
        assert_eq!(
            compute_due_date(date("2024-02-29"), 1, DurationUnit::Ano),
            Some(date("2025-02-28"))
        );
    }

    #[test]
    fn test_due_date_deterministic() {
        let a = compute_due_date(date("2024-06-15"), 6, DurationUnit::Mes);
        let b = compute_due_date(date("2024-06-15"), 6, DurationUnit::Mes);
        assert_eq!(a, b);
    }

    #[test]
    fn test_due_date_negative_magnitude_inverts() {
        let due = compute_due_date(date("2024-06-15"), -7, DurationUnit::Dia).unwrap();
        assert!(due < date("2024-06-15"));
        assert!(compute_due_date(date("2024-06-15"), -1, DurationUnit::Mes).is_none());
    }
}
