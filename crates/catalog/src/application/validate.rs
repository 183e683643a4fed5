//! Book Validation
//!
//! Field-level rules evaluated before any write reaches storage. All rules
//! run even after the first failure, so the caller gets the complete
//! field -> message map in one response.
//!
//! Messages follow the established wording of the public API and must not
//! be rephrased.

use chrono::NaiveDate;
use kernel::error::app_error::FieldErrors;
use serde_json::Value;

use crate::domain::entity::book::BookDraft;
use crate::domain::repository::BookRepository;
use crate::error::{CatalogError, CatalogResult};

/// Raw book fields as received from the caller
///
/// Every field is optional at this stage; the validator decides what
/// "missing" means. `available_qty` stays a raw JSON value so a non-integer
/// input reaches the integer rule instead of failing deserialization.
#[derive(Debug, Clone, Default)]
pub struct BookInput {
    pub name: Option<String>,
    pub publication_date: Option<String>,
    pub available_qty: Option<Value>,
}

/// Validate a book write
///
/// `exclude_id` is the record being updated, exempt from its own
/// uniqueness check. Returns the validated draft, or the accumulated
/// field errors as [`CatalogError::Validation`].
pub async fn validate_book<R>(
    repo: &R,
    input: &BookInput,
    exclude_id: Option<i64>,
) -> CatalogResult<BookDraft>
where
    R: BookRepository,
{
    let mut errors = FieldErrors::new();

    let name = validate_name(repo, input, exclude_id, &mut errors).await?;
    let publication_date = validate_publication_date(input, &mut errors);
    let available_qty = validate_available_qty(input, &mut errors);

    if !errors.is_empty() {
        return Err(CatalogError::Validation(errors));
    }

    // All three are Some once errors is empty
    match (name, publication_date, available_qty) {
        (Some(name), Some(publication_date), Some(available_qty)) => Ok(BookDraft {
            name,
            publication_date,
            available_qty,
        }),
        _ => Err(CatalogError::Internal(
            "Validation passed with missing fields".to_string(),
        )),
    }
}

async fn validate_name<R>(
    repo: &R,
    input: &BookInput,
    exclude_id: Option<i64>,
    errors: &mut FieldErrors,
) -> CatalogResult<Option<String>>
where
    R: BookRepository,
{
    let name = match &input.name {
        Some(name) if !name.trim().is_empty() => name.clone(),
        _ => {
            push(errors, "name", "The name field is required.");
            return Ok(None);
        }
    };

    // Uniqueness is scoped to live rows; a trashed book does not block
    // reuse of its name.
    if repo.exists_by_name(&name, exclude_id).await? {
        push(errors, "name", "The name has already been taken.");
        return Ok(None);
    }

    Ok(Some(name))
}

fn validate_publication_date(input: &BookInput, errors: &mut FieldErrors) -> Option<NaiveDate> {
    let raw = match &input.publication_date {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => {
            push(errors, "publication_date", "The publication date field is required.");
            return None;
        }
    };

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            push(errors, "publication_date", "The publication date is not a valid date.");
            None
        }
    }
}

fn validate_available_qty(input: &BookInput, errors: &mut FieldErrors) -> Option<i64> {
    let raw = match &input.available_qty {
        Some(raw) if !raw.is_null() => raw,
        _ => {
            push(errors, "available_qty", "The available qty field is required.");
            return None;
        }
    };

    // Numeric strings pass the integer rule, matching the public API
    let qty = match raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match qty {
        Some(qty) => Some(qty),
        None => {
            push(errors, "available_qty", "The available qty must be an integer.");
            None
        }
    }
}

fn push(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}
