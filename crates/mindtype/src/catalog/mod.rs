//! Static per-type tables and the shared type-code validation.

mod careers;
mod reports;
mod type_code;

pub use careers::{careers_for, lookup_careers, CareerMatch};
pub use reports::{lookup_report, report_for, ReportRecord, TypeReport};
pub use type_code::{InvalidType, TypeCode};

/// Failure looking up or validating a type code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    InvalidType(#[from] InvalidType),
    #[error("no catalog entry for type {type_code}")]
    NotFound { type_code: TypeCode },
}
