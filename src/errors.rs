//! Error types with diagnostics using miette
//!
//! Shape operations are total and never fail; these errors cover the
//! fixture registry, the arithmetic helpers and the todo service.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Fixture Errors
// ============================================================================

/// Errors raised while looking up or tearing down fixtures
#[derive(Error, Diagnostic, Debug, PartialEq)]
pub enum FixtureError {
    #[error("unknown fixture: {name}")]
    #[diagnostic(code(shapebench::fixture::unknown))]
    Unknown {
        name: String,
        #[help]
        suggestion: Option<String>,
    },

    #[error("fixture {name} is not a {expected}")]
    #[diagnostic(code(shapebench::fixture::wrong_kind))]
    WrongKind { name: String, expected: &'static str },

    #[error("group fixture {name} is still shared by {holders} consumer(s)")]
    #[diagnostic(
        code(shapebench::fixture::still_shared),
        help("drop every handle obtained from the group before tearing it down")
    )]
    StillShared { name: String, holders: usize },
}

// ============================================================================
// Arithmetic Errors
// ============================================================================

#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ArithError {
    #[error("division by zero")]
    #[diagnostic(
        code(shapebench::arith::division_by_zero),
        help("{dividend} cannot be divided by zero")
    )]
    DivisionByZero { dividend: i64 },

    #[error("integer overflow")]
    #[diagnostic(
        code(shapebench::arith::overflow),
        help("{a} {op} {b} does not fit in a 64-bit integer")
    )]
    Overflow { op: char, a: i64, b: i64 },
}

// ============================================================================
// Service Errors
// ============================================================================

/// Errors from fetching the todo list
#[derive(Error, Diagnostic, Debug)]
pub enum ServiceError {
    #[error("todo service answered with HTTP {status}")]
    #[diagnostic(code(shapebench::todos::http))]
    Http { status: u16 },

    #[error("todo payload is a {found}, expected a list")]
    #[diagnostic(code(shapebench::todos::not_a_list))]
    NotAList { found: &'static str },

    #[error("malformed todo payload")]
    #[diagnostic(code(shapebench::todos::decode))]
    Decode(#[from] serde_json::Error),

    #[error("transport failure: {message}")]
    #[diagnostic(code(shapebench::todos::transport))]
    Transport { message: String },
}
