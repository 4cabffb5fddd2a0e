//! Service layer for the singers catalog.
//! - Separates request validation from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Every repository call is a single statement in its own transaction.

pub mod errors;
pub mod singer;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
