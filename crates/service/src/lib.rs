//! Service layer providing the hero store and token issuance.
//! - Separates business logic from the HTTP layer.
//! - Reuses the generic map store for the locking discipline.
//! - Provides clear error types and documented interfaces.

pub mod auth;
pub mod heroes;
pub mod storage;
