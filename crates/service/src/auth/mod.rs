//! Auth module: credential validation and token minting.
//!
//! The issuer shares no state with the hero store; tokens are stateless and
//! never stored server-side.

pub mod domain;
pub mod errors;
pub mod service;

pub use service::AuthService;
