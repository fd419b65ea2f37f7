//! Hero records and the concurrent in-memory store that holds them.

pub mod domain;
pub mod registry;
pub mod store;

pub use domain::{CreatePolicy, Hero};
pub use registry::HeroRegistry;
pub use store::HeroStore;
