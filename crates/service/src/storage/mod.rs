//! Storage abstractions for the service layer
//!
//! Contains the reusable in-memory map store so services sharing small maps
//! do not each reinvent the locking discipline.

pub mod memory_map_store;
