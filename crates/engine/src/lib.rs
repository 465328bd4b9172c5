// In crates/engine/src/lib.rs

//! Layered parameter resolution for strategy instances.
//!
//! The execution engine calls [`resolve`] once per strategy instance at start-up and
//! treats the returned record as read-only input.

pub mod error;
pub mod registry;
pub mod resolver;

pub use error::{Error, Result};
pub use registry::{ParamRegistry, RegistryBuilder};
pub use resolver::{Layer, ResolvedParams, resolve};
