//! Avatar generation backends.
//!
//! Style resolution is a pluggable interface with two implementations: a
//! mock lookup that maps style tags to stock locators, and a Vertex AI
//! client for real inference. The backend is selected once at startup from
//! configuration (see [`create_generator`]).

mod factory;
mod generator;
mod mock;
mod vertex;

pub use factory::create_generator;
pub use generator::{AvatarGenerator, CustomizeOutcome, GeneratorError};
pub use mock::MockGenerator;
pub use vertex::VertexGenerator;
