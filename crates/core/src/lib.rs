//! `orderflow-core`: identifiers, the domain error and the entity traits.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{OrderId, ProductId};
pub use value_object::ValueObject;
