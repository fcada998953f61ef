//! Resolver plumbing shared by every book field.
//!
//! Handlers produce an [`Outcome`] so that "not found" and "failed" stay
//! distinct internally. Only [`Outcome::into_response`] collapses them into the
//! `null` the GraphQL gateway expects.

mod error;
mod event;
mod field;
mod outcome;

pub use error::ResolverError;
pub use event::{ResolverEvent, ResolverInfo};
pub use field::ResolverField;
pub use outcome::Outcome;
