//! Authentication primitives.
//!
//! - [`jwt`] -- validation of access tokens issued by the hosted identity
//!   provider, plus a token generator for tests and local tooling.

pub mod jwt;
