//! # IO Module
//!
//! Conversion between the public DTOs of the `shared` crate and the domain
//! commands and models. Transport code (HTTP, CLI, ...) sits on top of this
//! layer and is not part of the crate.

pub mod mappers;
