// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports between the search core and its adapters.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer receives an injected port implementation

pub mod port;
