// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) to ensure testability.
//!
//! # Modules
//!
//! - [`search`]: Search types ([`Query`](search::Query), [`Page`](search::Page),
//!   [`PageSize`](search::PageSize), [`ImageResult`](search::ImageResult))

pub mod search;
