// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus the HTTP plumbing the presentation layer needs.
//!
//! # Available Adapters
//!
//! - [`pixabay`]: Pixabay image search (implements [`ImageSearch`])
//! - [`image_fetch`]: Thumbnail and preview downloads
//!
//! [`ImageSearch`]: crate::application::port::ImageSearch

pub mod image_fetch;
pub mod pixabay;

// Re-export main types for convenience
pub use image_fetch::ImageFetcher;
pub use pixabay::{PixabayClient, PixabaySettings};
