// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an image search gallery built with the Iced GUI framework.
//!
//! It queries a remote image search service page by page, shows the results
//! as a thumbnail grid with a full-size preview, and is localized with Fluent.
//!
//! The search behavior lives in [`search`], a UI-independent state machine
//! driven by events; [`ui::gallery`] renders it and turns its effects into
//! Iced tasks.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod search;
pub mod ui;
