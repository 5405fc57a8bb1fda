// SPDX-License-Identifier: MPL-2.0
//! Style functions shared by the gallery widgets.

pub mod button;
pub mod container;
pub mod tooltip;
