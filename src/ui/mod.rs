// SPDX-License-Identifier: MPL-2.0
//! UI components and shared visual infrastructure.

pub mod design_tokens;
pub mod navbar;
pub mod panel;
pub mod settings;
pub mod styles;
pub mod theming;
pub mod widgets;
