// SPDX-License-Identifier: MPL-2.0
//! `iced_tradutor` is a small desktop translator built with the Iced GUI
//! framework.
//!
//! It fetches machine translations from the public MyMemory HTTP API with a
//! debounced request cycle, and demonstrates internationalization with
//! Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_tradutor/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod language;
pub mod translator;
pub mod ui;

pub use app::config;
