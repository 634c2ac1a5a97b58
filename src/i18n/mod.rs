// SPDX-License-Identifier: MPL-2.0
//! Internationalization support built on Fluent.
//!
//! UI strings live in `assets/i18n/*.ftl`, one file per locale, embedded
//! into the binary at compile time.

pub mod fluent;

pub use fluent::I18n;
