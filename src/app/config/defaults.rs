// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Languages**: Default translation language pair
//! - **Debounce**: Quiet-period duration before a translation request fires

// ==========================================================================
// Language Defaults
// ==========================================================================

/// Default source language code for translation.
pub const DEFAULT_SOURCE_LANGUAGE: &str = "pt-BR";

/// Default target language code for translation.
pub const DEFAULT_TARGET_LANGUAGE: &str = "en-US";

// ==========================================================================
// Debounce Defaults
// ==========================================================================

/// Default debounce interval in milliseconds between the last keystroke
/// and the translation request.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Minimum allowed debounce interval in milliseconds.
pub const MIN_DEBOUNCE_MS: u64 = 100;

/// Maximum allowed debounce interval in milliseconds.
pub const MAX_DEBOUNCE_MS: u64 = 5000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Debounce validation
    assert!(MIN_DEBOUNCE_MS > 0);
    assert!(MAX_DEBOUNCE_MS >= MIN_DEBOUNCE_MS);
    assert!(DEFAULT_DEBOUNCE_MS >= MIN_DEBOUNCE_MS);
    assert!(DEFAULT_DEBOUNCE_MS <= MAX_DEBOUNCE_MS);

    // The default language pair must not translate a language into itself
    assert!(!DEFAULT_SOURCE_LANGUAGE.is_empty());
    assert!(!DEFAULT_TARGET_LANGUAGE.is_empty());
    assert!(DEFAULT_SOURCE_LANGUAGE.len() != DEFAULT_TARGET_LANGUAGE.len() || {
        let a = DEFAULT_SOURCE_LANGUAGE.as_bytes();
        let b = DEFAULT_TARGET_LANGUAGE.as_bytes();
        let mut i = 0;
        let mut differs = false;
        while i < a.len() {
            if a[i] != b[i] {
                differs = true;
            }
            i += 1;
        }
        differs
    });
};
