// SPDX-License-Identifier: MPL-2.0
//! The static set of translatable languages.
//!
//! The translation service is addressed with BCP-47 tags, so each entry
//! pairs a display name with its tag. The list is fixed for the process
//! lifetime; selection widgets only ever offer these six entries, which is
//! what keeps the langpair invariant trivially true.

use std::fmt;

/// A language offered in the source/target pick lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Native display name (locale-neutral, shown as-is in pick lists).
    pub name: &'static str,
    /// BCP-47 tag sent to the translation service.
    pub code: &'static str,
}

/// All languages the panel can translate between.
pub const LANGUAGES: [Language; 6] = [
    Language {
        name: "Português",
        code: "pt-BR",
    },
    Language {
        name: "English",
        code: "en-US",
    },
    Language {
        name: "Español",
        code: "es-ES",
    },
    Language {
        name: "Français",
        code: "fr-FR",
    },
    Language {
        name: "Deutsch",
        code: "de-DE",
    },
    Language {
        name: "Italiano",
        code: "it-IT",
    },
];

/// Looks up a language by its BCP-47 tag.
///
/// Used to restore persisted selections; unknown tags yield `None` so the
/// caller can fall back to a default instead of trusting the config file.
#[must_use]
pub fn find(code: &str) -> Option<Language> {
    LANGUAGES.iter().copied().find(|lang| lang.code == code)
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
