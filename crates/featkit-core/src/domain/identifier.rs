//! Feature name validation and case derivation.
//!
//! A raw name like `userProfile` or `user-profile` becomes a
//! [`FeatureIdentifier`] whose `kebab` form is canonical. Every other form is
//! derived from `kebab`, so two raw spellings of the same name always produce
//! the same paths and the same rendered templates.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{instrument, trace};

use crate::domain::error::{DomainError, InvalidNameReason};

/// A validated feature name together with its derived case forms.
///
/// Invariant: `pascal` and `camel` are pure functions of `kebab`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FeatureIdentifier {
    raw: String,
    kebab: String,
    pascal: String,
    camel: String,
}

impl FeatureIdentifier {
    /// The name exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Dash-separated lowercase form, used for every path.
    pub fn kebab(&self) -> &str {
        &self.kebab
    }

    /// `UserProfile`
    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    /// `userProfile`
    pub fn camel(&self) -> &str {
        &self.camel
    }
}

impl fmt::Display for FeatureIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kebab)
    }
}

impl FromStr for FeatureIdentifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NameNormalizer::normalize(s)
    }
}

/// Validates raw names and derives their canonical forms.
pub struct NameNormalizer;

impl NameNormalizer {
    /// Validate `raw` and derive its kebab, pascal and camel forms.
    ///
    /// `raw` must start with an ASCII letter and continue with ASCII letters,
    /// digits or `-`. A lowercase letter directly followed by an uppercase one
    /// marks a word boundary (`userProfile` → `user-profile`).
    #[instrument(level = "debug")]
    pub fn normalize(raw: &str) -> Result<FeatureIdentifier, DomainError> {
        Self::validate(raw)?;

        let kebab = to_kebab(raw);
        let pascal = to_pascal(&kebab);
        let camel = to_camel(&pascal);

        trace!(%kebab, %pascal, %camel, "feature name normalized");

        Ok(FeatureIdentifier {
            raw: raw.to_owned(),
            kebab,
            pascal,
            camel,
        })
    }

    fn validate(raw: &str) -> Result<(), DomainError> {
        let invalid = |reason| DomainError::InvalidName {
            name: raw.to_owned(),
            reason,
        };

        let mut chars = raw.chars().enumerate();
        match chars.next() {
            None => return Err(invalid(InvalidNameReason::Empty)),
            Some((_, first)) if !first.is_ascii_alphabetic() => {
                return Err(invalid(InvalidNameReason::InvalidLeadingCharacter(first)));
            }
            Some(_) => {}
        }

        for (position, ch) in chars {
            if !(ch.is_ascii_alphanumeric() || ch == '-') {
                return Err(invalid(InvalidNameReason::InvalidCharacter { ch, position }));
            }
        }

        Ok(())
    }
}

fn to_kebab(raw: &str) -> String {
    let mut kebab = String::with_capacity(raw.len() + 4);
    let mut prev: Option<char> = None;

    for ch in raw.chars() {
        if let Some(p) = prev {
            if p.is_ascii_lowercase() && ch.is_ascii_uppercase() {
                kebab.push('-');
            }
        }
        kebab.push(ch.to_ascii_lowercase());
        prev = Some(ch);
    }

    kebab
}

fn to_pascal(kebab: &str) -> String {
    kebab
        .split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn to_camel(pascal: &str) -> String {
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
