//! Prompt pair sent to a generative-text backend.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Prompt size variant.
///
/// `Compact` only tightens output-size guardrails to reduce
/// truncation-induced parse failures on retry; semantic content is
/// identical to `Full`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptVariant {
    /// Full output budget
    Full,
    /// Reduced output budget for the compact-retry tier
    Compact,
}

/// System/user instruction pair for one backend invocation.
///
/// `system` carries static instructions and the target schema; `user`
/// carries only trip-specific data. The split exists so injected
/// content in user-supplied fields cannot override generation
/// instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct PromptPair {
    /// Static instructions and schema description
    system: String,
    /// Trip-specific data only
    user: String,
    /// Size variant this pair was built for
    variant: PromptVariant,
}

impl PromptPair {
    /// Creates a prompt pair.
    pub fn new(
        system: impl Into<String>,
        user: impl Into<String>,
        variant: PromptVariant,
    ) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            variant,
        }
    }

    /// Creates a builder for `PromptPair`.
    pub fn builder() -> PromptPairBuilder {
        PromptPairBuilder::default()
    }
}
