//! Criteria-based provider selection
//!
//! A caller criterion only counts against providers that declare the same
//! key. Declared values are lists separated by `;` or `,`; a criterion
//! matches when any list entry matches. Any mismatch disqualifies the
//! provider outright.

use std::collections::BTreeMap;

use activa_domain::constants::{
    CRITERIA_CONTENT_TYPE, CRITERIA_EXTENSION, CRITERIA_MATCH_WEIGHT, CRITERIA_OUTPUT_TYPE,
    MEMBER_MATCH_WEIGHT, MODULE_MATCH_WEIGHT,
};
use activa_domain::value_objects::TypeName;

use super::ProviderInfo;

/// What a caller is looking for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderCriteria {
    values: BTreeMap<String, String>,
    module: Option<String>,
    member: Option<String>,
}

impl ProviderCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a criterion; keys compare ignoring case
    #[must_use]
    pub fn criterion(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// File extension, with or without the leading dot
    #[must_use]
    pub fn extension(self, extension: impl Into<String>) -> Self {
        self.criterion(CRITERIA_EXTENSION, extension)
    }

    #[must_use]
    pub fn content_type(self, content_type: impl Into<String>) -> Self {
        self.criterion(CRITERIA_CONTENT_TYPE, content_type)
    }

    #[must_use]
    pub fn output_type(self, output_type: &TypeName) -> Self {
        self.criterion(CRITERIA_OUTPUT_TYPE, output_type.to_string())
    }

    /// Prefer providers declared by `module`
    #[must_use]
    pub fn from_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Prefer providers declared by `member`
    #[must_use]
    pub fn from_member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Score of `provider`; zero means not a candidate
    pub fn score(&self, provider: &ProviderInfo) -> u32 {
        let mut score = 0;
        for (key, wanted) in &self.values {
            let Some(declared) = provider.criterion(key) else {
                continue;
            };
            if !criterion_matches(key, declared, wanted) {
                return 0;
            }
            score += CRITERIA_MATCH_WEIGHT;
        }
        if self
            .module
            .as_deref()
            .is_some_and(|module| module.eq_ignore_ascii_case(provider.module()))
        {
            score += MODULE_MATCH_WEIGHT;
        }
        if self
            .member
            .as_deref()
            .is_some_and(|member| member.eq_ignore_ascii_case(provider.member()))
        {
            score += MEMBER_MATCH_WEIGHT;
        }
        score
    }

    /// Highest scoring provider; the earliest declared wins ties
    pub fn select<'a, I>(&self, providers: I) -> Option<&'a ProviderInfo>
    where
        I: IntoIterator<Item = &'a ProviderInfo>,
    {
        let mut best: Option<(u32, &ProviderInfo)> = None;
        for provider in providers {
            let score = self.score(provider);
            if score == 0 {
                continue;
            }
            let better = match best {
                None => true,
                Some((top, current)) => {
                    score > top || (score == top && provider.order() < current.order())
                }
            };
            if better {
                best = Some((score, provider));
            }
        }
        best.map(|(_, provider)| provider)
    }
}

fn criterion_matches(key: &str, declared: &str, wanted: &str) -> bool {
    let entries = declared
        .split([';', ','])
        .map(str::trim)
        .filter(|entry| !entry.is_empty());

    if key.eq_ignore_ascii_case(CRITERIA_EXTENSION) {
        let wanted = normalize_extension(wanted);
        return entries.map(normalize_extension).any(|entry| entry.eq_ignore_ascii_case(wanted));
    }
    if key.eq_ignore_ascii_case(CRITERIA_OUTPUT_TYPE)
        && let Ok(wanted) = TypeName::parse(wanted.trim())
    {
        return entries.into_iter().any(|entry| {
            TypeName::parse(entry).is_ok_and(|declared| declared.matches(&wanted))
        });
    }
    let wanted = wanted.trim();
    entries.into_iter().any(|entry| entry.eq_ignore_ascii_case(wanted))
}

fn normalize_extension(extension: &str) -> &str {
    let extension = extension.trim();
    extension.strip_prefix('.').unwrap_or(extension)
}
