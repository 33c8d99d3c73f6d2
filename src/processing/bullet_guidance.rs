//! Inline guidance for individual experience and project bullets

use crate::error::{Result, ResumeScorerError};
use crate::processing::text_processor::has_numeric_impact;
use aho_corasick::{AhoCorasick, Anchored, Input, StartKind};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;

const ACTION_VERBS: &[&str] = &[
    "built", "developed", "designed", "implemented", "led", "improved", "created",
    "optimized", "automated", "managed", "architected", "launched", "delivered",
    "analyzed", "established", "coordinated", "streamlined", "enhanced", "reduced",
    "increased", "achieved",
];

/// Bullets shorter than this (in characters) are not nagged about numbers yet.
const MIN_LENGTH_FOR_IMPACT_HINT: usize = 10;

lazy_static! {
    static ref SHARED_GUIDE: BulletGuide = BulletGuide::default();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletHint {
    ActionVerb,
    NumericImpact,
}

impl BulletHint {
    pub fn message(&self) -> &'static str {
        match self {
            BulletHint::ActionVerb => "Start with a strong action verb.",
            BulletHint::NumericImpact => "Add measurable impact (numbers).",
        }
    }
}

impl fmt::Display for BulletHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Checks a bullet for a leading action verb and a number
pub struct BulletGuide {
    verb_matcher: AhoCorasick,
}

impl BulletGuide {
    pub fn new() -> Result<Self> {
        let verb_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .start_kind(StartKind::Anchored)
            .build(ACTION_VERBS)
            .map_err(|e| ResumeScorerError::Scoring(format!("Failed to build action verb matcher: {}", e)))?;

        Ok(Self { verb_matcher })
    }

    /// Hints for one bullet, most important first.
    pub fn check(&self, text: &str) -> Vec<BulletHint> {
        let trimmed = text.trim();
        let mut hints = Vec::new();

        if !trimmed.is_empty() && !self.starts_with_action_verb(trimmed) {
            hints.push(BulletHint::ActionVerb);
        }

        if !has_numeric_impact(text) && trimmed.chars().count() > MIN_LENGTH_FOR_IMPACT_HINT {
            hints.push(BulletHint::NumericImpact);
        }

        hints
    }

    fn starts_with_action_verb(&self, text: &str) -> bool {
        let input = Input::new(text).anchored(Anchored::Yes);
        self.verb_matcher.find(input).is_some()
    }

    pub fn verb_count(&self) -> usize {
        self.verb_matcher.patterns_len()
    }
}

impl Default for BulletGuide {
    fn default() -> Self {
        Self::new().expect("Failed to create default bullet guide")
    }
}

/// Process-wide guide, built on first use.
pub fn shared_guide() -> &'static BulletGuide {
    &SHARED_GUIDE
}

/// Convenience wrapper around [`BulletGuide::check`].
pub fn check_bullet_guidance(text: &str) -> Vec<BulletHint> {
    shared_guide().check(text)
}
