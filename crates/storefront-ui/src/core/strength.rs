//! Password strength estimation.
//!
//! # Design
//! - Scoring is an injected capability so views and tests can swap the estimator.
//! - The hint is a pure function of the score; nothing else feeds the message.

use crate::i18n::TextKey;
use zxcvbn::zxcvbn;

/// Highest score an estimator can return.
pub const MAX_SCORE: u8 = 4;

/// Discrete strength score in `0..=4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Build a score, clamping anything above the maximum.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value > MAX_SCORE {
            Self(MAX_SCORE)
        } else {
            Self(value)
        }
    }

    /// Raw score value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Estimates how hard a password is to guess.
pub trait PasswordScorer {
    /// Score a candidate password.
    fn score(&self, password: &str) -> PasswordScore;
}

/// Default estimator backed by `zxcvbn`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZxcvbnScorer;

impl PasswordScorer for ZxcvbnScorer {
    fn score(&self, password: &str) -> PasswordScore {
        if password.is_empty() {
            return PasswordScore::new(0);
        }
        let entropy = zxcvbn(password, &[]);
        PasswordScore::new(u8::from(entropy.score()))
    }
}

/// Feedback shown under the password input during registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthHint {
    /// Top score.
    Strong,
    /// Scored, but below the top.
    Weak,
}

impl StrengthHint {
    /// Hint for a score; zero and unset scores produce no hint.
    #[must_use]
    pub fn from_score(score: Option<PasswordScore>) -> Option<Self> {
        match score.map(PasswordScore::value) {
            Some(MAX_SCORE) => Some(Self::Strong),
            Some(1..MAX_SCORE) => Some(Self::Weak),
            _ => None,
        }
    }

    /// Message under the password input.
    #[must_use]
    pub const fn message(self) -> TextKey {
        match self {
            Self::Strong => TextKey::StrengthStrong,
            Self::Weak => TextKey::StrengthWeak,
        }
    }

    /// CSS tone class.
    #[must_use]
    pub const fn tone_class(self) -> &'static str {
        match self {
            Self::Strong => "text-success",
            Self::Weak => "text-error",
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_clamps_to_maximum() {
        assert_eq!(PasswordScore::new(9).value(), MAX_SCORE);
        assert_eq!(PasswordScore::new(2).value(), 2);
    }

    #[test]
    fn hint_follows_score_bands() {
        assert_eq!(StrengthHint::from_score(None), None);
        assert_eq!(StrengthHint::from_score(Some(PasswordScore::new(0))), None);
        for weak in 1..=3 {
            assert_eq!(
                StrengthHint::from_score(Some(PasswordScore::new(weak))),
                Some(StrengthHint::Weak)
            );
        }
        assert_eq!(
            StrengthHint::from_score(Some(PasswordScore::new(4))),
            Some(StrengthHint::Strong)
        );
    }

    #[test]
    fn zxcvbn_separates_common_from_random() {
        let scorer = ZxcvbnScorer;
        assert_eq!(scorer.score("").value(), 0);
        assert_eq!(scorer.score("password").value(), 0);
        assert_eq!(scorer.score("x9#Lq!vR27@mZp$wK4&nT8").value(), MAX_SCORE);
    }

    #[test]
    fn hints_have_distinct_tones() {
        assert_ne!(
            StrengthHint::Strong.tone_class(),
            StrengthHint::Weak.tone_class()
        );
        assert_eq!(StrengthHint::Weak.message(), TextKey::StrengthWeak);
    }
}
