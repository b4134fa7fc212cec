//! Bot-check widget primitives.

/// Site key used when the page does not configure one.
pub const DEFAULT_SITE_KEY: &str = "6LdjS7sqAAAAAGbSewbMxGFpVyEoVK7CMAHwsCjc";

/// Opaque token handed back by the bot-check widget. Verified by the backend only.
#[derive(Clone, PartialEq, Eq)]
pub struct CaptchaToken(String);

impl CaptchaToken {
    /// Wrap a widget token; empty strings are not tokens.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }
}

impl std::fmt::Debug for CaptchaToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CaptchaToken(<{} bytes>)", self.0.len())
    }
}

/// Widget configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotCheckConfig {
    /// Public site key the widget renders with.
    pub site_key: String,
}

impl BotCheckConfig {
    /// Config for a configured key, falling back to [`DEFAULT_SITE_KEY`] when blank.
    #[must_use]
    pub fn from_site_key(site_key: Option<String>) -> Self {
        let site_key = site_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_KEY.to_string());
        Self { site_key }
    }
}

impl Default for BotCheckConfig {
    fn default() -> Self {
        Self::from_site_key(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_widget_value_is_not_a_token() {
        assert!(CaptchaToken::new("").is_none());
        assert_eq!(
            CaptchaToken::new("tok"),
            Some(CaptchaToken("tok".to_string()))
        );
    }

    #[test]
    fn token_debug_hides_value() {
        let Some(token) = CaptchaToken::new("secret-token") else {
            panic!("expected token");
        };
        assert_eq!(format!("{token:?}"), "CaptchaToken(<12 bytes>)");
    }

    #[test]
    fn blank_site_key_falls_back_to_default() {
        let blank = BotCheckConfig::from_site_key(Some("  ".to_string()));
        assert_eq!(blank.site_key, DEFAULT_SITE_KEY);
        let configured = BotCheckConfig::from_site_key(Some(" k1 ".to_string()));
        assert_eq!(configured.site_key, "k1");
        assert_eq!(BotCheckConfig::default().site_key, DEFAULT_SITE_KEY);
    }
}
