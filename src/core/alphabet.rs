//! The input alphabet of the coffee machine.

use super::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An atomic input symbol.
///
/// Tokens serialize as their lowercase word (`"water"`, `"pod"`, ...).
///
/// # Example
///
/// ```rust
/// use coffee_fsm::core::Token;
///
/// let token: Token = " Pod ".parse().unwrap();
/// assert_eq!(token, Token::Pod);
/// assert_eq!(token.code(), 1);
/// assert!(token.is_ingredient());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    Water,
    Pod,
    Button,
    Clean,
}

impl Token {
    /// Every token, ordered by categorical code.
    pub const ALL: [Token; 4] = [Token::Water, Token::Pod, Token::Button, Token::Clean];

    /// The lowercase word for this token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Pod => "pod",
            Self::Button => "button",
            Self::Clean => "clean",
        }
    }

    /// Categorical code used by dataset tooling: water=0, pod=1, button=2, clean=3.
    pub fn code(&self) -> u8 {
        match self {
            Self::Water => 0,
            Self::Pod => 1,
            Self::Button => 2,
            Self::Clean => 3,
        }
    }

    /// Water and pod are the only tokens that may appear in a batch.
    pub fn is_ingredient(&self) -> bool {
        matches!(self, Self::Water | Self::Pod)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Token {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim();
        Token::ALL
            .into_iter()
            .find(|token| token.as_str().eq_ignore_ascii_case(word))
            .ok_or_else(|| ParseError::UnknownToken(word.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_dataset_encoding() {
        assert_eq!(Token::Water.code(), 0);
        assert_eq!(Token::Pod.code(), 1);
        assert_eq!(Token::Button.code(), 2);
        assert_eq!(Token::Clean.code(), 3);
    }

    #[test]
    fn only_water_and_pod_are_ingredients() {
        assert!(Token::Water.is_ingredient());
        assert!(Token::Pod.is_ingredient());
        assert!(!Token::Button.is_ingredient());
        assert!(!Token::Clean.is_ingredient());
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!("clean".parse::<Token>(), Ok(Token::Clean));
        assert_eq!("  BUTTON\n".parse::<Token>(), Ok(Token::Button));
        assert_eq!("Water".parse::<Token>(), Ok(Token::Water));
    }

    #[test]
    fn parse_rejects_unknown_words() {
        assert_eq!(
            "milk".parse::<Token>(),
            Err(ParseError::UnknownToken("milk".to_string()))
        );
        assert!("".parse::<Token>().is_err());
    }

    #[test]
    fn display_matches_serde_name() {
        for token in Token::ALL {
            let json = serde_json::to_string(&token).unwrap();
            assert_eq!(json, format!("\"{}\"", token));
        }
    }
}
