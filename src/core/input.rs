//! Input shapes accepted by the machine.
//!
//! An input is either a single [`Token`] or an ordered batch of tokens. A
//! batch is only meaningful while the machine is loaded (states D and D′)
//! and only when every element is an ingredient.

use super::alphabet::Token;
use super::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// One input to the machine.
///
/// Serialized externally tagged: `{"single":"pod"}` or
/// `{"batch":["water","pod"]}`. In text a single token is the bare word and a
/// batch is bracketed, so `"pod"` and `"[pod]"` are different inputs. A bare
/// comma-separated list such as `"water,pod"` is also read as a batch.
///
/// # Example
///
/// ```rust
/// use coffee_fsm::core::{Input, Token};
///
/// let input: Input = "water, pod".parse().unwrap();
/// assert_eq!(input, Input::batch([Token::Water, Token::Pod]));
/// assert!(input.is_valid_batch());
/// assert_eq!(input.to_string(), "[water,pod]");
///
/// let single: Input = "pod".parse().unwrap();
/// assert_eq!(single, Input::Single(Token::Pod));
///
/// let one: Input = "[pod]".parse().unwrap();
/// assert_eq!(one, Input::batch([Token::Pod]));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Input {
    Single(Token),
    Batch(Vec<Token>),
}

/// Reasons a value fails batch validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputViolation {
    #[error("Expected a batch of ingredients, got the single token '{0}'")]
    NotABatch(Token),

    #[error("Batch is empty")]
    EmptyBatch,

    #[error("Batch element {position} is '{token}'; only water and pod may be batched")]
    NotAnIngredient { position: usize, token: Token },
}

impl Input {
    pub fn single(token: Token) -> Self {
        Input::Single(token)
    }

    pub fn batch(tokens: impl IntoIterator<Item = Token>) -> Self {
        Input::Batch(tokens.into_iter().collect())
    }

    /// The token of a single input.
    pub fn as_single(&self) -> Option<Token> {
        match self {
            Input::Single(token) => Some(*token),
            Input::Batch(_) => None,
        }
    }

    /// True for a non-empty batch made only of water and pod.
    pub fn is_valid_batch(&self) -> bool {
        match self {
            Input::Single(_) => false,
            Input::Batch(tokens) => {
                !tokens.is_empty() && tokens.iter().all(Token::is_ingredient)
            }
        }
    }

    /// Validate this input as a batch, reporting every violation at once.
    ///
    /// Agrees with [`Input::is_valid_batch`]; use this form when the caller
    /// needs to explain a rejection.
    ///
    /// # Example
    ///
    /// ```rust
    /// use coffee_fsm::core::{Input, InputViolation, Token};
    /// use stillwater::validation::Validation;
    ///
    /// let input = Input::batch([Token::Button, Token::Pod, Token::Clean]);
    /// match input.validate_batch() {
    ///     Validation::Failure(errors) => {
    ///         assert_eq!(errors.len(), 2);
    ///         assert!(errors.iter().any(|e| matches!(
    ///             e,
    ///             InputViolation::NotAnIngredient { position: 2, token: Token::Clean }
    ///         )));
    ///     }
    ///     Validation::Success(_) => panic!("expected violations"),
    /// }
    /// ```
    pub fn validate_batch(&self) -> Validation<(), NonEmptyVec<InputViolation>> {
        let tokens = match self {
            Input::Single(token) => return Validation::fail(InputViolation::NotABatch(*token)),
            Input::Batch(tokens) => tokens,
        };

        if tokens.is_empty() {
            return Validation::fail(InputViolation::EmptyBatch);
        }

        let checks: Vec<Validation<(), NonEmptyVec<InputViolation>>> = tokens
            .iter()
            .enumerate()
            .map(|(position, token)| {
                if token.is_ingredient() {
                    Validation::success(())
                } else {
                    Validation::fail(InputViolation::NotAnIngredient {
                        position,
                        token: *token,
                    })
                }
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Categorical code of the input column in generated datasets.
    ///
    /// Single tokens use [`Token::code`]; batches have no category and encode
    /// as `-1`.
    pub fn category_code(&self) -> i8 {
        match self {
            Input::Single(token) => token.code() as i8,
            Input::Batch(_) => -1,
        }
    }
}

impl From<Token> for Input {
    fn from(token: Token) -> Self {
        Input::Single(token)
    }
}

impl From<Vec<Token>> for Input {
    fn from(tokens: Vec<Token>) -> Self {
        Input::Batch(tokens)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Single(token) => write!(f, "{token}"),
            Input::Batch(tokens) => {
                f.write_str("[")?;
                for (i, token) in tokens.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{token}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl FromStr for Input {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        if let Some(rest) = text.strip_prefix('[') {
            let inner = rest
                .strip_suffix(']')
                .ok_or_else(|| ParseError::UnterminatedBatch(text.to_string()))?;
            if inner.trim().is_empty() {
                return Ok(Input::Batch(Vec::new()));
            }
            return parse_tokens(inner).map(Input::Batch);
        }

        let mut tokens = parse_tokens(text)?;
        if tokens.len() == 1 {
            Ok(Input::Single(tokens.remove(0)))
        } else {
            Ok(Input::Batch(tokens))
        }
    }
}

fn parse_tokens(list: &str) -> Result<Vec<Token>, ParseError> {
    list.split(',').map(str::parse::<Token>).collect()
}
