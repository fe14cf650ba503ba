//! Macros for writing input scripts.

/// Build a `Vec<Input>` from lowercase token names.
///
/// A bare name is a single-token input; a bracketed list is a batch.
///
/// # Example
///
/// ```
/// use coffee_fsm::core::{Input, Token};
/// use coffee_fsm::inputs;
///
/// let script = inputs![pod, water, [water, pod], button, clean];
/// assert_eq!(script.len(), 5);
/// assert_eq!(script[0], Input::Single(Token::Pod));
/// assert_eq!(script[2], Input::batch([Token::Water, Token::Pod]));
/// ```
#[macro_export]
macro_rules! inputs {
    (@token water) => { $crate::core::Token::Water };
    (@token pod) => { $crate::core::Token::Pod };
    (@token button) => { $crate::core::Token::Button };
    (@token clean) => { $crate::core::Token::Clean };

    (@input [$($token:ident),* $(,)?]) => {
        $crate::core::Input::Batch(vec![$($crate::inputs!(@token $token)),*])
    };
    (@input $token:ident) => {
        $crate::core::Input::Single($crate::inputs!(@token $token))
    };

    ($($item:tt),* $(,)?) => {
        vec![$($crate::inputs!(@input $item)),*]
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Input, Token};

    #[test]
    fn inputs_macro_builds_singles_and_batches() {
        let script = inputs![water, pod, button, clean, [pod, water]];
        assert_eq!(
            script,
            vec![
                Input::Single(Token::Water),
                Input::Single(Token::Pod),
                Input::Single(Token::Button),
                Input::Single(Token::Clean),
                Input::batch([Token::Pod, Token::Water]),
            ]
        );
    }

    #[test]
    fn inputs_macro_accepts_empty_and_invalid_batches() {
        let script = inputs![[], [water, button],];
        assert_eq!(script[0], Input::Batch(Vec::new()));
        assert!(!script[1].is_valid_batch());
    }

    #[test]
    fn empty_script() {
        let script: Vec<Input> = inputs![];
        assert!(script.is_empty());
    }
}
