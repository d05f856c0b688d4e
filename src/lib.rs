//! Infix arithmetic expression evaluator.
//!
//! Input goes through three stages: a validator that strips whitespace and
//! rejects characters outside `0-9 + - * / ( ) .`, a tokenizer that splits the
//! result into numbers, operators and parentheses, and a two-stack
//! (shunting-yard) reduction that applies operators as soon as precedence
//! allows. `*` and `/` bind tighter than `+` and `-`; operators of equal
//! precedence associate left to right.
//!
//! Nothing is cached between calls, so evaluating the same string twice always
//! gives the same answer.
//!
//! # Example
//!
//! ```rust
//! use infix_expr::*;
//!
//! assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
//! assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
//! assert_eq!(evaluate("5 / 0"), Ok(f64::INFINITY));
//!
//! let err = evaluate("2 + abc").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidCharacter);
//!
//! let strict = Evaluator::new(EvaluatorConfig {
//!     decimals: false,
//!     ..Default::default()
//! });
//! assert_eq!(strict.evaluate::<f32>("8 / 4 * 3"), Ok(6.0));
//! assert!(strict.evaluate::<f32>("1.5").is_err());
//! ```

mod config;
mod error;
mod evaluate;
mod parse;
mod token;
mod validate;

/// Uses the [`pest`] parsing expression grammar language.
///
/// ```text
#[doc = include_str!("grammar.pest")]
/// ```
pub mod grammar_doc {}

pub use config::*;
pub use error::*;
pub use evaluate::*;
pub use token::*;
pub use validate::validate;

use once_cell::sync::Lazy;

/// Numeric types an expression can be evaluated in.
pub trait FloatExt: num_traits::Float + std::str::FromStr + Send + Sync {}
impl FloatExt for f32 {}
impl FloatExt for f64 {}

static DEFAULT_EVALUATOR: Lazy<Evaluator> = Lazy::new(Evaluator::default);

/// Evaluates `expression` as `f64` with the default [`EvaluatorConfig`].
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    DEFAULT_EVALUATOR.evaluate(expression)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_precedence() {
        assert_eq!(evaluate("2+3*4"), Ok(14.0));
        assert_eq!(evaluate("1 * 2 + 3 * 4"), Ok(14.0));
        assert_eq!(evaluate("2*3+4"), Ok(10.0));
        assert_eq!(evaluate("8 / 4 * 3"), Ok(6.0));
    }

    #[test]
    fn left_associativity() {
        assert_eq!(evaluate("10-3-2"), Ok(5.0));
        assert_eq!(evaluate("100 / 10 / 5"), Ok(2.0));
        assert_eq!(evaluate("1 - 2 + 3"), Ok(2.0));
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
        assert_eq!(evaluate("10-(3-2)"), Ok(9.0));
        assert_eq!(evaluate("((((7))))"), Ok(7.0));
        assert_eq!(evaluate("2 * (3 + (4 - 1)) / 3"), Ok(4.0));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(evaluate("5/0"), Ok(f64::INFINITY));
        assert_eq!(evaluate("-5/0"), Ok(f64::NEG_INFINITY));
        assert!(evaluate("0/0").unwrap().is_nan());
    }

    #[test]
    fn decimals() {
        assert_eq!(evaluate("1.5+2"), Ok(3.5));
        assert_eq!(evaluate(".5 * 4"), Ok(2.0));
        assert_eq!(
            evaluate("1.2.3").map_err(|e| e.kind()),
            Err(ErrorKind::TokenizationFailed)
        );
    }

    #[test]
    fn unary_minus() {
        assert_eq!(evaluate("-5+3"), Ok(-2.0));
        assert_eq!(evaluate("3*-2"), Ok(-6.0));
        assert_eq!(evaluate("-(2+3)*2"), Ok(-10.0));
        assert_eq!(evaluate("4 - -1"), Ok(5.0));

        let literal = Evaluator::new(EvaluatorConfig {
            unary_minus: false,
            ..Default::default()
        });
        assert_eq!(
            literal.evaluate::<f64>("-5+3").map_err(|e| e.kind()),
            Err(ErrorKind::StackUnderflow)
        );
        assert_eq!(literal.evaluate::<f64>("10-3-2"), Ok(5.0));
    }

    #[test]
    fn unbalanced_parentheses() {
        assert_eq!(
            evaluate("(2+3").map_err(|e| e.kind()),
            Err(ErrorKind::MalformedExpression)
        );
        assert_eq!(evaluate("2+3)"), Err(EvaluationError::UnbalancedParentheses));
        assert_eq!(evaluate(")("), Err(EvaluationError::UnbalancedParentheses));
    }

    #[test]
    fn invalid_characters() {
        assert_eq!(
            evaluate("2+abc"),
            Err(EvaluationError::InvalidCharacter {
                character: 'a',
                position: 2
            })
        );
        assert_eq!(
            evaluate("2 ** 3 % 2").map_err(|e| e.kind()),
            Err(ErrorKind::InvalidCharacter)
        );
    }

    #[test]
    fn malformed_trailing_operator() {
        for input in ["2+", "2*", "2+*3", "*", "()", "2(3)"] {
            let err = evaluate(input).unwrap_err();
            assert!(
                matches!(
                    err.kind(),
                    ErrorKind::StackUnderflow | ErrorKind::MalformedExpression
                ),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn empty_input() {
        for input in ["", "   "] {
            assert_eq!(
                evaluate(input).map_err(|e| e.kind()),
                Err(ErrorKind::TokenizationFailed)
            );
        }
    }

    #[test]
    fn idempotent() {
        let first = evaluate("(1 + 2) * 3 - 4 / 8");
        for _ in 0..10 {
            assert_eq!(evaluate("(1 + 2) * 3 - 4 / 8"), first);
        }
        assert_eq!(first, Ok(8.5));
    }

    #[test]
    fn long_input_rejected() {
        let input = "1+".repeat(DEFAULT_MAX_INPUT_LEN) + "1";
        assert_eq!(
            evaluate(&input).map_err(|e| e.kind()),
            Err(ErrorKind::InputTooLong)
        );

        let input = "1+".repeat(1000) + "1";
        assert_eq!(evaluate(&input), Ok(1001.0));
    }

    #[test]
    fn tokenize_only() {
        let tokens = Evaluator::default().tokenize::<f64>(" 1 + ( 2 ) ").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(1.0),
                Token::Operator(Operator::Add),
                Token::LeftParen,
                Token::Number(2.0),
                Token::RightParen,
            ]
        );
        assert_eq!(reduce(&tokens), Ok(3.0));
    }

    #[test]
    fn f32_evaluation() {
        let evaluator = Evaluator::default();
        assert_eq!(evaluator.evaluate::<f32>("1.5 * 4 - 1"), Ok(5.0f32));
    }
}
