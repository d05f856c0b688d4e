use crate::{EvaluationError, FloatExt, Operator, Token};

use pest::error::InputLocation;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "grammar.pest"] // relative to project `src`
struct TokenParser;

/// Scans validated, whitespace-free input into tokens using maximal munch.
///
/// With `unary_minus`, a `-` at the start of input, after an operator, or
/// after `(` becomes [`Operator::Neg`] instead of [`Operator::Sub`].
pub(crate) fn tokenize<Real: FloatExt>(
    validated: &str,
    unary_minus: bool,
) -> Result<Vec<Token<Real>>, EvaluationError> {
    let root = TokenParser::parse(Rule::tokens, validated)
        .map_err(tokenization_error)?
        .next()
        .ok_or_else(|| EvaluationError::TokenizationFailed {
            position: 0,
            message: "no tokens found".into(),
        })?;

    let mut tokens: Vec<Token<Real>> = Vec::with_capacity(validated.len());
    for pair in root.into_inner() {
        let token = match pair.as_rule() {
            Rule::number => Token::Number(parse_number(pair.as_str())?),
            Rule::operator => {
                let prefix_position = unary_minus
                    && matches!(
                        tokens.last(),
                        None | Some(Token::Operator(_)) | Some(Token::LeftParen)
                    );
                Token::Operator(resolve_operator(pair.as_str(), prefix_position)?)
            }
            Rule::left_paren => Token::LeftParen,
            Rule::right_paren => Token::RightParen,
            Rule::EOI => continue,
            x => unreachable!("Unexpected token rule {x:?}"),
        };
        tokens.push(token);
    }

    if tokens.is_empty() {
        return Err(EvaluationError::TokenizationFailed {
            position: 0,
            message: "no tokens found".into(),
        });
    }
    Ok(tokens)
}

fn parse_number<Real: FloatExt>(literal: &str) -> Result<Real, EvaluationError> {
    literal
        .parse::<Real>()
        .map_err(|_| EvaluationError::InvalidNumber {
            literal: literal.to_string(),
        })
}

fn resolve_operator(symbol: &str, prefix_position: bool) -> Result<Operator, EvaluationError> {
    let operator =
        Operator::from_symbol(symbol).ok_or_else(|| EvaluationError::UnknownOperator {
            symbol: symbol.to_string(),
        })?;
    Ok(match operator {
        Operator::Sub if prefix_position => Operator::Neg,
        other => other,
    })
}

fn tokenization_error(err: pest::error::Error<Rule>) -> EvaluationError {
    let position = match err.location {
        InputLocation::Pos(pos) => pos,
        InputLocation::Span((start, _)) => start,
    };
    EvaluationError::TokenizationFailed {
        position,
        message: err.variant.message().into_owned(),
    }
}
