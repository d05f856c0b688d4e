use crate::{EvaluationError, EvaluatorConfig};

fn is_allowed(c: char, decimals: bool) -> bool {
    matches!(c, '0'..='9' | '+' | '-' | '*' | '/' | '(' | ')') || (decimals && c == '.')
}

/// Strips all whitespace from `input` and checks every remaining character
/// against the accepted alphabet.
///
/// The check covers the whole string; the first offending character is
/// reported with its character index in `input`.
pub fn validate(input: &str, config: &EvaluatorConfig) -> Result<String, EvaluationError> {
    if input.len() > config.max_input_len {
        return Err(EvaluationError::InputTooLong {
            len: input.len(),
            max: config.max_input_len,
        });
    }

    let mut stripped = String::with_capacity(input.len());
    for (position, character) in input.chars().enumerate() {
        if character.is_whitespace() {
            continue;
        }
        if !is_allowed(character, config.decimals) {
            return Err(EvaluationError::InvalidCharacter {
                character,
                position,
            });
        }
        stripped.push(character);
    }
    Ok(stripped)
}
