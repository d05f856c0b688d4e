use crate::parse::tokenize;
use crate::{validate, EvaluationError, EvaluatorConfig, FloatExt, Operator, Token};

use log::{debug, trace};

#[cfg(feature = "rayon")]
use rayon::prelude::{IntoParallelRefIterator, ParallelExtend, ParallelIterator};

/// Validates, tokenizes and evaluates infix expressions.
///
/// An `Evaluator` holds only its configuration, so one instance can be shared
/// freely between threads; evaluations never observe each other.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Runs the validator and tokenizer without evaluating.
    pub fn tokenize<Real: FloatExt>(
        &self,
        expression: &str,
    ) -> Result<Vec<Token<Real>>, EvaluationError> {
        let validated = validate(expression, &self.config)?;
        tokenize(&validated, self.config.unary_minus)
    }

    /// Calculates the value of `expression`.
    pub fn evaluate<Real: FloatExt>(&self, expression: &str) -> Result<Real, EvaluationError> {
        let result = self.tokenize(expression).and_then(|tokens| {
            debug!(
                "Reducing {} token(s) from {} byte expression",
                tokens.len(),
                expression.len()
            );
            reduce(&tokens)
        });
        if let Err(err) = &result {
            debug!("Evaluation failed: {err}");
        }
        result
    }

    /// Evaluates each expression independently. Results are in input order.
    pub fn evaluate_batch<Real: FloatExt, S: AsRef<str> + Sync>(
        &self,
        expressions: &[S],
    ) -> Vec<Result<Real, EvaluationError>> {
        let mut output = Vec::with_capacity(expressions.len());

        #[cfg(feature = "rayon")]
        {
            output.par_extend(
                expressions
                    .par_iter()
                    .map(|expression| self.evaluate(expression.as_ref())),
            );
        }
        #[cfg(not(feature = "rayon"))]
        {
            output.extend(
                expressions
                    .iter()
                    .map(|expression| self.evaluate(expression.as_ref())),
            );
        }

        output
    }
}

/// Entry on the operator stack.
#[derive(Clone, Copy, Debug)]
enum Pending {
    Operator(Operator),
    LeftParen,
}

/// Evaluates a token sequence with the shunting-yard algorithm, applying each
/// operator as soon as it is popped instead of building an output queue.
///
/// On success the operator stack is empty and exactly one operand remains.
pub fn reduce<Real: FloatExt>(tokens: &[Token<Real>]) -> Result<Real, EvaluationError> {
    // Both stacks are bounded by the token count.
    let mut operands: Vec<Real> = Vec::with_capacity(tokens.len());
    let mut pending: Vec<Pending> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match *token {
            Token::Number(value) => operands.push(value),
            Token::Operator(incoming) => {
                while let Some(&Pending::Operator(top)) = pending.last() {
                    if !top.resolves_before(incoming) {
                        break;
                    }
                    pending.pop();
                    apply(top, &mut operands)?;
                }
                pending.push(Pending::Operator(incoming));
            }
            Token::LeftParen => pending.push(Pending::LeftParen),
            Token::RightParen => loop {
                match pending.pop() {
                    Some(Pending::Operator(operator)) => apply(operator, &mut operands)?,
                    Some(Pending::LeftParen) => break,
                    None => return Err(EvaluationError::UnbalancedParentheses),
                }
            },
        }
    }

    // Drain remaining operators. An unclosed `(` stops the drain and is
    // reported by the terminal check below.
    while let Some(&Pending::Operator(top)) = pending.last() {
        pending.pop();
        apply(top, &mut operands)?;
    }

    match (operands.as_slice(), pending.is_empty()) {
        ([result], true) => Ok(*result),
        _ => Err(EvaluationError::MalformedExpression {
            operands: operands.len(),
            pending: pending.len(),
        }),
    }
}

fn apply<Real: FloatExt>(
    operator: Operator,
    operands: &mut Vec<Real>,
) -> Result<(), EvaluationError> {
    let needed = operator.arity();
    let available = operands.len();
    let underflow = EvaluationError::StackUnderflow {
        operator,
        needed,
        available,
    };
    let Some(start) = available.checked_sub(needed) else {
        return Err(underflow);
    };

    let mut args = operands.drain(start..);
    let value = match (args.next(), args.next()) {
        (Some(only), None) if operator.is_prefix() => operator.apply_unary(only),
        (Some(lhs), Some(rhs)) => operator.apply_binary(lhs, rhs),
        _ => return Err(underflow),
    };
    drop(args);

    operands.push(value);
    trace!("Applied `{operator}`, {} operand(s) on stack", operands.len());
    Ok(())
}
