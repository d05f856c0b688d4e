use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use infix_expr::{Evaluator, EvaluatorConfig};

/// Evaluates infix arithmetic expressions such as `2 + 3 * (4 - 1)`.
///
/// With no EXPRESSION, every line of standard input is evaluated.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reject inputs longer than this many bytes.
    #[arg(long)]
    max_input_len: Option<usize>,

    /// Reject decimal points.
    #[arg(long)]
    integers_only: bool,

    /// Treat every `-` as subtraction.
    #[arg(long)]
    no_unary_minus: bool,

    /// Words are joined with spaces into a single expression.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

impl Args {
    fn config(&self) -> EvaluatorConfig {
        let mut config = EvaluatorConfig::from_env();
        if let Some(max_input_len) = self.max_input_len {
            config.max_input_len = max_input_len;
        }
        if self.integers_only {
            config.decimals = false;
        }
        if self.no_unary_minus {
            config.unary_minus = false;
        }
        config
    }
}

fn report(evaluator: &Evaluator, expression: &str) -> bool {
    match evaluator.evaluate::<f64>(expression) {
        Ok(result) => {
            println!("The result is {result}");
            true
        }
        Err(e) => {
            eprintln!("Error calculating the expression: {e}");
            false
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let evaluator = Evaluator::new(args.config());
    log::debug!("Using {:?}", evaluator.config());

    let ok = if args.expression.is_empty() {
        let mut all_ok = true;
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("Failed to read standard input: {e}");
                    return ExitCode::FAILURE;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            all_ok &= report(&evaluator, &line);
        }
        all_ok
    } else {
        report(&evaluator, &args.expression.join(" "))
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
