use log::warn;

/// Default cap on raw input length, in bytes.
pub const DEFAULT_MAX_INPUT_LEN: usize = 4096;

/// Knobs for the validator and tokenizer. The reduction itself has none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Inputs longer than this many bytes are rejected before validation.
    pub max_input_len: usize,
    /// Accept `.` and decimal number literals such as `1.5`, `2.` and `.5`.
    pub decimals: bool,
    /// Read a `-` with no left operand as negation.
    pub unary_minus: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            decimals: true,
            unary_minus: true,
        }
    }
}

impl EvaluatorConfig {
    /// Defaults overlaid with `INFIX_MAX_INPUT_LEN`, `INFIX_DECIMALS` and
    /// `INFIX_UNARY_MINUS` when they are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = lookup("INFIX_MAX_INPUT_LEN") {
            match value.trim().parse() {
                Ok(len) => config.max_input_len = len,
                Err(_) => warn!("Ignoring INFIX_MAX_INPUT_LEN={value:?}: not an integer"),
            }
        }
        if let Some(value) = lookup("INFIX_DECIMALS") {
            match parse_flag(&value) {
                Some(flag) => config.decimals = flag,
                None => warn!("Ignoring INFIX_DECIMALS={value:?}: not a boolean"),
            }
        }
        if let Some(value) = lookup("INFIX_UNARY_MINUS") {
            match parse_flag(&value) {
                Some(flag) => config.unary_minus = flag,
                None => warn!("Ignoring INFIX_UNARY_MINUS={value:?}: not a boolean"),
            }
        }
        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
