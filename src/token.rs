use std::fmt;

/// One lexical unit of an expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token<Real> {
    /// Non-negative literal. Negative values only arise from [`Operator::Neg`].
    Number(Real),
    Operator(Operator),
    LeftParen,
    RightParen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    // Binary, left associative.
    Add,
    Sub,
    Mul,
    Div,

    // Prefix negation, right associative.
    Neg,
}

impl Operator {
    /// Looks up a binary operator by its source symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub | Self::Neg => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Neg => 3,
        }
    }

    /// Number of operands consumed when applied.
    pub fn arity(self) -> usize {
        match self {
            Self::Neg => 1,
            _ => 2,
        }
    }

    pub fn is_prefix(self) -> bool {
        self.arity() == 1
    }

    /// Whether `self`, sitting on the operator stack, must be applied before
    /// `incoming` is pushed.
    pub fn resolves_before(self, incoming: Self) -> bool {
        if incoming.is_prefix() {
            // A prefix operator has no left operand yet, so nothing to its
            // left can be reduced.
            return false;
        }
        self.precedence() >= incoming.precedence()
    }

    /// Binary rule computing `lhs <op> rhs`. Division follows IEEE semantics,
    /// so `x / 0` yields an infinity or NaN. Prefix operators ignore `lhs`.
    pub fn apply_binary<Real: num_traits::Float>(self, lhs: Real, rhs: Real) -> Real {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Neg => -rhs,
        }
    }

    pub fn apply_unary<Real: num_traits::Float>(self, only: Real) -> Real {
        match self {
            Self::Neg => -only,
            _ => only,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
