/// Binary operators recognized by the grammar.
///
/// `Add` and `Sub` form the low precedence tier, `Mul` and `Div` the high one.
/// All four are left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, always true division.
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// The tree produced by the parser is left-nested for chains of operators of
/// the same tier, so `8 - 3 - 2` is `BinaryOp(BinaryOp(8, 3), 2)`. Parentheses
/// only shape the tree and leave no node behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value:    i64,
        /// Byte offset of the literal in the source.
        position: usize,
    },
    /// A binary operation, e.g. `a + b` or `x / y`.
    BinaryOp {
        /// The operator.
        op:       BinaryOperator,
        /// Left-hand operand, evaluated first.
        left:     Box<Self>,
        /// Right-hand operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
}

impl Expr {
    /// Byte offset in the source this node was parsed from.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. } | Self::BinaryOp { position, .. } => *position,
        }
    }
}

/// Prints the expression fully parenthesized, so the grouping chosen by the
/// parser is visible: `1 + 2 * 3` prints as `(1 + (2 * 3))`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { op, left, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}
