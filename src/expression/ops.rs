/// Largest operator arity; sizes the child slots and evaluation buffers.
pub const MAX_ARITY: usize = 3;

/// Node codes. `Literal` and `Variable` are the 0-arity pseudo-codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    /// Floating-point literal.
    Literal = 0,
    /// Input variable.
    Variable,
    /// `neg`: arithmetic negation.
    Neg,
    /// `!`: logical not.
    Not,
    /// `abs`.
    Abs,
    /// `round`: `floor(a + 0.5)`.
    Round,
    /// `floor`.
    Floor,
    /// `ceil`.
    Ceil,
    /// `+`.
    Add,
    /// `-`.
    Sub,
    /// `*`.
    Mul,
    /// `/`.
    Div,
    /// `mod`: remainder with the sign of the dividend.
    Mod,
    /// `min`.
    Min,
    /// `max`.
    Max,
    /// `==`.
    Eq,
    /// `!=`.
    Ne,
    /// `>`.
    Gt,
    /// `>=`.
    Ge,
    /// `<`.
    Lt,
    /// `<=`.
    Le,
    /// `&&`.
    And,
    /// `||`.
    Or,
    /// `^^`: logical exclusive or.
    Xor,
    /// `clip`: `min(max(a, b), c)`.
    Clip,
    /// `?`: `b` if `a != 0` else `c`.
    IfElse,
}

/// Static description of one [`OpCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpDescriptor {
    /// The code this entry describes.
    pub code: OpCode,
    /// Number of operands (0 for the pseudo-codes).
    pub arity: usize,
    /// Lowercase source symbol; `None` for the pseudo-codes.
    pub symbol: Option<&'static str>,
}

const fn op(code: OpCode, arity: usize, symbol: &'static str) -> OpDescriptor {
    OpDescriptor {
        code,
        arity,
        symbol: Some(symbol),
    }
}

const fn pseudo(code: OpCode) -> OpDescriptor {
    OpDescriptor {
        code,
        arity: 0,
        symbol: None,
    }
}

/// Descriptor table, indexed by `OpCode as usize`.
pub static OP_TABLE: [OpDescriptor; 26] = [
    pseudo(OpCode::Literal),
    pseudo(OpCode::Variable),
    op(OpCode::Neg, 1, "neg"),
    op(OpCode::Not, 1, "!"),
    op(OpCode::Abs, 1, "abs"),
    op(OpCode::Round, 1, "round"),
    op(OpCode::Floor, 1, "floor"),
    op(OpCode::Ceil, 1, "ceil"),
    op(OpCode::Add, 2, "+"),
    op(OpCode::Sub, 2, "-"),
    op(OpCode::Mul, 2, "*"),
    op(OpCode::Div, 2, "/"),
    op(OpCode::Mod, 2, "mod"),
    op(OpCode::Min, 2, "min"),
    op(OpCode::Max, 2, "max"),
    op(OpCode::Eq, 2, "=="),
    op(OpCode::Ne, 2, "!="),
    op(OpCode::Gt, 2, ">"),
    op(OpCode::Ge, 2, ">="),
    op(OpCode::Lt, 2, "<"),
    op(OpCode::Le, 2, "<="),
    op(OpCode::And, 2, "&&"),
    op(OpCode::Or, 2, "||"),
    op(OpCode::Xor, 2, "^^"),
    op(OpCode::Clip, 3, "clip"),
    op(OpCode::IfElse, 3, "?"),
];

impl OpCode {
    /// Table entry for this code.
    pub fn descriptor(self) -> &'static OpDescriptor {
        &OP_TABLE[self as usize]
    }

    /// Number of operands.
    pub fn arity(self) -> usize {
        self.descriptor().arity
    }

    /// Find the operator spelled `symbol` (already lowercased).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        OP_TABLE
            .iter()
            .find(|d| d.symbol == Some(symbol))
            .map(|d| d.code)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/ops.rs"]
mod tests;
