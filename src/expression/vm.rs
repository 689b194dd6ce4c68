use crate::expression::ast::{Arena, Node, NodeId};
use crate::expression::ops::{MAX_ARITY, OpCode};
use crate::expression::parser::Program;

impl Program {
    /// Evaluate the program with `vars[i]` bound to alphabet letter `i`.
    ///
    /// Never fails: division by zero and friends yield IEEE infinities/NaN.
    /// Panics if `vars` is shorter than the alphabet the program was
    /// compiled against.
    pub fn eval(&self, vars: &[f64]) -> f64 {
        assert!(
            vars.len() >= self.var_count,
            "expected {} variable values, got {}",
            self.var_count,
            vars.len()
        );
        eval_node(&self.arena, self.root, vars)
    }
}

/// Post-order evaluation of the subtree rooted at `id`.
pub fn eval_node(arena: &Arena, id: NodeId, vars: &[f64]) -> f64 {
    match *arena.get(id) {
        Node::Literal(v) => v,
        Node::Variable(index) => vars[index],
        Node::Operator { code, args } => {
            let mut tmp = [0.0f64; MAX_ARITY];
            for (slot, &child) in tmp.iter_mut().zip(&args[..code.arity()]) {
                *slot = eval_node(arena, child, vars);
            }
            apply(code, tmp)
        }
    }
}

fn apply(code: OpCode, t: [f64; MAX_ARITY]) -> f64 {
    let [a, b, c] = t;
    match code {
        OpCode::Neg => -a,
        OpCode::Not => truth(a == 0.0),
        OpCode::Abs => a.abs(),
        OpCode::Round => (a + 0.5).floor(),
        OpCode::Floor => a.floor(),
        OpCode::Ceil => a.ceil(),
        OpCode::Add => a + b,
        OpCode::Sub => a - b,
        OpCode::Mul => a * b,
        OpCode::Div => a / b,
        // f64 `%` is fmod: the sign follows the dividend.
        OpCode::Mod => a % b,
        OpCode::Min => min(a, b),
        OpCode::Max => max(a, b),
        OpCode::Eq => truth(a == b),
        OpCode::Ne => truth(a != b),
        OpCode::Gt => truth(a > b),
        OpCode::Ge => truth(a >= b),
        OpCode::Lt => truth(a < b),
        OpCode::Le => truth(a <= b),
        OpCode::And => truth(a != 0.0 && b != 0.0),
        OpCode::Or => truth(a != 0.0 || b != 0.0),
        OpCode::Xor => truth((a != 0.0) ^ (b != 0.0)),
        // Not a true clamp when b > c; callers keep the bounds ordered.
        OpCode::Clip => min(max(a, b), c),
        OpCode::IfElse => {
            if a != 0.0 {
                b
            } else {
                c
            }
        }
        OpCode::Literal | OpCode::Variable => unreachable!("pseudo-code {code:?} in operator node"),
    }
}

fn truth(v: bool) -> f64 {
    if v { 1.0 } else { 0.0 }
}

// `f64::min`/`max` ignore NaN operands; these keep the first operand unless
// the second compares strictly past it.
fn min(a: f64, b: f64) -> f64 {
    if b < a { b } else { a }
}

fn max(a: f64, b: f64) -> f64 {
    if a < b { b } else { a }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/vm.rs"]
mod tests;
