pub mod prelude {
    pub use super::format;
}

use std::fmt::{self, Display, Write};

use crate::formula::Formula;

const IMPLIES: &str = "→";
const AND: &str = "∧";
const OR: &str = "∨";
const NOT: &str = "¬";

/// format renders a formula with the minimal parenthesization used everywhere in the prover.
///
/// The rules follow the usual binding strength (¬ tightest, then ∧, then ∨, then →):
/// - operands of `→` and `∧` are wrapped when they are an implication or a disjunction
/// - operands of `∨` are wrapped only when they are an implication
/// - `¬` is written `¬P` over a variable and `¬(...)` over anything else
///
/// # Example
/// ```text
/// P → (Q → P)
/// P ∧ Q → P
/// P ∧ (Q ∨ R)
/// ¬(P ∧ Q)
/// ```
pub fn format(formula: &Formula) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_formula(&mut out, formula);
    out
}

fn write_formula<W: Write>(out: &mut W, formula: &Formula) -> fmt::Result {
    match formula {
        Formula::Var(name) => out.write_str(name),
        Formula::Implies(left, right) => write_binary(out, left, IMPLIES, right, wraps_in_implies),
        Formula::And(left, right) => write_binary(out, left, AND, right, wraps_in_and),
        Formula::Or(left, right) => write_binary(out, left, OR, right, wraps_in_or),
        Formula::Not(inner) => match &**inner {
            Formula::Var(name) => write!(out, "{}{}", NOT, name),
            _ => {
                write!(out, "{}(", NOT)?;
                write_formula(out, inner)?;
                out.write_char(')')
            }
        },
    }
}

fn write_binary<W: Write>(
    out: &mut W,
    left: &Formula,
    symbol: &str,
    right: &Formula,
    wraps: fn(&Formula) -> bool,
) -> fmt::Result {
    write_operand(out, left, wraps(left))?;
    write!(out, " {} ", symbol)?;
    write_operand(out, right, wraps(right))
}

fn write_operand<W: Write>(out: &mut W, operand: &Formula, parens: bool) -> fmt::Result {
    if parens {
        out.write_char('(')?;
        write_formula(out, operand)?;
        out.write_char(')')
    } else {
        write_formula(out, operand)
    }
}

fn wraps_in_implies(operand: &Formula) -> bool {
    matches!(operand, Formula::Implies(_, _) | Formula::Or(_, _))
}

fn wraps_in_and(operand: &Formula) -> bool {
    matches!(operand, Formula::Implies(_, _) | Formula::Or(_, _))
}

fn wraps_in_or(operand: &Formula) -> bool {
    matches!(operand, Formula::Implies(_, _))
}

impl Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_formula(f, self)
    }
}
