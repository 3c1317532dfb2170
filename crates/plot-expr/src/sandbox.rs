// File: crates/plot-expr/src/sandbox.rs
// Summary: Sandbox API used by the CLI: compile once, then validate or evaluate over a sample sequence.

use tracing::{debug, warn};

use crate::error::ExprError;
use crate::parse::{parse, Expr};

/// An expression that passed the allow-list check.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledExpr {
    source: String,
    ast: Expr,
}

impl CompiledExpr {
    /// The text as the user entered it (used for legends and storage).
    pub fn source(&self) -> &str { &self.source }

    pub fn ast(&self) -> &Expr { &self.ast }

    /// One value per sample. Constant expressions are repeated for every sample.
    pub fn evaluate(&self, samples: &[f64]) -> Vec<f64> {
        if self.ast.uses_var() {
            samples.iter().map(|&x| self.ast.eval(x)).collect()
        } else {
            vec![self.ast.eval(0.0); samples.len()]
        }
    }
}

/// Restricted evaluator: only allow-listed functions, constants, and `x` are reachable.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sandbox;

impl Sandbox {
    pub fn new() -> Self { Sandbox }

    pub fn compile(&self, source: &str) -> Result<CompiledExpr, ExprError> {
        let ast = parse(source)?;
        debug!(expr = source, "compiled expression");
        Ok(CompiledExpr { source: source.trim().to_string(), ast })
    }

    /// Accept or reject `source` by evaluating it over `samples`.
    /// Rejected when it compiles but no sample would be drawn (`1/0`, `sqrt(-1)`).
    pub fn validate(&self, source: &str, samples: &[f64]) -> Result<CompiledExpr, ExprError> {
        let compiled = self.compile(source)?;
        let ys = compiled.evaluate(samples);
        let bad = ys.iter().filter(|y| !y.is_finite()).count();
        if bad > 0 && bad == ys.len() {
            debug!(expr = source, total = ys.len(), "expression has no finite sample");
            return Err(ExprError::NoFiniteSamples);
        }
        if bad > 0 {
            debug!(expr = source, non_finite = bad, total = ys.len(), "expression has undefined samples");
        }
        Ok(compiled)
    }

    /// Evaluate `source` over `samples`; failures are logged and returned for the caller to report.
    pub fn evaluate(&self, source: &str, samples: &[f64]) -> Result<Vec<f64>, ExprError> {
        match self.compile(source) {
            Ok(c) => Ok(c.evaluate(samples)),
            Err(e) => {
                warn!(expr = source, error = %e, "expression cannot be plotted");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_expressions_broadcast() {
        let ys = Sandbox::new().evaluate("2*pi", &[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(ys, vec![2.0 * std::f64::consts::PI; 3]);
    }

    #[test]
    fn nothing_to_draw_is_rejected() {
        let sb = Sandbox::new();
        let xs = [-2.0, -1.0, 0.0, 1.0];
        assert_eq!(sb.validate("1/0", &xs), Err(ExprError::NoFiniteSamples));
        assert_eq!(sb.validate("1//0", &xs), Err(ExprError::NoFiniteSamples));
        assert_eq!(sb.validate("sqrt(x - 10)", &xs), Err(ExprError::NoFiniteSamples));
        // partly undefined is fine
        assert!(sb.validate("sqrt(x)", &xs).is_ok());
        assert!(sb.validate("1/x", &xs).is_ok());
    }

    #[test]
    fn source_is_trimmed() {
        let c = Sandbox::new().compile("  cos(x) ").unwrap();
        assert_eq!(c.source(), "cos(x)");
    }
}
