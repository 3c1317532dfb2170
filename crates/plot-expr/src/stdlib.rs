// File: crates/plot-expr/src/stdlib.rs
// Summary: The allow-list: every name an expression may reference.

use std::fmt;

/// Name of the sample variable.
pub const VARIABLE: &str = "x";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Log,
}

impl Func {
    pub const ALL: [Func; 8] = [
        Func::Sin, Func::Cos, Func::Tan, Func::Asin, Func::Acos, Func::Atan, Func::Sqrt, Func::Log,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Sqrt => "sqrt",
            Func::Log => "log",
        }
    }

    /// Out-of-domain arguments give NaN (or -inf for `log(0)`), never a panic.
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Func::Sin => v.sin(),
            Func::Cos => v.cos(),
            Func::Tan => v.tan(),
            Func::Asin => v.asin(),
            Func::Acos => v.acos(),
            Func::Atan => v.atan(),
            Func::Sqrt => v.sqrt(),
            Func::Log => v.ln(),
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a name resolves to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Symbol {
    Function(Func),
    Constant(f64),
    Variable,
}

pub const CONSTANTS: [(&str, f64); 2] = [("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// Resolve `name` against the allow-list. Case-sensitive.
pub fn lookup(name: &str) -> Option<Symbol> {
    if name == VARIABLE {
        return Some(Symbol::Variable);
    }
    if let Some(&(_, v)) = CONSTANTS.iter().find(|(n, _)| *n == name) {
        return Some(Symbol::Constant(v));
    }
    Func::ALL.iter().copied().find(|f| f.name() == name).map(Symbol::Function)
}

/// Every allowed name, for help text.
pub fn allowed_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Func::ALL.iter().map(|f| f.name()).collect();
    names.extend(CONSTANTS.iter().map(|(n, _)| *n));
    names.push(VARIABLE);
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_allowed_names_only() {
        assert_eq!(lookup("x"), Some(Symbol::Variable));
        assert_eq!(lookup("pi"), Some(Symbol::Constant(std::f64::consts::PI)));
        assert_eq!(lookup("atan"), Some(Symbol::Function(Func::Atan)));
        assert_eq!(lookup("Sin"), None);
        assert_eq!(lookup("exp"), None);
        assert_eq!(lookup("__import__"), None);
    }

    #[test]
    fn log_is_natural() {
        assert!((Func::Log.apply(std::f64::consts::E) - 1.0).abs() < 1e-12);
        assert!(Func::Sqrt.apply(-1.0).is_nan());
    }
}
