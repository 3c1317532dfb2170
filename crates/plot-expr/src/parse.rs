// File: crates/plot-expr/src/parse.rs
// Summary: Recursive-descent parser producing a resolved AST; names are checked against the allow-list here.

use crate::error::ExprError;
use crate::lex::{tokenize, Token, TokenKind};
use crate::stdlib::{lookup, Func, Symbol};

/// Deepest nesting accepted before the parser gives up.
pub const MAX_DEPTH: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Pos,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Number(f64),
    Var,
    Unary(UnaryOp, Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
    Call(Func, Box<Expr>),
}

impl Expr {
    /// True when the sample variable appears anywhere.
    pub fn uses_var(&self) -> bool {
        match self {
            Expr::Number(_) => false,
            Expr::Var => true,
            Expr::Unary(_, e) | Expr::Call(_, e) => e.uses_var(),
            Expr::Binary(_, a, b) => a.uses_var() || b.uses_var(),
        }
    }
}

/// Parse `src` into an AST whose every name is on the allow-list.
pub fn parse(src: &str) -> Result<Expr, ExprError> {
    let tokens = tokenize(src)?;
    if tokens.is_empty() {
        return Err(ExprError::Empty);
    }
    let mut p = Parser { tokens, cursor: 0, depth: 0 };
    let expr = p.expression()?;
    if let Some(tok) = p.peek() {
        return Err(unexpected(tok));
    }
    Ok(expr)
}

fn unexpected(tok: &Token) -> ExprError {
    ExprError::UnexpectedToken { found: tok.kind.to_string(), pos: tok.pos }
}

struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn next(&mut self) -> Result<Token, ExprError> {
        let tok = self.tokens.get(self.cursor).cloned().ok_or(ExprError::UnexpectedEnd)?;
        self.cursor += 1;
        Ok(tok)
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().map(|t| &t.kind) == Some(kind) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn enter(&mut self) -> Result<(), ExprError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH { Err(ExprError::TooDeep) } else { Ok(()) }
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // Chains fold left, so each link deepens the tree by one level and counts against MAX_DEPTH.
    fn leave_chain(&mut self, links: usize) {
        self.depth -= links;
    }

    // additive := multiplicative (('+' | '-') multiplicative)*
    fn expression(&mut self) -> Result<Expr, ExprError> {
        self.enter()?;
        let mut lhs = self.term()?;
        let mut links = 0;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Plus) => BinOp::Add,
                Some(TokenKind::Minus) => BinOp::Sub,
                _ => break,
            };
            self.cursor += 1;
            self.enter()?;
            links += 1;
            let rhs = self.term()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        self.leave_chain(links);
        self.leave();
        Ok(lhs)
    }

    // multiplicative := unary (('*' | '/' | '//' | '%') unary)*
    fn term(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.unary()?;
        let mut links = 0;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Star) => BinOp::Mul,
                Some(TokenKind::Slash) => BinOp::Div,
                Some(TokenKind::SlashSlash) => BinOp::FloorDiv,
                Some(TokenKind::Percent) => BinOp::Mod,
                _ => break,
            };
            self.cursor += 1;
            self.enter()?;
            links += 1;
            let rhs = self.unary()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        self.leave_chain(links);
        Ok(lhs)
    }

    // unary := ('+' | '-') unary | power
    fn unary(&mut self) -> Result<Expr, ExprError> {
        let op = match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Minus) => UnaryOp::Neg,
            Some(TokenKind::Plus) => UnaryOp::Pos,
            _ => return self.power(),
        };
        self.cursor += 1;
        self.enter()?;
        let operand = self.unary()?;
        self.leave();
        Ok(Expr::Unary(op, Box::new(operand)))
    }

    // power := primary (('**' | '^') unary)?   -- right-associative through `unary`
    fn power(&mut self) -> Result<Expr, ExprError> {
        let base = self.primary()?;
        if self.eat(&TokenKind::StarStar) || self.eat(&TokenKind::Caret) {
            self.enter()?;
            let exponent = self.unary()?;
            self.leave();
            return Ok(Expr::Binary(BinOp::Pow, Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, ExprError> {
        let tok = self.next()?;
        match tok.kind {
            TokenKind::Number(v) => Ok(Expr::Number(v)),
            TokenKind::LParen => {
                let inner = self.expression()?;
                self.expect_rparen()?;
                Ok(inner)
            }
            TokenKind::Ident(name) => self.name(name, tok.pos),
            _ => Err(unexpected(&tok)),
        }
    }

    fn name(&mut self, name: String, pos: usize) -> Result<Expr, ExprError> {
        let symbol = lookup(&name).ok_or_else(|| ExprError::UnknownName { name: name.clone(), pos })?;
        let called = self.eat(&TokenKind::LParen);
        match (symbol, called) {
            (Symbol::Function(f), true) => {
                let args = self.arguments()?;
                let given = args.len();
                let mut args = args.into_iter();
                match (args.next(), given) {
                    (Some(arg), 1) => Ok(Expr::Call(f, Box::new(arg))),
                    _ => Err(ExprError::ArgumentCount { name, given }),
                }
            }
            (Symbol::Function(_), false) => Err(ExprError::MissingCall { name, pos }),
            (_, true) => Err(ExprError::NotCallable { name, pos }),
            (Symbol::Constant(v), false) => Ok(Expr::Number(v)),
            (Symbol::Variable, false) => Ok(Expr::Var),
        }
    }

    // arguments := (expression (',' expression)*)? ')'   -- the '(' is already consumed
    fn arguments(&mut self) -> Result<Vec<Expr>, ExprError> {
        let mut args = Vec::new();
        if self.eat(&TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.expression()?);
            if self.eat(&TokenKind::Comma) {
                continue;
            }
            self.expect_rparen()?;
            return Ok(args);
        }
    }

    fn expect_rparen(&mut self) -> Result<(), ExprError> {
        let tok = self.next()?;
        if tok.kind == TokenKind::RParen { Ok(()) } else { Err(unexpected(&tok)) }
    }
}
