// File: crates/plot-expr/src/lex.rs
// Summary: Tokenizer for the expression language (numbers, names, operators, parentheses).

use std::fmt;

use crate::error::ExprError;

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    SlashSlash,
    Percent,
    StarStar,
    Caret,
    LParen,
    RParen,
    Comma,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "number {n}"),
            TokenKind::Ident(name) => write!(f, "name {name:?}"),
            TokenKind::Plus => f.write_str("'+'"),
            TokenKind::Minus => f.write_str("'-'"),
            TokenKind::Star => f.write_str("'*'"),
            TokenKind::Slash => f.write_str("'/'"),
            TokenKind::SlashSlash => f.write_str("'//'"),
            TokenKind::Percent => f.write_str("'%'"),
            TokenKind::StarStar => f.write_str("'**'"),
            TokenKind::Caret => f.write_str("'^'"),
            TokenKind::LParen => f.write_str("'('"),
            TokenKind::RParen => f.write_str("')'"),
            TokenKind::Comma => f.write_str("','"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

/// Split `src` into tokens. Whitespace is skipped; anything outside the
/// language (quotes, brackets, dots after names, `;`) is rejected here.
pub fn tokenize(src: &str) -> Result<Vec<Token>, ExprError> {
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0usize;

    while i < bytes.len() {
        let c = bytes[i];
        let start = i;
        let single = |kind: TokenKind| Token { kind, pos: start };
        match c {
            b' ' | b'\t' | b'\r' | b'\n' => { i += 1; continue; }
            b'+' => { tokens.push(single(TokenKind::Plus)); i += 1; }
            b'-' => { tokens.push(single(TokenKind::Minus)); i += 1; }
            b'%' => { tokens.push(single(TokenKind::Percent)); i += 1; }
            b'^' => { tokens.push(single(TokenKind::Caret)); i += 1; }
            b'(' => { tokens.push(single(TokenKind::LParen)); i += 1; }
            b')' => { tokens.push(single(TokenKind::RParen)); i += 1; }
            b',' => { tokens.push(single(TokenKind::Comma)); i += 1; }
            b'*' => {
                if bytes.get(i + 1) == Some(&b'*') {
                    tokens.push(single(TokenKind::StarStar));
                    i += 2;
                } else {
                    tokens.push(single(TokenKind::Star));
                    i += 1;
                }
            }
            b'/' => {
                if bytes.get(i + 1) == Some(&b'/') {
                    tokens.push(single(TokenKind::SlashSlash));
                    i += 2;
                } else {
                    tokens.push(single(TokenKind::Slash));
                    i += 1;
                }
            }
            b'0'..=b'9' | b'.' => {
                i = scan_number(bytes, i);
                let text = &src[start..i];
                let value = text
                    .parse::<f64>()
                    .map_err(|_| ExprError::BadNumber { text: text.to_string(), pos: start })?;
                tokens.push(single(TokenKind::Number(value)));
            }
            c if c.is_ascii_alphabetic() || c == b'_' => {
                while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                    i += 1;
                }
                tokens.push(single(TokenKind::Ident(src[start..i].to_string())));
            }
            _ => {
                let ch = src[start..].chars().next().unwrap_or('\u{FFFD}');
                return Err(ExprError::UnexpectedChar { ch, pos: start });
            }
        }
    }
    Ok(tokens)
}

/// End offset of the numeric literal starting at `i`: digits, an optional
/// fraction, and an exponent only when digits follow it (so `2e` stays `2`, `e`).
fn scan_number(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
        i += 1;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn operators_and_names() {
        assert_eq!(
            kinds("2*x**2 // 3 % sin(x)"),
            vec![
                TokenKind::Number(2.0),
                TokenKind::Star,
                TokenKind::Ident("x".into()),
                TokenKind::StarStar,
                TokenKind::Number(2.0),
                TokenKind::SlashSlash,
                TokenKind::Number(3.0),
                TokenKind::Percent,
                TokenKind::Ident("sin".into()),
                TokenKind::LParen,
                TokenKind::Ident("x".into()),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn number_forms() {
        assert_eq!(kinds("1.5e3"), vec![TokenKind::Number(1500.0)]);
        assert_eq!(kinds(".25"), vec![TokenKind::Number(0.25)]);
        assert_eq!(kinds("2E-1"), vec![TokenKind::Number(0.2)]);
        assert_eq!(kinds("2e"), vec![TokenKind::Number(2.0), TokenKind::Ident("e".into())]);
    }

    #[test]
    fn bad_input_reports_position() {
        assert_eq!(tokenize("x; y"), Err(ExprError::UnexpectedChar { ch: ';', pos: 1 }));
        assert_eq!(
            tokenize("1.2.3"),
            Err(ExprError::BadNumber { text: "1.2.3".into(), pos: 0 })
        );
        assert!(matches!(tokenize("x[0]"), Err(ExprError::UnexpectedChar { ch: '[', .. })));
    }
}
