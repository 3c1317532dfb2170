// File: crates/plot-cli/src/prompt.rs
// Summary: Line-oriented console prompts that re-ask until the answer parses.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Width of banner rules and centred titles.
pub const BANNER_WIDTH: usize = 60;

#[derive(Debug, Error)]
pub enum PromptError {
    /// Input reached end of file; the session should wind down.
    #[error("input closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, msg: impl Display) -> Result<(), PromptError> {
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    pub fn rule(&mut self) -> Result<(), PromptError> {
        self.say("-".repeat(BANNER_WIDTH))
    }

    /// Rule, centred title, rule.
    pub fn header(&mut self, title: &str) -> Result<(), PromptError> {
        self.rule()?;
        self.say(format_args!("{title:^width$}", width = BANNER_WIDTH))?;
        self.rule()
    }

    /// Show `prompt` and return the next line without its line ending.
    /// Bytes that are not UTF-8 become U+FFFD, so such a line simply fails to parse.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(PromptError::Closed);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    pub fn read_float(&mut self, prompt: &str) -> Result<f64, PromptError> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_float(&line) {
                Some(v) => return Ok(v),
                None => self.say("Invalid number. Try again.")?,
            }
        }
    }

    pub fn read_positive_int(&mut self, prompt: &str) -> Result<usize, PromptError> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<usize>() {
                Ok(v) if v > 0 => return Ok(v),
                _ => self.say("Enter a positive integer.")?,
            }
        }
    }

    /// True only for `y` or `Y`.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        let line = self.read_line(prompt)?;
        Ok(line.trim().eq_ignore_ascii_case("y"))
    }
}

fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn float_reasks_until_valid() {
        let mut p = prompter("abc\ninf\n  2.5 \n");
        assert_eq!(p.read_float("n: ").unwrap(), 2.5);
        let out = output(p);
        assert_eq!(out.matches("Invalid number. Try again.").count(), 2);
        assert_eq!(out.matches("n: ").count(), 3);
    }

    #[test]
    fn positive_int_rejects_zero_negative_and_fraction() {
        let mut p = prompter("0\n-3\n1.5\n4\n");
        assert_eq!(p.read_positive_int("count: ").unwrap(), 4);
        assert_eq!(output(p).matches("Enter a positive integer.").count(), 3);
    }

    #[test]
    fn end_of_input_is_reported() {
        let mut p = prompter("x\n");
        assert!(matches!(p.read_float("n: "), Err(PromptError::Closed)));
    }

    #[test]
    fn confirm_accepts_only_y() {
        let mut p = prompter("Y\nyes\n\n");
        assert!(p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
    }

    #[test]
    fn header_centres_title() {
        let mut p = prompter("");
        p.header("MENU").unwrap();
        let out = output(p);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "-".repeat(60));
        assert_eq!(lines[1].trim(), "MENU");
        assert_eq!(lines[1].find('M'), Some(28));
        assert_eq!(lines[2], lines[0]);
    }

    #[test]
    fn invalid_utf8_is_just_a_bad_answer() {
        let mut p = Prompter::new(Cursor::new(b"\xff\xfe\n7\n".to_vec()), Vec::new());
        assert_eq!(p.read_float("n: ").unwrap(), 7.0);
        assert_eq!(output(p).matches("Invalid number. Try again.").count(), 1);

        let mut p = Prompter::new(Cursor::new(b"si\xffn(x)\n".to_vec()), Vec::new());
        assert_eq!(p.read_line("eq: ").unwrap(), "si\u{fffd}n(x)");
    }

    #[test]
    fn crlf_is_stripped() {
        let mut p = prompter("sin(x)\r\n");
        assert_eq!(p.read_line("eq: ").unwrap(), "sin(x)");
    }
}
