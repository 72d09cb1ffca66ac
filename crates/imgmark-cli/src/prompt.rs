//! Prompt primitives over buffered terminal I/O.
//!
//! Generic over the reader and writer so whole sessions can be scripted
//! in tests with in-memory buffers.

use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line that is not a question.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    fn read_trimmed(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    fn ask(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{} ", message)?;
        self.output.flush()?;
        self.read_trimmed()
    }

    /// Yes/no question. Empty or unrecognized input falls back to `default`.
    pub fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        let answer = self.ask(&format!("{} {}", message, hint))?;
        Ok(match answer.to_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default,
        })
    }

    /// Free-form input, as typed.
    pub fn input(&mut self, message: &str) -> io::Result<String> {
        self.ask(message)
    }

    /// Free-form input; empty input yields `default`.
    pub fn input_with_default(&mut self, message: &str, default: &str) -> io::Result<String> {
        let answer = self.ask(&format!("{} [{}]", message, default))?;
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    /// Numbered single-choice list. Empty input picks the first choice;
    /// anything unparseable or out of range re-prompts.
    pub fn select(&mut self, message: &str, choices: &[&str]) -> io::Result<usize> {
        writeln!(self.output, "{}", message)?;
        for (index, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {}", index + 1, choice)?;
        }
        loop {
            let answer = self.ask(&format!("Choose 1-{}:", choices.len()))?;
            if answer.is_empty() {
                return Ok(0);
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=choices.len()).contains(&n) => return Ok(n - 1),
                _ => self.say("Please enter one of the listed numbers.")?,
            }
        }
    }

    /// Numeric input; re-prompts until the answer parses.
    pub fn number(&mut self, message: &str) -> io::Result<f32> {
        loop {
            let answer = self.ask(message)?;
            match answer.parse::<f32>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Please enter a number.")?,
            }
        }
    }
}
