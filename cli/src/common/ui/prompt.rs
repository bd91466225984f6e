//! # Terminal Line Input
//!
//! File: cli/src/common/ui/prompt.rs
//! Author: Christi Mahu
//!
//! `LineReader` prints a prompt and reads one line asynchronously. It is
//! generic over the input so tests can feed it an in-memory buffer.
//!
use crate::core::error::Result;
use anyhow::Context;
use console::style;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

/// Prompting line reader.
pub struct LineReader<R> {
    lines: Lines<R>,
}

impl LineReader<BufReader<Stdin>> {
    /// Reader over the process stdin.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }

    /// Prints `prompt` and reads the next line. `None` at end of input.
    pub async fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", style(prompt).bold())?;
        stdout.flush().context("Failed to flush stdout")?;
        self.next_line().await
    }

    /// Reads the next line without a prompt.
    pub async fn next_line(&mut self) -> Result<Option<String>> {
        self.lines
            .next_line()
            .await
            .context("Failed to read a line of input")
    }
}
