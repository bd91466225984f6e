//! # Thinking Animation
//!
//! File: cli/src/common/ui/animation.rs
//! Author: Christi Mahu
//!
//! Three rounds of three dots, erased between rounds, then a final `...`.
//! Purely cosmetic pacing; a zero delay skips it.
//!
use console::style;
use std::io::{self, Write};
use std::time::Duration;
use tokio::time::sleep;

const ROUNDS: usize = 3;
const DOTS_PER_ROUND: usize = 3;

/// Plays the "<bot> is thinking..." animation on stdout.
pub async fn thinking(bot_name: &str, delay: Duration) -> io::Result<()> {
    if delay.is_zero() {
        return Ok(());
    }
    let mut stdout = io::stdout();
    write!(stdout, "\n{}", style(format!("{bot_name} is thinking")).magenta())?;
    stdout.flush()?;

    for _ in 0..ROUNDS {
        for _ in 0..DOTS_PER_ROUND {
            sleep(delay).await;
            write!(stdout, "{}", style(".").magenta())?;
            stdout.flush()?;
        }
        sleep(delay).await;
        write!(stdout, "\x08\x08\x08   \x08\x08\x08")?;
        stdout.flush()?;
    }
    writeln!(stdout, "{}", style("...").magenta())
}
