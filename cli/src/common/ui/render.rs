//! # Reply Rendering
//!
//! File: cli/src/common/ui/render.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Writes the chat chrome and every `ResolutionResult` variant to a writer.
//!
//! A keyword reply looks like:
//!
//! ```text
//! [14:02] You asked: how do i make a strong password
//!
//! 🔒 PASSWORD
//!
//! Use at least 12 characters.
//!
//! 👉 Do you use a password manager?
//! ──────────────────────────────────────────────────
//! ```
//!
use crate::engine::{ResolutionResult, SentimentReply};
use console::style;
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

const BANNER: &str = r"
  ____     ____              _   _      _
 / ___|   / ___|  ___  ___  | | | | ___| |_ __   ___ _ __
| |   ____\___ \ / _ \/ __| | |_| |/ _ \ | '_ \ / _ \ '__|
| |__|_____|__) |  __/ (__  |  _  |  __/ | |_) |  __/ |
 \____|   |____/ \___|\___| |_| |_|\___|_| .__/ \___|_|
                                         |_|
";

/// Per-turn details the renderer needs besides the result itself.
#[derive(Debug, Clone, Copy)]
pub struct TurnContext<'a> {
    /// Normalized input, echoed back in the "You asked" line.
    pub question: &'a str,
    /// Pre-formatted local time (`HH:MM`).
    pub timestamp: &'a str,
    /// Name used in the goodbye line.
    pub user_name: &'a str,
}

/// Horizontal rule closing each reply.
pub fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", style(BANNER).cyan())
}

pub fn write_welcome<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    let body = format!(
        "\n        ╔════════════════════════════╗\n        ║                            ║\n        ║  Welcome, {:<10}       ║\n        ║                            ║\n        ╚════════════════════════════╝\n",
        name
    );
    writeln!(out, "{}", style(body).green())
}

/// Section header, e.g. `⚡ CHAT SESSION ⚡` between double rules.
pub fn write_header<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    let bar = "═".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", style(&bar).yellow())?;
    writeln!(out, "{}", style(format!("⚡ {} ⚡", text.to_uppercase())).yellow())?;
    writeln!(out, "{}", style(&bar).yellow())
}

/// User-visible warning, e.g. a missing keyword catalog.
pub fn write_warning<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", style(format!("⚠️  {}", message)).red())
}

/// Renders one turn. Every variant is handled.
pub fn write_resolution<W: Write>(
    out: &mut W,
    result: &ResolutionResult,
    turn: &TurnContext<'_>,
) -> io::Result<()> {
    match result {
        ResolutionResult::Exit => {
            writeln!(
                out,
                "{}",
                style(format!("\nGoodbye, {}! Stay safe online. 👋", turn.user_name)).green()
            )
        }
        ResolutionResult::SentimentMatch { reply, .. } => {
            write_sentiment(out, reply)?;
            writeln!(out, "{}", rule())
        }
        ResolutionResult::KeywordMatch {
            key,
            bundle,
            primary_reply,
            follow_up,
            personalization_note,
            sentiment,
        } => {
            if let Some(SentimentReply { reply, .. }) = sentiment {
                write_sentiment(out, reply)?;
            }
            writeln!(
                out,
                "{}",
                style(format!("\n[{}] You asked: {}", turn.timestamp, turn.question)).yellow()
            )?;
            let title = bundle
                .title()
                .map(str::to_string)
                .unwrap_or_else(|| key.trim().to_uppercase());
            writeln!(out, "{}", style(format!("\n🔒 {}", title)).cyan())?;
            writeln!(out, "\n{}\n", style(primary_reply).white())?;
            if let Some(follow_up) = follow_up {
                writeln!(out, "{}\n", style(format!("👉 {}", follow_up)).magenta())?;
            }
            if let Some(note) = personalization_note {
                writeln!(out, "{}\n", style(format!("⭐ {}", note)).green())?;
            }
            writeln!(out, "{}", rule())
        }
        ResolutionResult::GeneralFallback { reply } | ResolutionResult::DefaultFallback { reply } => {
            writeln!(out, "{}", style(format!("\n🔒 {}\n", reply)).cyan())?;
            writeln!(out, "{}", rule())
        }
    }
}

fn write_sentiment<W: Write>(out: &mut W, reply: &str) -> io::Result<()> {
    writeln!(out, "{}", style(format!("\n💬 {}", reply)).magenta())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ReplySet, ResponseBundle};

    fn render(result: &ResolutionResult) -> String {
        let mut buf = Vec::new();
        let turn = TurnContext {
            question: "how do i pick a password",
            timestamp: "09:30",
            user_name: "Ada",
        };
        write_resolution(&mut buf, result, &turn).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn keyword_match(bundle: ResponseBundle) -> ResolutionResult {
        ResolutionResult::KeywordMatch {
            key: "password, passwords".into(),
            bundle,
            primary_reply: "Use 12+ chars".into(),
            follow_up: Some("Do you reuse passwords?".into()),
            personalization_note: Some("Since you're interested in password".into()),
            sentiment: Some(SentimentReply {
                mood_word: "worried".into(),
                reply: "Don't worry.".into(),
            }),
        }
    }

    #[test]
    fn test_keyword_match_renders_all_parts_in_order() {
        let bundle = ResponseBundle::rich(ReplySet::from_static(&["Use 12+ chars"]).unwrap(), vec![]);
        let text = render(&keyword_match(bundle));
        let order = [
            "Don't worry.",
            "[09:30] You asked: how do i pick a password",
            "PASSWORD, PASSWORDS",
            "Use 12+ chars",
            "Do you reuse passwords?",
            "Since you're interested in password",
        ];
        let mut last = 0;
        for part in order {
            let pos = text[last..].find(part).map(|p| p + last);
            assert!(pos.is_some(), "missing or out of order: {part}");
            last = pos.unwrap_or(last);
        }
        assert!(text.contains(&rule()));
    }

    #[test]
    fn test_pair_bundle_uses_title() {
        let text = render(&keyword_match(ResponseBundle::pair("Password Basics", "Use 12+ chars")));
        assert!(text.contains("Password Basics"));
        assert!(!text.contains("PASSWORD, PASSWORDS"));
    }

    #[test]
    fn test_fallbacks_and_exit() {
        let general = render(&ResolutionResult::GeneralFallback {
            reply: "Patch often.".into(),
        });
        assert!(general.contains("🔒 Patch often."));

        let default = render(&ResolutionResult::DefaultFallback {
            reply: "Try rephrasing.".into(),
        });
        assert!(default.contains("Try rephrasing."));

        assert!(render(&ResolutionResult::Exit).contains("Goodbye, Ada!"));
    }

    #[test]
    fn test_welcome_pads_name() {
        let mut buf = Vec::new();
        write_welcome(&mut buf, "Bo").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Welcome, Bo        "));
    }

    #[test]
    fn test_header_is_uppercased() {
        let mut buf = Vec::new();
        write_header(&mut buf, "Chat Session").unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("⚡ CHAT SESSION ⚡"));
    }
}
