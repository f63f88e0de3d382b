//! Terminal output for the markdown produced by `green_core::display`.

use anyhow::Result;
use green_core::display::{OperationStatus, StatusLevel};
use termimad::{crossterm::style::Color, MadSkin};

/// Prints markdown either styled through termimad or verbatim.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGreen);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            // Keep the hashes visible so headings still read as headings
            if line.starts_with('#') {
                println!("\x1b[32m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }

    /// Render a one-line status, colored by its level.
    pub fn status(&self, status: &OperationStatus) -> Result<()> {
        if !self.rich_enabled {
            print!("{status}");
            return Ok(());
        }

        let color = match status.level {
            StatusLevel::Success => "32",
            StatusLevel::Info => "33",
            StatusLevel::Failure => "31",
        };
        print!("\x1b[{color}m{status}\x1b[0m");
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        renderer.render("# Due today\n").expect("plain render");
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }
}
