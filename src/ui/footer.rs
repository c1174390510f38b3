use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::selector::SelectorState;
use crate::ui::theme::{BORDER, LOADING, TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str = " Tab/←→: Column │ ↑↓: Move │ Enter: Select │ Backspace: Clear │ q: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Build the footer line for a frame `width` columns wide.
    pub fn widget(&self, selector: &SelectorState, width: u16) -> Paragraph<'static> {
        let status = status_text(selector);

        // Pad by char count, not byte count.
        let hints_width = HINTS.chars().count();
        let status_width = status.chars().count();
        let content_width = width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(status_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
        let status_style = if selector.is_loading() {
            Style::default().fg(LOADING)
        } else {
            text_style
        };

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(status, status_style),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER)),
            )
    }
}

/// Right-hand status: the in-flight fetch while loading, the version
/// otherwise.
fn status_text(selector: &SelectorState) -> String {
    match selector.loading {
        Some(level) => format!("Loading {}… ", level.noun()),
        None => format!("v{} ", VERSION),
    }
}
