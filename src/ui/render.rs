use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::selector::Level;
use crate::ui::theme::{
    BORDER, ERROR, FOCUS_BORDER, HIGHLIGHT_BG, SELECTED, SUMMARY_ACCENT, TEXT,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(regions[0]);

    for (level, area) in [Level::Countries, Level::States, Level::Cities]
        .into_iter()
        .zip(columns.iter())
    {
        draw_column(frame, app, level, *area);
    }

    draw_status_line(frame, app, regions[1]);

    let footer = Footer::new();
    frame.render_widget(
        footer.widget(app.selector(), regions[2].width),
        regions[2],
    );
}

fn draw_column(frame: &mut Frame<'_>, app: &App, level: Level, area: Rect) {
    let selector = app.selector();
    let enabled = selector.enabled(level);
    let focused = app.focus() == level;

    let border_style = if focused {
        Style::default().fg(FOCUS_BORDER)
    } else {
        Style::default().fg(BORDER)
    };
    let block = Block::default()
        .title(level.title())
        .borders(Borders::ALL)
        .border_style(border_style);

    if !enabled {
        let hint = match level {
            Level::States => "Select a country first",
            Level::Cities => "Select a state first",
            Level::Countries => unreachable!("country column is always enabled"),
        };
        let placeholder = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(TEXT).add_modifier(Modifier::DIM),
        )))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let selected_name = selector.selected(level);
    let items: Vec<ListItem> = selector
        .items(level)
        .iter()
        .map(|name| {
            let is_selected = selected_name == Some(name.as_str());
            let marker = if is_selected { "✓ " } else { "  " };
            let style = if is_selected {
                Style::default().fg(SELECTED)
            } else {
                Style::default().fg(TEXT)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{marker}{name}"),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(HIGHLIGHT_BG)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default();
    if focused && !selector.items(level).is_empty() {
        list_state.select(Some(app.cursor(level)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// One line between the columns and the footer: the error banner when
/// the last fetch failed, otherwise the selection summary.
fn draw_status_line(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let selector = app.selector();

    let (line, border_color) = if let Some(error) = &selector.error {
        (
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(ERROR),
            )),
            ERROR,
        )
    } else if let Some((city, state, country)) = selector.summary() {
        (
            Line::from(vec![
                Span::styled("You selected ", Style::default().fg(TEXT)),
                Span::styled(
                    city.to_string(),
                    Style::default()
                        .fg(SUMMARY_ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {state}, {country}"),
                    Style::default().fg(TEXT).add_modifier(Modifier::DIM),
                ),
            ]),
            BORDER,
        )
    } else {
        (
            Line::from(Span::styled(
                "Pick a country, then a state, then a city.",
                Style::default().fg(TEXT).add_modifier(Modifier::DIM),
            )),
            BORDER,
        )
    };

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(widget, area);
}
