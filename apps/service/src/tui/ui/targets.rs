use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem};

use super::{COLOR_BRAND, COLOR_ERROR, COLOR_MUTED, COLOR_SUCCESS};
use crate::format::{Health, health, status_line};
use crate::tui::state::AppState;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let spinner = state.spinner.frame();
    let mut items: Vec<ListItem> = Vec::with_capacity(state.targets.len() + 1);

    if state.live.is_empty() {
        items.push(ListItem::new(Line::from(vec![
            Span::styled(spinner, Style::default().fg(COLOR_SUCCESS)),
            Span::raw(" Checking urls ..."),
        ])));
    }

    for target in &state.targets {
        let entry = state.live.get(target);
        let (color, text_style) = match health(entry) {
            Health::Up => (COLOR_SUCCESS, Style::default()),
            Health::Down => (COLOR_ERROR, Style::default()),
            Health::Pending => (COLOR_MUTED, Style::default().fg(COLOR_MUTED)),
        };

        items.push(ListItem::new(Line::from(vec![
            Span::styled(spinner, Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(status_line(target, entry), text_style),
        ])));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Targets ")
            .border_style(Style::default().fg(COLOR_BRAND)),
    );

    f.render_widget(Clear, area);
    f.render_widget(list, area);
}
