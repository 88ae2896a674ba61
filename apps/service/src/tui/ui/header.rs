use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use super::{COLOR_BRAND, COLOR_ERROR, COLOR_LABEL, COLOR_MUTED, COLOR_SUCCESS};
use crate::tui::state::AppState;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let counts = state.counts();

    // Row 1: brand + tallies
    let tally_spans = vec![
        Span::styled("impromon ", Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD)),
        Span::styled(format!("{} targets ", state.targets.len()), Style::default().fg(COLOR_LABEL)),
        Span::styled(format!("{} up ", counts.up), Style::default().fg(COLOR_SUCCESS)),
        Span::styled(format!("{} down ", counts.down), Style::default().fg(COLOR_ERROR)),
        Span::styled(format!("{} pending", counts.pending), Style::default().fg(COLOR_MUTED)),
    ];

    // Row 2: last cycle
    let cycle_line = match &state.last_cycle {
        Some(summary) => {
            let at = summary
                .completed_at
                .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "-".into());
            Line::from(Span::styled(
                format!("cycle {} in {}ms, finished {at}", summary.cycle, summary.elapsed_ms),
                Style::default().fg(COLOR_LABEL),
            ))
        }
        None => Line::from(Span::styled("waiting for first cycle", Style::default().fg(COLOR_MUTED))),
    };

    let header = Paragraph::new(vec![Line::from(tally_spans), cycle_line]);

    f.render_widget(Clear, area);
    f.render_widget(header, area);
}
