use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

pub fn render(f: &mut Frame, area: Rect) {
    f.render_widget(Clear, area);

    let hint = Paragraph::new(Line::from(Span::styled(
        "Q/Esc/Ctrl-C: Quit",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    f.render_widget(hint, area);
}
