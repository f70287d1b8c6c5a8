use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render_status_bar(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" ←→ ", Style::default().bold()),
        Span::raw("focus  "),
        Span::styled("⏎ ", Style::default().bold()),
        Span::raw("select  "),
        Span::styled("1-9 ", Style::default().bold()),
        Span::raw("jump  "),
        Span::styled("click ", Style::default().bold()),
        Span::raw("select  "),
        Span::styled("⎋ ", Style::default().bold()),
        Span::raw("quit"),
    ]);
    frame.render_widget(Paragraph::new(hints).style(Style::default().dim()), area);
}
