use crate::ui::classes::{Class, Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

/// Content block of one tab.
#[derive(Debug, Clone)]
pub struct TabPanel<'a> {
    content: &'a str,
    theme: Theme,
}

impl<'a> TabPanel<'a> {
    pub fn new(content: &'a str) -> Self {
        TabPanel {
            content,
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn content(&self) -> &str {
        self.content
    }

    pub fn class(&self) -> Class {
        Class::TabPanel
    }
}

impl Widget for &TabPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(self.theme.style(self.class()))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
