use ratatui::style::{Color, Modifier, Style};

/// Styling hooks exposed by the tabs widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Tabs,
    TabList,
    Tab,
    TabActive,
    TabPanels,
    TabPanel,
}

impl Class {
    pub fn as_str(self) -> &'static str {
        match self {
            Class::Tabs => "tabs",
            Class::TabList => "tablist",
            Class::Tab => "tab",
            Class::TabActive => "tab active",
            Class::TabPanels => "tab_panels",
            Class::TabPanel => "tabpanel",
        }
    }
}

/// Maps each styling hook to a terminal style.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub tabs: Style,
    pub tablist: Style,
    pub tab: Style,
    pub tab_active: Style,
    pub tab_panels: Style,
    pub tabpanel: Style,
    /// Added on top of the tab style of the focused selector.
    pub focus: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            tabs: Style::default().fg(Color::DarkGray),
            tablist: Style::default(),
            tab: Style::default().fg(Color::Gray),
            tab_active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            tab_panels: Style::default().fg(Color::DarkGray),
            tabpanel: Style::default().fg(Color::White),
            focus: Style::default().add_modifier(Modifier::UNDERLINED),
        }
    }
}

impl Theme {
    pub fn style(&self, class: Class) -> Style {
        match class {
            Class::Tabs => self.tabs,
            Class::TabList => self.tablist,
            Class::Tab => self.tab,
            Class::TabActive => self.tab_active,
            Class::TabPanels => self.tab_panels,
            Class::TabPanel => self.tabpanel,
        }
    }
}
