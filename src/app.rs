use crate::tabs::definition::TabSet;
use crate::ui::classes::Theme;
use crate::ui::container::Tabs;
use crate::ui::tab::TabSelector;
use crate::ui::tab_list::TabList;
use crate::ui::tab_panel::TabPanel;
use crate::ui::tab_panels::TabPanels;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::*;

pub enum Action {
    Continue,
    Quit,
}

pub struct App {
    pub tab_set: TabSet,
    pub container: Tabs,
    pub theme: Theme,

    // Keyboard focus; independent from the active tab.
    pub focused: usize,

    // Hit rectangles from the last draw, used for mouse selection.
    selector_areas: Vec<Rect>,
}

impl App {
    pub fn new(tab_set: TabSet) -> Self {
        let container = Tabs::new(tab_set.len());
        App {
            tab_set,
            container,
            theme: Theme::default(),
            focused: 0,
            selector_areas: Vec::new(),
        }
    }

    pub fn active_index(&self) -> usize {
        self.container.context().active_index()
    }

    /// Selectors for every tab, in definition order.
    pub fn tab_list(&self) -> TabList<'_> {
        let ctx = self.container.context();
        TabList::new(self.tab_set.iter().enumerate().map(|(i, tab)| {
            TabSelector::new(i, &tab.label, ctx.clone())
                .focused(i == self.focused)
                .theme(self.theme.clone())
        }))
        .theme(self.theme.clone())
    }

    /// Panels for every tab, in definition order.
    pub fn tab_panels(&self) -> TabPanels<'_> {
        TabPanels::new(
            self.tab_set
                .iter()
                .map(|tab| TabPanel::new(&tab.content).theme(self.theme.clone())),
            self.container.context(),
        )
        .theme(self.theme.clone())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Left | KeyCode::BackTab => {
                self.move_focus(-1);
                Action::Continue
            }
            KeyCode::Right | KeyCode::Tab => {
                self.move_focus(1);
                Action::Continue
            }
            KeyCode::Home => {
                self.focused = 0;
                Action::Continue
            }
            KeyCode::End => {
                self.focused = self.tab_set.len().saturating_sub(1);
                Action::Continue
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate(self.focused);
                Action::Continue
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < self.tab_set.len() {
                    self.activate(index);
                }
                Action::Continue
            }
            _ => Action::Continue,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let hit = Position::new(mouse.column, mouse.row);
            if let Some(index) = self.selector_areas.iter().position(|r| r.contains(hit)) {
                self.activate(index);
            }
        }
        Action::Continue
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [main, status] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

        self.render_tabs(main, frame.buffer_mut());
        crate::ui::status_bar::render_status_bar(frame, status);
    }

    /// Draws container, tab list and the active panel into `buf`.
    pub fn render_tabs(&mut self, area: Rect, buf: &mut Buffer) {
        let layout = self.container.render(area, buf, &self.theme);

        let selector_areas = {
            let list = self.tab_list();
            (&list).render(layout.list, buf);
            list.selector_areas(layout.list)
        };
        self.selector_areas = selector_areas;

        let panels = self.tab_panels();
        (&panels).render(layout.panels, buf);
    }

    // -- Private helpers --

    /// Runs the interaction of the selector at `index` and moves focus to it.
    fn activate(&mut self, index: usize) {
        {
            let list = self.tab_list();
            let Some(selector) = list.selectors().get(index) else {
                return;
            };
            if let Err(e) = selector.select() {
                tracing::warn!(error = %e, "tab selection failed");
                return;
            }
        }
        self.focused = index;
    }

    fn move_focus(&mut self, delta: i32) {
        self.focused = wrap_index(self.focused, delta, self.tab_set.len());
    }
}

/// Steps `current` by `delta` modulo `len`; 0 for an empty list.
fn wrap_index(current: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as i64 + i64::from(delta)).rem_euclid(len as i64) as usize
}
