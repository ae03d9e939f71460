use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    library::ConnectorStatus,
    nav::{PaneTopology, SIDEBAR},
    scene::Pane,
    ui::{
        app::{App, InputMode},
        components::{pane::PaneView, sidebar::Sidebar},
    },
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let scene = &self.app.scene;
        let nav = scene.nav();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        f.render_widget(self.title_bar(), chunks[0]);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(24),
                Constraint::Percentage(35),
                Constraint::Min(1),
            ])
            .split(chunks[1]);

        let sidebar_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(if scene.focus() == Pane::Sidebar {
                colors::PRIMARY
            } else {
                colors::NEUTRAL
            }))
            .title(" Kodi ")
            .title_alignment(Alignment::Center);
        let sidebar_inner = sidebar_block.inner(main_chunks[0]);
        f.render_widget(sidebar_block, main_chunks[0]);
        f.render_widget(
            Sidebar::new(
                &SIDEBAR,
                scene.cursor(Pane::Sidebar),
                scene.focus() == Pane::Sidebar,
            ),
            sidebar_inner,
        );

        f.render_widget(
            PaneView::new(
                nav.content_selection(),
                scene.content(),
                scene.cursor(Pane::Content),
                scene.focus() == Pane::Content,
            ),
            main_chunks[1],
        );
        f.render_widget(
            PaneView::new(
                nav.detail_selection(),
                scene.detail(),
                scene.cursor(Pane::Detail),
                scene.focus() == Pane::Detail,
            ),
            main_chunks[2],
        );

        f.render_widget(self.footer(), chunks[2]);
    }

    fn title_bar(&self) -> Paragraph<'static> {
        let nav = self.app.scene.nav();
        let status = self.app.scene.status();
        let status_color = match status {
            ConnectorStatus::Loaded => colors::PRIMARY,
            ConnectorStatus::Outdated => colors::ACCENT,
            ConnectorStatus::None | ConnectorStatus::Offline => colors::NEUTRAL,
        };

        let mut spans = vec![Span::styled(
            " kodiremote",
            Style::default().fg(colors::PRIMARY).add_modifier(Modifier::BOLD),
        )];
        if !nav.navigation_subtitle().is_empty() {
            spans.push(Span::raw(format!(" · {}", nav.navigation_subtitle())));
        }
        if nav.topology() == PaneTopology::Stack && !nav.navigation_stack().is_empty() {
            let trail: Vec<String> = nav
                .navigation_stack()
                .iter()
                .map(|route| route.display_info().title)
                .collect();
            spans.push(Span::styled(
                format!("  {}", trail.join(" › ")),
                Style::default().fg(colors::NEUTRAL),
            ));
        }
        spans.push(Span::styled(
            format!("  [{}]", status.as_str()),
            Style::default().fg(status_color),
        ));

        Paragraph::new(Line::from(spans))
    }

    fn footer(&self) -> Paragraph<'static> {
        let line = match self.app.mode {
            InputMode::Search => Line::from(vec![
                Span::styled(" / ", Style::default().fg(colors::ACCENT)),
                Span::raw(self.app.scene.nav().search_query().to_string()),
                Span::styled("▏", Style::default().fg(colors::ACCENT)),
            ]),
            InputMode::Browse => Line::styled(
                " ←↓↑→ navigate  esc back  / search  1-9 sections  q quit",
                Style::default().fg(colors::NEUTRAL),
            ),
        };
        Paragraph::new(line)
    }
}
