//! Presentational view of the spaced-repetition screen.

use crate::components::footer::Footer;
use crate::components::top_bar::{TopBar, TopBarHitAreas};
use crate::delegates::SpacedRepetitionScreenDelegate;
use crate::icons::Icons;
use crate::keymap::{Action, Keymap};
use crate::screens::RenderContext;
use crate::state::{CountsState, ObservableSpacedRepetitionScreen};
use crate::styles::{Theme, ThemeStore};
use crate::utils::create_standard_layout;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

const TOP_BAR_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;

/// Draws the top bar, the due/new panel and the footer. Remembers where the
/// top bar's touch targets ended up.
#[derive(Debug, Default)]
pub struct SpacedRepetitionView {
    hit_areas: Option<TopBarHitAreas>,
}

impl SpacedRepetitionView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Touch targets from the last render, if the top bar was visible
    pub fn hit_areas(&self) -> Option<TopBarHitAreas> {
        self.hit_areas
    }

    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        theme_store: &ThemeStore,
        observable_screen: &ObservableSpacedRepetitionScreen,
        screen_delegate: &dyn SpacedRepetitionScreenDelegate,
        icons: Icons,
        ctx: &RenderContext,
    ) -> Result<()> {
        let theme_type = theme_store.theme_type();
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(ctx.options.background)),
            area,
        );

        let header_height = if ctx.options.top_bar.visible {
            TOP_BAR_HEIGHT
        } else {
            0
        };
        let (header, content, footer) = create_standard_layout(area, header_height, FOOTER_HEIGHT);

        self.hit_areas = if ctx.options.top_bar.visible {
            let bar = observable_screen.top_bar.get();
            Some(TopBar::render(frame, header, &bar, &ctx.options.top_bar, theme_type))
        } else {
            None
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(content);

        render_counts(frame, chunks[0], &screen_delegate.counts(), ctx.theme, icons);
        observable_screen.selected_categories.with(|categories| {
            render_categories(frame, chunks[1], categories.as_deref(), ctx.theme, icons);
        });

        Footer::render(frame, footer, &footer_text(ctx.keymap), ctx.theme)?;
        Ok(())
    }
}

fn render_counts(frame: &mut Frame, area: Rect, counts: &CountsState, theme: &Theme, icons: Icons) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style())
        .title(" Review ")
        .title_style(theme.title_style())
        .padding(ratatui::widgets::Padding::new(2, 2, 1, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match counts {
        CountsState::NotLoaded => vec![Line::styled("Counts not loaded", theme.muted_style())],
        CountsState::Loading => vec![Line::styled(
            format!("{} Counting...", icons.loading()),
            theme.muted_style(),
        )],
        CountsState::Ready(counts) => vec![
            Line::from(vec![
                Span::styled(format!("{} Due: ", icons.due()), theme.text_style()),
                Span::styled(
                    counts.due.to_string(),
                    Style::default().fg(theme.due).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled(format!("{} New: ", icons.new_item()), theme.text_style()),
                Span::styled(
                    counts.new.to_string(),
                    Style::default().fg(theme.new).add_modifier(Modifier::BOLD),
                ),
            ]),
        ],
        CountsState::Failed(message) => vec![Line::styled(
            format!("{} {}", icons.error(), message),
            theme.error_style(),
        )],
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_categories(
    frame: &mut Frame,
    area: Rect,
    categories: Option<&[String]>,
    theme: &Theme,
    icons: Icons,
) {
    let text = match categories {
        Some(names) if !names.is_empty() => names.join(", "),
        _ => "All categories".to_string(),
    };
    let line = Line::from(vec![
        Span::styled(format!("{} ", icons.category()), theme.muted_style()),
        Span::styled(text, Style::default().fg(theme.secondary)),
    ]);
    frame.render_widget(
        Paragraph::new(line).wrap(Wrap { trim: true }),
        area.inner(Margin::new(1, 1)),
    );
}

fn footer_text(keymap: &Keymap) -> String {
    format!(
        "Sets: {} | Refresh: {} | Theme: {} | Back: {} | Quit: {}",
        keymap.get_key_display_for_action(Action::SelectSet),
        keymap.get_key_display_for_action(Action::Refresh),
        keymap.get_key_display_for_action(Action::ToggleTheme),
        keymap.get_key_display_for_action(Action::Cancel),
        keymap.get_key_display_for_action(Action::Quit),
    )
}
