//! UI rendering for the TUI

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use ratatui_image::StatefulImage;
use unicode_width::UnicodeWidthStr;

use super::state::{AppState, Artwork, FetchState, Mode, View};
use crate::filter;
use crate::models::Country;
use crate::theme::Theme;

/// Atlas icon
const ICON: &str = "🌍";

/// Main render function
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let colors = state.theme.colors();

    // Set background
    let area = frame.area();
    let bg_block = Block::default().style(Style::default().bg(colors.bg));
    frame.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if state.view == View::Browse {
            vec![
                Constraint::Length(3), // Header
                Constraint::Length(3), // Search bar
                Constraint::Min(0),    // Main content
                Constraint::Length(1), // Status bar
            ]
        } else {
            vec![
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Main content
                Constraint::Length(1), // Status bar
            ]
        })
        .split(area);

    render_header(frame, state, chunks[0]);

    if state.view == View::Browse {
        render_search_bar(frame, state, chunks[1]);
        render_browse(frame, state, chunks[2]);
        render_status_bar(frame, state, chunks[3]);
    } else {
        render_detail(frame, state, chunks[1]);
        render_status_bar(frame, state, chunks[2]);
    }

    // Render modal dialogs
    match state.mode {
        Mode::Filter => render_filter_modal(frame, state),
        Mode::ThemePicker => render_theme_picker(frame, state),
        Mode::Help => render_help_popup(frame, state),
        Mode::About => render_about_dialog(frame, state),
        Mode::Normal | Mode::Search => {}
    }
}

fn render_header(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();

    let selection_count = state.criteria.selection_count();
    let mut spans = vec![Span::styled(
        format!(" {} countries", state.country_count()),
        colors.text_muted(),
    )];
    if selection_count > 0 {
        spans.extend([
            Span::styled("  │  ", colors.text_dim()),
            Span::styled(
                format!("{selection_count} filters active"),
                colors.text_info(),
            ),
        ]);
    }
    spans.extend([
        Span::styled("  │  ", colors.text_dim()),
        Span::styled(state.theme.name(), colors.text_muted()),
    ]);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(colors.block())
            .title(format!(" {ICON} Atlas "))
            .title_style(colors.text_primary().add_modifier(Modifier::BOLD)),
    );

    frame.render_widget(header, area);
}

fn render_search_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();
    let focused = state.mode == Mode::Search;

    let content = if state.criteria.name_query.is_empty() && !focused {
        Line::from(Span::styled("Search Country", colors.text_muted()))
    } else {
        Line::from(Span::styled(state.criteria.name_query.clone(), colors.text()))
    };

    let search = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if focused {
                colors.block_focus()
            } else {
                colors.block()
            })
            .title(" 🔍 Search ")
            .title_style(colors.text_primary()),
    );

    frame.render_widget(search, area);

    if focused {
        let x = area.x + 1 + u16::try_from(state.criteria.name_query.len()).unwrap_or(0);
        frame.set_cursor_position((x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
    }
}

fn render_browse(frame: &mut Frame, state: &mut AppState, area: Rect) {
    // Layout: [List 55%] [Summary 45%]
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_country_list(frame, state, horizontal[0]);
    render_summary_panel(frame, state, horizontal[1]);
}

fn render_country_list(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();

    let list_block = Block::default()
        .title(" Countries ")
        .title_style(colors.text_primary())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(colors.block());

    match &state.fetch {
        FetchState::Pending if state.countries.is_empty() => {
            frame.render_widget(list_block, area);
            let inner = area.inner(ratatui::layout::Margin::new(2, 1));
            render_list_skeleton(frame, state, inner);
            return;
        }
        FetchState::Error(message) => {
            let lines = vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("  ⚠ ", colors.text_error()),
                    Span::styled(message.clone(), colors.text_error()),
                ]),
                Line::from(""),
                Line::from(vec![
                    Span::styled("  Press ", colors.text_dim()),
                    Span::styled("[r]", colors.key_hint()),
                    Span::styled(" to retry", colors.text_dim()),
                ]),
            ];
            frame.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: false }).block(list_block),
                area,
            );
            return;
        }
        FetchState::Pending | FetchState::Success => {}
    }

    if state.sections.is_empty() {
        // Empty result set is not an error
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  ℹ ", colors.text_info()),
                Span::styled("No countries match", colors.text_muted()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Press ", colors.text_dim()),
                Span::styled("[Esc]", colors.key_hint()),
                Span::styled(" to clear search, ", colors.text_dim()),
                Span::styled("[f]", colors.key_hint()),
                Span::styled(" to adjust filters", colors.text_dim()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).block(list_block), area);
        return;
    }

    let width = area.width.saturating_sub(3) as usize;
    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_row = 0;
    let mut flat_index = 0;

    for section in &state.sections {
        items.push(ListItem::new(Line::styled(
            format!(" {}", section.title),
            colors.section_header(),
        )));

        for country in &section.items {
            let is_selected = flat_index == state.selected;
            if is_selected {
                selected_row = items.len();
            }

            let capital = country.primary_capital().unwrap_or("-");
            let text = format!("  {}  ({})", country.name.common, capital);
            // Pad to full display width for the selection highlight
            let pad = width.saturating_sub(text.width());
            let padded = format!("{text}{}", " ".repeat(pad));

            let style = if is_selected {
                colors.selected()
            } else {
                colors.text()
            };
            items.push(ListItem::new(Line::styled(padded, style)));
            flat_index += 1;
        }
    }

    let mut list_state = ListState::default();
    list_state.select(Some(selected_row));

    let list = List::new(items).block(list_block);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_list_skeleton(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();

    // Shimmering placeholder rows while the collection loads
    let shimmer = (state.current_tick() / 3) % 4;
    let mut lines = Vec::new();
    for (i, letter) in ["A", "B", "C"].iter().enumerate() {
        lines.push(Line::styled(format!(" {letter}"), colors.section_header()));
        for j in 0..3u64 {
            let len = if (i as u64 + j + shimmer) % 2 == 0 { 24 } else { 18 };
            lines.push(Line::styled(format!("  {}", "░".repeat(len)), colors.skeleton()));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_summary_panel(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let colors = state.theme.colors();

    let block = Block::default()
        .title(" Summary ")
        .title_style(colors.text_primary())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(colors.block());

    let Some(country) = state.selected_country().cloned() else {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "  Select a country",
                colors.text_muted(),
            )))
            .block(block),
            area,
        );
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Flag image on top when the terminal supports it and it is cached
    let flag_url = Artwork::Flag.url(&country).map(str::to_string);
    let show_image = state.config.show_flags
        && flag_url
            .as_deref()
            .is_some_and(|url| state.has_image(url));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if show_image {
            vec![Constraint::Length(9), Constraint::Min(0)]
        } else {
            vec![Constraint::Min(0)]
        })
        .split(inner);

    let text_area = if show_image {
        if let Some(url) = flag_url.as_deref() {
            if let Some(protocol) = state.image_protocol(url) {
                frame.render_stateful_widget(StatefulImage::new(), chunks[0], protocol);
            }
        }
        chunks[1]
    } else {
        chunks[0]
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", country.name.common),
            colors.text().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", country.name.official),
            colors.text_muted(),
        )),
        Line::from(""),
    ];

    let mut fact = |label: &str, value: Option<String>| {
        if let Some(value) = value {
            lines.push(Line::from(vec![
                Span::styled(format!("  {label:<12}"), colors.text_dim()),
                Span::styled(value, colors.text()),
            ]));
        }
    };

    fact(
        "Region",
        (!country.region.is_empty()).then(|| country.region.clone()),
    );
    fact("Capital", country.primary_capital().map(String::from));
    fact("Population", Some(country.population_display()));
    fact(
        "Continents",
        (!country.continents.is_empty()).then(|| country.continents.join(", ")),
    );
    fact("Timezone", country.primary_timezone().map(String::from));
    fact("Languages", country.languages_display());

    lines.extend([
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", colors.text_dim()),
            Span::styled("[Enter]", colors.key_hint()),
            Span::styled(" for details, ", colors.text_dim()),
            Span::styled("[o]", colors.key_hint()),
            Span::styled(" to open map", colors.text_dim()),
        ]),
    ]);

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), text_area);
}

fn render_detail(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let colors = state.theme.colors();

    let title = if state.detail.name.is_empty() {
        " Country ".to_string()
    } else {
        format!(" {} ", state.detail.name)
    };

    let block = Block::default()
        .title(title)
        .title_style(colors.text_primary().add_modifier(Modifier::BOLD))
        .title_bottom(Line::from(" Esc back │ Tab artwork │ o map ").centered())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(colors.block_focus());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match state.detail.fetch.clone() {
        FetchState::Pending => render_detail_skeleton(frame, state, inner),
        FetchState::Error(message) => {
            let lines = vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("  ⚠ ", colors.text_error()),
                    Span::styled(message, colors.text_error()),
                ]),
                Line::from(""),
                Line::from(vec![
                    Span::styled("  Press ", colors.text_dim()),
                    Span::styled("[r]", colors.key_hint()),
                    Span::styled(" to retry or ", colors.text_dim()),
                    Span::styled("[Esc]", colors.key_hint()),
                    Span::styled(" to go back", colors.text_dim()),
                ]),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
        }
        FetchState::Success => {
            let Some(country) = state.detail.country.clone() else {
                return;
            };
            render_detail_body(frame, state, inner, &country);
        }
    }
}

fn render_detail_skeleton(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();

    let shimmer = (state.current_tick() / 3) % 3;
    let mut lines = vec![Line::from("")];
    for i in 0..10u64 {
        let label = 10 + (i + shimmer) % 3 * 2;
        let value = 20 + (i * 7 + shimmer) % 12;
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", "░".repeat(label as usize)), colors.skeleton()),
            Span::styled("    ", Style::default()),
            Span::styled("░".repeat(value as usize), colors.skeleton()),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_detail_body(frame: &mut Frame, state: &mut AppState, area: Rect, country: &Country) {
    let colors = state.theme.colors();

    let artwork = state.detail.artwork;
    let artwork_url = artwork.url(country).map(str::to_string);
    let show_image = state.config.show_flags
        && artwork_url
            .as_deref()
            .is_some_and(|url| state.has_image(url));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if show_image {
            vec![Constraint::Length(12), Constraint::Length(1), Constraint::Min(0)]
        } else {
            vec![Constraint::Min(0)]
        })
        .split(area);

    let text_area = if show_image {
        if let Some(url) = artwork_url.as_deref() {
            if let Some(protocol) = state.image_protocol(url) {
                frame.render_stateful_widget(StatefulImage::new(), chunks[0], protocol);
            }
        }
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("  {} ", artwork.label()), colors.text_muted()),
                Span::styled("(Tab to switch)", colors.text_dim()),
            ])),
            chunks[1],
        );
        chunks[2]
    } else {
        chunks[0]
    };

    let wrap_width = text_area.width.saturating_sub(22).max(20) as usize;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", country.name.official),
            colors.text_secondary().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];

    let mut row = |label: &str, value: Option<String>| {
        let Some(value) = value else { return };
        let wrapped = textwrap::wrap(&value, wrap_width);
        let mut first = true;
        for part in wrapped {
            if first {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {label:<18}"), colors.text_dim()),
                    Span::styled(part.into_owned(), colors.text()),
                ]));
                first = false;
            } else {
                lines.push(Line::from(vec![
                    Span::styled(" ".repeat(20), Style::default()),
                    Span::styled(part.into_owned(), colors.text()),
                ]));
            }
        }
    };

    row("Population", Some(country.population_display()));
    row(
        "Region",
        (!country.region.is_empty()).then(|| country.region.clone()),
    );
    row("Subregion", country.subregion.clone());
    row("Capital", country.primary_capital().map(String::from));
    row("Official languages", country.languages_display());
    row("Area", Some(country.area_display()));
    row("Currency", country.currency_display());
    row("Time zone", country.primary_timezone().map(String::from));
    row("Local time", country.local_time());
    row(
        "Driving side",
        (!country.car.side.is_empty()).then(|| {
            let mut chars = country.car.side.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        }),
    );
    row("Calling code", country.calling_code());
    row(
        "Borders",
        (!country.borders.is_empty()).then(|| country.borders.join(", ")),
    );
    row(
        "Continents",
        (!country.continents.is_empty()).then(|| country.continents.join(", ")),
    );

    if country.map_url().is_some() {
        lines.extend([
            Line::from(""),
            Line::from(vec![
                Span::styled("  Press ", colors.text_dim()),
                Span::styled("[o]", colors.key_hint()),
                Span::styled(" to open in Google Maps", colors.text_dim()),
            ]),
        ]);
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.detail.scroll, 0));
    frame.render_widget(paragraph, text_area);
}

fn render_filter_modal(frame: &mut Frame, state: &AppState) {
    let colors = state.theme.colors();
    let area = frame.area();

    let popup_area = centered_rect(50, 70, area);

    // First render a solid background block to cover everything underneath
    let bg_block = Block::default().style(Style::default().bg(colors.bg_secondary));
    frame.render_widget(Clear, popup_area);
    frame.render_widget(bg_block, popup_area);

    let mut items: Vec<ListItem> = Vec::new();
    let mut rows: Vec<Option<usize>> = Vec::new(); // display row -> entry index

    items.push(ListItem::new(Line::styled(" Continent", colors.section_header())));
    rows.push(None);

    let checkbox_line = |entry_idx: usize, label: &str, checked: bool| {
        let cursor = if entry_idx == state.filter_cursor { "▸" } else { " " };
        let mark = if checked { "[x]" } else { "[ ]" };
        let style = if entry_idx == state.filter_cursor {
            colors.selected()
        } else if checked {
            colors.text_info()
        } else {
            colors.text()
        };
        ListItem::new(Line::styled(format!(" {cursor} {mark} {label}"), style))
    };

    for (i, continent) in filter::CONTINENTS.iter().enumerate() {
        let checked = state.criteria.continents.iter().any(|c| c == continent);
        items.push(checkbox_line(i, continent, checked));
        rows.push(Some(i));
    }

    items.push(ListItem::new(Line::from("")));
    rows.push(None);
    items.push(ListItem::new(Line::styled(" Time Zone", colors.section_header())));
    rows.push(None);

    for (i, timezone) in state.timezone_options.iter().enumerate() {
        let entry_idx = filter::CONTINENTS.len() + i;
        let checked = state.criteria.timezones.contains(timezone);
        items.push(checkbox_line(entry_idx, timezone, checked));
        rows.push(Some(entry_idx));
    }

    let selected_row = rows
        .iter()
        .position(|r| *r == Some(state.filter_cursor))
        .unwrap_or(0);
    let mut list_state = ListState::default();
    list_state.select(Some(selected_row));

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors.primary))
            .style(Style::default().bg(colors.bg_secondary))
            .title(format!(
                " Filter ({} selected) ",
                state.criteria.selection_count()
            ))
            .title_style(colors.text_primary())
            .title_bottom(Line::from(" Space toggle │ r reset │ ↵ apply ").centered()),
    );

    frame.render_stateful_widget(list, popup_area, &mut list_state);
}

fn render_theme_picker(frame: &mut Frame, state: &AppState) {
    let colors = state.theme.colors();
    let area = frame.area();

    let popup_area = centered_rect(50, 70, area);

    // First render a solid background block to cover everything underneath
    let bg_block = Block::default().style(Style::default().bg(colors.bg));
    frame.render_widget(Clear, popup_area);
    frame.render_widget(bg_block, popup_area);

    let themes = Theme::all();
    let items: Vec<ListItem> = themes
        .iter()
        .enumerate()
        .map(|(i, theme_name)| {
            let palette = theme_name.palette();
            let selected = i == state.theme_picker_index;

            let preview = format!(
                "  {} {} ",
                if selected { "▸" } else { " " },
                theme_name.display_name()
            );

            let style = if selected {
                Style::default()
                    .fg(palette.accent)
                    .bg(palette.selection)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg).bg(colors.bg)
            };

            ListItem::new(Line::from(vec![
                Span::styled(preview, style),
                Span::styled("█", Style::default().fg(palette.accent).bg(colors.bg)),
                Span::styled("█", Style::default().fg(palette.secondary).bg(colors.bg)),
                Span::styled("█", Style::default().fg(palette.success).bg(colors.bg)),
                Span::styled("█", Style::default().fg(palette.warning).bg(colors.bg)),
            ]))
        })
        .collect();

    let theme_list = List::new(items)
        .style(Style::default().bg(colors.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.primary))
                .border_type(BorderType::Rounded)
                .style(Style::default().bg(colors.bg))
                .title(format!(
                    " 🎨 Select Theme ({}/{}) ",
                    state.theme_picker_index + 1,
                    themes.len()
                ))
                .title_bottom(Line::from(" ↑↓ navigate │ ↵ apply │ Esc cancel ").centered()),
        );

    frame.render_widget(theme_list, popup_area);
}

fn render_help_popup(frame: &mut Frame, state: &AppState) {
    let colors = state.theme.colors();
    let area = frame.area();

    let popup_area = centered_rect(50, 70, area);

    // First render a solid background block to cover everything underneath
    let bg_block = Block::default().style(Style::default().bg(colors.bg_secondary));
    frame.render_widget(Clear, popup_area);
    frame.render_widget(bg_block, popup_area);

    let help_content = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Navigation",
            colors.text_primary().add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  j/k or ↑/↓       ", colors.key_hint()),
            Span::styled("Move selection / scroll", colors.text()),
        ]),
        Line::from(vec![
            Span::styled("  g/G              ", colors.key_hint()),
            Span::styled("Go to first/last country", colors.text()),
        ]),
        Line::from(vec![
            Span::styled("  Enter or l       ", colors.key_hint()),
            Span::styled("Open country details", colors.text()),
        ]),
        Line::from(vec![
            Span::styled("  Esc or h         ", colors.key_hint()),
            Span::styled("Back / clear search", colors.text()),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Search & Filter",
            colors.text_primary().add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  /                ", colors.key_hint()),
            Span::styled("Search by name", colors.text()),
        ]),
        Line::from(vec![
            Span::styled("  f                ", colors.key_hint()),
            Span::styled("Continent & timezone filters", colors.text()),
        ]),
        Line::from(vec![
            Span::styled("  Space            ", colors.key_hint()),
            Span::styled("Toggle filter entry", colors.text()),
        ]),
        Line::from(vec![
            Span::styled("  r                ", colors.key_hint()),
            Span::styled("Reset filters / refresh / retry", colors.text()),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Details",
            colors.text_primary().add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  Tab              ", colors.key_hint()),
            Span::styled("Switch flag / coat of arms", colors.text()),
        ]),
        Line::from(vec![
            Span::styled("  o                ", colors.key_hint()),
            Span::styled("Open country on Google Maps", colors.text()),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  General",
            colors.text_primary().add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  t                ", colors.key_hint()),
            Span::styled("Theme picker", colors.text()),
        ]),
        Line::from(vec![
            Span::styled("  [ / ]            ", colors.key_hint()),
            Span::styled("Cycle theme", colors.text()),
        ]),
        Line::from(vec![
            Span::styled("  A                ", colors.key_hint()),
            Span::styled("About", colors.text()),
        ]),
        Line::from(vec![
            Span::styled("  ?                ", colors.key_hint()),
            Span::styled("This help", colors.text()),
        ]),
        Line::from(vec![
            Span::styled("  q or Ctrl-C      ", colors.key_hint()),
            Span::styled("Quit", colors.text()),
        ]),
    ];

    let help = Paragraph::new(help_content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors.primary))
            .style(Style::default().bg(colors.bg_secondary))
            .title(" ⌨ Keyboard Shortcuts ")
            .title_style(colors.text_primary())
            .title_bottom(Line::from(" Esc close ").centered()),
    );

    frame.render_widget(help, popup_area);
}

fn render_about_dialog(frame: &mut Frame, state: &AppState) {
    let colors = state.theme.colors();
    let area = frame.area();

    let popup_area = centered_rect(80, 60, area);

    // First render a solid background block to cover everything underneath
    let bg_block = Block::default().style(Style::default().bg(colors.bg));
    frame.render_widget(Clear, popup_area);
    frame.render_widget(bg_block, popup_area);

    let logo = [
        " █████╗ ████████╗██╗      █████╗ ███████╗",
        "██╔══██╗╚══██╔══╝██║     ██╔══██╗██╔════╝",
        "███████║   ██║   ██║     ███████║███████╗",
        "██╔══██║   ██║   ██║     ██╔══██║╚════██║",
        "██║  ██║   ██║   ███████╗██║  ██║███████║",
        "╚═╝  ╚═╝   ╚═╝   ╚══════╝╚═╝  ╚═╝╚══════╝",
    ];

    let mut lines: Vec<Line> = logo
        .iter()
        .map(|line| Line::from(Span::styled(*line, Style::default().fg(colors.primary))))
        .collect();
    lines.extend([
        Line::from(""),
        Line::from(Span::styled(
            format!("{ICON} A beautiful terminal country browser"),
            Style::default()
                .fg(colors.fg)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Version: ", colors.text_muted()),
            Span::styled(
                crate::VERSION,
                Style::default()
                    .fg(colors.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Data: ", colors.text_muted()),
            Span::styled("restcountries.com", colors.text()),
        ]),
        Line::from(vec![
            Span::styled("License: ", colors.text_muted()),
            Span::styled("GPL-3.0-or-later", colors.text()),
        ]),
        Line::from(vec![
            Span::styled("Repo: ", colors.text_muted()),
            Span::styled(crate::REPO_URL, Style::default().fg(colors.primary)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Built with Rust 🦀 + Ratatui",
            colors.text_muted().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " [G] ",
                Style::default()
                    .fg(colors.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Open GitHub"),
            Span::raw("    "),
            Span::styled(" [Esc] ", colors.text_muted()),
            Span::raw("Close"),
        ]),
    ]);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors.primary))
            .style(Style::default().bg(colors.bg))
            .title(format!(" {ICON} About Atlas "))
            .title_style(
                Style::default()
                    .fg(colors.primary)
                    .add_modifier(Modifier::BOLD),
            ),
    );

    frame.render_widget(paragraph, popup_area);
}

fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let colors = state.theme.colors();

    // Spinner animation frames
    const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

    let loading_indicator = if state.loading() {
        let frame_idx = (state.current_tick() / 2) as usize % SPINNER.len();
        format!("{} ", SPINNER[frame_idx])
    } else {
        String::new()
    };

    let content = if state.status.is_empty() {
        vec![
            Span::styled(" ", Style::default()),
            Span::styled(&loading_indicator, colors.text_secondary()),
            Span::styled("/", colors.key_hint()),
            Span::styled(": search  ", colors.text_muted()),
            Span::styled("f", colors.key_hint()),
            Span::styled(": filter  ", colors.text_muted()),
            Span::styled("t", colors.key_hint()),
            Span::styled(": theme  ", colors.text_muted()),
            Span::styled("?", colors.key_hint()),
            Span::styled(": help  ", colors.text_muted()),
            Span::styled("q", colors.key_hint()),
            Span::styled(": quit", colors.text_muted()),
        ]
    } else {
        vec![
            Span::styled(" ", Style::default()),
            Span::styled(&loading_indicator, colors.text_secondary()),
            Span::styled(&state.status, colors.text_secondary()),
        ]
    };

    let status =
        Paragraph::new(Line::from(content)).style(Style::default().bg(colors.bg_secondary));
    frame.render_widget(status, area);
}

/// Helper function to create a centered rect using a percentage of the available rect
const fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_width = r.width * percent_x / 100;
    let popup_height = r.height * percent_y / 100;
    let x = r.x + (r.width - popup_width) / 2;
    let y = r.y + (r.height - popup_height) / 2;
    Rect {
        x,
        y,
        width: popup_width,
        height: popup_height,
    }
}
