// File: src/tui/view.rs
use crate::carousel::CarouselView;
use crate::color_utils;
use crate::date_utils;
use crate::event_list::{EventListView, EventPage};
use crate::model::EventRecord;
use crate::tui::state::AppState;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const GRID_COLUMNS: usize = 3;

pub fn draw(f: &mut Frame, state: &AppState) {
    let full_help_text = vec![
        Line::from(vec![
            Span::styled(
                " PAGES ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" h/l or ←/→:Prev/Next  1-9:Go to page"),
        ]),
        Line::from(vec![
            Span::styled(
                " CATÉGORIES ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" t:Next category  0:All"),
        ]),
        Line::from(vec![
            Span::styled(
                " ÉVÉNEMENTS ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" j/k:Select  Enter:Details  Esc:Close  r:Reload  q:Quit"),
        ]),
    ];

    let footer_height = if state.show_full_help {
        Constraint::Length(full_help_text.len() as u16 + 2)
    } else {
        Constraint::Length(3)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            footer_height,
        ])
        .split(f.area());

    // --- Carousel ---
    draw_carousel(f, &state.carousel.derive(&state.data), v_chunks[0]);

    // --- Event list ---
    match state.event_list.derive(&state.data) {
        EventListView::Error => {
            draw_notice(f, "Une erreur est survenue.", Color::Red, v_chunks[2]);
        }
        EventListView::Loading => {
            draw_notice(f, "Chargement en cours...", Color::Reset, v_chunks[2]);
        }
        EventListView::Ready(page) => {
            draw_categories(f, &page, v_chunks[1]);
            draw_cards(f, &page, state.selected_card, v_chunks[2]);
            draw_pagination(f, &page, v_chunks[3]);
        }
    }

    // Footer
    let footer_area = v_chunks[4];
    f.render_widget(Clear, footer_area);
    if state.show_full_help {
        let p = Paragraph::new(full_help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Raccourcis (? pour réduire) ")
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(p, footer_area);
    } else {
        let f_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(footer_area);
        let status_color = if state.data.is_error() {
            Color::Red
        } else {
            Color::Cyan
        };
        let status = Paragraph::new(state.message.clone())
            .style(Style::default().fg(status_color))
            .block(
                Block::default()
                    .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                    .title(" Status "),
            );
        let help = Paragraph::new("h/l:Page t:Type Ret:Détails ?:Help q:Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                    .title(" Actions "),
            );
        f.render_widget(status, f_chunks[0]);
        f.render_widget(help, f_chunks[1]);
    }

    // --- Detail overlay ---
    if let Some(event) = state.open_detail() {
        draw_detail(f, event);
    }
}

fn draw_notice(f: &mut Frame, text: &str, color: Color, area: Rect) {
    let p = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Nos réalisations "));
    f.render_widget(p, area);
}

fn draw_carousel(f: &mut Frame, view: &CarouselView<'_>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" À la une ");
    let Some(slide) = view.active_slide() else {
        f.render_widget(block, area);
        return;
    };

    let indicators: Vec<Span> = view
        .indicators()
        .into_iter()
        .map(|active| {
            if active {
                Span::styled("● ", Style::default().fg(Color::Yellow))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let lines = vec![
        Line::from(Span::styled(
            slide.event.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(slide.event.description.clone()),
        Line::from(Span::styled(
            slide.month,
            Style::default().fg(Color::LightBlue),
        )),
        Line::from(indicators).alignment(Alignment::Center),
    ];

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(p, area);
}

fn draw_categories(f: &mut Frame, page: &EventPage<'_>, area: Rect) {
    let highlighted = Style::default()
        .add_modifier(Modifier::BOLD)
        .bg(Color::Blue);

    let mut spans = vec![if page.selected_type.is_none() {
        Span::styled(" Toutes ", highlighted)
    } else {
        Span::raw(" Toutes ")
    }];

    for category in &page.available_types {
        let (r, g, b) = color_utils::category_color(category);
        let style = if page.selected_type == Some(category.as_str()) {
            highlighted
        } else {
            Style::default().fg(Color::Rgb(r, g, b))
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", category), style));
    }

    let p = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Catégories [t] "),
    );
    f.render_widget(p, area);
}

fn draw_cards(f: &mut Frame, page: &EventPage<'_>, selected: usize, area: Rect) {
    let title = format!(" Nos réalisations ({}) ", page.total_filtered);
    let outer = Block::default().borders(Borders::ALL).title(title);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    if page.cards.is_empty() {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(inner);

    for (idx, card) in page.cards.iter().enumerate() {
        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); GRID_COLUMNS])
            .split(rows[idx / GRID_COLUMNS]);
        let cell = row[idx % GRID_COLUMNS];

        let border_style = if idx == selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let (r, g, b) = color_utils::category_color(&card.event.event_type);
        let lines = vec![
            Line::from(Span::styled(
                format!(" {} ", card.event.event_type),
                Style::default().fg(Color::Black).bg(Color::Rgb(r, g, b)),
            )),
            Line::from(date_utils::month_name(&card.event.date)),
        ];

        let p = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", card.event.title))
                .border_style(border_style),
        );
        f.render_widget(p, cell);
    }
}

fn draw_pagination(f: &mut Frame, page: &EventPage<'_>, area: Rect) {
    let spans: Vec<Span> = page
        .pages
        .iter()
        .map(|control| {
            let style = if control.active {
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            Span::styled(format!(" {} ", control.number), style)
        })
        .collect();

    let p = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Pages "));
    f.render_widget(p, area);
}

fn draw_detail(f: &mut Frame, event: &EventRecord) {
    let area = centered_rect(60, 60, f.area());

    let mut lines = vec![
        Line::from(Span::styled(
            event.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} {}",
            date_utils::month_name(&event.date),
            event.date.format("%Y")
        )),
    ];
    if let Some(periode) = &event.periode {
        lines.push(Line::from(periode.clone()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(event.description.clone()));
    if let Some(guests) = event.nb_guesses {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("{} participants", guests)));
    }
    if !event.prestations.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Prestations",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for item in &event.prestations {
            lines.push(Line::from(format!(" - {}", item)));
        }
    }

    let popup = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(format!(" {} (Esc) ", event.event_type))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(r);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}
