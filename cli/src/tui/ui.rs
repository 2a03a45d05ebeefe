use planfact_core::{
    format_count, format_currency, render_cell, AggregateView, DataOrigin, MonthMap, MonthlyMetric,
    VisibleWindow,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::App;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    plan: Color,
    fact: Color,
    total_bg: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    plan: Color::Blue,
    fact: Color::Green,
    total_bg: Color::Rgb(20, 30, 60),
};

const METRIC_LABEL_WIDTH: u16 = 16;

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Table
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let Some(view) = app.state.ready_view() else {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(THEME.muted))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
        f.render_widget(loading, main_chunks[1]);
        return;
    };

    draw_header(f, view, app, main_chunks[0]);
    draw_table(f, view, &app.state.window, app.selected(), main_chunks[1]);

    let help = Line::from(vec![
        Span::styled("MONTHS: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::styled(" ROWS: ", Style::default().fg(THEME.muted)),
        Span::styled("j/k ", Style::default().fg(THEME.text)),
        Span::styled(" RELOAD: ", Style::default().fg(THEME.muted)),
        Span::styled("r ", Style::default().fg(THEME.text)),
        Span::styled(" QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    f.render_widget(Paragraph::new(help).alignment(Alignment::Center), main_chunks[2]);
}

fn draw_header(f: &mut Frame, view: &AggregateView, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20),
            Constraint::Min(1),
            Constraint::Length(20),
        ])
        .split(inner);

    let title = Paragraph::new(Span::styled(
        "PLAN / FACT",
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(title, chunks[0]);

    let window = &app.state.window;
    let nav = Line::from(vec![
        Span::styled(" ← ", Style::default().fg(THEME.text)),
        Span::styled(
            format!("Year {}", view.year),
            Style::default().fg(THEME.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} - {} ", window.first(), window.last()),
            Style::default().fg(THEME.muted),
        ),
        Span::styled(" → ", Style::default().fg(THEME.text)),
    ]);
    f.render_widget(Paragraph::new(nav).alignment(Alignment::Center), chunks[1]);

    let (origin, color) = match app.state.origin {
        Some(DataOrigin::Live) => ("live", THEME.fact),
        Some(DataOrigin::Mock) => ("mock data", Color::Yellow),
        None => ("", THEME.muted),
    };
    f.render_widget(
        Paragraph::new(Span::styled(origin, Style::default().fg(color)))
            .alignment(Alignment::Right),
        chunks[2],
    );
}

fn draw_table(
    f: &mut Frame,
    view: &AggregateView,
    window: &VisibleWindow,
    selected: Option<usize>,
    area: Rect,
) {
    let name_width = view
        .managers
        .iter()
        .map(|m| m.name.width())
        .max()
        .unwrap_or(0)
        .max(8) as u16
        + 1;

    let mut widths = vec![Constraint::Length(name_width), Constraint::Length(METRIC_LABEL_WIDTH)];
    widths.extend(window.iter().flat_map(|_| [Constraint::Fill(1), Constraint::Fill(1)]));

    let mut header_cells = vec![Cell::from(""), Cell::from("")];
    for month in window.iter() {
        header_cells.push(Cell::from(Text::from(vec![
            Line::from(month.display_name()).style(Style::default().add_modifier(Modifier::BOLD)),
            Line::from("Plan").style(Style::default().fg(THEME.plan)),
        ])));
        header_cells.push(Cell::from(Text::from(vec![
            Line::from(""),
            Line::from("Fact").style(Style::default().fg(THEME.fact)),
        ])));
    }
    let header = Row::new(header_cells)
        .height(2)
        .bottom_margin(1)
        .style(Style::default().fg(THEME.primary));

    let mut rows = vec![metric_row(
        "Total",
        ("Total income", "Total partners"),
        (&view.total_income, &view.total_active_partners),
        window,
    )
    .style(Style::default().bg(THEME.total_bg).add_modifier(Modifier::BOLD))];

    rows.extend(view.managers.iter().map(|manager| {
        metric_row(
            &manager.name,
            ("Income", "Active partners"),
            (&manager.income, &manager.active_partners),
            window,
        )
    }));

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(" Managers ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .row_highlight_style(Style::default().bg(THEME.muted).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    // Row 0 is the totals block.
    let mut state = TableState::default().with_selected(selected.map(|i| i + 1));
    f.render_stateful_widget(table, area, &mut state);
}

fn metric_row<'a>(
    name: &'a str,
    labels: (&'a str, &'a str),
    values: (&MonthMap<MonthlyMetric>, &MonthMap<MonthlyMetric>),
    window: &VisibleWindow,
) -> Row<'a> {
    let mut cells = vec![
        Cell::from(name),
        Cell::from(Text::from(vec![
            Line::from(labels.0).style(Style::default().fg(THEME.muted)),
            Line::from(labels.1).style(Style::default().fg(THEME.muted)),
        ])),
    ];

    for month in window.iter() {
        let (income_plan, income_fact) = render_cell(values.0.get(month), format_currency);
        let (partners_plan, partners_fact) = render_cell(values.1.get(month), format_count);
        cells.push(Cell::from(Text::from(vec![
            Line::from(income_plan),
            Line::from(partners_plan),
        ])));
        cells.push(Cell::from(Text::from(vec![
            Line::from(income_fact),
            Line::from(partners_fact),
        ])));
    }

    Row::new(cells).height(2)
}
