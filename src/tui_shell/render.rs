use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use time::OffsetDateTime;

use crate::controller::SubmissionMode;
use crate::labels::branches_label;
use crate::model::{Location, Paragraph as StoryParagraph};
use crate::page::{LockStatus, NoticeKind, PageModel};
use crate::section::VisibleSection;

use super::app::App;
use super::time_utils::fmt_created;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(7),
            Constraint::Length(3),
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    draw_paragraphs(frame, app, chunks[1]);
    draw_section(frame, app, chunks[2]);
    draw_status(frame, app, chunks[3]);
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mode = match app.mode() {
        SubmissionMode::Reserved => "lock+vote",
        SubmissionMode::Linear => "linear",
    };
    let section = app
        .page
        .visible_section()
        .element_id()
        .unwrap_or("loading");
    let spans = vec![
        Span::styled(
            "Storyteller",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(app.location.to_string(), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(format!("#{}", section), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(mode, Style::default().fg(Color::Gray)),
    ];
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn draw_paragraphs(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let area = if app.page.branches.is_empty() {
        area
    } else {
        let height = (app.page.branches.len() as u16 + 2).min(area.height / 2);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(height)])
            .split(area);
        draw_branches(frame, &app.page.branches, chunks[1]);
        chunks[0]
    };

    let now = OffsetDateTime::now_utc();
    let items: Vec<ListItem> = app
        .page
        .paragraphs
        .iter()
        .map(|p| {
            let mut meta = vec![Span::styled(
                format!("{:>3}. ", p.number),
                Style::default().fg(Color::DarkGray),
            )];
            if let Some(created) = p.created {
                meta.push(Span::styled(
                    fmt_created(created, app.ts_mode, now),
                    Style::default().fg(Color::Gray),
                ));
            }
            if p.num_branches > 0 {
                meta.push(Span::styled(
                    format!("  {}", branches_label(p.num_branches)),
                    Style::default().fg(Color::Magenta),
                ));
            }
            ListItem::new(vec![Line::from(meta), Line::from(format!("     {}", p.text))])
        })
        .collect();

    let title = format!("Story ({} paragraphs)", app.page.paragraphs.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn draw_branches(frame: &mut ratatui::Frame, branches: &[StoryParagraph], area: Rect) {
    let items: Vec<ListItem> = branches
        .iter()
        .map(|b| {
            let at = match b.story_id {
                Some(id) => Location::paragraph(id, b.number).to_string(),
                None => format!("#{}", b.number),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<8} ", at), Style::default().fg(Color::Magenta)),
                Span::raw(b.text.clone()),
            ]))
        })
        .collect();
    let title = format!("Continues in {}", branches_label(branches.len() as u32));
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn draw_section(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let page = &app.page;
    let section = page.visible_section();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(section.title(), Style::default().fg(Color::Yellow)));

    let lines = match section {
        VisibleSection::SuggestParagraph => suggest_lines(app),
        VisibleSection::Locked => vec![Line::from(
            "Another writer holds the lock. The story will update when they are done.",
        )],
        VisibleSection::Voting => vec![
            Line::from(Span::styled(
                page.review_text.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from("y: vote yes   n: vote no"),
        ],
        VisibleSection::Pending => vec![
            Line::from(Span::styled(
                page.review_text.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(page.yes_label.clone(), Style::default().fg(Color::Green)),
                Span::raw("  "),
                Span::styled(page.no_label.clone(), Style::default().fg(Color::Red)),
            ]),
        ],
        VisibleSection::None => vec![Line::from("Loading story...")],
    };

    let body = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(body, area);
}

fn suggest_lines(app: &App) -> Vec<Line<'static>> {
    let page = &app.page;
    let (before, after) = app.input.split();
    let input_style = if page.controls_enabled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut lines = vec![Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::styled(before.to_string(), input_style),
        Span::styled("_", Style::default().fg(Color::Cyan)),
        Span::styled(after.to_string(), input_style),
    ])];

    let mut info = Vec::new();
    if let Some(counter) = &page.counter {
        let style = if counter.past_limit {
            Style::default().fg(Color::Red)
        } else if counter.close_to_limit {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        info.push(Span::styled(counter.label(), style));
        if !counter.submit_enabled {
            info.push(Span::styled(
                "  (submit disabled)",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    if !page.controls_enabled {
        info.push(Span::styled(
            "  submitting...",
            Style::default().fg(Color::Cyan),
        ));
    }
    lines.push(Line::from(info));
    lines.push(lock_line(page));
    lines
}

fn lock_line(page: &PageModel) -> Line<'static> {
    match &page.lock {
        LockStatus::Hidden => Line::from(""),
        LockStatus::Requesting => Line::from(Span::styled(
            "Requesting the lock...",
            Style::default().fg(Color::Gray),
        )),
        LockStatus::Seconds { label, expired } if *expired => Line::from(vec![
            Span::styled(
                format!("Lock: {}", label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled("  expired", Style::default().fg(Color::Red)),
        ]),
        LockStatus::Seconds { label, .. } => Line::from(Span::styled(
            format!("You have the lock for {}.", label),
            Style::default().fg(Color::Green),
        )),
        LockStatus::Error(msg) => Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(Color::Red),
        )),
    }
}

fn draw_status(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    if let Some(notice) = &app.page.notice {
        let style = match notice.kind {
            NoticeKind::Info => Style::default().fg(Color::White),
            NoticeKind::Error => Style::default().fg(Color::Red),
        };
        spans.push(Span::styled(notice.text.clone(), style));
    }
    let hint = if app.editing() {
        "enter: submit  ctrl-b: branch  ctrl-t: time  esc: quit"
    } else {
        "ctrl-b: branch  ctrl-t: time  q: quit"
    };
    let status = Paragraph::new(vec![
        Line::from(spans),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ])
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(status, area);
}
