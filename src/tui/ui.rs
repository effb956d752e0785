//! Stateless rendering of the draft screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use super::app::{App, Focus};
use crate::roster::{Player, TeamColor};

const HELP: &str = "Tab: Focus | Enter: Add | Del: Remove | F2/F3: 2/3 teams | F5: Draft | F6: Reset teams | F7: Reset players | F8: Reset captains | Esc: Quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Status
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Roster Draft")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_status(frame, chunks[1], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);
    draw_roster(frame, body[0], app);
    draw_teams(frame, body[1], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    if let Some(notice) = app.notice() {
        draw_notice(frame, area, notice);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let draft = app.draft();
    let roster = draft.roster();
    let phase = if draft.is_distributing() {
        format!(
            "drafted {}/{} | next: {}",
            roster.assigned_count(),
            roster.players().len(),
            draft.next_team()
        )
    } else {
        "idle".to_string()
    };
    let text = format!(
        "{} | {} | {}",
        draft.team_count().label(),
        phase,
        app.status()
    );
    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_roster(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(4),
            Constraint::Length(6),
        ])
        .split(area);

    draw_form(frame, chunks[0], app);
    draw_players(frame, chunks[1], app);
    draw_captains(frame, chunks[2], app);
}

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool, enabled: bool) -> Line<'a> {
    let style = match (enabled, focused) {
        (false, _) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        (true, false) => Style::default(),
    };
    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
        Span::styled(format!("{:<14}", label), style),
        Span::styled(format!("{}{}", value, cursor), style),
    ])
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.form();
    let focus = app.focus();
    let captains_open = !app.draft().captains_full();
    let team_label = if app.draft().team_count().requires_team_label() {
        "Team name:"
    } else {
        "Team name (opt):"
    };

    let lines = vec![
        field_line("Player name:", &form.player_name, focus == Focus::PlayerName, true),
        field_line("Number:", &form.player_number, focus == Focus::PlayerNumber, true),
        field_line("Captain name:", &form.captain_name, focus == Focus::CaptainName, captains_open),
        field_line(team_label, &form.captain_team, focus == Focus::CaptainTeam, captains_open),
    ];
    let title = if captains_open { "Add" } else { "Add (captains full)" };
    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

fn player_line(player: &Player, highlighted: bool) -> ListItem<'static> {
    let team = player
        .team()
        .map(|t| format!(" [{}]", t))
        .unwrap_or_default();
    let style = if highlighted {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    ListItem::new(Span::styled(
        format!("#{:<4} {}{}", player.number(), player.name(), team),
        style,
    ))
}

fn list_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default().borders(Borders::ALL).border_style(border).title(title)
}

fn draw_players(frame: &mut Frame, area: Rect, app: &App) {
    let players = app.draft().roster().players();
    let items: Vec<ListItem> = players
        .iter()
        .map(|p| player_line(p, app.highlighted() == Some(p.id())))
        .collect();

    let focused = app.focus() == Focus::Players;
    let list = List::new(items)
        .block(list_block(format!("Players ({})", players.len()), focused))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused && !players.is_empty() {
        state.select(Some(app.player_selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_captains(frame: &mut Frame, area: Rect, app: &App) {
    let draft = app.draft();
    let captains = draft.roster().captains();
    let items: Vec<ListItem> = captains
        .iter()
        .map(|c| {
            ListItem::new(Span::styled(
                format!("{} - {} ({})", c.name(), c.team_label(), c.slot()),
                Style::default().fg(team_color(c.color())),
            ))
        })
        .collect();

    let focused = app.focus() == Focus::Captains;
    let title = format!("Captains {}/{}", captains.len(), draft.team_count().value());
    let list = List::new(items)
        .block(list_block(title, focused))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused && !captains.is_empty() {
        state.select(Some(app.captain_selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_teams(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.draft().snapshot();
    let count = snapshot.teams.len().max(1) as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(snapshot.teams.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (sheet, column) in snapshot.teams.iter().zip(columns.iter()) {
        let color = sheet.color.map(team_color).unwrap_or(Color::White);
        let mut lines = vec![Line::from(Span::styled(
            format!("Captain: {}", sheet.captain.as_deref().unwrap_or("-")),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))];
        lines.extend(sheet.players.iter().map(|p| {
            let style = if app.highlighted() == Some(p.id()) {
                Style::default().fg(Color::Black).bg(color)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("#{} {}", p.number(), p.name()), style))
        }));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!("{} ({})", sheet.label, sheet.players.len()));
        frame.render_widget(Paragraph::new(lines).block(block), *column);
    }
}

fn draw_notice(frame: &mut Frame, area: Rect, notice: &str) {
    let popup = center_rect(area, 50, 7);
    frame.render_widget(Clear, popup);
    let paragraph = Paragraph::new(vec![
        Line::from(notice.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title("Cannot draft"),
    );
    frame.render_widget(paragraph, popup);
}

fn team_color(color: TeamColor) -> Color {
    match color {
        TeamColor::Red => Color::Red,
        TeamColor::Blue => Color::Blue,
        TeamColor::Green => Color::Green,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
