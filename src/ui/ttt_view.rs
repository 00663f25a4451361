use crate::tictactoe::{Mark, TttGame, TttOutcome};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Cyan,
        Mark::O => Color::Magenta,
    }
}

pub fn render(frame: &mut Frame, game: &TttGame, selected_cell: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Grid
            Constraint::Length(3), // Scores
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_grid(frame, game, selected_cell, chunks[1]);
    render_scores(frame, game, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game: &TttGame, area: ratatui::layout::Rect) {
    let (status, color) = match game.outcome() {
        Some(TttOutcome::Winner(mark)) => (format!("{} wins!", mark.name()), mark_color(mark)),
        Some(TttOutcome::Tie) => ("It's a tie!".to_string(), Color::DarkGray),
        None => (
            format!("Turn: {}", game.turn().name()),
            mark_color(game.turn()),
        ),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Tic-Tac-Toe"),
        );

    frame.render_widget(header, area);
}

fn render_grid(frame: &mut Frame, game: &TttGame, selected_cell: usize, area: ratatui::layout::Rect) {
    let mut lines = vec![Line::from("┌───┬───┬───┐")];

    for row in 0..3 {
        let mut spans = vec![Span::raw("│")];
        for col in 0..3 {
            let index = row * 3 + col;
            let (symbol, color) = match game.cell(index) {
                Some(mark) => (format!(" {} ", mark.name()), mark_color(mark)),
                None => ("   ".to_string(), Color::DarkGray),
            };
            let mut style = Style::default().fg(color);
            if index == selected_cell {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(symbol, style));
            spans.push(Span::raw("│"));
        }
        lines.push(Line::from(spans));
        if row < 2 {
            lines.push(Line::from("├───┼───┼───┤"));
        }
    }

    lines.push(Line::from("└───┴───┴───┘"));

    let grid = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(grid, area);
}

fn render_scores(frame: &mut Frame, game: &TttGame, area: ratatui::layout::Rect) {
    let (wins_x, wins_o) = game.scores();
    let line = Line::from(vec![
        Span::styled("X", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(format!(": {wins_x}   ")),
        Span::styled("O", Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
        Span::raw(format!(": {wins_o}")),
    ]);

    let scores = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));

    frame.render_widget(scores, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line1 = Line::from("Arrows: Move  |  Enter: Mark  |  R: Restart  |  Tab: Connect Four  |  Q: Quit");
    let line2 = Line::from("X: X goes first   O: O goes first");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
