use std::io::{self, Stdout, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use makespan_plot_core::views::line_plot::render_line_plot;
use makespan_plot_core::{Case, LogDocument};
use makespan_plot_protocol::{RenderCommand, TextAlign, ThemeToken, Viewport};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Block,
        canvas::{Canvas, Context, Line, Rectangle},
    },
};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Cells have one glyph size, so text at or above this size is drawn bold.
const BOLD_FONT_SIZE: f64 = 12.0;

/// What to do after a figure is dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Next,
    Stop,
}

fn theme_to_color(token: ThemeToken) -> Color {
    match token {
        ThemeToken::Background => Color::Black,
        ThemeToken::Border => Color::DarkGray,
        ThemeToken::TextPrimary => Color::White,
        ThemeToken::TextSecondary => Color::Gray,
        ThemeToken::TextMuted => Color::DarkGray,
        ThemeToken::AxisLine => Color::Gray,
        ThemeToken::AxisTick => Color::Gray,
        ThemeToken::GridLine => Color::Rgb(45, 45, 45),
        ThemeToken::PlotLine => Color::Rgb(80, 160, 240),
        ThemeToken::BestMarker => Color::LightGreen,
    }
}

/// Show each case as a full-screen figure, one after another.
///
/// Blocks on every figure until it is dismissed. The terminal is restored
/// even when drawing fails.
pub fn show_cases(doc: &LogDocument, source: &str) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = show_all(&mut terminal, doc, source);
    let restored = restore_terminal(&mut terminal);

    result.and(restored)
}

/// Undo the setup in [`show_cases`]. Every step runs even if an earlier one
/// fails; the first failure is returned.
fn restore_terminal(terminal: &mut Term) -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    first_error([raw, screen, cursor])
}

fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> Result<()> {
    let mut first = None;
    for step in steps {
        if let Err(e) = step {
            warn!("Terminal restore step failed: {e}");
            if first.is_none() {
                first = Some(e);
            }
        }
    }
    match first {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

fn show_all(terminal: &mut Term, doc: &LogDocument, source: &str) -> Result<()> {
    for (i, case) in doc.iter().enumerate() {
        let number = i + 1;
        debug!("Showing case {number} of {}", doc.len());
        if show_case(terminal, case, number, doc.len(), source)? == Flow::Stop {
            info!("Stopped after case {number}");
            break;
        }
    }
    Ok(())
}

fn show_case(
    terminal: &mut Term,
    case: &Case,
    number: usize,
    total: usize,
    source: &str,
) -> Result<Flow> {
    let title = header_text(case, number, total, source);

    loop {
        terminal.draw(|frame| {
            let area = frame.area();

            let header_area = Rect::new(0, 0, area.width, 1);
            let header = Block::default()
                .title(title.as_str())
                .style(Style::default().fg(Color::White).bg(Color::DarkGray));
            frame.render_widget(header, header_area);

            let content_area = Rect::new(0, 1, area.width, area.height.saturating_sub(1));
            let viewport = Viewport::new(
                f64::from(content_area.width),
                f64::from(content_area.height),
            );
            let cmds = render_line_plot(case, number, &viewport);

            let canvas = Canvas::default()
                .background_color(theme_to_color(ThemeToken::Background))
                .marker(Marker::Braille)
                .x_bounds([0.0, viewport.width])
                .y_bounds([0.0, viewport.height])
                .paint(|ctx| paint_commands(ctx, &cmds, viewport.height));
            frame.render_widget(canvas, content_area);
        })?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(Flow::Stop);
                }
                KeyCode::Esc => return Ok(Flow::Stop),
                KeyCode::Enter
                | KeyCode::Right
                | KeyCode::Char(' ')
                | KeyCode::Char('n')
                | KeyCode::Char('q') => return Ok(Flow::Next),
                _ => {}
            }
        }
    }
}

fn header_text(case: &Case, number: usize, total: usize, source: &str) -> String {
    let best = case.best().map_or_else(
        || "no data".to_string(),
        |b| format!("best {} @ {}", b.makespan, b.index),
    );
    format!(
        " makespan-plot — {source} | case {number}/{total} | {} rows | {best} | Enter next · Esc quit ",
        case.len()
    )
}

/// Draw render commands onto a canvas whose y axis points up.
fn paint_commands(ctx: &mut Context<'_>, cmds: &[RenderCommand], height: f64) {
    let flip = |y: f64| height - y;

    for cmd in cmds {
        match cmd {
            RenderCommand::DrawLine {
                from, to, color, ..
            } => ctx.draw(&Line::new(
                from.x,
                flip(from.y),
                to.x,
                flip(to.y),
                theme_to_color(*color),
            )),
            RenderCommand::DrawPolyline { points, color, .. } => {
                // Keep the series above grid lines sharing its cells.
                ctx.layer();
                for pair in points.windows(2) {
                    ctx.draw(&Line::new(
                        pair[0].x,
                        flip(pair[0].y),
                        pair[1].x,
                        flip(pair[1].y),
                        theme_to_color(*color),
                    ));
                }
            }
            RenderCommand::DrawRect { rect, color, .. } => ctx.draw(&Rectangle {
                x: rect.x,
                y: flip(rect.bottom()),
                width: rect.w,
                height: rect.h,
                color: theme_to_color(*color),
            }),
            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let width = text.chars().count() as f64;
                let x = match align {
                    TextAlign::Left => position.x,
                    TextAlign::Center => position.x - width / 2.0,
                    TextAlign::Right => position.x - width,
                };
                ctx.print(
                    x.max(0.0),
                    flip(position.y),
                    Span::styled(text.clone(), text_style(*color, *font_size)),
                );
            }
            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {}
        }
    }
}

fn text_style(color: ThemeToken, font_size: f64) -> Style {
    let style = Style::default().fg(theme_to_color(color));
    if font_size >= BOLD_FONT_SIZE {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}
