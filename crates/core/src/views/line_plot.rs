use makespan_plot_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken, Viewport};

use super::axis::{AxisTicks, format_tick_label};
use crate::model::Case;

pub const X_AXIS_LABEL: &str = "Iterations";
pub const Y_AXIS_LABEL: &str = "Makespan";

// Margins around the plot area, in viewport units.
const MARGIN_TOP: f64 = 3.0;
const MARGIN_BOTTOM: f64 = 3.0;
const MARGIN_LEFT: f64 = 9.0;
const MARGIN_RIGHT: f64 = 2.0;

const TITLE_FONT_SIZE: f64 = 14.0;
const FONT_SIZE: f64 = 10.0;
const TICK_LENGTH: f64 = 0.5;
// Viewport units per tick, used to choose tick counts.
const X_TICK_SPACING: f64 = 12.0;
const Y_TICK_SPACING: f64 = 4.0;

pub fn case_title(case_number: usize) -> String {
    format!("Case {case_number}")
}

/// Render one case as a titled line plot.
///
/// x is the iteration index and y the makespan, joined in file order. The
/// best (lowest) makespan gets a labelled marker. An empty case still gets
/// its frame, title and axis labels. Returns nothing when the viewport is
/// too small to hold the margins.
pub fn render_line_plot(
    case: &Case,
    case_number: usize,
    viewport: &Viewport,
) -> Vec<RenderCommand> {
    let plot = Rect::new(
        viewport.x + MARGIN_LEFT,
        viewport.y + MARGIN_TOP,
        viewport.width - MARGIN_LEFT - MARGIN_RIGHT,
        viewport.height - MARGIN_TOP - MARGIN_BOTTOM,
    );
    if plot.w <= 0.0 || plot.h <= 0.0 {
        return Vec::new();
    }

    let (x_lo, x_hi) = case.index_range().unwrap_or((0, 1));
    let (y_lo, y_hi) = case.makespan_range().unwrap_or((0, 1));
    let x_ticks = AxisTicks::for_range(
        x_lo as f64,
        x_hi as f64,
        tick_target(plot.w, X_TICK_SPACING),
    );
    let y_ticks = AxisTicks::for_range(
        y_lo as f64,
        y_hi as f64,
        tick_target(plot.h, Y_TICK_SPACING),
    );

    let to_screen = |x: f64, y: f64| {
        Point::new(
            plot.x + x_ticks.fraction(x) * plot.w,
            plot.bottom() - y_ticks.fraction(y) * plot.h,
        )
    };

    let title = case_title(case_number);
    let tick_count = x_ticks.values.len() + y_ticks.values.len();
    let mut commands = Vec::with_capacity(3 * tick_count + 10);

    commands.push(RenderCommand::BeginGroup {
        id: format!("case-{case_number}"),
        label: Some(title.clone()),
    });

    commands.push(RenderCommand::DrawText {
        position: Point::new(viewport.x + viewport.width / 2.0, viewport.y),
        text: title,
        color: ThemeToken::TextPrimary,
        font_size: TITLE_FONT_SIZE,
        align: TextAlign::Center,
    });

    // Plot frame
    commands.push(RenderCommand::DrawRect {
        rect: plot,
        color: ThemeToken::Border,
        fill: None,
    });

    for &x in &x_ticks.values {
        let at = to_screen(x, y_ticks.min);
        commands.push(RenderCommand::DrawLine {
            from: Point::new(at.x, plot.y),
            to: Point::new(at.x, plot.bottom()),
            color: ThemeToken::GridLine,
            width: 0.5,
        });
        commands.push(RenderCommand::DrawLine {
            from: at,
            to: Point::new(at.x, at.y + TICK_LENGTH),
            color: ThemeToken::AxisTick,
            width: 1.0,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(at.x, plot.bottom() + 1.0),
            text: format_tick_label(x),
            color: ThemeToken::TextSecondary,
            font_size: FONT_SIZE,
            align: TextAlign::Center,
        });
    }

    for &y in &y_ticks.values {
        let at = to_screen(x_ticks.min, y);
        commands.push(RenderCommand::DrawLine {
            from: Point::new(plot.x, at.y),
            to: Point::new(plot.right(), at.y),
            color: ThemeToken::GridLine,
            width: 0.5,
        });
        commands.push(RenderCommand::DrawLine {
            from: Point::new(at.x - TICK_LENGTH, at.y),
            to: at,
            color: ThemeToken::AxisTick,
            width: 1.0,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(plot.x - 1.0, at.y),
            text: format_tick_label(y),
            color: ThemeToken::TextSecondary,
            font_size: FONT_SIZE,
            align: TextAlign::Right,
        });
    }

    // Axes
    commands.push(RenderCommand::DrawLine {
        from: Point::new(plot.x, plot.bottom()),
        to: Point::new(plot.right(), plot.bottom()),
        color: ThemeToken::AxisLine,
        width: 1.0,
    });
    commands.push(RenderCommand::DrawLine {
        from: Point::new(plot.x, plot.y),
        to: Point::new(plot.x, plot.bottom()),
        color: ThemeToken::AxisLine,
        width: 1.0,
    });

    commands.push(RenderCommand::DrawText {
        position: Point::new(plot.x + plot.w / 2.0, plot.bottom() + 2.0),
        text: X_AXIS_LABEL.to_string(),
        color: ThemeToken::TextPrimary,
        font_size: FONT_SIZE,
        align: TextAlign::Center,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(viewport.x, viewport.y + 1.0),
        text: Y_AXIS_LABEL.to_string(),
        color: ThemeToken::TextPrimary,
        font_size: FONT_SIZE,
        align: TextAlign::Left,
    });

    if !case.is_empty() {
        commands.push(RenderCommand::DrawPolyline {
            points: case
                .points()
                .into_iter()
                .map(|(x, y)| to_screen(x, y))
                .collect(),
            color: ThemeToken::PlotLine,
            width: 1.0,
        });
    }

    if let Some(best) = case.best() {
        let at = to_screen(best.index as f64, best.makespan as f64);
        // Keep the label inside the plot on the right half.
        let align = if at.x > plot.x + plot.w / 2.0 {
            TextAlign::Right
        } else {
            TextAlign::Left
        };
        commands.push(RenderCommand::DrawText {
            position: Point::new(at.x, (at.y - 1.0).max(plot.y)),
            text: format!("● {}", best.makespan),
            color: ThemeToken::BestMarker,
            font_size: FONT_SIZE,
            align,
        });
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

fn tick_target(length: f64, spacing: f64) -> usize {
    ((length / spacing).floor() as usize).clamp(2, 10)
}
