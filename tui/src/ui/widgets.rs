use ratatui::{
    style::Color,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as Segment, Points},
        Block, Borders, Paragraph, Wrap,
    },
};
use visualizer::{
    bounds::{Extent, BOUNDS_PADDING},
    mapping::{CoordinateMapper, Padding, Surface},
    scene::Scene,
    Session,
};

use super::theme::Theme;

/// Side of the square every canvas is painted on, in canvas units.
const SIZE: f64 = 1000.0;

const SURFACE: Surface = Surface {
    left: 0.0,
    top: 0.0,
    width: SIZE,
    height: SIZE,
};

const TICKS: usize = 4;

pub fn header<'a>(session: &'a Session, status: &'a str) -> Paragraph<'a> {
    let playback = session.playback();
    let scene = session.scene();
    let current = session.current();
    let optimum = scene.optimum();

    let mode = if playback.is_playing {
        "PLAYING"
    } else if session.is_at_end() {
        "END"
    } else {
        "PAUSED"
    };

    let line1 = Line::from(vec![
        Span::styled("Gradient descent", Theme::title()),
        Span::raw("  |  "),
        Span::raw(format!(
            "step {} / {}  {mode}",
            playback.step_index,
            scene.trajectory().last_index()
        )),
        Span::raw("  |  "),
        Span::raw(format!(
            "lr {:.4}",
            session.config().hyperparams.learning_rate
        )),
    ]);

    let line2 = Line::from(vec![
        Span::raw(format!(
            "theta0 {:.3}  theta1 {:.3}  mse {:.3}",
            current.theta0, current.theta1, current.loss
        )),
        Span::styled(
            format!(
                "  |  optimum {:.3}, {:.3}  mse {:.3}",
                optimum.theta0, optimum.theta1, optimum.loss
            ),
            Theme::dim(),
        ),
    ]);

    let first = scene.trajectory().first().loss;
    let mut notes = vec![Span::styled(status.to_string(), Theme::muted())];
    if scene.is_degenerate() {
        notes.push(Span::styled(
            "  constant feature, no contours",
            Theme::warn(),
        ));
    }
    if !current.loss.is_finite() || current.loss > first {
        notes.push(Span::styled("  diverging", Theme::warn()));
    }

    Paragraph::new(vec![line1, line2, Line::from(notes)])
        .style(Theme::base())
        .wrap(Wrap { trim: true })
}

pub fn contours(scene: &Scene, step: usize) -> Canvas<'_, impl Fn(&mut Context) + '_> {
    let mapper = CoordinateMapper::for_bounds(scene.bounds(), SURFACE, Padding::default());
    let visible = scene.trajectory().visible(step);
    let optimum = scene.optimum();
    let current = scene.state(step);

    canvas("Loss contours (theta0 → , theta1 ↑)").paint(move |ctx: &mut Context| {
        for level in scene.contours() {
            for pair in level.points.windows(2) {
                segment(
                    ctx,
                    &mapper,
                    (pair[0].theta0, pair[0].theta1),
                    (pair[1].theta0, pair[1].theta1),
                    Theme::CONTOUR,
                );
            }
        }
        axis_labels(ctx, &mapper);
        ctx.layer();

        for pair in visible.windows(2) {
            segment(
                ctx,
                &mapper,
                (pair[0].theta0, pair[0].theta1),
                (pair[1].theta0, pair[1].theta1),
                Theme::PATH,
            );
        }
        point(ctx, &mapper, (optimum.theta0, optimum.theta1), Theme::OPTIMUM);
        point(ctx, &mapper, (current.theta0, current.theta1), Theme::CURRENT);
    })
}

pub fn data(scene: &Scene, step: usize) -> Canvas<'_, impl Fn(&mut Context) + '_> {
    let (x, y) = scene.data_extents();
    let mapper = CoordinateMapper::new(x, y, SURFACE, Padding::default());
    let fit = scene.fit_line(step);
    let best = scene.optimum().params();

    canvas("Data and fitted line").paint(move |ctx: &mut Context| {
        axis_labels(ctx, &mapper);
        segment(
            ctx,
            &mapper,
            (x.min, best.predict(x.min)),
            (x.max, best.predict(x.max)),
            Theme::CONTOUR,
        );
        ctx.layer();

        segment(
            ctx,
            &mapper,
            (fit[0].x, fit[0].y),
            (fit[1].x, fit[1].y),
            Theme::CURRENT,
        );
        for p in scene.dataset().points() {
            point(ctx, &mapper, (p.x, p.y), Theme::PATH);
        }
    })
}

pub fn losses(scene: &Scene, step: usize) -> Canvas<'_, impl Fn(&mut Context) + '_> {
    let last = scene.trajectory().last_index();
    let x = Extent::new(0.0, last.max(1) as f64);
    let y = scene.loss_extent().padded(BOUNDS_PADDING);
    let mapper = CoordinateMapper::new(x, y, SURFACE, Padding::default());
    let visible = scene.trajectory().visible(step);
    let optimum = scene.optimum().loss;

    canvas("MSE per step").paint(move |ctx: &mut Context| {
        axis_labels(ctx, &mapper);
        segment(
            ctx,
            &mapper,
            (x.min, optimum),
            (x.max, optimum),
            Theme::OPTIMUM,
        );
        ctx.layer();

        for (i, pair) in visible.windows(2).enumerate() {
            segment(
                ctx,
                &mapper,
                (i as f64, pair[0].loss),
                ((i + 1) as f64, pair[1].loss),
                Theme::PATH,
            );
        }
    })
}

pub fn help<'a>() -> Paragraph<'a> {
    Paragraph::new(Span::styled(
        "space play/pause  → step  ← back  0-9 jump  r reset  +/- learning rate  q quit",
        Theme::muted(),
    ))
    .style(Theme::base())
}

fn canvas<'a, F: Fn(&mut Context)>(title: &'a str) -> Canvas<'a, F> {
    Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(Span::styled(title, Theme::title())),
        )
        .background_color(Theme::BG)
        .marker(Marker::Braille)
        .x_bounds([0.0, SIZE])
        .y_bounds([0.0, SIZE])
}

/// Maps a model point onto the canvas. The mapper works in screen space with y growing
/// downwards while the canvas y grows upwards, so the y axis is flipped back.
fn project(mapper: &CoordinateMapper, (x, y): (f64, f64)) -> Option<(f64, f64)> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }

    let (px, py) = mapper.to_point(x, y);
    Some((px, SIZE - py))
}

fn segment(
    ctx: &mut Context,
    mapper: &CoordinateMapper,
    from: (f64, f64),
    to: (f64, f64),
    color: Color,
) {
    if let (Some((x1, y1)), Some((x2, y2))) = (project(mapper, from), project(mapper, to)) {
        ctx.draw(&Segment {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }
}

fn point(ctx: &mut Context, mapper: &CoordinateMapper, at: (f64, f64), color: Color) {
    if let Some(coords) = project(mapper, at) {
        ctx.draw(&Points {
            coords: &[coords],
            color,
        });
    }
}

fn axis_labels(ctx: &mut Context, mapper: &CoordinateMapper) {
    for tick in mapper.x_ticks(TICKS) {
        ctx.print(tick.pixel, 0.0, Span::styled(label(tick.value), Theme::muted()));
    }
    for tick in mapper.y_ticks(TICKS) {
        ctx.print(
            0.0,
            SIZE - tick.pixel,
            Span::styled(label(tick.value), Theme::muted()),
        );
    }
}

fn label(value: f64) -> String {
    if value.abs() >= 100.0 || value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
