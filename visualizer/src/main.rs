use std::{env, io};

use log::info;
use tokio::runtime::Handle;
use visualizer::{
    configs::{self, VisualizationConfig},
    mapping::{CoordinateMapper, Padding, Surface, Tick},
    visualize,
};

const SURFACE: Surface = Surface {
    left: 0.0,
    top: 0.0,
    width: 640.0,
    height: 480.0,
};

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => configs::load(path)?,
        None => VisualizationConfig::default(),
    };

    let mut session = visualize(&config, Handle::current())?;
    let scene = session.scene().clone();

    let optimum = scene.optimum();
    let raw = scene.key().scale().unscale_params(optimum.params());
    println!(
        "optimum: theta0 = {:.4}, theta1 = {:.4} (price = {:.2} + {:.2} * size), mse = {:.4}",
        optimum.theta0, optimum.theta1, raw.theta0, raw.theta1, optimum.loss
    );
    if scene.is_degenerate() {
        println!("the feature is constant, the slope is a fallback");
    }

    for level in scene.contours() {
        println!("contour at loss {:.4}", level.level_loss);
    }

    let bounds = scene.bounds();
    let mapper = CoordinateMapper::for_bounds(bounds, SURFACE, Padding::uniform(24.0));
    println!(
        "theta0 in [{:.3}, {:.3}], ticks: {}",
        bounds.min_theta0,
        bounds.max_theta0,
        labels(&mapper.x_ticks(5))
    );
    println!(
        "theta1 in [{:.3}, {:.3}], ticks: {}",
        bounds.min_theta1,
        bounds.max_theta1,
        labels(&mapper.y_ticks(5))
    );

    session.play();
    loop {
        let next = tokio::select! {
            state = session.next_tick() => state,
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                None
            }
        };

        let Some(state) = next else { break };
        let current = session.current();
        info!(
            step = state.step_index,
            theta0 = current.theta0,
            theta1 = current.theta1,
            loss = current.loss;
            "step"
        );
    }

    let last = session.current();
    println!(
        "stopped at step {}: theta0 = {:.4}, theta1 = {:.4}, mse = {:.4}",
        session.playback().step_index,
        last.theta0,
        last.theta1,
        last.loss
    );

    Ok(())
}

fn labels(ticks: &[Tick]) -> String {
    ticks
        .iter()
        .map(|t| t.value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
