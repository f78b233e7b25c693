use std::path::Path;

use anyhow::Context;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::animation::{simulate, Animation};
use shared::grid::Grid;
use shared::render::Renderer;

use crate::config::{Cli, Config};

mod config;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_cli(Cli::parse()).context("invalid configuration")?;
    let output = run(&config)?;

    println!("game saved in {}", output.display());
    Ok(())
}

fn run(config: &Config) -> anyhow::Result<&Path> {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!(
        "{}x{} grid, {} generations, density {}, seed {}",
        config.width, config.height, config.generations, config.density, seed
    );

    let mut grid = Grid::new(config.width, config.height)?;
    grid.randomize(&mut StdRng::seed_from_u64(seed), config.density)
        .context("invalid configuration")?;
    info!("generation 0: {} alive", grid.population());

    let renderer = Renderer::default()
        .with_cell_size(config.cell_size)
        .with_mesh(config.mesh);
    let frames = simulate(&mut grid, config.generations, |g| renderer.render(g));

    let mut animation = Animation::new(frames).with_delay(config.delay);
    if let Some(loops) = config.loops {
        animation = animation.with_loop_count(loops);
    }
    animation
        .save(&config.output)
        .context("error saving animation")?;

    Ok(config.output.as_path())
}
