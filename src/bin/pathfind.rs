use clap::Parser;
use geopath::config::{ClearanceMargin, load_settings};
use geopath::errors::{GeopathError, GeopathResult};
use geopath::geometry::Rectangle;
use geopath::pathfinding::{GeometricPathFinder, Path};
use geopath::scene::{SceneDefinition, SceneGenerationConfig, SceneGenerator};

mod pathfind {
    pub mod cli_utils;
}

use pathfind::cli_utils::*;

#[derive(Parser, Clone)]
#[command(name = "pathfind")]
#[command(about = "Compute a walkable route around rectangular obstacles")]
struct Args {
    /// Scene file to load (.toml, or bincode for any other extension)
    #[arg(long, conflicts_with = "random")]
    scene: Option<String>,

    /// Generate a random scene with this many obstacles
    #[arg(long)]
    random: Option<usize>,

    /// Random seed for reproducible scene generation
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Agent collision box (format: X,Y,WIDTH,HEIGHT)
    #[arg(long, default_value = "-5,-5,10,10", allow_hyphen_values = true)]
    agent: String,

    /// Target point (format: X,Y)
    #[arg(long, allow_hyphen_values = true, conflicts_with = "random")]
    target: Option<String>,

    /// Obstacle collision box (format: X,Y,WIDTH,HEIGHT), repeatable
    #[arg(long = "obstacle", allow_hyphen_values = true, conflicts_with = "random")]
    obstacles: Vec<String>,

    /// Clearance kept between the agent and obstacles (overrides the config file)
    #[arg(long)]
    clearance: Option<f64>,

    /// Save the scene that was used to this file
    #[arg(long)]
    save: Option<String>,
}

fn build_scene(args: &Args) -> GeopathResult<SceneDefinition> {
    if let Some(scene_file) = &args.scene {
        return SceneDefinition::load_from_file(scene_file);
    }

    if let Some(obstacle_count) = args.random {
        return SceneGenerator::generate(&SceneGenerationConfig {
            seed: args.seed,
            obstacle_count,
            ..Default::default()
        });
    }

    let target = args
        .target
        .as_deref()
        .ok_or_else(|| GeopathError::InvalidArgument {
            reason: "A --target is required unless --scene or --random is given".to_string(),
        })?;

    let obstacles = args
        .obstacles
        .iter()
        .map(|obstacle| parse_rectangle(obstacle))
        .collect::<GeopathResult<Vec<Rectangle>>>()?;

    SceneDefinition::new(
        "cli".to_string(),
        parse_rectangle(&args.agent)?,
        parse_point(target)?,
        obstacles,
    )
}

fn main() -> GeopathResult<()> {
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(clearance) = args.clearance {
        settings.clearance_margin = ClearanceMargin::new(clearance);
    }

    let scene = build_scene(&args)?;
    let finder = GeometricPathFinder::new(settings.pathfinding_config());
    let path = scene.find_path(&finder)?;

    if let Some(save_path) = &args.save {
        scene.save_to_file(save_path)?;
        println!("Scene saved to: {save_path}");
    }

    print_path_summary(&scene, &path);
    Ok(())
}

fn print_path_summary(scene: &SceneDefinition, path: &Path) {
    println!("Scene: {}", scene.name);
    println!("  Agent: {}", scene.agent);
    println!("  Target: {}", scene.target);
    println!("  Obstacles: {}", scene.obstacles.len());
    println!(
        "Path: {} waypoints, length {:.2}, outcome {}",
        path.len(),
        path.length(),
        path.outcome()
    );
    for (i, point) in path.points().iter().enumerate() {
        println!("  {i}: {point}");
    }
}
