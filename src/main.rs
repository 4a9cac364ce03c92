use anyhow::Context;
use std::env;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lattice_nav::adapters::outbound::JsonSceneExporter;
use lattice_nav::application::PlanningService;
use lattice_nav::domains::planning::{GraphBuilder, SceneRenderer};
use lattice_nav::ScenarioConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "config/default_config.json".to_string());
    let config = ScenarioConfig::from_file(&config_path)
        .with_context(|| format!("failed to load scenario from {config_path}"))?;
    info!(%config_path, "scenario loaded");

    let mut builder = GraphBuilder::new(config.space_size, config.grid_resolution)
        .with_obstacles(config.obstacles.clone());
    if let Some(limit) = config.max_nodes {
        builder = builder.with_max_nodes(limit);
    }
    let graph = Arc::new(builder.build()?);

    let service = PlanningService::new(graph.clone(), config.algorithm);
    let record = service.plan_route(config.start(), config.goal())?;

    match &record.path {
        Some(path) => {
            for (index, waypoint) in path.waypoints().iter().enumerate() {
                println!("{index:>4}  {waypoint}");
            }
            println!("total cost: {}", path.total_cost());
        }
        None => println!("no route exists between start and goal"),
    }

    if let Some(output) = &config.scene_output {
        let exporter = JsonSceneExporter::new(output.clone());
        exporter.render(&graph, record.path.as_ref())?;
    }

    Ok(())
}
