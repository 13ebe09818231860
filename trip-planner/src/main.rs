use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use trip_planner::config::PlannerConfig;
use trip_planner::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from PLANNER_* environment variables
    let config = match PlannerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    info!(
        fuel_consumption = config.costs.fuel_consumption_km_per_l(),
        fuel_price = config.costs.fuel_price_per_l(),
        tolls = config.costs.tolls().len(),
        unload_minutes = config.rest.unload_minutes,
        rest_hours = config.rest.rest_hours,
        "planner configured"
    );

    let addr = config.listen_addr;
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    info!("Trip planner listening on http://{addr}");
    info!("  GET  /health              - Health check");
    info!("  GET  /schedule            - Costed schedule with totals");
    info!("  GET  /schedule.csv        - Schedule export");
    info!("  POST /trips               - Add a trip");
    info!("  GET  /availability        - Next permitted departure");
    info!("  POST /routes/compatible   - Rank candidate routes (CSV body)");
    info!("  GET  /driver, PUT /driver - Driver status");

    axum::serve(listener, app).await.expect("Server error");
}
