use std::sync::Arc;

use crate::config::Config;
use moneymapp_core::{
    debts::{DebtService, DebtServiceTrait},
    goals::{GoalService, GoalServiceTrait},
    SimulationOptions,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub debt_service: Arc<dyn DebtServiceTrait + Send + Sync>,
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("MM_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let options = SimulationOptions::with_max_months(config.max_simulation_months);
    tracing::info!("Simulations capped at {} months", options.max_months);

    let debt_service = Arc::new(DebtService::new(options));
    let goal_service = Arc::new(GoalService::new(options));

    Arc::new(AppState {
        debt_service,
        goal_service,
    })
}
