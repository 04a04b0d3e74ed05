//! Goals module - savings projection models, projector, service, and traits.

mod goals_model;
mod goals_projection;
mod goals_service;
mod goals_traits;

pub use goals_model::{
    GoalProjectionMonth, GoalSimulation, GoalSimulationInput, RequiredContributionInput,
};
pub use goals_projection::{project_goal, required_monthly_contribution};
pub use goals_service::GoalService;
pub use goals_traits::GoalServiceTrait;
