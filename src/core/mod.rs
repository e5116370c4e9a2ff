mod engine;
mod types;

pub use engine::{sanitize, simulate};
pub use types::{
    CompoundSnapshot, NormalizedSimulationInput, PeriodSnapshot, SimpleSnapshot, SimulationInput,
    SimulationResult, SimulationSummary,
};
