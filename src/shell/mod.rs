// Composition root.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations (in memory or AWS).
// - Wire implementations into use case handlers.
// - Expose the HTTP router and spawn the queue drainer.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod telemetry;
pub mod workers;
