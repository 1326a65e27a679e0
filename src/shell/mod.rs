// Composition root for the ticktock backend.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Expose the HTTP router and the demo seed.

pub mod config;
pub mod http;
pub mod seed;
pub mod state;
