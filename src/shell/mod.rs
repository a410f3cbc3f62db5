// Composition root for the movies service.
//
// Responsibilities
// - Read config from environment.
// - Seed the in-memory movie store and wire it into the router state.
// - Expose the HTTP router to the binary.

pub mod config;
pub mod http;
pub mod state;
