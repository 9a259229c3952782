// Composition root for the cafes service.
//
// Responsibilities
// - Read config from environment.
// - Build the store from the configured seed.
// - Wire the store into the use case handlers and expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
