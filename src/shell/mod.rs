// Composition root for the staff presence service.
//
// Responsibilities
// - Read config from environment.
// - Wire the in-memory repository and the clock into use case handlers.
// - Expose the handlers over the http router and the GraphQL schema.
// - Load and save the teacher snapshot around the server's lifetime.

pub mod config;
pub mod graphql;
pub mod http;
pub mod snapshot;
pub mod state;
