// Composition root.
//
// - Read config from flags / environment.
// - Instantiate the in-memory store and the stub payment gateway.
// - Wire them into use case handlers (`state`).
// - Expose HTTP and GraphQL surfaces (`http`, `graphql`).
// - Spawn background workers (abandoned registration sweep).

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;
