#![allow(dead_code)]

use axum_test::TestServer;
use shortlink::domain::keys::Keyspace;
use shortlink::infrastructure::store::{KeyValueStore, MemoryStore};
use shortlink::routes::app_routes;
use shortlink::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://s.test";

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), Keyspace::default(), BASE_URL);
    (state, store)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    let (state, store) = create_test_state();
    let server = TestServer::new(app_routes(state)).unwrap();
    (server, store)
}

/// Server over an arbitrary backend, e.g. one that always fails.
pub fn create_server_with_store(store: Arc<dyn KeyValueStore>) -> TestServer {
    let state = AppState::new(store, Keyspace::default(), BASE_URL);
    TestServer::new(app_routes(state)).unwrap()
}
