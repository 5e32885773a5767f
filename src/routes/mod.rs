//! This module defines the REST API's routes and their handlers.

mod budget;
mod health;

use axum::{Router, routing::get};

use budget::{create_budget_endpoint, get_budgets};
use health::get_health;

use crate::{
    AppState, endpoints,
    stores::{BudgetStore, CategoryStore},
};

/// Return a router with all the app's routes.
pub fn build_router<C, B>(state: AppState<C, B>) -> Router
where
    C: CategoryStore + Clone + Send + Sync + 'static,
    B: BudgetStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::HEALTH, get(get_health))
        .route(
            endpoints::BUDGETS,
            get(get_budgets::<C, B>).post(create_budget_endpoint::<C, B>),
        )
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{build_router, routes::health::HealthResponse, stores::sqlite::create_app_state};

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().expect("Could not open database in memory");
        let state = create_app_state(connection).expect("Could not create app state");

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let server = get_test_server();

        let response = server.get("/health").await;

        response.assert_status_ok();
        let health = response.json::<HealthResponse>();
        assert_eq!(health.status, "ok");
        assert!(!health.message.is_empty());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        server.get("/nope").await.assert_status_not_found();
    }
}
