// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{answers, health, questions, results, tests, users},
    state::AppState,
    utils::jwt::{admin_middleware, auth_middleware},
};

/// Assembles the main application router.
///
/// * Registers one handler per (entity, operation).
/// * `/users` additionally requires the admin role when the access policy is on.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let user_routes = Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{id}", get(users::get_user).delete(users::delete_user))
        // Auth runs first, then the admin check
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_middleware));

    let quiz_routes = Router::new()
        .route("/tests", get(tests::list_tests).post(tests::create_test))
        .route("/tests/{id}", get(tests::get_test).delete(tests::delete_test))
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route(
            "/questions/{id}",
            get(questions::get_question).delete(questions::delete_question),
        )
        .route("/answers", get(answers::list_answers).post(answers::create_answer))
        .route(
            "/answers/{id}",
            get(answers::get_answer).delete(answers::delete_answer),
        )
        .route("/results", get(results::list_results).post(results::create_result))
        .route(
            "/results/{id}",
            get(results::get_result).delete(results::delete_result),
        );

    let protected = user_routes
        .merge(quiz_routes)
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/health", get(health::health))
        .merge(protected)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
