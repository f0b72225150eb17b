//! API router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::BookingService;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::middleware::{session_middleware, SessionState};
use crate::interfaces::http::modules::health::HealthState;
use crate::interfaces::http::modules::metrics::{
    http_metrics_middleware, prometheus_metrics, MetricsState,
};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::{
    admin, auth, availability, health, reservations, restaurants, BookingState,
};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token from POST /api/login"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        restaurants::list_restaurants,
        availability::get_time_slots,
        reservations::reserve,
        reservations::my_reservations,
        reservations::cancel,
        admin::list_tables,
        admin::create_restaurant,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            auth::LoginRequest,
            auth::LoginResponse,
            restaurants::RestaurantDto,
            restaurants::CreateRestaurantRequest,
            availability::SlotDto,
            reservations::ReserveRequest,
            reservations::ReserveResponse,
            reservations::CancelRequest,
            reservations::CancelResponse,
            reservations::MyReservationDto,
            reservations::ReservationDto,
            admin::CustomerDto,
            admin::AdminTablesDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Session", description = "Phone-number login issuing a session token"),
        (name = "Restaurants", description = "Restaurant listing"),
        (name = "Availability", description = "Hourly time slots and whether they are fully booked"),
        (name = "Reservations", description = "Book, list and cancel reservations"),
        (name = "Admin", description = "Raw table views and restaurant registration"),
    ),
    info(
        title = "Table Booking API",
        version = "0.1.0",
        description = "Restaurant table reservations with hourly availability",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    service: Arc<BookingService>,
    db: DatabaseConnection,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let session_state = SessionState {
        jwt_config: service.jwt_config().clone(),
    };
    let booking_state = BookingState { service };

    let api_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/restaurants", get(restaurants::list_restaurants))
        .route("/time-slots", get(availability::get_time_slots))
        .route("/reserve", post(reservations::reserve))
        .route("/my-reservations", get(reservations::my_reservations))
        .route("/cancel", post(reservations::cancel))
        .route("/admin/tables", get(admin::list_tables))
        .route("/admin/restaurants", post(admin::create_restaurant))
        .layer(middleware::from_fn_with_state(
            session_state,
            session_middleware,
        ))
        .with_state(booking_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    let metrics_routes = Router::new()
        .route("/metrics", get(prometheus_metrics))
        .with_state(MetricsState {
            handle: prometheus_handle,
        });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .nest("/api", api_routes)
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}
