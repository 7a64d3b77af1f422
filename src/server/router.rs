use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::server::{
    controller::{
        api_test::api_test,
        auth::{login, login_page, logout, register, register_page},
        destination::{
            create_destination, create_destination_page, delete_destination,
            destination_details, edit_destination, edit_destination_page, list_destinations,
        },
        guide::{
            create_guide, create_guide_page, delete_guide, edit_guide, edit_guide_page,
            guide_details, list_guides,
        },
        home::{home, not_found},
        registration::{cancel_registration, list_registrations},
        trip::{
            create_trip, create_trip_page, delete_trip, edit_trip, edit_trip_page,
            list_trips, register_for_trip, trip_details,
        },
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login_page).post(login))
        .route("/register", get(register_page).post(register))
        .route("/logout", get(logout))
        .route("/destinations", get(list_destinations))
        .route(
            "/destinations/create",
            get(create_destination_page).post(create_destination),
        )
        .route("/destinations/{id}", get(destination_details))
        .route(
            "/destinations/{id}/edit",
            get(edit_destination_page).post(edit_destination),
        )
        .route("/destinations/{id}/delete", post(delete_destination))
        .route("/trips", get(list_trips))
        .route("/trips/create", get(create_trip_page).post(create_trip))
        .route("/trips/{id}", get(trip_details))
        .route("/trips/{id}/edit", get(edit_trip_page).post(edit_trip))
        .route("/trips/{id}/delete", post(delete_trip))
        .route("/trips/{id}/register", post(register_for_trip))
        .route("/guides", get(list_guides))
        .route("/guides/create", get(create_guide_page).post(create_guide))
        .route("/guides/{id}", get(guide_details))
        .route("/guides/{id}/edit", get(edit_guide_page).post(edit_guide))
        .route("/guides/{id}/delete", post(delete_guide))
        .route("/registrations", get(list_registrations))
        .route("/registrations/{id}/cancel", post(cancel_registration))
        .route("/api-test", get(api_test))
        .fallback(not_found)
}

/// Full application: routes plus the session and request tracing layers.
pub fn app(state: AppState, session_layer: SessionManagerLayer<MemoryStore>) -> Router {
    router()
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
