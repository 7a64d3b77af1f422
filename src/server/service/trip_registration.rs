use async_trait::async_trait;

use crate::{
    model::trip_registration::{CreateTripRegistrationDto, TripRegistrationDto},
    server::{backend::BackendClient, error::api::ApiError},
};

const TRIP_REGISTRATIONS_PATH: &str = "api/tripregistrations";

#[async_trait]
pub trait TripRegistrationService: Send + Sync {
    /// Registrations visible to the caller; the backend scopes these by token.
    async fn get_all_trip_registrations(&self) -> Result<Vec<TripRegistrationDto>, ApiError>;

    async fn create_trip_registration(
        &self,
        request: &CreateTripRegistrationDto,
    ) -> Result<(), ApiError>;

    async fn delete_trip_registration(&self, id: i32) -> Result<(), ApiError>;
}

/// `TripRegistrationService` proxying to the backend API.
pub struct TripRegistrationApi<'a> {
    backend: &'a BackendClient,
    token: Option<&'a str>,
}

impl<'a> TripRegistrationApi<'a> {
    pub fn new(backend: &'a BackendClient, token: Option<&'a str>) -> Self {
        Self { backend, token }
    }
}

#[async_trait]
impl TripRegistrationService for TripRegistrationApi<'_> {
    async fn get_all_trip_registrations(&self) -> Result<Vec<TripRegistrationDto>, ApiError> {
        self.backend
            .get_list(TRIP_REGISTRATIONS_PATH, self.token)
            .await
    }

    async fn create_trip_registration(
        &self,
        request: &CreateTripRegistrationDto,
    ) -> Result<(), ApiError> {
        self.backend
            .post_empty(TRIP_REGISTRATIONS_PATH, request, self.token)
            .await
    }

    async fn delete_trip_registration(&self, id: i32) -> Result<(), ApiError> {
        let path = format!("{}/{}", TRIP_REGISTRATIONS_PATH, id);
        self.backend.delete(&path, self.token).await
    }
}
