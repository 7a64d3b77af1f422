use async_trait::async_trait;

use crate::{
    model::trip::{TripDto, TripRequestDto},
    server::{backend::BackendClient, error::api::ApiError},
};

const TRIPS_PATH: &str = "api/trips";

#[async_trait]
pub trait TripService: Send + Sync {
    async fn get_all_trips(&self) -> Result<Vec<TripDto>, ApiError>;

    async fn get_trip(&self, id: i32) -> Result<TripDto, ApiError>;

    async fn create_trip(&self, request: &TripRequestDto) -> Result<(), ApiError>;

    async fn update_trip(
        &self,
        id: i32,
        request: &TripRequestDto,
    ) -> Result<(), ApiError>;

    async fn delete_trip(&self, id: i32) -> Result<(), ApiError>;
}

/// `TripService` proxying to the backend API.
pub struct TripApi<'a> {
    backend: &'a BackendClient,
    token: Option<&'a str>,
}

impl<'a> TripApi<'a> {
    pub fn new(backend: &'a BackendClient, token: Option<&'a str>) -> Self {
        Self { backend, token }
    }
}

#[async_trait]
impl TripService for TripApi<'_> {
    async fn get_all_trips(&self) -> Result<Vec<TripDto>, ApiError> {
        self.backend.get_list(TRIPS_PATH, self.token).await
    }

    async fn get_trip(&self, id: i32) -> Result<TripDto, ApiError> {
        let path = format!("{}/{}", TRIPS_PATH, id);
        self.backend.get(&path, self.token).await
    }

    async fn create_trip(&self, request: &TripRequestDto) -> Result<(), ApiError> {
        self.backend
            .post_empty(TRIPS_PATH, request, self.token)
            .await
    }

    async fn update_trip(
        &self,
        id: i32,
        request: &TripRequestDto,
    ) -> Result<(), ApiError> {
        let path = format!("{}/{}", TRIPS_PATH, id);
        self.backend.put(&path, request, self.token).await
    }

    async fn delete_trip(&self, id: i32) -> Result<(), ApiError> {
        let path = format!("{}/{}", TRIPS_PATH, id);
        self.backend.delete(&path, self.token).await
    }
}
