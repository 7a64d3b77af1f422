use async_trait::async_trait;

use crate::{
    model::destination::{DestinationDto, DestinationRequestDto},
    server::{backend::BackendClient, error::api::ApiError},
};

const DESTINATIONS_PATH: &str = "api/destinations";

#[async_trait]
pub trait DestinationService: Send + Sync {
    async fn get_all_destinations(&self) -> Result<Vec<DestinationDto>, ApiError>;

    async fn get_destination(&self, id: i32) -> Result<DestinationDto, ApiError>;

    async fn create_destination(&self, request: &DestinationRequestDto) -> Result<(), ApiError>;

    async fn update_destination(
        &self,
        id: i32,
        request: &DestinationRequestDto,
    ) -> Result<(), ApiError>;

    async fn delete_destination(&self, id: i32) -> Result<(), ApiError>;
}

/// `DestinationService` proxying to the backend API.
pub struct DestinationApi<'a> {
    backend: &'a BackendClient,
    token: Option<&'a str>,
}

impl<'a> DestinationApi<'a> {
    pub fn new(backend: &'a BackendClient, token: Option<&'a str>) -> Self {
        Self { backend, token }
    }
}

#[async_trait]
impl DestinationService for DestinationApi<'_> {
    async fn get_all_destinations(&self) -> Result<Vec<DestinationDto>, ApiError> {
        self.backend.get_list(DESTINATIONS_PATH, self.token).await
    }

    async fn get_destination(&self, id: i32) -> Result<DestinationDto, ApiError> {
        let path = format!("{}/{}", DESTINATIONS_PATH, id);
        self.backend.get(&path, self.token).await
    }

    async fn create_destination(&self, request: &DestinationRequestDto) -> Result<(), ApiError> {
        self.backend
            .post_empty(DESTINATIONS_PATH, request, self.token)
            .await
    }

    async fn update_destination(
        &self,
        id: i32,
        request: &DestinationRequestDto,
    ) -> Result<(), ApiError> {
        let path = format!("{}/{}", DESTINATIONS_PATH, id);
        self.backend.put(&path, request, self.token).await
    }

    async fn delete_destination(&self, id: i32) -> Result<(), ApiError> {
        let path = format!("{}/{}", DESTINATIONS_PATH, id);
        self.backend.delete(&path, self.token).await
    }
}
