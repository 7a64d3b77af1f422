use async_trait::async_trait;

use crate::{
    model::guide::{GuideDto, GuideRequestDto},
    server::{backend::BackendClient, error::api::ApiError},
};

const GUIDES_PATH: &str = "api/guides";

#[async_trait]
pub trait GuideService: Send + Sync {
    async fn get_all_guides(&self) -> Result<Vec<GuideDto>, ApiError>;

    async fn get_guide(&self, id: i32) -> Result<GuideDto, ApiError>;

    async fn create_guide(&self, request: &GuideRequestDto) -> Result<(), ApiError>;

    async fn update_guide(
        &self,
        id: i32,
        request: &GuideRequestDto,
    ) -> Result<(), ApiError>;

    async fn delete_guide(&self, id: i32) -> Result<(), ApiError>;
}

/// `GuideService` proxying to the backend API.
pub struct GuideApi<'a> {
    backend: &'a BackendClient,
    token: Option<&'a str>,
}

impl<'a> GuideApi<'a> {
    pub fn new(backend: &'a BackendClient, token: Option<&'a str>) -> Self {
        Self { backend, token }
    }
}

#[async_trait]
impl GuideService for GuideApi<'_> {
    async fn get_all_guides(&self) -> Result<Vec<GuideDto>, ApiError> {
        self.backend.get_list(GUIDES_PATH, self.token).await
    }

    async fn get_guide(&self, id: i32) -> Result<GuideDto, ApiError> {
        let path = format!("{}/{}", GUIDES_PATH, id);
        self.backend.get(&path, self.token).await
    }

    async fn create_guide(&self, request: &GuideRequestDto) -> Result<(), ApiError> {
        self.backend
            .post_empty(GUIDES_PATH, request, self.token)
            .await
    }

    async fn update_guide(
        &self,
        id: i32,
        request: &GuideRequestDto,
    ) -> Result<(), ApiError> {
        let path = format!("{}/{}", GUIDES_PATH, id);
        self.backend.put(&path, request, self.token).await
    }

    async fn delete_guide(&self, id: i32) -> Result<(), ApiError> {
        let path = format!("{}/{}", GUIDES_PATH, id);
        self.backend.delete(&path, self.token).await
    }
}
