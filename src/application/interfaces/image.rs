use crate::error::AppError;
use crate::model::query::ListQuery;
use crate::model::requests::TransferImageRequest;
use crate::presentation::action::Action;
use crate::presentation::image::Image;
use async_trait::async_trait;

/// Interface for the image service
#[async_trait]
pub trait ImageService: Send + Sync {
    /// Lists all images visible to the account
    async fn get_images(&self, query: Option<&ListQuery>) -> Result<Vec<Image>, AppError>;

    /// Lists public distribution images
    async fn get_distribution_images(
        &self,
        query: Option<&ListQuery>,
    ) -> Result<Vec<Image>, AppError>;

    /// Lists one-click application images
    async fn get_application_images(
        &self,
        query: Option<&ListQuery>,
    ) -> Result<Vec<Image>, AppError>;

    /// Lists the account's private images
    async fn get_my_images(&self, query: Option<&ListQuery>) -> Result<Vec<Image>, AppError>;

    /// Gets an image by id
    async fn get_image(&self, image_id: u64) -> Result<Image, AppError>;

    /// Deletes an image
    async fn destroy_image(&self, image_id: u64) -> Result<(), AppError>;

    /// Copies an image to another region
    async fn transfer_image(
        &self,
        image_id: u64,
        request: &TransferImageRequest,
    ) -> Result<Action, AppError>;

    /// Converts a backup into a snapshot
    async fn convert_image_to_snapshot(&self, image_id: u64) -> Result<Action, AppError>;
}
