use crate::application::client::Client;
use crate::application::interfaces::ImageService;
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::query::ListQuery;
use crate::model::requests::TransferImageRequest;
use crate::presentation::action::Action;
use crate::presentation::image::Image;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ImageService for Client {
    async fn get_images(&self, query: Option<&ListQuery>) -> Result<Vec<Image>, AppError> {
        let images: Vec<Image> = self.execute(endpoints::get_images(query)).await?;
        debug!("Images obtained: {}", images.len());
        Ok(images)
    }

    async fn get_distribution_images(
        &self,
        query: Option<&ListQuery>,
    ) -> Result<Vec<Image>, AppError> {
        self.execute(endpoints::get_distribution_images(query))
            .await
    }

    async fn get_application_images(
        &self,
        query: Option<&ListQuery>,
    ) -> Result<Vec<Image>, AppError> {
        self.execute(endpoints::get_application_images(query))
            .await
    }

    async fn get_my_images(&self, query: Option<&ListQuery>) -> Result<Vec<Image>, AppError> {
        self.execute(endpoints::get_my_images(query)).await
    }

    async fn get_image(&self, image_id: u64) -> Result<Image, AppError> {
        self.execute(endpoints::get_image(image_id)).await
    }

    async fn destroy_image(&self, image_id: u64) -> Result<(), AppError> {
        info!("Destroying image {}", image_id);
        self.execute(endpoints::destroy_image(image_id)).await
    }

    async fn transfer_image(
        &self,
        image_id: u64,
        request: &TransferImageRequest,
    ) -> Result<Action, AppError> {
        info!("Transferring image {} to {}", image_id, request.region);
        self.execute(endpoints::transfer_image(image_id, request))
            .await
    }

    async fn convert_image_to_snapshot(&self, image_id: u64) -> Result<Action, AppError> {
        info!("Converting image {} to a snapshot", image_id);
        self.execute(endpoints::convert_image_to_snapshot(image_id))
            .await
    }
}
