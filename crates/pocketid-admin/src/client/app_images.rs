//! Application image uploads.
//!
//! These are the only operations that use the binary upload path: the
//! payload arrives base64-encoded and leaves as a multipart form.

use pocketid_client::{Result, DEFAULT_UPLOAD_MIME};

impl super::PocketIdAdminClient {
    /// Replace the application logo.
    pub async fn update_logo(&self, base64_data: &str, mime_type: Option<&str>) -> Result<()> {
        self.upload_image("logo", base64_data, mime_type).await
    }

    /// Replace the favicon.
    pub async fn update_favicon(&self, base64_data: &str, mime_type: Option<&str>) -> Result<()> {
        self.upload_image("favicon", base64_data, mime_type).await
    }

    /// Replace the login background image.
    pub async fn update_background(
        &self,
        base64_data: &str,
        mime_type: Option<&str>,
    ) -> Result<()> {
        self.upload_image("background", base64_data, mime_type).await
    }

    /// Remove the default profile picture override.
    pub async fn delete_default_profile_picture(&self) -> Result<()> {
        self.client
            .delete("/api/application-images/default-profile-picture")
            .await?;
        Ok(())
    }

    async fn upload_image(
        &self,
        name: &str,
        base64_data: &str,
        mime_type: Option<&str>,
    ) -> Result<()> {
        self.client
            .put_file(
                &format!("/api/application-images/{name}"),
                base64_data,
                mime_type.unwrap_or(DEFAULT_UPLOAD_MIME),
            )
            .await?;
        Ok(())
    }
}
