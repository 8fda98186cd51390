use crate::errors::*;
use url::Url;

/// The external collaborator that turns a verification URL into a scannable
/// image. This side owns only addressing; no pixels are produced here.
pub trait CodeRenderer {
    fn image_url(&self, data: &str, pixel_size: u32) -> Result<String, ApiError>;
}

/// Renders through a hosted image service that accepts the payload and a
/// pixel size as query parameters.
pub struct ExternalCodeRenderer {
    base_url: Url,
}

impl ExternalCodeRenderer {
    pub fn new(base_url: &str) -> Result<ExternalCodeRenderer, ApiError> {
        Ok(ExternalCodeRenderer {
            base_url: Url::parse(base_url)?,
        })
    }
}

impl CodeRenderer for ExternalCodeRenderer {
    fn image_url(&self, data: &str, pixel_size: u32) -> Result<String, ApiError> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("data", data)
            .append_pair("size", &format!("{}x{}", pixel_size, pixel_size));
        Ok(url.to_string())
    }
}
