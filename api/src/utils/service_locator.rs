use crate::config::Config;
use crate::errors::ApiError;
use crate::utils::code_renderer::{CodeRenderer, ExternalCodeRenderer};

pub struct ServiceLocator {
    code_renderer_base_url: String,
}

impl ServiceLocator {
    pub fn new(config: &Config) -> ServiceLocator {
        ServiceLocator {
            code_renderer_base_url: config.code_renderer_base_url.clone(),
        }
    }

    pub fn create_code_renderer(&self) -> Result<Box<dyn CodeRenderer>, ApiError> {
        Ok(Box::new(ExternalCodeRenderer::new(&self.code_renderer_base_url)?))
    }
}
