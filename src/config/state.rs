// Application state module
// Per-process collaborators shared read-only by every connection

use std::sync::Arc;

use super::types::Config;
use crate::logger::Logger;
use crate::qr::{PngEncoder, QrEncoder};

/// Application state
pub struct AppState {
    pub config: Config,
    pub logger: Arc<Logger>,
    pub encoder: Arc<dyn QrEncoder>,
}

impl AppState {
    /// Create state with the default PNG encoder
    pub fn new(config: Config, logger: Arc<Logger>) -> Self {
        Self::with_encoder(config, logger, Arc::new(PngEncoder))
    }

    /// Create state with a custom encoder collaborator
    pub fn with_encoder(
        config: Config,
        logger: Arc<Logger>,
        encoder: Arc<dyn QrEncoder>,
    ) -> Self {
        Self {
            config,
            logger,
            encoder,
        }
    }
}
