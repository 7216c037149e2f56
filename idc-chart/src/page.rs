//! Page-level lifecycle: loading, the terminal load failure, or a live chart.

use crate::config::ChartConfig;
use crate::controller::ChartController;
use idc_data::LoadError;

#[derive(Debug, Clone, Default)]
pub enum ChartPage {
    /// Waiting for the source fetch
    #[default]
    Loading,
    /// Load failed; only the placeholder message is drawn, never retried
    Failed { message: String },
    Ready(ChartController),
}

impl ChartPage {
    /// Settle the page from the outcome of the fetch.
    pub fn load(config: ChartConfig, fetched: Result<String, LoadError>) -> Self {
        let message = config.error_message.clone();
        match ChartController::initialize(config, fetched) {
            Ok(controller) => {
                log::info!(
                    "page: chart ready with {} categories",
                    controller.state().points.len()
                );
                ChartPage::Ready(controller)
            }
            Err(e) => {
                log::error!("Error loading data: {}", e);
                ChartPage::Failed { message }
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ChartPage::Loading)
    }

    /// Placeholder text, only present after a failed load.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            ChartPage::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn controller(&self) -> Option<&ChartController> {
        match self {
            ChartPage::Ready(controller) => Some(controller),
            _ => None,
        }
    }

    pub fn controller_mut(&mut self) -> Option<&mut ChartController> {
        match self {
            ChartPage::Ready(controller) => Some(controller),
            _ => None,
        }
    }
}
