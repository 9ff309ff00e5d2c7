use crate::client::BackendClient;
use crate::config::Settings;
use crate::controller::PageController;

#[derive(Clone)]
pub struct AppState {
    pub controller: PageController,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let client = BackendClient::new(settings.backend_url.clone());
        Self {
            controller: PageController::new(client),
        }
    }
}
