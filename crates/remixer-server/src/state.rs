use remixer_panel::controller::PanelController;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub controller: PanelController,
}

impl AppState {
    pub fn new(controller: PanelController) -> Self {
        Self { controller }
    }
}
