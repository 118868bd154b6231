use serde::Deserialize;
use utoipa::IntoParams;

pub mod alerts;
pub mod analytics;
pub mod inventory;
pub mod navigation;
pub mod orders;
pub mod session;
pub mod settings;
pub mod stores;

// `?confirm=true` das exclusões. Ausente = recusado.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct ConfirmParams {
    pub confirm: bool,
}
