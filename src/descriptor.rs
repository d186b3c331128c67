//! Package descriptor generation.

use chrono::Utc;
use minijinja::{Environment, context};

use crate::assets;
use crate::config::MaintainerConfig;
use crate::error::AppError;

/// Render the `DESCRIPTION` file for `name` using maintainer defaults.
pub fn render_description(name: &str, maintainer: &MaintainerConfig) -> Result<String, AppError> {
    let env = Environment::new();
    env.render_str(
        assets::description_template(),
        context! {
            name,
            given => maintainer.author.given,
            family => maintainer.author.family,
            email => maintainer.author.email,
            license => maintainer.license,
            date => Utc::now().format("%Y-%m-%d").to_string(),
        },
    )
    .map_err(|e| AppError::Render { file: "DESCRIPTION".to_string(), details: e.to_string() })
}
