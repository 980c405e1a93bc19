//! Decorative particle background.
//!
//! The page embeds these options as JSON for the client-side particle engine.
//! The effect is optional: if the options cannot be produced the page simply
//! renders without it.

use serde::Serialize;
use tracing::debug;

use super::Theme;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleOptions {
    pub background_color: &'static str,
    pub fps_limit: u32,
    pub particle_color: &'static str,
    pub link_color: &'static str,
    pub link_distance: u32,
    pub link_opacity: f32,
    pub particle_opacity: f32,
    pub count: u32,
    pub density_area: u32,
    pub speed: f32,
    pub size_min: f32,
    pub size_max: f32,
    /// Hover pushes particles away; clicks add `push_quantity` more.
    pub repulse_distance: u32,
    pub push_quantity: u32,
}

impl ParticleOptions {
    pub fn for_theme(theme: Theme) -> Self {
        let dark = theme == Theme::Dark;
        ParticleOptions {
            background_color: if dark { "#000000" } else { "#f8f9fa" },
            fps_limit: 60,
            particle_color: "#646cff",
            link_color: if dark { "#a259ff" } else { "#646cff" },
            link_distance: 150,
            link_opacity: if dark { 0.2 } else { 0.15 },
            particle_opacity: if dark { 0.5 } else { 0.3 },
            count: 80,
            density_area: 500,
            speed: 2.0,
            size_min: 1.0,
            size_max: 5.0,
            repulse_distance: 300,
            push_quantity: 4,
        }
    }
}

/// Serialised options for `theme`, or `None` if they could not be produced.
/// Failures are logged at debug level and otherwise ignored.
pub fn particles_config(theme: Theme) -> Option<String> {
    match serde_json::to_string(&ParticleOptions::for_theme(theme)) {
        Ok(json) => Some(json),
        Err(e) => {
            debug!("particle background disabled: {e}");
            None
        }
    }
}
