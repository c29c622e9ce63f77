//! Placement layer: turns catalog prototypes into positioned meshes.
//!
//! # Invariants
//! - Rendering never mutates the catalog; frames derive from it.
//! - Only the first neighbor candidate per direction is placed.
//!
//! No GPU backend lives here. Renderers consume [`ShowcaseFrame`]s, and the
//! bundled ones produce text or JSON for the CLI and for tests.

mod config;
mod placement;
mod renderer;

pub use config::ShowcaseConfig;
pub use placement::{Placement, Showcase, ShowcaseFrame};
pub use renderer::{DebugTextRenderer, JsonRenderer, RenderError, Renderer};

pub fn crate_info() -> &'static str {
    "tileview-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
