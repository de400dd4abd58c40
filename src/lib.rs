#![warn(missing_docs)]
//! Interactive neon menu cube.
//!
//! Renders an isometric wireframe cube whose vertices glow when the matching
//! menu row is hovered, with an egui overlay for the menu and info panel and
//! a pointer-driven parallax tilt on the cube.

pub mod ambient;
pub mod cube;
pub mod flare;
pub mod math;
pub mod menu;
pub mod overlay;
pub mod pointer;
pub mod tween;
pub mod visuals;

use bevy::prelude::*;

/// Application-wide view state, used for system scheduling.
#[derive(States, Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum ViewState {
    /// Normal interaction: overlay, hover highlights, parallax.
    #[default]
    Running,
    /// World inspector visible (Tab to toggle).
    Inspecting,
}

/// Neon green used for every line, bracket and overlay accent.
pub const NEON_GREEN: Color = Color::srgb(0.224, 1.0, 0.078);
