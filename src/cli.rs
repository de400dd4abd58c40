use clap::Parser;

use crate::Settings;
use menu_cube::ViewState;

/// Interactive neon menu cube.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Seed for the ambient orbs and data particles.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Bloom intensity of the camera.
    #[arg(long)]
    pub bloom: Option<f32>,

    /// Start with the world inspector open.
    #[arg(long)]
    pub inspect: bool,
}

impl Args {
    /// Applies the given overrides on top of the default settings.
    pub fn into_settings(self) -> Settings {
        let mut settings = Settings::default();
        if let Some(seed) = self.seed {
            settings.cube.particles.seed = seed;
            settings.ambient.seed = seed;
        }
        if let Some(bloom) = self.bloom {
            settings.visuals.bloom_intensity = bloom.max(0.0);
        }
        if self.inspect {
            settings.initial_state = ViewState::Inspecting;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_keeps_defaults() {
        let settings = Args::parse_from(["menu-cube"]).into_settings();
        assert_eq!(settings.initial_state, ViewState::Running);
        assert_eq!(settings.ambient.seed, 42);
        assert_eq!(settings.cube.particles.seed, 42);
    }

    #[test]
    fn seed_reaches_orbs_and_particles() {
        let settings = Args::parse_from(["menu-cube", "--seed", "7", "--inspect"]).into_settings();
        assert_eq!(settings.ambient.seed, 7);
        assert_eq!(settings.cube.particles.seed, 7);
        assert_eq!(settings.initial_state, ViewState::Inspecting);
    }

    #[test]
    fn negative_bloom_is_clamped() {
        let settings = Args::parse_from(["menu-cube", "--bloom=-1"]).into_settings();
        assert_eq!(settings.visuals.bloom_intensity, 0.0);
    }
}
