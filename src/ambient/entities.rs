use std::f32::consts::TAU;

use bevy::prelude::*;

/// A large, faint background sphere that breathes over time.
#[derive(Component, Clone, Copy, Debug, Reflect)]
pub struct PulseOrb {
    /// Rest position; the pulse drifts around it vertically.
    pub origin: Vec3,
    /// Scale at the centre of the breathing cycle.
    pub base_scale: f32,
    /// Added to elapsed time so orbs pulse out of phase.
    pub time_offset: f32,
}

/// Constant angular velocity, accumulated as Euler angles.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Reflect)]
pub struct Spin {
    /// Radians per second about X, Y, Z.
    pub rate: Vec3,
    /// Accumulated angles, wrapped to `[0, TAU)`.
    pub angles: Vec3,
}

impl Spin {
    /// A spin starting from zero angles.
    pub fn new(rate: Vec3) -> Self {
        Self {
            rate,
            angles: Vec3::ZERO,
        }
    }

    /// Advances by `dt` seconds and returns the resulting rotation.
    pub fn advance(&mut self, dt: f32) -> Quat {
        let angles = self.angles + self.rate * dt;
        self.angles = Vec3::new(
            angles.x.rem_euclid(TAU),
            angles.y.rem_euclid(TAU),
            angles.z.rem_euclid(TAU),
        );
        Quat::from_euler(EulerRot::XYZ, self.angles.x, self.angles.y, self.angles.z)
    }
}
