use bevy::prelude::*;

/// Root of the cube hierarchy; parallax rotates this entity.
#[derive(Component, Reflect)]
pub struct CubeRig;

/// Explicit Euler orientation of the rig, blended toward the parallax target
/// each frame and written to its `Transform`.
#[derive(Component, Clone, Copy, Debug, PartialEq, Reflect)]
pub struct CubeOrientation {
    /// Rotation about X (radians).
    pub pitch: f32,
    /// Rotation about Y (radians).
    pub yaw: f32,
}

impl CubeOrientation {
    /// Rotation applied to the rig transform.
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }
}

/// Edge cuboid of the outer frame.
#[derive(Component, Reflect)]
pub struct CubeEdge;

/// Small "hardware" cube at one of the eight vertices.
#[derive(Component, Reflect)]
pub struct CornerBracket;

/// The rotating wireframe icosahedron.
#[derive(Component, Reflect)]
pub struct InnerCore;

/// Parent of the floating particle spheres.
#[derive(Component, Reflect)]
pub struct DataParticles;
