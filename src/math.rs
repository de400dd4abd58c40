//! Pure computation helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `Vec` inputs, making them straightforward to unit-test.

use bevy::prelude::{IVec3, Vec2, Vec3};
use noise::{NoiseFn, Value};

/// Maps a noise value from the standard `[-1, 1]` range into `[min, max]`.
///
/// Noise generators produce values centred around zero. This linearly
/// rescales to an arbitrary output range.
pub fn map_noise_to_range(noise_val: f64, min: f32, max: f32) -> f32 {
    min + ((noise_val as f32 + 1.0) / 2.0) * (max - min)
}

/// Quadratic ease-in curve: slow start, fast finish. Returns `t^2`.
pub fn ease_in_quad(t: f32) -> f32 {
    t * t
}

/// Quadratic ease-out curve: fast start, gentle deceleration.
///
/// `t` should be in `[0, 1]`. Returns `1 - (1 - t)^2`.
pub fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(2)
}

/// Linear interpolation from `a` to `b` by `f`.
pub fn lerp(a: f32, b: f32, f: f32) -> f32 {
    a + (b - a) * f
}

/// Target `(pitch, yaw)` for the cube given the normalized pointer.
///
/// Pointer up tilts the cube back (pitch decreases), pointer right turns it
/// right (yaw increases). `deflection` is the offset at the pointer's extreme.
pub fn parallax_target(base_pitch: f32, base_yaw: f32, pointer: Vec2, deflection: f32) -> (f32, f32) {
    (
        base_pitch - pointer.y * deflection,
        base_yaw + pointer.x * deflection,
    )
}

/// Converts a window cursor position (top-left origin, pixels) into
/// `[-1, 1]` on both axes with y pointing up.
///
/// Returns `None` for a degenerate (zero-sized) window.
pub fn normalize_cursor(cursor: Vec2, window_size: Vec2) -> Option<Vec2> {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        cursor.x / window_size.x * 2.0 - 1.0,
        -(cursor.y / window_size.y * 2.0 - 1.0),
    ))
}

/// Per-frame visual parameters of a background pulse orb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbPulse {
    /// Uniform scale of the orb sphere.
    pub scale: f32,
    /// Material alpha.
    pub opacity: f32,
    /// Vertical offset from the orb's origin.
    pub y_offset: f32,
}

/// Breathing animation of a background orb at time `t` (already offset).
///
/// Scale stays within `base_scale * [0.8, 1.2]`, opacity within
/// `[0.005, 0.015]` and the vertical drift within `[-1, 1]`.
pub fn orb_pulse(t: f32, base_scale: f32, phase: f32) -> OrbPulse {
    OrbPulse {
        scale: base_scale * (1.0 + (t * 0.3).sin() * 0.2),
        opacity: 0.005 + (t * 0.5 + phase).sin().max(0.0) * 0.01,
        y_offset: (t * 0.2).sin(),
    }
}

/// Alpha of the radial glow texture at normalized distance `d` from its
/// centre (`0` centre, `1` edge).
///
/// Piecewise linear through `0.6` at the centre, `0.1` at 30 % and `0`
/// at the rim; zero outside the unit disc.
pub fn radial_glow_alpha(d: f32) -> f32 {
    const INNER_STOP: f32 = 0.3;
    if d <= INNER_STOP {
        lerp(0.6, 0.1, d / INNER_STOP)
    } else if d <= 1.0 {
        lerp(0.1, 0.0, (d - INNER_STOP) / (1.0 - INNER_STOP))
    } else {
        0.0
    }
}

/// The eight corners of the `[-1, 1]` cube.
pub fn cube_corners() -> [IVec3; 8] {
    let mut corners = [IVec3::ZERO; 8];
    for (i, corner) in corners.iter_mut().enumerate() {
        let sign = |bit: usize| if i & bit == 0 { -1 } else { 1 };
        *corner = IVec3::new(sign(1), sign(2), sign(4));
    }
    corners
}

/// The twelve edges of the `[-1, 1]` cube: corner pairs differing on one axis.
pub fn cube_edges() -> Vec<(IVec3, IVec3)> {
    let corners = cube_corners();
    let mut edges = Vec::with_capacity(12);
    for (i, a) in corners.iter().enumerate() {
        for b in &corners[i + 1..] {
            let diff = *a - *b;
            let axes = [diff.x, diff.y, diff.z].iter().filter(|c| **c != 0).count();
            if axes == 1 {
                edges.push((*a, *b));
            }
        }
    }
    edges
}

/// Vertices of a regular icosahedron scaled to circumradius `radius`.
pub fn icosahedron_vertices(radius: f32) -> [Vec3; 12] {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let raw = [
        Vec3::new(-1.0, phi, 0.0),
        Vec3::new(1.0, phi, 0.0),
        Vec3::new(-1.0, -phi, 0.0),
        Vec3::new(1.0, -phi, 0.0),
        Vec3::new(0.0, -1.0, phi),
        Vec3::new(0.0, 1.0, phi),
        Vec3::new(0.0, -1.0, -phi),
        Vec3::new(0.0, 1.0, -phi),
        Vec3::new(phi, 0.0, -1.0),
        Vec3::new(phi, 0.0, 1.0),
        Vec3::new(-phi, 0.0, -1.0),
        Vec3::new(-phi, 0.0, 1.0),
    ];
    raw.map(|v| v.normalize() * radius)
}

/// Index pairs of the 30 icosahedron edges (nearest-neighbour vertex pairs).
pub fn icosahedron_edges(vertices: &[Vec3; 12]) -> Vec<(usize, usize)> {
    let edge_len = vertices[0].distance(vertices[1]);
    let mut edges = Vec::with_capacity(30);
    for i in 0..vertices.len() {
        for j in i + 1..vertices.len() {
            if (vertices[i].distance(vertices[j]) - edge_len).abs() < edge_len * 1e-3 {
                edges.push((i, j));
            }
        }
    }
    edges
}

/// Deterministic per-index jitter drawn from seeded value noise.
///
/// Sampling on integer lattice points yields the raw hashed lattice values,
/// which behave like a seeded uniform source in `[-1, 1]`.
pub struct Scatter(Value);

impl Scatter {
    /// Creates a scatter source for `seed`.
    pub fn new(seed: u32) -> Self {
        Self(Value::new(seed))
    }

    /// Samples `channel` of item `index`, mapped into `[min, max]`.
    pub fn sample(&self, index: usize, channel: u32, min: f32, max: f32) -> f32 {
        let raw = self.0.get([index as f64, channel as f64 * 7.0]).clamp(-1.0, 1.0);
        map_noise_to_range(raw, min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── map_noise_to_range ──────────────────────────────────────────

    #[test]
    fn noise_min_maps_to_range_min() {
        assert_eq!(map_noise_to_range(-1.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn noise_max_maps_to_range_max() {
        assert_eq!(map_noise_to_range(1.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn noise_zero_maps_to_midpoint() {
        let result = map_noise_to_range(0.0, 2.0, 6.0);
        assert!((result - 4.0).abs() < 1e-6);
    }

    // ── easing ──────────────────────────────────────────────────────

    #[test]
    fn eases_hit_endpoints() {
        assert_eq!(ease_in_quad(0.0), 0.0);
        assert_eq!(ease_in_quad(1.0), 1.0);
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
    }

    #[test]
    fn ease_out_leads_and_ease_in_lags_linear() {
        assert!(ease_out_quad(0.5) > 0.5);
        assert!(ease_in_quad(0.5) < 0.5);
    }

    #[test]
    fn eases_are_monotonically_increasing() {
        for f in [ease_in_quad, ease_out_quad] {
            let steps: Vec<f32> = (0..=100).map(|i| f(i as f32 / 100.0)).collect();
            for w in steps.windows(2) {
                assert!(w[1] >= w[0], "easing must be non-decreasing");
            }
        }
    }

    // ── parallax ────────────────────────────────────────────────────

    #[test]
    fn centred_pointer_targets_base_orientation() {
        let (pitch, yaw) = parallax_target(0.6, 0.8, Vec2::ZERO, 0.2);
        assert_eq!((pitch, yaw), (0.6, 0.8));
    }

    #[test]
    fn pointer_extremes_deflect_by_constant() {
        let (pitch, yaw) = parallax_target(0.6, 0.8, Vec2::new(1.0, 1.0), 0.2);
        assert!((pitch - 0.4).abs() < 1e-6);
        assert!((yaw - 1.0).abs() < 1e-6);

        let (pitch, yaw) = parallax_target(0.6, 0.8, Vec2::new(-1.0, -1.0), 0.2);
        assert!((pitch - 0.8).abs() < 1e-6);
        assert!((yaw - 0.6).abs() < 1e-6);
    }

    #[test]
    fn cursor_corners_normalize_with_y_up() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(normalize_cursor(Vec2::ZERO, size), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(normalize_cursor(size, size), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(normalize_cursor(size / 2.0, size), Some(Vec2::ZERO));
    }

    #[test]
    fn zero_sized_window_has_no_pointer() {
        assert_eq!(normalize_cursor(Vec2::ZERO, Vec2::ZERO), None);
    }

    // ── orb_pulse ───────────────────────────────────────────────────

    #[test]
    fn orb_pulse_stays_in_documented_ranges() {
        for i in 0..2000 {
            let t = i as f32 * 0.173;
            let p = orb_pulse(t, 10.0, 3.0);
            assert!((8.0 - 1e-4..=12.0 + 1e-4).contains(&p.scale));
            assert!((0.005..=0.015 + 1e-6).contains(&p.opacity));
            assert!((-1.0..=1.0).contains(&p.y_offset));
        }
    }

    // ── radial_glow_alpha ───────────────────────────────────────────

    #[test]
    fn glow_falls_off_from_centre_to_rim() {
        assert!((radial_glow_alpha(0.0) - 0.6).abs() < 1e-6);
        assert!((radial_glow_alpha(0.3) - 0.1).abs() < 1e-6);
        assert!(radial_glow_alpha(1.0).abs() < 1e-6);
        assert_eq!(radial_glow_alpha(1.5), 0.0);
    }

    // ── cube / icosahedron topology ─────────────────────────────────

    #[test]
    fn cube_has_eight_unique_corners() {
        let corners = cube_corners();
        for (i, a) in corners.iter().enumerate() {
            assert!([a.x, a.y, a.z].iter().all(|c| c.abs() == 1));
            assert!(corners[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn cube_has_twelve_axis_aligned_edges() {
        let edges = cube_edges();
        assert_eq!(edges.len(), 12);
        for (a, b) in edges {
            assert_eq!((a - b).abs().element_sum(), 2);
        }
    }

    #[test]
    fn icosahedron_has_thirty_edges_on_sphere() {
        let verts = icosahedron_vertices(0.55);
        for v in &verts {
            assert!((v.length() - 0.55).abs() < 1e-5);
        }
        assert_eq!(icosahedron_edges(&verts).len(), 30);
    }

    // ── Scatter ─────────────────────────────────────────────────────

    #[test]
    fn scatter_is_deterministic_and_in_range() {
        let a = Scatter::new(7);
        let b = Scatter::new(7);
        for i in 0..40 {
            for ch in 0..3 {
                let v = a.sample(i, ch, -0.8, 0.8);
                assert_eq!(v, b.sample(i, ch, -0.8, 0.8));
                assert!((-0.8..=0.8).contains(&v));
            }
        }
    }

    #[test]
    fn scatter_seed_changes_layout() {
        let a = Scatter::new(42);
        let b = Scatter::new(43);
        let differing = (0..40)
            .filter(|&i| a.sample(i, 0, -1.0, 1.0) != b.sample(i, 0, -1.0, 1.0))
            .count();
        assert!(differing > 20);
    }
}
