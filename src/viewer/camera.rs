//! Orbit camera with damped rotation and zoom.

use glam::{Mat4, Vec3};

/// Smallest and largest orbit distance reachable by zooming.
const DISTANCE_RANGE: (f32, f32) = (1.0, 5000.0);
/// Pitch is kept just short of the poles so `look_at` stays well defined.
const PITCH_LIMIT: f32 = 1.5;

/// Orbit camera for viewing the helix.
///
/// Input moves a goal orientation; [`update`](Self::update) eases the
/// visible orientation toward it, so motion glides to a stop after the
/// mouse is released.
pub struct OrbitCamera {
    /// Horizontal rotation angle in radians.
    pub yaw: f32,
    /// Vertical rotation angle in radians.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera orbits around.
    pub target: Vec3,
    /// Fraction of the remaining motion applied per 60 Hz frame.
    pub damping: f32,
    goal_yaw: f32,
    goal_pitch: f32,
    goal_distance: f32,
}

impl OrbitCamera {
    /// Place the camera at `eye`, looking at `target`.
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(DISTANCE_RANGE.0);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();

        Self {
            yaw,
            pitch,
            distance,
            target,
            damping: 0.05,
            goal_yaw: yaw,
            goal_pitch: pitch,
            goal_distance: distance,
        }
    }

    /// Calculate the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Rotate by a mouse drag of `dx`, `dy` pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.goal_yaw -= dx * 0.005;
        self.goal_pitch = (self.goal_pitch + dy * 0.005).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Zoom by `scroll` wheel lines; positive moves closer.
    pub fn zoom(&mut self, scroll: f32) {
        self.goal_distance =
            (self.goal_distance * 0.9_f32.powf(scroll)).clamp(DISTANCE_RANGE.0, DISTANCE_RANGE.1);
    }

    /// Advance the damped motion by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let keep = (1.0 - self.damping.clamp(0.0, 1.0)).powf(dt.max(0.0) * 60.0);
        let blend = 1.0 - keep;
        self.yaw += (self.goal_yaw - self.yaw) * blend;
        self.pitch += (self.goal_pitch - self.pitch) * blend;
        self.distance += (self.goal_distance - self.distance) * blend;
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(Vec3::new(3.0, 3.0, 70.0), Vec3::ZERO)
    }
}
