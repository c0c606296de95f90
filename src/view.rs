//! First-person view: pointer deltas to a pitch-clamped orientation that
//! follows the player body.

use crate::float::Float;
use crate::host::{BodyId, BodyState};
use crate::quat::Quat;
use crate::vec::{Vec, Vec2, Vec3};

/// Pitch limit in degrees, both directions.
pub const PITCH_LIMIT_DEGREES: f32 = 90.0;

/// Yaw/pitch accumulator bound to one body.
///
/// The body is injected at construction and resolved through
/// [`BodyState`] every tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewController<F: Float> {
    body: BodyId,
    sensitivity: F,
    yaw: F,
    pitch: F,
    position: Vec3<F>,
}

impl<F: Float> ViewController<F> {
    pub fn new(body: BodyId, sensitivity: F) -> Self {
        ViewController {
            body,
            sensitivity,
            yaw: F::zero(),
            pitch: F::zero(),
            position: Vec3::zero(),
        }
    }

    /// Accumulate one frame of pointer movement. Yaw is unbounded; pitch is
    /// clamped to +/-90 degrees. Positive `dy` looks up.
    pub fn look(&mut self, pointer_delta: Vec2<F>, dt: F) {
        let limit = F::from_f32(PITCH_LIMIT_DEGREES);
        self.yaw = self.yaw + pointer_delta.x * self.sensitivity * dt;
        self.pitch = (self.pitch - pointer_delta.y * self.sensitivity * dt).clamp(-limit, limit);
    }

    /// Snap to the tracked body. Keeps the last position if the body is gone.
    pub fn follow<B: BodyState<F> + ?Sized>(&mut self, bodies: &B) {
        if let Some(position) = bodies.body_position(self.body) {
            self.position = position;
        }
    }

    /// Per-frame update: follow the body, then apply the pointer delta.
    pub fn tick<B: BodyState<F> + ?Sized>(&mut self, bodies: &B, pointer_delta: Vec2<F>, dt: F) {
        self.follow(bodies);
        self.look(pointer_delta, dt);
    }

    /// Rotation from `(pitch, yaw, 0)`: pitch about local X, then yaw about
    /// world Y.
    pub fn orientation(&self) -> Quat<F> {
        Quat::from_euler_degrees(self.pitch, self.yaw, F::zero())
    }

    /// Unit view direction; the probe casts along this.
    pub fn forward(&self) -> Vec3<F> {
        self.orientation().rotate(Vec3::forward())
    }

    pub fn pose(&self) -> (Vec3<F>, Quat<F>) {
        (self.position, self.orientation())
    }

    pub fn position(&self) -> Vec3<F> {
        self.position
    }

    pub fn yaw(&self) -> F {
        self.yaw
    }

    pub fn pitch(&self) -> F {
        self.pitch
    }

    pub fn body(&self) -> BodyId {
        self.body
    }

    /// Jump to an absolute orientation, clamping pitch.
    pub fn set_angles(&mut self, yaw: F, pitch: F) {
        let limit = F::from_f32(PITCH_LIMIT_DEGREES);
        self.yaw = yaw;
        self.pitch = pitch.clamp(-limit, limit);
    }
}
