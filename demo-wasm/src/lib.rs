use grapple::{
    Aim, Collider, GrappleConfig, GrappleController, GrappleInput, InputOutcome,
    NoOpGrappleObserver, NoOpStepObserver, RigidBody, RopeRenderer, SandboxConfig, SandboxWorld,
    Vec2, Vec3, ViewController,
};
use wasm_bindgen::prelude::*;

const EYE_HEIGHT: f32 = 1.6;

/// Collects the rope segment painted during `late_update`.
#[derive(Default)]
struct RopeBuffer {
    segment: Option<(Vec3<f32>, Vec3<f32>)>,
}

impl RopeRenderer<f32> for RopeBuffer {
    fn draw_segment(&mut self, start: Vec3<f32>, end: Vec3<f32>) {
        self.segment = Some((start, end));
    }

    fn clear(&mut self) {
        self.segment = None;
    }
}

// ---- Grapple Demo ----

#[wasm_bindgen]
pub struct GrappleDemo {
    world: SandboxWorld<f32>,
    grapple: GrappleController<f32>,
    view: ViewController<f32>,
    config: SandboxConfig<f32>,
    rope: RopeBuffer,
    floor_y: f32,
}

#[wasm_bindgen]
impl GrappleDemo {
    /// A course of floating blocks over an open floor. Returns an error
    /// string if the grapple cannot start.
    #[wasm_bindgen(constructor)]
    pub fn new(blocks: usize, spacing: f32) -> Result<GrappleDemo, JsValue> {
        let mut world = SandboxWorld::new();
        let player = world
            .add_body(RigidBody::new(Vec3::new(0.0, 0.0, 0.0), 1.0))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        for i in 0..blocks {
            let z = 10.0 + i as f32 * spacing;
            let x = if i % 2 == 0 { -3.0 } else { 3.0 };
            world.add_collider(Collider::aabb(
                Vec3::new(x - 1.5, 12.0, z - 1.5),
                Vec3::new(x + 1.5, 14.0, z + 1.5),
                0,
            ));
        }

        let grapple = GrappleController::new(GrappleConfig::new(), player, &world)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let view = ViewController::new(player, grapple.config().view_sensitivity);

        Ok(GrappleDemo {
            world,
            grapple,
            view,
            config: SandboxConfig::new()
                .with_gravity(Vec3::new(0.0, -9.81, 0.0))
                .with_sub_steps(2),
            rope: RopeBuffer::default(),
            floor_y: 0.0,
        })
    }

    fn eye(&self) -> Vec3<f32> {
        let p = self.view.position();
        Vec3::new(p.x, p.y + EYE_HEIGHT, p.z)
    }

    /// Returns true if the press attached a rope.
    pub fn press(&mut self) -> bool {
        let aim = Aim::new(self.eye(), self.view.forward());
        let emitter = self.eye();
        matches!(
            self.grapple.on_input(
                GrappleInput::press(),
                aim,
                emitter,
                &mut self.world,
                &mut NoOpGrappleObserver,
            ),
            Ok(InputOutcome::Attached { .. })
        )
    }

    pub fn release(&mut self) {
        self.grapple.detach(&mut self.world, &mut NoOpGrappleObserver);
    }

    pub fn update(&mut self, mouse_dx: f32, mouse_dy: f32, dt: f32) {
        self.view.tick(&self.world, Vec2::new(mouse_dx, mouse_dy), dt);
        // The demo ignores host errors; the body always exists.
        let _ = self.grapple.on_tick(dt, &mut self.world, &mut NoOpGrappleObserver);
        self.world.step(dt, &self.config, &mut NoOpStepObserver);

        let body = self.grapple.body();
        if let Some(b) = self.world.body_mut(body) {
            if b.position.y < self.floor_y {
                b.position.y = self.floor_y;
                b.velocity.y = 0.0;
            }
        }

        let emitter = self.eye();
        self.grapple.on_late_tick(emitter, &mut self.rope);
    }

    /// Returns [x, y, z] of the player body.
    pub fn player(&self) -> Vec<f32> {
        match self.world.body(self.grapple.body()) {
            Some(b) => vec![b.position.x, b.position.y, b.position.z],
            None => Vec::new(),
        }
    }

    /// Returns [yaw, pitch] in degrees.
    pub fn angles(&self) -> Vec<f32> {
        vec![self.view.yaw(), self.view.pitch()]
    }

    /// Returns [x0, y0, z0, x1, y1, z1] or an empty array when no rope is shown.
    pub fn rope(&self) -> Vec<f32> {
        match self.rope.segment {
            Some((a, b)) => vec![a.x, a.y, a.z, b.x, b.y, b.z],
            None => Vec::new(),
        }
    }

    pub fn is_grappling(&self) -> bool {
        self.grapple.is_grappling()
    }
}

impl Drop for GrappleDemo {
    fn drop(&mut self) {
        self.grapple.release(&mut self.world);
    }
}
