//! Camera orbit around the globe.
//!
//! The camera, not the globe, moves: this keeps the sun light fixed in scene
//! space. Two inputs drive it:
//! - `tick` once per animation frame, which advances the orbit longitude while
//!   auto-rotation is on;
//! - `handle` for pointer events, which suspends auto-rotation while hovered and
//!   turns drags into spherical rotations around the origin.

use std::f64::consts::TAU;

use foundation::math::{Coordinate, Spherical, Vec2, Vec3, place};

use crate::camera::Camera;
use crate::pointer::{PointerButton, PointerEvent, Repaint};

/// Pixels of drag per full turn, in units of the element height.
const DRAG_TURN_HEIGHTS: f64 = 10.0;

/// Observable controller mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitMode {
    /// Auto-rotating.
    Spinning,
    /// Hovered: rotation suspended, no drag in progress.
    Idle,
    /// A primary-button drag is in progress.
    Dragging,
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    /// Pointer position when the button went down.
    start: Vec2,
}

#[derive(Debug, Clone)]
pub struct OrbitController {
    camera: Camera,

    /// Orbit longitude in degrees. Unbounded; trigonometry wraps it.
    angle: f64,

    /// Latitude the auto-rotation orbits at.
    latitude: f64,

    orbit_radius: f64,
    spin_step_deg: f64,
    spinning: bool,
    drag: Option<DragSession>,

    /// Height of the element receiving pointer events, in pixels.
    element_height: f64,
}

impl OrbitController {
    pub fn new(orbit_radius: f64, initial: Coordinate, spin_step_deg: f64) -> Self {
        let mut camera = Camera::new(initial.place(orbit_radius));
        camera.look_at(Vec3::ZERO);

        Self {
            camera,
            angle: initial.longitude,
            latitude: initial.latitude,
            orbit_radius,
            spin_step_deg,
            spinning: true,
            drag: None,
            element_height: 1.0,
        }
    }

    pub fn set_element_size(&mut self, _width: f64, height: f64) {
        self.element_height = height.max(1.0);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    pub fn mode(&self) -> OrbitMode {
        if self.drag.is_some() {
            OrbitMode::Dragging
        } else if self.spinning {
            OrbitMode::Spinning
        } else {
            OrbitMode::Idle
        }
    }

    /// Advance one animation frame. Returns whether the camera moved.
    pub fn tick(&mut self) -> bool {
        if !self.spinning {
            return false;
        }

        self.camera.position = place(self.orbit_radius, self.latitude, self.angle);
        self.camera.look_at(Vec3::ZERO);
        self.angle += self.spin_step_deg;
        true
    }

    pub fn handle(&mut self, event: PointerEvent) -> Repaint {
        match event {
            PointerEvent::Enter => {
                self.spinning = false;
                Repaint::Skip
            }
            PointerEvent::Leave => {
                self.spinning = true;
                Repaint::Now
            }
            PointerEvent::Down { position, button } => {
                if button == PointerButton::Primary {
                    self.drag = Some(DragSession { start: position });
                }
                Repaint::Skip
            }
            PointerEvent::Move { position } => match self.drag {
                Some(session) => {
                    self.drag_camera(session.start, position);
                    Repaint::Now
                }
                None => Repaint::Skip,
            },
            PointerEvent::Up => {
                self.drag = None;
                Repaint::Skip
            }
        }
    }

    /// Rotate the camera by the displacement from `start` to `end`.
    fn drag_camera(&mut self, start: Vec2, end: Vec2) {
        let turn_px = DRAG_TURN_HEIGHTS * self.element_height;
        let delta = end - start;

        let mut spherical = Spherical::from_vec3(self.camera.position);
        spherical.theta -= TAU * delta.x / turn_px;
        spherical.phi -= TAU * delta.y / turn_px;

        self.camera.position = spherical.make_safe().to_vec3();
        self.camera.look_at(Vec3::ZERO);
    }
}

#[cfg(test)]
mod tests {
    use super::{OrbitController, OrbitMode};
    use crate::config::{INITIAL_COORDINATE, ORBIT_RADIUS, SPIN_STEP_DEG};
    use crate::pointer::{PointerButton, PointerEvent, Repaint};
    use foundation::math::{Spherical, Vec2, Vec3, place};
    use std::f64::consts::{PI, TAU};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    fn controller() -> OrbitController {
        let mut ctrl = OrbitController::new(ORBIT_RADIUS, INITIAL_COORDINATE, SPIN_STEP_DEG);
        ctrl.set_element_size(100.0, 100.0);
        ctrl
    }

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            position: Vec2::new(x, y),
            button: PointerButton::Primary,
        }
    }

    fn move_to(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move {
            position: Vec2::new(x, y),
        }
    }

    #[test]
    fn starts_spinning_at_initial_coordinate() {
        let ctrl = controller();
        assert_eq!(ctrl.mode(), OrbitMode::Spinning);
        assert_eq!(ctrl.camera().position, INITIAL_COORDINATE.place(ORBIT_RADIUS));
        assert_eq!(ctrl.camera().target, Vec3::ZERO);
    }

    #[test]
    fn tick_places_camera_then_advances_angle() {
        let mut ctrl = controller();
        let start = ctrl.angle();

        assert!(ctrl.tick());
        assert_close(ctrl.angle(), start + SPIN_STEP_DEG, 1e-12);
        assert!(ctrl.tick());
        let expected = place(ORBIT_RADIUS, INITIAL_COORDINATE.latitude, start + SPIN_STEP_DEG);
        assert_eq!(ctrl.camera().position, expected);
        assert_close(ctrl.camera().position.length(), ORBIT_RADIUS, 1e-12);
    }

    #[test]
    fn hover_suspends_and_leave_resumes() {
        let mut ctrl = controller();
        assert_eq!(ctrl.handle(PointerEvent::Enter), Repaint::Skip);
        assert_eq!(ctrl.mode(), OrbitMode::Idle);

        let before = ctrl.camera().position;
        let angle = ctrl.angle();
        assert!(!ctrl.tick());
        assert_eq!(ctrl.camera().position, before);
        assert_eq!(ctrl.angle(), angle);

        assert_eq!(ctrl.handle(PointerEvent::Leave), Repaint::Now);
        assert_eq!(ctrl.mode(), OrbitMode::Spinning);
        assert!(ctrl.tick());
    }

    #[test]
    fn only_primary_button_starts_a_drag() {
        let mut ctrl = controller();
        let _ = ctrl.handle(PointerEvent::Enter);
        let _ = ctrl.handle(PointerEvent::Down {
            position: Vec2::new(0.0, 0.0),
            button: PointerButton::from_index(2),
        });
        assert_eq!(ctrl.mode(), OrbitMode::Idle);
        assert_eq!(ctrl.handle(move_to(30.0, 0.0)), Repaint::Skip);

        let _ = ctrl.handle(down(0.0, 0.0));
        assert_eq!(ctrl.mode(), OrbitMode::Dragging);
    }

    #[test]
    fn horizontal_drag_rotates_azimuth() {
        let mut ctrl = controller();
        let _ = ctrl.handle(PointerEvent::Enter);
        let before = Spherical::from_vec3(ctrl.camera().position);

        let _ = ctrl.handle(down(10.0, 10.0));
        assert_eq!(ctrl.handle(move_to(60.0, 10.0)), Repaint::Now);

        let after = Spherical::from_vec3(ctrl.camera().position);
        assert_close(after.theta, before.theta - TAU * 50.0 / 1000.0, 1e-9);
        assert_close(after.phi, before.phi, 1e-9);
        assert_close(after.radius, ORBIT_RADIUS, 1e-12);
        assert_eq!(ctrl.camera().target, Vec3::ZERO);
    }

    #[test]
    fn up_ends_the_drag() {
        let mut ctrl = controller();
        let _ = ctrl.handle(PointerEvent::Enter);
        let _ = ctrl.handle(down(0.0, 0.0));
        let _ = ctrl.handle(PointerEvent::Up);
        assert_eq!(ctrl.mode(), OrbitMode::Idle);

        let before = ctrl.camera().position;
        assert_eq!(ctrl.handle(move_to(80.0, 80.0)), Repaint::Skip);
        assert_eq!(ctrl.camera().position, before);
    }

    #[test]
    fn vertical_drags_never_reach_a_pole() {
        let mut ctrl = controller();
        let _ = ctrl.handle(PointerEvent::Enter);

        for dy in [-5_000.0, 5_000.0, -12_345.0, 9_999.0] {
            let _ = ctrl.handle(down(0.0, 0.0));
            for _ in 0..20 {
                let _ = ctrl.handle(move_to(3.0, dy));
                let s = Spherical::from_vec3(ctrl.camera().position);
                assert!(s.phi > 0.0 && s.phi < PI, "phi reached a pole: {}", s.phi);
                assert_close(s.radius, ORBIT_RADIUS, 1e-9);
            }
            let _ = ctrl.handle(PointerEvent::Up);
        }
    }
}
