use bevy::prelude::*;
use constants::interaction::{
    DRAG_SENSITIVITY, IDLE_DRIFT, IDLE_VELOCITY_THRESHOLD, INERTIA_FRICTION,
};

/// Angular velocity in radians per frame. `x` is horizontal pointer motion,
/// `y` vertical.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationInertia {
    pub velocity: Vec2,
    pub dragging: bool,
}

/// Horizontal motion turns the glyph about Y, vertical motion about X.
pub fn rotation_increment(velocity: Vec2) -> Vec3 {
    Vec3::new(velocity.y, velocity.x, 0.0)
}

impl RotationInertia {
    pub fn begin_drag(&mut self) {
        self.velocity = Vec2::ZERO;
        self.dragging = true;
    }

    /// Set velocity from a pointer delta and return the rotation to apply now.
    pub fn drag(&mut self, delta: Vec2) -> Vec3 {
        self.velocity = delta * DRAG_SENSITIVITY;
        rotation_increment(self.velocity)
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn is_idle(&self) -> bool {
        !self.dragging
            && self.velocity.x.abs() < IDLE_VELOCITY_THRESHOLD
            && self.velocity.y.abs() < IDLE_VELOCITY_THRESHOLD
    }

    /// One frame of free spin. Returns `None` while a drag owns the rotation.
    pub fn step(&mut self) -> Option<Vec3> {
        if self.dragging {
            return None;
        }
        if self.is_idle() {
            return Some(IDLE_DRIFT);
        }

        let increment = rotation_increment(self.velocity);
        self.velocity *= INERTIA_FRICTION;
        Some(increment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_sets_velocity_from_delta() {
        let mut inertia = RotationInertia::default();
        inertia.begin_drag();
        let increment = inertia.drag(Vec2::new(50.0, 20.0));

        assert!((inertia.velocity - Vec2::new(0.5, 0.2)).length() < 1e-6);
        assert!((increment - Vec3::new(0.2, 0.5, 0.0)).length() < 1e-6);
    }

    #[test]
    fn no_free_spin_while_dragging() {
        let mut inertia = RotationInertia {
            velocity: Vec2::ZERO,
            dragging: true,
        };
        assert_eq!(inertia.step(), None);
    }

    #[test]
    fn velocity_decays_by_friction_each_frame() {
        let mut inertia = RotationInertia {
            velocity: Vec2::new(0.5, 0.2),
            dragging: false,
        };
        let first = inertia.step().unwrap();
        assert!((first - Vec3::new(0.2, 0.5, 0.0)).length() < 1e-6);
        assert!((inertia.velocity - Vec2::new(0.495, 0.198)).length() < 1e-6);

        inertia.step();
        assert!((inertia.velocity - Vec2::new(0.5, 0.2) * 0.99 * 0.99).length() < 1e-6);
    }

    #[test]
    fn drift_needs_both_components_below_threshold() {
        let mut slow_x_only = RotationInertia {
            velocity: Vec2::new(0.0005, 0.01),
            dragging: false,
        };
        assert_ne!(slow_x_only.step(), Some(IDLE_DRIFT));

        let mut settled = RotationInertia {
            velocity: Vec2::new(0.0005, -0.0009),
            dragging: false,
        };
        assert_eq!(settled.step(), Some(IDLE_DRIFT));
        // Drift leaves the residual velocity alone.
        assert_eq!(settled.velocity, Vec2::new(0.0005, -0.0009));
    }

    #[test]
    fn spin_eventually_settles_into_drift() {
        let mut inertia = RotationInertia {
            velocity: Vec2::new(0.3, -0.2),
            dragging: false,
        };
        let frames = (0..2000).take_while(|_| inertia.step() != Some(IDLE_DRIFT)).count();
        assert!(frames > 100 && frames < 2000);
    }
}
