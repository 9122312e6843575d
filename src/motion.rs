use std::fmt::Debug;

use serde::Serialize;

use crate::types::Transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Direction of travel along one bounce axis
pub trait Heading: Copy + PartialEq + Debug {
    /// Heading every bounce starts in
    const INITIAL: Self;

    /// True when travelling toward the positive end of the axis
    fn is_forward(self) -> bool;

    fn reversed(self) -> Self;
}

/// Vertical (y) travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Vertical {
    Ascending,
    Descending,
}

impl Heading for Vertical {
    const INITIAL: Self = Vertical::Ascending;

    fn is_forward(self) -> bool {
        self == Vertical::Ascending
    }

    fn reversed(self) -> Self {
        match self {
            Vertical::Ascending => Vertical::Descending,
            Vertical::Descending => Vertical::Ascending,
        }
    }
}

/// Horizontal (x) travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Horizontal {
    Advancing,
    Retreating,
}

impl Heading for Horizontal {
    const INITIAL: Self = Horizontal::Advancing;

    fn is_forward(self) -> bool {
        self == Horizontal::Advancing
    }

    fn reversed(self) -> Self {
        match self {
            Horizontal::Advancing => Horizontal::Retreating,
            Horizontal::Retreating => Horizontal::Advancing,
        }
    }
}

/// Back-and-forth translation between two thresholds.
///
/// Each tick moves one `step` in the current heading. Reaching or passing the
/// threshold ahead flips the heading on that same tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce<H> {
    pub heading: H,
    pub step: f32,
    pub lower: f32,
    pub upper: f32,
    /// Pick a new random color whenever the heading flips
    pub recolor: bool,
}

impl<H: Heading> Bounce<H> {
    pub fn new(step: f32, lower: f32, upper: f32) -> Self {
        Self {
            heading: H::INITIAL,
            step,
            lower,
            upper,
            recolor: false,
        }
    }

    pub fn with_recolor(mut self) -> Self {
        self.recolor = true;
        self
    }

    /// Move one step; returns true when the heading flipped
    pub fn advance(&mut self, position: &mut f32) -> bool {
        let crossed = if self.heading.is_forward() {
            *position += self.step;
            *position >= self.upper
        } else {
            *position -= self.step;
            *position <= self.lower
        };

        if crossed {
            self.heading = self.heading.reversed();
        }
        crossed
    }
}

/// Rotation driven directly by elapsed time: angle = rate * t on each enabled axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    /// Radians per second
    pub rate: f32,
    axes: [bool; 3],
}

impl Spin {
    pub fn new(rate: f32, axes: &[Axis]) -> Self {
        let mut enabled = [false; 3];
        for axis in axes {
            enabled[axis.index()] = true;
        }
        Self { rate, axes: enabled }
    }

    /// Spin about all three axes
    pub fn tumble(rate: f32) -> Self {
        Self::new(rate, &[Axis::X, Axis::Y, Axis::Z])
    }

    pub fn spins(&self, axis: Axis) -> bool {
        self.axes[axis.index()]
    }

    /// Assign (not add) the rotation for the given elapsed time
    pub fn apply(&self, rotation: &mut glam::Vec3, elapsed: f32) {
        let angle = self.rate * elapsed;
        for (component, enabled) in rotation.as_mut().iter_mut().zip(self.axes) {
            if enabled {
                *component = angle;
            }
        }
    }
}

/// What changed during one kinematics update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionUpdate {
    pub vertical_flip: bool,
    pub horizontal_flip: bool,
    /// A flip happened on an axis that asks for a new color
    pub recolor: bool,
}

impl MotionUpdate {
    pub fn flipped(&self) -> bool {
        self.vertical_flip || self.horizontal_flip
    }
}

/// Per-object motion rules
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Kinematics {
    pub spin: Option<Spin>,
    pub vertical: Option<Bounce<Vertical>>,
    pub horizontal: Option<Bounce<Horizontal>>,
}

impl Kinematics {
    pub fn stationary() -> Self {
        Self::default()
    }

    pub fn with_spin(mut self, spin: Spin) -> Self {
        self.spin = Some(spin);
        self
    }

    pub fn with_vertical(mut self, bounce: Bounce<Vertical>) -> Self {
        self.vertical = Some(bounce);
        self
    }

    pub fn with_horizontal(mut self, bounce: Bounce<Horizontal>) -> Self {
        self.horizontal = Some(bounce);
        self
    }

    /// Advance one tick at the given elapsed time
    pub fn update(&mut self, transform: &mut Transform, elapsed: f32) -> MotionUpdate {
        if let Some(spin) = &self.spin {
            spin.apply(&mut transform.rotation, elapsed);
        }

        let mut update = MotionUpdate::default();

        if let Some(bounce) = &mut self.vertical {
            update.vertical_flip = bounce.advance(&mut transform.position.y);
            update.recolor |= update.vertical_flip && bounce.recolor;
        }

        if let Some(bounce) = &mut self.horizontal {
            update.horizontal_flip = bounce.advance(&mut transform.position.x);
            update.recolor |= update.horizontal_flip && bounce.recolor;
        }

        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn headings_start_forward() {
        assert_eq!(Bounce::<Vertical>::new(1.0, -1.0, 1.0).heading, Vertical::Ascending);
        assert_eq!(
            Bounce::<Horizontal>::new(1.0, -1.0, 1.0).heading,
            Horizontal::Advancing
        );
    }

    #[test]
    fn reversed_is_an_involution() {
        assert_eq!(Vertical::Ascending.reversed().reversed(), Vertical::Ascending);
        assert_eq!(Horizontal::Retreating.reversed(), Horizontal::Advancing);
    }

    #[test]
    fn ascending_flips_on_reaching_upper() {
        let mut bounce = Bounce::<Vertical>::new(1.0, -70.0, 70.0);
        let mut y = 68.0;

        assert!(!bounce.advance(&mut y));
        assert_eq!(y, 69.0);
        assert_eq!(bounce.heading, Vertical::Ascending);

        assert!(bounce.advance(&mut y));
        assert_eq!(y, 70.0);
        assert_eq!(bounce.heading, Vertical::Descending);
    }

    #[test]
    fn ascending_flips_when_step_overshoots() {
        let mut bounce = Bounce::<Vertical>::new(1.0, -70.0, 70.0);
        let mut y = 69.5;
        assert!(bounce.advance(&mut y));
        assert_eq!(y, 70.5);
        assert_eq!(bounce.heading, Vertical::Descending);
    }

    #[test]
    fn descending_flips_on_reaching_lower() {
        let mut bounce = Bounce::<Vertical>::new(1.0, -70.0, 70.0);
        bounce.heading = Vertical::Descending;
        let mut y = -69.0;

        assert!(bounce.advance(&mut y));
        assert_eq!(y, -70.0);
        assert_eq!(bounce.heading, Vertical::Ascending);

        assert!(!bounce.advance(&mut y));
        assert_eq!(y, -69.0);
    }

    #[test]
    fn spin_assigns_absolute_angle() {
        let spin = Spin::new(0.5, &[Axis::X, Axis::Z]);
        let mut rotation = Vec3::new(9.0, 9.0, 9.0);

        spin.apply(&mut rotation, 2.0);
        assert_eq!(rotation, Vec3::new(1.0, 9.0, 1.0));

        // Same elapsed time, same angle: nothing accumulates
        spin.apply(&mut rotation, 2.0);
        assert_eq!(rotation, Vec3::new(1.0, 9.0, 1.0));
    }

    #[test]
    fn tumble_spins_every_axis() {
        let spin = Spin::tumble(0.5);
        assert!(spin.spins(Axis::X) && spin.spins(Axis::Y) && spin.spins(Axis::Z));
    }

    #[test]
    fn recolor_only_on_flagged_axis() {
        let mut kinematics = Kinematics::stationary()
            .with_vertical(Bounce::new(1.0, -1.0, 1.0).with_recolor())
            .with_horizontal(Bounce::new(1.0, -1.0, 1.0));
        let mut transform = Transform::at(Vec3::new(0.5, 0.0, 0.0));

        // x reaches 1.5 and flips, y reaches 1.0 and flips
        let update = kinematics.update(&mut transform, 0.0);
        assert!(update.vertical_flip);
        assert!(update.horizontal_flip);
        assert!(update.recolor);

        let mut kinematics = Kinematics::stationary()
            .with_horizontal(Bounce::new(1.0, -1.0, 1.0));
        let mut transform = Transform::at(Vec3::new(0.5, 0.0, 0.0));
        let update = kinematics.update(&mut transform, 0.0);
        assert!(update.horizontal_flip);
        assert!(!update.recolor);
    }

    #[test]
    fn stationary_does_nothing() {
        let mut kinematics = Kinematics::stationary();
        let mut transform = Transform::at(Vec3::new(1.0, 2.0, 3.0));
        let update = kinematics.update(&mut transform, 10.0);
        assert!(!update.flipped());
        assert_eq!(transform, Transform::at(Vec3::new(1.0, 2.0, 3.0)));
    }
}
