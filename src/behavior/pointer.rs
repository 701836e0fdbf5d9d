use std::fmt;

use super::motion::MotionPreference;

const MAGNETIC_PULL: f64 = 0.1;
const TILT_MAX_DEG: f64 = 10.0;
const TILT_HOVER_SCALE: f64 = 1.03;

/// Pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Element bounds in viewport coordinates, as `getBoundingClientRect` reports them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Transform {
    #[default]
    Identity,
    Translate {
        x: f64,
        y: f64,
    },
    Tilt {
        rotate_x: f64,
        rotate_y: f64,
        scale: f64,
    },
}

/// Renders the CSS `transform` value. Identity renders empty so the stylesheet wins.
impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => Ok(()),
            Self::Translate { x, y } => write!(f, "translate({x:.2}px, {y:.2}px)"),
            Self::Tilt {
                rotate_x,
                rotate_y,
                scale,
            } => write!(
                f,
                "rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg) scale({scale})"
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Buttons drift toward the pointer while it is near their centre.
    Magnetic,
    /// Cards rotate in 3D to face the pointer.
    Tilt,
}

/// A stateless pointer-following transform, gated on the motion preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverEffect {
    kind: EffectKind,
    enabled: bool,
}

impl HoverEffect {
    pub fn new(kind: EffectKind, motion: MotionPreference) -> Self {
        Self {
            kind,
            enabled: motion.allows_animation(),
        }
    }

    pub fn magnetic(motion: MotionPreference) -> Self {
        Self::new(EffectKind::Magnetic, motion)
    }

    pub fn tilt(motion: MotionPreference) -> Self {
        Self::new(EffectKind::Tilt, motion)
    }

    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The transform to apply for the pointer at `pointer`, or `None` to leave
    /// the element as it is.
    pub fn pointer_move(&self, pointer: Point, bounds: Rect) -> Option<Transform> {
        if !self.enabled || bounds.width <= 0.0 || bounds.height <= 0.0 {
            return None;
        }
        match self.kind {
            EffectKind::Magnetic => magnetic(pointer, bounds),
            EffectKind::Tilt => Some(tilt(pointer, bounds)),
        }
    }

    pub fn pointer_leave(&self) -> Option<Transform> {
        self.enabled.then_some(Transform::Identity)
    }
}

fn magnetic(pointer: Point, bounds: Rect) -> Option<Transform> {
    let x = pointer.x - bounds.left - bounds.width / 2.0;
    let y = pointer.y - bounds.top - bounds.height / 2.0;
    let distance = x.hypot(y);
    let max_distance = bounds.width.min(bounds.height) / 2.0;
    if distance >= max_distance {
        return None;
    }
    let strength = (max_distance - distance) / max_distance;
    Some(Transform::Translate {
        x: x * strength * MAGNETIC_PULL,
        y: y * strength * MAGNETIC_PULL,
    })
}

fn tilt(pointer: Point, bounds: Rect) -> Transform {
    let x = pointer.x - bounds.left;
    let y = pointer.y - bounds.top;
    let cx = bounds.width / 2.0;
    let cy = bounds.height / 2.0;
    Transform::Tilt {
        rotate_x: (y - cy) / cy * TILT_MAX_DEG,
        rotate_y: (cx - x) / cx * TILT_MAX_DEG,
        scale: TILT_HOVER_SCALE,
    }
}
