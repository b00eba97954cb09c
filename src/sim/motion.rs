//! Motion system: integration and wall reflection

use super::store::EntityStore;

/// Drawable surface size (viewport pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Clamp one coordinate into `[radius, extent - radius]`, flipping the
/// matching velocity component on contact.
///
/// The low wall is checked first, so a surface narrower than one diameter
/// pins the ball at `radius` instead of oscillating.
#[inline]
fn reflect_axis(pos: &mut f32, vel: &mut f32, extent: f32, radius: f32) {
    if *pos < radius {
        *pos = radius;
        *vel = -*vel;
    } else if *pos > extent - radius {
        *pos = extent - radius;
        *vel = -*vel;
    }
}

/// Advance every entity by `velocity * dt`, then reflect off the walls.
///
/// `dt` is used as given: zero moves nothing, negative runs entities
/// backwards, large values are not split into substeps.
pub fn update(store: &mut EntityStore, dt: f32, bounds: Bounds, radius: f32) {
    for (pos, vel) in store.iter_mut() {
        pos.x += vel.vx * dt;
        pos.y += vel.vy * dt;

        reflect_axis(&mut pos.x, &mut vel.vx, bounds.width, radius);
        reflect_axis(&mut pos.y, &mut vel.vy, bounds.height, radius);
    }
}
