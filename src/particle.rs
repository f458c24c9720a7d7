use rand::Rng;

// Pool sizing: one heart per 20px of width, capped.
pub const MAX_POOL: usize = 50;
pub const PX_PER_HEART: f32 = 20.0;

// Randomized attribute ranges, fixed at spawn.
pub const SIZE_MIN: f32 = 5.0;
pub const SIZE_MAX: f32 = 17.0;
pub const SPEED_MIN: f32 = 1.0;
pub const SPEED_MAX: f32 = 3.0;
pub const OPACITY_MIN: f32 = 0.3;
pub const OPACITY_MAX: f32 = 0.8;
pub const WOBBLE_AMP_MAX: f32 = 2.0;
pub const WOBBLE_SPEED_MIN: f32 = 0.01;
pub const WOBBLE_SPEED_MAX: f32 = 0.06;

/// One falling heart. Owned exclusively by the field; every attribute except
/// `wobble_phase` is fixed between recycles.
#[derive(Clone, Copy, Debug)]
pub struct Heart {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
    pub opacity: f32,
    pub wobble_amp: f32,
    pub wobble_speed: f32,
    pub wobble_phase: f32,
}

impl Heart {
    /// Initial spawn: y is spread across one screen-height above the
    /// viewport so the field drifts in instead of popping.
    pub fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        let mut heart = Self::randomized(rng, width);
        heart.y = rng.gen_range(0.0..height.max(1.0)) - height;
        heart
    }

    fn randomized<R: Rng>(rng: &mut R, width: f32) -> Self {
        Heart {
            x: rng.gen_range(0.0..width.max(1.0)),
            y: 0.0,
            size: rng.gen_range(SIZE_MIN..SIZE_MAX),
            speed: rng.gen_range(SPEED_MIN..SPEED_MAX),
            opacity: rng.gen_range(OPACITY_MIN..OPACITY_MAX),
            wobble_amp: rng.gen_range(0.0..WOBBLE_AMP_MAX),
            wobble_speed: rng.gen_range(WOBBLE_SPEED_MIN..WOBBLE_SPEED_MAX),
            wobble_phase: 0.0,
        }
    }

    /// Advance one frame. A heart that falls past the bottom edge is
    /// recycled in place: fresh attributes, y just above the top edge.
    pub fn step<R: Rng>(&mut self, rng: &mut R, width: f32, height: f32) {
        self.y += self.speed;
        self.wobble_phase += self.wobble_speed;
        self.x += self.wobble_phase.sin() * self.wobble_amp;

        if self.y > height {
            *self = Self::randomized(rng, width);
            self.y = -self.size;
        }
    }

    /// CSS fill for the 2D context; alpha carries the heart's opacity.
    pub fn fill_style(&self) -> String {
        format!("rgba(233, 69, 132, {:.2})", self.opacity)
    }
}

#[inline]
pub fn pool_size(width: f32) -> usize {
    MAX_POOL.min((width / PX_PER_HEART).floor().max(0.0) as usize)
}

pub fn make_pool<R: Rng>(rng: &mut R, width: f32, height: f32) -> Vec<Heart> {
    (0..pool_size(width))
        .map(|_| Heart::spawn(rng, width, height))
        .collect()
}
