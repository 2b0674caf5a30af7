use glam::Vec2;

/// Axis-aligned rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Half-open containment: `[x, x + w) × [y, y + h)`.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x < max.x && p.y >= self.min.y && p.y < max.y
    }

    /// Shrink by `trim` on every side.
    pub fn inset(&self, trim: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(trim),
            size: self.size - Vec2::splat(2.0 * trim),
        }
    }

    pub fn scaled(&self, k: Vec2) -> Self {
        Self {
            min: self.min * k,
            size: self.size * k,
        }
    }
}

/// Four-corner region traced in order and closed back to the first corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad(pub [Vec2; 4]);

impl Quad {
    pub fn corners(&self) -> &[Vec2; 4] {
        &self.0
    }

    pub fn scaled(&self, k: Vec2) -> Self {
        Self(self.0.map(|c| c * k))
    }

    fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        (0..4).map(move |i| (self.0[i], self.0[(i + 1) % 4]))
    }

    /// Nonzero-winding fill test, matching canvas `isPointInPath`.
    pub fn fill_contains(&self, p: Vec2) -> bool {
        let mut winding = 0i32;
        for (a, b) in self.edges() {
            let cross = (b - a).perp_dot(p - a);
            if a.y <= p.y {
                if b.y > p.y && cross > 0.0 {
                    winding += 1;
                }
            } else if b.y <= p.y && cross < 0.0 {
                winding -= 1;
            }
        }
        winding != 0
    }

    /// True when `p` lies within `half_width` of the outline.
    pub fn stroke_contains(&self, p: Vec2, half_width: f32) -> bool {
        self.edges()
            .any(|(a, b)| distance_to_segment(p, a, b) <= half_width)
    }

    /// Hit if on the outline or inside the filled interior.
    #[inline]
    pub fn contains(&self, p: Vec2, stroke_half_width: f32) -> bool {
        self.stroke_contains(p, stroke_half_width) || self.fill_contains(p)
    }
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const ORANGE: Color = Color::rgb(255, 140, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS colour string accepted by canvas style setters.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
