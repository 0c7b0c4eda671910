#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform2D {
    // Affine 2D: [a, b, c, d, e, f] for matrix [[a c e],[b d f],[0 0 1]]
    pub m: [f32; 6],
}

impl Transform2D {
    pub fn identity() -> Self {
        Self {
            m: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Compose two transforms: self ∘ other (apply `other`, then `self`).
    pub fn concat(self, other: Self) -> Self {
        let [a1, b1, c1, d1, e1, f1] = self.m;
        let [a2, b2, c2, d2, e2, f2] = other.m;
        Self {
            m: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * e2 + c1 * f2 + e1,
                b1 * e2 + d1 * f2 + f1,
            ],
        }
    }

    pub fn translate(tx: f32, ty: f32) -> Self {
        Self {
            m: [1.0, 0.0, 0.0, 1.0, tx, ty],
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            m: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Rotation about the origin, angle in radians (clockwise in y-down space).
    pub fn rotate(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            m: [c, s, -s, c, 0.0, 0.0],
        }
    }

    /// Rotation about an arbitrary pivot point.
    pub fn rotate_about(angle: f32, px: f32, py: f32) -> Self {
        Self::translate(px, py)
            .concat(Self::rotate(angle))
            .concat(Self::translate(-px, -py))
    }

    /// Uniform or non-uniform scale about an arbitrary pivot point.
    pub fn scale_about(sx: f32, sy: f32, px: f32, py: f32) -> Self {
        Self::translate(px, py)
            .concat(Self::scale(sx, sy))
            .concat(Self::translate(-px, -py))
    }

    pub fn apply(&self, p: [f32; 2]) -> [f32; 2] {
        let [a, b, c, d, e, f] = self.m;
        [a * p[0] + c * p[1] + e, b * p[0] + d * p[1] + f]
    }

    /// Inverse transform, or `None` when the matrix is singular.
    pub fn invert(&self) -> Option<Self> {
        let [a, b, c, d, e, f] = self.m;
        let det = a * d - b * c;
        if det.abs() < 1e-9 {
            return None;
        }
        let inv = 1.0 / det;
        Some(Self {
            m: [
                d * inv,
                -b * inv,
                -c * inv,
                a * inv,
                (c * f - d * e) * inv,
                (b * e - a * f) * inv,
            ],
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorLinPremul {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Alias for the premultiplied linear color type, for a friendlier name in APIs.
pub type Color = ColorLinPremul;

#[derive(Clone, Debug)]
pub enum Brush {
    Solid(ColorLinPremul),
    LinearGradient {
        start: [f32; 2],
        end: [f32; 2],
        stops: Vec<(f32, ColorLinPremul)>,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn contains(&self, p: [f32; 2]) -> bool {
        p[0] >= self.x && p[0] <= self.x + self.w && p[1] >= self.y && p[1] <= self.y + self.h
    }

    pub fn center(&self) -> [f32; 2] {
        [self.x + self.w * 0.5, self.y + self.h * 0.5]
    }

    /// Shrink uniformly on all sides.
    pub fn inset(&self, d: f32) -> Rect {
        Rect {
            x: self.x + d,
            y: self.y + d,
            w: (self.w - d * 2.0).max(0.0),
            h: (self.h - d * 2.0).max(0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoundedRadii {
    pub tl: f32,
    pub tr: f32,
    pub br: f32,
    pub bl: f32,
}

impl RoundedRadii {
    pub fn uniform(r: f32) -> Self {
        Self {
            tl: r,
            tr: r,
            br: r,
            bl: r,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radii: RoundedRadii,
}

impl RoundedRect {
    pub fn uniform(rect: Rect, radius: f32) -> Self {
        Self {
            rect,
            radii: RoundedRadii::uniform(radius),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ClipRect(pub Rect);

/// Dash pattern for stroked paths: alternating on/off lengths plus a phase
/// offset into the pattern. Animating the offset produces draw-on effects.
#[derive(Clone, Debug, Default)]
pub struct DashPattern {
    pub array: Vec<f32>,
    pub offset: f32,
}

#[derive(Clone, Debug, Default)]
pub struct Stroke {
    pub width: f32,
    pub dash: Option<DashPattern>,
}

impl Stroke {
    pub fn new(width: f32) -> Self {
        Self { width, dash: None }
    }

    pub fn dashed(width: f32, array: Vec<f32>, offset: f32) -> Self {
        Self {
            width,
            dash: Some(DashPattern { array, offset }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TextRun {
    pub text: String,
    pub pos: [f32; 2],
    pub size: f32,
    pub color: ColorLinPremul,
}

#[derive(Clone, Copy, Debug)]
pub enum FillRule {
    NonZero,
    EvenOdd,
}

#[derive(Clone, Debug)]
pub enum PathCmd {
    MoveTo([f32; 2]),
    LineTo([f32; 2]),
    QuadTo([f32; 2], [f32; 2]),
    CubicTo([f32; 2], [f32; 2], [f32; 2]),
    Close,
}

#[derive(Clone, Debug)]
pub struct Path {
    pub cmds: Vec<PathCmd>,
    pub fill_rule: FillRule,
}

impl Path {
    /// Build an open polyline path from a point list.
    pub fn polyline(points: &[[f32; 2]]) -> Self {
        let mut cmds = Vec::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                cmds.push(PathCmd::MoveTo(*p));
            } else {
                cmds.push(PathCmd::LineTo(*p));
            }
        }
        Self {
            cmds,
            fill_rule: FillRule::NonZero,
        }
    }

    /// Build a closed polygon path from a point list.
    pub fn polygon(points: &[[f32; 2]]) -> Self {
        let mut path = Self::polyline(points);
        path.cmds.push(PathCmd::Close);
        path
    }
}
