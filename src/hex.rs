use tiny_skia::{Path, PathBuilder};

/// Axial hex-grid coordinate. The origin is the center cell of the tiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl Axial {
    pub const ORIGIN: Axial = Axial { q: 0, r: 0 };

    const fn new(q: i32, r: i32) -> Self {
        Axial { q, r }
    }

    fn offset(self, other: Axial) -> Axial {
        Axial::new(self.q + other.q, self.r + other.r)
    }

    fn scaled(self, factor: i32) -> Axial {
        Axial::new(self.q * factor, self.r * factor)
    }

    /// Hex-grid distance from the origin.
    pub fn distance(self) -> u32 {
        let s = -self.q - self.r;
        (self.q.unsigned_abs() + self.r.unsigned_abs() + s.unsigned_abs()) / 2
    }

    /// Pixel center of this cell relative to the tiling origin, for hexagons
    /// of the given circumradius. Neighboring cells end up `radius * sqrt(3)`
    /// apart.
    pub fn center(self, radius: f32) -> (f32, f32) {
        let g = apothem(radius);
        (g * (2 * self.q + self.r) as f32, 1.5 * radius * self.r as f32)
    }
}

/// The six axial directions, in ring-walk order.
const DIRECTIONS: [Axial; 6] = [
    Axial::new(1, 0),
    Axial::new(1, -1),
    Axial::new(0, -1),
    Axial::new(-1, 0),
    Axial::new(-1, 1),
    Axial::new(0, 1),
];

/// Horizontal half-width of the hexagon, `radius * sqrt(3) / 2`.
pub fn apothem(radius: f32) -> f32 {
    radius * 3f32.sqrt() / 2.0
}

/// The `6 * k` cells at hex-grid distance `k` from the origin, walked in
/// order around the ring. `ring(0)` is the origin cell alone.
pub fn ring(k: u32) -> Vec<Axial> {
    if k == 0 {
        return vec![Axial::ORIGIN];
    }
    let mut cells = Vec::with_capacity(6 * k as usize);
    let mut cell = DIRECTIONS[4].scaled(k as i32);
    for dir in DIRECTIONS {
        for _ in 0..k {
            cells.push(cell);
            cell = cell.offset(dir);
        }
    }
    cells
}

/// Draw order for a tiling of `rings` concentric rings: the center cell
/// first, then each ring outward.
pub fn tiling(rings: u32) -> Vec<Axial> {
    (0..rings).flat_map(ring).collect()
}

/// Vertex positions of a hexagon with a vertical long diagonal: corners at
/// the top and bottom, flat sides left and right.
pub fn hexagon_vertices(cx: f32, cy: f32, radius: f32) -> [(f32, f32); 6] {
    let r = radius;
    let g = apothem(radius);
    [
        (0.0, -r),
        (-g, -r / 2.0),
        (-g, r / 2.0),
        (0.0, r),
        (g, r / 2.0),
        (g, -r / 2.0),
    ]
    .map(|(x, y)| (cx + x, cy + y))
}

/// Closed outline of the hexagon centered at `(cx, cy)`.
pub fn hexagon_path(cx: f32, cy: f32, radius: f32) -> Path {
    let vertices = hexagon_vertices(cx, cy, radius);
    let mut pb = PathBuilder::new();
    let (x0, y0) = vertices[0];
    pb.move_to(x0, y0);
    for &(x, y) in &vertices[1..] {
        pb.line_to(x, y);
    }
    pb.close();
    pb.finish().expect("hexagon outline is a valid path")
}
