//! Grid topology: neighbor slots, boundary classes and the unique edge list.
//!
//! Built once when a grid is constructed and never recomputed.
//! Neighbors are stored as arena indices ([`ParticleId`]), so the grid can
//! be moved or cloned freely without invalidating links.

use serde::{Deserialize, Serialize};
use weft_types::constants::NEIGHBOR_SLOTS;
use weft_types::{GridCoord, ParticleId, Scalar};

/// Where a particle sits on the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryClass {
    /// Both coordinates on a boundary.
    Corner,
    /// Exactly one coordinate on a boundary.
    Edge,
    /// No coordinate on a boundary.
    Interior,
}

impl BoundaryClass {
    /// Classify a coordinate on a `cols × rows` lattice.
    pub fn classify(coord: GridCoord, cols: usize, rows: usize) -> Self {
        let on_x = coord.x == 0 || coord.x + 1 == cols;
        let on_y = coord.y == 0 || coord.y + 1 == rows;
        match (on_x, on_y) {
            (true, true) => BoundaryClass::Corner,
            (true, false) | (false, true) => BoundaryClass::Edge,
            (false, false) => BoundaryClass::Interior,
        }
    }
}

/// Spring family of a neighbor relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpringFamily {
    /// 1-hop orthogonal.
    Structural,
    /// 1-hop diagonal.
    Shear,
    /// 2-hop orthogonal, resists folding.
    Bend,
}

/// One of the 12 neighbor slots. The discriminant is the slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Neighbor {
    Left = 0,
    Right = 1,
    Down = 2,
    Up = 3,
    DownLeft = 4,
    DownRight = 5,
    UpLeft = 6,
    UpRight = 7,
    Left2 = 8,
    Right2 = 9,
    Down2 = 10,
    Up2 = 11,
}

impl Neighbor {
    /// All slots in slot order.
    pub const ALL: [Neighbor; NEIGHBOR_SLOTS] = [
        Neighbor::Left,
        Neighbor::Right,
        Neighbor::Down,
        Neighbor::Up,
        Neighbor::DownLeft,
        Neighbor::DownRight,
        Neighbor::UpLeft,
        Neighbor::UpRight,
        Neighbor::Left2,
        Neighbor::Right2,
        Neighbor::Down2,
        Neighbor::Up2,
    ];

    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Lattice offset `(dx, dy)` to the neighbor. "Down" is `-y`.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Neighbor::Left => (-1, 0),
            Neighbor::Right => (1, 0),
            Neighbor::Down => (0, -1),
            Neighbor::Up => (0, 1),
            Neighbor::DownLeft => (-1, -1),
            Neighbor::DownRight => (1, -1),
            Neighbor::UpLeft => (-1, 1),
            Neighbor::UpRight => (1, 1),
            Neighbor::Left2 => (-2, 0),
            Neighbor::Right2 => (2, 0),
            Neighbor::Down2 => (0, -2),
            Neighbor::Up2 => (0, 2),
        }
    }

    /// The slot the neighbor uses to point back.
    pub fn mirror(self) -> Self {
        match self {
            Neighbor::Left => Neighbor::Right,
            Neighbor::Right => Neighbor::Left,
            Neighbor::Down => Neighbor::Up,
            Neighbor::Up => Neighbor::Down,
            Neighbor::DownLeft => Neighbor::UpRight,
            Neighbor::UpRight => Neighbor::DownLeft,
            Neighbor::DownRight => Neighbor::UpLeft,
            Neighbor::UpLeft => Neighbor::DownRight,
            Neighbor::Left2 => Neighbor::Right2,
            Neighbor::Right2 => Neighbor::Left2,
            Neighbor::Down2 => Neighbor::Up2,
            Neighbor::Up2 => Neighbor::Down2,
        }
    }

    pub fn family(self) -> SpringFamily {
        match self.slot() {
            0..=3 => SpringFamily::Structural,
            4..=7 => SpringFamily::Shear,
            _ => SpringFamily::Bend,
        }
    }

    /// Rest length of this relation for cell spacing `(dx, dy)`.
    pub fn rest_length(self, dx: Scalar, dy: Scalar) -> Scalar {
        match self {
            Neighbor::Left | Neighbor::Right => dx,
            Neighbor::Down | Neighbor::Up => dy,
            Neighbor::DownLeft | Neighbor::DownRight | Neighbor::UpLeft | Neighbor::UpRight => {
                (dx * dx + dy * dy).sqrt()
            }
            Neighbor::Left2 | Neighbor::Right2 => 2.0 * dx,
            Neighbor::Down2 | Neighbor::Up2 => 2.0 * dy,
        }
    }
}

/// A unique spring between two particles, `a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: ParticleId,
    pub b: ParticleId,
    pub rest_length: Scalar,
    /// Slot of `b` as seen from `a`.
    pub kind: Neighbor,
}

impl Edge {
    #[inline]
    pub fn family(&self) -> SpringFamily {
        self.kind.family()
    }
}

/// Precomputed neighbor table and unique edge list for a grid.
#[derive(Debug, Clone)]
pub struct Topology {
    cols: usize,
    rows: usize,
    links: Vec<[Option<ParticleId>; NEIGHBOR_SLOTS]>,
    edges: Vec<Edge>,
}

impl Topology {
    /// Build topology for a `cols × rows` lattice with spacing `(dx, dy)`.
    ///
    /// Edges are emitted in `(particle index, slot)` order and only where the
    /// neighbor's index is greater, so every spring appears exactly once.
    pub fn build(cols: usize, rows: usize, dx: Scalar, dy: Scalar) -> Self {
        let count = cols * rows;
        let mut links = vec![[None; NEIGHBOR_SLOTS]; count];

        for y in 0..rows {
            for x in 0..cols {
                let slots = &mut links[y * cols + x];
                for n in Neighbor::ALL {
                    let (ox, oy) = n.offset();
                    let nx = x as isize + ox;
                    let ny = y as isize + oy;
                    if nx >= 0 && ny >= 0 && (nx as usize) < cols && (ny as usize) < rows {
                        slots[n.slot()] = Some(ParticleId((ny as usize * cols + nx as usize) as u32));
                    }
                }
            }
        }

        let mut edges = Vec::new();
        for (i, slots) in links.iter().enumerate() {
            for n in Neighbor::ALL {
                if let Some(j) = slots[n.slot()] {
                    if j.index() > i {
                        edges.push(Edge {
                            a: ParticleId(i as u32),
                            b: j,
                            rest_length: n.rest_length(dx, dy),
                            kind: n,
                        });
                    }
                }
            }
        }

        Self {
            cols,
            rows,
            links,
            edges,
        }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Neighbor in slot `n` of particle `id`, `None` at the boundary.
    #[inline]
    pub fn neighbor(&self, id: ParticleId, n: Neighbor) -> Option<ParticleId> {
        self.links[id.index()][n.slot()]
    }

    /// All 12 slots of particle `id`.
    #[inline]
    pub fn neighbors(&self, id: ParticleId) -> &[Option<ParticleId>; NEIGHBOR_SLOTS] {
        &self.links[id.index()]
    }

    /// Unique edges, each spring once.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges of one spring family.
    pub fn family_count(&self, family: SpringFamily) -> usize {
        self.edges.iter().filter(|e| e.family() == family).count()
    }
}
