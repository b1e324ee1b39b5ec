//! Tile grid the raycaster and wall colliders are built from
//!
//! A level is a square grid of material ids. `0` is open floor, anything
//! else is a wall whose id doubles as a 1-based texture index. The grid
//! never changes once built.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::physics::{Aabb, Collider};

/// Errors raised while building a grid from untrusted data
#[derive(Debug, Error)]
pub enum MapError {
    #[error("invalid level json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("grid size must be at least 1")]
    EmptyGrid,

    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("level uses cell ids up to {max_cell} but lists {textures} textures")]
    TextureCount { max_cell: u32, textures: usize },
}

/// Immutable square tile grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridMap {
    size: usize,
    /// Added to a floored world position to get its grid index
    origin: IVec2,
    /// Row-major, `size * size` entries
    cells: Vec<u32>,
}

impl GridMap {
    /// Build a grid from rows of cell ids, `rows[y][x]`
    pub fn new(size: usize, origin: IVec2, rows: Vec<Vec<u32>>) -> Result<Self, MapError> {
        if size == 0 {
            return Err(MapError::EmptyGrid);
        }
        if rows.len() != size {
            return Err(MapError::RowCount {
                expected: size,
                found: rows.len(),
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(MapError::RowLength {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            size,
            origin,
            cells,
        })
    }

    /// Grid edge length in cells
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn origin(&self) -> IVec2 {
        self.origin
    }

    /// Whether a grid index lies inside `[0, size)` on both axes
    #[inline]
    pub fn contains(&self, index: IVec2) -> bool {
        let size = self.size as i64;
        (0..size).contains(&(index.x as i64)) && (0..size).contains(&(index.y as i64))
    }

    /// Cell id at a grid index, `None` outside the grid
    #[inline]
    pub fn get(&self, index: IVec2) -> Option<u32> {
        if !self.contains(index) {
            return None;
        }
        Some(self.cells[index.y as usize * self.size + index.x as usize])
    }

    /// Whether the cell at `index` is a wall (out of bounds is not)
    #[inline]
    pub fn is_wall(&self, index: IVec2) -> bool {
        self.get(index).is_some_and(|cell| cell != 0)
    }

    /// Grid index of the cell containing a world-space point
    #[inline]
    pub fn world_to_index(&self, point: Vec2) -> IVec2 {
        point.floor().as_ivec2() + self.origin
    }

    /// World-space minimum corner of the cell at a grid index
    #[inline]
    pub fn index_to_world(&self, index: IVec2) -> Vec2 {
        (index - self.origin).as_vec2()
    }

    /// Highest cell id used anywhere in the grid
    pub fn max_cell(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// All wall cells as `(index, cell id)`, row by row
    pub fn walls(&self) -> impl Iterator<Item = (IVec2, u32)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell != 0)
            .map(move |(i, &cell)| (IVec2::new((i % size) as i32, (i / size) as i32), cell))
    }

    /// Unit box collider covering a wall cell in world space
    pub fn wall_collider(&self, index: IVec2) -> Option<Collider> {
        if !self.is_wall(index) {
            return None;
        }
        let min = self.index_to_world(index);
        Some(Collider::Box(Aabb::new(min, min + Vec2::ONE)))
    }
}

/// Level description as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapFile {
    pub size: usize,
    pub origin: [u32; 2],
    pub map: Vec<Vec<u32>>,
    /// Texture names, one per wall id starting at id 1
    pub textures: Vec<String>,
}

impl MapFile {
    pub fn from_json(json: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the level and build its grid.
    ///
    /// Every wall id must be backed by a texture: the largest id used has to
    /// equal the texture count.
    pub fn to_grid(&self) -> Result<GridMap, MapError> {
        let origin = IVec2::new(self.origin[0] as i32, self.origin[1] as i32);
        let grid = GridMap::new(self.size, origin, self.map.clone())?;

        let max_cell = grid.max_cell();
        if max_cell as usize != self.textures.len() {
            log::warn!(
                "Rejecting level: max cell {} vs {} textures",
                max_cell,
                self.textures.len()
            );
            return Err(MapError::TextureCount {
                max_cell,
                textures: self.textures.len(),
            });
        }

        log::info!(
            "Loaded {}x{} level with {} walls",
            grid.size(),
            grid.size(),
            grid.walls().count()
        );
        Ok(grid)
    }
}
