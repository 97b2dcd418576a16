use crate::engine_state::voxels::block::block_side::BlockSide;

/// Corner positions of one face of a unit cube.
///
/// Corners are listed in the winding the index pattern expects, relative to the voxel's
/// minimum corner. Every block shares the same six faces; meshing only translates them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// The four corners of the face
    pub corners: [[f32; 3]; 4],
}

/// Index pattern forming the two triangles of a face, relative to its first vertex.
pub const FACE_INDICES: [u32; 6] = [0, 1, 3, 3, 1, 2];

/// Unit UV corners in the same order as [`Face::corners`]. The atlas maps them onto a cell.
pub const FACE_UV_TEMPLATE: [[f32; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];

/// Faces indexed by `BlockSide as usize`.
static CUBE_FACES: [Face; 6] = [
    // FRONT
    Face {
        corners: [[0.0, 1.0, 1.0], [0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0]],
    },
    // BACK
    Face {
        corners: [[1.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    },
    // BOTTOM
    Face {
        corners: [[0.0, 0.0, 1.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0]],
    },
    // TOP
    Face {
        corners: [[0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
    },
    // LEFT
    Face {
        corners: [[0.0, 1.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0]],
    },
    // RIGHT
    Face {
        corners: [[1.0, 1.0, 1.0], [1.0, 0.0, 1.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]],
    },
];

impl Face {
    /// Returns the cube face for the given block side.
    pub fn of(side: BlockSide) -> &'static Face {
        &CUBE_FACES[side as usize]
    }

    /// Corners of this face translated to the voxel at `(x, y, z)`.
    pub fn translated(&self, x: usize, y: usize, z: usize) -> [[f32; 3]; 4] {
        self.corners
            .map(|[cx, cy, cz]| [cx + x as f32, cy + y as f32, cz + z as f32])
    }

    /// Generates the index data for a face whose first vertex is `base`.
    pub fn indices(base: u32) -> [u32; 6] {
        FACE_INDICES.map(|index| base + index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_corner_lies_on_the_facing_plane() {
        for side in BlockSide::all() {
            let offset = side.offset();
            let normal = [offset.x, offset.y, offset.z];
            let axis = normal.iter().position(|n| *n != 0).unwrap();
            let plane = if normal[axis] > 0 { 1.0 } else { 0.0 };
            for corner in Face::of(side).corners {
                assert_eq!(corner[axis], plane, "{:?}", side);
            }
        }
    }

    #[test]
    fn indices_are_offset_by_base() {
        assert_eq!(Face::indices(8), [8, 9, 11, 11, 9, 10]);
    }
}
