//! Block picking by ray marching.
//!
//! Rays start at the eye and advance in fixed steps along the view direction given as
//! pitch and yaw in degrees. With zero rotation the view looks along negative Z, positive
//! yaw turns towards positive X and positive pitch looks down. The first sampled voxel
//! that is not air is the picked block.

use cgmath::{InnerSpace, MetricSpace, Point3, Vector3};

use super::block::{block_type::BlockType, BlockId};
use super::chunk_manager::ChunkManager;

/// A ray marched from a fixed start point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    start: Point3<f32>,
    end: Point3<f32>,
    direction: Vector3<f32>,
}

impl Ray {
    /// Creates a ray at `start` looking along `rotation` (pitch, yaw, roll in degrees).
    pub fn new(start: Point3<f32>, rotation: Vector3<f32>) -> Self {
        Self {
            start,
            end: start,
            direction: Self::direction_from_rotation(rotation),
        }
    }

    /// Unit view direction for a pitch/yaw rotation in degrees. Roll is ignored.
    pub fn direction_from_rotation(rotation: Vector3<f32>) -> Vector3<f32> {
        let yaw = (rotation.y + 90.0).to_radians();
        let pitch = rotation.x.to_radians();
        -Vector3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
    }

    /// Advances the end of the ray by `scale` along its direction.
    pub fn step(&mut self, scale: f32) {
        self.end += self.direction * scale;
    }

    pub fn start(&self) -> Point3<f32> {
        self.start
    }

    pub fn end(&self) -> Point3<f32> {
        self.end
    }

    pub fn direction(&self) -> Vector3<f32> {
        self.direction
    }

    /// Distance between start and end.
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// The first non-air block along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Global coordinates of the hit voxel
    pub block: Point3<i32>,
    /// Id of the hit block
    pub block_id: BlockId,
    /// Ray sample that landed inside the block
    pub position: Point3<f32>,
    /// Unit direction the ray travelled
    pub direction: Vector3<f32>,
}

/// Voxel containing a world position.
pub fn voxel_at(position: Point3<f32>) -> Point3<i32> {
    Point3::new(
        position.x.floor() as i32,
        position.y.floor() as i32,
        position.z.floor() as i32,
    )
}

/// Marches from `eye` until a non-air block is found or `reach` is exceeded.
///
/// Samples outside the world are skipped.
pub fn cast_ray(
    world: &ChunkManager,
    eye: Point3<f32>,
    rotation: Vector3<f32>,
    reach: f32,
    step: f32,
) -> Option<RayHit> {
    if step <= 0.0 {
        return None;
    }

    let mut ray = Ray::new(eye, rotation);
    while ray.length() < reach {
        let block = voxel_at(ray.end());
        if let Some(block_id) = world.get_block_global(block.x, block.y, block.z) {
            if block_id != BlockType::AIR.id() {
                return Some(RayHit {
                    block,
                    block_id,
                    position: ray.end(),
                    direction: ray.direction().normalize(),
                });
            }
        }
        ray.step(step);
    }

    None
}

/// The air voxel in front of a hit, where a new block would be placed.
///
/// Walks from the hit back towards the eye. Returns `None` if the walk leaves the world
/// before reaching air.
pub fn placement_target(world: &ChunkManager, hit: &RayHit, step: f32) -> Option<Point3<i32>> {
    if step <= 0.0 {
        return None;
    }

    let mut position = hit.position;
    // A ray never travels further than the world is wide.
    let extent = world.world_extent();
    let max_steps = ((extent.x + extent.y + extent.z) as f32 / step).ceil() as usize + 1;

    for _ in 0..max_steps {
        let voxel = voxel_at(position);
        match world.get_block_global(voxel.x, voxel.y, voxel.z) {
            Some(id) if id == BlockType::AIR.id() => return Some(voxel),
            Some(_) => position -= hit.direction * step,
            None => return None,
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vector3<f32>, b: Vector3<f32>) {
        assert!((a - b).magnitude() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn rotation_to_direction() {
        assert_close(Ray::direction_from_rotation(Vector3::new(0.0, 0.0, 0.0)), Vector3::new(0.0, 0.0, -1.0));
        assert_close(Ray::direction_from_rotation(Vector3::new(0.0, 90.0, 0.0)), Vector3::new(1.0, 0.0, 0.0));
        assert_close(Ray::direction_from_rotation(Vector3::new(90.0, 0.0, 0.0)), Vector3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn steps_accumulate_length() {
        let mut ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 0.0, 0.0));
        for _ in 0..10 {
            ray.step(0.5);
        }
        assert!((ray.length() - 5.0).abs() < 1e-4);
        assert_eq!(voxel_at(Point3::new(-0.5, 0.5, 1.99)), Point3::new(-1, 0, 1));
    }
}
