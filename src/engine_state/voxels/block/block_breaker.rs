//! # Block Breaker
//!
//! Tracks how long the break button has been held on the same block and decides when
//! that block is destroyed. The breaker only does the bookkeeping; removing the block
//! from the world is left to the caller so the breaker stays independent of storage.

use cgmath::Point3;

use super::{break_time, BlockId};

/// Number of crack overlay stages shown while a block is being broken.
pub const CRACK_STAGES: u32 = 3;

/// Held time after which the first crack stage becomes visible.
const FIRST_CRACK_DELAY: f32 = 0.25;

/// Outcome of a single breaker update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BreakProgress {
    /// Nothing is being broken.
    Idle,
    /// A block is being broken but is not finished yet.
    Breaking {
        /// Global position of the targeted block
        block: Point3<i32>,
        /// Held time divided by the block's break time, in `[0, 1)`
        progress: f32,
        /// Crack overlay to draw, if any
        crack_stage: Option<u32>,
    },
    /// The targeted block has been held long enough and should be removed this frame.
    Broken {
        /// Global position of the broken block
        block: Point3<i32>,
        /// Id of the block that was broken
        block_id: BlockId,
    },
}

/// Accumulates break time for the currently targeted block.
#[derive(Debug, Default)]
pub struct BlockBreaker {
    target: Option<Point3<i32>>,
    held_time: f32,
}

impl BlockBreaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the breaker by one frame.
    ///
    /// # Arguments
    /// * `target` - The block under the cursor and its id, if the pick ray hit one
    /// * `held` - Whether the break button is down this frame
    /// * `elapsed` - Seconds since the previous frame
    ///
    /// Switching to a different block or releasing the button restarts the timer.
    /// Blocks with a break time of zero cannot be broken.
    pub fn update(
        &mut self,
        target: Option<(Point3<i32>, BlockId)>,
        held: bool,
        elapsed: f32,
    ) -> BreakProgress {
        let (block, block_id) = match (held, target) {
            (true, Some(target)) => target,
            _ => {
                self.reset();
                return BreakProgress::Idle;
            }
        };

        if self.target != Some(block) {
            self.target = Some(block);
            self.held_time = 0.0;
        }

        let required = break_time(block_id);
        if required <= 0.0 {
            self.held_time = 0.0;
            return BreakProgress::Idle;
        }

        self.held_time += elapsed;

        if self.held_time >= required {
            self.reset();
            return BreakProgress::Broken { block, block_id };
        }

        BreakProgress::Breaking {
            block,
            progress: self.held_time / required,
            crack_stage: Self::crack_stage(self.held_time, required),
        }
    }

    /// Clears the current target and timer.
    pub fn reset(&mut self) {
        self.target = None;
        self.held_time = 0.0;
    }

    /// Seconds the current target has been held so far.
    pub fn held_time(&self) -> f32 {
        self.held_time
    }

    /// Atlas cell of a crack overlay stage.
    pub fn crack_texture_cell(stage: u32) -> (u32, u32) {
        (stage.min(CRACK_STAGES - 1), 7)
    }

    fn crack_stage(held: f32, required: f32) -> Option<u32> {
        if held >= required / 1.1 {
            Some(2)
        } else if held >= required / 2.0 {
            Some(1)
        } else if held >= FIRST_CRACK_DELAY {
            Some(0)
        } else {
            None
        }
    }
}
