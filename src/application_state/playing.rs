//! # Playing State
//!
//! The in-world state. It owns the chunk manager, generates the world on setup and each
//! frame picks the block under the crosshair, breaks it while the left button is held and
//! places the selected hotbar block on right click.
//!
//! Camera movement lives outside this state: the host reports the eye position and view
//! rotation through [`Playing::set_view`] before each update.

use cgmath::{Point3, Vector3};
use log::{debug, info, warn};
use winit::{
    event::{MouseButton, WindowEvent},
    keyboard::KeyCode,
};

use crate::core::{EngineConfig, TerrainMode};
use crate::engine_state::voxels::{
    block::{
        block_breaker::{BlockBreaker, BreakProgress},
        block_type::BlockType,
    },
    chunk_manager::ChunkManager,
    raycast::{cast_ray, placement_target, RayHit},
};

use super::{input_state::ProcessedInputState, State};

/// The in-world application state.
pub struct Playing {
    config: EngineConfig,
    world: ChunkManager,
    eye: Point3<f32>,
    rotation: Vector3<f32>,
    hotbar: Vec<BlockType>,
    hotbar_selection: usize,
    selection: Option<RayHit>,
    breaker: BlockBreaker,
    break_progress: BreakProgress,
    wireframe: bool,
    creative: bool,
    paused: bool,
}

impl Playing {
    /// Creates the state and its chunk manager. The world is generated in [`State::setup`].
    pub fn new(config: EngineConfig) -> Self {
        let world = ChunkManager::from_config(&config);
        let hotbar = parse_hotbar(&config.hotbar);

        // Start above the middle of the world looking straight ahead.
        let extent = world.chunk_size();
        let [wx, wy, wz] = config.world_size;
        let eye = Point3::new(
            (wx as usize * extent.x) as f32 / 2.0,
            (wy as usize * extent.y) as f32,
            (wz as usize * extent.z) as f32 / 2.0,
        );

        Self {
            config,
            world,
            eye,
            rotation: Vector3::new(0.0, 0.0, 0.0),
            hotbar,
            hotbar_selection: 0,
            selection: None,
            breaker: BlockBreaker::new(),
            break_progress: BreakProgress::Idle,
            wireframe: false,
            creative: false,
            paused: false,
        }
    }

    /// Sets the eye position and the pitch/yaw/roll view rotation in degrees.
    pub fn set_view(&mut self, eye: Point3<f32>, rotation: Vector3<f32>) {
        self.eye = eye;
        self.rotation = rotation;
    }

    pub fn eye(&self) -> Point3<f32> {
        self.eye
    }

    pub fn world(&self) -> &ChunkManager {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut ChunkManager {
        &mut self.world
    }

    /// Block under the crosshair after the last update.
    pub fn selection(&self) -> Option<RayHit> {
        self.selection
    }

    pub fn break_progress(&self) -> BreakProgress {
        self.break_progress
    }

    pub fn hotbar(&self) -> &[BlockType] {
        &self.hotbar
    }

    pub fn hotbar_selection(&self) -> usize {
        self.hotbar_selection
    }

    /// Block placed on right click.
    pub fn selected_block(&self) -> BlockType {
        self.hotbar
            .get(self.hotbar_selection)
            .copied()
            .unwrap_or(BlockType::DIRT)
    }

    pub fn is_wireframe(&self) -> bool {
        self.wireframe
    }

    pub fn is_creative(&self) -> bool {
        self.creative
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Moves the hotbar selection by `steps` slots, wrapping at both ends.
    pub fn scroll_hotbar(&mut self, steps: i32) {
        let slots = self.hotbar.len() as i32;
        if slots == 0 {
            return;
        }
        self.hotbar_selection = (self.hotbar_selection as i32 + steps).rem_euclid(slots) as usize;
        debug!("Selected hotbar slot {} ({})", self.hotbar_selection, self.selected_block());
    }

    /// Places the selected block in front of the current selection.
    pub fn place_selected(&mut self) -> bool {
        let Some(hit) = self.selection else {
            return false;
        };
        let Some(target) = placement_target(&self.world, &hit, self.config.picking.step) else {
            return false;
        };
        self.world
            .place_block(target.x, target.y, target.z, self.selected_block().id())
    }

    fn pick(&mut self) {
        let picking = self.config.picking;
        self.selection = cast_ray(&self.world, self.eye, self.rotation, picking.reach, picking.step);
    }
}

impl State for Playing {
    fn name(&self) -> &str {
        "playing"
    }

    fn setup(&mut self) {
        let [x, y, z] = self.config.world_size;
        self.world.generate_chunks(x as usize, y as usize, z as usize);

        let terrain = self.config.terrain.clone();
        match terrain.mode {
            TerrainMode::Noise => self
                .world
                .generate_terrain(terrain.min_amplitude, terrain.max_amplitude),
            TerrainMode::Flat => self.world.generate_flat_terrain(terrain.flat_height),
        }

        let (vertices, indices) = self.world.mesh_totals();
        info!(
            "World ready: {} chunks, {} vertices, {} indices",
            self.world.chunks().len(),
            vertices,
            indices
        );
    }

    fn event(&mut self, event: &WindowEvent) {
        if let WindowEvent::Focused(false) = event {
            self.breaker.reset();
            self.break_progress = BreakProgress::Idle;
        }
    }

    fn update(&mut self, input: &ProcessedInputState, elapsed: f32) {
        if self.paused {
            return;
        }

        if input.key(KeyCode::Tab).is_just_pressed() {
            self.wireframe = !self.wireframe;
        }
        if input.key(KeyCode::KeyC).is_just_pressed() {
            self.creative = !self.creative;
            info!(
                "{} creative mode",
                if self.creative { "Enabled" } else { "Disabled" }
            );
        }

        // Scrolling up moves the selection left.
        match input.scroll_steps() {
            0 => {}
            steps => self.scroll_hotbar(-steps),
        }

        self.pick();

        if input.mouse_button(MouseButton::Right).is_just_pressed() && self.place_selected() {
            // The placed block may now be under the crosshair.
            self.pick();
        }

        let target = self.selection.map(|hit| (hit.block, hit.block_id));
        let held = input.mouse_button(MouseButton::Left).is_active();
        self.break_progress = self.breaker.update(target, held, elapsed);

        if let BreakProgress::Broken { block, .. } = self.break_progress {
            self.world.break_block(block.x, block.y, block.z);
            self.pick();
        }
    }

    fn pause(&mut self) {
        self.paused = true;
        self.breaker.reset();
    }

    fn resume(&mut self) {
        self.paused = false;
    }
}

/// Resolves configured hotbar names, skipping unknown ones.
fn parse_hotbar(names: &[String]) -> Vec<BlockType> {
    let hotbar: Vec<BlockType> = names
        .iter()
        .filter_map(|name| {
            let block = BlockType::from_name(name).filter(|block| !block.is_air());
            if block.is_none() {
                warn!("Ignored unknown hotbar block '{}'", name);
            }
            block
        })
        .collect();

    if hotbar.is_empty() {
        return parse_hotbar(&EngineConfig::default().hotbar);
    }
    hotbar
}
