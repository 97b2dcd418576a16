//! GPU residency of chunk meshes.
//!
//! The [`MeshManager`] mirrors every chunk mesh into a vertex and index buffer pair. It
//! compares each chunk's mesh revision with the revision it last uploaded, so a sync after
//! a single block edit only touches the few chunks that were remeshed.
//!
//! Meshes stay in chunk-local coordinates. The world origin of every chunk lives in one
//! storage buffer indexed by chunk handle, and each draw passes its handle as the first
//! instance so the vertex shader can offset the mesh.

use std::collections::HashMap;
use std::ops::Range;

use cgmath::Point3;
use log::{debug, trace};
use wgpu::util::DeviceExt;
use wgpu::{BindGroup, BindGroupLayout, Buffer, Device, Queue, RenderPass, RenderPipeline, TextureFormat};

use crate::engine_state::{
    rendering::{texture::AtlasTexture, Vertex},
    voxels::{
        chunk::{Chunk, ChunkId},
        chunk_manager::ChunkManager,
    },
};

/// WGSL source of the chunk pipeline.
pub const CHUNK_SHADER: &str = include_str!("../../../../assets/shaders/chunk.wgsl");

/// World-space origin of a chunk as stored in the origin buffer.
///
/// Padded to 16 bytes to match the `array<vec4<i32>>` stride in the shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ChunkOrigin {
    pub position: [i32; 4],
}

impl ChunkOrigin {
    pub fn of(chunk: &Chunk) -> Self {
        let position = chunk.position();
        Self {
            position: [position.x, position.y, position.z, 0],
        }
    }

    pub fn point(&self) -> Point3<i32> {
        Point3::new(self.position[0], self.position[1], self.position[2])
    }
}

/// Origins of every chunk in arena order, the layout of the origin buffer.
pub fn chunk_origins(chunk_manager: &ChunkManager) -> Vec<ChunkOrigin> {
    chunk_manager.chunks().iter().map(ChunkOrigin::of).collect()
}

/// Instance range a chunk is drawn with. The instance index selects its origin.
pub fn instance_range(id: ChunkId) -> Range<u32> {
    let slot = id.0 as u32;
    slot..slot + 1
}

/// Buffers holding one chunk's mesh on the GPU.
pub struct ChunkBuffers {
    vertex_buffer: Buffer,
    index_buffer: Buffer,
    index_count: u32,
    revision: u64,
}

struct OriginBuffer {
    #[allow(dead_code)]
    buffer: Buffer,
    bind_group: BindGroup,
    chunk_count: usize,
}

/// Keeps a GPU copy of every chunk mesh and of the chunk origins.
pub struct MeshManager {
    buffers: HashMap<ChunkId, ChunkBuffers>,
    origin_layout: BindGroupLayout,
    origins: Option<OriginBuffer>,
}

impl MeshManager {
    pub fn new(device: &Device) -> Self {
        let origin_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Storage { read_only: true },
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("chunk_origin_bind_group_layout"),
        });

        Self {
            buffers: HashMap::new(),
            origin_layout,
            origins: None,
        }
    }

    /// Chunks whose mesh revision differs from the last uploaded one.
    pub fn stale_chunks(&self, chunk_manager: &ChunkManager) -> Vec<ChunkId> {
        let uploaded: HashMap<ChunkId, u64> = self
            .buffers
            .iter()
            .map(|(id, buffers)| (*id, buffers.revision))
            .collect();
        stale_chunks(&uploaded, chunk_manager)
    }

    /// Uploads the chunk origins and every mesh that changed since the previous sync.
    ///
    /// Returns the number of chunk meshes written.
    pub fn sync(&mut self, device: &Device, queue: &Queue, chunk_manager: &ChunkManager) -> usize {
        self.sync_origins(device, chunk_manager);

        let stale = self.stale_chunks(chunk_manager);
        for id in &stale {
            if let Some(chunk) = chunk_manager.chunk(*id) {
                self.upload(device, queue, *id, chunk);
            }
        }
        if !stale.is_empty() {
            debug!("Uploaded {} chunk meshes", stale.len());
        }
        stale.len()
    }

    /// Chunks never move, so the origin buffer is only rebuilt when the grid changes.
    fn sync_origins(&mut self, device: &Device, chunk_manager: &ChunkManager) {
        let chunk_count = chunk_manager.chunks().len();
        if chunk_count == 0 || self.origins.as_ref().map(|origins| origins.chunk_count) == Some(chunk_count) {
            return;
        }

        let origins = chunk_origins(chunk_manager);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Chunk Origin Buffer"),
            contents: bytemuck::cast_slice(&origins),
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &self.origin_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("chunk_origin_bind_group"),
        });

        debug!("Uploaded origins of {} chunks", chunk_count);
        self.origins = Some(OriginBuffer {
            buffer,
            bind_group,
            chunk_count,
        });
    }

    fn upload(&mut self, device: &Device, queue: &Queue, id: ChunkId, chunk: &Chunk) {
        let mesh = chunk.mesh();
        let vertices = mesh.vertices();
        let vertex_bytes: &[u8] = bytemuck::cast_slice(&vertices);
        let index_bytes: &[u8] = bytemuck::cast_slice(&mesh.indices);

        if let Some(buffers) = self.buffers.get_mut(&id) {
            if buffers.vertex_buffer.size() >= vertex_bytes.len() as u64
                && buffers.index_buffer.size() >= index_bytes.len() as u64
            {
                trace!("Rewriting mesh buffers of chunk {:?} in place", id);
                queue.write_buffer(&buffers.vertex_buffer, 0, vertex_bytes);
                queue.write_buffer(&buffers.index_buffer, 0, index_bytes);
                buffers.index_count = mesh.index_count() as u32;
                buffers.revision = chunk.mesh_revision();
                return;
            }
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("Chunk Vertex Buffer {:?}", chunk.position())),
            contents: vertex_bytes,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("Chunk Index Buffer {:?}", chunk.position())),
            contents: index_bytes,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        });

        self.buffers.insert(
            id,
            ChunkBuffers {
                vertex_buffer,
                index_buffer,
                index_count: mesh.index_count() as u32,
                revision: chunk.mesh_revision(),
            },
        );
    }

    /// Creates the chunk render pipeline.
    ///
    /// # Arguments
    /// * `format` - Color target format of the surface
    /// * `atlas` - Atlas texture bound at group 0
    /// * `camera_layout` - Layout of the camera uniform the caller binds at group 2
    /// * `depth_stencil` - Optional depth stencil state
    pub fn create_pipeline(
        &self,
        device: &Device,
        format: TextureFormat,
        atlas: &AtlasTexture,
        camera_layout: &BindGroupLayout,
        depth_stencil: Option<wgpu::DepthStencilState>,
    ) -> RenderPipeline {
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Chunk Render Pipeline Layout"),
            bind_group_layouts: &[&atlas.bind_group_layout, &self.origin_layout, camera_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Chunk Shader"),
            source: wgpu::ShaderSource::Wgsl(CHUNK_SHADER.into()),
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Chunk Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil,
            multisample: Default::default(),
            multiview: None,
            cache: None,
        })
    }

    /// Issues one indexed draw per non-empty chunk.
    ///
    /// The caller sets the pipeline from [`MeshManager::create_pipeline`] and binds the
    /// camera at group 2. The atlas is bound at group 0 and the chunk origins at group 1.
    pub fn draw(&self, render_pass: &mut RenderPass<'_>, atlas: &AtlasTexture) {
        let Some(origins) = &self.origins else {
            return;
        };
        render_pass.set_bind_group(0, &atlas.bind_group, &[]);
        render_pass.set_bind_group(1, &origins.bind_group, &[]);

        for (id, buffers) in &self.buffers {
            if buffers.index_count == 0 {
                continue;
            }
            render_pass.set_vertex_buffer(0, buffers.vertex_buffer.slice(..));
            render_pass.set_index_buffer(buffers.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..buffers.index_count, 0, instance_range(*id));
        }
    }

    /// Number of chunks with GPU buffers.
    pub fn resident_chunks(&self) -> usize {
        self.buffers.len()
    }

    /// Vertex layout of the chunk buffers.
    pub fn vertex_layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        Vertex::desc()
    }
}

/// Chunks whose current mesh revision is not the one recorded in `uploaded`.
///
/// Chunks that were never meshed (revision `0`) are skipped.
pub fn stale_chunks(uploaded: &HashMap<ChunkId, u64>, chunk_manager: &ChunkManager) -> Vec<ChunkId> {
    chunk_manager
        .chunks()
        .iter()
        .enumerate()
        .filter(|(index, chunk)| {
            chunk.mesh_revision() > 0
                && uploaded.get(&ChunkId(*index)) != Some(&chunk.mesh_revision())
        })
        .map(|(index, _)| ChunkId(index))
        .collect()
}
