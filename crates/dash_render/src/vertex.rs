#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PresentVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

impl PresentVertex {
    /// Two triangles covering clip space, with the canvas' top-left at uv (0, 0).
    pub const FULLSCREEN_QUAD: [PresentVertex; 6] = [
        PresentVertex {
            position: [-1.0, 1.0],
            tex_coords: [0.0, 0.0],
        },
        PresentVertex {
            position: [-1.0, -1.0],
            tex_coords: [0.0, 1.0],
        },
        PresentVertex {
            position: [1.0, -1.0],
            tex_coords: [1.0, 1.0],
        },
        PresentVertex {
            position: [-1.0, 1.0],
            tex_coords: [0.0, 0.0],
        },
        PresentVertex {
            position: [1.0, -1.0],
            tex_coords: [1.0, 1.0],
        },
        PresentVertex {
            position: [1.0, 1.0],
            tex_coords: [1.0, 0.0],
        },
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PresentVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position
                wgpu::VertexAttribute {
                    offset: std::mem::offset_of!(PresentVertex, position) as wgpu::BufferAddress,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // tex_coords
                wgpu::VertexAttribute {
                    offset: std::mem::offset_of!(PresentVertex, tex_coords)
                        as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}
