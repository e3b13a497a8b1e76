/// WGSL shader for instanced sprite quads sampled from a 4x4 atlas.
///
/// Texture index N selects atlas column N / 4 and row N % 4, rows counted
/// from the bottom of the image. A negative index draws flat white.
pub const SPRITE_SHADER: &str = r#"
struct Uniforms {
    proj: mat4x4<f32>,
    global_scale: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

@group(0) @binding(1)
var atlas: texture_2d<f32>;

@group(0) @binding(2)
var atlas_sampler: sampler;

const ATLAS_CELLS: i32 = 4;

struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) uv: vec2<f32>,
};

struct InstanceInput {
    @location(2) offset: vec2<f32>,
    @location(3) scale: vec2<f32>,
    @location(4) texture_index: i32,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
    @location(1) @interpolate(flat) texture_index: i32,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let world = uniforms.global_scale * instance.scale * (vertex.position + instance.offset);

    var out: VertexOutput;
    out.clip_position = uniforms.proj * vec4<f32>(world, 0.0, 1.0);
    out.uv = vertex.uv;
    out.texture_index = instance.texture_index;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let cells = f32(ATLAS_CELLS);
    let column = f32(in.texture_index / ATLAS_CELLS);
    let row = f32(in.texture_index % ATLAS_CELLS);
    let atlas_uv = vec2<f32>(
        (in.uv.x + column) / cells,
        1.0 - (in.uv.y + row) / cells,
    );
    // Sample unconditionally: textureSample must stay in uniform control flow.
    let color = textureSample(atlas, atlas_sampler, atlas_uv);
    return select(color, vec4<f32>(1.0, 1.0, 1.0, 1.0), in.texture_index < 0);
}
"#;
