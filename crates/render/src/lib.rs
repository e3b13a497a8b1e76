//! Rendering adapter: turns the kernel grid into instanced draw data.
//!
//! # Invariants
//! - Renderers never mutate game state.
//! - Instances are regenerated from the grid every frame, never diffed.
//! - Backends receive one upload and one instanced draw per frame.

mod instances;
mod renderer;

pub use instances::{
    BLANK_TEXTURE, FRUIT_TEXTURE, Instance, InstanceBuffer, TAIL_TEXTURE, build_instances,
    grid_to_world, head_texture, texture_index,
};
pub use renderer::{DebugTextRenderer, InstanceSink, Renderer, submit};

pub fn crate_info() -> &'static str {
    "snake-render v0.1.0"
}
