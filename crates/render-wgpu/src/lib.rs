//! wgpu render backend for the snake board.
//!
//! Draws every generated [`snake_render::Instance`] as a textured quad in a
//! single instanced draw, sampling a 4x4 sprite atlas.
//!
//! # Invariants
//! - Renderer never mutates game state.
//! - The instance buffer is fully rewritten before each draw.
//! - Projection is uploaded on resize, independent of the game step rate.

mod atlas;
mod error;
mod gpu;
mod shaders;

pub use atlas::{ATLAS_CELLS, DEFAULT_CELL_PX, builtin_atlas, cell_origin, load_atlas};
pub use error::RenderError;
pub use gpu::{MAX_INSTANCES, WgpuFrame, WgpuRenderer};
pub use shaders::SPRITE_SHADER;
