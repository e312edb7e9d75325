//! Compiles the mesh shader crate to SPIR-V at build time. The host pipeline
//! setup loads the module from [`MESH_SHADER_SPV`] and binds `vert_main` /
//! `frag_main` as its two stage entry points.

/// Filesystem path of the compiled SPIR-V module.
pub const MESH_SHADER_SPV: &str = env!("mesh_shader.spv");
