//! GPU upload layer: device/queue management, the scene uniform binding,
//! the full-screen raytrace pass, and the startup shader-contract check.

pub mod render_context;
pub mod scene_binding;

mod raytrace_pass;

pub use raytrace_pass::{RaytracePass, RAYTRACER_WGSL};
pub use render_context::{RenderContext, RenderContextError};
pub use scene_binding::{SceneBinding, SceneUniforms};

use crate::error::GlintError;
use crate::scene::{MAX_LIGHTS, MAX_PLANES, MAX_SPHERES};

/// Verify that the shader's compiled-in entity maxima match the crate's.
///
/// The WGSL side cannot export its constants through reflection, so the
/// source itself is scanned for `const MAX_*` declarations. Runs once at
/// pipeline creation.
///
/// # Errors
///
/// Returns [`GlintError::ShaderContract`] when a constant is missing from
/// the source or disagrees with the crate's value.
pub fn verify_shader_contract(source: &str) -> Result<(), GlintError> {
    check_constant(source, "MAX_LIGHTS", MAX_LIGHTS)?;
    check_constant(source, "MAX_SPHERES", MAX_SPHERES)?;
    check_constant(source, "MAX_PLANES", MAX_PLANES)?;
    Ok(())
}

fn check_constant(
    source: &str,
    name: &str,
    expected: usize,
) -> Result<(), GlintError> {
    let found = shader_constant(source, name).ok_or_else(|| {
        GlintError::ShaderContract(format!(
            "constant {name} not found in shader source"
        ))
    })?;
    if found != expected {
        return Err(GlintError::ShaderContract(format!(
            "{name} is {found} in the shader but {expected} in the crate"
        )));
    }
    Ok(())
}

/// Extract the value of `const <name>: u32 = <value>u;` from WGSL source.
fn shader_constant(source: &str, name: &str) -> Option<usize> {
    for line in source.lines() {
        let line = line.trim();
        let Some(rest) = line.strip_prefix("const ") else {
            continue;
        };
        let Some((decl, value)) = rest.split_once('=') else {
            continue;
        };
        let decl_name = decl.split(':').next().unwrap_or("").trim();
        if decl_name != name {
            continue;
        }
        let value = value.trim().trim_end_matches(';').trim_end_matches('u');
        return value.parse().ok();
    }
    None
}
