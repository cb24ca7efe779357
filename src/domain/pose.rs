use glam::{Mat4, Quat, Vec3};

use crate::core::{SessionError, SessionResult};

/// Floats per pose matrix in host buffers.
pub const POSE_MATRIX_LEN: usize = 16;

/// Position, orientation and scale of an object in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub orientation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self { position, ..Self::IDENTITY }
    }

    /// Column-major matrix, the layout WebXR and three.js use.
    pub fn to_cols_array(&self) -> [f32; POSE_MATRIX_LEN] {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation, self.position)
            .to_cols_array()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Split a column-major 4x4 pose matrix into position, orientation and scale.
pub fn decompose_pose_matrix(cols: &[f32; POSE_MATRIX_LEN]) -> SessionResult<Transform> {
    if cols.iter().any(|v| !v.is_finite()) {
        return Err(SessionError::InvalidPose);
    }
    let matrix = Mat4::from_cols_array(cols);
    if matrix.determinant().abs() <= f32::EPSILON {
        return Err(SessionError::InvalidPose);
    }
    let (scale, orientation, position) = matrix.to_scale_rotation_translation();
    Ok(Transform {
        position,
        orientation: orientation.normalize(),
        scale,
    })
}

/// Decompose a flat buffer of consecutive pose matrices, preserving order.
///
/// The first matrix is the one that matters and must be valid. Later ones are
/// lower-priority candidates: a bad one is logged and skipped.
pub fn decompose_pose_buffer(buffer: &[f32]) -> SessionResult<Vec<Transform>> {
    if buffer.len() % POSE_MATRIX_LEN != 0 {
        return Err(SessionError::MalformedHitBuffer(buffer.len()));
    }
    let mut poses = Vec::with_capacity(buffer.len() / POSE_MATRIX_LEN);
    for (index, chunk) in buffer.chunks_exact(POSE_MATRIX_LEN).enumerate() {
        let mut cols = [0.0f32; POSE_MATRIX_LEN];
        cols.copy_from_slice(chunk);
        match decompose_pose_matrix(&cols) {
            Ok(pose) => poses.push(pose),
            Err(e) if index == 0 => return Err(e),
            Err(e) => log::warn!("skipping hit candidate {index}: {e}"),
        }
    }
    Ok(poses)
}
