use glam::Vec3;

use crate::types::Vertex;

/// Edge length of the reference box
const BOX_SIZE: f32 = 2.0;
/// Tan body color for the box, lit by the shader
const BOX_COLOR: [f32; 3] = [0.85, 0.65, 0.35];

/// Length of each gizmo axis line
const AXIS_LENGTH: f32 = 5.0;
/// Size of the arrowhead ticks at each axis tip
const AXIS_TICK: f32 = 0.3;

const AXIS_X_COLOR: [f32; 3] = [0.9, 0.15, 0.15];
const AXIS_Y_COLOR: [f32; 3] = [0.15, 0.8, 0.15];
const AXIS_Z_COLOR: [f32; 3] = [0.2, 0.35, 0.95];

/// CPU-side mesh ready for upload
#[derive(Debug, Clone)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Reference box: a cube centered on its transform with per-face normals so
/// the directional light reads each face distinctly
pub fn reference_box() -> MeshData {
    let h = BOX_SIZE * 0.5;
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    // (normal, four corners counter-clockwise seen from outside)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [0.0, 0.0, 1.0],
            [[-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h]],
        ),
        (
            [0.0, 0.0, -1.0],
            [[h, -h, -h], [-h, -h, -h], [-h, h, -h], [h, h, -h]],
        ),
        (
            [1.0, 0.0, 0.0],
            [[h, -h, h], [h, -h, -h], [h, h, -h], [h, h, h]],
        ),
        (
            [-1.0, 0.0, 0.0],
            [[-h, -h, -h], [-h, -h, h], [-h, h, h], [-h, h, -h]],
        ),
        (
            [0.0, 1.0, 0.0],
            [[-h, h, h], [h, h, h], [h, h, -h], [-h, h, -h]],
        ),
        (
            [0.0, -1.0, 0.0],
            [[-h, -h, -h], [h, -h, -h], [h, -h, h], [-h, -h, h]],
        ),
    ];

    for (normal, corners) in faces {
        let base = vertices.len() as u32;
        for corner in corners {
            vertices.push(Vertex::new(corner, normal, BOX_COLOR));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

/// Axis gizmo: three colored lines out of the origin (X red, Y green,
/// Z blue) with arrowhead ticks, drawn as a line list
pub fn axis_gizmo() -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let axes = [
        (Vec3::X, Vec3::Y, AXIS_X_COLOR),
        (Vec3::Y, Vec3::Z, AXIS_Y_COLOR),
        (Vec3::Z, Vec3::X, AXIS_Z_COLOR),
    ];

    for (dir, side, color) in axes {
        let tip = dir * AXIS_LENGTH;
        let back = dir * (AXIS_LENGTH - AXIS_TICK);
        let spread = side * AXIS_TICK;

        push_line(&mut vertices, &mut indices, Vec3::ZERO, tip, color);
        push_line(&mut vertices, &mut indices, tip, back + spread, color);
        push_line(&mut vertices, &mut indices, tip, back - spread, color);
    }

    MeshData { vertices, indices }
}

fn push_line(
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u32>,
    from: Vec3,
    to: Vec3,
    color: [f32; 3],
) {
    let base = vertices.len() as u32;
    // Lines are unlit; the normal slot is unused
    vertices.push(Vertex::new(from.to_array(), [0.0; 3], color));
    vertices.push(Vertex::new(to.to_array(), [0.0; 3], color));
    indices.extend_from_slice(&[base, base + 1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_has_six_faces_of_two_triangles() {
        let mesh = reference_box();

        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn box_is_centered_on_origin() {
        let mesh = reference_box();

        for vertex in &mesh.vertices {
            for coord in vertex.position {
                assert_eq!(coord.abs(), BOX_SIZE * 0.5);
            }
        }
    }

    #[test]
    fn box_normals_are_axis_aligned_unit_vectors() {
        let mesh = reference_box();

        for vertex in &mesh.vertices {
            let n = Vec3::from_array(vertex.normal);
            assert!((n.length() - 1.0).abs() < 1e-6);
            assert_eq!(n.abs().max_element(), 1.0);
        }
    }

    #[test]
    fn gizmo_is_a_line_list_reaching_axis_length() {
        let mesh = axis_gizmo();

        // Three lines per axis: shaft plus two arrowhead ticks
        assert_eq!(mesh.index_count() % 2, 0);
        assert_eq!(mesh.index_count(), 18);

        let max_reach = mesh
            .vertices
            .iter()
            .map(|v| Vec3::from_array(v.position).length())
            .fold(0.0_f32, f32::max);
        assert!((max_reach - AXIS_LENGTH).abs() < 1e-5);
    }
}
