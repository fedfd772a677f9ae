//! Static collision geometry.
//!
//! The environment the ball can hit is a triangle mesh built once at load
//! time by the asset pipeline and immutable afterward. Vertices carry a
//! position and a normal; each triangle stores three vertex indices plus a
//! pre-averaged face normal so the per-tick collision scan never recomputes
//! it.
//!
//! Buffers have explicit capacities with checked append; the triangle and
//! vertex counts bound all collision-scan iteration.

use crate::types::Vec3;

/// Default vertex buffer capacity.
pub const MAX_VERTICES: usize = 10_000_000;

/// Default triangle buffer capacity.
pub const MAX_TRIANGLES: usize = 10_000_000;

/// Error type for mesh construction.
#[derive(Debug)]
pub enum MeshError {
    VertexCapacityExceeded(usize),
    TriangleCapacityExceeded(usize),
    InvalidVertexIndex(u32),
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::VertexCapacityExceeded(cap) => {
                write!(f, "vertex buffer full (capacity {})", cap)
            }
            MeshError::TriangleCapacityExceeded(cap) => {
                write!(f, "triangle buffer full (capacity {})", cap)
            }
            MeshError::InvalidVertexIndex(index) => {
                write!(f, "vertex index {} out of bounds", index)
            }
        }
    }
}

impl std::error::Error for MeshError {}

/// A mesh vertex: position plus vertex normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
}

/// A collidable triangle: three vertex indices and the pre-averaged face
/// normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub normal: Vec3,
}

/// Fixed-capacity triangle mesh for collision queries.
#[derive(Debug, Clone)]
pub struct CollisionMesh {
    vertices: Vec<Vertex>,
    triangles: Vec<Triangle>,
    max_vertices: usize,
    max_triangles: usize,
}

impl CollisionMesh {
    /// Empty mesh with the default buffer capacities.
    pub fn new() -> Self {
        Self::with_capacity(MAX_VERTICES, MAX_TRIANGLES)
    }

    /// Empty mesh with explicit buffer capacities.
    pub fn with_capacity(max_vertices: usize, max_triangles: usize) -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            max_vertices,
            max_triangles,
        }
    }

    /// Append a vertex, returning its index.
    pub fn push_vertex(&mut self, position: Vec3, normal: Vec3) -> Result<u32, MeshError> {
        if self.vertices.len() >= self.max_vertices {
            return Err(MeshError::VertexCapacityExceeded(self.max_vertices));
        }
        self.vertices.push(Vertex { position, normal });
        Ok((self.vertices.len() - 1) as u32)
    }

    /// Append a triangle over three existing vertices.
    ///
    /// The face normal is precomputed as the normalized average of the
    /// three vertex normals, matching how the asset pipeline bakes it.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) -> Result<(), MeshError> {
        if self.triangles.len() >= self.max_triangles {
            return Err(MeshError::TriangleCapacityExceeded(self.max_triangles));
        }
        for index in [a, b, c] {
            if index as usize >= self.vertices.len() {
                return Err(MeshError::InvalidVertexIndex(index));
            }
        }

        let normal = (self.vertices[a as usize].normal
            + self.vertices[b as usize].normal
            + self.vertices[c as usize].normal)
            .normalized();

        self.triangles.push(Triangle { a, b, c, normal });
        Ok(())
    }

    /// Build a mesh from indexed vertex data in one call.
    pub fn from_indexed(
        positions: &[Vec3],
        normals: &[Vec3],
        indices: &[[u32; 3]],
    ) -> Result<Self, MeshError> {
        let mut mesh = Self::new();
        for (position, normal) in positions.iter().zip(normals.iter()) {
            mesh.push_vertex(*position, *normal)?;
        }
        for [a, b, c] in indices {
            mesh.push_triangle(*a, *b, *c)?;
        }

        log::debug!(
            "Built collision mesh: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(mesh)
    }

    /// Flat square ground at y = 0, centered on the origin, spanning
    /// `half_extent` meters in each horizontal direction. Two triangles
    /// with upward normals.
    pub fn ground_plane(half_extent: f64) -> Self {
        let up = Vec3::new(0.0, 1.0, 0.0);
        let positions = [
            Vec3::new(-half_extent, 0.0, -half_extent),
            Vec3::new(half_extent, 0.0, -half_extent),
            Vec3::new(half_extent, 0.0, half_extent),
            Vec3::new(-half_extent, 0.0, half_extent),
        ];
        let normals = [up; 4];
        let indices = [[0, 1, 2], [0, 2, 3]];

        // Fits comfortably inside the default capacities.
        Self::from_indexed(&positions, &normals, &indices)
            .expect("ground plane within default capacity")
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Position of the vertex a triangle's plane test anchors on.
    pub fn vertex_position(&self, index: u32) -> Vec3 {
        self.vertices[index as usize].position
    }
}

impl Default for CollisionMesh {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_vertex_and_triangle() {
        let mut mesh = CollisionMesh::new();
        let up = Vec3::new(0.0, 1.0, 0.0);

        let a = mesh.push_vertex(Vec3::new(0.0, 0.0, 0.0), up).unwrap();
        let b = mesh.push_vertex(Vec3::new(1.0, 0.0, 0.0), up).unwrap();
        let c = mesh.push_vertex(Vec3::new(0.0, 0.0, 1.0), up).unwrap();
        mesh.push_triangle(a, b, c).unwrap();

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangles()[0].normal, up);
    }

    #[test]
    fn test_face_normal_is_averaged() {
        let mut mesh = CollisionMesh::new();
        // Vertex normals disagree slightly; the face normal is their
        // normalized average.
        let n0 = Vec3::new(0.0, 1.0, 0.0);
        let n1 = Vec3::new(0.1, 1.0, 0.0).normalized();
        let n2 = Vec3::new(-0.1, 1.0, 0.0).normalized();

        let a = mesh.push_vertex(Vec3::ZERO, n0).unwrap();
        let b = mesh.push_vertex(Vec3::new(1.0, 0.0, 0.0), n1).unwrap();
        let c = mesh.push_vertex(Vec3::new(0.0, 0.0, 1.0), n2).unwrap();
        mesh.push_triangle(a, b, c).unwrap();

        let normal = mesh.triangles()[0].normal;
        assert!((normal.magnitude() - 1.0).abs() < 1e-10);
        assert!((normal.x).abs() < 1e-10, "x components cancel");
        assert!(normal.y > 0.99);
    }

    #[test]
    fn test_vertex_capacity_is_checked() {
        let mut mesh = CollisionMesh::with_capacity(2, 10);
        let up = Vec3::new(0.0, 1.0, 0.0);
        mesh.push_vertex(Vec3::ZERO, up).unwrap();
        mesh.push_vertex(Vec3::ZERO, up).unwrap();

        let result = mesh.push_vertex(Vec3::ZERO, up);
        assert!(matches!(result, Err(MeshError::VertexCapacityExceeded(2))));
        assert_eq!(mesh.vertex_count(), 2);
    }

    #[test]
    fn test_triangle_capacity_is_checked() {
        let mut mesh = CollisionMesh::with_capacity(10, 1);
        let up = Vec3::new(0.0, 1.0, 0.0);
        for _ in 0..3 {
            mesh.push_vertex(Vec3::ZERO, up).unwrap();
        }
        mesh.push_triangle(0, 1, 2).unwrap();

        let result = mesh.push_triangle(0, 1, 2);
        assert!(matches!(
            result,
            Err(MeshError::TriangleCapacityExceeded(1))
        ));
    }

    #[test]
    fn test_invalid_index_is_rejected() {
        let mut mesh = CollisionMesh::new();
        let up = Vec3::new(0.0, 1.0, 0.0);
        mesh.push_vertex(Vec3::ZERO, up).unwrap();

        let result = mesh.push_triangle(0, 0, 7);
        assert!(matches!(result, Err(MeshError::InvalidVertexIndex(7))));
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_ground_plane() {
        let mesh = CollisionMesh::ground_plane(100.0);
        assert_eq!(mesh.triangle_count(), 2);
        for triangle in mesh.triangles() {
            assert_eq!(triangle.normal, Vec3::new(0.0, 1.0, 0.0));
        }
    }
}
