//! Треугольная сетка объекта, передаваемая экспортёру геометрии

use serde::{Deserialize, Serialize};

/// Индексированная треугольная сетка: позиции вершин + тройки индексов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TriangleMesh {
    #[serde(default)]
    pub vertices: Vec<[f32; 3]>,
    #[serde(default)]
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Единичный куб 1x1x1 с углом в начале координат (12 треугольников, нормали наружу)
    pub fn unit_cube() -> Self {
        let vertices = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
            [0.0, 1.0, 1.0],
        ];
        #[rustfmt::skip]
        let indices = vec![
            0, 2, 1,  0, 3, 2, // -Z
            4, 5, 6,  4, 6, 7, // +Z
            0, 1, 5,  0, 5, 4, // -Y
            3, 7, 6,  3, 6, 2, // +Y
            0, 4, 7,  0, 7, 3, // -X
            1, 2, 6,  1, 6, 5, // +X
        ];
        Self { vertices, indices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cube_counts() {
        let cube = TriangleMesh::unit_cube();
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.triangle_count(), 12);
        assert!(cube.indices.iter().all(|&i| (i as usize) < cube.vertices.len()));
    }

    #[test]
    fn test_default_is_empty() {
        let mesh = TriangleMesh::default();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
    }
}
