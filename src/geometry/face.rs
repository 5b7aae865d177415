//! Cube face identification and enumeration.

use glam::Vec3;

/// Identifies one of the six cubemap faces.
///
/// The discriminants match the face order of the velocity field file:
/// front, right, back, left, top, bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CubeFaceId {
    /// +Z face (front)
    Front = 0,
    /// +X face (right)
    Right = 1,
    /// -Z face (back)
    Back = 2,
    /// -X face (left)
    Left = 3,
    /// +Y face (top)
    Top = 4,
    /// -Y face (bottom)
    Bottom = 5,
}

impl CubeFaceId {
    /// Returns all six cube faces in file order.
    pub const fn all() -> [CubeFaceId; 6] {
        [
            CubeFaceId::Front,
            CubeFaceId::Right,
            CubeFaceId::Back,
            CubeFaceId::Left,
            CubeFaceId::Top,
            CubeFaceId::Bottom,
        ]
    }

    /// Returns the face index (0-5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a face from an index (0-5).
    pub const fn from_index(index: usize) -> Option<CubeFaceId> {
        match index {
            0 => Some(CubeFaceId::Front),
            1 => Some(CubeFaceId::Right),
            2 => Some(CubeFaceId::Back),
            3 => Some(CubeFaceId::Left),
            4 => Some(CubeFaceId::Top),
            5 => Some(CubeFaceId::Bottom),
            _ => None,
        }
    }

    /// Returns the outward unit normal of the face.
    pub const fn normal(self) -> Vec3 {
        match self {
            CubeFaceId::Front => Vec3::new(0.0, 0.0, 1.0),
            CubeFaceId::Right => Vec3::new(1.0, 0.0, 0.0),
            CubeFaceId::Back => Vec3::new(0.0, 0.0, -1.0),
            CubeFaceId::Left => Vec3::new(-1.0, 0.0, 0.0),
            CubeFaceId::Top => Vec3::new(0.0, 1.0, 0.0),
            CubeFaceId::Bottom => Vec3::new(0.0, -1.0, 0.0),
        }
    }

    /// Returns a short name for the face (e.g., "front", "bottom").
    pub const fn short_name(self) -> &'static str {
        match self {
            CubeFaceId::Front => "front",
            CubeFaceId::Right => "right",
            CubeFaceId::Back => "back",
            CubeFaceId::Left => "left",
            CubeFaceId::Top => "top",
            CubeFaceId::Bottom => "bottom",
        }
    }
}
