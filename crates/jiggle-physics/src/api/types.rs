use bytemuck::{Pod, Zeroable};

/// Unique identifier for a simulated body, assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// Number of point-masses per body — one per bounding-box corner.
pub const CORNER_COUNT: usize = 8;

// Corner indices encode the corner position in three bits:
// bit 2 = +x half, bit 1 = +y half, bit 0 = +z half.
// Index 0 is the low-low-low corner, index 7 high-high-high. Mesh
// components consuming the masses rely on the same ordering.

/// Whether corner `i` sits on the +x half of the bounding box.
#[inline]
pub fn corner_high_x(i: usize) -> bool {
    i & 0x4 != 0
}

/// Whether corner `i` sits on the +y (upper) half of the bounding box.
#[inline]
pub fn corner_high_y(i: usize) -> bool {
    i & 0x2 != 0
}

/// Whether corner `i` sits on the +z half of the bounding box.
#[inline]
pub fn corner_high_z(i: usize) -> bool {
    i & 0x1 != 0
}

/// One mass as handed to the renderer: the previous and current tick
/// positions, ready for sub-tick interpolation or direct buffer upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct MassSample {
    pub prev: [f32; 3],
    pub pos: [f32; 3],
}
