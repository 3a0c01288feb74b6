use crate::math::Matrix4;

/// Parameters controlling cursor alignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignParams {
    /// Also move the cursor to the shared (or primary start) vertex.
    pub move_position: bool,
    /// Object-to-world matrix applied to vertex positions before alignment.
    pub world_transform: Matrix4,
}

impl AlignParams {
    /// Sets whether the cursor location is updated.
    #[must_use]
    pub fn with_move_position(mut self, move_position: bool) -> Self {
        self.move_position = move_position;
        self
    }

    /// Sets the object-to-world matrix.
    #[must_use]
    pub fn with_world_transform(mut self, world_transform: Matrix4) -> Self {
        self.world_transform = world_transform;
        self
    }
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            move_position: false,
            world_transform: Matrix4::identity(),
        }
    }
}
