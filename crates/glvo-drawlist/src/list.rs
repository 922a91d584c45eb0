use crate::{ClipRect, DrawCmd, DrawIdx, DrawVert, TextureId, UserCallback, Vec2};

/// One batch of overlay geometry: a vertex buffer, an index buffer and the
/// commands that consume the index buffer in order.
///
/// # Clipping
///
/// Use [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) to scope
/// commands to a clip rectangle. Clips are intersected with the current
/// parent, so nested regions work correctly. Commands recorded with no clip
/// pushed use [`ClipRect::UNBOUNDED`].
#[derive(Debug, Clone, Default)]
pub struct CmdList {
    vtx_buffer: Vec<DrawVert>,
    idx_buffer: Vec<DrawIdx>,
    commands: Vec<DrawCmd>,

    /// The top is always the current effective clip, already intersected with
    /// all parents.
    clip_stack: Vec<ClipRect>,
}

impl CmdList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears geometry, commands and the clip stack. Keeps allocated capacity.
    pub fn clear(&mut self) {
        self.vtx_buffer.clear();
        self.idx_buffer.clear();
        self.commands.clear();
        self.clip_stack.clear();
    }

    #[inline]
    pub fn vtx_buffer(&self) -> &[DrawVert] {
        &self.vtx_buffer
    }

    #[inline]
    pub fn idx_buffer(&self) -> &[DrawIdx] {
        &self.idx_buffer
    }

    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Returns the clip rectangle new commands will carry.
    #[inline]
    pub fn current_clip(&self) -> ClipRect {
        self.clip_stack.last().copied().unwrap_or(ClipRect::UNBOUNDED)
    }

    /// Begins a clip region (intersected with any parent clip).
    ///
    /// Calls must be balanced with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: ClipRect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // No overlap with the parent: keep a degenerate rect so the
            // executor skips the commands.
            Some(&parent) => parent.intersect(rect).unwrap_or(ClipRect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent clip region.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Appends a textured triangle list. `indices` refer to `vertices`; they
    /// are rebased onto the end of the list's vertex buffer.
    ///
    /// # Panics
    /// Panics if the combined vertex buffer would not be addressable by
    /// [`DrawIdx`].
    pub fn add_triangles(&mut self, texture: TextureId, vertices: &[DrawVert], indices: &[DrawIdx]) {
        let base = self.vtx_buffer.len();
        assert!(
            base + vertices.len() <= DrawIdx::MAX as usize + 1,
            "command list exceeds {} vertices",
            DrawIdx::MAX as usize + 1
        );
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < vertices.len()),
            "index out of range of the supplied vertices"
        );

        self.vtx_buffer.extend_from_slice(vertices);
        self.idx_buffer.extend(indices.iter().map(|&i| (base + i as usize) as DrawIdx));
        self.commands.push(DrawCmd::draw(self.current_clip(), texture, indices.len() as u32));
    }

    /// Appends an axis-aligned textured quad (two triangles).
    pub fn add_rect(
        &mut self,
        texture: TextureId,
        min: Vec2,
        max: Vec2,
        uv_min: Vec2,
        uv_max: Vec2,
        col: [u8; 4],
    ) {
        let vertices = [
            DrawVert::new([min.x, min.y], [uv_min.x, uv_min.y], col),
            DrawVert::new([max.x, min.y], [uv_max.x, uv_min.y], col),
            DrawVert::new([max.x, max.y], [uv_max.x, uv_max.y], col),
            DrawVert::new([min.x, max.y], [uv_min.x, uv_max.y], col),
        ];
        self.add_triangles(texture, &vertices, &[0, 1, 2, 0, 2, 3]);
    }

    /// Appends a producer-side callback command. It consumes no indices.
    pub fn add_callback(&mut self, callback: UserCallback) {
        self.commands.push(DrawCmd::callback(self.current_clip(), callback));
    }

    /// Appends a prebuilt command without touching the geometry buffers.
    ///
    /// The caller is responsible for keeping `elem_count` consistent with the
    /// index buffer.
    pub fn push_command(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }

    /// Runs every callback command of this list in order.
    pub fn run_callbacks(&self) {
        for cmd in &self.commands {
            if let crate::DrawCmdKind::Callback(cb) = &cmd.kind {
                cb.invoke(self, cmd);
            }
        }
    }
}
