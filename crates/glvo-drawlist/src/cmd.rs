use std::fmt;
use std::sync::Arc;

use crate::{ClipRect, CmdList};

/// GL texture name sampled by a draw command. `TextureId(0)` samples the
/// default (incomplete) texture.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextureId(pub u32);

/// Producer-supplied rendering hook.
///
/// Commands carrying a callback opt out of the executor's own rendering; the
/// producer runs them itself (see [`UserCallback::invoke`]).
#[derive(Clone)]
pub struct UserCallback(Arc<dyn Fn(&CmdList, &DrawCmd) + Send + Sync>);

impl UserCallback {
    pub fn new(f: impl Fn(&CmdList, &DrawCmd) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    #[inline]
    pub fn invoke(&self, list: &CmdList, cmd: &DrawCmd) {
        (self.0)(list, cmd)
    }
}

impl fmt::Debug for UserCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserCallback(..)")
    }
}

/// What a draw command asks for.
#[derive(Debug, Clone)]
pub enum DrawCmdKind {
    /// Indexed, textured triangle list.
    Draw { texture: TextureId },
    /// Producer-side callback; nothing is drawn by the executor.
    Callback(UserCallback),
}

/// One draw command inside a [`CmdList`].
///
/// The command consumes `elem_count` indices starting where the previous
/// command of the same list stopped; the executor advances its index cursor
/// by `elem_count` whether the command is drawn or skipped.
#[derive(Debug, Clone)]
pub struct DrawCmd {
    /// Clip rectangle in display units (absolute, not relative to the display
    /// origin).
    pub clip_rect: ClipRect,
    pub elem_count: u32,
    pub kind: DrawCmdKind,
}

impl DrawCmd {
    #[inline]
    pub fn draw(clip_rect: ClipRect, texture: TextureId, elem_count: u32) -> Self {
        Self { clip_rect, elem_count, kind: DrawCmdKind::Draw { texture } }
    }

    #[inline]
    pub fn callback(clip_rect: ClipRect, callback: UserCallback) -> Self {
        Self { clip_rect, elem_count: 0, kind: DrawCmdKind::Callback(callback) }
    }

    #[inline]
    pub fn texture(&self) -> Option<TextureId> {
        match self.kind {
            DrawCmdKind::Draw { texture } => Some(texture),
            DrawCmdKind::Callback(_) => None,
        }
    }

    #[inline]
    pub fn is_callback(&self) -> bool {
        matches!(self.kind, DrawCmdKind::Callback(_))
    }
}
