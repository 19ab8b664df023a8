//! Rendering module
//!
//! The simulation never draws directly. [`scene::draw_scene`] describes a
//! frame through the [`Canvas`] trait; backends decide how to show it:
//! - [`DrawList`]: records commands (headless runs, tests)
//! - [`RenderState`]: WebGPU triangle pipeline, text handed to the host page

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::draw_scene;

use glam::Vec2;

use crate::sim::Rect;

/// RGBA, components in 0..=1 (sRGB)
pub type Color = [f32; 4];

/// A piece of text placed in screen space (top-left anchor)
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub color: Color,
}

/// Drawing surface consumed by the scene
pub trait Canvas {
    /// Fill the whole frame
    fn clear(&mut self, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn text(&mut self, text: &str, pos: Vec2, color: Color);
    /// Finish the frame and show it
    fn present(&mut self);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
    Text(TextItem),
}

/// Canvas that records each frame's commands
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pending: Vec<DrawCommand>,
    /// Commands of the most recently presented frame
    pub last_frame: Vec<DrawCommand>,
    /// Frames presented so far
    pub frames: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text items of the last presented frame, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &TextItem> {
        self.last_frame.iter().filter_map(|c| match c {
            DrawCommand::Text(item) => Some(item),
            _ => None,
        })
    }

    pub fn rect_count(&self) -> usize {
        self.last_frame
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count()
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Color) {
        self.pending.push(DrawCommand::Clear(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.pending.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.pending.push(DrawCommand::Rect { rect, color });
    }

    fn text(&mut self, text: &str, pos: Vec2, color: Color) {
        self.pending.push(DrawCommand::Text(TextItem {
            text: text.to_string(),
            pos,
            color,
        }));
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames += 1;
    }
}
