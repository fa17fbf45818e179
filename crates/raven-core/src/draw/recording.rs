//! A surface that records drawing calls instead of rendering them.

use crate::{color::Color, draw::Surface};

/// A single recorded [`Surface`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    Scale { sx: f64, sy: f64 },
    Rotate { angle: f64 },
    NewSubPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc {
        xc: f64,
        yc: f64,
        radius: f64,
        angle1: f64,
        angle2: f64,
    },
    SetSource(Color),
    FillPreserve,
}

/// A [`Surface`] that keeps every call in order.
///
/// # Examples
///
/// ```
/// # use raven_core::draw::{DrawCommand, RecordingSurface, Surface};
/// let mut surface = RecordingSurface::new();
/// surface.save();
/// surface.move_to(1.0, 2.0);
/// surface.restore();
///
/// assert_eq!(surface.len(), 3);
/// assert!(surface.is_balanced());
/// assert_eq!(surface.commands()[1], DrawCommand::MoveTo { x: 1.0, y: 2.0 });
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns `true` if every `save` is matched by a later `restore`.
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0usize;
        for command in &self.commands {
            match command {
                DrawCommand::Save => depth += 1,
                DrawCommand::Restore => match depth.checked_sub(1) {
                    Some(d) => depth = d,
                    None => return false,
                },
                _ => {}
            }
        }
        depth == 0
    }

    /// Number of sub-paths started.
    pub fn sub_paths(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::NewSubPath))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.commands.push(DrawCommand::Scale { sx, sy });
    }

    fn rotate(&mut self, angle: f64) {
        self.commands.push(DrawCommand::Rotate { angle });
    }

    fn new_sub_path(&mut self) {
        self.commands.push(DrawCommand::NewSubPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        self.commands.push(DrawCommand::Arc {
            xc,
            yc,
            radius,
            angle1,
            angle2,
        });
    }

    fn set_source(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetSource(color));
    }

    fn fill_preserve(&mut self) {
        self.commands.push(DrawCommand::FillPreserve);
    }
}
