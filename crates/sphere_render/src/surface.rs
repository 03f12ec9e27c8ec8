//! Drawing surface abstraction.
//!
//! Layers draw through [`DrawSurface`] in device-independent pixel
//! coordinates with the origin at the top left and y pointing down.
//! [`RecordingSurface`] keeps the commands for inspection or for
//! conversion to SVG.

/// Stroke style for paths and circle outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
    /// Opacity in [0, 1].
    pub alpha: f64,
}

impl Stroke {
    pub const fn new(color: &'static str, width: f64) -> Self {
        Self {
            color,
            width,
            alpha: 1.0,
        }
    }

    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }
}

/// Text style. Text is centered on its anchor point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: &'static str,
    pub size_px: f64,
    pub bold: bool,
}

impl TextStyle {
    pub const fn new(color: &'static str, size_px: f64) -> Self {
        Self {
            color,
            size_px,
            bold: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

/// Minimal 2-D drawing interface.
///
/// A path is built with `move_to`/`line_to`; each `move_to` starts a new
/// sub-path. `stroke` draws every sub-path of the current path and clears it.
pub trait DrawSurface {
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self, style: &Stroke);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &'static str);
    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, style: &Stroke);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Stroked path; each inner vector is a sub-path of at least one point.
    Path {
        sub_paths: Vec<Vec<(f64, f64)>>,
        stroke: Stroke,
    },
    FillCircle {
        x: f64,
        y: f64,
        radius: f64,
        color: &'static str,
    },
    StrokeCircle {
        x: f64,
        y: f64,
        radius: f64,
        stroke: Stroke,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        style: TextStyle,
    },
}

/// Surface that records commands in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    commands: Vec<DrawCommand>,
    pending: Vec<Vec<(f64, f64)>>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Drop all recorded commands, keeping the canvas size.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.pending.clear();
    }

    /// Number of stroked sub-paths.
    pub fn stroked_sub_paths(&self) -> usize {
        self.commands
            .iter()
            .map(|c| match c {
                DrawCommand::Path { sub_paths, .. } => sub_paths.len(),
                _ => 0,
            })
            .sum()
    }

    /// All text drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn move_to(&mut self, x: f64, y: f64) {
        self.pending.push(vec![(x, y)]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        match self.pending.last_mut() {
            Some(sub) => sub.push((x, y)),
            // canvas semantics: a line_to without a current point acts as move_to
            None => self.pending.push(vec![(x, y)]),
        }
    }

    fn stroke(&mut self, style: &Stroke) {
        if self.pending.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Path {
            sub_paths: std::mem::take(&mut self.pending),
            stroke: *style,
        });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &'static str) {
        self.commands.push(DrawCommand::FillCircle {
            x,
            y,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, style: &Stroke) {
        self.commands.push(DrawCommand::StrokeCircle {
            x,
            y,
            radius,
            stroke: *style,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style: *style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_collects_sub_paths() {
        let mut s = RecordingSurface::new(100.0, 100.0);
        s.move_to(0.0, 0.0);
        s.line_to(1.0, 1.0);
        s.move_to(5.0, 5.0);
        s.line_to(6.0, 6.0);
        s.stroke(&Stroke::new("red", 1.0));
        assert_eq!(s.commands().len(), 1);
        assert_eq!(s.stroked_sub_paths(), 2);
    }

    #[test]
    fn empty_stroke_records_nothing() {
        let mut s = RecordingSurface::new(10.0, 10.0);
        s.stroke(&Stroke::new("red", 1.0));
        assert!(s.commands().is_empty());
    }

    #[test]
    fn texts_in_order() {
        let mut s = RecordingSurface::new(10.0, 10.0);
        let style = TextStyle::new("#fff", 12.0);
        s.fill_text("N", 0.0, 0.0, &style);
        s.fill_text("E", 1.0, 0.0, &style);
        assert_eq!(s.texts(), vec!["N", "E"]);
    }
}
