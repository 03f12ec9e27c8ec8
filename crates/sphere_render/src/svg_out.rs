//! SVG output for recorded drawing commands.

use std::path::Path as FsPath;

use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path, Rectangle, Text};

use crate::error::RenderError;
use crate::surface::{DrawCommand, RecordingSurface};

const FONT_FAMILY: &str = "\"Segoe UI Symbol\", \"Noto Sans\", sans-serif";

/// Build an SVG document from recorded commands, on a filled background.
pub fn to_svg_document(surface: &RecordingSurface, background: &str) -> Document {
    let mut doc = Document::new()
        .set("width", surface.width)
        .set("height", surface.height)
        .set("viewBox", (0.0, 0.0, surface.width, surface.height))
        .add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", background),
        );

    for command in surface.commands() {
        doc = match command {
            DrawCommand::Path { sub_paths, stroke } => {
                let mut data = Data::new();
                for sub in sub_paths {
                    let Some((&first, rest)) = sub.split_first() else {
                        continue;
                    };
                    data = data.move_to(first);
                    for &p in rest {
                        data = data.line_to(p);
                    }
                }
                doc.add(
                    Path::new()
                        .set("fill", "none")
                        .set("stroke", stroke.color)
                        .set("stroke-width", stroke.width)
                        .set("stroke-opacity", stroke.alpha)
                        .set("stroke-linecap", "round")
                        .set("d", data),
                )
            }
            DrawCommand::FillCircle {
                x,
                y,
                radius,
                color,
            } => doc.add(
                Circle::new()
                    .set("cx", *x)
                    .set("cy", *y)
                    .set("r", *radius)
                    .set("fill", *color),
            ),
            DrawCommand::StrokeCircle {
                x,
                y,
                radius,
                stroke,
            } => doc.add(
                Circle::new()
                    .set("cx", *x)
                    .set("cy", *y)
                    .set("r", *radius)
                    .set("fill", "none")
                    .set("stroke", stroke.color)
                    .set("stroke-width", stroke.width)
                    .set("stroke-opacity", stroke.alpha),
            ),
            DrawCommand::Text { text, x, y, style } => doc.add(
                Text::new(text.as_str())
                    .set("x", *x)
                    .set("y", *y)
                    .set("fill", style.color)
                    .set("font-size", style.size_px)
                    .set("font-family", FONT_FAMILY)
                    .set("font-weight", if style.bold { "bold" } else { "normal" })
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle"),
            ),
        };
    }
    doc
}

/// Write a recorded frame to an SVG file.
pub fn save_svg(
    path: impl AsRef<FsPath>,
    surface: &RecordingSurface,
    background: &str,
) -> Result<(), RenderError> {
    svg::save(path, &to_svg_document(surface, background))?;
    Ok(())
}
