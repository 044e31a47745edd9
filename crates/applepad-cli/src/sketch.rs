//! SVG rendition of the three study steps.
//!
//! Strokes become groups of small circles, the apple fill is either an
//! invisible path or five color strips clipped to the outline.

use applepad_core::geometry::{preview_path, AppleShape, Canvas, Point};
use applepad_core::palette::StripePalette;
use applepad_core::params::NormalizedParams;
use applepad_core::stroke::{Mark, StrokeRenderer, StrokeStyle};
use clap::ValueEnum;
use svg::node::element::path::Data;
use svg::node::element::{Circle, ClipPath, Definitions, Group, Path, Rectangle};
use svg::Document;

const BACKGROUND: &str = "rgb(17,17,17)";
const INK: &str = "rgb(245,245,245)";
const CLIP_ID: &str = "apple-clip";

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SketchStep {
    /// Sample pen stroke.
    Stroke,
    /// Apple outline with a neutral fill.
    Geometry,
    /// Apple outline over the striped palette.
    #[default]
    Color,
}

pub fn render(
    step: SketchStep,
    params: &NormalizedParams,
    pen: &StrokeStyle,
    canvas: &Canvas,
    renderer: &mut StrokeRenderer,
) -> Document {
    let doc = blank(canvas);
    match step {
        SketchStep::Stroke => {
            let path = preview_path(params.wiggleness, canvas);
            doc.add(marks(&renderer.render(&path, pen, false)))
        }
        SketchStep::Geometry | SketchStep::Color => {
            let shape = AppleShape::from_params(params, canvas);
            let doc = if step == SketchStep::Color {
                striped_fill(doc, &shape, params, canvas)
            } else {
                doc.add(outline_path(&shape.outline).set("fill", "none"))
            };

            let outline = shape.wiggled_outline(params.wiggleness);
            doc.add(marks(&renderer.render(&outline, pen, true)))
                .add(marks(&renderer.render(&shape.stem(), pen, false)))
        }
    }
}

fn blank(canvas: &Canvas) -> Document {
    Document::new()
        .set("width", canvas.width)
        .set("height", canvas.height)
        .set("viewBox", format!("0 0 {} {}", canvas.width, canvas.height))
        .add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", BACKGROUND),
        )
}

fn marks(marks: &[Mark]) -> Group {
    marks.iter().fold(Group::new().set("fill", INK), |group, m| {
        group.add(
            Circle::new()
                .set("cx", m.center.x)
                .set("cy", m.center.y)
                .set("r", m.diameter / 2.0),
        )
    })
}

fn outline_path(points: &[Point]) -> Path {
    let mut data = Data::new();
    if let Some((first, rest)) = points.split_first() {
        data = data.move_to((first.x, first.y));
        for p in rest {
            data = data.line_to((p.x, p.y));
        }
        data = data.close();
    }
    Path::new().set("d", data)
}

fn striped_fill(
    doc: Document,
    shape: &AppleShape,
    params: &NormalizedParams,
    canvas: &Canvas,
) -> Document {
    let (top, bottom) = shape.vertical_extent();
    let palette = StripePalette::from_params(params);

    let strips = palette.bands(top, bottom).fold(
        Group::new().set("clip-path", format!("url(#{})", CLIP_ID)),
        |group, (y0, y1, color)| {
            group.add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", y0)
                    .set("width", canvas.width)
                    .set("height", y1 - y0)
                    .set("fill", color.to_hex()),
            )
        },
    );

    doc.add(Definitions::new().add(ClipPath::new().set("id", CLIP_ID).add(outline_path(&shape.outline))))
        .add(strips)
}
