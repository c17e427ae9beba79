//! SVG export of the cutting diagram.

use super::diagram::{Diagram, Rect};
use crate::config::Unit;
use crate::error::Result;
use svg::node::element::{Group, Line, Rectangle, Text, Title};
use svg::Document;

/// Colors and stroke settings of a rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgTheme {
    pub background: &'static str,
    pub sheet_fill: &'static str,
    pub piece_fill: &'static str,
    pub waste_fill: &'static str,
    pub waste_opacity: f64,
    pub grid_stroke: &'static str,
    pub stroke_width_multiplier: f64,
}

impl Default for SvgTheme {
    fn default() -> Self {
        PAPER_THEME
    }
}

/// Beige paper look.
pub static PAPER_THEME: SvgTheme = SvgTheme {
    background: "#f5f5dc",
    sheet_fill: "#e6d5b8",
    piece_fill: "#d4af8f",
    waste_fill: "#c4a484",
    waste_opacity: 0.5,
    grid_stroke: "#7f7f7f",
    stroke_width_multiplier: 1.0,
};

/// Plain grayscale look for printing.
pub static GRAY_THEME: SvgTheme = SvgTheme {
    background: "#ffffff",
    sheet_fill: "#d3d3d3",
    piece_fill: "#a9a9a9",
    waste_fill: "#5a5a5a",
    waste_opacity: 0.5,
    grid_stroke: "#000000",
    stroke_width_multiplier: 1.0,
};

fn rect_element(rect: &Rect) -> Rectangle {
    Rectangle::new()
        .set("x", rect.x)
        .set("y", rect.y)
        .set("width", rect.width)
        .set("height", rect.height)
}

/// Render the diagram as an SVG document.
///
/// Fails with `GridTooLarge` when the grid exceeds the drawing limit.
pub fn render_svg(diagram: &Diagram, theme: &SvgTheme, unit: Unit) -> Result<Document> {
    diagram.check_drawable()?;
    let sheet = &diagram.sheet;
    let short_side = f64::min(sheet.width, sheet.height);
    let margin = short_side * 0.1;
    let font_size = short_side * 0.035;
    let stroke_width = short_side * 0.002 * theme.stroke_width_multiplier;

    let background = Rectangle::new()
        .set("x", -margin)
        .set("y", -margin)
        .set("width", sheet.width + 2.0 * margin)
        .set("height", sheet.height + 2.0 * margin)
        .set("fill", theme.background);

    let sheet_group = Group::new().set("id", "main_panel").add(
        rect_element(sheet)
            .set("fill", theme.sheet_fill)
            .set("stroke", "black")
            .set("stroke-width", 2.0 * stroke_width)
            .add(Title::new(format!(
                "main panel: {} x {} {}",
                sheet.width, sheet.height, unit
            ))),
    );

    let mut grid_group = Group::new()
        .set("id", "grid")
        .set("stroke", theme.grid_stroke)
        .set("stroke-width", 0.5 * stroke_width)
        .set(
            "stroke-dasharray",
            format!("{} {}", 4.0 * stroke_width, 2.0 * stroke_width),
        );
    // Cut lines at each piece boundary inside the sheet
    for col in 1..=diagram.columns {
        let x = col as f64 * diagram.pitch_x;
        if x >= sheet.width {
            break;
        }
        grid_group = grid_group.add(
            Line::new()
                .set("x1", x)
                .set("y1", 0.0)
                .set("x2", x)
                .set("y2", sheet.height),
        );
    }
    for row in 1..=diagram.rows {
        let y = row as f64 * diagram.pitch_y;
        if y >= sheet.height {
            break;
        }
        grid_group = grid_group.add(
            Line::new()
                .set("x1", 0.0)
                .set("y1", y)
                .set("x2", sheet.width)
                .set("y2", y),
        );
    }

    let mut pieces_group = Group::new()
        .set("id", "pieces")
        .set("fill", theme.piece_fill)
        .set("stroke", "black")
        .set("stroke-width", stroke_width);
    for (idx, piece) in diagram.pieces().enumerate() {
        pieces_group = pieces_group.add(rect_element(&piece).add(Title::new(format!(
            "piece #{}: {} x {} at ({}, {})",
            idx + 1,
            piece.width,
            piece.height,
            piece.x,
            piece.y
        ))));
    }

    let mut waste_group = Group::new()
        .set("id", "waste")
        .set("fill", theme.waste_fill)
        .set("fill-opacity", theme.waste_opacity);
    for strip in diagram.waste_strips() {
        waste_group = waste_group.add(rect_element(strip).add(Title::new(format!(
            "waste: {} x {}",
            strip.width, strip.height
        ))));
    }

    let title = Text::new(format!(
        "Cutting Layout | {} piece(s) | waste {:.2}%",
        diagram.piece_count(),
        waste_percent(diagram)
    ))
    .set("x", 0.0)
    .set("y", -0.4 * margin)
    .set("font-size", font_size)
    .set("font-family", "monospace")
    .set("font-weight", "500");

    let axis_label = Text::new(format!("Width ({}) x Height ({})", unit, unit))
        .set("x", 0.0)
        .set("y", sheet.height + 0.6 * margin)
        .set("font-size", 0.8 * font_size)
        .set("font-family", "monospace");

    let legend = legend_group(diagram, theme, font_size, margin);

    Ok(Document::new()
        .set(
            "viewBox",
            (
                -margin,
                -margin,
                sheet.width + 2.0 * margin,
                sheet.height + 2.0 * margin,
            ),
        )
        .add(background)
        .add(sheet_group)
        .add(pieces_group)
        .add(waste_group)
        .add(grid_group)
        .add(title)
        .add(axis_label)
        .add(legend))
}

fn waste_percent(diagram: &Diagram) -> f64 {
    let sheet_area = diagram.sheet.area();
    if sheet_area > 0.0 {
        diagram.waste_area() / sheet_area * 100.0
    } else {
        0.0
    }
}

fn legend_group(diagram: &Diagram, theme: &SvgTheme, font_size: f64, margin: f64) -> Group {
    let x = diagram.sheet.width * 0.6;
    let y = diagram.sheet.height + 0.3 * margin;
    let swatch = 0.8 * font_size;

    let entries = [
        ("Main Panel", theme.sheet_fill, 1.0),
        ("Good Panel", theme.piece_fill, 1.0),
        ("Waste Area", theme.waste_fill, theme.waste_opacity),
    ];

    let mut group = Group::new().set("id", "legend");
    for (idx, (label, fill, opacity)) in entries.iter().enumerate() {
        let entry_x = x + idx as f64 * 6.0 * font_size;
        group = group
            .add(
                Rectangle::new()
                    .set("x", entry_x)
                    .set("y", y)
                    .set("width", swatch)
                    .set("height", swatch)
                    .set("fill", *fill)
                    .set("fill-opacity", *opacity)
                    .set("stroke", "black")
                    .set("stroke-width", 0.05 * swatch),
            )
            .add(
                Text::new(*label)
                    .set("x", entry_x + 1.2 * swatch)
                    .set("y", y + swatch)
                    .set("font-size", 0.7 * font_size)
                    .set("font-family", "monospace"),
            );
    }
    group
}
