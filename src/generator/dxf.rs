//! DXF (Drawing Exchange Format) export of the cutting diagram.
//!
//! Writes an AutoCAD R12 text file. DXF has Y pointing up, so diagram
//! coordinates are flipped around the sheet height.

use super::diagram::{Diagram, Rect};
use crate::error::Result;
use std::fmt::Write;

/// DXF layer colors (AutoCAD color indices)
pub struct DxfColors {
    pub sheet: i32,      // Sheet boundary
    pub grid: i32,       // Cut lines
    pub piece_fill: i32, // Piece fill color
    pub waste_fill: i32, // Waste fill color
    pub labels: i32,     // Dimension text
}

impl Default for DxfColors {
    fn default() -> Self {
        Self {
            sheet: 5,        // Blue
            grid: 140,       // Light red/pink
            piece_fill: 131, // Light green
            waste_fill: 254, // Gray
            labels: 5,       // Blue
        }
    }
}

/// DXF writer for generating AutoCAD-compatible drawings.
pub struct DxfWriter {
    output: String,
}

impl DxfWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    /// Get the generated DXF content.
    pub fn into_string(self) -> String {
        self.output
    }

    /// Write a DXF group code and value, code right-aligned in 3 chars.
    fn write_group(&mut self, code: i32, value: &str) {
        let _ = writeln!(self.output, "{:>3}", code);
        let _ = writeln!(self.output, "{}", value);
    }

    /// Write a DXF group code with integer value (right-aligned in 6 chars).
    fn write_group_int(&mut self, code: i32, value: i32) {
        let _ = writeln!(self.output, "{:>3}", code);
        let _ = writeln!(self.output, "{:>6}", value);
    }

    /// Format a coordinate with 3 decimals, rounding half away from zero.
    fn format_coord(value: f64) -> String {
        let scaled = value * 1000.0;
        let rounded = if scaled >= 0.0 {
            (scaled + 0.5).floor()
        } else {
            (scaled - 0.5).ceil()
        };
        format!("{:.3}", rounded / 1000.0)
    }

    /// Write the DXF header section.
    pub fn write_header(&mut self, extent_x: f64, extent_y: f64) {
        self.write_group(0, "SECTION");
        self.write_group(2, "HEADER");

        self.write_group(9, "$ACADVER");
        self.write_group(1, "AC1009");

        self.write_group(9, "$EXTMIN");
        self.write_group(10, "0.0");
        self.write_group(20, "0.0");

        self.write_group(9, "$EXTMAX");
        self.write_group(10, &Self::format_coord(extent_x));
        self.write_group(20, &Self::format_coord(extent_y));

        self.write_group(0, "ENDSEC");
    }

    /// Write the tables section with layer definitions.
    pub fn write_tables(&mut self, layers: &[(&str, i32)]) {
        self.write_group(0, "SECTION");
        self.write_group(2, "TABLES");

        self.write_group(0, "TABLE");
        self.write_group(2, "LTYPE");
        self.write_group_int(70, 1);
        self.write_group(0, "LTYPE");
        self.write_group(2, "CONTINUOUS");
        self.write_group_int(70, 64);
        self.write_group(3, "Solid line");
        self.write_group_int(72, 65);
        self.write_group_int(73, 0);
        self.write_group(40, "0.0");
        self.write_group(0, "ENDTAB");

        self.write_group(0, "TABLE");
        self.write_group(2, "LAYER");
        self.write_group_int(70, layers.len() as i32);
        for (name, color) in layers {
            self.write_layer(name, *color);
        }
        self.write_group(0, "ENDTAB");

        self.write_group(0, "ENDSEC");
    }

    fn write_layer(&mut self, name: &str, color: i32) {
        self.write_group(0, "LAYER");
        self.write_group(2, name);
        self.write_group_int(70, 64);
        self.write_group_int(62, color);
        self.write_group(6, "CONTINUOUS");
    }

    /// Begin the entities section.
    pub fn begin_entities(&mut self) {
        self.write_group(0, "SECTION");
        self.write_group(2, "ENTITIES");
    }

    /// End the entities section and write EOF.
    pub fn end_entities(&mut self) {
        self.write_group(0, "ENDSEC");
        self.write_group(0, "EOF");
    }

    /// Write a LINE entity.
    pub fn write_line_entity(&mut self, layer: &str, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.write_group(0, "LINE");
        self.write_group(8, layer);
        self.write_group(10, &Self::format_coord(x1));
        self.write_group(20, &Self::format_coord(y1));
        self.write_group(30, "0.000");
        self.write_group(11, &Self::format_coord(x2));
        self.write_group(21, &Self::format_coord(y2));
        self.write_group(31, "0.000");
    }

    /// Write a SOLID entity (filled rectangle) from its lower-left corner.
    pub fn write_solid_entity(&mut self, layer: &str, x: f64, y: f64, width: f64, height: f64) {
        // SOLID vertex order is zig-zag: 3rd and 4th corners are swapped
        self.write_group(0, "SOLID");
        self.write_group(8, layer);
        self.write_group(10, &Self::format_coord(x));
        self.write_group(20, &Self::format_coord(y));
        self.write_group(30, "0.000");
        self.write_group(11, &Self::format_coord(x + width));
        self.write_group(21, &Self::format_coord(y));
        self.write_group(31, "0.000");
        self.write_group(12, &Self::format_coord(x));
        self.write_group(22, &Self::format_coord(y + height));
        self.write_group(32, "0.000");
        self.write_group(13, &Self::format_coord(x + width));
        self.write_group(23, &Self::format_coord(y + height));
        self.write_group(33, "0.000");
    }

    /// Write a TEXT entity.
    pub fn write_text_entity(&mut self, layer: &str, x: f64, y: f64, height: f64, text: &str) {
        self.write_group(0, "TEXT");
        self.write_group(8, layer);
        self.write_group(10, &Self::format_coord(x));
        self.write_group(20, &Self::format_coord(y));
        self.write_group(30, "0.000");
        self.write_group(40, &Self::format_coord(height));
        self.write_group(1, text);
    }
}

impl Default for DxfWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a dimension for labels, dropping needless zeros.
fn format_dimension(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Lower-left corner of a diagram rectangle in DXF space.
fn flip(rect: &Rect, sheet_height: f64) -> (f64, f64) {
    (rect.x, sheet_height - rect.y_max())
}

/// Render the diagram as a DXF drawing.
pub fn render_dxf(diagram: &Diagram) -> Result<String> {
    diagram.check_drawable()?;
    let mut dxf = DxfWriter::new();
    let colors = DxfColors::default();
    let sheet = &diagram.sheet;

    let layers = [
        ("SHEET", colors.sheet),
        ("CUTS", colors.grid),
        ("PIECES", colors.piece_fill),
        ("WASTE", colors.waste_fill),
        ("LABELS", colors.labels),
    ];

    dxf.write_header(sheet.width, sheet.height);
    dxf.write_tables(&layers);
    dxf.begin_entities();

    for piece in diagram.pieces() {
        let (x, y) = flip(&piece, sheet.height);
        dxf.write_solid_entity("PIECES", x, y, piece.width, piece.height);
    }

    for strip in diagram.waste_strips() {
        let (x, y) = flip(strip, sheet.height);
        dxf.write_solid_entity("WASTE", x, y, strip.width, strip.height);
    }

    // Sheet boundary
    dxf.write_line_entity("SHEET", 0.0, 0.0, sheet.width, 0.0);
    dxf.write_line_entity("SHEET", sheet.width, 0.0, sheet.width, sheet.height);
    dxf.write_line_entity("SHEET", sheet.width, sheet.height, 0.0, sheet.height);
    dxf.write_line_entity("SHEET", 0.0, sheet.height, 0.0, 0.0);

    // Cut lines along the grid, only across the pieces
    if diagram.piece_count() > 0 {
        let used_width = diagram.used_width();
        let used_height = diagram.used_height();

        for col in 1..=diagram.columns {
            let x = col as f64 * diagram.pitch_x;
            dxf.write_line_entity("CUTS", x, sheet.height, x, sheet.height - used_height);
        }
        for row in 1..=diagram.rows {
            let y = sheet.height - row as f64 * diagram.pitch_y;
            dxf.write_line_entity("CUTS", 0.0, y, used_width, y);
        }
    }

    // One dimension label per piece, centered
    let text_height = f64::min(diagram.pitch_x, diagram.pitch_y) * 0.1;
    for piece in diagram.pieces() {
        let (x, y) = flip(&piece, sheet.height);
        let label = format!(
            "{} x {}",
            format_dimension(piece.width),
            format_dimension(piece.height)
        );
        dxf.write_text_entity(
            "LABELS",
            x + piece.width / 4.0,
            y + piece.height / 2.0,
            text_height,
            &label,
        );
    }

    dxf.end_entities();
    Ok(dxf.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::compute_layout;
    use crate::generator::build_diagram;
    use crate::model::{CutSpec, PanelSpec};

    fn render(mw: f64, mh: f64, cw: f64, ch: f64) -> String {
        let main = PanelSpec::new(mw, mh);
        let cut = CutSpec::new(cw, ch);
        let layout = compute_layout(&main, &cut);
        render_dxf(&build_diagram(&main, &cut, &layout)).unwrap()
    }

    #[test]
    fn test_format_coord() {
        assert_eq!(DxfWriter::format_coord(0.0), "0.000");
        assert_eq!(DxfWriter::format_coord(1.0625), "1.063");
        assert_eq!(DxfWriter::format_coord(-1.0625), "-1.063");
        assert_eq!(DxfWriter::format_coord(100.0), "100.000");
    }

    #[test]
    fn test_format_dimension() {
        assert_eq!(format_dimension(30.0), "30");
        assert_eq!(format_dimension(30.5), "30.5");
        assert_eq!(format_dimension(0.0), "0");
    }

    #[test]
    fn test_flip() {
        let rect = Rect::new(0.0, 0.0, 30.0, 30.0);
        assert_eq!(flip(&rect, 100.0), (0.0, 70.0));
    }

    #[test]
    fn test_dxf_structure() {
        let dxf = render(100.0, 100.0, 30.0, 30.0);
        assert!(dxf.starts_with("  0\nSECTION\n  2\nHEADER\n"));
        assert!(dxf.ends_with("  0\nEOF\n"));
        assert!(dxf.contains("AC1009"));
        for layer in ["SHEET", "CUTS", "PIECES", "WASTE", "LABELS"] {
            assert!(dxf.contains(&format!("  2\n{}\n", layer)), "missing layer {}", layer);
        }
    }

    #[test]
    fn test_dxf_entity_counts() {
        let dxf = render(100.0, 100.0, 30.0, 30.0);
        // 9 pieces + 2 waste strips
        assert_eq!(dxf.matches("SOLID\n").count(), 11);
        // 4 boundary + 3 vertical + 3 horizontal cuts
        assert_eq!(dxf.matches("LINE\n").count(), 10);
        assert_eq!(dxf.matches("30 x 30").count(), 9);
    }

    #[test]
    fn test_dxf_no_pieces() {
        let dxf = render(100.0, 100.0, 150.0, 30.0);
        assert_eq!(dxf.matches("SOLID\n").count(), 1);
        assert_eq!(dxf.matches("LINE\n").count(), 4);
        assert_eq!(dxf.matches("TEXT\n").count(), 0);
    }

    #[test]
    fn test_dxf_huge_grid_is_refused() {
        let main = PanelSpec::new(100_000.0, 100_000.0);
        let cut = CutSpec::new(1.0, 1.0);
        let layout = compute_layout(&main, &cut);
        let result = render_dxf(&build_diagram(&main, &cut, &layout));
        assert!(matches!(
            result,
            Err(crate::CalcError::GridTooLarge { .. })
        ));
    }
}
