//! Diagram and report generators.

mod diagram;
mod dxf;
mod report;
mod svg_export;

pub use diagram::{build_diagram, Diagram, Rect};
pub use dxf::{render_dxf, DxfWriter};
pub use report::{format_amount, ReportWriter};
pub use svg_export::{render_svg, SvgTheme, GRAY_THEME, PAPER_THEME};
