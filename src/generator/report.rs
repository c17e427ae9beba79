//! Plain-text result report.

use crate::config::Unit;
use crate::model::{CostResult, InventoryEntry, LayoutResult};
use std::fmt::Write;

/// Text report writer.
pub struct ReportWriter {
    /// Currency symbol put before amounts.
    currency: String,
    /// Unit of the panel dimensions.
    unit: Unit,
    /// Output buffer.
    buffer: String,
}

impl ReportWriter {
    /// Create a new report writer.
    pub fn new(currency: impl Into<String>, unit: Unit) -> Self {
        Self {
            currency: currency.into(),
            unit,
            buffer: String::new(),
        }
    }

    /// Get the generated report.
    pub fn output(&self) -> &str {
        &self.buffer
    }

    /// Take the generated report.
    pub fn take_output(self) -> String {
        self.buffer
    }

    /// Write a line.
    pub fn write_line(&mut self, content: &str) {
        let _ = writeln!(self.buffer, "{}", content);
    }

    /// Write a section heading.
    pub fn write_heading(&mut self, title: &str) {
        let _ = writeln!(self.buffer, "### {}", title);
    }

    /// Write a labelled value.
    pub fn write_value(&mut self, label: &str, value: impl std::fmt::Display) {
        let _ = writeln!(self.buffer, "{}: {}", label, value);
    }

    /// Write a labelled currency amount.
    pub fn write_amount(&mut self, label: &str, amount: f64) {
        let formatted = format_amount(&self.currency, amount);
        self.write_value(label, formatted);
    }

    /// Write the layout and cost results of one job.
    pub fn write_results(&mut self, layout: &LayoutResult, cost: &CostResult) {
        let area_label = self.unit.area_label();

        self.write_heading("Results");
        self.write_value(
            "Pieces per main panel",
            format!(
                "{} ({} x {})",
                layout.total_pieces, layout.per_row, layout.per_column
            ),
        );
        self.write_value(
            "Total quantity of smaller panels (before discard)",
            cost.total_pieces,
        );
        self.write_value(
            "Total good panels (after defects)",
            cost.whole_good_pieces(),
        );
        self.write_value(
            "Remaining unused area (per main panel)",
            format!(
                "{:.2} {}",
                layout.leftover_area / self.unit.area_divisor(),
                area_label
            ),
        );
        self.write_value(
            "Cutting waste percentage",
            format!("{:.2}%", cost.cutting_waste_percent),
        );
        self.write_amount(
            &format!("Cost per {} (of smaller panel)", area_label),
            cost.cost_per_area_of_cut_piece,
        );
        self.write_amount("Cost per single good panel", cost.cost_per_good_piece);
        self.write_amount(
            "Total cost (including additional costs and cutting waste)",
            cost.adjusted_cost,
        );
    }

    /// Write the stored inventory, one entry per line.
    pub fn write_inventory(&mut self, entries: &[InventoryEntry]) {
        self.write_heading("Inventory");
        if entries.is_empty() {
            self.write_line("(no entries)");
            return;
        }

        for (idx, entry) in entries.iter().enumerate() {
            let _ = writeln!(
                self.buffer,
                "{:>3}. {} | {} | {} | qty {} | {}/{} | total {} | {} pieces, {} good",
                idx + 1,
                entry.date,
                entry.name,
                entry.dimensions,
                entry.quantity,
                format_amount(&self.currency, entry.cost_per_area),
                entry.unit.area_label(),
                format_amount(&self.currency, entry.total_cost),
                entry.total_pieces,
                entry.good_pieces
            );
        }
    }
}

/// Format a currency amount with two decimals.
pub fn format_amount(currency: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", currency, -amount)
    } else {
        format!("{}{:.2}", currency, amount)
    }
}
