//! Report generation.
//!
//! This module renders an [`AreaReport`] as plain text or JSON. The text
//! report always ends with the `Total Area: ...` line.

use crate::models::{AreaReport, AreaSummary, ShapeEntry};
use anyhow::{Context, Result};
use std::path::Path;

/// Options controlling the text report.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    /// Fixed number of decimals; shortest round-trip form when `None`.
    pub precision: Option<usize>,
    /// Include per-shape and per-kind sections.
    pub breakdown: bool,
}

/// Format an area value.
pub fn format_area(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{:.*}", digits, value),
        None => format!("{}", value),
    }
}

/// Generate the text report.
pub fn generate_text_report(report: &AreaReport, options: &TextOptions) -> String {
    let mut output = String::new();

    if options.breakdown {
        output.push_str(&generate_shapes_section(&report.shapes, options.precision));
        output.push_str(&generate_kind_section(&report.summary, options.precision));
    }

    output.push_str(&format!(
        "Total Area: {}\n",
        format_area(report.summary.total, options.precision)
    ));

    output
}

/// Generate the per-shape listing.
fn generate_shapes_section(shapes: &[ShapeEntry], precision: Option<usize>) -> String {
    let mut section = format!("Shapes ({}):\n", shapes.len());

    if shapes.is_empty() {
        section.push_str("  (none)\n");
    }

    for entry in shapes {
        section.push_str(&format!(
            "  - {}: {}\n",
            entry.label,
            format_area(entry.area, precision)
        ));
    }

    section.push('\n');
    section
}

/// Generate per-kind subtotals.
fn generate_kind_section(summary: &AreaSummary, precision: Option<usize>) -> String {
    if summary.by_kind.is_empty() {
        return String::new();
    }

    let mut section = String::from("By kind:\n");

    for (kind, area) in &summary.by_kind {
        section.push_str(&format!("  - {}: {}\n", kind, format_area(*area, precision)));
    }

    section.push('\n');
    section
}

/// Generate a JSON report.
pub fn generate_json_report(report: &AreaReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Write rendered report content to a file.
pub fn write_report(content: &str, path: &Path) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn create_test_report() -> AreaReport {
        let shapes = vec![
            ShapeEntry {
                label: "rectangle 2x3".to_string(),
                kind: "rectangle".to_string(),
                area: 6.0,
            },
            ShapeEntry {
                label: "circle r=1".to_string(),
                kind: "circle".to_string(),
                area: PI,
            },
        ];

        let mut summary = AreaSummary {
            count: 2,
            total: 6.0 + PI,
            ..Default::default()
        };
        summary.by_kind.insert("rectangle".to_string(), 6.0);
        summary.by_kind.insert("circle".to_string(), PI);

        AreaReport::new(shapes, summary)
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(6.0, None), "6");
        assert_eq!(format_area(6.0, Some(2)), "6.00");
        assert_eq!(format_area(PI, Some(3)), "3.142");
        assert_eq!(format_area(0.0, None), "0");
    }

    #[test]
    fn test_generate_text_report_total_only() {
        let report = create_test_report();
        let text = generate_text_report(&report, &TextOptions::default());
        assert_eq!(text, "Total Area: 9.141592653589793\n");
    }

    #[test]
    fn test_generate_text_report_with_breakdown() {
        let report = create_test_report();
        let options = TextOptions {
            precision: Some(2),
            breakdown: true,
        };
        let text = generate_text_report(&report, &options);

        assert!(text.starts_with("Shapes (2):\n"));
        assert!(text.contains("  - rectangle 2x3: 6.00\n"));
        assert!(text.contains("  - circle r=1: 3.14\n"));
        assert!(text.contains("By kind:\n  - circle: 3.14\n  - rectangle: 6.00\n"));
        assert!(text.ends_with("Total Area: 9.14\n"));
    }

    #[test]
    fn test_generate_text_report_empty() {
        let report = AreaReport::new(Vec::new(), AreaSummary::default());
        let options = TextOptions {
            precision: None,
            breakdown: true,
        };
        let text = generate_text_report(&report, &options);

        assert_eq!(text, "Shapes (0):\n  (none)\n\nTotal Area: 0\n");
    }

    #[test]
    fn test_generate_json_report() {
        let report = create_test_report();
        let json = generate_json_report(&report).unwrap();
        assert!(json.contains("\"generated_at\""));
        assert!(json.contains("\"shape_count\": 2"));
        assert!(json.contains("\"by_kind\""));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["shapes"][0]["kind"], "rectangle");
        assert_eq!(value["summary"]["total"], 6.0 + PI);
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        write_report("Total Area: 6\n", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Total Area: 6\n");
    }
}
