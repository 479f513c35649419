//! Fixed-width text report of the accepted results
//!
//! ```text
//! element name     weight   price         result
//! A                     1      10         750000
//! Sum of weight fields: 1
//! Sum of price fields: 10
//! ```

mod number;

pub use number::format_general;

use crate::scoring::ScoredItem;
use std::io::Write;
use std::path::Path;

/// Line written instead of the table when nothing was accepted
pub const NO_RESULTS: &str = "there are no results";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Append the weight and price sums after the rows
    pub include_totals: bool,
}

/// Render results (already in ascending score order) as report text
pub fn render_report(results: &[ScoredItem], options: ReportOptions) -> String {
    if results.is_empty() {
        return format!("{}\n", NO_RESULTS);
    }

    let mut out = format!(
        "{:<15}{:>8}{:>8}{:>15}\n",
        "element name", "weight", "price", "result"
    );

    let mut weight_sum = 0.0;
    let mut price_sum = 0.0;
    for scored in results {
        let item = scored.item();
        weight_sum += item.weight();
        price_sum += item.price();

        out.push_str(&format!(
            "{:<15}{:>8}{:>8}{:>15}\n",
            item.name(),
            format_general(item.weight()),
            format_general(item.price()),
            format_general(scored.score())
        ));
    }

    if options.include_totals {
        out.push_str(&format!(
            "Sum of weight fields: {}\n",
            format_general(weight_sum)
        ));
        out.push_str(&format!("Sum of price fields: {}\n", format_general(price_sum)));
    }

    out
}

/// Write report text to `path`, or to stdout when no path is given
pub async fn write_report(path: Option<&Path>, report: &str) -> std::io::Result<()> {
    match path {
        Some(path) => {
            tokio::fs::write(path, report).await?;
            log::info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Item;

    fn scored(name: &str, weight: f64, price: f64, score: f64) -> ScoredItem {
        ScoredItem::admit(Item::new(name, weight, price), score).unwrap()
    }

    #[test]
    fn test_empty_results_render_placeholder_only() {
        let options = ReportOptions {
            include_totals: true,
        };
        assert_eq!(render_report(&[], options), "there are no results\n");
    }

    #[test]
    fn test_rows_use_fixed_columns() {
        let report = render_report(
            &[scored("A", 1.0, 10.0, 750000.0)],
            ReportOptions::default(),
        );

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "element name     weight   price         result",
                "A                     1      10         750000",
            ]
        );
    }

    #[test]
    fn test_totals_sum_reported_rows() {
        let results = [
            scored("small", 1.5, 2.0, 0.25),
            scored("large", 2.0, 20.0, 1.5e6),
        ];
        let report = render_report(
            &results,
            ReportOptions {
                include_totals: true,
            },
        );

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1].trim_end(), "small               1.5       2           0.25");
        assert_eq!(lines[2].trim_end(), "large                 2      20        1.5e+06");
        assert_eq!(lines[3], "Sum of weight fields: 3.5");
        assert_eq!(lines[4], "Sum of price fields: 22");
    }

    #[test]
    fn test_long_names_are_not_truncated() {
        let report = render_report(
            &[scored("a-very-long-element", 1.0, 2.0, 3.0)],
            ReportOptions::default(),
        );
        assert!(report.contains("a-very-long-element       1       2              3"));
    }

    #[test]
    fn test_infinite_score_renders_as_inf() {
        let report = render_report(&[scored("Z", 0.0, 0.0, f64::INFINITY)], ReportOptions::default());
        assert!(report.lines().nth(1).unwrap().ends_with("inf"));
    }

    #[tokio::test]
    async fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.txt");

        write_report(Some(&path), "there are no results\n")
            .await
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "there are no results\n");
    }
}
