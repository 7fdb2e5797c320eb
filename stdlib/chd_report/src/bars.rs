//! Horizontal bar chart of the strongest model coefficients

use crate::html::escape;
use crate::theme::{ACCENT, BORDER, FONT_FAMILY, GRID, NEGATIVE_BAR, TEXT_MUTED, TEXT_PRIMARY};
use chd_model::LogisticModel;
use chd_risk::domain::domain_for;
use serde::Serialize;

/// Number of factors shown in the importance chart
pub const TOP_FACTORS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportanceBar {
    pub label: String,
    pub weight: f64,
}

/// The `n` strongest coefficients of the model, with display labels
pub fn importance_bars(model: &LogisticModel, n: usize) -> Vec<ImportanceBar> {
    model
        .top_coefficients(n)
        .into_iter()
        .map(|c| ImportanceBar {
            label: domain_for(&c.feature)
                .map(|d| d.short_label.to_string())
                .unwrap_or(c.feature),
            weight: c.weight,
        })
        .collect()
}

pub fn render_importance_svg(bars: &[ImportanceBar]) -> String {
    let width = 640.0;
    let height = 300.0;
    let margin_left = 150.0;
    let margin_right = 50.0;
    let margin_top = 50.0;
    let margin_bottom = 30.0;
    let chart_width: f64 = width - margin_left - margin_right;
    let chart_height: f64 = height - margin_top - margin_bottom;

    let max = bars
        .iter()
        .map(|b| b.weight.abs())
        .fold(0.0_f64, f64::max)
        .max(f64::EPSILON);
    let row = chart_height / bars.len().max(1) as f64;

    let mut grid = String::new();
    for i in 0..=4 {
        let frac = i as f64 / 4.0;
        let x = margin_left + frac * chart_width;
        grid.push_str(&format!(
            r##"<line x1="{x:.1}" y1="{margin_top}" x2="{x:.1}" y2="{:.1}" stroke="{GRID}" stroke-width="1"/><text x="{x:.1}" y="{:.1}" text-anchor="middle" font-size="10" fill="{TEXT_MUTED}">{:.2}</text>"##,
            height - margin_bottom,
            height - margin_bottom + 16.0,
            frac * max
        ));
    }

    let mut rows = String::new();
    for (i, bar) in bars.iter().enumerate() {
        let y = margin_top + i as f64 * row;
        let len = bar.weight.abs() / max * chart_width;
        let fill = if bar.weight >= 0.0 { ACCENT } else { NEGATIVE_BAR };
        let mid = y + row / 2.0;
        rows.push_str(&format!(
            r##"<text x="{:.1}" y="{:.1}" text-anchor="end" dominant-baseline="middle" font-size="12" fill="{TEXT_PRIMARY}">{}</text><rect x="{margin_left}" y="{:.1}" width="{len:.1}" height="{:.1}" fill="{fill}"/><text x="{:.1}" y="{mid:.1}" dominant-baseline="middle" font-size="11" fill="{TEXT_PRIMARY}">{:.3}</text>"##,
            margin_left - 8.0,
            mid,
            escape(&bar.label),
            y + row * 0.15,
            row * 0.7,
            margin_left + len + 6.0,
            bar.weight
        ));
    }

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="100%" height="{height}" font-family="{FONT_FAMILY}" role="img" aria-label="Top predictive risk factors">
  <rect width="{width}" height="{height}" fill="white"/>
  <text x="{margin_left}" y="24" font-size="14" font-weight="600" fill="{TEXT_PRIMARY}">Top {} Predictive Risk Factors</text>
  {grid}
  <line x1="{margin_left}" y1="{margin_top}" x2="{margin_left}" y2="{axis_bottom}" stroke="{BORDER}" stroke-width="1"/>
  {rows}
</svg>"##,
        bars.len(),
        axis_bottom = height - margin_bottom
    )
}
