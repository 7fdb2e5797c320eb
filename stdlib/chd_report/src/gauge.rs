//! Semicircular probability gauge as inline SVG

use crate::theme::{FONT_FAMILY, GAUGE_BORDER, GAUGE_TICK, TEXT_PRIMARY};
use chd_risk::RiskTier;
use std::f64::consts::PI;

const WIDTH: f64 = 360.0;
const HEIGHT: f64 = 220.0;
const CX: f64 = 180.0;
const CY: f64 = 185.0;
const R_OUTER: f64 = 150.0;
const R_INNER: f64 = 100.0;
const BAR_OUTER: f64 = 137.0;
const BAR_INNER: f64 = 113.0;
const TICK_STEP: usize = 20;

/// Point on the gauge arc for a value in [0, 100]; 0 is on the left, 100 on the right.
pub fn polar(radius: f64, value: f64) -> (f64, f64) {
    let theta = PI * (1.0 - value.clamp(0.0, 100.0) / 100.0);
    (CX + radius * theta.cos(), CY - radius * theta.sin())
}

/// Closed annular sector between two gauge values
fn sector_path(r_inner: f64, r_outer: f64, from: f64, to: f64) -> String {
    let (x0, y0) = polar(r_outer, from);
    let (x1, y1) = polar(r_outer, to);
    let (x2, y2) = polar(r_inner, to);
    let (x3, y3) = polar(r_inner, from);
    format!(
        "M{x0:.2},{y0:.2} A{r_outer},{r_outer} 0 0,1 {x1:.2},{y1:.2} \
         L{x2:.2},{y2:.2} A{r_inner},{r_inner} 0 0,0 {x3:.2},{y3:.2} Z"
    )
}

/// Render the gauge for a probability in percent, coloured by its tier.
pub fn render_gauge_svg(probability: f64, tier: RiskTier) -> String {
    let mut steps = String::new();
    for band in RiskTier::ALL {
        let (from, to) = band.range();
        steps.push_str(&format!(
            r##"<path d="{}" fill="{}"/>"##,
            sector_path(R_INNER, R_OUTER, from, to),
            band.band_color()
        ));
    }

    let bar = if probability > 0.0 {
        format!(
            r##"<path d="{}" fill="{}"/>"##,
            sector_path(BAR_INNER, BAR_OUTER, 0.0, probability),
            tier.severity_color()
        )
    } else {
        String::new()
    };

    let mut ticks = String::new();
    for value in (0..=100).step_by(TICK_STEP) {
        let v = value as f64;
        let (x0, y0) = polar(R_OUTER, v);
        let (x1, y1) = polar(R_OUTER + 6.0, v);
        let (lx, ly) = polar(R_OUTER + 18.0, v);
        ticks.push_str(&format!(
            r##"<line x1="{x0:.2}" y1="{y0:.2}" x2="{x1:.2}" y2="{y1:.2}" stroke="{GAUGE_TICK}" stroke-width="1"/><text x="{lx:.2}" y="{ly:.2}" text-anchor="middle" font-size="11" fill="{GAUGE_TICK}">{value}</text>"##
        ));
    }

    let (bx0, by0) = polar(R_OUTER, 0.0);
    let (bx1, by1) = polar(R_OUTER, 100.0);

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" width="100%" height="300" font-family="{FONT_FAMILY}" role="img" aria-label="10-year CHD probability {probability:.1} percent">
  <rect width="{WIDTH}" height="{HEIGHT}" fill="white"/>
  {steps}
  <path d="M{bx0:.2},{by0:.2} A{R_OUTER},{R_OUTER} 0 0,1 {bx1:.2},{by1:.2}" fill="none" stroke="{GAUGE_BORDER}" stroke-width="2"/>
  {bar}
  {ticks}
  <text x="{CX}" y="{ny:.2}" text-anchor="middle" font-size="40" font-weight="700" fill="{TEXT_PRIMARY}">{probability:.1}</text>
</svg>"##,
        ny = CY - 12.0,
    )
}
