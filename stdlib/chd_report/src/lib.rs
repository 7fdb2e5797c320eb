//! Presentation layer for CHD risk assessments.
//!
//! Everything here renders to `String`: a self-contained HTML dashboard
//! with inline SVG charts, a plain-text terminal report, and JSON.

pub mod bars;
pub mod content;
pub mod gauge;
pub mod html;
pub mod text;
pub mod theme;

pub use bars::{importance_bars, render_importance_svg, ImportanceBar};
pub use content::Branding;
pub use gauge::render_gauge_svg;
pub use html::{render_dashboard, DashboardView};
pub use text::{render_about_text, render_json_report, render_model_text, render_text_report};
