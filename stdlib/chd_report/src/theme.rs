//! Palette and stylesheet of the dashboard

pub const TEXT_PRIMARY: &str = "#0f172a";
pub const TEXT_SECONDARY: &str = "#475569";
pub const TEXT_MUTED: &str = "#64748b";
pub const ACCENT: &str = "#3b82f6";
pub const BORDER: &str = "#e2e8f0";
pub const GRID: &str = "#f1f5f9";
pub const GAUGE_TICK: &str = "#334155";
pub const GAUGE_BORDER: &str = "#cbd5e1";
pub const NEGATIVE_BAR: &str = "#94a3b8";
pub const FONT_FAMILY: &str = "Inter, system-ui, -apple-system, sans-serif";

pub const GLOBAL_CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap');

html, body {
  margin: 0;
  font-family: 'Inter', system-ui, -apple-system, sans-serif;
  color: #1e293b;
  background-color: #f8fafc;
}

h1, h2, h3 {
  color: #0f172a;
  font-weight: 700;
  letter-spacing: -0.025em;
}

.app {
  display: grid;
  grid-template-columns: 280px 1fr;
  min-height: 100vh;
}

.sidebar {
  background-color: #ffffff;
  border-right: 1px solid #e2e8f0;
  padding: 2rem 1.5rem;
}

.sidebar hr {
  border: none;
  border-top: 1px solid #e2e8f0;
  margin: 1.5rem 0;
}

.caption {
  color: #64748b;
  font-size: 0.8rem;
  margin: 0.25rem 0;
}

.main {
  padding: 2rem 3rem;
}

.dashboard-header {
  background-color: #ffffff;
  padding: 1.5rem 2rem;
  border-radius: 12px;
  border: 1px solid #e2e8f0;
  box-shadow: 0 1px 3px 0 rgba(0, 0, 0, 0.01), 0 1px 2px 0 rgba(0, 0, 0, 0.06);
  margin-bottom: 2rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.header-title {
  font-size: 1.875rem;
  color: #0f172a;
  margin: 0;
}

.header-subtitle {
  color: #64748b;
  font-size: 0.875rem;
  margin-top: 0.5rem;
}

.creator-tag {
  background-color: #f1f5f9;
  padding: 0.5rem 1rem;
  border-radius: 9999px;
  color: #475569;
  font-size: 0.75rem;
  font-weight: 500;
  border: 1px solid #e2e8f0;
}

.tabs {
  display: flex;
  gap: 2rem;
  border-bottom: 1px solid #e2e8f0;
  margin-bottom: 1.5rem;
}

.tabs a {
  color: #64748b;
  padding-bottom: 1rem;
  text-decoration: none;
}

.tabs a:hover {
  color: #2563eb;
  border-bottom: 2px solid #2563eb;
}

.columns-3 {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
}

.columns-1-2 {
  display: grid;
  grid-template-columns: 1fr 2fr;
  gap: 1.5rem;
  align-items: center;
}

.input-card {
  background-color: #ffffff;
  padding: 1.5rem;
  border-radius: 8px;
  border: 1px solid #e2e8f0;
  box-shadow: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  height: 100%;
}

.section-title {
  color: #3b82f6;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  font-size: 0.75rem;
  font-weight: 600;
  margin-bottom: 1rem;
  border-bottom: 2px solid #f1f5f9;
  padding-bottom: 0.5rem;
}

.field {
  display: flex;
  justify-content: space-between;
  font-size: 0.875rem;
  padding: 0.35rem 0;
}

.field-label {
  color: #475569;
  font-weight: 500;
}

.field-value {
  color: #0f172a;
  font-weight: 600;
}

.report-container {
  border-top: 4px solid #3b82f6;
  background-color: white;
  padding: 2rem;
  border-radius: 8px;
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
}

.risk-label {
  font-size: 0.875rem;
  color: #475569;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  font-weight: 600;
}

.risk-value {
  font-size: 3.5rem;
  font-weight: 700;
  margin: 0;
}

.risk-tier {
  font-weight: 600;
  font-size: 1.2rem;
  margin-top: 0;
}

.risk-recommendation {
  color: #64748b;
  margin-top: 1rem;
  font-size: 0.95rem;
}

.metric {
  background-color: #ffffff;
  border: 1px solid #e2e8f0;
  border-radius: 8px;
  padding: 1rem 1.5rem;
}

.metric-label {
  color: #64748b;
  font-size: 0.875rem;
}

.metric-value {
  font-size: 1.5rem;
  color: #0f172a;
  font-weight: 600;
}

.metric-delta {
  font-size: 0.8rem;
  color: #64748b;
}

.metric-delta.up { color: #059669; }
.metric-delta.down { color: #dc2626; }

.info {
  background-color: #eff6ff;
  border: 1px solid #bfdbfe;
  color: #1e40af;
  border-radius: 6px;
  padding: 0.75rem 1rem;
  font-size: 0.875rem;
}

.error-banner {
  background-color: #fef2f2;
  border: 1px solid #fecaca;
  color: #991b1b;
  border-radius: 6px;
  padding: 1rem 1.25rem;
  font-weight: 500;
}

.footer {
  border-top: 1px solid #e2e8f0;
  margin-top: 3rem;
  padding-top: 1.5rem;
  text-align: center;
  color: #94a3b8;
  font-size: 0.875rem;
}
"#;
