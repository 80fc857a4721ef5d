//! Leptos SSR UI components
//!
//! Server-rendered HTML pages with embedded JavaScript for interactivity.

pub mod dashboard;

/// CSS styles for the dashboard
pub const DASHBOARD_STYLES: &str = include_str!("styles/dashboard.css");

/// JavaScript for dashboard interactivity (probe form + result rendering)
pub const DASHBOARD_SCRIPT: &str = include_str!("scripts/dashboard.js");
