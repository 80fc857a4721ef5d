//! Dashboard page - Leptos SSR
//!
//! Single-page analyzer: URL input, device-class select, and the probe
//! result box filled in by the embedded script.

use super::{DASHBOARD_SCRIPT, DASHBOARD_STYLES};
use crate::AppState;
use axum::extract::State;
use axum::response::Html;
use leptos::prelude::*;
use reactive_graph::owner::Owner;

/// Dashboard page component
#[component]
fn DashboardPage() -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
                <title>"Streamprobe - Stream Analyzer"</title>
                <style>{DASHBOARD_STYLES}</style>
            </head>
            <body>
                <h2>"📡 Advanced Stream Analyzer"</h2>
                <form id="probe-form">
                    <input
                        type="text"
                        id="stream-url"
                        placeholder="Enter video URL (YouTube, HLS, MP4)..."
                    />
                    <br/>
                    <select id="device">
                        <option value="desktop">"Desktop"</option>
                        <option value="mobile">"Mobile"</option>
                        <option value="smart_tv">"Smart TV"</option>
                    </select>
                    <br/>
                    <button type="submit">"Analyze"</button>
                </form>
                <div class="status-box" id="status">
                    <p class="metric">"Stream status will appear here..."</p>
                </div>
                <script>{DASHBOARD_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Axum handler for the dashboard page
pub async fn dashboard_page(State(_state): State<AppState>) -> Html<String> {
    let owner = Owner::new_root(None);
    let html = owner.with(|| view! { <DashboardPage/> }.into_view().to_html());
    Html(format!("<!DOCTYPE html>{html}"))
}
