//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects. Diagnostics go through `tracing`; this
//! module is only the user-facing summary.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! Orders
//! 001 ORD-12345 → commande/ORD-12345/index.html
//! Assets: 2 files copied
//! Content → content.json
//!
//! Generated 2 pages (1 order page)
//! ```
//!
//! ## Check
//!
//! ```text
//! Config
//!     Site: Souk-Moussel
//!     Remote image origins
//!         https://images.unsplash.com:*/**
//! Content
//!     4 modules, 4 features, 3 testimonials
//! Images
//!     4 checked, 0 rejected
//! ```

use crate::config::SiteConfig;
use crate::content::{FEATURES, MODULES, TESTIMONIALS};
use crate::generate::GenerateReport;
use crate::images::{ImageError, RemotePattern};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// One-line form of a remote pattern, `*` standing in for omitted parts.
pub fn describe_pattern(pattern: &RemotePattern) -> String {
    let port = match pattern.port.as_deref() {
        None => ":*".to_string(),
        Some("") => String::new(),
        Some(p) => format!(":{p}"),
    };
    format!(
        "{}://{}{}{}",
        pattern.protocol.as_deref().unwrap_or("*"),
        pattern.hostname,
        port,
        pattern.pathname.as_deref().unwrap_or("/**"),
    )
}

// ============================================================================
// Build
// ============================================================================

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Home → index.html".to_string());

    if !report.orders.is_empty() {
        lines.push("Orders".to_string());
        for (i, (id, path)) in report.orders.iter().enumerate() {
            lines.push(format!("{} {} → {}", format_index(i + 1), id, path));
        }
    }

    if report.assets_copied > 0 {
        lines.push(format!(
            "Assets: {} copied",
            plural(report.assets_copied, "file")
        ));
    }
    lines.push("Content → content.json".to_string());
    if report.headers_written {
        lines.push("Headers → _headers".to_string());
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} ({})",
        plural(report.pages.len(), "page"),
        plural(report.orders.len(), "order page")
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(
    site: &SiteConfig,
    checked: usize,
    rejected: &[ImageError],
) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Config".to_string());
    lines.push(format!("{}Site: {}", indent(1), site.site_name));
    lines.push(format!(
        "{}X-Powered-By: {}",
        indent(1),
        if site.http.powered_by_header { "on" } else { "off" }
    ));
    lines.push(format!("{}Remote image origins", indent(1)));
    if site.images.remote_patterns.is_empty() {
        lines.push(format!("{}(none)", indent(2)));
    }
    for pattern in &site.images.remote_patterns {
        lines.push(format!("{}{}", indent(2), describe_pattern(pattern)));
    }

    lines.push("Content".to_string());
    lines.push(format!(
        "{}{}, {}, {}",
        indent(1),
        plural(MODULES.len(), "module"),
        plural(FEATURES.len(), "feature"),
        plural(TESTIMONIALS.len(), "testimonial")
    ));

    lines.push("Images".to_string());
    lines.push(format!(
        "{}{} checked, {} rejected",
        indent(1),
        checked,
        rejected.len()
    ));
    for err in rejected {
        lines.push(format!("{}✗ {}", indent(2), err));
    }
    lines
}

pub fn print_check_output(site: &SiteConfig, checked: usize, rejected: &[ImageError]) {
    for line in format_check_output(site, checked, rejected) {
        println!("{}", line);
    }
}
