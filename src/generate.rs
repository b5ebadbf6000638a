//! HTML site generation.
//!
//! Renders the storefront pages with [maud](https://maud.lambda.xyz/) and
//! writes them to the output directory.
//!
//! ## Generated Pages
//!
//! - **Landing page** (`/index.html`): hero, marketplace modules, feature
//!   highlights and testimonials, all from [`crate::content`]
//! - **Order confirmation** (`/commande/{id}/index.html`): one per order id
//!   passed on the command line
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── content.json               # Exported content tables
//! ├── _headers                   # Only with http.powered_by_header = true
//! ├── commande/
//! │   └── ORD-12345/
//! │       └── index.html
//! └── images/ ...                # Copied from assets_dir
//! ```
//!
//! ## CSS
//!
//! `static/style.css` is embedded at compile time and prefixed with the color
//! custom properties generated from config. Every page inlines the result, so
//! the output has no stylesheet to keep in sync.
//!
//! Rendering functions are pure: same inputs, same markup. Only
//! [`generate`] touches the filesystem.

use crate::components::{FeatureHighlight, icons};
use crate::config::{self, HttpConfig, SiteConfig};
use crate::content::{self, MODULES, TESTIMONIALS};
use crate::images::{self, ImageError};
use crate::routes::{BACK_TO_CATALOG, CATALOG_PATH, HOME, HOME_PATH};
use crate::types::OrderId;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Image error: {0}")]
    Image(#[from] ImageError),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Asset path error: {0}")]
    AssetPath(#[from] std::path::StripPrefixError),
    #[error("order id {0:?} cannot be used as an output directory name")]
    UnsafeOrderPath(String),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Value of the `X-Powered-By` header when enabled.
pub const POWERED_BY: &str = "souk-moussel";

/// What a [`generate`] run wrote, relative to the output directory.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    /// Landing page first, then order pages in argument order.
    pub pages: Vec<String>,
    pub orders: Vec<(OrderId, String)>,
    pub assets_copied: usize,
    pub headers_written: bool,
}

/// Full stylesheet: config colors followed by the embedded base styles.
pub fn site_css(site: &SiteConfig) -> String {
    format!("{}\n\n{}", config::generate_color_css(&site.colors), CSS_STATIC)
}

/// Render the whole site into `output_dir`.
///
/// Content images are checked against `images.remote_patterns` first; a
/// disallowed origin aborts before anything is written. Static assets are
/// copied before pages so generated files take precedence.
pub fn generate(
    site: &SiteConfig,
    config_dir: &Path,
    output_dir: &Path,
    orders: &[OrderId],
) -> Result<GenerateReport, GenerateError> {
    if let Some(err) = images::rejected_images(content::image_refs(), &site.images.remote_patterns)
        .into_iter()
        .next()
    {
        return Err(err.into());
    }

    // Resolve order directories up front so a bad id fails before any write.
    let order_dirs = orders
        .iter()
        .map(|id| order_output_dir(id).map(|dir| (id.clone(), dir)))
        .collect::<Result<Vec<_>, _>>()?;

    fs::create_dir_all(output_dir)?;
    let mut report = GenerateReport {
        output_dir: output_dir.to_path_buf(),
        ..Default::default()
    };

    report.assets_copied = copy_assets(&config_dir.join(&site.assets_dir), output_dir)?;

    let css = site_css(site);

    let landing = render_landing(site, &css);
    write_page(output_dir, "index.html", landing, &mut report)?;

    for (id, dir) in order_dirs {
        let rel = format!("{}/index.html", dir.display());
        fs::create_dir_all(output_dir.join(&dir))?;
        let page = render_order_confirmation(&id, site, &css);
        write_page(output_dir, &rel, page, &mut report)?;
        report.orders.push((id, rel));
    }

    fs::write(output_dir.join("content.json"), content::export_json()?)?;
    info!("wrote content.json");

    match render_headers(&site.http) {
        Some(headers) => {
            fs::write(output_dir.join("_headers"), headers)?;
            report.headers_written = true;
            info!("wrote _headers");
        }
        None => debug!("no response headers to emit"),
    }

    Ok(report)
}

fn write_page(
    output_dir: &Path,
    rel: &str,
    page: Markup,
    report: &mut GenerateReport,
) -> Result<(), GenerateError> {
    fs::write(output_dir.join(rel), page.into_string())?;
    info!(page = rel, "wrote page");
    report.pages.push(rel.to_string());
    Ok(())
}

/// Relative directory for an order page: `commande/<id>`.
///
/// The id is shown verbatim on the page, but as a directory name it has to be
/// one plain path segment.
pub fn order_output_dir(id: &OrderId) -> Result<PathBuf, GenerateError> {
    let segment = id.as_str();
    let unsafe_segment = segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment.contains(['/', '\\'])
        || segment.chars().any(char::is_control);
    if unsafe_segment {
        return Err(GenerateError::UnsafeOrderPath(segment.to_string()));
    }
    Ok(Path::new("commande").join(segment))
}

/// Copy `assets_dir` into `output_dir`, returning the number of files copied.
///
/// A missing directory is not an error.
fn copy_assets(assets_dir: &Path, output_dir: &Path) -> Result<usize, GenerateError> {
    if !assets_dir.is_dir() {
        debug!(dir = %assets_dir.display(), "no assets directory");
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(assets_dir).min_depth(1) {
        let entry = entry?;
        let dst = output_dir.join(entry.path().strip_prefix(assets_dir)?);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst)?;
        } else {
            fs::copy(entry.path(), &dst)?;
            copied += 1;
        }
    }
    info!(count = copied, "copied assets");
    Ok(copied)
}

/// `_headers` file for static hosts, or `None` when there is nothing to emit.
pub fn render_headers(http: &HttpConfig) -> Option<String> {
    http.powered_by_header
        .then(|| format!("/*\n  X-Powered-By: {POWERED_BY}\n"))
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Landing page built from the static content tables.
pub fn render_landing(site: &SiteConfig, css: &str) -> Markup {
    let content = html! {
        header.site-header {
            a.site-name href=(HOME_PATH) { (site.site_name) }
            nav.site-nav {
                a href="#modules" { "Nos services" }
                a href="#avantages" { "Avantages" }
                a.btn.btn-primary href=(CATALOG_PATH) { "Voir le catalogue" }
            }
        }
        main.landing {
            section.hero {
                h1 { "Le marché agricole, de la ferme à votre porte" }
                p.hero-subtitle {
                    "Producteurs, acheteurs et prestataires réunis sur une seule plateforme."
                }
                a.btn.btn-primary href=(CATALOG_PATH) { "Commencer mes achats" }
            }
            section.modules id="modules" {
                h2 { "Nos services" }
                div.module-grid {
                    @for module in MODULES {
                        a.module-card href=(module.href) {
                            img src=(module.image) alt=(module.title) loading="lazy";
                            h3 { (module.title) }
                            p { (module.description) }
                        }
                    }
                }
            }
            section.features id="avantages" {
                h2 { "Pourquoi " (site.site_name) " ?" }
                div.feature-grid {
                    @for feature in content::FEATURES {
                        (FeatureHighlight::from(feature))
                    }
                }
            }
            section.testimonials {
                h2 { "Ils nous font confiance" }
                div.testimonial-grid {
                    @for t in TESTIMONIALS {
                        figure.testimonial {
                            blockquote { (t.quote) }
                            figcaption {
                                span.testimonial-author { (t.author) }
                                span.testimonial-role { (t.role) }
                            }
                        }
                    }
                }
            }
        }
        footer.site-footer {
            p { "© " (site.site_name) }
        }
    };

    base_document(&site.site_name, css, Some("landing-page"), content)
}

/// Confirmation page for an order placed upstream.
///
/// The id is displayed verbatim in the badge, whatever it contains. The page
/// carries exactly two links: back to the catalog and home.
pub fn render_order_confirmation(id: &OrderId, site: &SiteConfig, css: &str) -> Markup {
    let content = html! {
        header.site-header {
            span.site-name { (site.site_name) }
        }
        main.order-confirmation {
            div.confirmation-card {
                div.success-indicator {
                    (icons::check_circle(Some("success-icon")))
                }
                h1.confirmation-title { "Commande confirmée !" }
                p.confirmation-message {
                    "Merci pour votre commande. Elle a bien été enregistrée."
                }
                p.order-number {
                    "Numéro de commande : "
                    span.order-badge { (id.as_str()) }
                }
                p.follow-up {
                    "Vous recevrez un e-mail récapitulatif. Le vendeur vous contactera pour organiser la livraison."
                }
                nav.confirmation-actions {
                    a.btn.btn-primary href=(BACK_TO_CATALOG.href) {
                        (icons::arrow_left(Some("btn-icon")))
                        (BACK_TO_CATALOG.label)
                    }
                    a.btn.btn-secondary href=(HOME.href) {
                        (icons::home(Some("btn-icon")))
                        (HOME.label)
                    }
                }
            }
        }
    };

    let title = format!("Commande confirmée | {}", site.site_name);
    base_document(&title, css, Some("order-page"), content)
}

// ============================================================================
// Tests
// ============================================================================
