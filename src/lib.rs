//! # Souk-Moussel
//!
//! Static storefront generator for the Souk-Moussel agricultural marketplace.
//! Renders the landing page and order confirmation pages to plain HTML that any
//! static host can serve.
//!
//! ```text
//! config.toml + compiled-in content  →  dist/   (index.html, commande/<id>/, content.json)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`generate`] | Page renderers (landing, order confirmation) and the site writer |
//! | [`components`] | Feature highlight card and inline SVG icons |
//! | [`content`] | Read-only tables: marketplace modules, features, testimonials |
//! | [`config`] | `config.toml` loading, merging, validation, color CSS |
//! | [`images`] | Remote image origin rules and URL matching |
//! | [`routes`] | `/commande/{id}` route contract and navigation targets |
//! | [`types`] | `OrderId` and `NavLink` value types |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Order Ids Are Opaque
//!
//! The upstream order flow owns the id format and does not document it. The
//! confirmation page shows whatever it receives, escaped as text and otherwise
//! untouched. The only place an id is inspected is when it becomes a directory
//! name on disk ([`generate::order_output_dir`]).
//!
//! ## Content Is Compiled In
//!
//! The landing tables are `'static` slices. There is no loader and no
//! re-initialization path, so every render sees the same data.
//!
//! ## Maud Over Template Engines
//!
//! HTML is produced with [Maud](https://maud.lambda.xyz/): templates are Rust
//! expressions checked at compile time, and interpolation is auto-escaped.

pub mod components;
pub mod config;
pub mod content;
pub mod generate;
pub mod images;
pub mod output;
pub mod routes;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
