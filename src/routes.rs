//! URL contract between the host routing layer and the generated pages.
//!
//! The order confirmation page lives at `/commande/{id}`. The id is the single
//! path segment after the prefix, percent-encoded so any id (spaces, `?`, `#`,
//! `/`) stays inside that segment. Decoding gives back the id unchanged.

use crate::types::{NavLink, OrderId};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Characters escaped in the id segment: everything a URL path segment
/// cannot carry literally, plus `%` itself.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Path prefix of order confirmation pages.
pub const ORDER_ROUTE_PREFIX: &str = "/commande/";

/// Catalog listing.
pub const CATALOG_PATH: &str = "/catalogue";

/// Site root.
pub const HOME_PATH: &str = "/";

pub const BACK_TO_CATALOG: NavLink = NavLink {
    label: "Retour au catalogue",
    href: CATALOG_PATH,
};

pub const HOME: NavLink = NavLink {
    label: "Accueil",
    href: HOME_PATH,
};

/// Public path of the confirmation page for `id`.
pub fn order_path(id: &OrderId) -> String {
    format!(
        "{ORDER_ROUTE_PREFIX}{}",
        utf8_percent_encode(id.as_str(), SEGMENT)
    )
}

/// Extract the order id from a request path like `/commande/ORD-12345`.
///
/// A single trailing `/` is tolerated and the segment is percent-decoded.
/// Returns `None` when the prefix is missing, the remainder spans more than
/// one segment, or the decoded bytes are not UTF-8.
pub fn order_id_from_path(path: &str) -> Option<OrderId> {
    let rest = path.strip_prefix(ORDER_ROUTE_PREFIX)?;
    let segment = rest.strip_suffix('/').unwrap_or(rest);
    if segment.contains('/') {
        return None;
    }
    let id = percent_decode_str(segment).decode_utf8().ok()?;
    Some(OrderId::new(id))
}
