//! Static landing-page content.
//!
//! Three ordered tables (marketplace modules, platform features, customer
//! testimonials) compiled into the binary. They are `'static` slices: built
//! once, never mutated, safe to read from any number of renders at once.
//! Callers iterate them in order; there is no lookup or filtering API.
//!
//! The same tables are exported as `content.json` for pages that are not
//! rendered by this crate.

use serde::Serialize;

/// A marketplace section shown as an image card on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleEntry {
    pub title: &'static str,
    pub description: &'static str,
    /// Absolute URL (remote origin) or root-relative path (local asset).
    pub image: &'static str,
    pub href: &'static str,
}

/// A platform feature rendered through the feature highlight card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureEntry {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub static MODULES: &[ModuleEntry] = &[
    ModuleEntry {
        title: "Marché des produits",
        description: "Achetez et vendez fruits, légumes, céréales et produits du terroir directement entre producteurs et acheteurs.",
        image: "https://images.unsplash.com/photo-1488459716781-31db52582fe9?w=800",
        href: "/catalogue",
    },
    ModuleEntry {
        title: "Intrants agricoles",
        description: "Semences, engrais et produits phytosanitaires certifiés, livrés jusqu'à votre exploitation.",
        image: "https://images.unsplash.com/photo-1523348837708-15d4a09cfac2?w=800",
        href: "/catalogue?categorie=intrants",
    },
    ModuleEntry {
        title: "Location de matériel",
        description: "Tracteurs, moissonneuses et outillage disponibles à la journée ou à la saison.",
        image: "https://images.unsplash.com/photo-1530267981375-f0de937f5f13?w=800",
        href: "/location",
    },
    ModuleEntry {
        title: "Conseil agronomique",
        description: "Un réseau d'ingénieurs agronomes pour vous accompagner de la semence à la récolte.",
        image: "/images/conseil.jpg",
        href: "/conseil",
    },
];

pub static FEATURES: &[FeatureEntry] = &[
    FeatureEntry {
        icon: "🔒",
        title: "Paiement sécurisé",
        description: "Les fonds sont conservés jusqu'à la confirmation de la livraison.",
    },
    FeatureEntry {
        icon: "🚚",
        title: "Livraison suivie",
        description: "Suivez chaque commande de l'exploitation jusqu'à votre porte.",
    },
    FeatureEntry {
        icon: "🌱",
        title: "Producteurs vérifiés",
        description: "Chaque vendeur est contrôlé avant de pouvoir publier une offre.",
    },
    FeatureEntry {
        icon: "📞",
        title: "Support local",
        description: "Une équipe joignable en arabe et en français, six jours sur sept.",
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "J'écoule maintenant ma récolte d'agrumes sans passer par trois intermédiaires.",
        author: "Karim B.",
        role: "Arboriculteur, Nabeul",
    },
    Testimonial {
        quote: "La location du tracteur a été réglée en dix minutes, livraison comprise.",
        author: "Salma H.",
        role: "Céréalière, Béja",
    },
    Testimonial {
        quote: "Je trouve enfin des semences certifiées au prix affiché, sans surprise.",
        author: "Mohamed T.",
        role: "Maraîcher, Sousse",
    },
];

/// Borrowed view of all three tables, in export order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContentExport {
    pub modules: &'static [ModuleEntry],
    pub features: &'static [FeatureEntry],
    pub testimonials: &'static [Testimonial],
}

pub fn export() -> ContentExport {
    ContentExport {
        modules: MODULES,
        features: FEATURES,
        testimonials: TESTIMONIALS,
    }
}

/// Pretty JSON of [`export`], as written to `content.json`.
pub fn export_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&export())
}

/// Every image reference used by the content tables.
pub fn image_refs() -> impl Iterator<Item = &'static str> {
    MODULES.iter().map(|m| m.image)
}
