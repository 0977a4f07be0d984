//! Static page content: treatments, packages, gallery and contact details

/// A single treatment on the services grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub price: &'static str,
}

/// A bundled offer; its button preselects the matching booking option
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Package {
    pub name: &'static str,
    pub tagline: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub featured: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub caption: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoCard {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

/// `<option>` of the booking form's service select
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Swedish Massage",
        description: "Long, flowing strokes that melt away tension and restore balance.",
        duration: "60 min",
        price: "$95",
    },
    Service {
        title: "Hot Stone Therapy",
        description: "Warm basalt stones ease deep muscle knots and calm the mind.",
        duration: "75 min",
        price: "$120",
    },
    Service {
        title: "Signature Facial",
        description: "Cleanse, exfoliate and hydrate with botanical serums tailored to your skin.",
        duration: "60 min",
        price: "$110",
    },
    Service {
        title: "Aromatherapy",
        description: "Essential oil blends paired with gentle massage for full-body calm.",
        duration: "50 min",
        price: "$90",
    },
    Service {
        title: "Body Scrub & Wrap",
        description: "Sea salt polish followed by a nourishing seaweed wrap.",
        duration: "90 min",
        price: "$140",
    },
    Service {
        title: "Reflexology",
        description: "Targeted pressure on the feet to relieve stress throughout the body.",
        duration: "45 min",
        price: "$75",
    },
];

pub const PACKAGES: &[Package] = &[
    Package {
        name: "Serenity Package",
        tagline: "A gentle introduction to the spa",
        price: "$180",
        features: &["Swedish massage", "Express facial", "Herbal tea ritual"],
        featured: false,
    },
    Package {
        name: "Wellness Retreat",
        tagline: "Our most loved half-day escape",
        price: "$320",
        features: &[
            "Hot stone therapy",
            "Signature facial",
            "Body scrub & wrap",
            "Healthy lunch",
        ],
        featured: true,
    },
    Package {
        name: "Luxury Indulgence",
        tagline: "A full day of uninterrupted calm",
        price: "$480",
        features: &[
            "Aromatherapy massage",
            "Signature facial",
            "Reflexology",
            "Champagne & lunch",
            "Private relaxation suite",
        ],
        featured: false,
    },
];

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem { caption: "Treatment suite", image: "/images/gallery-suite.svg" },
    GalleryItem { caption: "Relaxation lounge", image: "/images/gallery-lounge.svg" },
    GalleryItem { caption: "Hydrotherapy pool", image: "/images/gallery-pool.svg" },
    GalleryItem { caption: "Garden terrace", image: "/images/gallery-terrace.svg" },
    GalleryItem { caption: "Steam room", image: "/images/gallery-steam.svg" },
    GalleryItem { caption: "Tea bar", image: "/images/gallery-tea.svg" },
];

pub const INFO_CARDS: &[InfoCard] = &[
    InfoCard {
        title: "Visit Us",
        lines: &["24 Willow Lane", "Lakeside, CA 94000"],
    },
    InfoCard {
        title: "Call Us",
        lines: &["+1 (555) 010-0199"],
    },
    InfoCard {
        title: "Opening Hours",
        lines: &["Mon–Fri: 9am – 8pm", "Sat–Sun: 10am – 6pm"],
    },
];

/// Options of the service select; the first one is the empty placeholder
pub const SERVICE_OPTIONS: &[ServiceOption] = &[
    ServiceOption { value: "", label: "Select a service" },
    ServiceOption { value: "swedish-massage", label: "Swedish Massage" },
    ServiceOption { value: "hot-stone", label: "Hot Stone Therapy" },
    ServiceOption { value: "facial", label: "Signature Facial" },
    ServiceOption { value: "aromatherapy", label: "Aromatherapy" },
    ServiceOption { value: "scrub-wrap", label: "Body Scrub & Wrap" },
    ServiceOption { value: "reflexology", label: "Reflexology" },
    ServiceOption { value: "serenity-package", label: "Serenity Package" },
    ServiceOption { value: "wellness-retreat", label: "Wellness Retreat" },
    ServiceOption { value: "luxury-indulgence", label: "Luxury Indulgence" },
];

pub const ABOUT_IMAGE: &str = "/images/about.svg";

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    /// Site paths resolve against the `public` assets dir
    fn asset_exists(site_path: &str) -> bool {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(site_path.trim_start_matches('/'))
            .is_file()
    }

    #[test]
    fn test_referenced_images_are_shipped() {
        for item in GALLERY {
            assert!(asset_exists(item.image), "missing {}", item.image);
        }
        assert!(asset_exists(ABOUT_IMAGE));

        let stylesheet = include_str!("../../style/main.css");
        assert!(stylesheet.contains("/images/hero.svg"));
        assert!(asset_exists("/images/hero.svg"));
    }

    #[test]
    fn test_option_values_are_unique() {
        for (i, a) in SERVICE_OPTIONS.iter().enumerate() {
            for b in &SERVICE_OPTIONS[i + 1..] {
                assert_ne!(a.value, b.value);
            }
        }
    }

    #[test]
    fn test_placeholder_option_is_first_and_empty() {
        assert_eq!(SERVICE_OPTIONS[0].value, "");
        assert!(SERVICE_OPTIONS[1..].iter().all(|o| !o.value.is_empty()));
    }

    #[test]
    fn test_exactly_one_featured_package() {
        assert_eq!(PACKAGES.iter().filter(|p| p.featured).count(), 1);
    }
}
