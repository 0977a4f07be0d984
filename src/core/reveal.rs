//! Reveal-on-scroll targets.
//!
//! Each target kind has its own selector and intersection settings. A
//! revealed element is unobserved right away, so reveals are one-shot.

/// Transition applied to cards before they are observed
pub const CARD_TRANSITION: &str =
    "opacity 0.8s cubic-bezier(0.4, 0, 0.2, 1), transform 0.8s cubic-bezier(0.4, 0, 0.2, 1)";

/// Class added to a section once it has been seen
pub const SECTION_VISIBLE_CLASS: &str = "visible";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTarget {
    /// Service, package, gallery and info cards: fade and slide up
    Card,
    /// Page sections: gain the `visible` class
    Section,
}

impl RevealTarget {
    pub const ALL: [RevealTarget; 2] = [RevealTarget::Card, RevealTarget::Section];

    pub fn selector(&self) -> &'static str {
        match self {
            RevealTarget::Card => ".service-card, .package-card, .gallery-item, .info-card",
            RevealTarget::Section => "section",
        }
    }

    /// Fraction of the element that must be visible
    pub fn threshold(&self) -> f64 {
        match self {
            RevealTarget::Card => 0.1,
            RevealTarget::Section => 0.15,
        }
    }

    pub fn root_margin(&self) -> &'static str {
        match self {
            RevealTarget::Card => "0px 0px -100px 0px",
            RevealTarget::Section => "0px",
        }
    }

    /// Inline styles set before observation starts
    pub fn initial_styles(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            RevealTarget::Card => &[
                ("opacity", "0"),
                ("transform", "translateY(30px)"),
                ("transition", CARD_TRANSITION),
            ],
            RevealTarget::Section => &[],
        }
    }

    /// Inline styles set once the element intersects
    pub fn revealed_styles(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            RevealTarget::Card => &[("opacity", "1"), ("transform", "translateY(0)")],
            RevealTarget::Section => &[],
        }
    }

    pub fn revealed_class(&self) -> Option<&'static str> {
        match self {
            RevealTarget::Card => None,
            RevealTarget::Section => Some(SECTION_VISIBLE_CLASS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_settings() {
        let card = RevealTarget::Card;
        assert_eq!(card.threshold(), 0.1);
        assert_eq!(card.root_margin(), "0px 0px -100px 0px");
        assert!(card.selector().contains(".gallery-item"));
        assert!(card.revealed_class().is_none());
    }

    #[test]
    fn test_card_starts_hidden_and_ends_in_place() {
        let card = RevealTarget::Card;
        assert!(card.initial_styles().contains(&("opacity", "0")));
        assert!(card.revealed_styles().contains(&("opacity", "1")));
        assert!(card.revealed_styles().contains(&("transform", "translateY(0)")));
    }

    #[test]
    fn test_section_settings() {
        let section = RevealTarget::Section;
        assert_eq!(section.selector(), "section");
        assert_eq!(section.threshold(), 0.15);
        assert_eq!(section.revealed_class(), Some("visible"));
        assert!(section.initial_styles().is_empty());
    }
}
