//! Page content types.
//!
//! These types describe what goes on a page. They're designed to be:
//!
//! - **Serializable** - Content can live in TOML or JSON next to the binary
//! - **Clone-friendly** - Components take owned data without borrowing issues
//! - **Fail-closed** - Unknown accents resolve to [`Accent::Neutral`]
//!
//! # Example
//!
//! ```rust
//! use page_leptos::types::{Accent, FeatureCard, PageContent};
//!
//! let content = PageContent {
//!     title: "Welcome".into(),
//!     introduction: "A platform for X.".into(),
//!     sections: vec![
//!         FeatureCard::new("A", "desc A", Accent::Primary),
//!         FeatureCard::new("B", "desc B", Accent::Secondary),
//!     ],
//! };
//! assert_eq!(content.sections.len(), 2);
//! ```

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ContentIssue, PageError};

/// Visual theme key of a feature card.
///
/// The set is closed. Deserializing any unrecognised string, or a value that
/// is not a string at all (`null`, a number, ...), yields [`Accent::Neutral`]
/// instead of an error, so content written for a newer theme palette still
/// renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Blue treatment
    Primary,
    /// Green treatment
    Secondary,
    /// Purple treatment
    Tertiary,
    /// Gray fallback
    #[default]
    Neutral,
}

impl Accent {
    /// Every accent, in palette order.
    pub const ALL: [Accent; 4] = [
        Accent::Primary,
        Accent::Secondary,
        Accent::Tertiary,
        Accent::Neutral,
    ];

    /// Resolve a theme key. Case and surrounding whitespace are ignored;
    /// anything unknown is neutral.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "primary" => Accent::Primary,
            "secondary" => Accent::Secondary,
            "tertiary" => Accent::Tertiary,
            _ => Accent::Neutral,
        }
    }

    /// Lowercase key, as used in content files and `data-accent`.
    pub fn as_str(self) -> &'static str {
        match self {
            Accent::Primary => "primary",
            Accent::Secondary => "secondary",
            Accent::Tertiary => "tertiary",
            Accent::Neutral => "neutral",
        }
    }

    /// Colour treatment for this accent.
    pub fn theme(self) -> CardTheme {
        match self {
            Accent::Primary => CardTheme {
                class: "accent-primary",
                surface: "#eff6ff",
                heading: "#1e40af",
            },
            Accent::Secondary => CardTheme {
                class: "accent-secondary",
                surface: "#f0fdf4",
                heading: "#166534",
            },
            Accent::Tertiary => CardTheme {
                class: "accent-tertiary",
                surface: "#faf5ff",
                heading: "#6b21a8",
            },
            Accent::Neutral => CardTheme {
                class: "accent-neutral",
                surface: "#f9fafb",
                heading: "#1f2937",
            },
        }
    }
}

impl From<&str> for Accent {
    fn from(raw: &str) -> Self {
        Accent::parse(raw)
    }
}

impl From<String> for Accent {
    fn from(raw: String) -> Self {
        Accent::parse(&raw)
    }
}

impl<'de> Deserialize<'de> for Accent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AccentVisitor)
    }
}

struct AccentVisitor;

impl<'de> Visitor<'de> for AccentVisitor {
    type Value = Accent;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an accent key")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Accent, E> {
        Ok(Accent::parse(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Accent, E> {
        Ok(Accent::Neutral)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Accent, E> {
        Ok(Accent::Neutral)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Accent, E> {
        Ok(Accent::Neutral)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Accent, E> {
        Ok(Accent::Neutral)
    }

    fn visit_none<E: de::Error>(self) -> Result<Accent, E> {
        Ok(Accent::Neutral)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Accent, E> {
        Ok(Accent::Neutral)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Accent, D::Error> {
        Accent::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Accent, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Accent::Neutral)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Accent, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Accent::Neutral)
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Background and foreground treatment resolved from an [`Accent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardTheme {
    /// CSS class carrying the treatment
    pub class: &'static str,
    /// Card background colour
    pub surface: &'static str,
    /// Card heading colour
    pub heading: &'static str,
}

/// One unit of the feature grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    /// Short label, rendered as a sub-heading
    pub heading: String,
    /// Descriptive text, may be empty
    #[serde(default)]
    pub body: String,
    /// Theme key; missing means neutral
    #[serde(default)]
    pub accent: Accent,
}

impl FeatureCard {
    /// Shorthand constructor.
    pub fn new(heading: impl Into<String>, body: impl Into<String>, accent: Accent) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
            accent,
        }
    }
}

/// Everything a page shows: title, introduction, ordered feature cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// Page heading, must not be empty
    pub title: String,
    /// Paragraph beneath the heading, may be empty
    #[serde(default)]
    pub introduction: String,
    /// Cards in display order; an empty list renders an empty grid
    #[serde(default)]
    pub sections: Vec<FeatureCard>,
}

impl PageContent {
    /// Landing copy of the Agora interview platform.
    pub fn agora_home() -> Self {
        Self {
            title: "Добро пожаловать в АГОРА".into(),
            introduction: "Платформа для проведения технических интервью с AI-ассистентом."
                .into(),
            sections: vec![
                FeatureCard::new(
                    "Интервью",
                    "Генерируйте вопросы для интервью и записывайте свои ответы.",
                    Accent::Primary,
                ),
                FeatureCard::new(
                    "Настройки",
                    "Настройте параметры записи и продолжительность ответов.",
                    Accent::Secondary,
                ),
                FeatureCard::new(
                    "История",
                    "Просмотрите историю ваших интервью и ответов.",
                    Accent::Tertiary,
                ),
            ],
        }
    }
}

/// Content as it arrives from a file, before validation.
///
/// `sections` admits `null` entries so a placeholder left in a JSON array
/// surfaces as [`ContentIssue::MissingCard`] instead of a parse error far
/// from its cause.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawPageContent {
    /// Page heading
    #[serde(default)]
    pub title: String,
    /// Paragraph beneath the heading
    #[serde(default)]
    pub introduction: String,
    /// Cards, possibly with holes
    #[serde(default)]
    pub sections: Vec<Option<FeatureCard>>,
}

impl TryFrom<RawPageContent> for PageContent {
    type Error = PageError;

    fn try_from(raw: RawPageContent) -> Result<Self, Self::Error> {
        let sections = raw
            .sections
            .into_iter()
            .enumerate()
            .map(|(index, card)| {
                card.ok_or(PageError::InvalidContent(ContentIssue::MissingCard {
                    index,
                }))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageContent {
            title: raw.title,
            introduction: raw.introduction,
            sections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accent_parse_ignores_case_and_whitespace() {
        assert_eq!(Accent::parse("primary"), Accent::Primary);
        assert_eq!(Accent::parse("PRIMARY"), Accent::Primary);
        assert_eq!(Accent::parse("  tertiary "), Accent::Tertiary);
        assert_eq!(Accent::from("Secondary"), Accent::Secondary);
    }

    #[test]
    fn unknown_accent_is_neutral() {
        assert_eq!(Accent::parse("teal"), Accent::Neutral);
        assert_eq!(Accent::parse(""), Accent::Neutral);

        let card: FeatureCard =
            serde_json::from_str(r#"{"heading":"X","body":"y","accent":"teal"}"#)
                .expect("card parses");
        assert_eq!(card.accent, Accent::Neutral);

        let shouted: FeatureCard =
            serde_json::from_str(r#"{"heading":"X","accent":"SECONDARY"}"#).expect("card parses");
        assert_eq!(shouted.accent, Accent::Secondary);
    }

    #[test]
    fn non_string_accent_is_neutral() {
        for raw in [
            r#"{"heading":"X","accent":null}"#,
            r#"{"heading":"X","accent":7}"#,
            r#"{"heading":"X","accent":-1.5}"#,
            r#"{"heading":"X","accent":true}"#,
            r#"{"heading":"X","accent":["primary"]}"#,
            r#"{"heading":"X","accent":{"key":"primary"}}"#,
        ] {
            let card: FeatureCard = serde_json::from_str(raw).expect("card parses");
            assert_eq!(card, FeatureCard::new("X", "", Accent::Neutral), "{raw}");
        }
    }

    #[test]
    fn accent_serializes_as_lowercase_key() {
        let json = serde_json::to_string(&FeatureCard::new("X", "", Accent::Tertiary))
            .expect("card serializes");
        assert!(json.contains(r#""accent":"tertiary""#));
    }

    #[test]
    fn missing_accent_and_body_default() {
        let card: FeatureCard = serde_json::from_str(r#"{"heading":"X"}"#).expect("card parses");
        assert_eq!(card, FeatureCard::new("X", "", Accent::Neutral));
    }

    #[test]
    fn every_accent_has_a_distinct_theme() {
        let classes: std::collections::HashSet<_> =
            Accent::ALL.iter().map(|a| a.theme().class).collect();
        assert_eq!(classes.len(), Accent::ALL.len());
        for accent in Accent::ALL {
            assert!(accent.theme().class.ends_with(accent.as_str()));
        }
    }

    #[test]
    fn raw_content_with_null_card_is_invalid() {
        let raw: RawPageContent = serde_json::from_str(
            r#"{"title":"T","sections":[{"heading":"A"},null,{"heading":"C"}]}"#,
        )
        .expect("raw parses");

        let err = PageContent::try_from(raw).expect_err("null card rejected");
        assert_eq!(
            err,
            PageError::InvalidContent(ContentIssue::MissingCard { index: 1 })
        );
    }

    #[test]
    fn raw_content_converts_in_order() {
        let raw: RawPageContent = serde_json::from_str(
            r#"{"title":"T","introduction":"i","sections":[{"heading":"A","accent":"primary"},{"heading":"B"}]}"#,
        )
        .expect("raw parses");

        let content = PageContent::try_from(raw).expect("valid");
        assert_eq!(content.title, "T");
        assert_eq!(
            content
                .sections
                .iter()
                .map(|c| c.heading.as_str())
                .collect::<Vec<_>>(),
            vec!["A", "B"]
        );
        assert_eq!(content.sections[0].accent, Accent::Primary);
    }

    #[test]
    fn agora_home_has_three_accented_cards() {
        let home = PageContent::agora_home();
        assert!(!home.title.is_empty());
        assert_eq!(
            home.sections.iter().map(|c| c.accent).collect::<Vec<_>>(),
            vec![Accent::Primary, Accent::Secondary, Accent::Tertiary]
        );
    }
}
