//! Natural-language templates for generated briefings.
//!
//! Every piece of copy the composer emits comes from a [`TemplateSet`], so
//! the preview and the text export always show the same wording. Templates
//! may reference these placeholders:
//!
//! | Placeholder      | Value                                        |
//! |------------------|----------------------------------------------|
//! | `{main}`         | trimmed main keyword                         |
//! | `{h1}`           | main keyword with its first letter uppercased |
//! | `{plural}`       | plural form from the active plural rule      |
//! | `{plural_title}` | plural form with its first letter uppercased |
//!
//! Unknown placeholders are left in place.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKey {
    PageTitle,
    MetaDescription,
    CommercialHeading,
    CommercialNote,
    CommercialBody,
    InformationalHeading,
    InformationalNote,
    InformationalBody,
    HowToHeading,
    HowToNote,
    HowToBody,
    CompetitorPlaceholder,
    WordCountTarget,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 13] = [
        Self::PageTitle,
        Self::MetaDescription,
        Self::CommercialHeading,
        Self::CommercialNote,
        Self::CommercialBody,
        Self::InformationalHeading,
        Self::InformationalNote,
        Self::InformationalBody,
        Self::HowToHeading,
        Self::HowToNote,
        Self::HowToBody,
        Self::CompetitorPlaceholder,
        Self::WordCountTarget,
    ];
}

/// Values substituted into templates.
#[derive(Debug, Clone, Copy)]
pub struct Substitutions<'a> {
    pub main: &'a str,
    pub h1: &'a str,
    pub plural: &'a str,
    pub plural_title: &'a str,
}

impl Substitutions<'_> {
    fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "main" => Some(self.main),
            "h1" => Some(self.h1),
            "plural" => Some(self.plural),
            "plural_title" => Some(self.plural_title),
            _ => None,
        }
    }
}

/// Template strings keyed by [`TemplateKey`], plus the commercial benefit list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSet {
    templates: BTreeMap<TemplateKey, String>,
    benefits: Vec<String>,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::dutch()
    }
}

impl TemplateSet {
    /// The paint-shop copy the generator ships with.
    pub fn dutch() -> Self {
        let templates = [
            (
                TemplateKey::PageTitle,
                "{plural_title} kopen | Slijtvast & eenvoudig aan te brengen",
            ),
            (
                TemplateKey::MetaDescription,
                "{h1} kopen voor vloer en muur. Slijtvast, onderhoudsvriendelijk en geschikt voor elke ruimte. ✔ Snelle bezorging ✔ Veilig en achteraf betalen.",
            ),
            (TemplateKey::CommercialHeading, "Wat is {main}?"),
            (
                TemplateKey::CommercialNote,
                "De voordelen van gebruik van betonverf binnen op een rijtje zetten in bulletpoints. Het zoekwoord in de eerste regel al laat terugkomen. Noem 1x de hoofdcategorie",
            ),
            (
                TemplateKey::CommercialBody,
                "{h1} is speciaal ontwikkeld voor [korte omschrijving toepassing]. {h1} biedt je:",
            ),
            (TemplateKey::InformationalHeading, "Wat is {main}?"),
            (
                TemplateKey::InformationalNote,
                "Geef gelijk antwoord op vraag. Benoem ook de toepassingen en ruimte. Duurzaamheid, milieuvriendelijk, voor elk interieur en tijdloos design",
            ),
            (
                TemplateKey::InformationalBody,
                concat!(
                    "{h1} is een verftype dat [specifieke eigenschappen]. Je gebruikt deze verf voor [toepassingen].\n\n",
                    "**Toepassingen:**\n",
                    "- [Toepassing 1]\n",
                    "- [Toepassing 2]\n",
                    "- [Toepassing 3]\n\n",
                    "**Geschikte ruimtes:**\n",
                    "- [Ruimte 1]\n",
                    "- [Ruimte 2]\n",
                    "- [Ruimte 3]\n\n",
                    "{h1} is duurzaam, milieuvriendelijk en past in elk interieur. Het tijdloze design zorgt ervoor dat je ruimte er jarenlang mooi uitziet.",
                ),
            ),
            (
                TemplateKey::HowToHeading,
                "Waarop moet je letten bij het aanbrengen van {main}?",
            ),
            (
                TemplateKey::HowToNote,
                "Geef gelijk antwoord op vraag en zo nodig handige tips",
            ),
            (
                TemplateKey::HowToBody,
                concat!(
                    "Bij het aanbrengen van {main} let je op het volgende:\n\n",
                    "**Voorbereiding:**\n",
                    "Zorg dat de ondergrond schoon, droog en vetvrij is. Verwijder loszittende delen en vul eventuele scheuren op.\n\n",
                    "**Aanbrengen:**\n",
                    "Gebruik een kwast, roller of verfspuit, afhankelijk van de ondergrond en het gewenste resultaat. Breng de verf in dunne, gelijkmatige lagen aan.\n\n",
                    "**Handige tips:**\n",
                    "- Werk bij een temperatuur tussen 10-25°C\n",
                    "- Gebruik kwaliteitsgereedschap voor een strakke afwerking\n",
                    "- Laat elke laag goed drogen volgens de aangegeven droogtijd\n",
                    "- Breng minimaal 2 lagen aan voor optimale dekking",
                ),
            ),
            (TemplateKey::CompetitorPlaceholder, "[Voeg concurrent URL toe]"),
            (TemplateKey::WordCountTarget, "200-300"),
        ]
        .into_iter()
        .map(|(key, text)| (key, text.to_string()))
        .collect();

        let benefits = [
            "Uitstekende dekking en duurzaamheid",
            "Slijtvast en bestand tegen dagelijks gebruik",
            "Eenvoudig aan te brengen, ook voor beginners",
            "Onderhoudsvriendelijk en makkelijk schoon te maken",
            "Geschikt voor verschillende ondergronden",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();

        Self {
            templates,
            benefits,
        }
    }

    /// Replace a single template.
    pub fn with_template(mut self, key: TemplateKey, template: impl Into<String>) -> Self {
        self.templates.insert(key, template.into());
        self
    }

    /// Replace the commercial benefit list.
    pub fn with_benefits<I, S>(mut self, benefits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.benefits = benefits.into_iter().map(Into::into).collect();
        self
    }

    /// Merge configured overrides on top of the current templates.
    pub fn with_overrides(mut self, overrides: &HashMap<TemplateKey, String>) -> Self {
        for (key, template) in overrides {
            self.templates.insert(*key, template.clone());
        }
        self
    }

    /// Raw template text for `key`.
    pub fn get(&self, key: TemplateKey) -> &str {
        self.templates.get(&key).map(String::as_str).unwrap_or_default()
    }

    pub fn benefits(&self) -> &[String] {
        &self.benefits
    }

    /// Render the template for `key` with `subs` filled in.
    pub fn render(&self, key: TemplateKey, subs: &Substitutions<'_>) -> String {
        substitute(self.get(key), subs)
    }
}

/// Single pass over `template`, so substituted values are never re-expanded.
fn substitute(template: &str, subs: &Substitutions<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tail.find('}') {
            Some(end) => match subs.lookup(&tail[1..end]) {
                Some(value) => {
                    out.push_str(value);
                    rest = &tail[end + 1..];
                }
                None => {
                    out.push('{');
                    rest = &tail[1..];
                }
            },
            None => {
                out.push_str(tail);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subs() -> Substitutions<'static> {
        Substitutions {
            main: "betonverf",
            h1: "Betonverf",
            plural: "betonverf",
            plural_title: "Betonverf",
        }
    }

    #[test]
    fn every_key_has_a_default_template() {
        let set = TemplateSet::dutch();
        for key in TemplateKey::ALL {
            assert!(!set.get(key).is_empty(), "missing template for {:?}", key);
        }
        assert_eq!(set.benefits().len(), 5);
    }

    #[test]
    fn renders_placeholders() {
        let set = TemplateSet::dutch();
        assert_eq!(
            set.render(TemplateKey::PageTitle, &subs()),
            "Betonverf kopen | Slijtvast & eenvoudig aan te brengen"
        );
        assert_eq!(
            set.render(TemplateKey::CommercialHeading, &subs()),
            "Wat is betonverf?"
        );
    }

    #[test]
    fn leaves_unknown_placeholders_and_stray_braces() {
        assert_eq!(substitute("{unknown} {main}", &subs()), "{unknown} betonverf");
        assert_eq!(substitute("open { brace", &subs()), "open { brace");
        assert_eq!(substitute("{{main}}", &subs()), "{betonverf}");
    }

    #[test]
    fn does_not_re_expand_substituted_values() {
        let subs = Substitutions {
            main: "{h1}",
            h1: "H",
            plural: "",
            plural_title: "",
        };
        assert_eq!(substitute("{main}/{h1}", &subs), "{h1}/H");
    }

    #[test]
    fn overrides_replace_single_templates() {
        let mut overrides = HashMap::new();
        overrides.insert(TemplateKey::WordCountTarget, "400-600".to_string());
        let set = TemplateSet::dutch().with_overrides(&overrides);

        assert_eq!(set.get(TemplateKey::WordCountTarget), "400-600");
        assert_eq!(set.get(TemplateKey::CompetitorPlaceholder), "[Voeg concurrent URL toe]");
    }

    #[test]
    fn template_keys_use_snake_case_in_config() {
        let key: TemplateKey = serde_json::from_str("\"how_to_heading\"").unwrap();
        assert_eq!(key, TemplateKey::HowToHeading);
    }
}
