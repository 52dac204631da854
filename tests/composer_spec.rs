use briefing_core::{SuffixPluralRule, TemplateSet, ValidationError};
use seo_briefing::models::*;
use seo_briefing::BriefingComposer;
use speculate2::speculate;

fn betonverf_binnen() -> KeywordSet {
    KeywordSet::new("betonverf binnen")
        .with_variations(["betonverf vloer", "betonverf muur", "betonverf badkamer"])
        .with_long_tail(["betonverf binnen kopen", "betonverf binnen grijs"])
        .with_questions(["Hoe breng je betonverf aan?", "Hoe lang moet betonverf drogen?"])
}

speculate! {
    before {
        let composer = BriefingComposer::default();
    }

    describe "compose" {
        it "is deterministic for identical input" {
            let keywords = betonverf_binnen();
            let competitor = CompetitorReference::new("https://concurrent.nl/betonverf");

            let first = composer.compose(&keywords, &competitor).expect("compose failed");
            let second = composer.compose(&keywords, &competitor).expect("compose failed");

            assert_eq!(first, second);
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }

        it "always returns commercial then two informational sections" {
            for main in ["betonverf", "muurverf buiten", "x"] {
                let content = composer
                    .compose(&KeywordSet::new(main), &CompetitorReference::none())
                    .expect("compose failed");

                let intents: Vec<_> = content.sections.iter().map(|s| s.intent).collect();
                assert_eq!(
                    intents,
                    vec![
                        SectionIntent::Commercial,
                        SectionIntent::Informational,
                        SectionIntent::Informational,
                    ]
                );
            }
        }

        it "rejects an empty or whitespace main keyword" {
            for main in ["", "   ", "\n\t"] {
                let result = composer.compose(&KeywordSet::new(main), &CompetitorReference::none());
                assert_eq!(result, Err(ValidationError::EmptyMainKeyword));
            }
        }

        it "trims the main keyword before use" {
            let content = composer
                .compose(&KeywordSet::new("  betonverf  "), &CompetitorReference::none())
                .expect("compose failed");

            assert_eq!(content.landing_page, "betonverf");
            assert_eq!(content.h1, "Betonverf");
        }
    }

    describe "h1" {
        it "uppercases only the first character" {
            let content = composer
                .compose(&betonverf_binnen(), &CompetitorReference::none())
                .expect("compose failed");
            assert_eq!(content.h1, "Betonverf binnen");
        }

        it "keeps the rest of the keyword unchanged" {
            let content = composer
                .compose(&KeywordSet::new("pu-Coating voor VLOEREN"), &CompetitorReference::none())
                .expect("compose failed");
            assert_eq!(content.h1, "Pu-Coating voor VLOEREN");
        }
    }

    describe "plural form" {
        it "appends the suffix when the keyword does not end in the reserved suffix" {
            assert_eq!(composer.pluralize("betonverf binnen"), "betonverf binnenen");

            let content = composer
                .compose(&betonverf_binnen(), &CompetitorReference::none())
                .expect("compose failed");
            assert_eq!(
                content.meta.page_title,
                "Betonverf binnenen kopen | Slijtvast & eenvoudig aan te brengen"
            );
        }

        it "leaves keywords ending in the reserved suffix unchanged" {
            assert_eq!(composer.pluralize("betonverf"), "betonverf");

            let content = composer
                .compose(&KeywordSet::new("betonverf"), &CompetitorReference::none())
                .expect("compose failed");
            assert_eq!(
                content.meta.page_title,
                "Betonverf kopen | Slijtvast & eenvoudig aan te brengen"
            );
        }

        it "can be swapped for another rule" {
            let composer = BriefingComposer::new(
                TemplateSet::dutch(),
                SuffixPluralRule::new("s", "s"),
            );
            assert_eq!(composer.pluralize("roller"), "rollers");
        }
    }

    describe "how-to heading" {
        it "uses the first question verbatim when it mentions applying" {
            let content = composer
                .compose(&betonverf_binnen(), &CompetitorReference::none())
                .expect("compose failed");
            assert_eq!(content.sections[2].heading, "Hoe breng je betonverf aan?");
        }

        it "matches the marker case-insensitively" {
            let keywords = KeywordSet::new("betonverf")
                .with_questions(["Betonverf AANBRENGEN op tegels?"]);
            let content = composer
                .compose(&keywords, &CompetitorReference::none())
                .expect("compose failed");
            assert_eq!(content.sections[2].heading, "Betonverf AANBRENGEN op tegels?");
        }

        it "synthesizes a default without questions" {
            let content = composer
                .compose(&KeywordSet::new("betonverf binnen"), &CompetitorReference::none())
                .expect("compose failed");
            assert_eq!(
                content.sections[2].heading,
                "Waarop moet je letten bij het aanbrengen van betonverf binnen?"
            );
        }

        it "synthesizes a default when the first question does not match" {
            let keywords = KeywordSet::new("betonverf binnen")
                .with_questions(["Wat kost betonverf?", "Hoe breng je betonverf aan?"]);
            let content = composer
                .compose(&keywords, &CompetitorReference::none())
                .expect("compose failed");
            assert!(content.sections[2].heading.contains("betonverf binnen"));
            assert_ne!(content.sections[2].heading, "Hoe breng je betonverf aan?");
        }

        it "does not treat yield questions as application questions" {
            let keywords = KeywordSet::new("betonverf")
                .with_questions(["Wat is de opbrengst van betonverf per liter?"]);
            let content = composer
                .compose(&keywords, &CompetitorReference::none())
                .expect("compose failed");
            assert_eq!(
                content.sections[2].heading,
                "Waarop moet je letten bij het aanbrengen van betonverf?"
            );
        }

        it "needs the separable verb particle after breng" {
            let keywords = KeywordSet::new("betonverf")
                .with_questions(["Wat brengt betonverf op?"]);
            let content = composer
                .compose(&keywords, &CompetitorReference::none())
                .expect("compose failed");
            assert_eq!(
                content.sections[2].heading,
                "Waarop moet je letten bij het aanbrengen van betonverf?"
            );
        }
    }

    describe "sections" {
        it "fills the commercial section with the fixed benefit list" {
            let content = composer
                .compose(&betonverf_binnen(), &CompetitorReference::none())
                .expect("compose failed");
            let commercial = &content.sections[0];

            assert_eq!(commercial.heading, "Wat is betonverf binnen?");
            assert_eq!(
                commercial.body,
                "Betonverf binnen is speciaal ontwikkeld voor [korte omschrijving toepassing]. Betonverf binnen biedt je:"
            );
            assert_eq!(commercial.bullets.len(), 5);
            assert_eq!(commercial.bullets[0], "Uitstekende dekking en duurzaamheid");
        }

        it "keeps the benefit list independent of input" {
            let a = composer.compose(&KeywordSet::new("a"), &CompetitorReference::none()).unwrap();
            let b = composer.compose(&betonverf_binnen(), &CompetitorReference::none()).unwrap();
            assert_eq!(a.sections[0].bullets, b.sections[0].bullets);
        }

        it "gives the informational sections multi-paragraph bodies and no bullets" {
            let content = composer
                .compose(&betonverf_binnen(), &CompetitorReference::none())
                .expect("compose failed");

            let info = &content.sections[1];
            assert!(info.bullets.is_empty());
            assert!(info.body.contains("**Toepassingen:**"));
            assert!(info.body.contains("**Geschikte ruimtes:**"));
            assert_eq!(info.paragraphs().count(), 4);

            let how_to = &content.sections[2];
            assert!(how_to.bullets.is_empty());
            assert!(how_to.body.starts_with("Bij het aanbrengen van betonverf binnen let je op het volgende:"));
            assert!(how_to.body.contains("**Handige tips:**"));
        }
    }

    describe "summary fields" {
        it "joins the main keyword with the first two variations" {
            let content = composer
                .compose(&betonverf_binnen(), &CompetitorReference::none())
                .expect("compose failed");
            assert_eq!(content.keyword_summary, "betonverf binnen, betonverf vloer, betonverf muur");
        }

        it "handles fewer than two variations" {
            let one = KeywordSet::new("betonverf").with_variations(["beton verf"]);
            let content = composer.compose(&one, &CompetitorReference::none()).unwrap();
            assert_eq!(content.keyword_summary, "betonverf, beton verf");

            let none = KeywordSet::new("betonverf");
            let content = composer.compose(&none, &CompetitorReference::none()).unwrap();
            assert_eq!(content.keyword_summary, "betonverf");
        }

        it "uses a fixed word count target" {
            let content = composer
                .compose(&betonverf_binnen(), &CompetitorReference::none())
                .expect("compose failed");
            assert_eq!(content.word_count_target, "200-300");
        }

        it "substitutes a placeholder for a missing competitor" {
            let content = composer
                .compose(&betonverf_binnen(), &CompetitorReference::new(""))
                .expect("compose failed");
            assert_eq!(content.competitor_ref, "[Voeg concurrent URL toe]");

            let content = composer
                .compose(&betonverf_binnen(), &CompetitorReference::new("https://concurrent.nl"))
                .expect("compose failed");
            assert_eq!(content.competitor_ref, "https://concurrent.nl");
        }
    }
}
