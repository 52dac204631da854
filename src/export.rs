//! Plain-text briefing report.
//!
//! The layout is fixed: a 20-column label gutter, 79-dash separators and a
//! fixed section order. Downstream tooling diffs these files, so the file
//! download and the clipboard copy share this one renderer.

use std::fmt::Write as _;

use briefing_core::models::BriefingDocument;

const SEPARATOR: &str =
    "-------------------------------------------------------------------------------";
const LABEL_WIDTH: usize = 20;
const INDENT: &str = "                    ";

/// Render the full report for a briefing.
///
/// ```text
/// -------------------------------------------------------------------------------
/// SEO BRIEFING - BETONVERF
/// -------------------------------------------------------------------------------
///
/// Landingspagina:     betonverf
/// ...
/// ```
pub fn render_report(doc: &BriefingDocument) -> String {
    let content = &doc.content;
    let mut out = String::new();

    out.push_str(SEPARATOR);
    out.push('\n');
    let _ = writeln!(out, "SEO BRIEFING - {}", doc.name.to_uppercase());
    separator(&mut out);

    field(&mut out, "Landingspagina:", &content.landing_page);
    field(&mut out, "Concurrentie:", &content.competitor_ref);
    let _ = writeln!(
        out,
        "{:<width$}Als bovenstaande niet is ingevuld, zoek relevante",
        "Notitie:",
        width = LABEL_WIDTH
    );
    let _ = writeln!(out, "{}concurrentie in top 3 van Google.\n", INDENT);
    separator(&mut out);

    field(&mut out, "Pagetitel:", &content.meta.page_title);
    field(&mut out, "Meta-description:", &content.meta.meta_description);
    separator(&mut out);

    field(&mut out, "H1 html-tag:", &content.h1);
    field(&mut out, "Zoekwoorden:", &content.keyword_summary);

    for section in &content.sections {
        field(&mut out, "H2 html-tag:", &section.heading);
        field(&mut out, "Notitie:", &section.note);
        let body = section.body.replace("\n\n", &format!("\n{}", INDENT));
        field(&mut out, "Content:", &body);
        if !section.bullets.is_empty() {
            bullet_list(&mut out, &section.bullets);
            out.push('\n');
        }
    }

    separator(&mut out);
    field(&mut out, "Aantal woorden:", &content.word_count_target);
    let _ = writeln!(out, "{:<width$}", "Notitie:", width = LABEL_WIDTH);
    separator(&mut out);

    out.push_str("ZOEKWOORDEN OVERZICHT\n\n");
    field(&mut out, "Hoofdzoekwoord:", &doc.keywords.main);
    if !doc.keywords.variations.is_empty() {
        out.push_str("Variaties:\n");
        bullet_list(&mut out, &doc.keywords.variations);
        out.push('\n');
    }
    if !doc.keywords.long_tail.is_empty() {
        out.push_str("Long-tail:\n");
        bullet_list(&mut out, &doc.keywords.long_tail);
        out.push('\n');
    }
    if !doc.keywords.questions.is_empty() {
        out.push_str("Vragen:\n");
        bullet_list(&mut out, &doc.keywords.questions);
    }

    out.push('\n');
    out.push_str(SEPARATOR);
    out
}

/// Download name for the report, e.g. `SEO-Briefing-betonverf-binnen.txt`.
pub fn report_file_name(doc: &BriefingDocument) -> String {
    let slug = doc.name.split_whitespace().collect::<Vec<_>>().join("-");
    format!("SEO-Briefing-{}.txt", slug)
}

fn separator(out: &mut String) {
    out.push_str(SEPARATOR);
    out.push_str("\n\n");
}

fn field(out: &mut String, label: &str, value: &str) {
    let _ = write!(out, "{:<width$}{}\n\n", label, value, width = LABEL_WIDTH);
}

fn bullet_list(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "{}- {}", INDENT, item);
    }
}
