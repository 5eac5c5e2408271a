// Colored terminal output for match reports and keyword lists.
//
// This module handles all terminal-specific formatting: colors, the score
// bar, checklists. The main.rs display paths delegate here.

use colored::Colorize;

use crate::analysis::quality::LONG_SENTENCE_WORDS;
use crate::analysis::sections::SectionPresence;
use crate::report::{MatchBand, MatchReport};

/// Display a full match report in the terminal.
pub fn display_report(report: &MatchReport) {
    println!("\n{}", "=== Resume Match Report ===".bold());
    println!();

    // Score line with a bar, colored by band
    let band = MatchBand::from_score(report.similarity_score);
    let bar_width: usize = 20;
    let filled = ((report.similarity_score / 100.0) * bar_width as f64).round() as usize;
    let empty = bar_width.saturating_sub(filled);
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

    println!(
        "  Match score: {} {}  ({})",
        format!("{:.2}%", report.similarity_score).bold(),
        colorize_by_band(&bar, band),
        colorize_by_band(band.as_str(), band),
    );

    if report.empty_vocabulary {
        println!(
            "  {}",
            "No informative terms survived stop-word filtering; score defaulted to 0.".dimmed()
        );
    }

    // Missing keywords
    println!("\n{}", "Missing keywords".bold());
    if report.missing_keywords.is_empty() {
        println!("  {}", "No major keyword gaps found.".green());
    } else {
        println!("  {}", report.missing_keywords.join(", ").yellow());
    }

    // Section checklist
    if let Some(sections) = &report.sections {
        println!("\n{}", "Resume sections".bold());
        display_sections(sections);
    }

    // Quality signal
    println!("\n{}", "Quality".bold());
    if report.long_sentences > 0 {
        println!(
            "  {} {} sentence(s) run past {} words. Consider splitting them.",
            "~".yellow(),
            report.long_sentences,
            LONG_SENTENCE_WORDS
        );
    } else {
        println!("  {} Sentence length looks good.", "+".green());
    }

    // Suggestions
    println!("\n{}", "Suggestions".bold());
    for suggestion in &report.suggestions {
        println!("  - {suggestion}");
    }
    println!();
}

/// Display the section checklist.
pub fn display_sections(sections: &SectionPresence) {
    for (label, present) in sections.entries() {
        if present {
            println!("  {} {} section found", "+".green(), label);
        } else {
            println!("  {} {} section missing", "x".red(), label);
        }
    }
}

/// Display an extracted keyword set, sorted for stable output.
pub fn display_keywords(keywords: &[String]) {
    if keywords.is_empty() {
        println!("No keywords extracted.");
        return;
    }

    println!("\n{}", format!("=== Keywords ({}) ===", keywords.len()).bold());
    for keyword in keywords {
        println!("  {keyword}");
    }
    println!();
}

/// Colorize a string by match band.
fn colorize_by_band(text: &str, band: MatchBand) -> colored::ColoredString {
    match band {
        MatchBand::Strong => text.bright_green(),
        MatchBand::Moderate => text.green(),
        MatchBand::Weak => text.yellow(),
        MatchBand::Poor => text.red(),
    }
}
