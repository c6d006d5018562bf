// Colored terminal output for fingerprints, comparisons and drift series.
//
// Everything here is read-only over the engine's records. The JSON form
// (`--json`) is the machine-readable output; these tables are for people.

use colored::Colorize;

use crate::fingerprint::{Comparison, Fingerprint, FrequencyVector};
use crate::pipeline::DriftSeries;

const BAR_WIDTH: usize = 20;

/// Display a single fingerprint: headline scores plus the top keys of each
/// frequency vector.
pub fn display_fingerprint(fp: &Fingerprint, top_keys: usize) {
    println!(
        "\n{}",
        format!(
            "=== Text Fingerprint ({} chars, {} words) ===",
            fp.character_count(),
            fp.word_count()
        )
        .bold()
    );
    println!();

    println!(
        "  Cosine (char):        {} {:.4}",
        bar(fp.cosine_similarity_char()),
        fp.cosine_similarity_char()
    );
    println!(
        "  Cosine (word):        {} {:.4}",
        bar(fp.cosine_similarity_word()),
        fp.cosine_similarity_word()
    );
    println!(
        "  Structural deviation: {:.6}",
        fp.structural_deviation()
    );
    println!();

    display_vector("Characters", fp.character_frequency(), top_keys);
    display_vector("Normalized words", fp.normalized_word_frequency(), top_keys);
    display_vector("Stopwords", fp.stopword_frequency(), top_keys);
    display_vector("Non-letter tokens", fp.nonletter_frequency(), top_keys);
}

/// Display a pairwise comparison.
pub fn display_comparison(comparison: &Comparison) {
    println!("\n{}", "=== Fingerprint Comparison ===".bold());
    println!();

    let rows = [
        ("Characters", comparison.character_similarity),
        ("Normalized chars", comparison.normalized_character_similarity),
        ("Words", comparison.word_similarity),
        ("Normalized words", comparison.normalized_word_similarity),
        ("Stopwords", comparison.stopword_similarity),
        ("Non-letter tokens", comparison.nonletter_similarity),
        ("Word overlap", comparison.word_overlap),
    ];
    for (label, value) in rows {
        println!("  {:<20} {} {:.4}", label, bar(value), value);
    }
    println!();
    println!(
        "  Mean similarity: {}",
        colorize_similarity(comparison.mean_similarity())
    );
    println!("  Deviation gap:   {:.6}", comparison.deviation_gap);
}

/// Display a drift series as one row per step.
pub fn display_drift(series: &DriftSeries, preview_chars: usize) {
    if series.is_empty() {
        println!("No snippets to analyze.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Drift Series ({} snippets) ===", series.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:>8}  {:>10}  {:>10}  {}",
        "Step".dimmed(),
        "Sim".dimmed(),
        "Deviation".dimmed(),
        "Change".dimmed(),
        "Top words".dimmed(),
    );
    println!("  {}", "-".repeat(70).dimmed());

    for step in &series.steps {
        let sim = match step.similarity_to_previous {
            Some(s) => colorize_similarity(s).to_string(),
            None => "-".dimmed().to_string(),
        };
        let words: Vec<String> = step
            .fingerprint
            .normalized_word_frequency()
            .top(3)
            .into_iter()
            .map(|(k, _)| super::truncate_chars(k, preview_chars))
            .collect();
        println!(
            "  {:>4}  {:>8}  {:>10.6}  {:>+10.6}  {}",
            step.index,
            sim,
            step.fingerprint.structural_deviation(),
            step.deviation_change,
            words.join(", ").dimmed()
        );
    }

    println!();
    if let Some(mean) = series.mean_similarity() {
        println!("  Mean neighbour similarity: {}", colorize_similarity(mean));
    }
    if let Some(brk) = series.sharpest_break() {
        println!(
            "  Sharpest break: step {} (similarity {:.4})",
            brk.index,
            brk.similarity_to_previous.unwrap_or(0.0)
        );
    }
}

fn display_vector(label: &str, vector: &FrequencyVector, top_keys: usize) {
    if vector.is_empty() {
        println!("  {}: {}", label.bold(), "(none)".dimmed());
        println!();
        return;
    }
    println!("  {} ({} keys):", label.bold(), vector.len());
    for (key, value) in vector.top(top_keys) {
        println!("    {:<16} {:.4}", super::display_key(key, 16), value);
    }
    println!();
}

/// A fixed-width bar for a value in [0, 1].
fn bar(value: f64) -> colored::ColoredString {
    let filled = (value.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    let empty = BAR_WIDTH.saturating_sub(filled);
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

    if value >= 0.75 {
        bar.bright_green()
    } else if value >= 0.40 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    }
}

fn colorize_similarity(value: f64) -> colored::ColoredString {
    let text = format!("{value:.4}");
    if value >= 0.75 {
        text.green()
    } else if value >= 0.40 {
        text.yellow()
    } else {
        text.red()
    }
}
