//! Display functions for command results

use super::formatters::{colored_ops, create_progress_bar, format_table, ops_description};
use crate::commands::{AnalysisResult, BenchmarkResult, DistanceReport, GameRecord};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(record: &GameRecord, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        record.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in record.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.text().to_uppercase(),
            colored_ops(&step.signature)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(average) = step.average_distance {
                println!("  Avg distance to peers: {average:.2}");
            }
            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if record.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", record.num_guesses())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", record.num_guesses())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "OPENING ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    let max_entropy = (result.total_candidates.max(1) as f64).log2();
    let bar = create_progress_bar(metrics.entropy, max_entropy, 30);

    println!("\n📊 Against {} candidates:", result.total_candidates);
    println!(
        "   Entropy:       [{}] {}",
        bar.green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!("   Avg distance:  {:.2}", metrics.average_distance);
    println!("   Signatures:    {}", metrics.partitions);
    println!(
        "   Expected:      {:.1} candidates remain",
        metrics.expected_remaining
    );
    println!("   Worst case:    {} candidates", metrics.max_partition);

    if !result.largest_groups.is_empty() {
        println!("\n🧩 {}", "Largest groups:".bright_cyan().bold());
        for (signature, count) in &result.largest_groups {
            println!("   {:<16} {count:5}", colored_ops(signature));
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let total = result.total_words.max(1) as f64;
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / total) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Unsolved:".red().bold());
        for word in result.failures.iter().take(10) {
            println!("   {}", word.text().to_uppercase().red());
        }
    }
}

/// Print a distance comparison
pub fn print_distance_report(report: &DistanceReport) {
    println!(
        "\n{} → {}",
        report.source.text().to_uppercase().bright_white().bold(),
        report.target.text().to_uppercase().bright_white().bold()
    );
    println!(
        "   Distance:   {}",
        report.distance.to_string().bright_yellow().bold()
    );
    println!("   Operations: {}", ops_description(&report.ops));

    if !report.edits.is_empty() {
        println!("   Script:");
        for edit in &report.edits {
            println!("     {edit}");
        }
    }

    if let Some(table) = &report.table {
        println!();
        print!("{}", format_table(table, &report.source, &report.target));
    }
}
