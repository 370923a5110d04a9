use clap::Args;
use coaching_eval::error::AppError;
use coaching_eval::evaluation::catalog::{self, category_capacity, Category};
use coaching_eval::evaluation::{EvaluationOutcome, RatingSet, ScoringEngine};
use coaching_eval::scoresheet;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file mapping criterion ids to ratings
    #[arg(long)]
    pub(crate) ratings: PathBuf,
    /// Also write a per-criterion score sheet to this CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) fn run_criteria() {
    println!("Coaching criteria");
    for category in Category::ordered() {
        println!(
            "\n{} ({} points)",
            category.label(),
            category_capacity(category)
        );
        for criterion in catalog::criteria_in(category) {
            println!(
                "- {} | {} | max {}",
                criterion.id, criterion.title, criterion.max_score
            );
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { ratings, csv } = args;

    let ratings = scoresheet::read_ratings_from_path(&ratings)?;
    let engine = ScoringEngine::default();
    let outcome = engine.evaluate(&ratings);
    debug!(rated = ratings.len(), total = outcome.breakdown.total, "scored ratings file");

    render_outcome(&ratings, &outcome);

    if let Some(path) = csv {
        scoresheet::write_csv_to_path(&path, &ratings, engine.catalog())?;
        println!("\nScore sheet written to {}", path.display());
    }

    Ok(())
}

fn render_outcome(ratings: &RatingSet, outcome: &EvaluationOutcome) {
    println!("Coaching evaluation");
    println!(
        "Rated criteria: {}/{}",
        ratings.len(),
        catalog::catalog().len()
    );

    println!("\nCategory subtotals");
    for category in Category::ordered() {
        println!(
            "- {}: {:.1}/{}",
            category.label(),
            outcome.breakdown.subtotal(category),
            category_capacity(category)
        );
    }

    println!(
        "\nTotal: {:.1}/100 -> {} [{}]",
        outcome.breakdown.total,
        outcome.label,
        outcome.severity.color()
    );

    if outcome.recommendations.is_empty() {
        println!("\nRecommendations: none");
    } else {
        println!("\nRecommendations");
        for recommendation in &outcome.recommendations {
            println!("- {recommendation}");
        }
    }
}
