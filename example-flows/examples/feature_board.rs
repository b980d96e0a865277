//! Exercise the feature board: vote, watch a rollback against a failing
//! intake, and suggest a new feature.

use std::sync::Arc;
use std::time::Duration;

use example_flows::seeded_features;
use prelaunch_board::FeatureBoard;
use prelaunch_intake::MockIntake;
use prelaunch_types::FeatureId;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let delay = Duration::from_millis(200);
    let streaks = FeatureId::new("1");

    let intake = Arc::new(MockIntake::new().with_delay(delay));
    let mut board = FeatureBoard::new(seeded_features(), intake);

    board.toggle_vote(&streaks).await?;
    board
        .suggest("Dark Mode", "Late-night journaling without the glare")
        .await?;

    println!("Board after voting and suggesting:");
    for feature in board.ranked() {
        println!(
            "  {:>3} votes  {} [{}]{}",
            feature.votes(),
            feature.title(),
            feature.category(),
            if feature.has_voted() { "  (voted)" } else { "" },
        );
    }

    // Same vote against a failing intake: the optimistic bump rolls back.
    let failing = Arc::new(MockIntake::failing().with_delay(delay));
    let mut flaky_board = FeatureBoard::new(seeded_features(), failing);
    let before = flaky_board.feature(&streaks).unwrap().votes();
    if let Err(error) = flaky_board.toggle_vote(&streaks).await {
        println!("Vote failed ({error}), count restored: {}", before);
    }
    assert_eq!(flaky_board.feature(&streaks).unwrap().votes(), before);

    Ok(())
}
