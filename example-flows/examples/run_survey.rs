//! Drive the full ThriveSpace survey to submission over the mock intake,
//! picking the first choice(s) of every question.

use std::sync::Arc;
use std::time::Duration;

use example_flows::thrivespace_survey;
use prelaunch_intake::MockIntake;
use prelaunch_survey::{StepOutcome, SurveyRunner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let intake = Arc::new(MockIntake::new().with_delay(Duration::from_millis(300)));
    let mut runner = SurveyRunner::new(thrivespace_survey(), intake)?;

    loop {
        let question = runner.current().clone();
        let (step, total) = runner.position();
        println!(
            "[{}/{}] [{}] {}",
            step,
            total,
            runner.section().name(),
            question.text()
        );

        let wanted = question.kind().max_selections().unwrap_or(1);
        for choice in question.choices().iter().take(wanted) {
            runner.select(choice.id())?;
            println!("  -> {}", choice.label());
        }

        match runner.advance().await {
            StepOutcome::Advanced => {}
            StepOutcome::Submitted => break,
            StepOutcome::Blocked => anyhow::bail!("gate unexpectedly blocked"),
            StepOutcome::Failed => anyhow::bail!(
                "submission failed: {}",
                runner.last_error().unwrap_or("unknown")
            ),
        }
    }

    println!("Survey submitted with {} answers.", runner.answers().len());
    Ok(())
}
