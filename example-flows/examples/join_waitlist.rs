//! Submit a waitlist signup over the mock intake, with a timeout-bounded
//! transport.

use std::sync::Arc;
use std::time::Duration;

use prelaunch_intake::{MockIntake, Role, WithTimeout};
use prelaunch_waitlist::WaitlistForm;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let intake = WithTimeout::new(
        MockIntake::new().with_delay(Duration::from_millis(400)),
        Duration::from_secs(5),
    );
    let mut form = WaitlistForm::new(Arc::new(intake));

    form.set_name("Alice");
    form.set_email("alice@example.com");
    form.set_role(Role::Coach);

    // Show the per-field validation path first.
    form.set_email("not-an-email");
    if let Err(prelaunch_waitlist::WaitlistError::Invalid(fields)) = form.submit().await {
        for field in fields {
            println!("{}: {}", field.field(), field);
        }
    }

    form.set_email("alice@example.com");
    form.submit().await?;
    println!("Joined the waitlist as {}.", form.name());
    Ok(())
}
