//! Scripted session for the registration form.
//!
//! Drives the form through the Store the way a screen would: an empty
//! submit, filling in every field, a clean submit, and acknowledging the
//! success notice.

use composable_register_core::environment::SystemClock;
use composable_register_runtime::Store;
use register::{
    Birthdate, EntryAction, ListKind, RegisterAction, RegisterEnvironment, RegisterReducer,
    RegisterState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_errors(state: &RegisterState) {
    let show = |field: &str, error: Option<&register::FieldError>| {
        if let Some(error) = error {
            println!("  {field:<10} {error}");
        }
    };

    show("name", state.name_error.as_ref());
    show("website", state.website_error.as_ref());
    show("birthday", state.birthday_error.as_ref());
    for kind in [ListKind::Email, ListKind::Phone] {
        for (index, entry) in state.entries(kind).iter().enumerate() {
            show(&format!("{kind}[{index}]"), entry.error.as_ref());
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "register=debug,composable_register_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Registration Form ===\n");

    let env = RegisterEnvironment::new(Arc::new(SystemClock));
    let store = Store::new(RegisterState::new(), RegisterReducer::new(), env);

    // Empty submit
    println!(">>> Submitting an empty form");
    store.send(RegisterAction::SubmitClicked).await?;
    let state = store.snapshot().await;
    println!("Phase: {:?}", state.phase());
    print_errors(&state);

    // Fill the form
    println!("\n>>> Filling in the form");
    store.send(RegisterAction::NameChanged("Charlotte".to_string())).await?;
    store
        .send(RegisterAction::WebsiteChanged("https://example.com".to_string()))
        .await?;
    store
        .send(RegisterAction::BirthdateChanged("Jan 05 1990".parse::<Birthdate>()?))
        .await?;
    store
        .send(RegisterAction::Email(EntryAction::ValueChanged {
            index: 0,
            value: "c@example.com".to_string(),
        }))
        .await?;
    store.send(RegisterAction::Email(EntryAction::Add)).await?;
    store
        .send(RegisterAction::Email(EntryAction::ValueChanged {
            index: 1,
            value: "charlotte@work.example".to_string(),
        }))
        .await?;
    store
        .send(RegisterAction::Email(EntryAction::LabelChanged {
            index: 1,
            label: "work".to_string(),
        }))
        .await?;
    store
        .send(RegisterAction::Phone(EntryAction::ValueChanged {
            index: 0,
            value: "12345678901".to_string(),
        }))
        .await?;

    // A stale index is rejected and leaves the form untouched
    if let Err(error) = store
        .send(RegisterAction::Phone(EntryAction::Delete { index: 4 }))
        .await
    {
        println!("Rejected: {error}");
    }

    let state = store.snapshot().await;
    println!("Birthday shown as: {}", state.birthday_display());
    println!(
        "Emails: {} (delete allowed on row 1: {})",
        state.emails.len(),
        state.emails.can_delete(1)
    );

    // Clean submit
    println!("\n>>> Submitting the filled form");
    store.send(RegisterAction::SubmitClicked).await?;
    let state = store.snapshot().await;
    println!("Phase: {:?}", state.phase());
    if let Some(notice) = state.success_notice() {
        println!("Notice: {notice}");
        store.send(RegisterAction::AcknowledgeSuccess).await?;
    }

    let state = store.snapshot().await;
    println!("Phase after acknowledging: {:?}", state.phase());

    println!("\n=== Session Complete ===");
    Ok(())
}
