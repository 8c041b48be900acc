use anyhow::Result;
use clap::Parser;
use client_core::{config, AssistantSession};
use shared::domain::LanguageCode;

#[derive(Parser, Debug)]
struct Args {
    /// Remote service base URL; falls back to CARELINE_SERVER_URL, then
    /// the built-in default.
    #[arg(long)]
    server_url: Option<String>,
    /// Target language code (hi, ta, te, bn, es, fr, ar, en).
    #[arg(long, default_value = "hi")]
    language: String,
    /// Health message to translate.
    #[arg(long, default_value = "Take your medicine after breakfast")]
    message: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let server_url = args
        .server_url
        .unwrap_or_else(|| config::load_settings().server_url);
    let session = AssistantSession::new(server_url);

    match session.service().health().await {
        Ok(health) => println!("Service reachable (status: {})", health.status),
        Err(err) => tracing::warn!("service health probe failed: {err}"),
    }

    // Initial mount refresh; a failure leaves the list empty and writes a
    // notice, same as any later refresh.
    let _ = session.fetch_reminders().await;

    if let Some(language) = LanguageCode::from_code(&args.language) {
        session.set_target_language(language).await;
    } else {
        tracing::warn!(language = %args.language, "unknown language code; keeping default");
    }
    session.set_translation_text(args.message).await;
    let _ = session.translate().await;

    let snapshot = session.snapshot().await;
    if let Some(outcome) = &snapshot.translation.result {
        println!(
            "[{}] {} -> {}",
            outcome.target_language.code(),
            outcome.source_text,
            outcome.translated_text
        );
    }
    if !snapshot.notice.is_empty() {
        println!("Notice: {}", snapshot.notice.message);
    }

    if snapshot.reminders.is_empty() {
        println!("No reminders.");
    } else {
        for reminder in &snapshot.reminders {
            println!(
                "Reminder #{}: {} ({}) at {} [{}]",
                reminder.id.0,
                reminder.medicine,
                reminder.dosage,
                reminder.time,
                reminder.language.code()
            );
        }
    }

    Ok(())
}
