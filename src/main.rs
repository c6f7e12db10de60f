use clap::Parser;
use dot_batch::core::engine::exit_status;
use dot_batch::utils::logger::{self, LogFormat};
use dot_batch::{BatchRenderer, CliConfig, LocalDirectory, ProcessRenderer, RenderEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let log_format = if cli.json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(log_format, cli.verbose);

    tracing::info!("Starting dot-batch");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let renderer = ProcessRenderer::new(settings.renderer.clone());
    let fail_on_error = settings.fail_on_error;
    let dry_run = settings.dry_run;
    let batch = BatchRenderer::new(LocalDirectory::new(), renderer, settings);
    let engine = RenderEngine::new(batch).with_fail_on_error(fail_on_error);

    let result = engine.run().await;
    match &result {
        Ok(report) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(report)?);
            } else if dry_run {
                println!(
                    "🔍 {} graphs would be rendered in {}",
                    report.attempted(),
                    report.directory.display()
                );
            } else {
                println!(
                    "✅ Rendered {} of {} graphs in {}",
                    report.succeeded(),
                    report.attempted(),
                    report.directory.display()
                );
                for failure in report.failures() {
                    println!("⚠️  {}: {:?}", failure.job.input.display(), failure.status);
                }
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Render run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
        }
    }

    let code = exit_status(&result);
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
