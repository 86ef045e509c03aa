use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use palm_classify::classifier::{ClassificationTask, Classifier, SampleReport};
use palm_classify::error::{PalmError, Result};
use palm_classify::render::Presenter;
use palm_classify::sample::ImageSample;
use palm_classify::{cli, config, scanner};
use palm_classify_common::ClassificationOutcome;
use cli::{Cli, Commands};
use config::{Config, SettingsChanges};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load()?;
    let ansi = std::io::stdout().is_terminal();
    let mut presenter = Presenter::new(&config, ansi);

    match cli.command {
        Commands::Classify { paths, stdin, json } => {
            let server_url = config.resolve_server_url(cli.server.as_deref())?;
            let classifier = Arc::new(Classifier::new(&server_url)?);

            // 標準入力から取り込んだ一時ファイルは判定後に削除する
            let (samples, imported) = if stdin {
                let cache_dir = ImageSample::default_cache_dir()?;
                let sample = ImageSample::import_blocking(std::io::stdin(), cache_dir).await?;
                (vec![sample.clone()], Some(sample))
            } else {
                (scanner::collect_samples(&paths)?, None)
            };

            tracing::info!(url = classifier.predict_url(), samples = samples.len(), "starting classification");

            let mut reports = Vec::with_capacity(samples.len());
            let mut failed = false;

            // 1枚ずつ順番に判定（同時実行はしない）
            for sample in samples {
                let spinner = if json || !ansi {
                    ProgressBar::hidden()
                } else {
                    new_spinner(&format!("{} {}", sample.file_name, presenter.language().uploading()))
                };

                let result = classify_one(classifier.clone(), sample.clone()).await;
                spinner.finish_and_clear();

                if !json {
                    println!("📷 {}", sample.file_name);
                    match &result {
                        Ok(outcome) => println!("{}\n", presenter.outcome(outcome)),
                        Err(err) => eprintln!("{}\n", presenter.error_notice(err)),
                    }
                }

                let cancelled = matches!(result, Err(PalmError::Cancelled));
                failed |= result.is_err();
                reports.push(SampleReport::new(&sample, &result));

                if cancelled {
                    break;
                }
            }

            if let Some(sample) = imported {
                if let Err(e) = sample.remove_file().await {
                    tracing::warn!(path = %sample.path.display(), error = %e, "failed to remove imported sample");
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }

            if failed {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Species => {
            println!("{}", presenter.species_cards());
        }

        Commands::Settings { language, toggle_language, dark_mode, server_url, show } => {
            let changes = SettingsChanges {
                language,
                toggle_language,
                dark_mode,
                server_url,
            };
            let changed = config.apply_changes(changes, &Config::config_path()?)?;
            if changed {
                // 変更後の設定で表示層を組み直す
                presenter = Presenter::new(&config, ansi);
                println!("✔ settings saved");
                println!("{}", presenter.label_row(None));
            }

            if show || !changed {
                println!("settings:");
                println!("  language:   {}", config.language);
                println!("  dark mode:  {}", config.dark_mode);
                println!("  server url: {}", config.server_url);
                println!("  file:       {}", Config::config_path()?.display());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// 1枚を判定。Ctrl-C で通信を中断する
async fn classify_one(classifier: Arc<Classifier>, sample: ImageSample) -> Result<ClassificationOutcome> {
    let mut task = ClassificationTask::spawn(classifier, sample);

    tokio::select! {
        result = task.outcome() => result,
        _ = tokio::signal::ctrl_c() => {
            task.cancel();
            Err(PalmError::Cancelled)
        }
    }
}

fn new_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style.tick_chars("▁▃▅▇▅▃ "));
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(160));
    spinner
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
