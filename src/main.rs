// SPDX-License-Identifier: MPL-2.0
use iced_toast::config::{self, Config};
use iced_toast::toast::{Coordinator, PresentationId, Presented};
use std::io::BufRead;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Show toasts one at a time in the terminal.

USAGE:
  iced_toast [OPTIONS] TITLE...

OPTIONS:
  --config PATH      Read settings from PATH instead of the user config
  --settle-ms N      Pause between two toasts, in milliseconds
  --duration SECS    How long each toast stays; 0 keeps it until Enter
  -h, --help         Print this help

Press Enter to dismiss the toast currently shown.
";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let settle_ms: Option<u64> = args.opt_value_from_str("--settle-ms")?;
    let duration_secs: Option<f64> = args.opt_value_from_str("--duration")?;
    let titles: Vec<String> = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .collect();

    if titles.is_empty() {
        print!("{HELP}");
        return Ok(());
    }

    let mut config: Config = match config_path {
        Some(path) => config::load_from_path(&path)?,
        None => config::load()?,
    };
    if settle_ms.is_some() {
        config.settle_delay_ms = settle_ms;
    }
    if duration_secs.is_some() {
        config.default_duration_secs = duration_secs;
    }

    let coordinator = Coordinator::spawn(config.settings());
    let mut current = coordinator.subscribe();

    let dismisser = coordinator.clone();
    std::thread::spawn(move || {
        for _ in std::io::stdin().lock().lines().map_while(Result::ok) {
            dismisser.dismiss_current();
        }
    });

    for title in titles {
        coordinator.enqueue(config.toast(title));
    }

    // `watch` only keeps the latest value, so a toast may come and go
    // unseen. Stop once nothing is shown and nothing is waiting.
    let mut rendered: Option<PresentationId> = None;
    loop {
        let snapshot = current.borrow_and_update().clone();
        match snapshot {
            Some(presented) if rendered != Some(presented.id()) => {
                rendered = Some(presented.id());
                render(&presented);
            }
            Some(_) => {}
            None => {
                if rendered.take().is_some() {
                    println!("  (dismissed)");
                }
                if !coordinator.has_toasts() {
                    break;
                }
            }
        }
        if current.changed().await.is_err() {
            break;
        }
    }

    coordinator.shutdown();
    Ok(())
}

fn render(presented: &Presented) {
    let toast = presented.toast();
    let timing = match toast.auto_dismiss_after() {
        Some(after) => format!("{:.1}s", after.as_secs_f64()),
        None => "until Enter".to_string(),
    };
    println!(
        "{} [{:?}/{:?}] {} ({timing})",
        presented.id(),
        toast.theme(),
        toast.position(),
        toast.title()
    );
    if !toast.message().is_empty() {
        println!("    {}", toast.message());
    }
}
