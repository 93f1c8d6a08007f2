//! dataflow-audit CLI
//!
//! Logs in, walks every worker group and writes `dataflow.csv`.

use dataflow_audit::auth::TerminalPrompt;
use dataflow_audit::cli::{Cli, Runner};
use dataflow_audit::config::Settings;
use dataflow_audit::Error;

#[tokio::main]
async fn main() {
    // Logs go to stderr so prompts on stdout stay readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = match Cli::from_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(Error::Help(e)) => e.exit(),
        Err(e) => fail(e),
    };
    let settings = Settings::load().unwrap_or_else(|e| fail(e));
    let runner = Runner::new(cli, settings);

    match runner.run(&mut TerminalPrompt).await {
        Ok(summary) => println!(
            "Wrote {} rows for {} worker groups to {}",
            summary.rows,
            summary.worker_groups,
            summary.output_path.display()
        ),
        Err(e) => fail(e),
    }
}

fn fail(e: Error) -> ! {
    if e.is_usage() {
        println!("{e}");
    } else {
        eprintln!("\n{e}");
    }
    std::process::exit(1);
}
