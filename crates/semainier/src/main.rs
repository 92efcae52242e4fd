//! semainier: weekly git commit report, rendered to PDF
//!
//! This binary walks the trailing week of a repository's commit history,
//! buckets commit subjects into topical categories and writes a PDF report
//! with a prose summary and a detailed commit table.

use clap::Parser;

use semainier::config::Config;
use semainier::pipeline;

fn main() {
    let config = Config::parse();

    // Logs go to stderr; the confirmation message owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match pipeline::run(&config) {
        Ok(output) => {
            println!("Rapport généré avec succès : {}", output.display());
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}
