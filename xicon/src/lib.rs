use appicon::Category;
use std::fmt::Write;
use std::path::Path;

mod task;

pub use task::TaskRunner;

/// Routes `log` records and panics through a stderr `tracing` subscriber.
///
/// The filter is read from `XICON_LOG`, falling back to `debug` when
/// `verbose` is set and `error` otherwise.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let default = if verbose { "debug" } else { "error" };
    let env = std::env::var("XICON_LOG").unwrap_or_else(|_| default.into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
}

/// Renders the layout of a generated icon set.
pub fn tree_summary(root: &Path) -> String {
    let mut out = String::new();
    writeln!(out, "   {}/", root.display()).ok();
    let last = Category::ALL.len() - 1;
    for (i, category) in Category::ALL.into_iter().enumerate() {
        let branch = if i == last { "└──" } else { "├──" };
        let count = category.icons().count();
        let files = if count == 1 { "file" } else { "files" };
        let dir = format!("{}/", category);
        writeln!(out, "   {} {:<11} ({} {})", branch, dir, count, files).ok();
    }
    out
}
