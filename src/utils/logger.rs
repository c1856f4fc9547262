use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "widget_kit=debug,info"
    } else {
        "widget_kit=warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

pub fn init_cli_logger(verbose: bool) {
    let filter = default_filter(verbose);

    // stdout 保留給報表輸出
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    let filter = default_filter(verbose);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_follows_verbose() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let verbose = default_filter(true).to_string().to_lowercase();
        let quiet = default_filter(false).to_string().to_lowercase();
        assert!(verbose.contains("widget_kit=debug"));
        assert!(quiet.contains("widget_kit=warn"));
        assert!(!quiet.contains("debug"));
    }
}
