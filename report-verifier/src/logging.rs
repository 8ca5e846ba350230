use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Map the `-v` count to a filter directive.
fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install a stderr subscriber so diagnostics never mix with the stdout report.
pub fn init(verbose: u8) {
    let level = level_for(verbose);
    let filter = EnvFilter::new(format!("report_verifier={level},verify_installation={level}"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();

    tracing::debug!(level, "logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(7), "debug");
    }
}
