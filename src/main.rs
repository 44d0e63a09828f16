//! Startup check: load settings, build the application context and report
//! the state of the translation tables.

use std::process::ExitCode;

use mahila_maitri::AppContext;
use mahila_maitri::config::ConfigManager;
use mahila_maitri::i18n::Locale;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config_manager = ConfigManager::new();
    let root = std::env::current_dir().ok();
    if let Err(e) = config_manager.load_settings(root.as_deref()) {
        tracing::error!("{e}");
        return ExitCode::FAILURE;
    }

    let context = match AppContext::from_settings(config_manager.get_settings().clone()) {
        Ok(context) => context,
        Err(e) => {
            tracing::error!("Failed to start: {e}");
            return ExitCode::FAILURE;
        }
    };

    let localizer = context.localizer();
    let report = localizer.catalog().symmetry_report();
    for locale in Locale::ALL {
        tracing::info!(
            locale = %locale,
            keys = localizer.catalog().table(locale).len(),
            missing = report.missing_in(locale).len(),
            "Translation table loaded"
        );
    }
    tracing::info!(
        locale = %localizer.locale(),
        lang = localizer.document().lang(),
        "{}",
        localizer.translate("hero.title1")
    );

    if report.is_symmetric() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
