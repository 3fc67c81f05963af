// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use toastful::app::{self, Flags};
use toastful::toast::Position;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toastful=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = pico_args::Arguments::from_env();

    let position = args
        .opt_value_from_str::<_, Position>("--position")
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --position");
            None
        });
    let config_path = args
        .opt_value_from_str::<_, PathBuf>("--config")
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --config");
            None
        });

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unknown arguments");
    }

    tracing::info!("Starting toastful demo");
    app::run(Flags {
        position,
        config_path,
    })
}
