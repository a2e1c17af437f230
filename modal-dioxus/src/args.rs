//! Command-line argument parsing for `mdx`.

use std::path::PathBuf;

/// What the demo binary was asked to do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupArgs {
    /// Configuration file to load instead of the default location.
    pub config: Option<PathBuf>,
    /// Registered component to show as soon as the window opens.
    pub show: Option<String>,
}

/// Parse the process arguments.
pub fn parse_args() -> StartupArgs {
    parse(std::env::args().skip(1))
}

/// Parse `--config <path>` and `--show <component>`. Unknown arguments are
/// logged and ignored.
pub fn parse(args: impl IntoIterator<Item = String>) -> StartupArgs {
    let mut startup = StartupArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => match args.next() {
                Some(path) => startup.config = Some(PathBuf::from(path)),
                None => log::warn!("--config expects a path"),
            },
            "--show" | "-s" => match args.next() {
                Some(name) => startup.show = Some(name),
                None => log::warn!("--show expects a component name"),
            },
            other => log::warn!("Ignoring unknown argument: {other}"),
        }
    }

    startup
}
