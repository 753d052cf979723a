// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Env};
use iced_giffy::app::{self, Flags};
use iced_giffy::config::FitMode;
use iced_giffy::fetch::Url;
use std::path::PathBuf;
use std::process;

const ENV_LOG: &str = "ICED_GIFFY_LOG";

const USAGE: &str = "\
Usage: iced_giffy [OPTIONS] <URL>

Options:
  --fit <MODE>      contain, cover, fill, none or scale-down
  --config <PATH>   read settings from PATH instead of the default location
  -h, --help        print this help";

fn parse_flags() -> Result<Flags, String> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        process::exit(0);
    }

    let fit: Option<FitMode> = args
        .opt_value_from_str("--fit")
        .map_err(|e| e.to_string())?;
    let config_path: Option<PathBuf> = args
        .opt_value_from_os_str("--config", |s| Ok::<_, String>(PathBuf::from(s)))
        .map_err(|e| e.to_string())?;

    let url = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok())
        .ok_or_else(|| "missing <URL>".to_string())?;
    let url = Url::parse(&url).map_err(|e| format!("invalid URL '{url}': {e}"))?;

    Ok(Flags {
        url,
        fit,
        config_path,
    })
}

fn main() -> iced::Result {
    Builder::from_env(Env::new().filter_or(ENV_LOG, "warn")).init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            process::exit(2);
        }
    };

    app::run(flags)
}
