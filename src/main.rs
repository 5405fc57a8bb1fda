// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use std::process::ExitCode;

const USAGE: &str = "\
Usage: iced_gallery [OPTIONS] [QUERY]

Options:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --api-key <KEY>        Pixabay API key (overrides PIXABAY_API_KEY)
  -h, --help             Print this help
";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Args(#[from] pico_args::Error),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

/// Returns `None` when help was requested.
fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, CliError> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let api_key = args.opt_value_from_str("--api-key")?;

    // Remaining free arguments form the initial query ("red fox" or red fox)
    let mut words = Vec::new();
    for arg in args.finish() {
        let word = arg.to_string_lossy().into_owned();
        if word.starts_with('-') {
            return Err(CliError::UnknownOption(word));
        }
        words.push(word);
    }
    let query = (!words.is_empty()).then(|| words.join(" "));

    Ok(Some(Flags {
        lang,
        config_dir,
        api_key,
        query,
    }))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("ICED_GALLERY_LOG", "warn"))
        .init();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
