// SPDX-License-Identifier: MPL-2.0
use ninart::app::{self, Flags};
use ninart::domain::viewer::Presentation;
use std::path::PathBuf;

const HELP: &str = "\
ninart - art gallery catalog and product viewer

USAGE:
  ninart [OPTIONS]

OPTIONS:
  -h, --help              Print this help
      --lang <ID>         Interface language (en-US, ka)
      --catalog <PATH>    TOML catalog table to show
      --remote            Load the catalog from the content API
      --config-dir <DIR>  Directory holding settings.toml
      --assets <DIR>      Directory relative photo paths are resolved against
      --mobile            Use the fullscreen mobile viewer
      --desktop           Use the desktop modal viewer
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {remaining:?}");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let mobile = args.contains("--mobile");
    let desktop = args.contains("--desktop");
    let presentation = match (mobile, desktop) {
        (true, _) => Some(Presentation::Mobile),
        (false, true) => Some(Presentation::Desktop),
        (false, false) => None,
    };

    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        catalog: args.opt_value_from_str::<_, PathBuf>("--catalog")?,
        remote: args.contains("--remote"),
        config_dir: args.opt_value_from_str("--config-dir")?,
        assets: args.opt_value_from_str::<_, PathBuf>("--assets")?,
        presentation,
    })
}
