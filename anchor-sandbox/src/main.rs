mod script;

use anchor::AnchorSettings;
use log::*;
use script::Script;
use std::io::Write;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

#[derive(StructOpt, Clone)]
#[structopt(
    name = "anchor-sandbox",
    about = "Replays scripted camera poses and pick events through an anchoring session"
)]
struct Opt {
    /// The file where settings are specified.
    ///
    /// This is in the format of `anchor::AnchorSettings`. Defaults are used if it is missing.
    #[structopt(short, long, default_value = "anchor-settings.json")]
    settings: PathBuf,
    /// Pretty-print each frame instead of writing one JSON object per line.
    #[structopt(long)]
    pretty: bool,
    /// The script of camera poses and pick events to replay.
    #[structopt(parse(from_os_str))]
    script: PathBuf,
}

/// Reads settings from `path`, falling back to the defaults if it is missing or malformed.
fn load_settings(path: &Path) -> AnchorSettings {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(_) => {
            info!("used default settings");
            return AnchorSettings::default();
        }
    };
    match serde_json::from_reader(file) {
        Ok(settings) => {
            info!("loaded existing settings");
            settings
        }
        Err(e) => {
            warn!(
                "unable to parse settings {}, using defaults: {}",
                path.display(),
                e
            );
            AnchorSettings::default()
        }
    }
}

fn main() {
    pretty_env_logger::init_timed();
    let opt = Opt::from_args();

    let settings = load_settings(&opt.settings);

    info!("loading script {}", opt.script.display());
    let script: Script = match std::fs::File::open(&opt.script)
        .map_err(|e| e.to_string())
        .and_then(|file| serde_json::from_reader(file).map_err(|e| e.to_string()))
    {
        Ok(script) => script,
        Err(e) => {
            error!("unable to load script {}: {}", opt.script.display(), e);
            std::process::exit(1);
        }
    };

    let frames = match script.run(settings) {
        Ok(frames) => frames,
        Err(e) => {
            error!("script failed: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for frame in &frames {
        let written = if opt.pretty {
            serde_json::to_writer_pretty(&mut out, frame)
        } else {
            serde_json::to_writer(&mut out, frame)
        };
        if let Err(e) = written.map_err(std::io::Error::from).and_then(|_| writeln!(out)) {
            error!("unable to write frame {}: {}", frame.frame, e);
            std::process::exit(1);
        }
    }
}
