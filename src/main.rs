use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;

use emufront::logging::init_tracing;
use emufront::render::RecordingSurface;
use emufront::settings::ValueSlot;
use emufront::{status, Buttons, Frontend, FrontendConfig, Screen, UiResult};

/// Drive the front-end headlessly with a scripted sequence of button presses.
#[derive(Debug, Parser)]
#[command(name = "emufront", version)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory to start browsing in (overrides config)
    #[arg(long)]
    dir: Option<String>,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Buttons pressed, one per frame
    #[arg(long, value_delimiter = ',')]
    keys: Vec<Key>,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Key {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    X,
    /// Frame without input
    Idle,
    /// Open the settings menu (application hotkey)
    Menu,
    /// Pause the running game (application hotkey)
    Pause,
}

impl Key {
    fn buttons(self) -> Buttons {
        match self {
            Self::Up => Buttons::UP,
            Self::Down => Buttons::DOWN,
            Self::Left => Buttons::LEFT,
            Self::Right => Buttons::RIGHT,
            Self::A => Buttons::A,
            Self::B => Buttons::B,
            Self::X => Buttons::X,
            Self::Idle | Self::Menu | Self::Pause => Buttons::empty(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    screen: &'static str,
    results: Vec<UiResult>,
    directory: String,
    cursor: usize,
    selected_file: Option<String>,
    rows: Vec<String>,
    settings: Vec<(String, u32)>,
}

/// Slots the application reads its settings from.
struct DemoSettings {
    scale: ValueSlot,
    vsync: ValueSlot,
    frame_skip: ValueSlot,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(FrontendConfig::config_path);
    let mut config = FrontendConfig::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if let Some(dir) = &cli.dir {
        config.start_directory = dir.clone();
    }

    let mut frontend = Frontend::from_config(&config);
    let demo = register_settings(&mut frontend)?;

    let mut surface = RecordingSurface::new(cli.width, cli.height);
    let mut results = Vec::new();
    for key in &cli.keys {
        surface.clear();
        match key {
            Key::Menu => frontend.push_screen(Screen::Settings),
            Key::Pause => frontend.push_screen(Screen::Paused),
            _ => {}
        }
        let result = frontend.frame(&mut surface, key.buttons());
        results.push(result);
        if !apply_result(&mut frontend, &demo, result) {
            break;
        }
    }

    let report = Report {
        screen: frontend.current_screen().label(),
        results,
        directory: frontend.browser().current_directory().to_string(),
        cursor: frontend.nav().cursor,
        selected_file: frontend.selected_file().map(str::to_string),
        rows: surface.texts().into_iter().map(str::to_string).collect(),
        settings: frontend
            .settings()
            .persisted_values()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect(),
    };
    print_report(&report, cli.json)?;

    frontend.save_settings();
    Ok(())
}

fn register_settings(frontend: &mut Frontend) -> anyhow::Result<DemoSettings> {
    let demo = DemoSettings {
        scale: ValueSlot::new(0),
        vsync: ValueSlot::new(1),
        frame_skip: ValueSlot::new(0),
    };
    let settings = frontend.settings_mut();
    settings.add_toggle("Scale", demo.scale.clone(), ["1x", "2x", "3x"])?;
    settings.add_toggle("VSync", demo.vsync.clone(), ["Off", "On"])?;
    settings.add_toggle("Frame Skip", demo.frame_skip.clone(), ["0", "1", "2", "3"])?;
    frontend.finalize_and_load_settings()?;
    Ok(demo)
}

/// React to a frame result the way an emulator would. Returns `false` once
/// the application should stop.
fn apply_result(frontend: &mut Frontend, demo: &DemoSettings, result: UiResult) -> bool {
    match result {
        UiResult::None => {}
        UiResult::Exit => return false,
        UiResult::FileSelected => {
            let file = frontend.selected_file().unwrap_or_default().to_string();
            status!(frontend, "Loaded {}", file);
            frontend.push_screen(Screen::Running);
        }
        UiResult::SettingsChanged => {
            tracing::debug!(
                "Applying settings: scale={} vsync={} frame_skip={}",
                demo.scale.get(),
                demo.vsync.get(),
                demo.frame_skip.get()
            );
        }
        UiResult::Unpause => frontend.pop_screen(),
        UiResult::LoadState => {
            status!(frontend, "Savestate loaded");
            frontend.pop_screen();
        }
        UiResult::SaveState => {
            status!(frontend, "Savestate written");
            frontend.pop_screen();
        }
        UiResult::Close => {
            frontend.pop_screen();
            if frontend.current_screen() == Screen::Running {
                frontend.pop_screen();
            }
        }
    }
    true
}

fn print_report(report: &Report, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    println!("screen:    {}", report.screen);
    println!("directory: {}", report.directory);
    println!("cursor:    {}", report.cursor);
    if let Some(file) = &report.selected_file {
        println!("selected:  {}", file);
    }
    println!("results:   {:?}", report.results);
    for row in &report.rows {
        println!("  {}", row);
    }
    for (name, value) in &report.settings {
        println!("  {} = {}", name, value);
    }
    Ok(())
}
