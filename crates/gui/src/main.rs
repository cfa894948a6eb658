use std::{
    io,
    path::PathBuf,
    sync::{LazyLock, RwLock},
};

use app::{App, AppTab};
use clap::Parser;
use common::{inventory::Inventory, sample::sample_inventory};
use iced::Theme;
use settings::keymap::Config;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod app;
mod icons;
mod inventory;
mod item;
mod presentation;
mod settings;

const DARK_THEME: Theme = Theme::TokyoNight;
const LIGHT_THEME: Theme = Theme::Light;

static CONFIG: LazyLock<RwLock<Config>> = LazyLock::new(|| RwLock::new(Config::default()));

#[derive(Parser, Debug)]
#[command(
    version,
    name = "Inventory",
    about = "Tabbed inventory editor with confirm-to-delete and sheet based item forms."
)]
struct Args {
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Tab to open on startup
    #[arg(long, value_enum)]
    tab: Option<AppTab>,

    /// Start with an empty inventory instead of the sample items
    #[arg(long)]
    empty: bool,
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_writer(io::stdout)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gui=info,common=info")),
        )
        .init();

    let args = Args::parse();
    if let Some(p) = args.config {
        match Config::load(&p) {
            Ok(config) => match CONFIG.write() {
                Ok(mut c) => *c = config,
                Err(e) => error!("Config lock poisoned: {}", e),
            },
            Err(e) => error!("Falling back to the default config: {:#}", e),
        }
    }

    let (dark_mode, delete_prompt) = match CONFIG.read() {
        Ok(c) => {
            for (keys, action) in &c.bindings {
                debug!("Bound {} to {:?}", keys, action);
            }
            (c.theme.is_dark(), c.delete_prompt)
        }
        Err(_) => (true, Default::default()),
    };

    let inventory = if args.empty {
        Inventory::new()
    } else {
        sample_inventory().unwrap_or_else(|e| {
            error!("{:#}", e);
            Inventory::new()
        })
    };
    let tab = args.tab.unwrap_or_default();

    iced::application(
        move || {
            (
                App::new(tab, inventory.clone(), dark_mode, delete_prompt),
                iced::Task::none(),
            )
        },
        App::update,
        App::view,
    )
    .antialiasing(true)
    .window_size((480.0, 720.0))
    .theme(theme)
    .subscription(App::subscription)
    .title("Inventory")
    .run()
}

pub fn theme(app: &App) -> Theme {
    match app.dark_mode {
        true => DARK_THEME,
        false => LIGHT_THEME,
    }
}
