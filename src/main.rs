mod handlers;
mod shell;

use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::Parser;
use tasklist::config::Config;
use tasklist::engine::display::Locale;
use tasklist::engine::{SortDirection, SortKey, TaskStore};

#[derive(Parser)]
#[command(name = "tasklist", version, about = "An in-memory task list")]
struct Cli {
    /// Display locale for labels and dates
    #[arg(long, env = "TASKLIST_LOCALE", default_value_t = Locale::PtBr)]
    locale: Locale,
    /// Initial sort key
    #[arg(long, env = "TASKLIST_SORT", default_value_t = SortKey::CreatedAt)]
    sort: SortKey,
    /// Initial sort direction
    #[arg(long, env = "TASKLIST_DIRECTION", default_value_t = SortDirection::Desc)]
    direction: SortDirection,
    /// Log level or filter directive (RUST_LOG takes precedence)
    #[arg(long, env = "TASKLIST_LOG", default_value = "warn")]
    log_level: String,
    /// Disable coloured output
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    no_color: bool,
    /// Do not ask for confirmation before deleting
    #[arg(long, short = 'y', env = "TASKLIST_YES", value_parser = FalseyValueParser::new())]
    yes: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            locale: self.locale,
            sort: self.sort,
            direction: self.direction,
            log_level: self.log_level,
            color: !self.no_color,
            assume_yes: self.yes,
        }
    }
}

fn main() -> Result<()> {
    let config = Cli::parse().into_config();
    tasklist::logging::init(&config.log_level)?;

    if !config.color {
        colored::control::set_override(false);
    }

    let mut store = TaskStore::new();
    store.set_sort(config.sort, config.direction);

    shell::Session::new(store, config, Box::new(std::io::stdin().lock())).run()
}
