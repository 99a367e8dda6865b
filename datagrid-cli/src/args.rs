use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use datagrid::Region;
use simplelog::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "datagrid-cli")]
#[command(about = "Mount data grids from a page description and replay user events", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON list of mount points: [{"table", "items", "columns", "page_size"?}]
    pub page: PathBuf,

    /// JSON list of scripted steps to replay before printing
    #[arg(long)]
    pub events: Option<PathBuf>,

    /// Print only this region of each grid
    #[arg(long)]
    pub region: Option<RegionArg>,

    #[arg(long, default_value = "datagrid.log")]
    pub log_file: PathBuf,

    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RegionArg {
    Search,
    Counts,
    Head,
    Body,
    Pagination,
    Menu,
}

impl From<RegionArg> for Region {
    fn from(arg: RegionArg) -> Self {
        match arg {
            RegionArg::Search => Region::Search,
            RegionArg::Counts => Region::Counts,
            RegionArg::Head => Region::Head,
            RegionArg::Body => Region::Body,
            RegionArg::Pagination => Region::Pagination,
            RegionArg::Menu => Region::Menu,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Off => write!(f, "off"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
