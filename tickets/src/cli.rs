//! Command-line interface.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::domain::{FilterOptions, Locale, TrainCategory};
use crate::query::Presentation;
use crate::stations::{StationCache, StationCacheConfig, StationClientConfig};
use crate::table::TableStyle;
use crate::ticket::TicketClientConfig;

/// When to color departure and arrival lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Only when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }
}

/// Command-line train ticket viewer.
#[derive(Debug, Parser)]
#[command(
    name = "tickets",
    version,
    about = "Show train ticket availability from 12306",
    after_help = "Examples:\n  tickets 北京 上海 2016-10-10\n  tickets -dg 成都 南京 2016-10-10"
)]
pub struct Args {
    /// Departure station name (Chinese or pinyin)
    pub from: String,

    /// Arrival station name (Chinese or pinyin)
    pub to: String,

    /// Travel date, YYYY-MM-DD
    pub date: String,

    /// High-speed (G) trains
    #[arg(short = 'g')]
    pub high_speed: bool,

    /// Bullet (D) trains
    #[arg(short = 'd')]
    pub bullet: bool,

    /// Express (T) trains
    #[arg(short = 't')]
    pub express: bool,

    /// Fast (K) trains
    #[arg(short = 'k')]
    pub fast: bool,

    /// Direct (Z) trains
    #[arg(short = 'z')]
    pub direct: bool,

    /// Language of the table header and durations
    #[arg(long, value_enum, default_value_t)]
    pub lang: Locale,

    /// Color departure and arrival lines
    #[arg(long, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Read stations from a local station_name.js
    #[arg(long, value_name = "PATH")]
    pub stations_file: Option<PathBuf>,

    /// Station list cache file
    #[arg(long, value_name = "PATH")]
    pub cache: Option<PathBuf>,

    /// Always download the station list
    #[arg(long)]
    pub no_cache: bool,

    /// Ticket API base URL
    #[arg(long, env = "TICKETS_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Ticket query endpoint path
    #[arg(long, env = "TICKETS_QUERY_PATH", value_name = "PATH")]
    pub query_path: Option<String>,

    /// Station list URL
    #[arg(long, env = "TICKETS_STATION_URL", value_name = "URL")]
    pub station_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30, value_name = "SECS")]
    pub timeout: u64,

    /// Do not verify TLS certificates
    #[arg(long)]
    pub insecure: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Categories selected with `-g -d -t -k -z`.
    pub fn filter(&self) -> FilterOptions {
        [
            (self.high_speed, TrainCategory::HighSpeed),
            (self.bullet, TrainCategory::Bullet),
            (self.express, TrainCategory::Express),
            (self.fast, TrainCategory::Fast),
            (self.direct, TrainCategory::Direct),
        ]
        .into_iter()
        .filter_map(|(selected, category)| selected.then_some(category))
        .collect()
    }

    pub fn presentation(&self) -> Presentation {
        Presentation {
            filter: self.filter(),
            locale: self.lang,
            style: TableStyle {
                color: self.color.enabled(),
            },
        }
    }

    pub fn ticket_config(&self) -> TicketClientConfig {
        let mut config = TicketClientConfig::new()
            .with_timeout(self.timeout)
            .with_invalid_certs(self.insecure);
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url);
        }
        if let Some(path) = &self.query_path {
            config = config.with_query_path(path);
        }
        config
    }

    pub fn station_config(&self) -> StationClientConfig {
        let config = StationClientConfig::new()
            .with_timeout(self.timeout)
            .with_invalid_certs(self.insecure);
        match &self.station_url {
            Some(url) => config.with_url(url),
            None => config,
        }
    }

    /// The station cache to use, unless disabled.
    pub fn station_cache(&self) -> Option<StationCache> {
        if self.no_cache {
            return None;
        }
        let config = match &self.cache {
            Some(path) => StationCacheConfig::new(path),
            None => StationCacheConfig::default(),
        };
        Some(StationCache::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("tickets").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn positional_arguments() {
        let args = parse(&["北京", "上海", "2016-10-10"]);
        assert_eq!(args.from, "北京");
        assert_eq!(args.to, "上海");
        assert_eq!(args.date, "2016-10-10");
        assert!(args.filter().is_empty());
        assert_eq!(args.lang, Locale::En);
        assert_eq!(args.color, ColorChoice::Auto);
    }

    #[test]
    fn combined_category_flags() {
        let args = parse(&["-dg", "成都", "南京", "2016-10-10"]);
        let letters: String = args.filter().categories().map(|c| c.letter()).collect();
        assert_eq!(letters, "gd");
    }

    #[test]
    fn all_category_flags() {
        let args = parse(&["-gdtkz", "a", "b", "2016-10-10"]);
        assert_eq!(args.filter().categories().count(), 5);
    }

    #[test]
    fn missing_positional_is_an_error() {
        assert!(Args::try_parse_from(["tickets", "北京", "上海"]).is_err());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(Args::try_parse_from(["tickets", "-x", "a", "b", "2016-10-10"]).is_err());
    }

    #[test]
    fn options_reach_client_configs() {
        let args = parse(&[
            "--base-url",
            "http://localhost:1",
            "--station-url",
            "http://localhost:2/s.js",
            "--timeout",
            "7",
            "--insecure",
            "a",
            "b",
            "2016-10-10",
        ]);
        let ticket = args.ticket_config();
        assert_eq!(ticket.base_url, "http://localhost:1");
        assert_eq!(ticket.timeout_secs, 7);
        assert!(ticket.accept_invalid_certs);

        let station = args.station_config();
        assert_eq!(station.url, "http://localhost:2/s.js");
        assert!(station.accept_invalid_certs);
    }

    #[test]
    fn color_and_language() {
        let args = parse(&["--color", "never", "--lang", "zh", "a", "b", "2016-10-10"]);
        let presentation = args.presentation();
        assert!(!presentation.style.color);
        assert_eq!(presentation.locale, Locale::Zh);

        let args = parse(&["--color", "always", "a", "b", "2016-10-10"]);
        assert!(args.presentation().style.color);
    }

    #[test]
    fn cache_can_be_disabled_or_moved() {
        assert!(parse(&["--no-cache", "a", "b", "2016-10-10"]).station_cache().is_none());

        let args = parse(&["--cache", "/tmp/s.json", "a", "b", "2016-10-10"]);
        let cache = args.station_cache().unwrap();
        assert_eq!(cache.path(), std::path::Path::new("/tmp/s.json"));
    }
}
