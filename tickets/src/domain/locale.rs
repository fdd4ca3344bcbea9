//! Output language for table headers and durations.

/// Language used for the table header and duration units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// The words placed after the hour and minute parts of a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationUnits {
    pub hour: &'static str,
    pub minute: &'static str,
}

const EN_HEADER: [&str; 10] = [
    "Train",
    "Station",
    "Time",
    "Duration",
    "First",
    "Second",
    "Soft sleeper",
    "Hard sleeper",
    "Hard seat",
    "Standing",
];

const ZH_HEADER: [&str; 10] = [
    "车次", "车站", "时间", "历时", "一等", "二等", "软卧", "硬卧", "硬座", "无座",
];

impl Locale {
    /// Units used when formatting a travel duration.
    pub fn duration_units(self) -> DurationUnits {
        match self {
            Locale::En => DurationUnits {
                hour: "hour",
                minute: "minute",
            },
            Locale::Zh => DurationUnits {
                hour: "小时",
                minute: "分",
            },
        }
    }

    /// The fixed ten-column table header.
    pub fn header(self) -> [&'static str; 10] {
        match self {
            Locale::En => EN_HEADER,
            Locale::Zh => ZH_HEADER,
        }
    }
}
