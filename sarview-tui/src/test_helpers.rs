//! Test helpers for building app state from a small report

use std::path::PathBuf;

use sarview_core::parse_str;

use crate::app::AppState;
use crate::config::Config;

/// Two sections, three records.
pub const SAMPLE_REPORT: &str = "\
Linux 5.15.0-91-generic (testbox) \t01/15/2024 \t_x86_64_\t(4 CPU)

02:00:01 PM CPU %usr
02:00:02 PM all 1.00
02:00:03 PM all 2.00

02:00:01 PM runq-sz plist-sz ldavg-1
02:00:02 PM 1 200 0.10
";

pub fn sample_app() -> AppState {
    let report = parse_str(SAMPLE_REPORT).expect("sample report parses");
    AppState::new(PathBuf::from("sample.sar"), report, Config::default())
}
