use std::fs;

use super::die;

pub fn settings_export() {
    print!("{}", boin_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        boin_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: candidates.max_results={}, dictionary.on_duplicate={:?}",
        s.candidates.max_results, s.dictionary.on_duplicate
    );
}

/// Install `file` as the process-wide settings before any command runs.
pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(boin_core::settings::init_custom(content), "Error: {}");
}
