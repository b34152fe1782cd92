//! The `duty sources` command: one line per partition with its
//! configured source and a cheap availability check (local files only —
//! remote sources are reported as configured without being fetched).

use anyhow::Result;
use std::path::Path;

use duty_guide_core::model::DutyType;

use crate::config::Config;

pub fn list_sources(config: &Config) -> Result<()> {
    println!("{:<12} {:<16} SOURCE", "PARTITION", "STATUS");
    for duty_type in DutyType::ALL {
        match config.sources.for_type(duty_type) {
            None => {
                println!("{:<12} {:<16} -", duty_type.partition_name(), "NOT CONFIGURED");
            }
            Some(source) => {
                let status = if source.starts_with("http://") || source.starts_with("https://") {
                    "REMOTE"
                } else if Path::new(source).exists() {
                    "OK"
                } else {
                    "MISSING"
                };
                println!("{:<12} {:<16} {}", duty_type.partition_name(), status, source);
            }
        }
    }
    Ok(())
}
