//! Intervals listing command implementation.

use anyhow::Result;
use fxharvest_lib::prelude::*;

/// List the supported sampling intervals.
pub(crate) fn list_intervals() -> Result<()> {
    println!("{:<8} {}", "TOKEN", "BAR DURATION");
    for interval in Interval::all() {
        println!("{:<8} {}s", interval.as_str(), interval.seconds());
    }

    Ok(())
}
