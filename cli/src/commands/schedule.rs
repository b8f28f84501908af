//! Schedule command

use anyhow::Result;
use fee_calculator_core_rs::get_fee_schedule_doc;

/// Print the fee schedule documentation
pub fn run() -> Result<()> {
    println!("{}", get_fee_schedule_doc());
    Ok(())
}
