pub(crate) mod log;
pub(crate) mod query;
pub(crate) mod setup;

use anyhow::Result;
use serde::Serialize;

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
