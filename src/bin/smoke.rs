//! Installation smoke test
//!
//! Builds one icosphere through the primitives utility and reports success.

use meshprim::{primitives, Log, Result};

fn main() -> Result<()> {
    let _sphere = primitives::icosphere_solid(4)?;

    Log::console().log("Success")?;

    Ok(())
}
