//! Startup banner.

use std::io::Write;

/// Printed once at startup, before command-line validation.
pub const BANNER: &str = r"

       __                           ___ __
  ____/ /___  __________ __  ______/ (_) /_
 / __  / __ \/ ___/ __  / / / / __  / / __/
/ /_/ / / / (__  ) /_/ / /_/ / /_/ / / /_
\____/_/ /_/____/\____/\____/\____/_/\__/

";

/// Writes the banner to `out`.
pub fn print_banner<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{BANNER}")?;
    out.flush()
}
