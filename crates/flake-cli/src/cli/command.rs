use crate::cli::config::{Action, CliConfig, Format};
use flake::{Flake, NanoClock, with_thread_generator};
use std::io::Write;

/// Executes the configured action, writing its output to `out`.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> anyhow::Result<()> {
    match config.action {
        Action::Generate { count, format } => generate(count, format, out),
        Action::Inspect(id) => inspect(id, out),
        Action::Now => now(NanoClock::global(), out),
    }
}

fn generate<W: Write>(count: usize, format: Format, out: &mut W) -> anyhow::Result<()> {
    tracing::debug!(count, ?format, "generating");
    with_thread_generator(|generator| -> anyhow::Result<()> {
        for _ in 0..count {
            let id = generator.next_flake();
            match format {
                Format::Base64 => writeln!(out, "{}", id.encode())?,
                Format::Hex => writeln!(out, "{}", id.to_hex())?,
            }
        }
        Ok(())
    })
}

fn inspect<W: Write>(id: Flake, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "base64: {}", id.encode())?;
    writeln!(out, "hex:    {}", id.to_hex())?;
    writeln!(out, "nanos:  {}", id.timestamp_nanos())?;
    writeln!(out, "micros: {}", id.timestamp_micros())?;
    writeln!(out, "millis: {}", id.timestamp_millis())?;
    writeln!(out, "rand1:  {:#018x}", id.rand1())?;
    writeln!(out, "rand2:  {:#018x}", id.rand2())?;
    Ok(())
}

fn now<W: Write>(clock: &NanoClock, out: &mut W) -> anyhow::Result<()> {
    // All three lines come from this single reading, truncated the same way
    // as `now_micros` / `now_millis`, so they always agree.
    let nanos = clock.now_nanos();
    writeln!(out, "nanos:  {nanos}")?;
    writeln!(out, "micros: {}", nanos / 1_000)?;
    writeln!(out, "millis: {}", nanos / 1_000_000)?;
    Ok(())
}
