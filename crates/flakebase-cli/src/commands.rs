use crate::config::CliConfig;
use crate::format::Format;
use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use flakebase::{DefaultLayout, Node, SnowflakeId};
use std::io::Write;

/// Runs a validated invocation, writing results to `out`.
pub fn run(config: CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    match config {
        CliConfig::Generate {
            machine_id,
            count,
            format,
        } => generate(machine_id, count, format, out),
        CliConfig::Inspect { id, format } => {
            let id = parse_id(&id, format)?;
            inspect(id, out)
        }
        CliConfig::Convert { id, from, to } => {
            let id = parse_id(&id, from)?;
            writeln!(out, "{}", to.render(id))?;
            Ok(())
        }
    }
}

fn parse_id(text: &str, format: Format) -> anyhow::Result<SnowflakeId> {
    format
        .parse(text)
        .with_context(|| format!("cannot read {text:?} as {format:?}"))
}

fn generate(
    machine_id: i64,
    count: usize,
    format: Format,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let node: Node<DefaultLayout> =
        Node::from_machine_id(machine_id).context("failed to start generator")?;
    tracing::debug!(machine_id, count, ?format, "generating");

    for _ in 0..count {
        writeln!(out, "{}", format.render(node.generate()))?;
    }
    out.flush()?;
    Ok(())
}

fn inspect(id: SnowflakeId, out: &mut impl Write) -> anyhow::Result<()> {
    let time = DateTime::<Utc>::from_timestamp_millis(id.time())
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| "out of range".to_owned());

    writeln!(out, "id       {id}")?;
    writeln!(out, "time     {time}")?;
    writeln!(out, "machine  {}", id.machine())?;
    writeln!(out, "step     {}", id.step())?;
    Ok(())
}
