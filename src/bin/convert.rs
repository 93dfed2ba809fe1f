//! Command-line conversion harness.
//!
//! Reads a `FlowPipeline` JSON document at a given schema version and
//! prints its conversion, exactly as the storage layer would perform it.
//! Useful for inspecting what a client at an old version would see, or
//! what a spoke write would persist.
//!
//! ```text
//! convert v1 pipeline.json        # up-convert a V1 document to the hub
//! convert hub --to v2 < stored    # down-convert the stored hub to V2
//! ```

use std::fs;
use std::io::Read;
use std::str::FromStr;

use anyhow::{Context, bail};
use flowpipe_schema::prelude::*;

struct Args {
    from: SchemaVersion,
    to: SchemaVersion,
    file: Option<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut from = None;
    let mut to = None;
    let mut file = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--to" => {
                let target = args.next().context("--to needs a version")?;
                to = Some(SchemaVersion::from_str(&target).map_err(|_| {
                    anyhow::anyhow!("unknown target version \"{target}\" (v1, v2 or hub)")
                })?);
            }
            "-h" | "--help" => {
                bail!("usage: convert <v1|v2|hub> [--to <v1|v2|hub>] [file]");
            }
            other if from.is_none() => {
                from = Some(SchemaVersion::from_str(other).map_err(|_| {
                    anyhow::anyhow!("unknown source version \"{other}\" (v1, v2 or hub)")
                })?);
            }
            other if file.is_none() => file = Some(other.to_string()),
            other => bail!("unexpected argument \"{other}\""),
        }
    }
    let from = from.context("usage: convert <v1|v2|hub> [--to <v1|v2|hub>] [file]")?;
    // Spokes convert up to the hub unless told otherwise; the hub has no
    // default target.
    let to = match (to, from) {
        (Some(to), _) => to,
        (None, SchemaVersion::Hub) => bail!("converting from hub needs --to <v1|v2>"),
        (None, _) => SchemaVersion::Hub,
    };
    Ok(Args { from, to, file })
}

fn read_input(file: Option<&str>) -> anyhow::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {path}")),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            Ok(buffer)
        }
    }
}

fn run(args: Args) -> anyhow::Result<String> {
    let input = read_input(args.file.as_deref())?;
    let output = match (args.from, args.to) {
        (SchemaVersion::V1, SchemaVersion::Hub) => {
            let spoke: v1::FlowPipeline = serde_json::from_str(&input).context("parsing V1 document")?;
            serde_json::to_string_pretty(&spoke.up_convert()?)?
        }
        (SchemaVersion::V2, SchemaVersion::Hub) => {
            let spoke: v2::FlowPipeline = serde_json::from_str(&input).context("parsing V2 document")?;
            serde_json::to_string_pretty(&spoke.up_convert()?)?
        }
        (SchemaVersion::Hub, SchemaVersion::V1) => {
            let stored: hub::FlowPipeline = serde_json::from_str(&input).context("parsing hub document")?;
            let served: v1::FlowPipeline = stored.down_convert()?;
            serde_json::to_string_pretty(&served)?
        }
        (SchemaVersion::Hub, SchemaVersion::V2) => {
            let stored: hub::FlowPipeline = serde_json::from_str(&input).context("parsing hub document")?;
            let served: v2::FlowPipeline = stored.down_convert()?;
            serde_json::to_string_pretty(&served)?
        }
        (from, to) => bail!("conversion {from} -> {to} is not a storage-layer operation"),
    };
    Ok(output)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let output = run(parse_args()?)?;
    println!("{output}");
    Ok(())
}
