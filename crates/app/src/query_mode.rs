//! Headless `--query` mode: a blocking synchronous loop that reads JSON
//! commands from stdin and writes JSON responses to stdout.
//!
//! When the `--query` flag is passed, the app skips the window and UI plugins
//! and enters this loop instead of `app.run()`.
//!
//! ## Protocol
//!
//! Each line of stdin is a JSON object with a `"cmd"` discriminator.
//! Each line of stdout is a JSON response with `"protocol_version"` and
//! `"type"` fields. See [`footprint::query_protocol`] for the schema.
//! Logs go to stderr so stdout carries only protocol lines.

use std::io::{self, BufRead, Write};

use bevy::log::LogPlugin;
use bevy::prelude::*;

use footprint::query_protocol::{
    make_response, parse_command, process_command, QueryResponse, ResponsePayload,
    PROTOCOL_VERSION,
};
use footprint::{EmissionFactorTable, FootprintPlugin};

pub fn run_query_mode(table: EmissionFactorTable) -> io::Result<()> {
    // -- Build a minimal Bevy App: logging + calculator, no window/UI --------
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()));
    app.insert_resource(table);
    app.add_plugins(FootprintPlugin);
    app.update();

    let table = app.world().resource::<EmissionFactorTable>();

    // -- I/O setup -----------------------------------------------------------
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    serve(table, stdin.lock(), &mut stdout)?;

    info!("carbon-calculator query mode shutting down");
    Ok(())
}

/// Answers commands from `input` until `quit` or end of input. A read error
/// ends the session and is returned to the caller.
fn serve(table: &EmissionFactorTable, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    // Tell the caller we are live.
    write_response(out, &make_response(ResponsePayload::Ready))?;
    info!("carbon-calculator query mode v{PROTOCOL_VERSION} ready, waiting for commands on stdin");

    // -- Main command loop ---------------------------------------------------
    for line in input.lines() {
        let line = line.inspect_err(|e| error!("stdin read error: {e}"))?;

        if line.trim().is_empty() {
            continue;
        }

        let response = match parse_command(&line) {
            Ok(cmd) => {
                debug!("query command: {cmd:?}");
                process_command(table, cmd)
            }
            Err(resp) => {
                warn!("rejected unparseable command: {line}");
                resp
            }
        };
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);

        write_response(out, &response)?;

        if is_goodbye {
            break;
        }
    }
    Ok(())
}

/// Writes one response as a single JSON line and flushes.
fn write_response(out: &mut impl Write, response: &QueryResponse) -> io::Result<()> {
    serde_json::to_writer(&mut *out, response).map_err(io::Error::from)?;
    writeln!(out)?;
    out.flush()
}
