//! Console event loop
//!
//! One task multiplexes the header clock tick and operator input, so every
//! command runs to completion before the next tick or line is looked at.

use std::io::Write;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;

use crate::commands::Command;
use crate::state::AppState;
use crate::viewmodel;

pub async fn run(state: AppState) -> std::io::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    run_with(state, stdin, std::io::stdout()).await
}

/// Drive the console over any line source and sink until input closes or `quit`.
///
/// Input is read as raw bytes so a line that is not UTF-8 is reported and
/// skipped instead of ending the session.
async fn run_with<R, W>(mut state: AppState, input: R, mut out: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut ticker = tokio::time::interval(Duration::from_millis(state.config.clock_tick_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut lines = input.split(b'\n');

    print_lines(&mut out, &viewmodel::render(&state))?;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                state.tick();
                tracing::trace!(clock = state.clock_text(), "Clock tick");
            }
            line = lines.next_segment() => {
                let Some(bytes) = line? else {
                    tracing::debug!("Input closed");
                    break;
                };
                let line = match String::from_utf8(bytes) {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::warn!(error = %e, "Discarded input line");
                        writeln!(out, "[error] input is not valid UTF-8")?;
                        continue;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                let command = match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => command,
                    Err(msg) => {
                        writeln!(out, "[error] {}", msg)?;
                        continue;
                    }
                };

                tracing::debug!(?command, "Command");
                let response = viewmodel::handle(&mut state, command);
                for toast in &response.toasts {
                    writeln!(out, "{}", toast)?;
                }
                if response.redraw {
                    print_lines(&mut out, &viewmodel::render(&state))?;
                }
            }
        }
    }

    out.flush()
}

fn print_lines(out: &mut impl Write, lines: &[String]) -> std::io::Result<()> {
    writeln!(out)?;
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewmodel::tests::state;

    async fn session(input: &[u8]) -> String {
        let mut out = Vec::new();
        run_with(state(), input, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_is_skipped() {
        let out = session(b"counts\n\xff\xfe\ncounts\n").await;
        assert_eq!(out.matches("[..] Pending Tasks: 3").count(), 2);
        assert!(out.contains("[error] input is not valid UTF-8"));
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let out = session(b"quit\ncounts\n").await;
        assert!(!out.contains("[..] Pending Tasks"));
    }

    #[tokio::test]
    async fn test_bad_command_keeps_going() {
        let out = session(b"dance\r\nread-all\n").await;
        assert!(out.contains("[error] unknown command: dance"));
        assert!(out.contains("[ok] All notifications marked as read"));
    }
}
