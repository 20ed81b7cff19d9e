//! Line-based console session

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use super::Command;
use crate::state::Stopwatch;

pub const BANNER: &str = "Timer Console Program";
pub const OPTIONS: &str = "Options: B to Begin, P to Pause, C to Clear, E to Exit";
pub const PROMPT: &str = "Enter option: ";
pub const GOODBYE: &str = "Exiting program. Goodbye.";

/// How a session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user entered `E`
    Exit,
    /// Input was closed; treated like `E`
    EndOfInput,
}

/// Read commands from `input` until `E` or end of input.
///
/// Prompts, the banner and invalid-option messages go to `output`; timer
/// notifications reach the stopwatch's listeners. The stopwatch is paused
/// before returning.
pub async fn run_session<R, W>(
    stopwatch: &Stopwatch,
    input: R,
    output: &mut W,
) -> anyhow::Result<SessionEnd>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_line(output, BANNER).await?;
    write_line(output, OPTIONS).await?;

    let mut lines = input.lines();

    let end = loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await.context("Failed to read command")? else {
            debug!("Input closed, ending session");
            stopwatch.pause();
            break SessionEnd::EndOfInput;
        };

        match line.parse::<Command>() {
            Ok(Command::Exit) => {
                Command::Exit.apply(stopwatch);
                break SessionEnd::Exit;
            }
            Ok(command) => {
                let event = command.apply(stopwatch);
                debug!("{:?} -> {:?}", command, event);
            }
            Err(invalid) => {
                debug!("Rejected input {:?}", invalid.0);
                write_line(output, &invalid.to_string()).await?;
            }
        }
    };

    write_line(output, GOODBYE).await?;
    Ok(end)
}

async fn write_line<W>(output: &mut W, line: &str) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await.context("Failed to flush console output")
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::state::{TimerEvent, TimerStatus};

    async fn run(stopwatch: &Stopwatch, input: &str) -> (SessionEnd, String) {
        let mut output = Vec::new();
        let end = run_session(stopwatch, input.as_bytes(), &mut output)
            .await
            .unwrap();
        (end, String::from_utf8(output).unwrap())
    }

    fn recorded(stopwatch: &Stopwatch) -> Arc<Mutex<Vec<TimerEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        stopwatch.subscribe(move |event| sink.lock().unwrap().push(*event));
        events
    }

    #[tokio::test(start_paused = true)]
    async fn exit_prints_goodbye_and_pauses() {
        let stopwatch = Stopwatch::new();
        let events = recorded(&stopwatch);

        let (end, output) = run(&stopwatch, "b\nE\n").await;

        assert_eq!(end, SessionEnd::Exit);
        assert_eq!(
            output,
            format!("{BANNER}\n{OPTIONS}\n{PROMPT}{PROMPT}{GOODBYE}\n")
        );
        assert_eq!(stopwatch.status(), TimerStatus::Idle);
        assert_eq!(
            *events.lock().unwrap(),
            vec![TimerEvent::Started, TimerEvent::Paused]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_input_reprompts() {
        let stopwatch = Stopwatch::new();

        let (_, output) = run(&stopwatch, "x\n\ne\n").await;

        let invalid = "Invalid option. Use B, P, C, or E.";
        assert_eq!(
            output,
            format!("{BANNER}\n{OPTIONS}\n{PROMPT}{invalid}\n{PROMPT}{invalid}\n{PROMPT}{GOODBYE}\n")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn commands_drive_the_stopwatch() {
        let stopwatch = Stopwatch::new();
        let events = recorded(&stopwatch);

        run(&stopwatch, "B\nb\nc\np\np\ne\n").await;

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                TimerEvent::Started,
                TimerEvent::AlreadyActive,
                TimerEvent::Paused,
                TimerEvent::Cleared,
                TimerEvent::Started,
                TimerEvent::Paused,
                TimerEvent::NotActive,
                TimerEvent::NotActive,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn end_of_input_behaves_like_exit() {
        let stopwatch = Stopwatch::new();

        let (end, output) = run(&stopwatch, "b\n").await;

        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(output.ends_with(&format!("{PROMPT}{GOODBYE}\n")));
        assert_eq!(stopwatch.status(), TimerStatus::Idle);
    }
}
