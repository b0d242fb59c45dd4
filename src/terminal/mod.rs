pub mod command;
pub mod render;
pub mod session;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

pub use command::{parse_command, Command, MenuChoice};
pub use session::{Flow, Session, View};

/// Reads commands line by line and redraws the screen after each one until
/// `quit` or end of input.
pub async fn run<R, W>(mut session: Session, currency: &str, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    draw(&session, currency, &mut output).await?;
    while let Some(line) = lines.next_line().await.context("failed to read input")? {
        if session.handle(parse_command(&line)) == Flow::Quit {
            break;
        }
        draw(&session, currency, &mut output).await?;
    }

    info!(
        lines = session.order().lines().len(),
        total = %session.order().grand_total(),
        "session closed"
    );
    Ok(())
}

async fn draw<W: AsyncWrite + Unpin>(session: &Session, currency: &str, output: &mut W) -> Result<()> {
    let screen = render::render_screen(session, currency, &chrono::Local::now());
    output
        .write_all(screen.as_bytes())
        .await
        .context("failed to write screen")?;
    output.flush().await.context("failed to write screen")?;
    Ok(())
}
