//! Acquiring a timestamp token and handing it to the resolver.

use crate::cancellation::CancellationToken;
use crate::core::ResolvedInstant;
use crate::errors::EpokError;
use crate::resolver;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, warn};

/// Reads `reader` to the end unless `token` is cancelled first.
///
/// # Errors
///
/// Returns `EpokError::Cancelled` if the token fires before the read
/// completes, and `EpokError::Io` if the read fails.
pub async fn read_input<R>(mut reader: R, token: &CancellationToken) -> Result<String, EpokError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = String::new();
    let outcome = tokio::select! {
        biased;
        () = token.cancelled() => None,
        result = reader.read_to_string(&mut buf) => Some(result),
    };

    match outcome {
        None => {
            let reason = token.reason().unwrap_or_default();
            warn!(%reason, "Input read cancelled");
            Err(EpokError::Cancelled(reason))
        }
        Some(result) => {
            let bytes = result?;
            debug!(bytes, "Read timestamp input");
            Ok(buf)
        }
    }
}

/// Reads a token from `reader`, trims it and resolves it.
///
/// # Errors
///
/// Propagates [`read_input`] failures; resolver failures are wrapped as
/// `EpokError::Parse` together with the trimmed token.
pub async fn resolve_input<R>(
    reader: R,
    token: &CancellationToken,
) -> Result<ResolvedInstant, EpokError>
where
    R: AsyncRead + Unpin,
{
    let raw = read_input(reader, token).await?;
    resolve_token(&raw)
}

/// Resolves `arg` when given, otherwise reads the token from `reader`.
pub async fn resolve_arg<R>(
    arg: Option<&str>,
    reader: R,
    token: &CancellationToken,
) -> Result<ResolvedInstant, EpokError>
where
    R: AsyncRead + Unpin,
{
    match arg {
        Some(arg) => resolve_token(arg),
        None => resolve_input(reader, token).await,
    }
}

fn resolve_token(raw: &str) -> Result<ResolvedInstant, EpokError> {
    let input = raw.trim();
    let (instant, precision) =
        resolver::parse_with_precision(input).map_err(|e| EpokError::parse(input, e))?;
    debug!(input, %precision, seconds = instant.seconds, nanoseconds = instant.nanoseconds, "Resolved timestamp");
    Ok(instant)
}
