//! Real-time playback of a typewriter line on tokio

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep};

use crate::error::DialogError;
use crate::typewriter::{RevealSink, Typewriter};

/// Type `text` in real time until the typewriter is idle again.
///
/// Each message on `fast_forward` is a press of the fast-forward input. A
/// closed channel just stops listening. Returns the revealed text.
pub async fn play_line<S>(
    typewriter: &mut Typewriter,
    text: &str,
    sink: &mut S,
    fast_forward: &mut mpsc::Receiver<()>,
) -> Result<String, DialogError>
where
    S: RevealSink + ?Sized,
{
    typewriter.begin_line(text, sink)?;

    let mut last = Instant::now();
    let mut listening = true;

    while let Some(wait) = typewriter.time_to_next_event() {
        let signal = tokio::select! {
            _ = sleep(wait) => None,
            signal = fast_forward.recv(), if listening => Some(signal),
        };

        let now = Instant::now();
        typewriter.advance(now.duration_since(last), sink);
        last = now;

        match signal {
            Some(Some(())) => {
                typewriter.speed_up();
            }
            Some(None) => listening = false,
            None => {}
        }
    }

    Ok(typewriter.revealed().to_owned())
}
