//! Battle Intro Example
//!
//! Types a few battle lines to the terminal in real time, fast-forwarding the
//! second one, then reports how a move fares against a dual-typed target.
//!
//! Run with `RUST_LOG=encounter_dialog=debug` to see the typewriter logs.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use encounter_battle::{MoveDex, Type};
use encounter_dialog::{
    play_line, Action, DialogBox, MoveChoice, RevealEvent, RevealSink, TypewriterConfig,
};
use tokio::sync::mpsc;

const MOVES: &str = r#"[
    {"number": 33, "name": "Tackle", "type": "Normal", "power": 40, "pp": 35,
     "accuracy": 100, "category": "Physical", "target": "Foe"},
    {"number": 55, "name": "Water Gun", "type": "Water", "power": 40, "pp": 25,
     "accuracy": 100, "category": "Special", "target": "Foe"}
]"#;

/// Writes revealed characters straight to stdout
struct Terminal;

impl RevealSink for Terminal {
    fn on_event(&mut self, event: RevealEvent) {
        let mut out = std::io::stdout();
        match event {
            RevealEvent::Char { ch, .. } => {
                let _ = write!(out, "{ch}");
            }
            RevealEvent::Settling { .. } | RevealEvent::Cancelled { .. } => {
                let _ = writeln!(out);
            }
            _ => {}
        }
        let _ = out.flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dex = MoveDex::from_json(MOVES).context("Failed to load moves")?;
    let moves: Vec<_> = dex.iter().filter_map(|m| dex.instantiate(m.number)).collect();

    let mut dialog = DialogBox::new(TypewriterConfig::with_rate(30.0))?;
    let mut terminal = Terminal;
    let (fast_forward_tx, mut fast_forward) = mpsc::channel(1);

    play_line(
        dialog.typewriter_mut(),
        "A wild SQUIRTLE appeared!",
        &mut terminal,
        &mut fast_forward,
    )
    .await?;

    // Hold the fast-forward button shortly after the next line starts
    let press = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        let _ = fast_forward_tx.send(()).await;
    });
    play_line(
        dialog.typewriter_mut(),
        "Go! CHARMANDER! Show them what you've got!",
        &mut terminal,
        &mut fast_forward,
    )
    .await?;
    press.await?;

    dialog.enable_action_selector(true);
    dialog.update_action_selection(Action::Fight);
    dialog.enable_move_selector(true);
    dialog.set_move_names(&moves);
    if let Some(water_gun) = moves.get(1) {
        dialog.update_move_selection(MoveChoice::Second, water_gun);
    }

    println!("Moves: {}", dialog.move_names().join(" | "));
    if let Some(details) = dialog.move_details() {
        println!(
            "PP {}/{}  TYPE/{}",
            details.pp, details.max_pp, details.type_label
        );
    }

    let multiplier = Type::Water.effectiveness_dual(Type::Rock, Some(Type::Ground));
    println!("Water Gun vs Rock/Ground: x{multiplier}");
    if dialog.type_effectiveness(multiplier, &mut terminal)? {
        while let Some(wait) = dialog.typewriter().time_to_next_event() {
            tokio::time::sleep(wait).await;
            dialog.advance(wait, &mut terminal);
        }
    }

    Ok(())
}
