//! Demo command printing the fixed value-utilities walkthrough.
//!
//! # Expected Output
//!
//! ```text
//! {The Flash, Super Man, Iron Man}
//!  Iron Man Super Man The Flash
//! Bob Danger
//! Barry Allen
//!  3 7 0 9 2
//!  2 9 0 7 3
//! abc
//! 6
//! Barry Allen
//! ```
//!
//! The two number lines depend on the generator seed; everything else is fixed.

use std::io::{self, Write};
use tracing::info;
use valuekit_core::accumulate::Adder;
use valuekit_core::format::{format_braced, full_name, reversed, write_spaced, CharView};
use valuekit_core::rng::{process_rng, SharedRng, DEMO_LEN};

use crate::config::DemoConfig;
use crate::Result;

/// Runs the demonstration against stdout.
///
/// With a configured seed the generator is private to this run; otherwise
/// the process-wide entropy-seeded generator is used.
pub fn run(config: &DemoConfig) -> Result<()> {
    let rng = match config.seed {
        Some(seed) => SharedRng::from_seed(seed),
        None => process_rng().clone(),
    };
    info!(seed = rng.seed(), low = config.low, high = config.high, "running demo");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out, &rng, config.low, config.high)?;
    out.flush()?;

    info!("Demo complete");
    Ok(())
}

/// Writes the demonstration text to `out`, drawing numbers from `rng`.
pub fn render<W>(out: &mut W, rng: &SharedRng, low: i32, high: i32) -> Result<()>
where
    W: Write + ?Sized,
{
    let heroes = [
        String::from("The Flash"),
        String::from("Super Man"),
        String::from("Iron Man"),
    ];
    writeln!(out, "{}", format_braced(&heroes))?;
    write_spaced(out, reversed(&heroes))?;
    writeln!(out)?;

    writeln!(out, "{}", full_name("Bob", "Danger"))?;
    writeln!(out, "{}", full_name("Barry", "Allen"))?;

    let numbers: [i32; DEMO_LEN] = rng.try_fill_array(low, high)?;
    write_spaced(out, numbers)?;
    writeln!(out)?;
    write_spaced(out, reversed(numbers))?;
    writeln!(out)?;

    let letters = ['a', 'b', 'c'];
    writeln!(out, "{}", CharView::new(&letters))?;

    writeln!(out, "{}", Adder::new(2, 4).result())?;
    writeln!(out, "{}", Adder::new(String::from("Barry"), " Allen").result())?;

    Ok(())
}
