//! Startup banner animation.
//!
//! Purely decorative: the three logo letters land one by one and then leave
//! the screen in one of two styles chosen at random. The sequence runs once
//! at startup and has no coupling to the profile or session state; frame
//! generation is a pure function so the sequences can be tested without
//! pacing.

use rand::Rng;
use std::io::Write;
use std::thread;
use std::time::Duration;

/// The logo letters, in display order.
pub const LOGO_LETTERS: [char; 3] = ['e', 'G', 'P'];

/// Tagline printed under the logo once the animation settles.
pub const SUBTITLE: &str = "Your Health, Simplified";

const FRAME_DELAY: Duration = Duration::from_millis(120);

/// How the logo letters leave the screen after landing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Letters scatter apart with growing gaps before vanishing.
    Explode,
    /// Letters collapse back in place, last letter first.
    Fold,
}

impl Reveal {
    /// Picks one of the two styles with equal probability.
    pub fn choose<R: Rng>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Reveal::Explode
        } else {
            Reveal::Fold
        }
    }
}

/// The frame sequence for the chosen reveal style.
///
/// Every sequence starts with the letters landing one by one and ends with
/// an empty frame, ready for the subtitle.
pub fn frames(reveal: Reveal) -> Vec<String> {
    let landing: Vec<String> = (1..=LOGO_LETTERS.len())
        .map(|n| LOGO_LETTERS[..n].iter().collect())
        .collect();
    let mut frames = landing.clone();

    match reveal {
        Reveal::Explode => {
            for gap in 1..=4 {
                let spacing = " ".repeat(gap);
                let frame = LOGO_LETTERS
                    .iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(&spacing);
                frames.push(frame);
            }
        }
        Reveal::Fold => {
            for frame in landing.iter().rev().skip(1) {
                frames.push(frame.clone());
            }
        }
    }

    frames.push(String::new());
    frames
}

/// Plays the animation on `output`, choosing the style from `rng`.
pub fn play<R: Rng, W: Write>(rng: &mut R, output: &mut W) {
    let reveal = Reveal::choose(rng);
    tracing::debug!("banner reveal style: {:?}", reveal);
    for frame in frames(reveal) {
        let _ = writeln!(output, "   {}", frame);
        let _ = output.flush();
        thread::sleep(FRAME_DELAY);
    }
    let _ = writeln!(output, "   {}", SUBTITLE);
    let _ = writeln!(output);
}
