//! Adhesion proofing text
//!
//! Builds the short test phrase designers stare at while tuning a letter:
//! the target between repeated straight and round controls, plus a final
//! clause drawn at random from the letter's own group. The randomness is
//! confined here; the rule engines never consume it.

use rand::Rng;

/// Generate a proofing phrase embedding `target` between context letters.
///
/// Uppercase targets default to the H/O frame, everything else to n/o. The
/// final clause draws two context characters at random (they may repeat)
/// from `context`, or from the default frame when `context` is empty.
pub fn generate_adhesion_text(target: char, context: &[char]) -> String {
    generate_adhesion_text_with_rng(target, context, &mut rand::thread_rng())
}

/// As [`generate_adhesion_text`], with a caller-supplied source of
/// randomness for reproducible output.
pub fn generate_adhesion_text_with_rng<R: Rng>(
    target: char,
    context: &[char],
    rng: &mut R,
) -> String {
    let upper = target.is_uppercase();
    let (straight, round) = if upper { ('H', 'O') } else { ('n', 'o') };

    let default_context = [straight, round];
    let context: &[char] = if context.is_empty() {
        &default_context
    } else {
        context
    };

    let first = context[rng.gen_range(0..context.len())];
    let second = context[rng.gen_range(0..context.len())];

    format!(
        "{s}{s}{t}{s}{s} {r}{r}{t}{r}{r} {first}{t}{second}",
        s = straight,
        r = round,
        t = target,
    )
}
