//! Build a Step from its narration lines, rendering the directions text and
//! collecting annotations positioned within it.

use tracing::trace;

use crate::language::*;
use crate::parsing::annotation::{is_sigil, read_annotation};

/// Assemble one step. Each line is given as the pieces left over after
/// comment removal; pieces are concatenated and lines are trimmed and
/// joined by single spaces. Annotations do not cross piece boundaries.
pub fn assemble_step<'i>(lines: &[Vec<&'i str>]) -> Step<'i> {
    let mut step = Step::default();

    for line in lines {
        let pieces = trim_pieces(line);
        if pieces.is_empty() {
            continue;
        }

        if !step
            .directions
            .is_empty()
        {
            step.directions
                .push(' ');
        }

        for piece in pieces {
            read_segment(&mut step, piece);
        }
    }

    step
}

/// Walk one segment of narration left to right, replacing each successfully
/// parsed annotation with its bare name.
fn read_segment<'i>(step: &mut Step<'i>, segment: &'i str) {
    let mut i = 0;
    let mut last = 0;

    while let Some(c) = segment[i..]
        .chars()
        .next()
    {
        if !is_sigil(c) {
            i += c.len_utf8();
            continue;
        }

        match read_annotation(&segment[i..]) {
            Ok((mut annotation, width)) => {
                step.directions
                    .push_str(&segment[last..i]);

                annotation.set_idx(
                    step.directions
                        .len(),
                );
                step.directions
                    .push_str(annotation.name());

                match annotation {
                    Annotation::Ingredient(ingredient) => step
                        .ingredients
                        .push(ingredient),
                    Annotation::Cookware(cookware) => step
                        .cookware
                        .push(cookware),
                    Annotation::Timer(timer) => step
                        .timers
                        .push(timer),
                }

                i += width;
                last = i;
            }
            Err(error) => {
                trace!(
                    "treating '{}' as text: {} at {}",
                    c,
                    error.message(),
                    i + error.offset()
                );
                i += c.len_utf8();
            }
        }
    }

    step.directions
        .push_str(&segment[last..]);
}

/// Trim whitespace from the start of the first non-blank piece and the end
/// of the last, discarding pieces that become empty.
fn trim_pieces<'i>(line: &[&'i str]) -> Vec<&'i str> {
    let mut pieces = line.to_vec();

    while let Some(first) = pieces.first_mut() {
        *first = first.trim_start();
        if first.is_empty() {
            pieces.remove(0);
        } else {
            break;
        }
    }

    while let Some(last) = pieces.last_mut() {
        *last = last.trim_end();
        if last.is_empty() {
            pieces.pop();
        } else {
            break;
        }
    }

    pieces
}
