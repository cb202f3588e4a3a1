#![allow(clippy::cast_possible_truncation)]

use super::formulas::Readability;

/// School grade band implied by a Flesch reading ease score.
#[must_use]
pub fn reading_ease_grades(score: f64) -> &'static [i64] {
    match score {
        s if (90.0..100.0).contains(&s) => &[5],
        s if (80.0..90.0).contains(&s) => &[6],
        s if (70.0..80.0).contains(&s) => &[7],
        s if (60.0..70.0).contains(&s) => &[8, 9],
        s if (50.0..60.0).contains(&s) => &[10],
        s if (40.0..50.0).contains(&s) => &[11],
        s if (30.0..40.0).contains(&s) => &[12],
        _ => &[13],
    }
}

/// The most common grade among all formulas. Each grade-level formula votes
/// for both its rounded and its ceiling value; ties go to the earliest vote.
#[must_use]
pub fn consensus_grade(stats: &Readability<'_>) -> f64 {
    let mut votes: Vec<i64> = Vec::with_capacity(16);

    push_bounds(&mut votes, stats.flesch_kincaid_grade());
    votes.extend_from_slice(reading_ease_grades(stats.flesch_reading_ease()));
    push_bounds(&mut votes, stats.smog_index());
    push_bounds(&mut votes, stats.coleman_liau_index());
    push_bounds(&mut votes, stats.automated_readability_index());
    push_bounds(&mut votes, stats.dale_chall_readability_score());
    push_bounds(&mut votes, stats.linsear_write_formula());
    push_bounds(&mut votes, stats.gunning_fog());

    most_common(&votes).map_or(0.0, |grade| grade as f64)
}

/// Votes for `grade` rounded half away from zero and for its ceiling, so
/// `-0.5` votes `-1` and `0` rather than the floor of `grade - 0.5`.
fn push_bounds(votes: &mut Vec<i64>, grade: f64) {
    votes.push(grade.round() as i64);
    votes.push(grade.ceil() as i64);
}

/// Most frequent value; among equals the one seen first wins.
fn most_common(values: &[i64]) -> Option<i64> {
    let mut tally: Vec<(i64, usize)> = Vec::new();
    for &value in values {
        match tally.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => tally.push((value, 1)),
        }
    }

    tally
        .into_iter()
        .fold(None, |best: Option<(i64, usize)>, (value, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((value, count)),
        })
        .map(|(value, _)| value)
}
