use strsim::normalized_levenshtein;

use super::text_normalizer::normalize;
use crate::audio::domain::transcript::TranscriptSegment;

/// Time bounds and confidence chosen for a single lyric line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineMatch {
    pub start: f64,
    pub end: f64,
    pub confidence: f64,
}

impl LineMatch {
    /// The defined "no timing information available" result: used when the
    /// segment list is empty or no candidate scores above zero.
    pub const FALLBACK: Self = Self {
        start: 0.0,
        end: 0.0,
        confidence: 0.0,
    };
}

/// Matches lyric lines against a transcription's segments.
///
/// Each line gets a full scan over every segment — no early exit, no
/// time-proximity pruning. Pruning would change which segment wins on
/// ambiguous inputs, so the exhaustive scan is the contract, not a
/// placeholder for something smarter.
///
/// Segment texts are normalized once at construction rather than once per
/// line-segment pair; the scored values are identical either way.
pub struct LineAligner<'a> {
    segments: &'a [TranscriptSegment],
    normalized_texts: Vec<String>,
}

impl<'a> LineAligner<'a> {
    pub fn new(segments: &'a [TranscriptSegment]) -> Self {
        let normalized_texts = segments.iter().map(|s| normalize(&s.text)).collect();
        Self {
            segments,
            normalized_texts,
        }
    }

    /// Find the best-matching segment for `line`.
    ///
    /// The similarity score is a character-level normalized Levenshtein
    /// ratio in [0, 1]: identical strings score 1.0, dissimilar strings of
    /// comparable length score near 0. The running best is only replaced on
    /// a strictly higher score, so ties keep the first-encountered segment.
    /// With the best score seeded at zero, a line whose every candidate
    /// scores 0.0 selects nothing and falls back to [`LineMatch::FALLBACK`].
    pub fn align(&self, line: &str) -> LineMatch {
        let line_normalized = normalize(line);

        let mut best_score = 0.0;
        let mut best_segment: Option<&TranscriptSegment> = None;

        for (segment, segment_text) in self.segments.iter().zip(&self.normalized_texts) {
            let score = normalized_levenshtein(&line_normalized, segment_text);
            if score > best_score {
                best_score = score;
                best_segment = Some(segment);
            }
        }

        match best_segment {
            Some(segment) => LineMatch {
                start: segment.start,
                end: segment.end,
                confidence: best_score,
            },
            None => LineMatch::FALLBACK,
        }
    }
}
