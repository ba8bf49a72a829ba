use super::line_aligner::LineAligner;
use super::lyric_sheet::LyricSheet;
use super::sync_result::{AlignedLine, SyncResult};
use crate::audio::domain::transcript::Transcription;

/// Aligns a full lyric sheet against a transcription.
///
/// Purely computational: no I/O, no shared state, no failure modes.
/// Degenerate inputs produce defined results — an empty lyric sheet yields
/// zero lines, an empty segment list yields the per-line fallback.
pub struct LyricSynchronizer;

impl LyricSynchronizer {
    pub fn synchronize(lyrics: &str, transcription: &Transcription) -> SyncResult {
        let sheet = LyricSheet::parse(lyrics);
        let aligner = LineAligner::new(&transcription.segments);

        let lines: Vec<AlignedLine> = sheet
            .lines()
            .iter()
            .map(|line| {
                let m = aligner.align(line);
                AlignedLine {
                    text: line.clone(),
                    start: m.start,
                    end: m.end,
                    confidence: m.confidence,
                }
            })
            .collect();

        let average_confidence = if lines.is_empty() {
            0.0
        } else {
            lines.iter().map(|l| l.confidence).sum::<f64>() / lines.len() as f64
        };

        // Duration comes from the engine's last segment, not from the
        // matched lines.
        let total_duration = transcription.segments.last().map_or(0.0, |s| s.end);

        SyncResult {
            lines,
            total_duration,
            average_confidence,
        }
    }
}
