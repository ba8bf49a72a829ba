pub mod line_aligner;
pub mod lyric_sheet;
pub mod sync_result;
pub mod synchronizer;
pub mod text_normalizer;
