// Feature extraction — text cleaning, lexicons, sentiment, and the
// per-review FeatureSet.

pub mod cleaning;
pub mod extractor;
pub mod lexicon;
pub mod sentiment;
