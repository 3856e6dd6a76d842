// Statistical text model: TF-IDF features, logistic regression, and the
// offline training procedure that produces the artifact.

pub mod artifact;
pub mod logistic;
pub mod training;
pub mod vectorizer;
