// Analysis stage — section presence, quality signals, and suggestions.

pub mod quality;
pub mod sections;
pub mod suggest;
