pub mod fallback;
pub mod journal;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod remote;

pub use fallback::fallback_insight;
pub use journal::InsightJournal;
pub use orchestrator::InsightCoach;
pub use parser::{parse_insight, ParseError};
pub use prompt::build_prompt;
pub use remote::RemoteInsightClient;
