// Career analysis: AI career decision, AI roadmap generation, local
// matching/insights helpers, and the pipeline that persists the result.
// All completion calls go through llm_client.

pub mod decision;
pub mod handlers;
pub mod matching;
pub mod pipeline;
pub mod prompts;
pub mod roadmap;
