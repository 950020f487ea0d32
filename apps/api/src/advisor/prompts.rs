// All LLM prompt constants for the Advisor module.

/// Fixed system instruction describing the advisor's role.
pub const ADVISOR_SYSTEM: &str = "You are an academic advisor. \
    You estimate the relevance of faculty members to a given description of research interests. \
    Suggest the relevant faculty members and explain why each one matches. \
    Don't forget to include a link to each faculty member's profile. \
    Give your explanation in markdown format.";

/// Final user message. Replace `{query}` and `{catalog}` before sending.
pub const RECOMMEND_PROMPT_TEMPLATE: &str = "Here is my description: {query}

To provide some context, here are the faculty members available for recommendation.

{catalog}";

/// Chat surface metadata served to the UI.
pub const CHAT_TITLE: &str = "Faculty Advisor Chat";
pub const CHAT_DESCRIPTION: &str = "Ask about faculty members and their expertise";
pub const CHAT_EXAMPLES: [&str; 3] = [
    "I am looking for a faculty member who is an expert in epidemiology",
    "Can you recommend someone who works on clinical trials?",
    "Who specializes in machine learning?",
];
