/// System instruction sent with every generation request: the tutor persona
/// plus the grounding rule that keeps numbers tied to the supplied graph.
pub const SYSTEM_PRIMER: &str = "You are an expert fatigue & fracture mechanics tutor embedded in a web app.\n\
    You interpret S–N plots (Basquin law) and mean-stress corrections (Goodman/Gerber/Soderberg).\n\
    You must ground ALL numeric statements in the provided graph JSON only.\n\
    If a value is missing, say so and suggest how to obtain it (no fabrication). Explain clearly and concisely; use short equations when useful.";

const RUBRIC: &str = "REASONING CONTRACT:\n\
    1) Use only the GRAPH_JSON below for numeric or curve-specific facts.\n\
    2) Prefer `scenario` values when present (Sa, Smax, Smin, R) and explain how they were derived.\n\
    3) If a value is missing, say 'not in graph JSON'.\n\
    4) Keep answers concise.\n";

/// Build the prompt body: reasoning rubric, fenced graph JSON, user question,
/// always in that order.
pub fn compose_prompt(graph_json: &str, user_msg: &str) -> String {
    format!("{RUBRIC}\n\nGRAPH_JSON:\n```json\n{graph_json}\n```\n\nUSER_QUESTION:\n{user_msg}\n")
}
