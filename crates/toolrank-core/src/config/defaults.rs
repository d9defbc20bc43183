// Single source of truth for all default values.

// --- Tiers ---
pub const DEFAULT_TIER_S_MAX: u32 = 5;
pub const DEFAULT_TIER_A_MAX: u32 = 15;
pub const DEFAULT_TIER_B_MAX: u32 = 25;
pub const DEFAULT_TIER_C_MAX: u32 = 35;

// --- News decay ---
pub const DEFAULT_DECAY_HORIZON_DAYS: f64 = 365.0;
pub const DEFAULT_DECAY_EXPONENT: f64 = 1.5;
pub const DEFAULT_PR_DISCOUNT: f64 = 0.7;
pub const DEFAULT_SOURCE_CREDIBILITY: f64 = 0.75;
pub const DEFAULT_PR_SOURCE_MARKERS: &[&str] = &["blog", "press release", "company news"];
pub const DEFAULT_PR_ARTICLE_TYPES: &[&str] =
    &["company_announcement", "company_news", "press_release"];

// --- News attribution ---
pub const DEFAULT_NEWS_TERMS: &[(&str, &str)] = &[
    ("claude code", "claude-code"),
    ("github copilot", "github-copilot"),
    ("copilot", "github-copilot"),
    ("gh copilot", "github-copilot"),
    ("microsoft copilot", "github-copilot"),
    ("gemini code assist", "gemini-code-assist"),
    ("gemini code", "gemini-code-assist"),
    ("google gemini", "gemini-code-assist"),
    ("duet ai", "gemini-code-assist"),
    ("google jules", "jules"),
    ("amazon q", "amazon-q-developer"),
    ("codewhisperer", "amazon-q-developer"),
    ("cursor ai", "cursor"),
    ("codeium", "windsurf"),
    ("replit agent", "replit-agent"),
    ("devin ai", "devin"),
    ("cognition ai", "devin"),
    ("sourcegraph cody", "sourcegraph-cody"),
    ("continue.dev", "continue"),
    ("claude dev", "cline"),
    ("open hands", "openhands"),
    ("all hands", "openhands"),
    ("intellicode", "microsoft-intellicode"),
    ("jetbrains ai", "jetbrains-ai-assistant"),
];

// --- Confidence ---
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.7;

// --- Ranking ---
pub const DEFAULT_SCORE_PRECISION: u32 = 3;
pub const DEFAULT_PARALLEL_SCORING: bool = true;
pub const DEFAULT_CACHE_CAPACITY: u64 = 0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
