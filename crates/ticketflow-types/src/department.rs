use serde::{Deserialize, Serialize};
use std::fmt;

/// Team a ticket is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Finance,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "HR")]
    Hr,
    Support,
}

const FINANCE_KEYWORDS: &[&str] = &[
    "payment", "billing", "invoice", "refund", "charge", "credit card",
    "subscription", "money", "price", "cost", "transaction", "bank",
];

const IT_KEYWORDS: &[&str] = &[
    "login", "password", "error", "bug", "crash", "technical", "app",
    "website", "loading", "not working", "server", "access", "install",
];

const HR_KEYWORDS: &[&str] = &[
    "account", "profile", "settings", "personal", "email change",
    "delete account", "privacy", "data",
];

const SUPPORT_KEYWORDS: &[&str] = &[
    "help", "how to", "question", "guide", "tutorial", "feature",
    "understand", "explain", "show me",
];

/// Keyword tables in tie-break order
const KEYWORD_TABLE: &[(Department, &[&str])] = &[
    (Department::Finance, FINANCE_KEYWORDS),
    (Department::It, IT_KEYWORDS),
    (Department::Hr, HR_KEYWORDS),
    (Department::Support, SUPPORT_KEYWORDS),
];

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Finance => "Finance",
            Department::It => "IT",
            Department::Hr => "HR",
            Department::Support => "Support",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Route a ticket by counting keyword hits per department.
///
/// Keywords are matched as case-insensitive substrings ("charged" hits
/// "charge"), each keyword counting at most once. The department with the
/// most hits wins; ties go to the earlier entry in `KEYWORD_TABLE`. No hits
/// at all falls back to `Support`.
pub fn categorize_department(subject: &str, description: &str) -> Department {
    let text = format!("{} {}", subject, description).to_lowercase();

    let mut best = Department::Support;
    let mut best_score = 0usize;

    for (department, keywords) in KEYWORD_TABLE {
        let score = keywords.iter().filter(|kw| text.contains(*kw)).count();
        if score > best_score {
            best = *department;
            best_score = score;
        }
    }

    best
}
