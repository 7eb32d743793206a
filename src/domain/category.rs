#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Tech,
    Ai,
    Startups,
    Tutorials,
    OpenSource,
    Programming,
    Web,
    Security,
    Jobs,
    Other,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Tech,
        Category::Ai,
        Category::Startups,
        Category::Tutorials,
        Category::OpenSource,
        Category::Programming,
        Category::Web,
        Category::Security,
        Category::Jobs,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tech => "Tech",
            Category::Ai => "AI",
            Category::Startups => "Startups",
            Category::Tutorials => "Tutorials",
            Category::OpenSource => "Open Source",
            Category::Programming => "Programming",
            Category::Web => "Web",
            Category::Security => "Security",
            Category::Jobs => "Jobs",
            Category::Other => "Other",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// Checked top to bottom, the first rule with a matching keyword wins.
/// Nothing maps to `Tech`, it only exists as a bucket.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Ai,
        keywords: &[
            "ai",
            "machine learning",
            "neural",
            "gpt",
            "llm",
            "transformer",
            "deep learning",
            "nlp",
            "chatgpt",
            "claude",
            "model",
            "algorithm",
        ],
    },
    CategoryRule {
        category: Category::Startups,
        keywords: &[
            "startup",
            "founder",
            "funding",
            "raised",
            "series",
            "vc",
            "investment",
            "exit",
            "acquisition",
            "pivot",
            "$",
            "million",
            "billion",
            "ipo",
        ],
    },
    CategoryRule {
        category: Category::Tutorials,
        keywords: &[
            "tutorial",
            "guide",
            "how to",
            "learn",
            "beginner",
            "tips",
            "best practices",
            "course",
            "introduction",
            "getting started",
        ],
    },
    CategoryRule {
        category: Category::OpenSource,
        keywords: &[
            "open source",
            "github",
            "repo",
            "library",
            "framework",
            "package",
            "tool",
            "project",
            "release",
            "version",
        ],
    },
    CategoryRule {
        category: Category::Programming,
        keywords: &[
            "rust",
            "python",
            "javascript",
            "go",
            "java",
            "c++",
            "typescript",
            "ruby",
            "php",
            "kotlin",
            "swift",
            "golang",
        ],
    },
    CategoryRule {
        category: Category::Web,
        keywords: &[
            "react", "vue", "angular", "html", "css", "tailwind", "nextjs", "svelte", "web",
            "frontend", "browser",
        ],
    },
    CategoryRule {
        category: Category::Security,
        keywords: &[
            "security",
            "hack",
            "breach",
            "vulnerability",
            "exploit",
            "bug",
            "ssl",
            "crypto",
            "password",
            "privacy",
        ],
    },
    CategoryRule {
        category: Category::Jobs,
        keywords: &[
            "job",
            "hiring",
            "recruiter",
            "developer",
            "engineer",
            "position",
            "vacancy",
            "role",
            "opening",
            "apply",
            "fresher",
        ],
    },
];

pub fn categorize(title: &str) -> Category {
    let title = title.to_lowercase();

    CATEGORY_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| title.contains(kw)))
        .map(|rule| rule.category)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::{categorize, Category, CATEGORY_RULES};

    #[test]
    fn ai_wins_over_jobs() {
        assert_eq!(categorize("AI Engineer Job Opening"), Category::Ai);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(categorize("STARTUP closes seed round"), Category::Startups);
        assert_eq!(categorize("Hiring now"), Category::Jobs);
    }

    #[test]
    fn each_group_is_reachable() {
        let cases = [
            ("Deep Learning explained", Category::Ai),
            ("Founder story: seed round", Category::Startups),
            ("A beginner walkthrough", Category::Tutorials),
            ("New framework release", Category::OpenSource),
            ("Why Rust", Category::Programming),
            ("Svelte vs React", Category::Web),
            ("Massive breach disclosed", Category::Security),
            ("Hiring: backend", Category::Jobs),
            ("Weather forecast", Category::Other),
        ];

        for (title, expected) in cases {
            assert_eq!(categorize(title), expected, "title: {}", title);
        }
    }

    #[test]
    fn rule_order_is_fixed() {
        let order: Vec<Category> = CATEGORY_RULES.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Ai,
                Category::Startups,
                Category::Tutorials,
                Category::OpenSource,
                Category::Programming,
                Category::Web,
                Category::Security,
                Category::Jobs,
            ]
        );
    }

    #[test]
    fn serialized_names() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Tech",
                "AI",
                "Startups",
                "Tutorials",
                "Open Source",
                "Programming",
                "Web",
                "Security",
                "Jobs",
                "Other"
            ]
        );
    }
}
