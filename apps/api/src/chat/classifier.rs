//! Rule-based response selection.
//!
//! `RESPONSE_RULES` is scanned top to bottom against the lower-cased input;
//! the first rule with a keyword contained in the input wins. Inputs matching
//! nothing get `FALLBACK_RESPONSE`. Every input gets exactly one response.

use serde::Serialize;
use tracing::debug;

use crate::knowledge::{KnowledgeBase, PORTFOLIO_KNOWLEDGE};

pub const FALLBACK_RESPONSE: &str =
    "I can help you learn about this developer's skills, projects, experience, and contact info.";

pub const GREETING_RESPONSE: &str =
    "Hello! I'm OperaTech's AI assistant. Ask me about skills, projects, experience, or contact info.";

/// Revealed every time the chat panel opens.
pub const WELCOME_MESSAGE: &str =
    "Hi! Welcome to OperaTech's portfolio. I'm here to help you learn about and explore projects, skills, and experience. Ask me anything!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Projects,
    Skills,
    Experience,
    Contact,
    About,
    Greeting,
}

/// One row of the dispatch table: any keyword hit selects `respond`.
pub struct ResponseRule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub respond: fn(&KnowledgeBase) -> String,
}

/// Priority order matters: "hire me for your projects" is a projects query.
pub const RESPONSE_RULES: &[ResponseRule] = &[
    ResponseRule {
        topic: Topic::Projects,
        keywords: &["project"],
        respond: KnowledgeBase::projects_text,
    },
    ResponseRule {
        topic: Topic::Skills,
        keywords: &["skills"],
        respond: KnowledgeBase::skills_text,
    },
    ResponseRule {
        topic: Topic::Experience,
        keywords: &["experience"],
        respond: KnowledgeBase::experience_text,
    },
    ResponseRule {
        topic: Topic::Contact,
        keywords: &["contact", "hire"],
        respond: KnowledgeBase::contact_text,
    },
    ResponseRule {
        topic: Topic::About,
        keywords: &["about"],
        respond: KnowledgeBase::about_text,
    },
    ResponseRule {
        topic: Topic::Greeting,
        keywords: &["hello", "hi"],
        respond: greeting_text,
    },
];

fn greeting_text(_: &KnowledgeBase) -> String {
    GREETING_RESPONSE.to_string()
}

/// Returns the first rule whose keyword occurs in `query`, if any.
pub fn match_rule(query: &str) -> Option<&'static ResponseRule> {
    let lower = query.to_lowercase();
    RESPONSE_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lower.contains(*kw)))
}

/// Picks the canned response for `query` from the portfolio knowledge.
pub fn classify(query: &str) -> String {
    match match_rule(query) {
        Some(rule) => {
            debug!(topic = ?rule.topic, "Matched response rule");
            (rule.respond)(&PORTFOLIO_KNOWLEDGE)
        }
        None => {
            debug!("No response rule matched, using fallback");
            FALLBACK_RESPONSE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_topic(query: &str) -> Option<Topic> {
        match_rule(query).map(|rule| rule.topic)
    }

    #[test]
    fn test_project_anywhere_in_input_selects_projects() {
        let expected = PORTFOLIO_KNOWLEDGE.projects_text();
        for input in [
            "project",
            "PROJECT",
            "Tell me about your Projects!",
            "xxprojectxx",
            "what skills did the project need",
            "  any side-projects?  ",
        ] {
            assert_eq!(classify(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_skills_query_returns_joined_list() {
        assert_eq!(
            classify("What are your skills?"),
            "React, TypeScript, JavaScript, Node.js, Python, Tailwind CSS, Next.js, Supabase, Git, Java, C program, HTML/CSS, MySQL, WordPress"
        );
    }

    #[test]
    fn test_gibberish_falls_back() {
        assert_eq!(classify("gibberish xyz"), FALLBACK_RESPONSE);
        assert_eq!(
            FALLBACK_RESPONSE,
            "I can help you learn about this developer's skills, projects, experience, and contact info."
        );
    }

    #[test]
    fn test_hire_selects_contact() {
        assert_eq!(match_topic("Can I HIRE you?"), Some(Topic::Contact));
        assert!(classify("contact").starts_with("Email: "));
    }

    #[test]
    fn test_experience_and_about() {
        assert_eq!(match_topic("Work experience"), Some(Topic::Experience));
        assert_eq!(classify("about"), PORTFOLIO_KNOWLEDGE.about);
    }

    #[test]
    fn test_greeting_matches_hello_and_hi() {
        assert_eq!(classify("Hello there"), GREETING_RESPONSE);
        assert_eq!(classify("hi"), GREETING_RESPONSE);
    }

    #[test]
    fn test_priority_order_first_match_wins() {
        // skills + experience: skills comes first
        assert_eq!(match_topic("skills and experience"), Some(Topic::Skills));
        // about + contact: contact comes first
        assert_eq!(match_topic("how to contact you about work"), Some(Topic::Contact));
        // "this" contains "hi" but "about" is checked earlier
        assert_eq!(match_topic("tell me about this"), Some(Topic::About));
    }

    #[test]
    fn test_greeting_substring_quirk_is_preserved() {
        // "which" contains "hi", and greeting is the last rule before fallback
        assert_eq!(match_topic("which one?"), Some(Topic::Greeting));
    }

    #[test]
    fn test_empty_input_gets_fallback() {
        assert_eq!(classify(""), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_rules_are_in_declared_priority_order() {
        let topics: Vec<_> = RESPONSE_RULES.iter().map(|r| r.topic).collect();
        assert_eq!(
            topics,
            vec![
                Topic::Projects,
                Topic::Skills,
                Topic::Experience,
                Topic::Contact,
                Topic::About,
                Topic::Greeting,
            ]
        );
    }
}
