//! Static portfolio knowledge: the chatbot's topic tables and the content
//! behind each book section. Everything here is fixed at build time.

pub mod sections;

use serde::Serialize;

pub use sections::{section_content, SectionContent};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectSummary {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RoleSummary {
    pub role: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactCard {
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

/// Topic tables the chatbot answers from.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KnowledgeBase {
    pub skills: &'static [&'static str],
    pub projects: &'static [ProjectSummary],
    pub experience: &'static [RoleSummary],
    pub about: &'static str,
    pub contact: ContactCard,
}

pub const PORTFOLIO_KNOWLEDGE: KnowledgeBase = KnowledgeBase {
    skills: &[
        "React",
        "TypeScript",
        "JavaScript",
        "Node.js",
        "Python",
        "Tailwind CSS",
        "Next.js",
        "Supabase",
        "Git",
        "Java",
        "C program",
        "HTML/CSS",
        "MySQL",
        "WordPress",
    ],
    projects: &[
        ProjectSummary {
            name: "Digital Portfolio",
            description:
                "An interactive book-style portfolio with stunning animations and tech effects",
        },
        ProjectSummary {
            name: "E-commerce Platform",
            description: "Full-stack online shopping platform with payment integration",
        },
        ProjectSummary {
            name: "Memorial Website",
            description: "Collaborative project management tool with real-time updates",
        },
        ProjectSummary {
            name: "Chat-Bot/Ai Design",
            description: "Artificial Intelligence like Metal AI",
        },
    ],
    experience: &[
        RoleSummary {
            role: "Frontend Developer",
            company: "Tech Solutions Inc.",
            duration: "2025-Present",
        },
        RoleSummary {
            role: "Full-Stack Developer",
            company: "Innovation Center",
            duration: "2025-Present",
        },
    ],
    about: "OperaTech is a passionate full-stack developer with expertise in modern web technologies. Love creating immersive digital experiences.",
    contact: ContactCard {
        email: "opeyemitimileyin102@gmail.com",
        github: "https://github.com/Timileyin95",
        linkedin: "linkedin.com/in/opeyemi_timiley",
    },
};

impl KnowledgeBase {
    pub fn projects_text(&self) -> String {
        self.projects
            .iter()
            .map(|p| format!("{}: {}", p.name, p.description))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn skills_text(&self) -> String {
        self.skills.join(", ")
    }

    pub fn experience_text(&self) -> String {
        self.experience
            .iter()
            .map(|e| format!("{} at {} ({})", e.role, e.company, e.duration))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn about_text(&self) -> String {
        self.about.to_string()
    }

    pub fn contact_text(&self) -> String {
        format!(
            "Email: {}\nGitHub: {}\nLinkedIn: {}",
            self.contact.email, self.contact.github, self.contact.linkedin
        )
    }
}
