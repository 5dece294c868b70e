use serde::Serialize;

use crate::models::section::SectionId;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TocEntry {
    pub section: SectionId,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GalleryProject {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub category: &'static str,
    pub demo_url: &'static str,
    pub repository_url: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillLevel {
    pub name: &'static str,
    /// Self-assessed proficiency, 0 – 100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Everything a section page displays, tagged by section name.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum SectionContent {
    Cover {
        name: &'static str,
        headline: &'static str,
        tagline: &'static str,
        call_to_action: &'static str,
    },
    Contents {
        entries: &'static [TocEntry],
    },
    About {
        paragraphs: &'static [&'static str],
        focus_areas: &'static [&'static str],
    },
    Projects {
        projects: &'static [GalleryProject],
    },
    Skills {
        skills: &'static [SkillLevel],
        tools: &'static [&'static str],
    },
    Experience {
        timeline: &'static [TimelineEntry],
        /// Downloadable CV offered under the timeline.
        resume: ResumeLink,
    },
    Contact {
        details: &'static [ContactDetail],
        socials: &'static [SocialLink],
    },
}

const TABLE_OF_CONTENTS: &[TocEntry] = &[
    TocEntry {
        section: SectionId::About,
        title: "About Me",
        description: "Get to know me",
    },
    TocEntry {
        section: SectionId::Projects,
        title: "Projects",
        description: "My creative works",
    },
    TocEntry {
        section: SectionId::Skills,
        title: "Skills",
        description: "What I excel at",
    },
    TocEntry {
        section: SectionId::Experience,
        title: "Experience",
        description: "My journey",
    },
    TocEntry {
        section: SectionId::Contact,
        title: "Contact",
        description: "Let's connect",
    },
];

const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a passionate creative designer with over 2 years of experience in crafting digital experiences that blend aesthetic beauty with functional excellence of website and different kind of developement.",
    "My journey began with a simple love for HTML,CSS,JAVA,C Program, and Phyton. Today, I specialize in creating immersive digital portfolios, brand identities, and interactive experiences that tell compelling stories of my work.",
    "When I'm not designing, you'll find me exploring new technologies, capturing moments through brainstorming and making research how to make a better thing, or enjoying a perfect time with sleeping while listening to gospel music.",
];

const FOCUS_AREAS: &[&str] = &[
    "Frontend Development",
    "Full-Stack Development",
    "Machine Learning & Chatbot Dev",
    "Microsoft Tools (Word, Excel, PowerPoint)",
    "Problem Solving",
];

const GALLERY: &[GalleryProject] = &[
    GalleryProject {
        id: 1,
        title: "E-Commerce Redesign",
        description: "Design an Educating System Platform with full flexibility and functionality",
        tech: &["React", "TypeScript", "VScode", "Superbase"],
        category: "Web Design",
        demo_url: "https://educatalyst.vercel.app/",
        repository_url: "https://github.com/example/project1",
    },
    GalleryProject {
        id: 2,
        title: "Mobile Banking App",
        description: "Intuitive mobile banking interface focusing on accessibility and user-friendly financial management.",
        tech: &["React Native", "Sketch", "Prototyping"],
        category: "Mobile Design",
        demo_url: "https://example.com/demo2",
        repository_url: "https://github.com/example/project2",
    },
    GalleryProject {
        id: 3,
        title: "Brand Identity System",
        description: "Comprehensive brand identity for a tech startup including logo, typography, and visual guidelines.",
        tech: &["Illustrator", "After Effects", "Branding"],
        category: "Branding",
        demo_url: "https://example.com/demo3",
        repository_url: "https://github.com/example/project3",
    },
    GalleryProject {
        id: 4,
        title: "Interactive Portfolio",
        description: "Award-winning interactive portfolio with 3D elements and smooth animations.",
        tech: &["Three.js", "GSAP", "WebGL"],
        category: "Web Development",
        demo_url: "https://example.com/demo4",
        repository_url: "https://github.com/example/project4",
    },
    GalleryProject {
        id: 5,
        title: "SaaS Dashboard",
        description: "Data-rich dashboard with advanced filtering and real-time analytics visualization.",
        tech: &["Vue.js", "D3.js", "Tailwind"],
        category: "Dashboard Design",
        demo_url: "https://example.com/demo5",
        repository_url: "https://github.com/example/project5",
    },
    GalleryProject {
        id: 6,
        title: "Learning Website",
        description: "Augmented reality experience for product visualization in retail environments.",
        tech: &["Unity", "ARKit", "C#"],
        category: "AR/VR",
        demo_url: "https://educatalyst.vercel.app/",
        repository_url: "https://github.com/example/project6",
    },
];

const SKILL_LEVELS: &[SkillLevel] = &[
    SkillLevel { name: "HTML/CSS/JavaScript", level: 95 },
    SkillLevel { name: "TypeScript", level: 78 },
    SkillLevel { name: "React.js", level: 85 },
    SkillLevel { name: "Bootstrap/Tailwind CSS", level: 88 },
    SkillLevel { name: "Node.js", level: 90 },
    SkillLevel { name: "Java", level: 45 },
    SkillLevel { name: "Python", level: 50 },
    SkillLevel { name: "C Programming", level: 20 },
    SkillLevel { name: "MySQL", level: 70 },
    SkillLevel { name: "MongoDB", level: 65 },
    SkillLevel { name: "Git/GitHub", level: 60 },
];

const TOOLS: &[&str] = &[
    "Figma",
    "Adobe XD",
    "Canva",
    "Wix",
    "React",
    "TypeScript",
    "Bootstrap",
    "Tailwind CSS",
    "Git & GitHub",
    "Visual Studio Code",
    "Intelli J",
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResumeLink {
    pub url: &'static str,
    pub file_name: &'static str,
}

const RESUME: ResumeLink = ResumeLink {
    url: "/Resume Opera.pdf",
    file_name: "Resume_Opera.pdf",
};

const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "2025 - Present",
        title: "Junior Developer",
        company: "Innovation Center (ESR)",
        location: "Innovation Center, FPI",
        description: "Design different types of website with full functionality and responsivess , overseeing creative strategy for major tech clients including Global 100companies.",
        achievements: &[
            "Increased client satisfaction by 45%",
            "Design with the lifecycle system",
            "Implemented new design system reducing project time by 30%",
        ],
    },
    TimelineEntry {
        period: "2021 - 2023",
        title: "Student",
        company: "Federal Polytechnic Ilaro",
        location: "Nigeria, NG",
        description: "Designed and launched 3+ web applications with also design of chatbot, focusing on Fashion desiging store as project.",
        achievements: &[
            "40% increase in user engagement",
            "Reduced user onboarding time by 60%",
            "Looking forward to win an Award as a developer ",
        ],
    },
    TimelineEntry {
        period: "2019- 2021",
        title: "Project",
        company: "OperaTech",
        location: "Austin, TX",
        description: "Worked with 20+ startups to establish the brand identity and digital presence from concept to launch.",
        achievements: &[
            "The project is to know how reliable my skills is",
            "2 successful product launches",
            "Built design alone",
        ],
    },
];

const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        label: "Email",
        value: "opeyemitimileyin102@example.com",
        href: "mailto:opeyemitimileyin102@example.com",
    },
    ContactDetail {
        label: "Phone",
        value: "+234 9158-547-128",
        href: "tel:+2349158547128",
    },
    ContactDetail {
        label: "Location",
        value: "Sango Ota, Nigeria, NG",
        href: "#",
    },
];

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "LinkedIn", href: "#" },
    SocialLink {
        label: "Twitter",
        href: "https://x.com/OpeyemiTim95975",
    },
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/operatech_45",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Timileyin95",
    },
];

/// Returns the static content for a section page.
pub fn section_content(section: SectionId) -> SectionContent {
    match section {
        SectionId::Cover => SectionContent::Cover {
            name: "OperaTech",
            headline: "Full-stack Developer & Digital Artist",
            tagline: "Crafting immersive digital experiences through innovative design and cutting-edge technology",
            call_to_action: "Open Portfolio",
        },
        SectionId::Contents => SectionContent::Contents {
            entries: TABLE_OF_CONTENTS,
        },
        SectionId::About => SectionContent::About {
            paragraphs: ABOUT_PARAGRAPHS,
            focus_areas: FOCUS_AREAS,
        },
        SectionId::Projects => SectionContent::Projects { projects: GALLERY },
        SectionId::Skills => SectionContent::Skills {
            skills: SKILL_LEVELS,
            tools: TOOLS,
        },
        SectionId::Experience => SectionContent::Experience {
            timeline: TIMELINE,
            resume: RESUME,
        },
        SectionId::Contact => SectionContent::Contact {
            details: CONTACT_DETAILS,
            socials: SOCIAL_LINKS,
        },
    }
}
