//! Literal site content: every record here is defined once at load time and
//! never mutated. Icons are tags resolved at render time (see `icons`).

use super::icons::Icon;

pub const FULL_NAME: &str = "Apostolos Bletsas";
pub const ROLE: &str = "AI & Software Developer";
pub const EMAIL: &str = "apostolisbletsas14@gmail.com";
pub const LOCATION: &str = "Greece";
pub const GITHUB_URL: &str = "https://github.com/ApBletsas";
pub const GITHUB_REPOS_URL: &str = "https://github.com/ApBletsas?tab=repositories";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/apostolis-bletsas";
pub const RESUME_PATH: &str = "/Apostolos_Bletsas_CV.pdf";
pub const RESUME_FILENAME: &str = "Apostolos_Bletsas_CV.pdf";

/// In-page anchors rendered by the navigation and the footer quick links.
pub static NAV_LINKS: [(&str, &str); 5] = [
    ("About", "#about"),
    ("Projects", "#projects"),
    ("Experience", "#experience"),
    ("Skills", "#skills"),
    ("Contact", "#contact"),
];

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: Icon,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        url: GITHUB_URL,
        icon: Icon::GitHub,
    },
    SocialLink {
        name: "LinkedIn",
        url: LINKEDIN_URL,
        icon: Icon::Linkedin,
    },
    SocialLink {
        name: "Email",
        url: "mailto:apostolisbletsas14@gmail.com",
        icon: Icon::Email,
    },
];

/// Closed set of project categories; the filter matches on these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Frontend,
    FullStack,
    Python,
    AiMl,
    Mobile,
    Java,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Frontend,
        Category::FullStack,
        Category::Python,
        Category::AiMl,
        Category::Mobile,
        Category::Java,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::FullStack => "Full Stack",
            Self::Python => "Python",
            Self::AiMl => "AI/ML",
            Self::Mobile => "Mobile",
            Self::Java => "Java",
        }
    }
}

pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github: &'static str,
    /// Live demo URL, when one is deployed.
    pub live: Option<&'static str>,
    pub category: Category,
    pub icon: Icon,
}

pub static PROJECTS: [ProjectEntry; 8] = [
    ProjectEntry {
        title: "Portfolio Website",
        description: "A modern, responsive portfolio website featuring dark mode, smooth scroll-triggered animations, and a clean design.",
        technologies: &["Rust", "Leptos", "Tailwind CSS", "WebAssembly"],
        github: "https://github.com/ApBletsas/Portfolio-Website",
        live: None,
        category: Category::Frontend,
        icon: Icon::Code,
    },
    ProjectEntry {
        title: "Tichu Point Counter App",
        description: "A simple and intuitive point counter application for the Tichu card game, built for efficient score tracking and game management.",
        technologies: &["TypeScript", "React"],
        github: "https://github.com/ApBletsas/Tichu-point-counter-app",
        live: None,
        category: Category::Mobile,
        icon: Icon::Mobile,
    },
    ProjectEntry {
        title: "Ant Colony Path Finding Algorithm",
        description: "Implementation of the Ant Colony Optimization algorithm for solving path finding problems, demonstrating swarm intelligence and optimization techniques.",
        technologies: &["Python", "Algorithm Design"],
        github: "https://github.com/ApBletsas/AntColony_Path_Finding_Algorithm",
        live: None,
        category: Category::AiMl,
        icon: Icon::Brain,
    },
    ProjectEntry {
        title: "Image Enhancement App",
        description: "A computer-vision application for image processing and enhancement, featuring various filters and transformation capabilities for improving image quality.",
        technologies: &["Python", "OpenCV", "Image Processing"],
        github: "https://github.com/ApBletsas/ImageEnhancementApp",
        live: None,
        category: Category::AiMl,
        icon: Icon::OpenCv,
    },
    ProjectEntry {
        title: "Time Series Weather Forecasting",
        description: "Machine learning project for weather prediction using time series analysis, implementing various forecasting models for accurate weather predictions.",
        technologies: &["Python", "Machine Learning", "Time Series"],
        github: "https://github.com/ApBletsas/Time-Series-Prediction",
        live: None,
        category: Category::AiMl,
        icon: Icon::Brain,
    },
    ProjectEntry {
        title: "Ophthalmology Lab Management",
        description: "A comprehensive application for managing ophthalmology laboratory operations, including patient records, test results, and appointment scheduling.",
        technologies: &["Python", "Database Management"],
        github: "https://github.com/ApBletsas/Opthalmology-Lab-Management-Application",
        live: None,
        category: Category::Python,
        icon: Icon::Database,
    },
    ProjectEntry {
        title: "Online Game Website with Database",
        description: "A full-stack web application featuring online games with database integration for user management, leaderboards, and game state persistence.",
        technologies: &["PHP", "MySQL", "JavaScript", "HTML/CSS"],
        github: "https://github.com/Apbletsas/OnlineGame-Website-With-Database",
        live: None,
        category: Category::FullStack,
        icon: Icon::Php,
    },
    ProjectEntry {
        title: "Unit Converter",
        description: "A simple and efficient unit conversion application built in Java, supporting various unit types including length, weight, temperature, and more.",
        technologies: &["Java", "Swing"],
        github: "https://github.com/apostolosbletsas/Unit_Converter",
        live: None,
        category: Category::Java,
        icon: Icon::Java,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceKind {
    Work,
    Education,
}

impl ExperienceKind {
    pub fn icon(self) -> Icon {
        match self {
            Self::Work => Icon::Briefcase,
            Self::Education => Icon::GraduationCap,
        }
    }
}

pub struct ExperienceEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub kind: ExperienceKind,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub static EXPERIENCE: [ExperienceEntry; 7] = [
    ExperienceEntry {
        title: "Head Bartender",
        organization: "Liquid Beach Bar",
        location: "Kaválla, Greece",
        period: "May 2025 - September 2025",
        kind: ExperienceKind::Work,
        description: "Led a team in delivering high-quality service in a fast-paced hospitality environment, overseeing daily bar operations, inventory, and guest experience.",
        achievements: &[
            "Led team operations in high-pressure hospitality environment",
            "Managed inventory and daily bar operations efficiently",
            "Balanced leadership with hands-on service delivery",
        ],
        technologies: &["Team Leadership", "Customer Service", "Inventory Management", "Operations"],
    },
    ExperienceEntry {
        title: "Teacher",
        organization: "Ministry of Education, Lifelong Learning and Religious Affairs",
        location: "Tríkala, Greece",
        period: "September 2024 - November 2024",
        kind: ExperienceKind::Work,
        description: "Taught programming fundamentals to students, guiding them through projects and interactive lessons to build coding skills and computational thinking.",
        achievements: &[
            "Designed and delivered engaging programming lessons for children",
            "Fostered curiosity, problem-solving, and creativity in programming",
            "Supported students in understanding coding concepts and debugging",
        ],
        technologies: &["Teaching", "Programming", "Mentorship", "Curriculum Design"],
    },
    ExperienceEntry {
        title: "Sales Employee",
        organization: "To Kati Allo",
        location: "Kaválla, Greece",
        period: "February 2023 - October 2023",
        kind: ExperienceKind::Work,
        description: "Managed customer orders through multiple food delivery platforms (efood, Wolt, Box) and provided excellent customer service.",
        achievements: &[
            "Managed customer orders through multiple delivery platforms",
            "Handled multiple tasks efficiently in fast-paced environment",
        ],
        technologies: &["Customer Service", "Order Management", "Communication"],
    },
    ExperienceEntry {
        title: "Food Server",
        organization: "Barbanikolas",
        location: "Kaválla, Greece",
        period: "December 2021 - November 2022",
        kind: ExperienceKind::Work,
        description: "Provided food service and customer support in a restaurant environment, developing strong interpersonal and time management skills.",
        achievements: &[
            "Managed time efficiently in busy restaurant environment",
            "Maintained high standards of customer satisfaction",
        ],
        technologies: &["Customer Service", "Time Management", "Teamwork"],
    },
    ExperienceEntry {
        title: "Marine",
        organization: "Hellenic Army / Special Forces",
        location: "Vólos, Greece",
        period: "January 2020 - October 2020",
        kind: ExperienceKind::Work,
        description: "Served in the 521st Special Forces Marine Battalion as a Machine Gunner and Team Leader, developing strong leadership and decision-making skills.",
        achievements: &[
            "Led a squad under high-intensity operations",
            "Learned true meaning of teamwork, resilience, and accountability",
            "Enhanced adaptability and problem-solving under pressure",
        ],
        technologies: &["Leadership", "Team Management", "Decision Making"],
    },
    ExperienceEntry {
        title: "Bachelor of Computer Science",
        organization: "Democritus University of Thrace (D.U.Th.)",
        location: "Greece",
        period: "June 2024 - January 2025",
        kind: ExperienceKind::Education,
        description: "Bachelor's degree in Computer Science, focusing on software development, algorithms, and modern programming technologies.",
        achievements: &[
            "Studied software development and programming fundamentals",
            "Learned algorithms and data structures",
            "Explored modern web technologies and frameworks",
        ],
        technologies: &["Computer Science", "Algorithms", "Data Structures"],
    },
    ExperienceEntry {
        title: "Bachelor of Computer Science",
        organization: "Obuda University - John von Neumann Faculty of Informatics",
        location: "Hungary",
        period: "February 2024 - June 2024",
        kind: ExperienceKind::Education,
        description: "Studied Computer Science at Obuda University, gaining international experience and exposure to different educational approaches.",
        achievements: &[
            "Gained international educational experience",
            "Developed cross-cultural communication skills",
        ],
        technologies: &["Computer Science", "International Education"],
    },
];

pub struct CertificationEntry {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub credential: &'static str,
}

pub static CERTIFICATIONS: [CertificationEntry; 6] = [
    CertificationEntry {
        name: "ChatGPT Prompt Engineering for Developers",
        issuer: "DeepLearning.AI",
        year: "2024",
        credential: "AI-PROMPT-2024",
    },
    CertificationEntry {
        name: "Responsive Web Design",
        issuer: "freeCodeCamp",
        year: "2024",
        credential: "RWD-2024",
    },
    CertificationEntry {
        name: "Evaluating and Debugging",
        issuer: "DeepLearning.AI",
        year: "2024",
        credential: "AI-DEBUG-2024",
    },
    CertificationEntry {
        name: "Generative AI",
        issuer: "DeepLearning.AI",
        year: "2024",
        credential: "AI-GEN-2024",
    },
    CertificationEntry {
        name: "Building Generative AI Applications with Gradio",
        issuer: "DeepLearning.AI",
        year: "2024",
        credential: "AI-GRADIO-2024",
    },
    CertificationEntry {
        name: "Introduction to Cybersecurity",
        issuer: "Cisco",
        year: "2024",
        credential: "CYBER-INTRO-2024",
    },
];

pub struct SkillEntry {
    pub name: &'static str,
    pub icon: Icon,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub icon: Icon,
    pub skills: &'static [SkillEntry],
}

pub static SKILL_GROUPS: [SkillGroup; 6] = [
    SkillGroup {
        title: "Frontend Development",
        icon: Icon::Palette,
        skills: &[
            SkillEntry { name: "React", icon: Icon::React },
            SkillEntry { name: "Next.js", icon: Icon::NextJs },
            SkillEntry { name: "TypeScript", icon: Icon::TypeScript },
            SkillEntry { name: "JavaScript", icon: Icon::JavaScript },
            SkillEntry { name: "Tailwind CSS", icon: Icon::Palette },
            SkillEntry { name: "HTML5/CSS3", icon: Icon::Code },
            SkillEntry { name: "Responsive Design", icon: Icon::Palette },
        ],
    },
    SkillGroup {
        title: "Backend Development",
        icon: Icon::Server,
        skills: &[
            SkillEntry { name: "Python", icon: Icon::Python },
            SkillEntry { name: "PHP", icon: Icon::Php },
            SkillEntry { name: "Node.js", icon: Icon::NodeJs },
            SkillEntry { name: "REST APIs", icon: Icon::Server },
            SkillEntry { name: "Database Design", icon: Icon::Database },
        ],
    },
    SkillGroup {
        title: "Database & Storage",
        icon: Icon::Database,
        skills: &[
            SkillEntry { name: "MySQL", icon: Icon::MySql },
            SkillEntry { name: "SQL", icon: Icon::Database },
            SkillEntry { name: "Data Modeling", icon: Icon::Database },
            SkillEntry { name: "Query Optimization", icon: Icon::Gear },
        ],
    },
    SkillGroup {
        title: "AI & Machine Learning",
        icon: Icon::Brain,
        skills: &[
            SkillEntry { name: "Python", icon: Icon::Python },
            SkillEntry { name: "TensorFlow", icon: Icon::TensorFlow },
            SkillEntry { name: "PyTorch", icon: Icon::PyTorch },
            SkillEntry { name: "OpenCV", icon: Icon::OpenCv },
            SkillEntry { name: "Neural Networks", icon: Icon::Brain },
            SkillEntry { name: "Time Series Analysis", icon: Icon::Brain },
            SkillEntry { name: "Algorithm Design", icon: Icon::Code },
        ],
    },
    SkillGroup {
        title: "DevOps & Tools",
        icon: Icon::Gear,
        skills: &[
            SkillEntry { name: "Git", icon: Icon::Git },
            SkillEntry { name: "GitHub", icon: Icon::GitHub },
            SkillEntry { name: "Docker", icon: Icon::Docker },
            SkillEntry { name: "CI/CD", icon: Icon::Gear },
            SkillEntry { name: "Linux", icon: Icon::Server },
        ],
    },
    SkillGroup {
        title: "Mobile Development",
        icon: Icon::Mobile,
        skills: &[
            SkillEntry { name: "React Native", icon: Icon::Mobile },
            SkillEntry { name: "TypeScript", icon: Icon::TypeScript },
            SkillEntry { name: "Mobile UI/UX", icon: Icon::Palette },
            SkillEntry { name: "Cross-Platform Development", icon: Icon::Mobile },
        ],
    },
];

pub struct Tool {
    pub name: &'static str,
    pub category: &'static str,
}

pub static TOOLS: [Tool; 8] = [
    Tool { name: "VS Code", category: "IDE" },
    Tool { name: "Git", category: "Version Control" },
    Tool { name: "GitHub", category: "Version Control" },
    Tool { name: "Postman", category: "API Testing" },
    Tool { name: "Docker", category: "Containerization" },
    Tool { name: "Figma", category: "Design" },
    Tool { name: "Jupyter Notebook", category: "Data Science" },
    Tool { name: "PyCharm", category: "IDE" },
];

/// Headline values shown in the about section.
pub static VALUES: [&str; 6] = [
    "Clean Code",
    "User Experience",
    "Problem Solving",
    "Continuous Learning",
    "Team Collaboration",
    "Quality Assurance",
];

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { number: "BSc", label: "Computer Science" },
    Stat { number: "8", label: "Projects Shipped" },
    Stat { number: "2", label: "Languages Spoken" },
    Stat { number: "5+", label: "Certifications Earned" },
];

pub static INTERESTS: [&str; 5] = [
    "Traveling and exploring new places",
    "Running and staying active",
    "Gaming and problem-solving",
    "Coffee brewing and tasting",
    "Exploring new technology and gadgets",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_list_shape() {
        assert_eq!(PROJECTS.len(), 8);
        let ai_ml = PROJECTS
            .iter()
            .filter(|p| p.category == Category::AiMl)
            .count();
        assert_eq!(ai_ml, 3);
    }

    #[test]
    fn test_every_category_label_is_unique() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn test_nav_links_are_fragment_anchors() {
        for (_, href) in NAV_LINKS {
            assert!(href.starts_with('#'));
        }
    }
}
