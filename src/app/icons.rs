use leptos::prelude::*;

/// Icon identifiers carried by the literal content arrays. Data stays plain
/// tags; rendering resolves them to glyph classes through `glyph_class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    GitHub,
    Linkedin,
    Email,
    Location,
    Download,
    ExternalLink,
    Send,
    Check,
    Warning,
    Sun,
    Moon,
    Menu,
    Close,
    ArrowUp,
    Heart,
    Code,
    Mobile,
    Database,
    Server,
    Palette,
    Gear,
    Brain,
    Briefcase,
    GraduationCap,
    Python,
    Java,
    Php,
    JavaScript,
    TypeScript,
    React,
    NextJs,
    NodeJs,
    Git,
    Docker,
    MySql,
    TensorFlow,
    PyTorch,
    OpenCv,
}

impl Icon {
    pub fn glyph_class(self) -> &'static str {
        match self {
            Self::GitHub => "devicon-github-plain",
            Self::Linkedin => "devicon-linkedin-plain",
            Self::Email => "extra-email",
            Self::Location => "extra-location",
            Self::Download => "extra-download",
            Self::ExternalLink => "extra-link",
            Self::Send => "extra-send",
            Self::Check => "extra-check",
            Self::Warning => "extra-warning",
            Self::Sun => "extra-sun",
            Self::Moon => "extra-moon",
            Self::Menu => "extra-menu",
            Self::Close => "extra-close",
            Self::ArrowUp => "extra-arrow-up",
            Self::Heart => "extra-heart",
            Self::Code => "extra-code",
            Self::Mobile => "extra-mobile",
            Self::Database => "extra-database",
            Self::Server => "extra-server",
            Self::Palette => "extra-palette",
            Self::Gear => "extra-gear",
            Self::Brain => "extra-brain",
            Self::Briefcase => "extra-briefcase",
            Self::GraduationCap => "extra-graduation-cap",
            Self::Python => "devicon-python-plain",
            Self::Java => "devicon-java-plain",
            Self::Php => "devicon-php-plain",
            Self::JavaScript => "devicon-javascript-plain",
            Self::TypeScript => "devicon-typescript-plain",
            Self::React => "devicon-react-original",
            Self::NextJs => "devicon-nextjs-plain",
            Self::NodeJs => "devicon-nodejs-plain",
            Self::Git => "devicon-git-plain",
            Self::Docker => "devicon-docker-plain",
            Self::MySql => "devicon-mysql-plain",
            Self::TensorFlow => "devicon-tensorflow-original",
            Self::PyTorch => "devicon-pytorch-original",
            Self::OpenCv => "devicon-opencv-plain",
        }
    }
}

#[component]
pub fn IconGlyph(icon: Icon) -> impl IntoView {
    view! { <i class=icon.glyph_class()></i> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_classes_are_nonempty_and_prefixed() {
        let all = [
            Icon::GitHub,
            Icon::Linkedin,
            Icon::Email,
            Icon::Location,
            Icon::Download,
            Icon::ExternalLink,
            Icon::Send,
            Icon::Check,
            Icon::Warning,
            Icon::Sun,
            Icon::Moon,
            Icon::Menu,
            Icon::Close,
            Icon::ArrowUp,
            Icon::Heart,
            Icon::Code,
            Icon::Mobile,
            Icon::Database,
            Icon::Server,
            Icon::Palette,
            Icon::Gear,
            Icon::Brain,
            Icon::Briefcase,
            Icon::GraduationCap,
            Icon::Python,
            Icon::Java,
            Icon::Php,
            Icon::JavaScript,
            Icon::TypeScript,
            Icon::React,
            Icon::NextJs,
            Icon::NodeJs,
            Icon::Git,
            Icon::Docker,
            Icon::MySql,
            Icon::TensorFlow,
            Icon::PyTorch,
            Icon::OpenCv,
        ];
        for icon in all {
            let class = icon.glyph_class();
            assert!(
                class.starts_with("devicon-") || class.starts_with("extra-"),
                "unexpected glyph class: {class}"
            );
        }
    }
}
