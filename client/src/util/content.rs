//! Static page content: profile, skills, projects, and contact channels.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const OWNER_NAME: &str = "Mustafo Hafizov";
pub const ROLE: &str = "Front-end Developer";
pub const ROLE_SUFFIX: &str = "Creative Coder";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Hello, My name is Mustafo. I'm a junior front-end developer from Kulob, Tajikistan. Born in 2008, I \
     discovered my passion for web development at an early age and have been actively learning modern \
     technologies ever since.",
    "I'm motivated to grow in the IT field and enjoy building clean, user-friendly, and visually appealing \
     interfaces. I'm always eager to take on new challenges and improve my skills.",
];

pub const SKILLS: [&str; 12] = [
    "HTML",
    "CSS",
    "JavaScript",
    "React",
    "Next.js",
    "Tailwind CSS",
    "Framer Motion",
    "Git",
    "Git-Hub",
    "Redux-toolkit",
    "Zustand",
    "Redux-toolkit Query",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub live_href: &'static str,
    pub source_href: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Internet-Magazine",
        description: "A modern online store with product pages, cart, and checkout built using Next.js and Redux Toolkit.",
        tags: &["React", "Zustand", "Tailwind"],
        live_href: "#",
        source_href: "#",
    },
    Project {
        title: "Todo List",
        description: "A fully-featured task management app with authentication and data persistence using React and Firebase.",
        tags: &["React", "JavaScript", "CSS"],
        live_href: "#",
        source_href: "#",
    },
    Project {
        title: "Instagram Clone",
        description: "A social media platform clone with image uploads, likes, comments and user profiles.",
        tags: &["Next.js", "Redux-toolkit", "Swagger"],
        live_href: "#",
        source_href: "#",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

impl Link {
    /// Off-site links open in a new tab.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

pub const SOCIAL_LINKS: [Link; 3] = [
    Link { label: "GitHub", href: "https://github.com/Mustafo-hacker" },
    Link { label: "LinkedIn", href: "https://linkedin.com" },
    Link { label: "Email", href: "mailto:hafizov336@gmail.com" },
];

/// Direct contact channel shown above the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Channel {
    pub kind: &'static str,
    pub display: &'static str,
    pub link: Link,
}

pub const CONTACT_CHANNELS: [Channel; 2] = [
    Channel {
        kind: "Email",
        display: "hafizov336@gmail.com",
        link: Link { label: "Email", href: "mailto:hafizov336@gmail.com" },
    },
    Channel {
        kind: "Telegram",
        display: "@MustafoKhafizov",
        link: Link { label: "Telegram", href: "https://t.me/MustafoKhafizov" },
    },
];

/// In-page scroll targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Contact,
}

impl Section {
    pub fn anchor(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }
}
