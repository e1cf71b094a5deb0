use chrono::{DateTime, Datelike, Utc};

pub const OWNER_NAME: &str = "Michael Baterna";
pub const CONTACT_EMAIL: &str = "micheal02052007@gmail.com";
pub const CONTACT_PHONE: &str = "+63 (905) 407-1975";

/// A page section that has an entry in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

impl Section {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Navigation order matches page order.
pub const SECTIONS: &[Section] = &[
    Section {
        id: "overview",
        label: "overview",
    },
    Section {
        id: "about-me",
        label: "about me",
    },
    Section {
        id: "character",
        label: "character",
    },
    Section {
        id: "technical-skills",
        label: "technical skills",
    },
    Section {
        id: "projects",
        label: "projects",
    },
    Section {
        id: "contact",
        label: "contact",
    },
];

pub fn section_by_id(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    /// devicon class
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/ALinuxPerson",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/michael-baterna-142379315/",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Facebook",
        href: "https://www.facebook.com/michael.baterna.5",
        icon: "devicon-facebook-plain",
    },
    SocialLink {
        label: "Reddit",
        href: "https://www.reddit.com/user/ALinuxPerson",
        icon: "devicon-reddit-plain",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persona {
    pub name: &'static str,
    pub image: &'static str,
}

pub const PERSONAL: Persona = Persona {
    name: "michael baterna",
    image: "/profile-picture.jpg",
};

pub const ONLINE: Persona = Persona {
    name: "ALinuxPerson",
    image: "/ALinuxPerson.png",
};

impl Persona {
    pub fn for_online(online: bool) -> Persona {
        if online {
            ONLINE
        } else {
            PERSONAL
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Characteristic {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub width: u32,
    pub height: u32,
}

pub const CHARACTERISTICS: &[Characteristic] = &[
    Characteristic {
        title: "Curious",
        description: "In this world, there will always be something that you just don't know. So why not have the drive to learn as much as possible? We've only got one life. I don't settle with surface-level understanding--I MUST understand how something works.",
        image: "/curious.gif",
        width: 256,
        height: 64,
    },
    Characteristic {
        title: "Open-minded",
        description: "This goes hand in hand with being curious. New ideas are being invented everyday. Therefore, I'm willing to understand and to compromise with other people because you're going against an AVALANCHE of new beliefs, frameworks, and philosophies. Diversity is what keeps humans, human. Therefore, it's important to be open-minded.",
        image: "/open-minded.gif",
        width: 256,
        height: 64,
    },
    Characteristic {
        title: "Ambitious",
        description: "DON'T LET YOUR DREAMS BE DREAMS! Every time you let go of an idea you're letting go of an entire fountain of opportunity. Words are just words, DO THEM! TAKE ACTION! The Steve Jobs' and the Bill Gates' didn't invent Apple and Microsoft by just sitting around, did they?",
        image: "/ambitious.gif",
        width: 256,
        height: 64,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub width: u32,
    pub height: u32,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        title: "Rust Development",
        description: "I am a proficient Rust developer with four years of experience, having created multiple open-source crates, including `mcsoft_auth`, `build_script`, and `try-drop`, among others.",
        image: "/rust-logo.png",
        width: 192,
        height: 192,
    },
    Skill {
        title: "Python Development",
        description: "While Rust is my primary language, I am also skilled in Python development. One example is `oom-notifier`, a utility for Linux that alerts you when the OOM (Out of Memory) score of processes becomes too high.",
        image: "/python-logo.png",
        width: 192,
        height: 192,
    },
    Skill {
        title: "OS-Specific API Development",
        description: "Despite what my GitHub handle might suggest, I also have experience developing software for both Windows and macOS in addition to Linux, leveraging platform-specific APIs when needed.",
        image: "/os-api-logo.png",
        width: 192,
        height: 192,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "mcsoft_auth",
        description: "Microsoft account authentication for Minecraft launchers, covering the full OAuth flow from device code to game token.",
        href: "https://github.com/ALinuxPerson/mcsoft_auth",
        tags: &["rust", "oauth", "library"],
    },
    Project {
        name: "build_script",
        description: "A wrapper around cargo's build script instructions so `build.rs` files read like ordinary Rust instead of println! soup.",
        href: "https://github.com/ALinuxPerson/build_script",
        tags: &["rust", "cargo", "library"],
    },
    Project {
        name: "try-drop",
        description: "Fallible destructors: run cleanup that can fail and decide what happens to the error.",
        href: "https://github.com/ALinuxPerson/try-drop",
        tags: &["rust", "library"],
    },
    Project {
        name: "oom-notifier",
        description: "A Linux utility that alerts you when the OOM score of running processes becomes too high.",
        href: "https://github.com/ALinuxPerson/oom-notifier",
        tags: &["python", "linux", "desktop"],
    },
];

/// Copyright year shown in the footer, taken from the build timestamp so the
/// server render and the hydrated page always agree.
pub fn copyright_year() -> i32 {
    year_of(env!("BUILD_TIME")).unwrap_or_else(|| Utc::now().year())
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.year())
}

pub fn footer_text(year: i32) -> String {
    format!("© {year} {OWNER_NAME}. all rights reserved.")
}
