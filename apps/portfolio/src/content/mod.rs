//! Static page content. Everything the page shows besides the contact form
//! lives here as literal, typed data.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub nav: &'static [&'static str],
    pub skill_groups: &'static [SkillGroup],
    pub education: &'static [TimelineEntry],
    pub experience: &'static [TimelineEntry],
    pub resume_url: &'static str,
    pub achievements: &'static [Achievement],
    pub projects: &'static [Project],
    pub contact: ContactDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub greeting: &'static str,
    pub hero_image: &'static str,
    pub portrait_image: &'static str,
    pub age: &'static str,
    pub location: &'static str,
    pub role: &'static str,
    pub about: &'static [&'static str],
}

/// A navigation entry with its derived section id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0-100.
    pub level: u8,
}

/// One entry on the education or experience timeline.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub link: Option<AchievementLink>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AchievementLink {
    Download { label: &'static str, href: &'static str },
    External { label: &'static str, href: &'static str },
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactDetails {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub socials: &'static [SocialLink],
    pub copyright: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// Derives a section id from a navigation label: lower-cased, first space
/// removed ("About Me" -> "aboutme").
pub fn section_anchor(label: &str) -> String {
    label.to_lowercase().replacen(' ', "", 1)
}

impl Portfolio {
    /// Navigation entries in page order; also the order of the page sections.
    pub fn nav_links(&self) -> Vec<NavLink> {
        self.nav
            .iter()
            .map(|&label| NavLink {
                label,
                anchor: section_anchor(label),
            })
            .collect()
    }
}

const NAV: &[&str] = &[
    "Home",
    "About Me",
    "Skills",
    "Resume",
    "Achievements",
    "Projects",
    "Contact",
];

const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Technical Skills",
        skills: &[
            Skill { name: "JavaScript", level: 90 },
            Skill { name: "React.js", level: 85 },
            Skill { name: "Node.js", level: 80 },
            Skill { name: "TypeScript", level: 75 },
            Skill { name: "HTML/CSS", level: 95 },
        ],
    },
    SkillGroup {
        title: "Design Skills",
        skills: &[
            Skill { name: "UI/UX Design", level: 85 },
            Skill { name: "Figma", level: 80 },
            Skill { name: "Adobe XD", level: 75 },
            Skill { name: "Photoshop", level: 70 },
            Skill { name: "Responsive Design", level: 90 },
        ],
    },
    SkillGroup {
        title: "Soft Skills",
        skills: &[
            Skill { name: "Problem Solving", level: 95 },
            Skill { name: "Communication", level: 90 },
            Skill { name: "Team Leadership", level: 85 },
            Skill { name: "Project Management", level: 80 },
            Skill { name: "Adaptability", level: 90 },
        ],
    },
];

const EDUCATION: &[TimelineEntry] = &[
    TimelineEntry {
        title: "Bachelor of Information Technology",
        organization: "Eastern Mediterranean University",
        period: "2021 - 2025",
        description: "Graduated with a 3.55 CGPA, specializing in web technologies and software engineering.",
    },
    TimelineEntry {
        title: "Harvard CS50 Certificate",
        organization: "Harvard University (Online)",
        period: "2024",
        description: "Completed intensive computer science course covering algorithms, data structures, and web development.",
    },
];

const EXPERIENCE: &[TimelineEntry] = &[
    TimelineEntry {
        title: "SaaS Founder & CEO",
        organization: "MyTechStartup",
        period: "2022 - Present",
        description: "Founded and developed a SaaS platform serving over 5,000 users. Managed a team of 5 developers and secured seed funding.",
    },
    TimelineEntry {
        title: "Senior Web Developer",
        organization: "Digital Solutions Inc.",
        period: "2020 - 2022",
        description: "Led frontend development for enterprise clients. Implemented modern React architectures and mentored junior developers.",
    },
    TimelineEntry {
        title: "Web Developer",
        organization: "Creative Agency",
        period: "2021 - 2025",
        description: "Developed responsive websites for various clients using modern JavaScript frameworks and CSS preprocessors.",
    },
];

const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Harvard CS50 Certificate",
        description: "Successfully completed Harvard's CS50 course, demonstrating proficiency in computer science fundamentals.",
        link: Some(AchievementLink::Download {
            label: "Download Certificate",
            href: "/path-to-certificate.pdf",
        }),
    },
    Achievement {
        title: "SaaS Founder Entrepreneur",
        description: "Founded and developed innovative SaaS solutions, demonstrating entrepreneurial leadership.",
        link: Some(AchievementLink::External {
            label: "Visit Website",
            href: "https://your-saas-website.com",
        }),
    },
    Achievement {
        title: "Websites Developer",
        description: "Developed and deployed numerous professional websites, specializing in modern web technologies and user experience design.",
        link: None,
    },
    Achievement {
        title: "3.55 CGPA Academic Excellence",
        description: "Maintained outstanding academic performance throughout the program, demonstrating dedication and excellence in studies.",
        link: None,
    },
];

const PROJECTS: &[Project] = &[
    Project {
        title: "SaaS Platform",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=800&q=80",
        description: "A comprehensive SaaS solution for project management with real-time collaboration features.",
        technologies: &["React", "Node.js", "MongoDB", "WebSockets"],
        link: "https://example.com/project1",
    },
    Project {
        title: "E-commerce Website",
        image: "https://images.unsplash.com/photo-1523474253046-8cd2748b5fd2?auto=format&fit=crop&w=800&q=80",
        description: "Fully responsive e-commerce platform with payment integration and inventory management.",
        technologies: &["Next.js", "Stripe", "Tailwind CSS", "PostgreSQL"],
        link: "https://example.com/project2",
    },
    Project {
        title: "Portfolio Template",
        image: "https://images.unsplash.com/photo-1507238691740-187a5b1d37b8?auto=format&fit=crop&w=800&q=80",
        description: "Customizable portfolio template for creative professionals with animation effects.",
        technologies: &["React", "GSAP", "Styled Components"],
        link: "https://example.com/project3",
    },
    Project {
        title: "Task Management App",
        image: "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b?auto=format&fit=crop&w=800&q=80",
        description: "Mobile-first task management application with drag-and-drop interface and notifications.",
        technologies: &["React Native", "Firebase", "Redux"],
        link: "https://example.com/project4",
    },
    Project {
        title: "AI Content Generator",
        image: "https://images.unsplash.com/photo-1677442135136-760c813028c0?auto=format&fit=crop&w=800&q=80",
        description: "Web application that leverages AI to generate content for marketing and social media.",
        technologies: &["Vue.js", "OpenAI API", "Express"],
        link: "https://example.com/project5",
    },
    Project {
        title: "Real Estate Platform",
        image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?auto=format&fit=crop&w=800&q=80",
        description: "Property listing and management platform with virtual tours and appointment scheduling.",
        technologies: &["Angular", "Node.js", "MySQL", "Google Maps API"],
        link: "https://example.com/project6",
    },
];

const SOCIALS: &[SocialLink] = &[
    SocialLink { name: "LinkedIn", href: "https://linkedin.com" },
    SocialLink { name: "GitHub", href: "https://github.com" },
    SocialLink { name: "Twitter", href: "https://twitter.com" },
];

pub const PORTFOLIO: Portfolio = Portfolio {
    profile: Profile {
        first_name: "Negin",
        last_name: "Arabzadeh",
        greeting: "Hello, my name is Negin Arabzadeh, nice to meet you! I would like to welcome you with my personal portfolio.",
        hero_image: "https://images.unsplash.com/photo-1740592963142-cb920b0e56e2?q=80&w=2670&auto=format&fit=crop",
        portrait_image: "https://images.unsplash.com/photo-1740593178604-066b1fa1122a?q=80&w=3000&auto=format&fit=crop",
        age: "23 Years Old",
        location: "Famagusta, Cyprus",
        role: "SaaS Entrepreneur & Web Developer",
        about: &[
            "I am a passionate web developer and entrepreneur with a strong background in computer science. \
             With over 5 years of experience in web development and a successful track record as a SaaS founder, \
             I combine technical expertise with business acumen to create innovative digital solutions.",
            "My journey in technology began with a deep curiosity about how digital systems work, leading me to pursue \
             formal education in computer science and eventually launching my own SaaS business. I'm constantly learning \
             and exploring new technologies to stay at the forefront of digital innovation.",
        ],
    },
    nav: NAV,
    skill_groups: SKILL_GROUPS,
    education: EDUCATION,
    experience: EXPERIENCE,
    resume_url: "/path-to-resume.pdf",
    achievements: ACHIEVEMENTS,
    projects: PROJECTS,
    contact: ContactDetails {
        email: "natearabcyp@gmail.com",
        phone: "+90 533 846 77 57",
        location: "Famagusta, Cyprus",
        socials: SOCIALS,
        copyright: "© 2024 Negin Arabzadeh",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_anchor_removes_first_space() {
        assert_eq!(section_anchor("About Me"), "aboutme");
        assert_eq!(section_anchor("Home"), "home");
        assert_eq!(section_anchor("A B C"), "ab c");
    }

    #[test]
    fn test_nav_links_cover_every_section() {
        let anchors: Vec<String> = PORTFOLIO.nav_links().into_iter().map(|l| l.anchor).collect();
        assert_eq!(
            anchors,
            ["home", "aboutme", "skills", "resume", "achievements", "projects", "contact"]
        );
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert_eq!(PORTFOLIO.skill_groups.len(), 3);
        for group in PORTFOLIO.skill_groups {
            assert_eq!(group.skills.len(), 5);
            assert!(group.skills.iter().all(|s| s.level <= 100));
        }
    }

    #[test]
    fn test_achievement_link_serializes_with_kind() {
        let value = serde_json::to_value(&PORTFOLIO.achievements[1]).unwrap();
        assert_eq!(value["link"]["kind"], "external");
        assert_eq!(value["link"]["href"], "https://your-saas-website.com");
        assert!(serde_json::to_value(&PORTFOLIO.achievements[2]).unwrap()["link"].is_null());
    }

    #[test]
    fn test_projects_all_have_links_and_technologies() {
        assert_eq!(PORTFOLIO.projects.len(), 6);
        for project in PORTFOLIO.projects {
            assert!(project.link.starts_with("https://"));
            assert!(!project.technologies.is_empty());
        }
    }
}
