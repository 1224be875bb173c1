//! Static portfolio content: experience timeline, projects, skills, and navigation anchors.

/// One role in the experience timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    /// Stable id used for selection.
    pub id: &'static str,
    /// Company name.
    pub company: &'static str,
    /// Short company name for narrow layouts.
    pub company_short: Option<&'static str>,
    /// Role title.
    pub role: &'static str,
    /// Human-readable period.
    pub period: &'static str,
    /// Location.
    pub location: &'static str,
    /// Accomplishment bullets.
    pub highlights: &'static [&'static str],
}

impl ExperienceEntry {
    /// Label for the selector tab.
    pub fn tab_label(&self, compact: bool) -> &'static str {
        match (compact, self.company_short) {
            (true, Some(short)) => short,
            _ => self.company,
        }
    }
}

/// One portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Stable id, also the `/projects/:slug` route segment.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Technologies used.
    pub tech_stack: &'static [&'static str],
    /// Source repository.
    pub repo_url: &'static str,
    /// Live demo, when one exists.
    pub demo_url: Option<&'static str>,
    /// Root-relative preview image path.
    pub image_path: &'static str,
    /// Whether the project appears in the carousel.
    pub featured: bool,
}

/// One skill badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    /// Display name.
    pub name: &'static str,
    /// Brand color as a CSS hex value.
    pub color: &'static str,
}

/// Group of skills shown under one heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    /// Heading.
    pub title: &'static str,
    /// Skills in display order.
    pub skills: &'static [Skill],
}

/// Navbar anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    /// Visible label.
    pub label: &'static str,
    /// In-page anchor.
    pub href: &'static str,
}

/// Navbar anchors in page order.
pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        label: "Home",
        href: "#home",
    },
    NavSection {
        label: "Experience",
        href: "#experience",
    },
    NavSection {
        label: "Projects",
        href: "#projects",
    },
    NavSection {
        label: "Skills",
        href: "#skills",
    },
    NavSection {
        label: "Contact",
        href: "#contact",
    },
];

/// Experience timeline, most recent first.
pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        id: "eccc",
        company: "Environment and Climate Change Canada",
        company_short: Some("ECCC"),
        role: "Backend/Database Developer Intern",
        period: "May 2025 – May 2026",
        location: "Toronto, ON",
        highlights: &[
            "Deployed a Java Spring Boot microservice to process real-time water quality data from 500+ sensors, using Redis caching to reduce database queries by 75% and handle 1K+ requests/hour",
            "Automated percentile calculations across 13M+ hydrometric records using optimized PL/SQL procedures and materialized view caching, reducing processing time by 84% and improving query response time by 2.5x",
            "Developing Spring Boot API gateway to centralize 20+ database connections, implementing pooling and query optimization, expected to reduce response times by 60% and improve query data metrics by 50%",
            "Built ETL PostgreSQL pipeline aggregating real-time data from 200+ monitoring stations, implementing data normalization and storage optimization achieving <1s query times for 20,000 monthly users",
            "Built custom JIRA dashboard gadget using Atlassian SDK to track billable hours across 8 internal clients, automating weekly time allocation reports and eliminating manual aggregation",
        ],
    },
    ExperienceEntry {
        id: "insporos",
        company: "Insporos Technologies",
        company_short: None,
        role: "Contract Software Developer",
        period: "December 2024 – January 2025",
        location: "Mississauga, ON",
        highlights: &[
            "Developed full-stack features using React, Node.js, Express, and PostgreSQL, integrating local storage with IndexedDB and cloud syncing with AWS S3 and Render",
            "Optimized AWS S3 image uploads, reducing file sizes by 25% through Sharp.js compression and temporary file clean up, improving performance and storage efficiency",
        ],
    },
    ExperienceEntry {
        id: "myride901",
        company: "MyRide901",
        company_short: None,
        role: "Part-time Front-End Developer Intern",
        period: "August 2024 – November 2024",
        location: "Toronto, ON",
        highlights: &[
            "Rebuilt the mobile app front-end into a web version using React and CSS, enabling users to interactively demo app features, boosting site engagement and app downloads",
            "Redesigned the website's features section with HTML, CSS, and JavaScript, implementing an interactive panel that highlights 8 app features while optimizing page length for user experience",
            "Recreated and updated designs from Elementor (WordPress) to Figma, resulting in a 30% reduction in implementation time and a 20% decrease in implementation errors",
        ],
    },
    ExperienceEntry {
        id: "isna",
        company: "ISNA Canada",
        company_short: None,
        role: "Full-time Event Planning Intern",
        period: "May 2024 – August 2024",
        location: "Mississauga, ON",
        highlights: &[
            "Scraped web using Python (Selenium, Beautiful Soup) and Maps API for restaurant details to convert to Excel sheets using Pandas and OpenPyXL, processing 120 entries",
            "Developed a front-end interface, integrating MySQL for data management, to streamline vendor selection, improving staff efficiency across 5 events (2,500 attendees)",
            "Led organization of 3 large-scale events with a total attendance of 1,900 participants managing vendor selection, logistics coordination, and venue bookings",
            "Planned and executed 2 independent events, attracting 600 attendees with a 94% positive feedback rate",
        ],
    },
    ExperienceEntry {
        id: "mind4youth",
        company: "Mind4Youth",
        company_short: None,
        role: "Web Developer Intern",
        period: "August 2023 – January 2024",
        location: "Remote",
        highlights: &[
            "Designed user-friendly website prototypes in Figma, collaborating with developers to bring them to life using HTML, CSS, and WordPress",
        ],
    },
];

const OPTIMOVE_DESCRIPTION: &str =
    "Analyzes an image of a chessboard and provides a recommended move for the given chess position";
const ALIGN_DESCRIPTION: &str = "A clean, intuitive web platform that lets users upload resumes and job descriptions, then generates tailored resumes and cover letters to maximize job match success.";

pub const PROJECTS: &[Project] = &[
    Project {
        id: "optimove",
        title: "OptiMove",
        description: OPTIMOVE_DESCRIPTION,
        tech_stack: &["Python", "OpenCV", "TensorFlow", "React", "JavaScript", "Pandas"],
        repo_url: "https://github.com/HaAbdullah/OptiMove",
        demo_url: Some("https://haabdullah.github.io/OptiMove/"),
        image_path: "/projects/OptiMove.png",
        featured: true,
    },
    Project {
        id: "align",
        title: "Align",
        description: ALIGN_DESCRIPTION,
        tech_stack: &[
            "React",
            "Vite",
            "Express",
            "JavaScript",
            "Firebase",
            "Stripe",
            "Tailwind CSS",
        ],
        repo_url: "https://github.com/HaAbdullah/Align",
        demo_url: Some("https://align-demo.com"),
        image_path: "/projects/Align.png",
        featured: true,
    },
    Project {
        id: "keywe",
        title: "KeyWe",
        description: "A chrome extension that allows users to associate websites with unique code words facilitating a seamless browsing experience.",
        tech_stack: &["HTML/CSS", "JavaScript", "Chrome Storage API"],
        repo_url: "https://github.com/HaAbdullah/Keywe",
        demo_url: Some(
            "https://chromewebstore.google.com/detail/pbbojhhloifmdbggfibbjfihildgehpc",
        ),
        image_path: "/projects/KeyWe.jpg",
        featured: true,
    },
    Project {
        id: "optimove-card",
        title: "OptiMove",
        description: OPTIMOVE_DESCRIPTION,
        tech_stack: &["Python", "OpenCV", "TensorFlow", "React", "JavaScript", "Pandas"],
        repo_url: "https://github.com/HaAbdullah/OptiMove",
        demo_url: None,
        image_path: "/projects/OptiMove.png",
        featured: false,
    },
    Project {
        id: "align-card",
        title: "Align",
        description: ALIGN_DESCRIPTION,
        tech_stack: &["React", "Express", "JavaScript", "Firebase", "Stripe", "Tailwind CSS"],
        repo_url: "https://github.com/HaAbdullah/Align",
        demo_url: None,
        image_path: "/projects/Align.png",
        featured: false,
    },
    Project {
        id: "cypress",
        title: "Cypress",
        description: "A website that allows citizens to report and follow issues around the city in this interactive feed and map, to basically be able to keep an eye out and be aware of things in their community.",
        tech_stack: &["HTML", "CSS", "JavaScript", "Python"],
        repo_url: "https://github.com/HaAbdullah/Cypress",
        demo_url: None,
        image_path: "/projects/TurboTypist1.png",
        featured: false,
    },
    Project {
        id: "gradreadygeese",
        title: "GradReadyGeese",
        description: "Parses a UWaterloo transcript and uses web scraping to determine courses needed to graduate",
        tech_stack: &[
            "Python",
            "PyPDF",
            "Selenium",
            "Beautiful Soup",
            "HTML/CSS",
            "JavaScript",
        ],
        repo_url: "https://github.com/HaAbdullah/StarterHacks/",
        demo_url: None,
        image_path: "/projects/GradReadyGeese.png",
        featured: false,
    },
    Project {
        id: "currensea",
        title: "CurrenSea Converter",
        description: "World-wide currency converter with a minimalistic aesthetic design",
        tech_stack: &["Python", "PyQt5", "Fixer.io API"],
        repo_url: "https://github.com/HaAbdullah/CurrenSea",
        demo_url: None,
        image_path: "/projects/TurboTypist1.png",
        featured: false,
    },
    Project {
        id: "freelancetracker",
        title: "Freelance Tracker",
        description: "A tracker for freelance clients and services",
        tech_stack: &["Python"],
        repo_url: "https://github.com/HaAbdullah/FreelanceManager",
        demo_url: None,
        image_path: "/projects/TurboTypist1.png",
        featured: false,
    },
];

const fn skill(name: &'static str, color: &'static str) -> Skill {
    Skill { name, color }
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "FRONTEND",
        skills: &[
            skill("React", "#61DAFB"),
            skill("Next.js", "#000000"),
            skill("JavaScript", "#F7DF1E"),
            skill("TypeScript", "#3178C6"),
            skill("HTML/CSS", "#E34F26"),
            skill("Bootstrap", "#7952B3"),
        ],
    },
    SkillCategory {
        title: "BACKEND",
        skills: &[
            skill("Spring Boot", "#6DB33F"),
            skill("Express.js", "#000000"),
            skill("Node.js", "#339933"),
            skill("Flask", "#000000"),
            skill("Python", "#3776AB"),
            skill("Java", "#ED8B00"),
        ],
    },
    SkillCategory {
        title: "DATABASE",
        skills: &[
            skill("Oracle DB", "#F80000"),
            skill("PostgreSQL", "#336791"),
            skill("MySQL", "#4479A1"),
            skill("MongoDB", "#47A248"),
        ],
    },
    SkillCategory {
        title: "TOOLS",
        skills: &[
            skill("Git", "#F05032"),
            skill("Docker", "#2496ED"),
            skill("AWS", "#FF9900"),
            skill("Linux", "#FCC624"),
            skill("Figma", "#F24E1E"),
        ],
    },
];

/// Projects shown in the carousel.
pub fn featured_projects() -> Vec<&'static Project> {
    PROJECTS.iter().filter(|project| project.featured).collect()
}

/// Projects shown in the grid below the carousel.
pub fn other_projects() -> Vec<&'static Project> {
    PROJECTS.iter().filter(|project| !project.featured).collect()
}

/// Looks up a project by route slug.
pub fn find_project(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == slug)
}

/// Looks up an experience entry by id.
pub fn find_experience(id: &str) -> Option<&'static ExperienceEntry> {
    EXPERIENCE.iter().find(|entry| entry.id == id)
}

/// Next carousel slide, wrapping to the first.
pub fn carousel_next(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Previous carousel slide, wrapping to the last.
pub fn carousel_previous(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let projects: HashSet<_> = PROJECTS.iter().map(|project| project.id).collect();
        assert_eq!(projects.len(), PROJECTS.len());
        let roles: HashSet<_> = EXPERIENCE.iter().map(|entry| entry.id).collect();
        assert_eq!(roles.len(), EXPERIENCE.len());
    }

    #[test]
    fn carousel_cycles_over_featured_projects() {
        let featured = featured_projects();
        assert_eq!(
            featured.iter().map(|project| project.id).collect::<Vec<_>>(),
            vec!["optimove", "align", "keywe"]
        );
        assert_eq!(carousel_next(2, featured.len()), 0);
        assert_eq!(carousel_previous(0, featured.len()), 2);
        assert_eq!(carousel_next(0, 0), 0);
    }

    #[test]
    fn featured_and_other_projects_partition_the_list() {
        assert_eq!(
            featured_projects().len() + other_projects().len(),
            PROJECTS.len()
        );
        assert!(other_projects().iter().all(|project| !project.featured));
    }

    #[test]
    fn lookup_by_slug() {
        assert_eq!(find_project("keywe").map(|p| p.title), Some("KeyWe"));
        assert!(find_project("unknown").is_none());
        assert_eq!(
            find_experience("eccc").map(|entry| entry.tab_label(true)),
            Some("ECCC")
        );
        assert_eq!(
            find_experience("isna").map(|entry| entry.tab_label(true)),
            Some("ISNA Canada")
        );
    }

    #[test]
    fn nav_anchors_start_with_home() {
        assert_eq!(NAV_SECTIONS[0].href, "#home");
        assert!(NAV_SECTIONS.iter().all(|section| section.href.starts_with('#')));
    }
}
