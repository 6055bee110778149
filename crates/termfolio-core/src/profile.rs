//! Static portfolio content rendered by the built-in commands.
//!
//! Every field has a serde default, so a config file only needs to override
//! what differs from the built-in sample profile.

use serde::{Deserialize, Serialize};

/// A navigable section of the surrounding page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Anchor id passed to the host (e.g. "projects")
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Downloadable resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeFile {
    pub path: String,
    pub file_name: String,
}

/// Portfolio owner and everything the terminal can tell about them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// Login shown by `whoami` and in the prompt
    pub handle: String,
    pub role: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub bio: Vec<String>,
    pub sections: Vec<Section>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub socials: Vec<SocialLink>,
    pub resume: ResumeFile,
    /// Sub-applications reachable through `play`
    pub games: Vec<String>,
}

impl Profile {
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.id.eq_ignore_ascii_case(id))
    }

    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn game(&self, name: &str) -> Option<&str> {
        self.games
            .iter()
            .find(|game| game.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Profile {
    fn default() -> Self {
        let section = |id: &str, title: &str| Section {
            id: id.to_string(),
            title: title.to_string(),
        };

        Self {
            name: "Alex Rivera".to_string(),
            handle: "alex".to_string(),
            role: "Systems & Full-Stack Engineer".to_string(),
            tagline: "I build fast, boring, reliable software.".to_string(),
            location: "Lisbon, Portugal".to_string(),
            email: "hello@alexrivera.dev".to_string(),
            bio: strings(&[
                "Engineer with a soft spot for compilers, terminals and tidy APIs.",
                "Eight years shipping backend services, developer tooling and the",
                "occasional UI that needed to feel like an IDE.",
            ]),
            sections: vec![
                section("about", "About"),
                section("skills", "Skills"),
                section("projects", "Projects"),
                section("experience", "Experience"),
                section("contact", "Contact"),
            ],
            skills: vec![
                SkillGroup {
                    category: "Languages".to_string(),
                    items: strings(&["Rust", "TypeScript", "Go", "Python", "SQL"]),
                },
                SkillGroup {
                    category: "Backend".to_string(),
                    items: strings(&["tokio", "PostgreSQL", "Redis", "gRPC", "Kafka"]),
                },
                SkillGroup {
                    category: "Frontend".to_string(),
                    items: strings(&["React", "WebAssembly", "CSS"]),
                },
                SkillGroup {
                    category: "Tooling".to_string(),
                    items: strings(&["Docker", "Kubernetes", "Nix", "GitHub Actions"]),
                },
            ],
            projects: vec![
                Project {
                    name: "ledgerline".to_string(),
                    summary: "Append-only event store with snapshotting and replay.".to_string(),
                    stack: strings(&["Rust", "tokio", "RocksDB"]),
                    link: Some("https://github.com/alexrivera/ledgerline".to_string()),
                },
                Project {
                    name: "shellcast".to_string(),
                    summary: "Record and replay terminal sessions in the browser.".to_string(),
                    stack: strings(&["TypeScript", "WebAssembly"]),
                    link: Some("https://github.com/alexrivera/shellcast".to_string()),
                },
                Project {
                    name: "termfolio".to_string(),
                    summary: "This terminal: a portfolio you can type at.".to_string(),
                    stack: strings(&["Rust", "rustyline"]),
                    link: None,
                },
            ],
            experience: vec![
                Experience {
                    role: "Senior Software Engineer".to_string(),
                    company: "Northwind Systems".to_string(),
                    period: "2021 - present".to_string(),
                    summary: "Storage and streaming platform team.".to_string(),
                },
                Experience {
                    role: "Software Engineer".to_string(),
                    company: "Brightlane".to_string(),
                    period: "2017 - 2021".to_string(),
                    summary: "Developer tooling and internal CLIs.".to_string(),
                },
            ],
            education: vec![Education {
                degree: "BSc Computer Science".to_string(),
                school: "University of Porto".to_string(),
                period: "2013 - 2017".to_string(),
            }],
            socials: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/alexrivera".to_string(),
                },
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/alexrivera".to_string(),
                },
            ],
            resume: ResumeFile {
                path: "assets/resume.pdf".to_string(),
                file_name: "alex-rivera-resume.pdf".to_string(),
            },
            games: strings(&["snake", "tetris", "2048"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_lookup_is_case_insensitive() {
        let profile = Profile::default();
        assert_eq!(profile.section("Projects").map(|s| s.id.as_str()), Some("projects"));
        assert!(profile.section("blog").is_none());
    }

    #[test]
    fn test_game_lookup() {
        let profile = Profile::default();
        assert_eq!(profile.game("SNAKE"), Some("snake"));
        assert_eq!(profile.game("pong"), None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let profile: Profile = toml::from_str(r#"name = "Jane Doe""#).unwrap();
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.sections, Profile::default().sections);
    }
}
