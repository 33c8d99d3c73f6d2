//! Resume document model
//!
//! The document is owned by whatever editor produced it. Scoring code only
//! ever borrows it. Older editors stored skills as one comma-separated string
//! and projects with a `name` instead of a `title`; both shapes are migrated
//! here at deserialization so the scorer always sees the categorized form.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Skills,
    pub links: Links,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(alias = "name")]
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "string_or_list")]
    pub tech_stack: Vec<String>,
    pub live_url: String,
    pub github_url: String,
}

/// Skills split into the three categories the editor exposes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SkillsRepr")]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    pub github: String,
    pub linkedin: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SkillsRepr {
    Legacy(String),
    Categorized {
        #[serde(default)]
        technical: Vec<String>,
        #[serde(default)]
        soft: Vec<String>,
        #[serde(default)]
        tools: Vec<String>,
    },
}

impl From<SkillsRepr> for Skills {
    fn from(repr: SkillsRepr) -> Self {
        match repr {
            SkillsRepr::Legacy(raw) => Skills::from_legacy(&raw),
            SkillsRepr::Categorized { technical, soft, tools } => Skills { technical, soft, tools },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    Joined(String),
    List(Vec<String>),
}

fn string_or_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::Joined(raw) => split_comma_list(&raw),
        StringOrList::List(items) => items,
    })
}

fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

impl Skills {
    /// Migrate a legacy comma-separated skills string. Everything lands in
    /// `technical`.
    pub fn from_legacy(raw: &str) -> Self {
        Self {
            technical: split_comma_list(raw),
            soft: Vec::new(),
            tools: Vec::new(),
        }
    }

    /// All skills in category order, without de-duplication.
    pub fn flatten(&self) -> impl Iterator<Item = &String> {
        self.technical
            .iter()
            .chain(self.soft.iter())
            .chain(self.tools.iter())
    }
}

impl ResumeDocument {
    pub fn from_json(content: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml(content: &str) -> crate::error::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Descriptions of every experience and project entry, experience first.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.experience
            .iter()
            .map(|e| e.description.as_str())
            .chain(self.projects.iter().map(|p| p.description.as_str()))
    }

    /// Filled-in document used by the `sample` command and in tests.
    pub fn sample() -> Self {
        Self {
            personal_info: PersonalInfo {
                name: "Sarah Chen".to_string(),
                email: "sarah.chen@email.com".to_string(),
                phone: "+1 (415) 555-0123".to_string(),
                location: "San Francisco, CA".to_string(),
            },
            summary: "Senior Software Engineer with 6+ years of experience building scalable web \
                applications. Specialized in React, Node.js, and cloud infrastructure. Proven track \
                record of leading cross-functional teams and delivering high-impact products."
                .to_string(),
            education: vec![
                Education {
                    institution: "Stanford University".to_string(),
                    degree: "B.S. Computer Science".to_string(),
                    year: "2015 - 2019".to_string(),
                },
                Education {
                    institution: "UC Berkeley".to_string(),
                    degree: "M.S. Software Engineering".to_string(),
                    year: "2019 - 2021".to_string(),
                },
            ],
            experience: vec![
                Experience {
                    company: "TechCorp Inc.".to_string(),
                    role: "Senior Software Engineer".to_string(),
                    duration: "Jan 2021 - Present".to_string(),
                    description: "Lead development of customer-facing web platform serving 2M+ users. \
                        Architected microservices infrastructure reducing latency by 40%. Mentor team \
                        of 5 junior engineers."
                        .to_string(),
                },
                Experience {
                    company: "StartupXYZ".to_string(),
                    role: "Full Stack Developer".to_string(),
                    duration: "Jun 2019 - Dec 2020".to_string(),
                    description: "Built MVP product from scratch using React and Node.js. Implemented \
                        CI/CD pipeline and automated testing. Collaborated with design team on user \
                        experience improvements."
                        .to_string(),
                },
            ],
            projects: vec![
                Project {
                    title: "Open Source Analytics Platform".to_string(),
                    description: "Created real-time analytics dashboard used by 10K+ developers \
                        worldwide. Built with React, D3.js, and PostgreSQL."
                        .to_string(),
                    tech_stack: split_comma_list("React, D3.js, PostgreSQL, Docker"),
                    ..Default::default()
                },
                Project {
                    title: "AI Resume Builder".to_string(),
                    description: "Developed intelligent resume creation tool with ATS optimization. \
                        Features include AI-powered content suggestions and real-time preview."
                        .to_string(),
                    tech_stack: split_comma_list("Next.js, OpenAI API, TailwindCSS"),
                    ..Default::default()
                },
            ],
            skills: Skills::from_legacy(
                "JavaScript, TypeScript, React, Node.js, Python, AWS, Docker, PostgreSQL, Git, CI/CD",
            ),
            links: Links {
                github: "https://github.com/sarahchen".to_string(),
                linkedin: "https://linkedin.com/in/sarahchen".to_string(),
            },
        }
    }
}
