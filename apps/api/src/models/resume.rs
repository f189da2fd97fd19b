use serde::{Deserialize, Serialize};

/// Contact block at the top of a resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start_date: String,
    /// Ignored by the renderer while `current` is set; the stored value is kept.
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    /// Free text, comma separated.
    pub technologies: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

/// The resume form. Lists keep insertion order and are never null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: String,
    /// Comma-separated skill list, split at render time.
    pub skills: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
}

impl ResumeDocument {
    /// The "Load Demo" resume.
    pub fn demo() -> Self {
        ResumeDocument {
            personal_info: PersonalInfo {
                name: "Alex Rivera".to_string(),
                email: "alex.rivera@example.com".to_string(),
                phone: "+1 (555) 012-3456".to_string(),
                location: "Austin, TX".to_string(),
                linkedin: "linkedin.com/in/alexrivera".to_string(),
                github: "github.com/arivera-dev".to_string(),
            },
            summary: "Innovative Senior Frontend Developer with 7+ years of experience in building responsive, user-centric web applications. Expert in React, TypeScript, and modern CSS frameworks. Proven track record of improving site performance by 35% and mentoring cross-functional teams.".to_string(),
            skills: "React, TypeScript, Next.js, Tailwind CSS, Node.js, GraphQL, AWS, Docker, Jest, CI/CD".to_string(),
            experience: vec![
                ExperienceEntry {
                    title: "Senior Frontend Engineer".to_string(),
                    company: "TechFlow Solutions".to_string(),
                    start_date: "2020-03".to_string(),
                    end_date: String::new(),
                    current: true,
                    description: "Led the redesign of the flagship SaaS platform using React and Tailwind CSS, resulting in a 25% increase in user engagement. Architected a reusable component library used by 4 separate product teams.".to_string(),
                },
                ExperienceEntry {
                    title: "Web Developer".to_string(),
                    company: "Pixel Perfect Agency".to_string(),
                    start_date: "2017-06".to_string(),
                    end_date: "2020-02".to_string(),
                    current: false,
                    description: "Developed and maintained 15+ client websites. Optimized asset delivery pipelines, reducing initial load times by an average of 1.2 seconds across all projects.".to_string(),
                },
            ],
            education: vec![EducationEntry {
                degree: "B.S. in Computer Science".to_string(),
                school: "University of Texas".to_string(),
                start_date: "2013-08".to_string(),
                end_date: "2017-05".to_string(),
                gpa: "3.9/4.0".to_string(),
            }],
            projects: vec![ProjectEntry {
                name: "AI Design System".to_string(),
                description: "An automated design system generator using machine learning to predict accessibility-compliant color palettes.".to_string(),
                technologies: "React, Python, TensorFlow".to_string(),
                link: "https://github.com".to_string(),
            }],
            certifications: vec![
                CertificationEntry {
                    name: "AWS Certified Solutions Architect".to_string(),
                    issuer: "Amazon Web Services".to_string(),
                    date: "2022-11".to_string(),
                },
                CertificationEntry {
                    name: "Meta Frontend Professional Certificate".to_string(),
                    issuer: "Coursera".to_string(),
                    date: "2021-05".to_string(),
                },
            ],
        }
    }
}
