use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioProject {
    pub name: String,
    pub description: String,
    pub technologies: String,
    pub github_url: String,
    pub live_url: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioExperience {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactLinks {
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
}

/// The portfolio form. `slug` follows `title` whenever the title is set through the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioDocument {
    pub title: String,
    pub slug: String,
    pub about: String,
    pub skills: String,
    pub projects: Vec<PortfolioProject>,
    pub experience: Vec<PortfolioExperience>,
    pub contact: ContactLinks,
}

/// Lowercases `title`, collapses every run of characters outside `[a-z0-9]` into a single
/// `-` and trims leading/trailing dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

impl PortfolioDocument {
    pub fn demo() -> Self {
        let project = |name: &str, description: &str, technologies: &str, image_url: &str| {
            PortfolioProject {
                name: name.to_string(),
                description: description.to_string(),
                technologies: technologies.to_string(),
                github_url: "https://github.com".to_string(),
                live_url: "https://demo.com".to_string(),
                image_url: image_url.to_string(),
            }
        };

        PortfolioDocument {
            title: "Anu".to_string(),
            slug: "anu-portfolio".to_string(),
            about: "A highly motivated and detail-oriented Computer Science graduate with strong analytical skills and a passion for software development. Proficient in building scalable web applications and AI-driven solutions.".to_string(),
            skills: "React JS, Next JS, Tailwind CSS, Node JS, Springboot, MongoDB, Python, TensorFlow, AWS".to_string(),
            projects: vec![
                project(
                    "E-commerce Website",
                    "A modern and responsive e-commerce built using React and Tailwind.",
                    "React JS, Tailwind CSS, Stripe API",
                    "https://images.unsplash.com/photo-1557821552-17105176677c?auto=format&fit=crop&q=80&w=1000",
                ),
                project(
                    "AI Image Generator",
                    "A platform that uses DALL-E API to generate unique artistic images from text prompts.",
                    "Node.js, OpenAI, React",
                    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?auto=format&fit=crop&q=80&w=1000",
                ),
                project(
                    "Crypto Dashboard",
                    "Real-time cryptocurrency tracking dashboard with live price charts and news feed.",
                    "Next.js, Chart.js, CoinGecko API",
                    "https://images.unsplash.com/photo-1621761191319-c6fb62004040?auto=format&fit=crop&q=80&w=1000",
                ),
            ],
            experience: vec![
                PortfolioExperience {
                    title: "Senior Developer".to_string(),
                    company: "TECHFLOW SYSTEMS".to_string(),
                    start_date: "2022".to_string(),
                    end_date: "Present".to_string(),
                    description: "Leading the frontend architecture for the core SaaS product."
                        .to_string(),
                },
                PortfolioExperience {
                    title: "Software Engineer Intern".to_string(),
                    company: "STARTUP HUB".to_string(),
                    start_date: "2020".to_string(),
                    end_date: "2022".to_string(),
                    description: "Assisted in building scalable API endpoints and UI components."
                        .to_string(),
                },
            ],
            contact: ContactLinks {
                email: "anu@example.com".to_string(),
                linkedin: "https://linkedin.com/in/anu".to_string(),
                github: "https://github.com/anu".to_string(),
                twitter: String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("Anu's   Dev Portfolio!"), "anu-s-dev-portfolio");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("--Hello World--"), "hello-world");
        assert_eq!(slugify("  2024 Work "), "2024-work");
    }

    #[test]
    fn test_slugify_non_ascii_becomes_separator() {
        assert_eq!(slugify("Café Noir"), "caf-noir");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn test_demo_contact_serializes_camel_case() {
        let json = serde_json::to_value(PortfolioDocument::demo()).unwrap();
        assert_eq!(json["projects"][0]["githubUrl"], "https://github.com");
        assert_eq!(json["experience"][1]["startDate"], "2020");
    }
}
