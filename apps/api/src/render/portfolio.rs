use crate::models::portfolio::{ContactLinks, PortfolioDocument};
use crate::render::template::TemplateId;
use crate::render::tree::Node;
use crate::render::{non_blank, section, split_list};

/// Renders the portfolio page: hero, skills, featured projects, career, contact.
///
/// Unlike the resume, entries whose primary field (project name, job title) is blank are
/// skipped, and a section with nothing left to show is omitted.
pub fn render_portfolio(doc: &PortfolioDocument, template: TemplateId) -> Node {
    let hero = Node::el("header")
        .class("hero")
        .child(Node::with_text("h1", non_blank(&doc.title).unwrap_or("Your Name")))
        .child(Node::with_text("p", doc.about.as_str()).class("about"));

    Node::el("article")
        .class("portfolio")
        .attr("data-template", template.as_str())
        .attr("style", template.style_attr())
        .child(hero)
        .maybe(skills_section(&doc.skills))
        .maybe(projects_section(doc))
        .maybe(career_section(doc))
        .child(contact_section(&doc.contact))
}

fn skills_section(skills: &str) -> Option<Node> {
    let tags: Vec<_> = split_list(skills)
        .into_iter()
        .map(|s| Node::with_text("span", s).class("chip"))
        .collect();
    if tags.is_empty() {
        return None;
    }
    Some(section(
        "skills",
        "Skills",
        [Node::el("div").class("chips").children(tags)],
    ))
}

fn projects_section(doc: &PortfolioDocument) -> Option<Node> {
    let cards: Vec<_> = doc
        .projects
        .iter()
        .filter(|p| non_blank(&p.name).is_some())
        .map(|project| {
            let tech = split_list(&project.technologies)
                .into_iter()
                .map(|t| Node::with_text("span", t).class("chip"));
            let media = match non_blank(&project.image_url) {
                Some(src) => Node::el("img")
                    .attr("src", src)
                    .attr("alt", project.name.as_str()),
                None => Node::el("div").class("image-placeholder"),
            };
            Node::el("div")
                .class("project-card")
                .child(media)
                .child(Node::with_text("h3", project.name.as_str()))
                .child(Node::with_text("p", project.description.as_str()))
                .child(Node::el("div").class("chips").children(tech))
                .child(
                    Node::el("a")
                        .attr("href", project.github_url.as_str())
                        .child(Node::text("Code")),
                )
                .child(
                    Node::el("a")
                        .attr("href", project.live_url.as_str())
                        .child(Node::text("Live Demo")),
                )
        })
        .collect();
    if cards.is_empty() {
        return None;
    }
    Some(section("projects", "Featured Projects", cards))
}

fn career_section(doc: &PortfolioDocument) -> Option<Node> {
    let items: Vec<_> = doc
        .experience
        .iter()
        .filter(|e| non_blank(&e.title).is_some())
        .map(|exp| {
            Node::el("div")
                .class("entry")
                .child(
                    Node::with_text("span", format!("{} - {}", exp.start_date, exp.end_date))
                        .class("dates"),
                )
                .child(Node::with_text("h3", exp.title.as_str()))
                .child(Node::with_text("p", exp.company.as_str()).class("company"))
                .child(
                    Node::with_text("p", format!("\"{}\"", exp.description)).class("description"),
                )
        })
        .collect();
    if items.is_empty() {
        return None;
    }
    Some(section("career", "Career", items))
}

fn contact_section(contact: &ContactLinks) -> Node {
    let email = non_blank(&contact.email).map(|email| {
        Node::el("a")
            .attr("href", format!("mailto:{email}"))
            .child(Node::text(email))
    });
    let links = [
        ("LinkedIn", &contact.linkedin),
        ("GitHub", &contact.github),
        ("Twitter", &contact.twitter),
    ]
    .into_iter()
    .filter_map(|(label, url)| {
        non_blank(url).map(|url| Node::el("a").attr("href", url).child(Node::text(label)))
    });

    section(
        "contact",
        "Get In Touch",
        [Node::el("div").class("contact-links").maybe(email).children(links)],
    )
}
