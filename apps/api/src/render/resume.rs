use crate::models::resume::{
    CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry,
    ResumeDocument,
};
use crate::render::template::TemplateId;
use crate::render::tree::Node;
use crate::render::{non_blank, section, split_list};

/// Renders the resume preview.
///
/// Main column: summary, experience, projects. Side column: skills, education,
/// certifications. A section whose backing field is empty is left out entirely.
pub fn render_resume(doc: &ResumeDocument, template: TemplateId) -> Node {
    let main = Node::el("div")
        .class("column-main")
        .maybe(summary_section(&doc.summary))
        .maybe(experience_section(&doc.experience))
        .maybe(projects_section(&doc.projects));

    let side = Node::el("div")
        .class("column-side")
        .maybe(skills_section(&doc.skills))
        .maybe(education_section(&doc.education))
        .maybe(certifications_section(&doc.certifications));

    Node::el("article")
        .class("resume")
        .attr("data-template", template.as_str())
        .attr("style", template.style_attr())
        .child(header(&doc.personal_info))
        .child(Node::el("div").class("columns").child(main).child(side))
}

fn header(info: &PersonalInfo) -> Node {
    let name = non_blank(&info.name).unwrap_or("Your Name");

    let contact = [&info.email, &info.phone, &info.location]
        .into_iter()
        .filter_map(|v| non_blank(v))
        .map(|v| Node::with_text("span", v));
    let links = [&info.linkedin, &info.github]
        .into_iter()
        .filter_map(|v| non_blank(v))
        .map(|v| Node::with_text("span", v).class("link"));

    Node::el("header")
        .class("resume-header")
        .child(Node::with_text("h1", name))
        .child(Node::el("div").class("contact").children(contact))
        .child(Node::el("div").class("links").children(links))
}

fn summary_section(summary: &str) -> Option<Node> {
    let summary = non_blank(summary)?;
    Some(section("summary", "Profile", [Node::with_text("p", summary)]))
}

/// Date range label; a current position always reads "Present".
pub fn date_range(entry: &ExperienceEntry) -> String {
    let end = if entry.current {
        "Present"
    } else {
        entry.end_date.as_str()
    };
    format!("{} — {}", entry.start_date, end)
}

fn experience_section(entries: &[ExperienceEntry]) -> Option<Node> {
    if entries.is_empty() {
        return None;
    }
    let items = entries.iter().map(|exp| {
        Node::el("div")
            .class("entry")
            .child(
                Node::el("div")
                    .class("entry-heading")
                    .child(Node::with_text("h3", exp.title.as_str()))
                    .child(Node::with_text("span", date_range(exp)).class("dates")),
            )
            .child(Node::with_text("p", exp.company.as_str()).class("company"))
            .child(Node::with_text("p", exp.description.as_str()).class("description"))
    });
    Some(section("experience", "Experience", items))
}

fn projects_section(entries: &[ProjectEntry]) -> Option<Node> {
    if entries.is_empty() {
        return None;
    }
    let items = entries.iter().map(|proj| {
        Node::el("div")
            .class("entry")
            .child(
                Node::el("h3")
                    .child(Node::text(proj.name.as_str()))
                    .child(Node::with_text("span", proj.technologies.as_str()).class("tech")),
            )
            .child(Node::with_text("p", proj.description.as_str()).class("description"))
    });
    Some(section("projects", "Projects", items))
}

fn skills_section(skills: &str) -> Option<Node> {
    let chips: Vec<_> = split_list(skills)
        .into_iter()
        .map(|s| Node::with_text("span", s).class("chip"))
        .collect();
    if chips.is_empty() {
        return None;
    }
    Some(section(
        "skills",
        "Expertise",
        [Node::el("div").class("chips").children(chips)],
    ))
}

fn education_section(entries: &[EducationEntry]) -> Option<Node> {
    if entries.is_empty() {
        return None;
    }
    let items = entries.iter().map(|edu| {
        Node::el("div")
            .class("entry")
            .child(Node::with_text("h3", edu.degree.as_str()))
            .child(Node::with_text("p", edu.school.as_str()).class("school"))
            .child(Node::with_text("p", edu.end_date.as_str()).class("dates"))
    });
    Some(section("education", "Education", items))
}

fn certifications_section(entries: &[CertificationEntry]) -> Option<Node> {
    if entries.is_empty() {
        return None;
    }
    let items = entries.iter().map(|cert| {
        Node::el("div")
            .class("entry")
            .child(Node::with_text("h3", cert.name.as_str()))
            .child(Node::with_text("p", cert.issuer.as_str()).class("issuer"))
            .child(Node::with_text("p", cert.date.as_str()).class("dates"))
    });
    Some(section("certifications", "Awards", items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section_ids(tree: &Node) -> Vec<String> {
        let mut ids = Vec::new();
        collect_sections(tree, &mut ids);
        ids
    }

    fn collect_sections(node: &Node, out: &mut Vec<String>) {
        if let Node::Element { tag, children, .. } = node {
            if *tag == "section" {
                if let Some(id) = node.get_attr("data-section") {
                    out.push(id.to_string());
                }
            }
            for child in children {
                collect_sections(child, out);
            }
        }
    }

    #[test]
    fn test_demo_renders_sections_in_fixed_order() {
        let tree = render_resume(&ResumeDocument::demo(), TemplateId::Modern);
        assert_eq!(
            section_ids(&tree),
            vec!["summary", "experience", "projects", "skills", "education", "certifications"]
        );
    }

    #[test]
    fn test_empty_lists_omit_sections() {
        let mut doc = ResumeDocument::demo();
        doc.projects.clear();
        doc.certifications.clear();
        let tree = render_resume(&doc, TemplateId::Modern);
        let ids = section_ids(&tree);
        assert!(!ids.contains(&"projects".to_string()));
        assert!(!ids.contains(&"certifications".to_string()));
        assert!(ids.contains(&"experience".to_string()));
    }

    #[test]
    fn test_blank_document_has_only_header() {
        let tree = render_resume(&ResumeDocument::default(), TemplateId::Minimal);
        assert!(section_ids(&tree).is_empty());
        assert!(tree.text_content().contains("Your Name"));
    }

    #[test]
    fn test_single_project_renders_section() {
        let mut doc = ResumeDocument::default();
        doc.projects.push(ProjectEntry {
            name: "Ledger".to_string(),
            ..Default::default()
        });
        let tree = render_resume(&doc, TemplateId::Modern);
        let projects = tree.find_by_class("section-projects").unwrap();
        assert!(projects.text_content().contains("Ledger"));
    }

    #[test]
    fn test_current_position_reads_present() {
        let entry = ExperienceEntry {
            start_date: "2020-03".to_string(),
            end_date: "2021-01".to_string(),
            current: true,
            ..Default::default()
        };
        assert_eq!(date_range(&entry), "2020-03 — Present");

        let past = ExperienceEntry {
            current: false,
            ..entry
        };
        assert_eq!(date_range(&past), "2020-03 — 2021-01");
    }

    #[test]
    fn test_template_only_changes_tokens() {
        let doc = ResumeDocument::demo();
        let modern = render_resume(&doc, TemplateId::Modern);
        let creative = render_resume(&doc, TemplateId::Creative);
        assert_ne!(modern, creative);
        assert_eq!(modern.text_content(), creative.text_content());
        assert_eq!(creative.get_attr("data-template"), Some("creative"));
        assert!(creative.get_attr("style").unwrap().contains("#047857"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = ResumeDocument::demo();
        assert_eq!(
            render_resume(&doc, TemplateId::Modern).to_html(),
            render_resume(&doc, TemplateId::Modern).to_html()
        );
    }

    #[test]
    fn test_skills_chips_skip_blank_tokens() {
        let doc = ResumeDocument {
            skills: "Rust, , Go,".to_string(),
            ..Default::default()
        };
        let tree = render_resume(&doc, TemplateId::Modern);
        let chips = tree.find_by_class("chips").unwrap();
        assert_eq!(chips.text_content(), "RustGo");
    }
}
