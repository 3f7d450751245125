use std::fmt::Write as _;

use shared::{
    domain::{SectionId, NAVIGATION_LINKS},
    resume::{Proficiency, Resume, SkillCategory},
};

use crate::escape_html;

/// Renders the complete entry document: fixed navigation, all seven
/// sections in document order, footer, and the cookie-notice markup.
pub fn render_page(resume: &Resume) -> String {
    let mut html = String::with_capacity(32 * 1024);
    html.push_str("<!doctype html>\n<html lang=\"en\">\n");
    render_head(&mut html, resume);
    html.push_str("<body>\n");
    render_navigation(&mut html, resume);
    html.push_str("<main>\n");
    render_hero(&mut html, resume);
    render_about(&mut html, resume);
    render_experience(&mut html, resume);
    render_skills(&mut html, resume);
    render_education(&mut html, resume);
    render_achievements(&mut html, resume);
    render_contact(&mut html, resume);
    html.push_str("</main>\n");
    render_footer(&mut html, resume);
    render_cookie_notice(&mut html);
    html.push_str("<script src=\"/assets/page.js\"></script>\n</body>\n</html>\n");
    html
}

fn render_head(html: &mut String, resume: &Resume) {
    let name = escape_html(&resume.contact.name);
    let title = escape_html(&resume.contact.title);
    let _ = write!(
        html,
        "<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{name} — {title}</title>\n\
         <link rel=\"stylesheet\" href=\"/assets/site.css\">\n</head>\n"
    );
}

fn render_navigation(html: &mut String, resume: &Resume) {
    html.push_str("<nav id=\"site-nav\" class=\"site-nav\" data-testid=\"navigation\">\n");
    let _ = write!(
        html,
        "  <button class=\"nav-logo\" data-scroll-target=\"#hero\">{}</button>\n",
        escape_html(&resume.contact.name)
    );
    html.push_str("  <div class=\"nav-links\">\n");
    for link in NAVIGATION_LINKS {
        let _ = write!(
            html,
            "    <button class=\"nav-link\" data-scroll-target=\"#{}\">{}</button>\n",
            link.target.as_str(),
            link.label
        );
    }
    html.push_str("  </div>\n");
    html.push_str("  <button class=\"theme-toggle\" aria-label=\"Toggle theme\"></button>\n");
    html.push_str(
        "  <button class=\"menu-toggle\" aria-label=\"Open menu\" aria-expanded=\"false\">\
         </button>\n",
    );
    html.push_str("</nav>\n");
}

fn render_hero(html: &mut String, resume: &Resume) {
    let name = &resume.contact.name;
    // Last word of the name carries the accent color.
    let (lead, accent) = match name.rsplit_once(' ') {
        Some((lead, accent)) => (lead, accent),
        None => ("", name.as_str()),
    };
    open_section(html, SectionId::Hero, false);
    let _ = write!(
        html,
        "  <h1>{} <span class=\"accent\">{}</span></h1>\n",
        escape_html(lead),
        escape_html(accent)
    );
    let _ = write!(
        html,
        "  <h2>{} &amp; Technical Specialist</h2>\n",
        escape_html(&resume.contact.title)
    );
    let _ = write!(
        html,
        "  <p class=\"summary\">{}</p>\n",
        escape_html(&resume.summary)
    );
    html.push_str(
        "  <div class=\"hero-actions\">\n\
         \x20   <a class=\"cta\" href=\"/resume.pdf\" download>Download Resume</a>\n\
         \x20   <button class=\"cta-secondary\" data-scroll-target=\"#contact\">Get in Touch\
         </button>\n\
         \x20 </div>\n\
         \x20 <button class=\"scroll-cue\" data-scroll-target=\"#about\" \
         aria-label=\"Scroll to about\"></button>\n",
    );
    close_section(html);
}

fn render_about(html: &mut String, resume: &Resume) {
    open_section(html, SectionId::About, true);
    html.push_str("  <h2>About</h2>\n");
    let _ = write!(html, "  <p>{}</p>\n", escape_html(&resume.summary));
    html.push_str("  <ul class=\"expertise-grid\">\n");
    for area in &resume.expertise_areas {
        let _ = write!(
            html,
            "    <li data-icon=\"{}\">{}</li>\n",
            escape_html(&area.icon),
            escape_html(&area.name)
        );
    }
    html.push_str("  </ul>\n");
    close_section(html);
}

fn render_experience(html: &mut String, resume: &Resume) {
    open_section(html, SectionId::Experience, true);
    html.push_str("  <h2>Experience</h2>\n  <ol class=\"timeline\">\n");
    for entry in &resume.experiences {
        html.push_str("    <li class=\"timeline-entry\">\n");
        let _ = write!(
            html,
            "      <h3>{} · {}</h3>\n",
            escape_html(&entry.position),
            escape_html(&entry.company)
        );
        let _ = write!(
            html,
            "      <p class=\"meta\">{} — {} · {}</p>\n",
            escape_html(&entry.start_date),
            escape_html(&entry.end_date),
            escape_html(&entry.location)
        );
        let _ = write!(html, "      <p>{}</p>\n", escape_html(&entry.description));
        if !entry.achievements.is_empty() {
            html.push_str("      <ul class=\"highlights\">\n");
            for achievement in &entry.achievements {
                let _ = write!(html, "        <li>{}</li>\n", escape_html(achievement));
            }
            html.push_str("      </ul>\n");
        }
        html.push_str("    </li>\n");
    }
    html.push_str("  </ol>\n");
    close_section(html);
}

fn render_skills(html: &mut String, resume: &Resume) {
    open_section(html, SectionId::Skills, true);
    html.push_str("  <h2>Skills</h2>\n  <div class=\"skill-bars\">\n");
    for skill in &resume.technical_skills {
        let _ = write!(
            html,
            "    <div class=\"skill\" data-category=\"{}\">\n\
             \x20     <span class=\"skill-name\">{}</span>\n\
             \x20     <span class=\"skill-bar\"><span class=\"skill-fill\" \
             style=\"width: {}%\"></span></span>\n\
             \x20   </div>\n",
            category_slug(skill.category),
            escape_html(&skill.name),
            skill.level.min(100)
        );
    }
    html.push_str("  </div>\n  <ul class=\"tool-grid\">\n");
    for tool in &resume.tools {
        let _ = write!(
            html,
            "    <li data-icon=\"{}\" data-category=\"{}\">{}</li>\n",
            escape_html(&tool.icon),
            escape_html(&tool.category),
            escape_html(&tool.name)
        );
    }
    html.push_str("  </ul>\n  <ul class=\"languages\">\n");
    for language in &resume.languages {
        let _ = write!(
            html,
            "    <li>{} <span class=\"proficiency\">{}</span></li>\n",
            escape_html(&language.name),
            proficiency_label(language.proficiency)
        );
    }
    html.push_str("  </ul>\n");
    close_section(html);
}

fn render_education(html: &mut String, resume: &Resume) {
    open_section(html, SectionId::Education, true);
    html.push_str("  <h2>Education</h2>\n");
    let _ = write!(
        html,
        "  <p class=\"degree\">{}</p>\n  <p class=\"institution\">{} · {}</p>\n",
        escape_html(&resume.education.degree),
        escape_html(&resume.education.institution),
        escape_html(&resume.education.location)
    );
    close_section(html);
}

fn render_achievements(html: &mut String, resume: &Resume) {
    open_section(html, SectionId::Achievements, true);
    html.push_str("  <h2>Achievements</h2>\n  <ul class=\"achievement-cards\">\n");
    for achievement in &resume.achievements {
        html.push_str("    <li class=\"achievement\">\n");
        if let Some(metric) = &achievement.metric {
            let _ = write!(
                html,
                "      <span class=\"metric\">{}</span>\n",
                escape_html(metric)
            );
        }
        let _ = write!(
            html,
            "      <h3 data-icon=\"{}\">{}</h3>\n      <p>{}</p>\n",
            escape_html(&achievement.icon),
            escape_html(&achievement.title),
            escape_html(&achievement.description)
        );
        html.push_str("    </li>\n");
    }
    html.push_str("  </ul>\n");
    close_section(html);
}

fn render_contact(html: &mut String, resume: &Resume) {
    let contact = &resume.contact;
    open_section(html, SectionId::Contact, true);
    html.push_str("  <h2>Contact</h2>\n  <ul class=\"contact-list\">\n");
    let _ = write!(
        html,
        "    <li><a href=\"mailto:{0}\">{0}</a></li>\n",
        escape_html(&contact.email)
    );
    let _ = write!(html, "    <li>{}</li>\n", escape_html(&contact.phone));
    let _ = write!(html, "    <li>{}</li>\n", escape_html(&contact.location));
    if let Some(linkedin) = &contact.linkedin {
        let _ = write!(
            html,
            "    <li><a href=\"{0}\" rel=\"noopener\">LinkedIn</a></li>\n",
            escape_html(linkedin)
        );
    }
    if let Some(website) = &contact.website {
        let _ = write!(
            html,
            "    <li><a href=\"{0}\" rel=\"noopener\">Website</a></li>\n",
            escape_html(website)
        );
    }
    html.push_str("  </ul>\n");
    close_section(html);
}

fn render_footer(html: &mut String, resume: &Resume) {
    let _ = write!(
        html,
        "<footer>\n  <p>© {}. All rights reserved.</p>\n</footer>\n",
        escape_html(&resume.contact.name)
    );
}

fn render_cookie_notice(html: &mut String) {
    html.push_str(
        "<div class=\"cookie-notice\" data-testid=\"cookie-notice\" hidden>\n\
         \x20 <h3>Cookie Notice</h3>\n\
         \x20 <p>This portfolio website uses only essential cookies necessary for basic \
         functionality. We don't track you or collect personal data.</p>\n\
         \x20 <button class=\"cookie-acknowledge\">Got it</button>\n\
         </div>\n",
    );
}

fn open_section(html: &mut String, id: SectionId, animated: bool) {
    let class = if animated {
        " class=\"animate-on-scroll\""
    } else {
        ""
    };
    let _ = write!(html, "<section id=\"{}\"{class}>\n", id.as_str());
}

fn close_section(html: &mut String) {
    html.push_str("</section>\n");
}

fn category_slug(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::Expert => "expert",
        SkillCategory::Advanced => "advanced",
        SkillCategory::Intermediate => "intermediate",
        SkillCategory::Beginner => "beginner",
    }
}

fn proficiency_label(proficiency: Proficiency) -> &'static str {
    match proficiency {
        Proficiency::Native => "Native",
        Proficiency::Proficient => "Proficient",
        Proficiency::Intermediate => "Intermediate",
        Proficiency::Beginner => "Beginner",
    }
}
