//! The resume record: the static data object the whole page renders from.
//! Loaded once at process start and never mutated at runtime.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertiseArea {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Expert,
    Advanced,
    Intermediate,
    Beginner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalSkill {
    pub name: String,
    /// Proficiency as a 0-100 percentage; rendered as a bar width.
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub icon: String,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Proficiency {
    Native,
    Proficient,
    Intermediate,
    Beginner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub proficiency: Proficiency,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub contact: ContactInfo,
    pub summary: String,
    pub expertise_areas: Vec<ExpertiseArea>,
    pub technical_skills: Vec<TechnicalSkill>,
    pub tools: Vec<Tool>,
    pub languages: Vec<Language>,
    pub achievements: Vec<Achievement>,
    pub experiences: Vec<Experience>,
    pub education: Education,
}

impl Resume {
    /// The built-in record the shipped site renders.
    pub fn builtin() -> Resume {
        Resume {
            contact: ContactInfo {
                name: "Mohammed Riyazuddin".into(),
                title: "Support Engineer".into(),
                email: "contact@riyaz.blog".into(),
                phone: "+91 863-922-7538".into(),
                location: "Hyderabad, India".into(),
                linkedin: Some("https://www.linkedin.com/in/mriyazuddin1/".into()),
                website: None,
            },
            summary: "Experienced Customer Success and Technical Support Engineer with over 5 \
                      years of success managing customer relationships, resolving complex \
                      WordPress/WooCommerce issues, and driving product adoption. Skilled in \
                      cross-functional collaboration, customer communication, and data analysis. \
                      Adept at simplifying technical concepts, supporting campaign delivery, and \
                      contributing to support process improvement."
                .into(),
            expertise_areas: vec![
                expertise("Product Support", "headphones"),
                expertise("Technical Support", "settings"),
                expertise("Technical Documentation", "file-text"),
                expertise("Project Management", "briefcase"),
                expertise("People Management", "users"),
                expertise("Training", "graduation-cap"),
                expertise("Troubleshooting", "wrench"),
                expertise("Process Improvement", "trending-up"),
                expertise("Analytical Thinking", "brain"),
                expertise("Strategic Planning", "target"),
                expertise("Debugging", "bug"),
                expertise("Customer Service", "smile"),
            ],
            technical_skills: vec![
                skill("WordPress & WooCommerce", 85, SkillCategory::Advanced),
                skill("HTML, CSS & JavaScript", 80, SkillCategory::Advanced),
                skill("Git & GitHub", 65, SkillCategory::Intermediate),
                skill("DNS & Hosting", 90, SkillCategory::Advanced),
                skill("Browser DevTools", 65, SkillCategory::Intermediate),
                skill("Zendesk", 95, SkillCategory::Expert),
                skill("Office Applications", 95, SkillCategory::Expert),
                skill("Domains", 90, SkillCategory::Expert),
            ],
            tools: vec![
                tool("WordPress", "wordpress", "CMS"),
                tool("Zendesk", "life-ring", "Support"),
                tool("GitHub", "github", "Development"),
                tool("DevTools", "code", "Development"),
                tool("DNS", "server", "Infrastructure"),
                tool("Analytics", "chart-line", "Analysis"),
            ],
            languages: vec![
                Language {
                    name: "English".into(),
                    proficiency: Proficiency::Proficient,
                },
                Language {
                    name: "Hindi & Urdu".into(),
                    proficiency: Proficiency::Native,
                },
            ],
            achievements: vec![
                Achievement {
                    title: "High-Volume Ticket Resolution".into(),
                    description: "Consistently resolved 500+ tickets/month while maintaining \
                                  90%+ CSAT scores"
                        .into(),
                    icon: "ticket".into(),
                    metric: Some("500+".into()),
                },
                Achievement {
                    title: "Documentation Excellence".into(),
                    description: "Improved user support experience by creating and updating over \
                                  100 customer-facing documentation assets within the \
                                  Documentation Guild"
                        .into(),
                    icon: "file-alt".into(),
                    metric: Some("100+".into()),
                },
                Achievement {
                    title: "Team Training & Development".into(),
                    description: "Delivered multiple trainings to upskill the team, resulting in \
                                  improvement in resolution rate and time"
                        .into(),
                    icon: "chalkboard-teacher".into(),
                    metric: Some("Multiple".into()),
                },
                Achievement {
                    title: "Regional Workforce Development".into(),
                    description: "Developed APAC workforce through a 6-month talent acquisition \
                                  initiative, supporting regional growth objectives"
                        .into(),
                    icon: "globe-asia".into(),
                    metric: Some("6 Months".into()),
                },
            ],
            experiences: vec![
                Experience {
                    company: "Automattic".into(),
                    position: "Happiness Engineer".into(),
                    location: "Remote".into(),
                    start_date: "June 2019".into(),
                    end_date: "April 2025".into(),
                    description: "Resolved customer inquiries via email (Zendesk) and live chat \
                                  supporting WordPress.com and WooCommerce platforms, enhancing \
                                  user satisfaction and product usability. Troubleshot and \
                                  optimized WooCommerce plugins and extensions, including payment \
                                  gateways (Stripe, PayPal, WooPayments), synchronization tools \
                                  (Square, Google, Facebook), and advanced modules like Bookings \
                                  and Subscriptions. Resolved issues related to website hosting, \
                                  domain management, DNS configuration, email integration, and \
                                  plugin/theme functionality on WordPress. Enhanced onboarding \
                                  and learning experience for new hires by revising and \
                                  maintaining training materials as part of the training guild."
                        .into(),
                    achievements: vec![
                        "Improved customer experience by resolving technical issues and guiding \
                         users in building visually engaging websites via expert support on \
                         domains, themes, hosting, and plugins"
                            .into(),
                        "Resolved 500+ tickets/month while maintaining 90%+ CSAT scores".into(),
                        "Improved user support experience by revamping over 100 customer-facing \
                         documentation assets within the Documentation Guild"
                            .into(),
                        "Developed APAC workforce through a 6-month talent acquisition \
                         initiative, supporting regional growth objectives"
                            .into(),
                        "Delivered multiple trainings to the team, resulting in improvement in \
                         resolution time"
                            .into(),
                    ],
                },
                Experience {
                    company: "ESW Capital".into(),
                    position: "Customer Support Manager".into(),
                    location: "Remote".into(),
                    start_date: "April 2018".into(),
                    end_date: "August 2018".into(),
                    description: "Transitioned a support process from a newly acquired company \
                                  to ESW Support model."
                        .into(),
                    achievements: Vec::new(),
                },
                Experience {
                    company: "Teradata India Pvt. Ltd".into(),
                    position: "Technical Support Associate VI".into(),
                    location: "Hyderabad".into(),
                    start_date: "September 2016".into(),
                    end_date: "March 2018".into(),
                    description: "Lead a small group of support agents.".into(),
                    achievements: Vec::new(),
                },
                Experience {
                    company: "Deloitte".into(),
                    position: "Various Roles".into(),
                    location: "Hyderabad".into(),
                    start_date: "August 2005".into(),
                    end_date: "September 2016".into(),
                    description: "Started as a support agent on the front lines (Call Center) \
                                  providing IT support. Went on to lead a team later."
                        .into(),
                    achievements: Vec::new(),
                },
            ],
            education: Education {
                degree: "Bachelor of Computer Applications".into(),
                institution: "Osmania University".into(),
                location: "Hyderabad, India".into(),
            },
        }
    }

    /// Reports which lists are empty. The page renders meaningfully only when
    /// every list has entries; rendering itself does not enforce this.
    pub fn completeness_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut check = |label: &str, empty: bool| {
            if empty {
                warnings.push(format!("resume has no {label}; section will render empty"));
            }
        };
        check("expertise areas", self.expertise_areas.is_empty());
        check("technical skills", self.technical_skills.is_empty());
        check("tools", self.tools.is_empty());
        check("languages", self.languages.is_empty());
        check("achievements", self.achievements.is_empty());
        check("experiences", self.experiences.is_empty());
        if self.contact.name.trim().is_empty() {
            warnings.push("resume contact name is empty".into());
        }
        warnings
    }
}

fn expertise(name: &str, icon: &str) -> ExpertiseArea {
    ExpertiseArea {
        name: name.into(),
        icon: icon.into(),
    }
}

fn skill(name: &str, level: u8, category: SkillCategory) -> TechnicalSkill {
    TechnicalSkill {
        name: name.into(),
        level,
        category,
    }
}

fn tool(name: &str, icon: &str, category: &str) -> Tool {
    Tool {
        name: name.into(),
        icon: icon.into(),
        category: category.into(),
    }
}

#[cfg(test)]
#[path = "tests/resume_tests.rs"]
mod tests;
