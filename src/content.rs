use serde::Deserialize;
use thiserror::Error;

const PORTFOLIO_JSON: &str = include_str!("../content/portfolio.json");

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("portfolio content is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("portfolio content lists no projects")]
    NoProjects,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Portfolio {
    pub brand: String,
    pub site_title: String,
    pub headline: Vec<String>,
    pub tagline: String,
    pub about: Vec<String>,
    pub focus_areas: Vec<FocusArea>,
    pub skills: Vec<String>,
    pub resume_url: Option<String>,
    pub portrait: String,
    pub projects: Vec<Project>,
    pub contacts: Vec<ContactLink>,
    pub footer_note: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct FocusArea {
    pub kind: FocusKind,
    pub title: String,
    pub detail: String,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum FocusKind {
    Code,
    Chip,
    Brain,
}

impl FocusKind {
    pub fn glyph(self) -> &'static str {
        match self {
            FocusKind::Code => "</>",
            FocusKind::Chip => "▣",
            FocusKind::Brain => "✦",
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: String,
}

impl Project {
    pub fn image_src(&self) -> &str {
        if self.image.trim().is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.image
        }
    }

    /// `None` for projects whose link is still a `#` placeholder.
    pub fn external_link(&self) -> Option<&str> {
        match self.link.trim() {
            "" | "#" => None,
            link => Some(link),
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub value: String,
    pub link: String,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Linkedin,
    Github,
}

impl ContactKind {
    pub fn title(self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Linkedin => "LinkedIn",
            ContactKind::Github => "GitHub",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ContactKind::Email => "✉",
            ContactKind::Linkedin => "in",
            ContactKind::Github => "⌥",
        }
    }
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        Self::parse(PORTFOLIO_JSON)
    }

    pub fn parse(source: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(source)?;
        if portfolio.projects.is_empty() {
            return Err(ContentError::NoProjects);
        }
        Ok(portfolio)
    }

    /// Target of the "Start a Project" button: the first email contact.
    pub fn primary_email(&self) -> Option<&str> {
        self.contacts
            .iter()
            .find(|contact| contact.kind == ContactKind::Email)
            .map(|contact| contact.link.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(image: &str, link: &str) -> Project {
        Project {
            title: "Sensor Hub".to_string(),
            description: "ESP32 gateway".to_string(),
            image: image.to_string(),
            tags: vec!["ESP32".to_string()],
            link: link.to_string(),
        }
    }

    #[test]
    fn embedded_content_loads() {
        let portfolio = Portfolio::load().unwrap();
        assert_eq!(portfolio.brand, "MinhNhat");
        assert_eq!(portfolio.projects.len(), 6);
        assert_eq!(portfolio.contacts.len(), 3);
        assert_eq!(portfolio.focus_areas[1].kind, FocusKind::Chip);
        assert_eq!(portfolio.primary_email(), Some("mailto:nhatphanminh1610@gmail.com"));
    }

    #[test]
    fn missing_image_uses_placeholder() {
        assert_eq!(project("", "#").image_src(), PLACEHOLDER_IMAGE);
        assert_eq!(project("/movie_web.png", "#").image_src(), "/movie_web.png");
    }

    #[test]
    fn placeholder_links_are_not_external() {
        assert_eq!(project("", "#").external_link(), None);
        assert_eq!(project("", "").external_link(), None);
        assert_eq!(
            project("", "https://slider-3d-gilt.vercel.app/").external_link(),
            Some("https://slider-3d-gilt.vercel.app/")
        );
    }

    #[test]
    fn empty_project_list_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(PORTFOLIO_JSON).unwrap();
        value["projects"] = serde_json::json!([]);
        let err = Portfolio::parse(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::NoProjects));
    }

    #[test]
    fn malformed_content_is_a_json_error() {
        let err = Portfolio::parse("{ \"brand\": ").unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
        assert!(err.to_string().starts_with("portfolio content is not valid JSON"));
    }

    #[test]
    fn unknown_contact_kind_is_rejected() {
        let source = PORTFOLIO_JSON.replace("\"kind\": \"github\"", "\"kind\": \"myspace\"");
        assert!(matches!(Portfolio::parse(&source), Err(ContentError::Json(_))));
    }
}
