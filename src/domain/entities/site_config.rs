use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::project::{Category, ProjectStatus};

/// Site-wide static content: bio, skills, education, the fallback project
/// list and the graphic-design section. Built once at process start and
/// shared read-only; nothing mutates it after that.
pub static SITE_CONFIG: Lazy<SiteConfig> = Lazy::new(SiteConfig::built_in);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub name: String,
    pub title: String,
    pub description: String,
    pub email: String,
    pub social_links: SocialLinks,
    pub skills: Skills,
    pub education: Education,
    pub projects: Vec<FallbackProject>,
    pub graphic_design: GraphicDesign,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub languages: Vec<String>,
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub database: Vec<String>,
    pub mobile: Vec<String>,
    pub tools: Vec<String>,
    pub concepts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub major: String,
    pub status: String,
}

/// Project-shaped entry embedded in the config document. Ids are small
/// integers assigned by position, not store-managed keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackProject {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub technologies: Vec<String>,
    pub category: Category,
    pub demo_url: String,
    pub github_url: String,
    pub status: ProjectStatus,
    pub is_featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphicDesign {
    pub enabled: bool,
    pub title: String,
    pub description: String,
    pub projects: Vec<DesignProject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignProject {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

impl Default for GraphicDesign {
    fn default() -> Self {
        GraphicDesign {
            enabled: true,
            title: "Graphic Design".to_string(),
            description: "Showcasing my graphic design work. Projects will be added soon."
                .to_string(),
            projects: Vec::new(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl SiteConfig {
    fn built_in() -> Self {
        SiteConfig {
            name: "Aman".to_string(),
            title: "Student Software Developer & Graphic Designer".to_string(),
            description: "Building full-stack web applications using the MERN stack with a \
                          focus on clean structure, usability, and reliable backend systems."
                .to_string(),
            email: "amanthatdoescares@gmail.com".to_string(),
            social_links: SocialLinks {
                github: "https://github.com/amanthatdoescares".to_string(),
                linkedin: "https://www.linkedin.com/in/aman-maurya-895963324/".to_string(),
            },
            skills: Skills {
                languages: strings(&["JavaScript", "Java", "C++", "Python"]),
                frontend: strings(&["React", "HTML", "CSS"]),
                backend: strings(&["Node.js", "Express"]),
                database: strings(&["MongoDB"]),
                mobile: strings(&["Android (Java)"]),
                tools: strings(&["Git", "GitHub", "Linux", "Figma"]),
                concepts: strings(&[
                    "REST APIs",
                    "Authentication",
                    "Full-stack Architecture",
                    "UI/UX",
                ]),
            },
            education: Education {
                degree: "Integrated Post Graduate Degree".to_string(),
                major: "B.Tech (Information Technology) + MBA".to_string(),
                status: "Currently enrolled".to_string(),
            },
            projects: vec![
                FallbackProject {
                    id: 1,
                    title: "The Shoe Store".to_string(),
                    description: "Full-stack e-commerce website for shoe shopping with product \
                                  listings and backend support. Features include user \
                                  authentication, product catalog, shopping cart, and secure \
                                  payment integration."
                        .to_string(),
                    short_description: "Full-stack e-commerce for shoes".to_string(),
                    technologies: strings(&["React", "Node.js", "Express", "MongoDB"]),
                    category: Category::Web,
                    demo_url: String::new(),
                    github_url: "https://github.com/amanthatdoescares/shoe-store".to_string(),
                    status: ProjectStatus::Completed,
                    is_featured: true,
                },
                FallbackProject {
                    id: 2,
                    title: "GetMySeat".to_string(),
                    description: "Movie ticket booking website with seat selection and booking \
                                  flow. Users can browse movies, select seats, and book tickets \
                                  with real-time availability updates."
                        .to_string(),
                    short_description: "Movie ticket booking platform".to_string(),
                    technologies: strings(&["React", "Node.js", "MongoDB"]),
                    category: Category::Web,
                    demo_url: String::new(),
                    github_url: "https://github.com/amanthatdoescares/getmyseat".to_string(),
                    status: ProjectStatus::Completed,
                    is_featured: true,
                },
                FallbackProject {
                    id: 3,
                    title: "Sangeet".to_string(),
                    description: "Android music app that plays local audio files. Features \
                                  include music playback controls, playlist management, and a \
                                  clean Material Design interface."
                        .to_string(),
                    short_description: "Android music player app".to_string(),
                    technologies: strings(&["Java", "Android SDK"]),
                    category: Category::Mobile,
                    demo_url: String::new(),
                    github_url: "https://github.com/amanthatdoescares/sangeet".to_string(),
                    status: ProjectStatus::Completed,
                    is_featured: false,
                },
                FallbackProject {
                    id: 4,
                    title: "The Dodge Game".to_string(),
                    description: "JavaScript-based web game where players dodge obstacles. \
                                  Features smooth animations, score tracking, and increasing \
                                  difficulty levels."
                        .to_string(),
                    short_description: "JavaScript arcade game".to_string(),
                    technologies: strings(&["HTML", "CSS", "JavaScript"]),
                    category: Category::Web,
                    demo_url: String::new(),
                    github_url: "https://github.com/amanthatdoescares/dodge-game".to_string(),
                    status: ProjectStatus::Completed,
                    is_featured: false,
                },
            ],
            graphic_design: GraphicDesign::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_ids_are_positional() {
        let config = &*SITE_CONFIG;
        for (index, project) in config.projects.iter().enumerate() {
            assert_eq!(project.id, index as i64 + 1);
        }
    }

    #[test]
    fn config_round_trips_through_json() {
        let json = serde_json::to_string(&*SITE_CONFIG).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.projects.len(), SITE_CONFIG.projects.len());
        assert_eq!(parsed.name, "Aman");
    }

    #[test]
    fn wire_format_is_camel_case() {
        let value = serde_json::to_value(&*SITE_CONFIG).unwrap();
        assert!(value.get("socialLinks").is_some());
        assert!(value.get("graphicDesign").is_some());
        assert!(value["projects"][0].get("shortDescription").is_some());
    }
}
