//! サイトの静的コンテンツ
//!
//! プロジェクト一覧・職歴・ナビゲーション等。プロジェクト一覧はJSONから
//! 差し替えられるよう `ProjectCatalog` で包む。

use crate::error::{Error, Result};
use crate::types::{GridItem, NavItem, ProjectRecord, SocialLink, WorkExperience};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 連絡先メールアドレス（コピー用）
pub const OWNER_EMAIL: &str = "hello@example.com";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "About", link: "#about" },
    NavItem { name: "Projects", link: "#projects" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        image_ref: "/git.svg",
        link_url: "https://github.com/stealthemoon0331",
    },
    SocialLink {
        name: "Twitter",
        image_ref: "/twit.svg",
        link_url: "https://twitter.com/stealthemoon031",
    },
    SocialLink {
        name: "LinkedIn",
        image_ref: "/link.svg",
        link_url: "https://www.linkedin.com/in/sanidhyy",
    },
];

pub const GRID_ITEMS: &[GridItem] = &[
    GridItem { id: 1, title: "I prioritize client collaboration, fostering open communication", description: "" },
    GridItem { id: 2, title: "I'm very flexible with time zone communications", description: "" },
    GridItem { id: 3, title: "My tech stack", description: "I constantly try to improve" },
    GridItem { id: 4, title: "Tech enthusiast with a passion for development.", description: "" },
    GridItem { id: 5, title: "Currently building a JS Animation library", description: "The Inside Scoop" },
    GridItem { id: 6, title: "Do you want to start a project together?", description: "" },
];

/// 技術スタックカードのグリッドID
pub const TECH_STACK_GRID_ID: u32 = 3;

/// 連絡カードのグリッドID
pub const CONTACT_GRID_ID: u32 = 6;

fn project(
    id: u32,
    title: &str,
    description: &str,
    image_ref: &str,
    skills: &[&str],
    link_url: &str,
    source_url: &str,
) -> ProjectRecord {
    ProjectRecord {
        id,
        title: title.to_string(),
        description: description.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        image_ref: image_ref.to_string(),
        link_url: link_url.to_string(),
        source_url: source_url.to_string(),
    }
}

/// 組み込みのプロジェクト一覧
pub fn projects() -> Vec<ProjectRecord> {
    vec![
        project(
            1,
            "FigPro - Collaborative Design Tool",
            "A collaborative design tool with real-time collaboration, vector editing, and a responsive UI.",
            "/p1.svg",
            &["React", "Tailwind CSS", "TypeScript", "Three.js", "Framer Motion"],
            "https://clone-figmaa.netlify.app",
            "https://github.com/stealthemoon0331/figma-clone",
        ),
        project(
            2,
            "Yoom - Video Conferencing App",
            "Simplify your video conferencing experience with Yoom. Seamlessly connect with colleagues and friends.",
            "/p2.svg",
            &["Next.js", "Tailwind CSS", "TypeScript", "Stream", "Clerk/Auth"],
            "https://clone-yoom.netlify.app",
            "https://github.com/stealthemoon0331/zoom-clone",
        ),
        project(
            3,
            "AI Image SaaS - Canva Application",
            "A REAL Software-as-a-Service app with AI features and a payments and credits system using the latest tech stack.",
            "/p3.svg",
            &["React", "Tailwind CSS", "TypeScript", "Three.js", "Clerk/Auth"],
            "https://ai-imaginify.netlify.app",
            "https://github.com/stealthemoon0331/imaginify",
        ),
        project(
            4,
            "Animated Apple Iphone 3D Website",
            "Recreated the Apple iPhone 15 Pro website, combining GSAP animations and Three.js 3D effects..",
            "/p4.svg",
            &["Next.js", "Tailwind CSS", "TypeScript", "Three.js", "GSAP"],
            "https://app-iphone.netlify.app",
            "https://github.com/stealthemoon0331/apple-clone",
        ),
        project(
            5,
            "Novmuser AI -  AI writing companion platform",
            "AI writing companion platform that helps authors design, generate, and structure novels with the assistance of AI agents and collaborative feedback mechanisms.",
            "/novmuserai.png",
            &["Next.js", "Tailwind CSS", "TypeScript", "Clerk/Auth", "React"],
            "https://novmuserai.com",
            "https://github.com/stealthemoon0331/novmuserai",
        ),
        project(
            6,
            "AI Chat Assistant - Enterprise Solution",
            "An intelligent chatbot powered by GPT-4 with custom fine-tuning, multi-language support, and enterprise-grade security features.",
            "/p3.svg",
            &["React", "Tailwind CSS", "TypeScript", "Clerk/Auth", "Next.js"],
            "https://ai-chat-enterprise.netlify.app",
            "https://github.com/stealthemoon0331/ai-chat-assistant",
        ),
        project(
            7,
            "EcoTrack - Mobile Carbon Footprint Tracker",
            "A mobile-first application for tracking carbon footprint with gamification, social sharing, and personalized sustainability recommendations.",
            "/p2.svg",
            &["React", "Tailwind CSS", "TypeScript", "Clerk/Auth", "Next.js"],
            "https://ecotrack-mobile.netlify.app",
            "https://github.com/stealthemoon0331/ecotrack",
        ),
        project(
            8,
            "BlockChain Explorer - Real-time Analytics",
            "A real-time blockchain explorer with transaction visualization, smart contract analysis, and comprehensive network statistics dashboard.",
            "/p4.svg",
            &["Next.js", "Tailwind CSS", "TypeScript", "React", "Clerk/Auth"],
            "https://blockchain-explorer-demo.netlify.app",
            "https://github.com/stealthemoon0331/blockchain-explorer",
        ),
        project(
            9,
            "CloudSync - File Storage & Collaboration",
            "A cloud storage platform with real-time file synchronization, version control, collaborative editing, and advanced sharing permissions.",
            "/p1.svg",
            &["Next.js", "Tailwind CSS", "TypeScript", "Clerk/Auth", "Stream"],
            "https://cloudsync-demo.netlify.app",
            "https://github.com/stealthemoon0331/cloudsync",
        ),
    ]
}

/// 職歴一覧
pub fn work_experience() -> Vec<WorkExperience> {
    [
        (1, "Junior Full-Stack and ML Engineer / Intern - JustSystems XMetal",
         "Contributed to full-stack features and ML prototypes, improving UI interactivity and code quality.",
         "/exp1.svg"),
        (2, "Mid-Level Full-Stack and ML Engineer - Cybozu, Inc",
         "Delivered end-to-end features across frontend, backend, and ML; built scalable APIs and model services.",
         "/exp2.svg"),
        (3, "Senior Full-Stack & AI Engineer - TechFlow Solutions",
         "Led architecture and delivery of AI-powered web apps; mentored engineers and improved DX.",
         "/exp3.svg"),
        (4, "Freelancer",
         "Built full-stack solutions for clients, from requirements and UX to deployment and support.",
         "/exp4.svg"),
    ]
    .into_iter()
    .map(|(id, title, description, thumbnail)| WorkExperience {
        id,
        title: title.to_string(),
        description: description.to_string(),
        thumbnail: thumbnail.to_string(),
    })
    .collect()
}

/// プロジェクト一覧（読み取り専用）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectCatalog {
    records: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    /// 組み込みデータ
    pub fn builtin() -> Self {
        Self { records: projects() }
    }

    /// JSON文字列から読み込み（ProjectRecordの配列）
    ///
    /// `id` が重複していれば `Error::DuplicateId`。
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        let mut seen = HashSet::new();
        if let Some(dup) = catalog.records.iter().find(|r| !seen.insert(r.id)) {
            return Err(Error::DuplicateId(dup.id));
        }
        Ok(catalog)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn find(&self, id: u32) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::derive_fields;

    #[test]
    fn test_builtin_catalog() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.find(1).map(|r| r.title.as_str()), Some("FigPro - Collaborative Design Tool"));
        assert!(catalog.find(42).is_none());
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = ProjectCatalog::builtin();
        let mut ids: Vec<u32> = catalog.records().iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_gsap_has_no_field() {
        let catalog = ProjectCatalog::builtin();
        let apple = catalog.find(4).unwrap();
        assert!(apple.skills.iter().any(|s| s == "GSAP"));
        assert_eq!(derive_fields(apple), vec!["Frontend"]);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": 10, "title": "Rust CLI", "skills": ["Rust"]},
            {"id": 11, "title": "Blog"}
        ]"#;
        let catalog = ProjectCatalog::from_json(json).expect("JSON読み込み失敗");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find(11).unwrap().skills.is_empty());
    }

    #[test]
    fn test_from_json_invalid() {
        let result = ProjectCatalog::from_json(r#"{"id": 1}"#);
        assert!(matches!(result, Err(crate::Error::Json(_))));
    }

    #[test]
    fn test_from_json_rejects_duplicate_id() {
        let json = r#"[
            {"id": 1, "title": "FigPro"},
            {"id": 2, "title": "Yoom"},
            {"id": 1, "title": "FigPro (copy)"}
        ]"#;
        let result = ProjectCatalog::from_json(json);
        assert!(matches!(result, Err(crate::Error::DuplicateId(1))));
    }

    #[test]
    fn test_builtin_survives_json_reload() {
        let json = serde_json::to_string(&ProjectCatalog::builtin()).unwrap();
        assert_eq!(ProjectCatalog::from_json(&json).unwrap().len(), 9);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("projects.json");
        std::fs::write(&path, r#"[{"id": 1, "title": "FigPro"}]"#).unwrap();

        let catalog = ProjectCatalog::from_file(&path).expect("ファイル読み込み失敗");
        assert_eq!(catalog.records()[0].title, "FigPro");
    }

    #[test]
    fn test_static_content() {
        assert_eq!(work_experience().len(), 4);
        assert_eq!(NAV_ITEMS.len(), 2);
        assert!(GRID_ITEMS.iter().any(|g| g.id == TECH_STACK_GRID_ID));
        assert!(SOCIAL_LINKS.iter().all(|s| s.link_url.starts_with("https://")));
    }
}
