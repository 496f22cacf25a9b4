//! 技術分類モジュール
//!
//! スキル名→分野（Frontend / Backend / Auth）の対応表と、
//! トップページの技術スタックカードで使うカテゴリ一覧を持つ。

use crate::types::ProjectRecord;

/// スキル→分野の対応表（この表が唯一の分類基準）
const SKILL_TO_FIELD: &[(&str, &str)] = &[
    ("React", "Frontend"),
    ("Next.js", "Frontend"),
    ("Tailwind CSS", "Frontend"),
    ("TypeScript", "Frontend"),
    ("Three.js", "Frontend"),
    ("Framer Motion", "Frontend"),
    ("Stream", "Backend"),
    ("Clerk/Auth", "Auth"),
];

/// スキルに対応する分野を取得
///
/// 表にないスキルは分野を持たない。
pub fn field_for_skill(skill: &str) -> Option<&'static str> {
    SKILL_TO_FIELD
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, field)| *field)
}

/// プロジェクトの分野タグを導出（初出順・重複なし）
pub fn derive_fields(record: &ProjectRecord) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    for field in record.skills.iter().filter_map(|s| field_for_skill(s)) {
        if !fields.iter().any(|f| f == field) {
            fields.push(field.to_string());
        }
    }
    fields
}

/// 技術スタック1段目
pub const STACK_PRIMARY: &[&str] = &["React.js", "Next.js", "Typescript", "JavaScript"];

/// 技術スタック2段目
pub const STACK_SECONDARY: &[&str] = &["Vue.js", "AWS", "MongoDB", "Python"];

const STACK_ALL: &[&str] = &[
    "React.js", "Next.js", "Typescript", "JavaScript",
    "Vue.js", "AWS", "MongoDB", "Python",
    "Node.js", "Express", "Prisma", "PostgreSQL", "MySQL", "Redis",
    "Git", "Docker", "Vite", "Webpack", "Jest", "TensorFlow",
];

/// 技術スタックカードのカテゴリ（表示順）
pub const STACK_CATEGORIES: &[(&str, &[&str])] = &[
    ("All", STACK_ALL),
    ("Frontend", &["React.js", "Next.js", "Typescript", "JavaScript", "Vue.js"]),
    ("Backend", &["Node.js", "Express", "Prisma"]),
    ("Database", &["MongoDB", "PostgreSQL", "MySQL", "Redis"]),
    ("AI", &["Python", "TensorFlow"]),
    ("Dev Tools", &["Git", "Docker", "Vite", "Webpack", "Jest", "AWS"]),
];

/// カテゴリ名一覧
pub fn stack_category_names() -> Vec<&'static str> {
    STACK_CATEGORIES.iter().map(|(name, _)| *name).collect()
}

/// カテゴリに属する技術一覧を取得（大文字小文字は区別しない）
pub fn stack_category(name: &str) -> Option<&'static [&'static str]> {
    STACK_CATEGORIES
        .iter()
        .find(|(category, _)| category.eq_ignore_ascii_case(name.trim()))
        .map(|(_, items)| *items)
}
