//! コマンド出力の整形

use portfolio_common::{derive_fields, encode_query, share_url, FilterState, ProjectRecord};
use serde::Serialize;

/// `projects --format json` の出力
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsReport<'a> {
    pub query: String,
    pub share_url: String,
    pub count: usize,
    pub projects: Vec<ProjectEntry<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry<'a> {
    #[serde(flatten)]
    pub record: &'a ProjectRecord,
    pub fields: Vec<String>,
}

impl<'a> ProjectsReport<'a> {
    pub fn new(visible: &[&'a ProjectRecord], state: &FilterState, base_url: &str) -> Self {
        Self {
            query: encode_query(state),
            share_url: share_url(base_url, state),
            count: visible.len(),
            projects: visible
                .iter()
                .map(|&record| ProjectEntry {
                    record,
                    fields: derive_fields(record),
                })
                .collect(),
        }
    }
}

/// プロジェクト一覧のテキスト表示
pub fn format_projects(visible: &[&ProjectRecord], state: &FilterState) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "条件: 分野={} / スキル={} / 検索={}\n",
        state.fields.labels().join(", "),
        state.skills.labels().join(", "),
        if state.search_text.trim().is_empty() { "-" } else { state.search_text.trim() },
    ));

    if visible.is_empty() {
        out.push_str("一致するプロジェクトはありません\n");
        return out;
    }

    for record in visible {
        out.push_str(&format!("\n[{}] {}\n", record.id, record.title));
        let fields = derive_fields(record);
        if !fields.is_empty() {
            out.push_str(&format!("  分野: {}\n", fields.join(", ")));
        }
        out.push_str(&format!("  スキル: {}\n", record.skills.join(", ")));
        if !record.description.is_empty() {
            out.push_str(&format!("  {}\n", record.description));
        }
        if !record.link_url.is_empty() {
            out.push_str(&format!("  公開: {}\n", record.link_url));
        }
        if !record.source_url.is_empty() {
            out.push_str(&format!("  ソース: {}\n", record.source_url));
        }
    }

    out.push_str(&format!("\n{}件\n", visible.len()));
    out
}

/// 分野・スキル一覧のテキスト表示
pub fn format_facets(fields: &[String], skills: &[String]) -> String {
    format!("Fields: {}\nSkills: {}\n", fields.join(" | "), skills.join(" | "))
}

/// 技術スタックのテキスト表示
pub fn format_stack(category: &str, items: &[&str]) -> String {
    let mut out = format!("{} ({})\n", category, items.len());
    for item in items {
        out.push_str(&format!("  - {}\n", item));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_common::{compute_visible, data};

    #[test]
    fn test_format_projects_lists_matches() {
        let records = data::projects();
        let mut state = FilterState::default();
        state.set_search_text("figpro");
        let visible = compute_visible(&records, &state);

        let text = format_projects(&visible, &state);
        assert!(text.contains("[1] FigPro - Collaborative Design Tool"));
        assert!(text.contains("分野: Frontend"));
        assert!(text.contains("検索=figpro"));
        assert!(text.ends_with("1件\n"));
    }

    #[test]
    fn test_format_projects_empty() {
        let mut state = FilterState::default();
        state.toggle_field("Mobile");
        let text = format_projects(&[], &state);
        assert!(text.contains("分野=Mobile"));
        assert!(text.contains("一致するプロジェクトはありません"));
    }

    #[test]
    fn test_projects_report_json() {
        let records = data::projects();
        let mut state = FilterState::default();
        state.toggle_skill("Stream");
        let visible = compute_visible(&records, &state);

        let report = ProjectsReport::new(&visible, &state, "https://example.dev");
        let json = serde_json::to_value(&report).expect("シリアライズ失敗");
        assert_eq!(json["count"], 2);
        assert_eq!(json["query"], "skills=Stream");
        assert_eq!(json["shareUrl"], "https://example.dev/projects?skills=Stream");
        assert_eq!(json["projects"][0]["id"], 2);
        assert_eq!(json["projects"][0]["fields"][1], "Backend");
    }

    #[test]
    fn test_format_facets_and_stack() {
        let facets = format_facets(&["All".into(), "AI".into()], &["All".into()]);
        assert_eq!(facets, "Fields: All | AI\nSkills: All\n");

        let stack = format_stack("AI", &["Python", "TensorFlow"]);
        assert_eq!(stack, "AI (2)\n  - Python\n  - TensorFlow\n");
    }
}
