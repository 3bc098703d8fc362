//! Generation prompt assembly

use serde::Serialize;

use crate::catalog::DocumentType;
use crate::reference::ReferenceText;

/// What the document is about and who receives it
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentContext {
    pub subject: String,
    pub recipients: String,
    pub keywords: Vec<String>,
    pub special_requirements: String,
    pub background: String,
    pub references: Vec<ReferenceText>,
}

/// Tone and shape of the generated draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StylePreference {
    /// 1..=5
    pub formality_level: u8,
    pub tone_style: String,
    /// 1..=5
    pub detail_level: u8,
    pub structure_preference: String,
}

impl Default for StylePreference {
    fn default() -> Self {
        Self {
            formality_level: 4,
            tone_style: "党政机关公文".to_string(),
            detail_level: 3,
            structure_preference: "标准结构".to_string(),
        }
    }
}

impl StylePreference {
    /// Copy with both levels clamped into 1..=5
    pub fn clamped(&self) -> Self {
        Self {
            formality_level: self.formality_level.clamp(1, 5),
            detail_level: self.detail_level.clamp(1, 5),
            ..self.clone()
        }
    }
}

pub fn format_prompt(
    document_type: &DocumentType,
    context: &DocumentContext,
    preferences: &StylePreference,
) -> String {
    let preferences = preferences.clamped();
    let mut blocks = vec![document_type.template_prompt.to_string()];

    blocks.push(format!(
        "文档类型：{}\n主题：{}\n接收方：{}",
        document_type.name, context.subject, context.recipients
    ));

    let mut guide = vec!["内容指导：".to_string()];
    if !context.background.trim().is_empty() {
        guide.push(format!("背景信息：{}", context.background.trim()));
    }
    let keywords: Vec<&str> = context
        .keywords
        .iter()
        .map(|keyword| keyword.trim())
        .filter(|keyword| !keyword.is_empty())
        .collect();
    if !keywords.is_empty() {
        guide.push(format!("关键词：{}", keywords.join("、")));
    }
    if !context.special_requirements.trim().is_empty() {
        guide.push(format!("特殊要求：{}", context.special_requirements.trim()));
    }
    if guide.len() > 1 {
        blocks.push(guide.join("\n"));
    }

    if !context.references.is_empty() {
        let mut references = vec!["参考资料：".to_string()];
        for reference in &context.references {
            references.push(format!("【{}】\n{}", reference.file_name, reference.text));
        }
        blocks.push(references.join("\n"));
    }

    blocks.push(format!(
        "风格要求：\n- 正式程度：{}/5\n- 详细程度：{}/5\n- 文风体系：{}\n- 结构风格：{}",
        preferences.formality_level,
        preferences.detail_level,
        preferences.tone_style,
        preferences.structure_preference
    ));

    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_document_type;
    use crate::reference::ExtractionMethod;

    fn notice() -> &'static DocumentType {
        find_document_type("notice").unwrap()
    }

    #[test]
    fn test_prompt_contains_fields() {
        let context = DocumentContext {
            subject: "安全生产检查".to_string(),
            recipients: "各区人民政府".to_string(),
            keywords: vec!["安全".to_string(), " 检查 ".to_string(), "".to_string()],
            special_requirements: "不超过一千字".to_string(),
            background: "近期事故多发".to_string(),
            references: Vec::new(),
        };
        let prompt = format_prompt(notice(), &context, &StylePreference::default());

        assert!(prompt.starts_with(notice().template_prompt));
        assert!(prompt.contains("文档类型：通知\n主题：安全生产检查\n接收方：各区人民政府"));
        assert!(prompt.contains("背景信息：近期事故多发"));
        assert!(prompt.contains("关键词：安全、检查\n"));
        assert!(prompt.contains("特殊要求：不超过一千字"));
        assert!(prompt.ends_with("- 正式程度：4/5\n- 详细程度：3/5\n- 文风体系：党政机关公文\n- 结构风格：标准结构"));
    }

    #[test]
    fn test_empty_optional_lines_are_omitted() {
        let prompt = format_prompt(notice(), &DocumentContext::default(), &StylePreference::default());
        assert!(!prompt.contains("内容指导"));
        assert!(!prompt.contains("关键词"));
        assert!(!prompt.contains("参考资料"));
    }

    #[test]
    fn test_levels_are_clamped() {
        let preferences = StylePreference {
            formality_level: 9,
            detail_level: 0,
            ..StylePreference::default()
        };
        let prompt = format_prompt(notice(), &DocumentContext::default(), &preferences);
        assert!(prompt.contains("正式程度：5/5"));
        assert!(prompt.contains("详细程度：1/5"));
    }

    #[test]
    fn test_references_are_quoted() {
        let context = DocumentContext {
            references: vec![ReferenceText {
                file_name: "去年通知.txt".to_string(),
                method: ExtractionMethod::Text,
                text: "去年的检查安排".to_string(),
                truncated: false,
            }],
            ..DocumentContext::default()
        };
        let prompt = format_prompt(notice(), &context, &StylePreference::default());
        assert!(prompt.contains("参考资料：\n【去年通知.txt】\n去年的检查安排"));
    }
}
