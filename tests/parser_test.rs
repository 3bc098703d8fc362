use gongwen::document::{
    DocumentStructure, ParagraphRole, generate_outline, parse_document, reconstruct_lines,
};
use gongwen::render_document;

const NOTICE: &str = "关于加强
安全生产工作的通知
各区人民政府：
为进一步加强安全生产工作，现将有关事项通知如下。
一、总体要求
坚持安全第一。
（一）压实责任
各单位要落实主体责任。
二、工作措施
加强隐患排查。
特此通知。
附件：安全检查表
某某市安全生产委员会
2025年3月15日
联系人：王五
联系电话：12345678";

#[test]
fn test_whitespace_only_input_is_empty() {
    for text in ["", "   ", "\n\n\t\n  \n"] {
        let document = parse_document(text);
        assert!(document.is_empty());
        assert_eq!(document, DocumentStructure::default());
        assert!(render_document(&document).is_empty());
    }
}

#[test]
fn test_full_notice() {
    let document = parse_document(NOTICE);

    assert_eq!(document.title, "关于加强安全生产工作的通知");
    assert_eq!(document.recipients, vec!["各区人民政府："]);
    assert_eq!(
        document.main_body.preface,
        vec!["为进一步加强安全生产工作，现将有关事项通知如下。"]
    );

    let sections = &document.main_body.sections;
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].title, "一、总体要求");
    assert_eq!(sections[0].content, vec!["坚持安全第一。"]);
    assert_eq!(sections[0].subsections[0].title, "（一）压实责任");
    assert_eq!(sections[0].subsections[0].content, vec!["各单位要落实主体责任。"]);
    assert_eq!(sections[1].content, vec!["加强隐患排查。"]);

    let ending = &document.ending;
    assert_eq!(ending.content, vec!["特此通知。"]);
    assert_eq!(ending.attachments, vec!["安全检查表"]);
    assert_eq!(ending.sender, "某某市安全生产委员会");
    assert_eq!(ending.date, "2025年3月15日");
    assert_eq!(ending.contact.as_deref(), Some("联系人：王五"));
    assert_eq!(ending.phone.as_deref(), Some("联系电话：12345678"));
    assert!(document.dropped_lines.is_empty());
}

#[test]
fn test_sections_and_subsections() {
    let document = parse_document("一、总则\n内容A\n（一）子项\n内容B\n二、附则\n内容C");
    let sections = &document.main_body.sections;

    assert_eq!(document.title, "");
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].title, "一、总则");
    assert_eq!(sections[0].content, vec!["内容A"]);
    assert_eq!(sections[0].subsections.len(), 1);
    assert_eq!(sections[0].subsections[0].title, "（一）子项");
    assert_eq!(sections[0].subsections[0].content, vec!["内容B"]);
    assert_eq!(sections[1].title, "二、附则");
    assert_eq!(sections[1].content, vec!["内容C"]);
    assert!(sections[1].subsections.is_empty());
}

#[test]
fn test_attachment_requires_preceding_closing_formula() {
    let document = parse_document("标题\n各单位：\n正文。\n特此通知\n附件：实施方案");
    assert_eq!(document.ending.content, vec!["特此通知"]);
    assert_eq!(document.ending.attachments, vec!["实施方案"]);

    let reversed = parse_document("标题\n各单位：\n正文。\n附件：实施方案\n特此通知");
    assert!(reversed.ending.attachments.is_empty());
    assert_eq!(reversed.ending.content, vec!["附件：实施方案", "特此通知"]);
}

#[test]
fn test_contact_lines_inside_section_stay_in_body() {
    let document = parse_document(
        "关于举办业务培训的通知
各区发展改革局：
现将培训有关事项通知如下。
一、培训时间
3月20日。
二、报名方式
联系人：王五
联系电话：12345678
三、工作要求
请按时参加。
特此通知。
某某市发展和改革委员会
2025年3月15日",
    );

    let sections = &document.main_body.sections;
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["一、培训时间", "二、报名方式", "三、工作要求"]);
    assert_eq!(sections[1].content, vec!["联系人：王五", "联系电话：12345678"]);
    assert_eq!(sections[2].content, vec!["请按时参加。"]);

    assert_eq!(document.ending.content, vec!["特此通知。"]);
    assert_eq!(document.ending.sender, "某某市发展和改革委员会");
    assert_eq!(document.ending.date, "2025年3月15日");
    assert!(document.ending.contact.is_none());
    assert!(document.ending.phone.is_none());

    let paragraphs = render_document(&document);
    let third = paragraphs.iter().find(|p| p.text == "三、工作要求").unwrap();
    assert_eq!(third.role, ParagraphRole::SectionTitle);
    let contact = paragraphs.iter().find(|p| p.text == "联系人：王五").unwrap();
    assert_eq!(contact.role, ParagraphRole::SectionContent);
}

#[test]
fn test_date_line_in_ending() {
    let document = parse_document("标题\n各单位：\n特此通知。\n2025年3月15日");
    assert_eq!(document.ending.date, "2025年3月15日");
    assert!(!document.ending.content.contains(&"2025年3月15日".to_string()));
}

#[test]
fn test_multi_line_title() {
    let document = parse_document("关于加强\n安全生产工作的通知\n各区人民政府：");
    assert_eq!(document.title, "关于加强安全生产工作的通知");
    assert_eq!(document.recipients, vec!["各区人民政府："]);
}

#[test]
fn test_preface_only_document_renders_three_blocks() {
    let document = parse_document("关于开展检查的通知\n各单位：\n请于本周内完成自查。");
    let roles: Vec<ParagraphRole> = render_document(&document).iter().map(|p| p.role).collect();
    assert_eq!(
        roles,
        vec![ParagraphRole::Title, ParagraphRole::Recipient, ParagraphRole::Preface]
    );
}

#[test]
fn test_unclassified_line_after_closing_formula_is_dropped() {
    let document = parse_document("标题\n各单位：\n正文。\n特此通知。\n请认真执行");
    assert_eq!(document.ending.content, vec!["特此通知。"]);
    assert_eq!(document.dropped_lines, vec!["请认真执行"]);
    assert!(
        !render_document(&document)
            .iter()
            .any(|paragraph| paragraph.text == "请认真执行")
    );
}

#[test]
fn test_reconstruction_reparses_to_same_structure() {
    let document = parse_document(NOTICE);
    let rebuilt = parse_document(&reconstruct_lines(&document).join("\n"));
    assert_eq!(rebuilt, document);
}

#[test]
fn test_outline_follows_sections() {
    let outline = generate_outline(&parse_document(NOTICE));
    let entries: Vec<(&str, u8)> = outline
        .iter()
        .map(|item| (item.title.as_str(), item.level))
        .collect();
    assert_eq!(
        entries,
        vec![("一、总体要求", 1), ("（一）压实责任", 2), ("二、工作措施", 1)]
    );
}

#[test]
fn test_structure_serializes_to_json() {
    let json = serde_json::to_value(parse_document(NOTICE)).unwrap();
    assert_eq!(json["title"], "关于加强安全生产工作的通知");
    assert_eq!(json["ending"]["date"], "2025年3月15日");
    assert!(json.get("dropped_lines").is_none());
}
