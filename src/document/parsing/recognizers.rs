//! Line recognizers for official-document structure
//!
//! Every predicate looks at a single trimmed line. None of them validate
//! numeral sequencing: "一、" followed by "三、" is accepted as is.

use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[一二三四五六七八九十]+[、.．]").unwrap());

static SUBSECTION_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^（[一二三四五六七八九十]+）").unwrap());

static SENDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.*委员会$").unwrap());

static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}年\d{1,2}月\d{1,2}日$").unwrap());

const RECIPIENT_REGIONS: [&str; 3] = ["各区", "各市", "各县"];
const CLOSING_FORMULAS: [&str; 2] = ["特此", "此致"];
const ATTACHMENT_LABELS: [&str; 2] = ["附件：", "附件:"];
const MUNICIPAL_MARKER: &str = "市";

pub(crate) fn is_recipient(line: &str) -> bool {
    line.ends_with('：')
        || line.ends_with(':')
        || RECIPIENT_REGIONS.iter().any(|region| line.contains(region))
        || line.contains("单位：")
}

pub(crate) fn is_section_title(line: &str) -> bool {
    SECTION_TITLE.is_match(line)
}

pub(crate) fn is_subsection_title(line: &str) -> bool {
    SUBSECTION_TITLE.is_match(line)
}

pub(crate) fn is_closing_formula(line: &str) -> bool {
    CLOSING_FORMULAS.iter().any(|formula| line.contains(formula))
}

/// Remainder of an attachment line after its "附件：" label
pub(crate) fn strip_attachment_label(line: &str) -> Option<&str> {
    ATTACHMENT_LABELS
        .iter()
        .find_map(|label| line.strip_prefix(label))
}

/// Issuing unit of a municipal committee, e.g. "某某市发展和改革委员会"
pub(crate) fn is_sender(line: &str) -> bool {
    SENDER.is_match(line) && line.contains(MUNICIPAL_MARKER)
}

pub(crate) fn is_date(line: &str) -> bool {
    DATE.is_match(line)
}

pub(crate) fn is_contact(line: &str) -> bool {
    line.contains("联系人：") || line.contains("联系人:")
}

pub(crate) fn is_phone(line: &str) -> bool {
    line.contains("电话：") || line.contains("电话:")
}

pub(crate) fn is_email(line: &str) -> bool {
    line.contains('@') && line.contains('.')
}

/// First line of the closing block. Body stages stop here and hand the rest
/// of the document to the ending scan. Sender, date and contact lines are
/// not boundaries: sections such as "报名方式" routinely carry them.
pub(crate) fn is_ending_start(line: &str) -> bool {
    is_closing_formula(line) || strip_attachment_label(line).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_detection() {
        assert!(is_recipient("各区人民政府："));
        assert!(is_recipient("Dear all:"));
        assert!(is_recipient("各市直单位，各有关部门"));
        assert!(is_recipient("各县（市、区）发展改革局"));
        assert!(is_recipient("主送单位：市政府办公室"));
        assert!(!is_recipient("关于加强安全生产工作的通知"));
    }

    #[test]
    fn test_section_title_separators() {
        assert!(is_section_title("一、总则"));
        assert!(is_section_title("十二.附则"));
        assert!(is_section_title("三．工作要求"));
        assert!(!is_section_title("（一）子项"));
        assert!(!is_section_title("总则一、"));
        assert!(!is_section_title("1、总则"));
    }

    #[test]
    fn test_subsection_title_requires_full_width_parentheses() {
        assert!(is_subsection_title("（一）加强组织领导"));
        assert!(is_subsection_title("（十一）其他"));
        assert!(!is_subsection_title("(一)加强组织领导"));
        assert!(!is_subsection_title("一、总则"));
    }

    #[test]
    fn test_ending_markers() {
        assert!(is_closing_formula("特此通知。"));
        assert!(is_closing_formula("此致"));
        assert_eq!(strip_attachment_label("附件：实施方案"), Some("实施方案"));
        assert_eq!(strip_attachment_label("附件:名单"), Some("名单"));
        assert_eq!(strip_attachment_label("实施方案"), None);
    }

    #[test]
    fn test_sender_requires_municipal_committee() {
        assert!(is_sender("某某市发展和改革委员会"));
        assert!(!is_sender("某某县发展和改革委员会"));
        assert!(!is_sender("某某市人民政府"));
    }

    #[test]
    fn test_date_is_anchored() {
        assert!(is_date("2025年3月15日"));
        assert!(is_date("2025年12月1日"));
        assert!(!is_date("于2025年3月15日前报送"));
        assert!(!is_date("25年3月15日"));
    }

    #[test]
    fn test_contact_lines() {
        assert!(is_contact("联系人：张三"));
        assert!(is_phone("联系电话：010-12345678"));
        assert!(is_email("邮箱：office@example.gov.cn"));
        assert!(!is_email("请于3.15前报送"));
    }

    #[test]
    fn test_ending_start() {
        assert!(is_ending_start("特此通知。"));
        assert!(is_ending_start("附件：实施方案"));
        assert!(!is_ending_start("2025年3月15日"));
        assert!(!is_ending_start("联系人：张三"));
        assert!(!is_ending_start("联系电话：010-12345678"));
        assert!(!is_ending_start("某某市发展和改革委员会"));
        assert!(!is_ending_start("邮箱：office@example.gov.cn"));
        assert!(!is_ending_start("加强组织领导，落实工作责任。"));
    }
}
