//! 复制文本组装
//!
//! 输出由最多三段组成：纪念日、封面文案、带编号的正文文案。
//! 段内按行分隔，段与段之间空一行。

/// 组装剪贴板文本，没有任何内容时返回空字符串
pub fn assemble<S: AsRef<str>>(anniversary_date: &str, cover_phrases: &[S], phrases: &[S]) -> String {
    let mut sections: Vec<Vec<String>> = Vec::new();

    let date = anniversary_date.trim();
    if !date.is_empty() {
        sections.push(vec![date.to_string()]);
    }

    let covers: Vec<String> = cover_phrases
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    if !covers.is_empty() {
        sections.push(covers);
    }

    // 编号沿用原始位置，空文案会留下空号
    let numbered: Vec<String> = phrases
        .iter()
        .enumerate()
        .filter_map(|(index, phrase)| {
            let phrase = phrase.as_ref().trim();
            (!phrase.is_empty()).then(|| format!("{}. {}", index + 1, phrase))
        })
        .collect();
    if !numbered.is_empty() {
        sections.push(numbered);
    }

    sections
        .iter()
        .map(|lines| lines.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_empty_yields_empty_string() {
        assert_eq!(assemble("", &["", ""], &["", ""]), "");
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        assert_eq!(assemble("   ", &[" ", "\t"], &["  "]), "");
    }

    #[test]
    fn date_cover_and_phrase_sections_are_separated_by_blank_lines() {
        assert_eq!(
            assemble("2024.10.26", &["Our Trip", ""], &["Day one", ""]),
            "2024.10.26\n\nOur Trip\n\n1. Day one"
        );
    }

    #[test]
    fn lines_within_a_section_use_single_breaks() {
        assert_eq!(assemble("", &["A", "B"], &["X", "Y"]), "A\nB\n\n1. X\n2. Y");
    }

    #[test]
    fn numbering_keeps_original_positions() {
        assert_eq!(
            assemble("", &["", ""], &["", "second", "", "fourth"]),
            "2. second\n4. fourth"
        );
    }

    #[test]
    fn entries_are_trimmed() {
        assert_eq!(
            assemble("  2025.01.01 ", &["", "  표지  "], &[" 첫날 "]),
            "2025.01.01\n\n표지\n\n1. 첫날"
        );
    }

    #[test]
    fn skipped_sections_leave_no_extra_separators() {
        assert_eq!(assemble("2024.10.26", &["", ""], &["X"]), "2024.10.26\n\n1. X");
        assert_eq!(assemble("2024.10.26", &["", ""], &[""]), "2024.10.26");
    }

    #[test]
    fn repeated_calls_are_identical() {
        let covers = vec!["A".to_string(), String::new()];
        let phrases = vec!["X".to_string(), " Y ".to_string()];
        let first = assemble("d", &covers, &phrases);
        let second = assemble("d", &covers, &phrases);
        assert_eq!(first, second);
    }
}
