use chrono::NaiveDate;

/// 封面文案固定数量
pub const COVER_PHRASE_COUNT: usize = 2;

/// 表单中的一个输入框
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    AnniversaryDate,
    Cover(usize),
    Phrase(usize),
}

impl Field {
    /// 输入框为空时显示的提示
    pub fn placeholder(&self, max_length: usize, today: NaiveDate) -> String {
        match self {
            Field::AnniversaryDate => {
                format!("예: {} (최대 {}자)", today.format("%Y.%m.%d"), max_length)
            }
            Field::Cover(index) => format!("표지 문구 {} (최대 {}자)", index + 1, max_length),
            Field::Phrase(index) => format!("사진 문구 {} (최대 {}자)", index + 1, max_length),
        }
    }
}

/// 照片书文案表单
///
/// 所有文本字段的长度（按字符计）都不会超过 `max_length`。
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseForm {
    pub anniversary_date: String,
    pub cover_phrases: Vec<String>,
    pub phrases: Vec<String>,
    max_length: usize,
}

impl PhraseForm {
    pub fn new(max_length: usize) -> Self {
        Self {
            anniversary_date: String::new(),
            cover_phrases: vec![String::new(); COVER_PHRASE_COUNT],
            phrases: Vec::new(),
            max_length,
        }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// 分配 `count` 个空白文案
    pub fn allocate_phrases(&mut self, count: usize) {
        self.phrases = vec![String::new(); count];
    }

    /// 替换字段内容，超长或索引无效时丢弃，返回是否写入
    pub fn edit_field(&mut self, field: Field, value: String) -> bool {
        if value.chars().count() > self.max_length {
            return false;
        }
        match self.slot_mut(field) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::AnniversaryDate => Some(self.anniversary_date.as_str()),
            Field::Cover(index) => self.cover_phrases.get(index).map(String::as_str),
            Field::Phrase(index) => self.phrases.get(index).map(String::as_str),
        }
    }

    /// 按显示顺序列出所有输入框
    pub fn fields(&self) -> Vec<Field> {
        std::iter::once(Field::AnniversaryDate)
            .chain((0..self.cover_phrases.len()).map(Field::Cover))
            .chain((0..self.phrases.len()).map(Field::Phrase))
            .collect()
    }

    fn slot_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::AnniversaryDate => Some(&mut self.anniversary_date),
            Field::Cover(index) => self.cover_phrases.get_mut(index),
            Field::Phrase(index) => self.phrases.get_mut(index),
        }
    }
}

/// 字符数（不是字节数）
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
