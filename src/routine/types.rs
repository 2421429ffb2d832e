//! 학습 루틴 데이터 타입

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// 최근 학습한 항목 ID 집합 (포함 여부 검사용)
pub type RecentIdSet = HashSet<String>;

/// 학습 항목 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Words,
    Sentences,
    Grammar,
    Dialogs,
}

impl Category {
    /// 고정된 4개 분류 (출력 순서)
    pub const ALL: [Category; 4] = [
        Category::Words,
        Category::Sentences,
        Category::Grammar,
        Category::Dialogs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Words => "words",
            Category::Sentences => "sentences",
            Category::Grammar => "grammar",
            Category::Dialogs => "dialogs",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 학습 항목 (단어, 문장, 문법, 회화)
///
/// 선택 로직은 ID만 사용하며 나머지 필드는 호출자가 해석
pub trait ContentItem {
    fn id(&self) -> &str;
}

impl ContentItem for String {
    fn id(&self) -> &str {
        self
    }
}

impl ContentItem for &str {
    fn id(&self) -> &str {
        self
    }
}

/// ID 외의 필드를 그대로 보존하는 범용 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyItem {
    pub id: String,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl StudyItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: serde_json::Map::new(),
        }
    }
}

impl ContentItem for StudyItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// 분류별 항목 풀. 누락된 분류는 빈 풀
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutinePools<T> {
    pub words: Vec<T>,
    pub sentences: Vec<T>,
    pub grammar: Vec<T>,
    pub dialogs: Vec<T>,
}

impl<T> Default for RoutinePools<T> {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            sentences: Vec::new(),
            grammar: Vec::new(),
            dialogs: Vec::new(),
        }
    }
}

impl<T> RoutinePools<T> {
    pub fn get(&self, category: Category) -> &[T] {
        match category {
            Category::Words => &self.words,
            Category::Sentences => &self.sentences,
            Category::Grammar => &self.grammar,
            Category::Dialogs => &self.dialogs,
        }
    }
}

/// 분류별 하루 목표 개수
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoutineCounts {
    #[serde(default = "default_word_count")]
    pub word_count: usize,
    #[serde(default = "default_sentence_count")]
    pub sentence_count: usize,
    #[serde(default = "default_grammar_count")]
    pub grammar_count: usize,
    #[serde(default = "default_dialog_count")]
    pub dialog_count: usize,
}

fn default_word_count() -> usize {
    6
}

fn default_sentence_count() -> usize {
    3
}

fn default_grammar_count() -> usize {
    1
}

fn default_dialog_count() -> usize {
    1
}

impl Default for RoutineCounts {
    fn default() -> Self {
        Self {
            word_count: default_word_count(),
            sentence_count: default_sentence_count(),
            grammar_count: default_grammar_count(),
            dialog_count: default_dialog_count(),
        }
    }
}

impl RoutineCounts {
    pub fn new(words: usize, sentences: usize, grammar: usize, dialogs: usize) -> Self {
        Self {
            word_count: words,
            sentence_count: sentences,
            grammar_count: grammar,
            dialog_count: dialogs,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Words => self.word_count,
            Category::Sentences => self.sentence_count,
            Category::Grammar => self.grammar_count,
            Category::Dialogs => self.dialog_count,
        }
    }
}

/// 오늘의 학습 계획: 분류별 선택된 항목 ID
///
/// 4개 분류가 항상 존재 (비어 있을 수 있음)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutinePlan {
    pub words: Vec<String>,
    pub sentences: Vec<String>,
    pub grammar: Vec<String>,
    pub dialogs: Vec<String>,
}

impl RoutinePlan {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Words => &self.words,
            Category::Sentences => &self.sentences,
            Category::Grammar => &self.grammar,
            Category::Dialogs => &self.dialogs,
        }
    }

    pub(crate) fn set(&mut self, category: Category, ids: Vec<String>) {
        match category {
            Category::Words => self.words = ids,
            Category::Sentences => self.sentences = ids,
            Category::Grammar => self.grammar = ids,
            Category::Dialogs => self.dialogs = ids,
        }
    }

    /// 전체 선택 항목 수
    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
