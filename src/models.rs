use serde::{Deserialize, Serialize};

/// The three tracked habits. Fixed set; not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    AiKnowledge,
    Codebasics,
    Trading,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::AiKnowledge, Topic::Codebasics, Topic::Trading];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TopicFlags {
    #[serde(default)]
    pub ai_knowledge: bool,
    #[serde(default)]
    pub codebasics: bool,
    #[serde(default)]
    pub trading: bool,
}

impl TopicFlags {
    pub fn get(&self, topic: Topic) -> bool {
        match topic {
            Topic::AiKnowledge => self.ai_knowledge,
            Topic::Codebasics => self.codebasics,
            Topic::Trading => self.trading,
        }
    }

    pub fn set(&mut self, topic: Topic, value: bool) {
        match topic {
            Topic::AiKnowledge => self.ai_knowledge = value,
            Topic::Codebasics => self.codebasics = value,
            Topic::Trading => self.trading = value,
        }
    }

    pub fn is_fully_complete(&self) -> bool {
        Topic::ALL.iter().all(|&topic| self.get(topic))
    }
}

/// One per calendar day; `date` is the natural key ("YYYY-MM-DD").
/// The store does not guarantee uniqueness; readers de-duplicate
/// with last-write-wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub date: String,
    #[serde(flatten)]
    pub flags: TopicFlags,
}

impl CompletionRecord {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            flags: TopicFlags::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub completions: Vec<CompletionRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub topic: Topic,
    pub done: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: String,
    pub ai_knowledge: bool,
    pub codebasics: bool,
    pub trading: bool,
    pub all_complete: bool,
    pub streak: u32,
}

/// `celebrate` is edge-triggered: true only on the toggle that takes
/// today from not-all-complete to all-complete.
#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    #[serde(flatten)]
    pub today: TodayResponse,
    pub celebrate: bool,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DayCellView>,
}

/// Three-way calendar cell state, display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Future,
    Complete,
    Incomplete,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayCellView {
    pub day: u32,
    pub date: String,
    pub status: Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<TopicFlags>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StreakResponse {
    pub streak: u32,
}
