//! Static catalog of forms and subjects offered by the tutor

use serde::Serialize;

/// Subjects with dedicated starters and background text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
    Mathematics,
    Science,
    English,
    BahasaMelayu,
    Sejarah,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Mathematics,
        Subject::Science,
        Subject::English,
        Subject::BahasaMelayu,
        Subject::Sejarah,
    ];

    /// Look up a subject by its route key, e.g. `bahasa-melayu`
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            Subject::Mathematics => "mathematics",
            Subject::Science => "science",
            Subject::English => "english",
            Subject::BahasaMelayu => "bahasa-melayu",
            Subject::Sejarah => "sejarah",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Science => "Science",
            Subject::English => "English",
            Subject::BahasaMelayu => "Bahasa Melayu",
            Subject::Sejarah => "Sejarah",
        }
    }

    /// Short background paragraph appended to the tutor instruction
    pub fn background(self) -> &'static str {
        match self {
            Subject::Mathematics => "This is a helper for Mathematics subject. Mathematics is the study of numbers, quantities, and shapes. Key topics include algebra, geometry, calculus, and statistics.",
            Subject::Science => "This is a helper for Science subject. Science covers physics, chemistry, and biology. Key concepts include forces, matter, energy, cells, and ecosystems.",
            Subject::English => "This is a helper for English subject. English is a West Germanic language that originated from Anglo-Frisian languages brought to Britain in the mid 5th to 7th centuries AD.",
            Subject::BahasaMelayu => "Ini adalah bantuan untuk subjek Bahasa Melayu. Bahasa Melayu adalah bahasa kebangsaan Malaysia dan merupakan bahasa rasmi negara. Ia juga dikenali sebagai Bahasa Malaysia.",
            Subject::Sejarah => "Ini adalah bantuan untuk subjek Sejarah. Sejarah adalah kajian tentang peristiwa masa lalu, terutamanya berkenaan dengan manusia, negara, dan masyarakat.",
        }
    }
}

/// Catalog entry for a subject
#[derive(Debug, Clone, Serialize)]
pub struct SubjectInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub description: String,
}

/// Catalog entry for a form (grade level)
#[derive(Debug, Clone, Serialize)]
pub struct FormInfo {
    pub id: String,
    pub title: String,
    pub description: String,
}

pub fn subject_catalog() -> Vec<SubjectInfo> {
    Subject::ALL
        .into_iter()
        .map(|s| SubjectInfo {
            id: s.id(),
            title: s.title(),
            description: format!("Get AI help with your {} studies", s.title()),
        })
        .collect()
}

pub fn form_catalog() -> Vec<FormInfo> {
    (1..=5)
        .map(|n| {
            let title = format!("Form {n}");
            FormInfo {
                id: n.to_string(),
                description: format!("AI tutor tailored for {title} curriculum"),
                title,
            }
        })
        .collect()
}
