use serde::Deserialize;

/// Reading level of a guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// Returns color for the difficulty badge (hex code)
    pub fn color(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "#10b981",
            Difficulty::Intermediate => "#f59e0b",
            Difficulty::Advanced => "#ef4444",
        }
    }
}

/// An agricultural guide.
///
/// Backend rows only carry `title`, `topic` and `content`; `topic` is read
/// as the category and the remaining fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Guide {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    pub content: String,
    #[serde(alias = "topic", default)]
    pub category: String,
    #[serde(default)]
    pub read_time: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Guide {
    /// Case-insensitive substring match over title, content, category and tags.
    ///
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }

    pub fn category_icon(&self) -> &'static str {
        category_icon(&self.category)
    }
}

/// The guides returned for one search
#[derive(Debug, Clone, PartialEq)]
pub struct GuideResults {
    pub topic: String,
    pub guides: Vec<Guide>,
}

impl GuideResults {
    /// "Found 3 guides for \"soil\""
    pub fn summary(&self) -> String {
        let count = self.guides.len();
        let plural = if count == 1 { "" } else { "s" };
        let topic = self.topic.trim();

        if topic.is_empty() {
            format!("Found {count} guide{plural}")
        } else {
            format!("Found {count} guide{plural} for \"{topic}\"")
        }
    }
}

/// A shortcut chip shown above the guide search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopularTopic {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

pub const POPULAR_TOPICS: [PopularTopic; 6] = [
    PopularTopic { label: "Pest Control", value: "pest control", icon: "🐛" },
    PopularTopic { label: "Soil Management", value: "soil management", icon: "🌱" },
    PopularTopic { label: "Irrigation", value: "irrigation", icon: "💧" },
    PopularTopic { label: "Disease Control", value: "disease control", icon: "🔬" },
    PopularTopic { label: "Fertilizers", value: "fertilizers", icon: "🧪" },
    PopularTopic { label: "Post Harvest", value: "post harvest", icon: "🌾" },
];

pub fn category_icon(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "pest control" => "🐛",
        "soil management" => "🌱",
        "irrigation" => "💧",
        "disease control" => "🔬",
        "fertilizers" => "🧪",
        "post harvest" => "🌾",
        _ => "📖",
    }
}

/// Returns the guides matching `topic`, in catalog order.
///
/// A blank topic matches everything. The topic is lowercased but not
/// trimmed, so inner and outer spaces are part of the needle.
pub fn filter_guides(guides: &[Guide], topic: &str) -> Vec<Guide> {
    if topic.trim().is_empty() {
        return guides.to_vec();
    }

    let needle = topic.to_lowercase();
    guides.iter().filter(|g| g.matches(&needle)).cloned().collect()
}

fn guide(
    id: u32,
    title: &str,
    content: &str,
    category: &str,
    read_time: &str,
    difficulty: Difficulty,
    tags: &[&str],
) -> Guide {
    Guide {
        id,
        title: title.to_string(),
        content: content.to_string(),
        category: category.to_string(),
        read_time: Some(read_time.to_string()),
        difficulty,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
    }
}

/// The fixed in-memory guide catalog.
pub fn catalog() -> Vec<Guide> {
    vec![
        guide(
            1,
            "Integrated Pest Management for Wheat",
            "Learn effective strategies to control pests in wheat crops using sustainable methods. Includes identification, prevention, and treatment techniques.",
            "pest control",
            "5 min read",
            Difficulty::Beginner,
            &["wheat", "pests", "IPM", "sustainable"],
        ),
        guide(
            2,
            "Soil Health Management Practices",
            "Comprehensive guide on maintaining soil fertility through organic matter, crop rotation, and proper nutrient management.",
            "soil management",
            "8 min read",
            Difficulty::Intermediate,
            &["soil", "fertility", "organic", "rotation"],
        ),
        guide(
            3,
            "Water-Efficient Irrigation Techniques",
            "Modern irrigation methods to maximize water use efficiency including drip irrigation, sprinkler systems, and smart scheduling.",
            "irrigation",
            "6 min read",
            Difficulty::Intermediate,
            &["irrigation", "water", "efficiency", "drip"],
        ),
        guide(
            4,
            "Organic Fertilizer Application Guide",
            "Step-by-step instructions for preparing and applying organic fertilizers to improve crop yield naturally.",
            "fertilizers",
            "4 min read",
            Difficulty::Beginner,
            &["organic", "fertilizer", "yield", "natural"],
        ),
        guide(
            5,
            "Disease Prevention in Rice Cultivation",
            "Identify and prevent common rice diseases through proper field management, resistant varieties, and timely interventions.",
            "disease control",
            "7 min read",
            Difficulty::Advanced,
            &["rice", "disease", "prevention", "varieties"],
        ),
        guide(
            6,
            "Post-Harvest Storage Best Practices",
            "Essential techniques for proper grain storage to minimize losses and maintain quality during storage periods.",
            "post harvest",
            "5 min read",
            Difficulty::Beginner,
            &["storage", "grain", "quality", "losses"],
        ),
    ]
}
