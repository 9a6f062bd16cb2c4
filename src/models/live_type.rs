use serde::{Deserialize, Serialize};

/// Kind of live performance a clip was recorded at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LiveType {
    /// Voice-actor concert
    #[default]
    Seiyuu,
    /// Motion-capture (MR) live
    Mr,
    Other,
}

impl LiveType {
    /// All variants in declaration order
    pub const ALL: [LiveType; 3] = [LiveType::Seiyuu, LiveType::Mr, LiveType::Other];

    /// Canonical display string, also used for text matching
    pub fn display_str(self) -> &'static str {
        match self {
            LiveType::Seiyuu => "声優ライブ",
            LiveType::Mr => "MRライブ",
            LiveType::Other => "その他",
        }
    }

    /// Resolve a display string back to its variant (exact match)
    pub fn from_display(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.display_str() == label)
    }
}

impl std::fmt::Display for LiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_str())
    }
}
