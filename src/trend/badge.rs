use serde::{Deserialize, Serialize};

/// Performance-trend classes, one per badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendKind {
    New,
    OnFire,
    Solid,
    Rising,
    Struggling,
    OnTrack,
    Stable,
}

/// Presentation payload for a trend class. Derived on every query, never
/// stored.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceBadge {
    #[serde(rename = "type")]
    pub kind: TrendKind,
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

impl TrendKind {
    pub fn badge(self) -> PerformanceBadge {
        let (label, color, icon) = match self {
            TrendKind::New => ("New Player", "#9E9E9E", "🌱"),
            TrendKind::OnFire => ("On Fire", "#F44336", "🔥"),
            TrendKind::Solid => ("Strong Season", "#4CAF50", "⭐"),
            TrendKind::Rising => ("Trending Up", "#2196F3", "📈"),
            TrendKind::Struggling => ("Finding Form", "#FF9800", "📉"),
            TrendKind::OnTrack => ("On Track", "#00BCD4", "🎯"),
            TrendKind::Stable => ("Steady", "#9E9E9E", "➖"),
        };
        PerformanceBadge {
            kind: self,
            label,
            color,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_kinds_serialize_in_kebab_case() {
        let tagged = serde_json::to_string(&TrendKind::OnFire).unwrap();
        assert_eq!(tagged, "\"on-fire\"");

        let badge = serde_json::to_value(TrendKind::New.badge()).unwrap();
        assert_eq!(badge["type"], "new");
        assert_eq!(badge["label"], "New Player");
        assert_eq!(badge["color"], "#9E9E9E");
    }
}
