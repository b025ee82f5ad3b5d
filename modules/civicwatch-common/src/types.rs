use serde::{Deserialize, Serialize};

// --- Geo Types ---

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Haversine great-circle distance between two points in kilometers.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();
    EARTH_RADIUS_KM * c
}

// --- Report Vocabulary ---

/// Suggested severity tier for an incoming report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// Report categories shared with the intake forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Pothole,
    Garbage,
    StreetLight,
    WaterLeak,
    Drainage,
    RoadDamage,
    Electricity,
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Pothole => write!(f, "pothole"),
            Category::Garbage => write!(f, "garbage"),
            Category::StreetLight => write!(f, "street_light"),
            Category::WaterLeak => write!(f, "water_leak"),
            Category::Drainage => write!(f, "drainage"),
            Category::RoadDamage => write!(f, "road_damage"),
            Category::Electricity => write!(f, "electricity"),
            Category::Other => write!(f, "other"),
        }
    }
}

/// Lifecycle state of a filed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Pending,
    Reviewed,
    Assigned,
    InProgress,
    Resolved,
    Rejected,
}

impl IssueStatus {
    /// Statuses still eligible for the duplicate scan. Resolved and rejected
    /// reports are never offered as duplicates of a new submission.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            IssueStatus::Pending
                | IssueStatus::Reviewed
                | IssueStatus::Assigned
                | IssueStatus::InProgress
        )
    }
}

impl std::fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueStatus::Pending => write!(f, "pending"),
            IssueStatus::Reviewed => write!(f, "reviewed"),
            IssueStatus::Assigned => write!(f, "assigned"),
            IssueStatus::InProgress => write!(f, "in_progress"),
            IssueStatus::Resolved => write!(f, "resolved"),
            IssueStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Title and description of a report, as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportText {
    pub title: String,
    pub description: String,
}

impl ReportText {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// The concatenated text used for similarity matching.
    pub fn full_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_sf_to_oakland() {
        // SF to Oakland is ~13km
        let sf = GeoPoint { lat: 37.7749, lng: -122.4194 };
        let oakland = GeoPoint { lat: 37.8044, lng: -122.2712 };
        let dist = haversine_km(sf, oakland);
        assert!(
            (dist - 13.0).abs() < 2.0,
            "SF to Oakland should be ~13km, got {dist}"
        );
    }

    #[test]
    fn haversine_sf_to_la() {
        // SF to LA is ~559km
        let sf = GeoPoint { lat: 37.7749, lng: -122.4194 };
        let la = GeoPoint { lat: 34.0522, lng: -118.2437 };
        let dist = haversine_km(sf, la);
        assert!(
            (dist - 559.0).abs() < 10.0,
            "SF to LA should be ~559km, got {dist}"
        );
    }

    #[test]
    fn haversine_same_point_is_zero() {
        let p = GeoPoint { lat: 44.9778, lng: -93.265 };
        let dist = haversine_km(p, p);
        assert!(dist < 0.001, "Same point should be 0km, got {dist}");
    }

    #[test]
    fn priority_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "\"low\"");
    }

    #[test]
    fn category_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Category::StreetLight).unwrap(),
            "\"street_light\""
        );
        assert_eq!(
            serde_json::to_string(&Category::RoadDamage).unwrap(),
            "\"road_damage\""
        );
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&IssueStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
    }

    #[test]
    fn open_statuses() {
        assert!(IssueStatus::Pending.is_open());
        assert!(IssueStatus::Reviewed.is_open());
        assert!(IssueStatus::Assigned.is_open());
        assert!(IssueStatus::InProgress.is_open());
        assert!(!IssueStatus::Resolved.is_open());
        assert!(!IssueStatus::Rejected.is_open());
    }

    #[test]
    fn full_text_concatenates_title_and_description() {
        let report = ReportText::new("Pothole", "Large pothole on Main St");
        assert_eq!(report.full_text(), "Pothole Large pothole on Main St");
    }

    #[test]
    fn display_matches_wire_format() {
        assert_eq!(Priority::High.to_string(), "high");
        assert_eq!(Category::StreetLight.to_string(), "street_light");
        assert_eq!(IssueStatus::InProgress.to_string(), "in_progress");
    }
}
