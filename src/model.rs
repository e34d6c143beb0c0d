//! Core data models for CrowdSense: monitored regions, their occupancy
//! snapshots, and the series fed into the chart components.

use serde::Serialize;

/// Severity of a region's congestion status. Assigned when the sample data
/// is constructed, so the UI never has to pattern-match on label text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Severity {
    Critical,
    Warning,
    Normal,
    /// Closed / no data (e.g. an emptied auditorium).
    Muted,
}

impl Severity {
    /// Ingestion shim for feeds that only carry a free-form status label.
    /// Substring match, case-sensitive, mirroring the legacy dashboard's
    /// mapping. New data should set `Severity` directly instead.
    pub fn classify(status: &str) -> Severity {
        if status.contains("High") {
            Severity::Critical
        } else if status.contains("Moderate") {
            Severity::Warning
        } else {
            Severity::Normal
        }
    }

    /// Marker / badge color for this severity.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Critical => "#ef4444",
            Severity::Warning => "#f59e0b",
            Severity::Normal => "#22c55e",
            Severity::Muted => "#9ca3af",
        }
    }

    pub fn badge_label(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Warning => "Warning",
            Severity::Normal => "Normal",
            Severity::Muted => "Closed",
        }
    }
}

/// Dominant device type seen in a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DeviceType {
    Mobile,
    Laptop,
    Wearable,
    None,
}

impl DeviceType {
    pub fn label(self) -> &'static str {
        match self {
            DeviceType::Mobile => "Mobile",
            DeviceType::Laptop => "Laptop",
            DeviceType::Wearable => "Wearable",
            DeviceType::None => "None",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DeviceType::Mobile => "📱",
            DeviceType::Laptop => "💻",
            DeviceType::Wearable => "⌚",
            DeviceType::None => "▫",
        }
    }
}

/// Number of samples in a region's occupancy trend. Index 6 is the live
/// sample; later indices are predictions.
pub const TREND_LEN: usize = 9;
/// Index of the live ("Now") sample within a trend.
pub const TREND_NOW_INDEX: usize = 6;

/// A monitored physical zone. Sample data is immutable; selecting a region
/// only changes UI highlight, never the entity.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Region {
    pub id: &'static str,
    pub name: &'static str,
    /// Marker anchor as percentages of the map surface.
    pub x_pct: f64,
    pub y_pct: f64,
    pub capacity: u32,
    pub current: u32,
    pub status: &'static str,
    pub severity: Severity,
    pub peak: &'static str,
    pub dwell: &'static str,
    pub device: DeviceType,
    /// 9 occupancy percentage samples (history + prediction).
    pub trend: [u32; TREND_LEN],
}

impl Region {
    /// Occupancy as a rounded percentage of capacity.
    pub fn load_percent(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        ((self.current as f64 / self.capacity as f64) * 100.0).round() as u32
    }
}

/// Capability the views pull their region data from, so a real sensing
/// backend can replace the compiled-in samples without touching the UI.
pub trait RegionProvider {
    fn regions(&self) -> Vec<Region>;
}

/// The mock dataset standing in for a sensing backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct SampleRegions;

impl RegionProvider for SampleRegions {
    fn regions(&self) -> Vec<Region> {
        vec![
            Region {
                id: "lib",
                name: "Main Library",
                x_pct: 35.0,
                y_pct: 45.0,
                capacity: 500,
                current: 425,
                status: "High Congestion",
                severity: Severity::Critical,
                peak: "2:00 PM",
                dwell: "45 mins",
                device: DeviceType::Mobile,
                trend: [40, 60, 45, 70, 55, 80, 95, 85, 65],
            },
            Region {
                id: "canteen",
                name: "Student Canteen",
                x_pct: 60.0,
                y_pct: 55.0,
                capacity: 200,
                current: 120,
                status: "Moderate",
                severity: Severity::Warning,
                peak: "1:00 PM",
                dwell: "30 mins",
                device: DeviceType::Mobile,
                trend: [20, 30, 50, 80, 90, 70, 60, 40, 30],
            },
            Region {
                id: "labs",
                name: "Science Labs",
                x_pct: 25.0,
                y_pct: 65.0,
                capacity: 150,
                current: 45,
                status: "Low Activity",
                severity: Severity::Normal,
                peak: "11:00 AM",
                dwell: "120 mins",
                device: DeviceType::Laptop,
                trend: [10, 20, 40, 50, 40, 30, 20, 10, 5],
            },
            Region {
                id: "sports",
                name: "Sports Complex",
                x_pct: 75.0,
                y_pct: 30.0,
                capacity: 300,
                current: 80,
                status: "Low Activity",
                severity: Severity::Normal,
                peak: "5:00 PM",
                dwell: "60 mins",
                device: DeviceType::Wearable,
                trend: [5, 10, 15, 20, 25, 40, 60, 80, 90],
            },
            Region {
                id: "audi",
                name: "Auditorium",
                x_pct: 50.0,
                y_pct: 20.0,
                capacity: 1000,
                current: 50,
                status: "Closed",
                severity: Severity::Muted,
                peak: "10:00 AM",
                dwell: "0 mins",
                device: DeviceType::None,
                trend: [0; TREND_LEN],
            },
        ]
    }
}

// --- Chart series -----------------------------------------------------------

/// One plotted series: data points plus style options.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    pub color: &'static str,
    /// Fill under the line with a vertical gradient of `color`.
    pub fill: bool,
    pub dashed: bool,
    pub hidden: bool,
}

/// Labels/datasets bundle consumed by the canvas chart component.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<Dataset>,
}

/// Hourly campus totals for the overview chart (actual vs predicted).
pub fn campus_overview_chart(show_actual: bool, show_predicted: bool) -> ChartData {
    ChartData {
        labels: vec![
            "8:00", "9:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00",
        ],
        datasets: vec![
            Dataset {
                label: "Actual",
                data: vec![
                    650.0, 800.0, 1200.0, 1450.0, 1600.0, 1550.0, 1400.0, 1200.0, 950.0, 800.0,
                ],
                color: "#3b82f6",
                fill: true,
                dashed: false,
                hidden: !show_actual,
            },
            Dataset {
                label: "Predicted",
                data: vec![
                    600.0, 850.0, 1150.0, 1500.0, 1650.0, 1600.0, 1450.0, 1250.0, 1000.0, 850.0,
                ],
                color: "#9ca3af",
                fill: false,
                dashed: true,
                hidden: !show_predicted,
            },
        ],
    }
}

/// 24-hour crowd forecast with the projected capacity limit.
pub fn forecast_chart() -> ChartData {
    ChartData {
        labels: vec![
            "00:00", "02:00", "04:00", "06:00", "08:00", "10:00", "12:00", "14:00", "16:00",
            "18:00", "20:00", "22:00",
        ],
        datasets: vec![
            Dataset {
                label: "Predicted Crowd Density",
                data: vec![
                    150.0, 100.0, 50.0, 200.0, 800.0, 1200.0, 1400.0, 1350.0, 1100.0, 900.0,
                    600.0, 300.0,
                ],
                color: "#9333ea",
                fill: true,
                dashed: false,
                hidden: false,
            },
            Dataset {
                label: "Projected Capacity Limit",
                data: vec![1500.0; 12],
                color: "#ef4444",
                fill: false,
                dashed: true,
                hidden: false,
            },
        ],
    }
}

/// Today-vs-yesterday totals for the comparison bar chart.
pub fn comparison_chart() -> ChartData {
    ChartData {
        labels: vec!["8 AM", "10 AM", "12 PM", "2 PM", "4 PM", "6 PM", "8 PM"],
        datasets: vec![
            Dataset {
                label: "Today",
                data: vec![800.0, 1200.0, 1400.0, 1350.0, 1100.0, 900.0, 600.0],
                color: "#3b82f6",
                fill: false,
                dashed: false,
                hidden: false,
            },
            Dataset {
                label: "Yesterday",
                data: vec![750.0, 1150.0, 1300.0, 1250.0, 1050.0, 850.0, 550.0],
                color: "#9ca3af",
                fill: false,
                dashed: false,
                hidden: false,
            },
        ],
    }
}

/// Inter-region movement shown as flow arrows on the reports heatmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowIntensity {
    Low,
    Medium,
    High,
}

impl FlowIntensity {
    pub fn color(self) -> &'static str {
        match self {
            FlowIntensity::Low => "#22c55e",
            FlowIntensity::Medium => "#f59e0b",
            FlowIntensity::High => "#ef4444",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flow {
    pub from: &'static str,
    pub to: &'static str,
    pub intensity: FlowIntensity,
}

pub fn sample_flows() -> Vec<Flow> {
    vec![
        Flow { from: "labs", to: "lib", intensity: FlowIntensity::Medium },
        Flow { from: "lib", to: "canteen", intensity: FlowIntensity::High },
        Flow { from: "sports", to: "audi", intensity: FlowIntensity::Low },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_percent_rounds() {
        let mut region = SampleRegions.regions()[0].clone();
        region.current = 425;
        region.capacity = 500;
        assert_eq!(region.load_percent(), 85);
        region.current = 1;
        region.capacity = 3;
        assert_eq!(region.load_percent(), 33);
        region.capacity = 0;
        assert_eq!(region.load_percent(), 0);
    }

    #[test]
    fn legacy_labels_classify_by_substring() {
        assert_eq!(Severity::classify("High Congestion"), Severity::Critical);
        assert_eq!(Severity::classify("Moderate"), Severity::Warning);
        assert_eq!(Severity::classify("Low Activity"), Severity::Normal);
        assert_eq!(Severity::classify("Closed"), Severity::Normal);
        // case-sensitive, as the legacy dashboard behaved
        assert_eq!(Severity::classify("high"), Severity::Normal);
    }

    #[test]
    fn sample_regions_are_well_formed() {
        let regions = SampleRegions.regions();
        assert_eq!(regions.len(), 5);
        let mut ids: Vec<_> = regions.iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        for r in &regions {
            assert_eq!(r.trend.len(), TREND_LEN);
            assert!(r.capacity > 0);
            assert!((0.0..=100.0).contains(&r.x_pct));
            assert!((0.0..=100.0).contains(&r.y_pct));
        }
    }

    #[test]
    fn explicit_severity_matches_the_legacy_classifier_for_open_regions() {
        for r in SampleRegions.regions() {
            if r.severity != Severity::Muted {
                assert_eq!(r.severity, Severity::classify(r.status), "{}", r.id);
            }
        }
    }

    #[test]
    fn chart_builders_keep_labels_and_data_aligned() {
        for chart in [
            campus_overview_chart(true, true),
            forecast_chart(),
            comparison_chart(),
        ] {
            assert!(!chart.datasets.is_empty());
            for ds in &chart.datasets {
                assert_eq!(ds.data.len(), chart.labels.len(), "{}", ds.label);
            }
        }
    }

    #[test]
    fn overview_toggles_hide_series() {
        let chart = campus_overview_chart(true, false);
        assert!(!chart.datasets[0].hidden);
        assert!(chart.datasets[1].hidden);
    }

    #[test]
    fn flows_reference_known_regions() {
        let regions = SampleRegions.regions();
        for flow in sample_flows() {
            assert!(regions.iter().any(|r| r.id == flow.from));
            assert!(regions.iter().any(|r| r.id == flow.to));
        }
    }
}
