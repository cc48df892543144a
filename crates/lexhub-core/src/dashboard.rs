//! Overview dashboard figures: headline stats and the jurisdiction matrix.

use crate::entry::Jurisdiction;

/// How a stat's trend label should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Neutral,
    Attention,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatItem {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
    pub tone: Tone,
}

pub const STATS: [StatItem; 4] = [
    StatItem {
        label: "Total Contributors",
        value: "142",
        trend: "+15%",
        tone: Tone::Positive,
    },
    StatItem {
        label: "Total Articles",
        value: "2,840",
        trend: "+8.2%",
        tone: Tone::Positive,
    },
    StatItem {
        label: "Jurisdictions",
        value: "14",
        trend: "Active",
        tone: Tone::Neutral,
    },
    StatItem {
        label: "Pending Reviews",
        value: "18",
        trend: "Action Req.",
        tone: Tone::Attention,
    },
];

/// Article counts for one practice area across jurisdictions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRow {
    pub area: &'static str,
    pub vietnam: u32,
    pub singapore: u32,
    pub thailand: u32,
}

impl MatrixRow {
    pub fn count(&self, jurisdiction: Jurisdiction) -> u32 {
        match jurisdiction {
            Jurisdiction::Vietnam => self.vietnam,
            Jurisdiction::Singapore => self.singapore,
            Jurisdiction::Thailand => self.thailand,
        }
    }
}

pub const MATRIX: [MatrixRow; 4] = [
    MatrixRow {
        area: "Labor & Employment",
        vietnam: 42,
        singapore: 128,
        thailand: 18,
    },
    MatrixRow {
        area: "Corporate & M&A",
        vietnam: 64,
        singapore: 215,
        thailand: 38,
    },
    MatrixRow {
        area: "Intellectual Property",
        vietnam: 12,
        singapore: 82,
        thailand: 4,
    },
    MatrixRow {
        area: "Data Privacy (GDPR/PDPA)",
        vietnam: 8,
        singapore: 96,
        thailand: 24,
    },
];

/// Coverage tier of a matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Density {
    Sparse,
    Low,
    Medium,
    High,
}

impl Density {
    pub fn of(count: u32) -> Self {
        match count {
            c if c > 100 => Self::High,
            c if c > 20 => Self::Medium,
            c if c > 5 => Self::Low,
            _ => Self::Sparse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_thresholds_are_exclusive() {
        assert_eq!(Density::of(101), Density::High);
        assert_eq!(Density::of(100), Density::Medium);
        assert_eq!(Density::of(21), Density::Medium);
        assert_eq!(Density::of(20), Density::Low);
        assert_eq!(Density::of(6), Density::Low);
        assert_eq!(Density::of(5), Density::Sparse);
        assert_eq!(Density::of(0), Density::Sparse);
    }

    #[test]
    fn matrix_count_by_jurisdiction() {
        let ip = &MATRIX[2];
        assert_eq!(ip.count(Jurisdiction::Vietnam), 12);
        assert_eq!(ip.count(Jurisdiction::Singapore), 82);
        assert_eq!(ip.count(Jurisdiction::Thailand), 4);
    }

    #[test]
    fn singapore_leads_every_area() {
        for row in &MATRIX {
            let sg = row.count(Jurisdiction::Singapore);
            assert!(Jurisdiction::ALL.iter().all(|&j| row.count(j) <= sg), "{}", row.area);
        }
    }
}
