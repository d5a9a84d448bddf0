//! Dashboard sections, one module per sidebar entry.

pub mod annexes;
pub mod cases;
pub mod decision;
pub mod estimation;
pub mod failure;
pub mod home;
pub mod kpi;
pub mod modeling;
pub mod predictive;
pub mod resources;
pub mod risk;
pub mod software;

/// The twelve navigable sections, in sidebar order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    Estimation,
    Modeling,
    Failure,
    Software,
    Risk,
    Predictive,
    Kpi,
    Decision,
    Cases,
    Resources,
    Annexes,
}

impl Section {
    pub const ALL: [Self; 12] = [
        Self::Home,
        Self::Estimation,
        Self::Modeling,
        Self::Failure,
        Self::Software,
        Self::Risk,
        Self::Predictive,
        Self::Kpi,
        Self::Decision,
        Self::Cases,
        Self::Resources,
        Self::Annexes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Estimation => "Statistical Estimation",
            Self::Modeling => "Reliability Modeling",
            Self::Failure => "Failure Analysis",
            Self::Software => "Software & Human Reliability",
            Self::Risk => "Risk Analysis",
            Self::Predictive => "Predictive Maintenance",
            Self::Kpi => "KPI Dashboard",
            Self::Decision => "Data-Driven Decisions",
            Self::Cases => "Case Studies",
            Self::Resources => "Resources & Articles",
            Self::Annexes => "Annexes",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "🏠",
            Self::Estimation => "📈",
            Self::Modeling => "⚙",
            Self::Failure => "⚠",
            Self::Software => "💾",
            Self::Risk => "🎯",
            Self::Predictive => "📊",
            Self::Kpi => "⚡",
            Self::Decision => "📋",
            Self::Cases => "📖",
            Self::Resources => "📄",
            Self::Annexes => "⬇",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_sections_with_distinct_labels() {
        assert_eq!(Section::ALL.len(), 12);
        for (i, a) in Section::ALL.iter().enumerate() {
            for b in Section::ALL.iter().skip(i + 1) {
                assert_ne!(a.label(), b.label());
            }
        }
        assert_eq!(Section::default(), Section::Home);
    }
}
